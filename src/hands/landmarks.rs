use super::finger::Finger;
use super::fingers::Fingers;
use super::landmark::*;
use crate::Arbitrary;
use crate::N_LANDMARKS;
use crate::Pixel;

/// The landmark set for one detected hand.
///
/// Either empty (no hand) or exactly [`N_LANDMARKS`] points ordered by id,
/// each id present once. The only way in is through validation, so
/// every accessor may index by id without checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Landmarks(Vec<Landmark>);

impl Landmarks {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// The landmark with the given id, if the hand is present.
    pub fn get(&self, id: u8) -> Option<&Landmark> {
        self.0.get(id as usize)
    }
    pub fn wrist(&self) -> Option<&Landmark> {
        self.get(WRIST)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.0.iter()
    }

    /// Scale detector output from normalized [0, 1] frame coordinates
    /// into whole pixels. The product is taken in f64 so values just
    /// under a pixel boundary truncate down rather than rounding up
    /// in f32 first. Ids follow point order.
    pub fn from_normalized(points: &[(f32, f32)], width: Pixel, height: Pixel) -> anyhow::Result<Self> {
        points
            .iter()
            .enumerate()
            .map(|(id, (x, y))| {
                Landmark::from((
                    id as u8,
                    (*x as f64 * width as f64) as Pixel,
                    (*y as f64 * height as f64) as Pixel,
                ))
            })
            .collect::<Vec<Landmark>>()
            .try_into()
    }
}

/// Vec<Landmark> validation. Sorted by id, then every id in 0..21
/// must sit at its own index.
impl TryFrom<Vec<Landmark>> for Landmarks {
    type Error = anyhow::Error;
    fn try_from(mut landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        match landmarks.len() {
            0 => Ok(Self::empty()),
            N_LANDMARKS => {
                landmarks.sort_by_key(Landmark::id);
                match landmarks
                    .iter()
                    .enumerate()
                    .find(|(i, landmark)| landmark.id() as usize != *i)
                {
                    None => Ok(Self(landmarks)),
                    Some((i, landmark)) => Err(anyhow::anyhow!(
                        "invalid input: landmark id {} at position {}, ids must be unique in 0..{}",
                        landmark.id(),
                        i,
                        N_LANDMARKS
                    )),
                }
            }
            n => Err(anyhow::anyhow!(
                "invalid input: expected 0 or {} landmarks, got {}",
                N_LANDMARKS,
                n
            )),
        }
    }
}

impl From<Landmarks> for Vec<Landmark> {
    fn from(landmarks: Landmarks) -> Self {
        landmarks.0
    }
}

/// Synthetic upright right hand, palm to the camera, wrist at the given
/// column. Joints stack straight up; a folded finger drops its tip below
/// the base of the finger, a folded thumb crosses left of its IP joint.
impl From<(Fingers, Pixel)> for Landmarks {
    fn from((fingers, wrist): (Fingers, Pixel)) -> Self {
        Self(
            (0..N_LANDMARKS as u8)
                .map(|id| match id {
                    THUMB_TIP if fingers.is_extended(Finger::Thumb) => (id, wrist + 10, 300),
                    THUMB_TIP => (id, wrist - 10, 300),
                    _ if id % 4 == 0 && id > 0 && fingers.is_extended(Finger::from(id as usize / 4 - 1)) => {
                        (id, wrist, 100)
                    }
                    _ if id % 4 == 0 && id > 0 => (id, wrist, 450),
                    _ => (id, wrist, 400 - id as Pixel),
                })
                .map(Landmark::from)
                .collect(),
        )
    }
}

impl Arbitrary for Landmarks {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self(
            (0..N_LANDMARKS as u8)
                .map(|id| Landmark::from((id, rng.random_range(0..640), rng.random_range(0..480))))
                .collect(),
        )
    }
}

impl std::fmt::Display for Landmarks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.wrist() {
            None => write!(f, "(no hand)"),
            Some(wrist) => write!(f, "hand {}", wrist),
        }
    }
}
