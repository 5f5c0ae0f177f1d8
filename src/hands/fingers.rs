use super::finger::Finger;
use super::landmarks::Landmarks;
use crate::Arbitrary;
use crate::N_FINGERS;

/// Which fingers are extended, indexed thumb → pinky.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fingers([bool; N_FINGERS]);

impl Fingers {
    /// Read finger states off a hand skeleton. `None` for an empty
    /// landmark set, which is not the same as a closed fist.
    ///
    /// The thumb counts as extended when its tip lies to the right of
    /// its IP joint. That only holds for a right hand with the palm to
    /// the camera; left or rotated hands read wrong and are not corrected.
    /// The other fingers are extended when the tip sits strictly above
    /// the PIP joint.
    pub fn extract(hand: &Landmarks) -> Option<Self> {
        let mut states = [false; N_FINGERS];
        for finger in Finger::all() {
            let tip = hand.get(finger.tip())?;
            let joint = hand.get(finger.reference())?;
            states[usize::from(finger)] = match finger {
                Finger::Thumb => tip.x() > joint.x(),
                _ => tip.y() < joint.y(),
            };
        }
        log::trace!("{} -> {:?}", hand, states);
        Some(Self(states))
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.0[usize::from(finger)]
    }
    pub fn count(&self) -> usize {
        self.0.iter().filter(|up| **up).count()
    }
    pub fn all_extended(&self) -> bool {
        self.0.iter().all(|up| *up)
    }
    pub fn none_extended(&self) -> bool {
        self.0.iter().all(|up| !*up)
    }
    /// Every one of the 32 possible states.
    pub fn exhaust() -> impl Iterator<Item = Self> {
        (0u8..1 << N_FINGERS).map(Self::from)
    }
}

/// [bool; 5] isomorphism
impl From<[bool; N_FINGERS]> for Fingers {
    fn from(states: [bool; N_FINGERS]) -> Self {
        Self(states)
    }
}
impl From<Fingers> for [bool; N_FINGERS] {
    fn from(fingers: Fingers) -> Self {
        fingers.0
    }
}

/// u8 isomorphism
///
/// bit i set means finger i extended, thumb in the LSB
impl From<u8> for Fingers {
    fn from(mask: u8) -> Self {
        Self(std::array::from_fn(|i| mask & (1u8 << i) != 0))
    }
}
impl From<Fingers> for u8 {
    fn from(fingers: Fingers) -> Self {
        fingers
            .0
            .iter()
            .enumerate()
            .filter(|(_, up)| **up)
            .fold(0u8, |mask, (i, _)| mask | 1u8 << i)
    }
}

impl Arbitrary for Fingers {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0u8..1 << N_FINGERS))
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for up in self.0 {
            write!(f, "{}", if up { 1 } else { 0 })?;
        }
        Ok(())
    }
}
