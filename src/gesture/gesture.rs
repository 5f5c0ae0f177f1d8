use crate::Arbitrary;
use crate::hands::Finger;
use crate::hands::Fingers;

/// A classified hand pose.
///
/// `Unknown` is a real outcome, not an error: any finger
/// configuration outside the three throws lands here.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

impl Gesture {
    pub const fn all() -> [Self; 4] {
        [Self::Rock, Self::Paper, Self::Scissors, Self::Unknown]
    }
    pub const fn throws() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
    /// Rock > Scissors > Paper > Rock. `Unknown` neither wins nor loses.
    pub fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }
}

/// classification, first match wins
impl From<Fingers> for Gesture {
    fn from(fingers: Fingers) -> Self {
        if fingers.none_extended() {
            Self::Rock
        } else if fingers.all_extended() {
            Self::Paper
        } else if fingers.is_extended(Finger::Index)
            && fingers.is_extended(Finger::Middle)
            && !fingers.is_extended(Finger::Thumb)
            && !fingers.is_extended(Finger::Ring)
            && !fingers.is_extended(Finger::Pinky)
        {
            Self::Scissors
        } else {
            Self::Unknown
        }
    }
}

/// absent hand reads as unrecognized
impl From<Option<Fingers>> for Gesture {
    fn from(fingers: Option<Fingers>) -> Self {
        fingers.map(Self::from).unwrap_or(Self::Unknown)
    }
}

impl Arbitrary for Gesture {
    fn random() -> Self {
        use rand::Rng;
        Self::all()[rand::rng().random_range(0..4)]
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
