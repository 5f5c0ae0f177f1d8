use crate::Pixel;

/// Player 1 and Player 2
///
/// Not an identity. A hand is seated anew each frame by which half
/// of the frame its wrist falls in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Slot {
    P1,
    P2,
}

impl Slot {
    pub const fn all() -> [Self; 2] {
        [Self::P1, Self::P2]
    }
    pub const fn other(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
    /// Left of the midline is P1. The midline itself belongs to P2.
    pub const fn from_wrist(x: Pixel, width: Pixel) -> Self {
        if x < width / 2 { Self::P1 } else { Self::P2 }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
        }
    }
}
