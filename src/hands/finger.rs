use crate::N_FINGERS;
use crate::TIP_IDS;

/// One of the five digits, in canonical order thumb → pinky.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub const fn all() -> [Self; N_FINGERS] {
        [Self::Thumb, Self::Index, Self::Middle, Self::Ring, Self::Pinky]
    }
    /// Landmark id of the fingertip.
    pub const fn tip(&self) -> u8 {
        TIP_IDS[*self as usize]
    }
    /// Landmark id the tip is compared against. The thumb bends sideways,
    /// so it is checked against its adjacent joint; the others against
    /// the joint two steps down the chain.
    pub const fn reference(&self) -> u8 {
        match self {
            Self::Thumb => self.tip() - 1,
            _ => self.tip() - 2,
        }
    }
}

/// usize isomorphism
impl From<usize> for Finger {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Thumb,
            1 => Self::Index,
            2 => Self::Middle,
            3 => Self::Ring,
            4 => Self::Pinky,
            _ => panic!("Invalid finger usize: {}", n),
        }
    }
}
impl From<Finger> for usize {
    fn from(finger: Finger) -> usize {
        finger as usize
    }
}
