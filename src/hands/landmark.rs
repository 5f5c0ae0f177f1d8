use crate::Pixel;

pub const WRIST: u8 = 0;
pub const THUMB_CMC: u8 = 1;
pub const THUMB_MCP: u8 = 2;
pub const THUMB_IP: u8 = 3;
pub const THUMB_TIP: u8 = 4;
pub const INDEX_MCP: u8 = 5;
pub const INDEX_PIP: u8 = 6;
pub const INDEX_DIP: u8 = 7;
pub const INDEX_TIP: u8 = 8;
pub const MIDDLE_MCP: u8 = 9;
pub const MIDDLE_PIP: u8 = 10;
pub const MIDDLE_DIP: u8 = 11;
pub const MIDDLE_TIP: u8 = 12;
pub const RING_MCP: u8 = 13;
pub const RING_PIP: u8 = 14;
pub const RING_DIP: u8 = 15;
pub const RING_TIP: u8 = 16;
pub const PINKY_MCP: u8 = 17;
pub const PINKY_PIP: u8 = 18;
pub const PINKY_DIP: u8 = 19;
pub const PINKY_TIP: u8 = 20;

/// A single tracked keypoint on a hand skeleton.
///
/// `id` names the joint (see the constants above), `x` and `y` are
/// frame pixels with the origin at the top-left, so "up" is smaller `y`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Landmark {
    id: u8,
    x: Pixel,
    y: Pixel,
}

impl Landmark {
    pub fn id(&self) -> u8 {
        self.id
    }
    pub fn x(&self) -> Pixel {
        self.x
    }
    pub fn y(&self) -> Pixel {
        self.y
    }
}

/// (id, x, y) isomorphism
impl From<(u8, Pixel, Pixel)> for Landmark {
    fn from((id, x, y): (u8, Pixel, Pixel)) -> Self {
        Self { id, x, y }
    }
}
impl From<Landmark> for (u8, Pixel, Pixel) {
    fn from(landmark: Landmark) -> Self {
        (landmark.id, landmark.x, landmark.y)
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>2}@({},{})", self.id, self.x, self.y)
    }
}
