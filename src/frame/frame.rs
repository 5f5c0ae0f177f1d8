use crate::Pixel;
use crate::hands::Landmarks;

/// Everything the detector reported for one video frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    hands: Vec<Landmarks>,
    width: Pixel,
    height: Pixel,
}

impl Frame {
    pub fn new(hands: Vec<Landmarks>, width: Pixel, height: Pixel) -> Self {
        Self {
            hands,
            width,
            height,
        }
    }
    pub fn hands(&self) -> &[Landmarks] {
        &self.hands
    }
    pub fn width(&self) -> Pixel {
        self.width
    }
    pub fn height(&self) -> Pixel {
        self.height
    }
    /// Column splitting P1 (left) from P2.
    pub fn midline(&self) -> Pixel {
        self.width / 2
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{} with {} hand(s)", self.width, self.height, self.hands.len())
    }
}
