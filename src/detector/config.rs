use crate::Confidence;

/// Filtering applied to raw detections before they reach the referee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    max_hands: usize,
    min_confidence: Confidence,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_hands: crate::MAX_HANDS,
            min_confidence: crate::MIN_DETECTION_CONFIDENCE,
        }
    }
}

impl DetectorConfig {
    pub fn new(max_hands: usize, min_confidence: Confidence) -> anyhow::Result<Self> {
        match (max_hands, min_confidence) {
            (0, _) => Err(anyhow::anyhow!("max hands must be at least 1")),
            (_, c) if !(0.0..=1.0).contains(&c) => {
                Err(anyhow::anyhow!("min confidence {} outside [0, 1]", c))
            }
            (n, c) => Ok(Self {
                max_hands: n,
                min_confidence: c,
            }),
        }
    }
    pub fn max_hands(&self) -> usize {
        self.max_hands
    }
    pub fn min_confidence(&self) -> Confidence {
        self.min_confidence
    }
}

impl std::fmt::Display for DetectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "max {} hand(s) at confidence >= {:.2}",
            self.max_hands, self.min_confidence
        )
    }
}
