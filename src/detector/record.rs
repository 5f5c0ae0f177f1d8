use super::config::DetectorConfig;
use crate::Confidence;
use crate::Pixel;
use crate::frame::Frame;
use crate::hands::Landmarks;

/// One detected hand as the landmark model emits it: a confidence
/// and 21 points normalized to the frame, `[x, y]` in [0, 1].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Detection {
    #[serde(default = "Detection::certain")]
    score: Confidence,
    points: Vec<(f32, f32)>,
}

impl Detection {
    fn certain() -> Confidence {
        1.0
    }
    pub fn score(&self) -> Confidence {
        self.score
    }
    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }
}

impl From<(Confidence, Vec<(f32, f32)>)> for Detection {
    fn from((score, points): (Confidence, Vec<(f32, f32)>)) -> Self {
        Self { score, points }
    }
}

/// One recorded frame of detector output, the unit of the JSON-lines
/// replay format:
///
/// ```json
/// {"width":640,"height":480,"hands":[{"score":0.93,"points":[[0.21,0.74], ...]}]}
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    width: Pixel,
    height: Pixel,
    #[serde(default)]
    hands: Vec<Detection>,
}

impl Record {
    pub fn new(width: Pixel, height: Pixel, hands: Vec<Detection>) -> Self {
        Self {
            width,
            height,
            hands,
        }
    }

    /// Drop detections below the confidence floor, keep at most
    /// `max_hands` in detection order, and scale to pixels.
    pub fn frame(self, config: &DetectorConfig) -> anyhow::Result<Frame> {
        if self.width <= 0 || self.height <= 0 {
            return Err(anyhow::anyhow!(
                "invalid input: frame size {}x{}",
                self.width,
                self.height
            ));
        }
        let confident = self
            .hands
            .into_iter()
            .filter(|hand| {
                let keep = hand.score() >= config.min_confidence();
                if !keep {
                    log::debug!("dropping hand at confidence {:.2}", hand.score());
                }
                keep
            })
            .collect::<Vec<Detection>>();
        if confident.len() > config.max_hands() {
            log::warn!(
                "{} hands detected, keeping first {}",
                confident.len(),
                config.max_hands()
            );
        }
        let hands = confident
            .into_iter()
            .take(config.max_hands())
            .map(|hand| Landmarks::from_normalized(hand.points(), self.width, self.height))
            .collect::<anyhow::Result<Vec<Landmarks>>>()?;
        Ok(Frame::new(hands, self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(score: Confidence, x: f32) -> Detection {
        Detection::from((score, vec![(x, 0.5); 21]))
    }

    fn wrists(frame: &Frame) -> Vec<Pixel> {
        frame
            .hands()
            .iter()
            .filter_map(|hand| hand.wrist().map(|w| w.x()))
            .collect()
    }

    #[test]
    fn parses_json_line() {
        let points = vec![[0.25, 0.5]; 21];
        let line = serde_json::json!({
            "width": 640,
            "height": 480,
            "hands": [{ "score": 0.9, "points": points }],
        })
        .to_string();
        let record = serde_json::from_str::<Record>(&line).unwrap();
        let frame = record.frame(&DetectorConfig::default()).unwrap();
        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
        assert_eq!(wrists(&frame), vec![160]);
    }

    #[test]
    fn missing_score_is_certain() {
        let points = serde_json::to_string(&vec![[0.5, 0.5]; 21]).unwrap();
        let detection = serde_json::from_str::<Detection>(&format!(r#"{{"points":{}}}"#, points)).unwrap();
        assert_eq!(detection.score(), 1.0);
        assert_eq!(detection.points().len(), 21);
    }

    #[test]
    fn score_and_hands_are_optional() {
        let record = serde_json::from_str::<Record>(r#"{"width":640,"height":480}"#).unwrap();
        assert!(record.frame(&DetectorConfig::default()).unwrap().hands().is_empty());
        let points = serde_json::to_string(&vec![[0.1, 0.1]; 21]).unwrap();
        let line = format!(r#"{{"width":10,"height":10,"hands":[{{"points":{}}}]}}"#, points);
        let record = serde_json::from_str::<Record>(&line).unwrap();
        assert_eq!(record.frame(&DetectorConfig::default()).unwrap().hands().len(), 1);
    }

    #[test]
    fn filters_low_confidence() {
        let record = Record::new(640, 480, vec![hand(0.49, 0.125), hand(0.5, 0.25), hand(0.9, 0.75)]);
        let frame = record.frame(&DetectorConfig::default()).unwrap();
        assert_eq!(wrists(&frame), vec![160, 480]);
    }

    #[test]
    fn caps_hand_count_in_order() {
        let record = Record::new(100, 100, vec![hand(1.0, 0.25), hand(1.0, 0.5), hand(1.0, 0.75)]);
        let frame = record.frame(&DetectorConfig::default()).unwrap();
        assert_eq!(wrists(&frame), vec![25, 50]);
        let record = Record::new(100, 100, vec![hand(1.0, 0.25), hand(1.0, 0.5), hand(1.0, 0.75)]);
        let frame = record.frame(&DetectorConfig::new(3, 0.5).unwrap()).unwrap();
        assert_eq!(frame.hands().len(), 3);
    }

    #[test]
    fn rejects_partial_hands() {
        let record = Record::new(640, 480, vec![Detection::from((1.0, vec![(0.5, 0.5); 20]))]);
        assert!(record.frame(&DetectorConfig::default()).is_err());
    }

    #[test]
    fn rejects_degenerate_frames() {
        assert!(Record::new(0, 480, vec![]).frame(&DetectorConfig::default()).is_err());
    }
}
