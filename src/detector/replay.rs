use super::config::DetectorConfig;
use super::detector::Detector;
use super::record::Record;
use crate::frame::Frame;
use anyhow::Context;
use std::io::BufRead;

/// Replays recorded detector output, one JSON [`Record`] per line.
/// Blank lines are skipped; the stream ends at EOF.
pub struct Replay<R> {
    lines: std::io::Lines<R>,
    config: DetectorConfig,
    line: usize,
}

impl<R: BufRead> Replay<R> {
    pub fn new(reader: R, config: DetectorConfig) -> Self {
        Self {
            lines: reader.lines(),
            config,
            line: 0,
        }
    }
    /// Lines consumed so far, blank ones included.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Detector for Replay<R> {
    fn detect(&mut self) -> anyhow::Result<Option<Frame>> {
        while let Some(text) = self.lines.next() {
            self.line += 1;
            let text = text.with_context(|| format!("reading line {}", self.line))?;
            if text.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str::<Record>(&text)
                .with_context(|| format!("parsing line {}", self.line))?;
            let frame = record
                .frame(&self.config)
                .with_context(|| format!("decoding line {}", self.line))?;
            return Ok(Some(frame));
        }
        log::info!("replay exhausted after {} lines", self.line);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(x: f32) -> String {
        serde_json::to_string(&vec![[x, 0.5]; 21]).unwrap()
    }

    fn replay(text: &str) -> Replay<std::io::Cursor<String>> {
        Replay::new(std::io::Cursor::new(text.to_string()), DetectorConfig::default())
    }

    #[test]
    fn yields_frames_until_eof() {
        let text = format!(
            "{}\n\n{}\n",
            r#"{"width":640,"height":480,"hands":[]}"#,
            format!(r#"{{"width":640,"height":480,"hands":[{{"points":{}}}]}}"#, hand(0.25)),
        );
        let ref mut replay = replay(&text);
        assert_eq!(replay.detect().unwrap().map(|f| f.hands().len()), Some(0));
        assert_eq!(replay.detect().unwrap().map(|f| f.hands().len()), Some(1));
        assert!(replay.detect().unwrap().is_none());
        assert!(replay.detect().unwrap().is_none());
        assert_eq!(replay.line(), 3);
    }

    #[test]
    fn reports_bad_line_number() {
        let text = "{\"width\":640,\"height\":480}\nnot json\n";
        let ref mut replay = replay(text);
        assert!(replay.detect().unwrap().is_some());
        let err = replay.detect().unwrap_err();
        assert_eq!(err.to_string(), "parsing line 2");
    }

    #[test]
    fn reports_malformed_hand() {
        let points = serde_json::to_string(&vec![[0.5, 0.5]; 3]).unwrap();
        let text = format!(r#"{{"width":640,"height":480,"hands":[{{"points":{}}}]}}"#, points);
        let err = replay(&text).detect().unwrap_err();
        assert_eq!(err.to_string(), "decoding line 1");
        assert!(format!("{:#}", err).contains("invalid input"));
    }

    #[test]
    fn boxed_detectors_delegate() {
        let mut boxed: Box<dyn Detector> = Box::new(replay(r#"{"width":2,"height":2}"#));
        assert!(boxed.detect().unwrap().is_some());
        assert!(boxed.detect().unwrap().is_none());
    }
}
