//! Rock-Paper-Scissors Referee
//!
//! Replays recorded hand detections (JSON lines, one frame per line)
//! and prints each frame's readout: both players' gestures and the
//! live round result. Stops at end of input.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use roshambo::*;
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about = "Referee Rock-Paper-Scissors from recorded hand detections", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "-", help = "detection recording, or - for stdin")]
    input: String,
    #[arg(long, default_value_t = MAX_HANDS, help = "hands kept per frame")]
    max_hands: usize,
    #[arg(long, default_value_t = MIN_DETECTION_CONFIDENCE, help = "confidence floor for detections")]
    min_confidence: Confidence,
    #[arg(long, help = "print one JSON readout per frame")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log()?;
    let config = DetectorConfig::new(args.max_hands, args.min_confidence)?;
    let reader: Box<dyn BufRead> = match args.input.as_str() {
        "-" => Box::new(std::io::stdin().lock()),
        path => Box::new(std::io::BufReader::new(
            std::fs::File::open(path).with_context(|| format!("opening {}", path))?,
        )),
    };
    log::info!("refereeing {} with {}", args.input, config);
    let mut detector = Replay::new(reader, config);
    let mut frames = 0usize;
    while let Some(frame) = detector.detect()? {
        let readout = Readout::from(&frame);
        match args.json {
            true => println!("{}", serde_json::to_string(&readout)?),
            false => println!("{}", paint(&readout)),
        }
        frames += 1;
    }
    log::info!("refereed {} frames", frames);
    Ok(())
}

/// Seats in green, result in red.
fn paint(readout: &Readout) -> String {
    let seat = |slot: Slot, gesture: Option<Gesture>| match gesture {
        Some(gesture) => format!("{}: {}", slot, gesture),
        None => format!("{}: Waiting...", slot),
    };
    format!(
        "{}  {}  {}",
        seat(Slot::P1, readout.p1()).green(),
        seat(Slot::P2, readout.p2()).green(),
        format!("Result: {}", readout.round()).red().bold(),
    )
}
