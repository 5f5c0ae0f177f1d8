//! Two-player Rock-Paper-Scissors referee over hand-landmark detections.
//!
//! Each frame flows one way through the crate:
//! landmarks → finger states → gesture → player seats → round.
//! Nothing is carried between frames.
pub mod detector;
pub mod frame;
pub mod gesture;
pub mod hands;
pub mod round;
pub mod seats;

pub use detector::*;
pub use frame::*;
pub use gesture::*;
pub use hands::*;
pub use round::*;
pub use seats::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Frame-space coordinate in whole pixels.
pub type Pixel = i32;
/// Detector confidence in [0, 1].
pub type Confidence = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HAND SKELETON
// 21 keypoints per hand, wrist first, then four joints per finger.
// ============================================================================
/// Landmarks in a complete hand skeleton.
pub const N_LANDMARKS: usize = 21;
/// Fingers tracked per hand, thumb through pinky.
pub const N_FINGERS: usize = 5;
/// Fingertip identifiers in canonical finger order.
pub const TIP_IDS: [u8; N_FINGERS] = [4, 8, 12, 16, 20];

// ============================================================================
// DETECTION DEFAULTS
// ============================================================================
/// Hands kept per frame. One per player.
pub const MAX_HANDS: usize = 2;
/// Detections scoring below this are dropped before refereeing.
pub const MIN_DETECTION_CONFIDENCE: Confidence = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to stderr.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
