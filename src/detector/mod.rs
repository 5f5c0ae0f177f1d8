//! Boundary with the external hand-landmark detector.
//!
//! A detector hands over one complete [`Frame`](crate::Frame) per call.
//! Anything that produces landmarks (a live model, a recording) plugs in here.

mod config;
mod detector;
mod record;
mod replay;

pub use config::*;
pub use detector::*;
pub use record::*;
pub use replay::*;
