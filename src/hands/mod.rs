//! Hand skeletons as delivered by the landmark detector,
//! and the finger states derived from them.

mod finger;
mod fingers;
mod landmark;
mod landmarks;

pub use finger::*;
pub use fingers::*;
pub use landmark::*;
pub use landmarks::*;
