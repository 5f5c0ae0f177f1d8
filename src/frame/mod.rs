mod frame;
mod readout;

pub use frame::*;
pub use readout::*;
