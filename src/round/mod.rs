mod round;

pub use round::*;
