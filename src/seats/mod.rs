mod seats;
mod slot;

pub use seats::*;
pub use slot::*;
