mod gesture;

pub use gesture::*;
