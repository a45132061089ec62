mod color;
mod signal;

pub use color::*;
pub use signal::*;
