pub mod length;
pub mod ratio;

pub use length::{Length, LengthUnit};
pub use ratio::AspectRatio;
