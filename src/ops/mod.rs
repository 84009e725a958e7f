mod bilinear;

pub use bilinear::*;
