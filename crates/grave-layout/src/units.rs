//! Approximate foot-to-degree offsets at Haworth (about 53.83N, 1.96W).
//!
//! A degree of longitude is much shorter than a degree of latitude this far
//! north, hence the different constants per axis.

pub const LONG_3FEET: f64 = 0.0000141;
pub const LONG_2FEET: f64 = 0.0000094;

pub const LAT_3FEET: f64 = 0.0000083;
pub const LAT_2FEET: f64 = 0.0000050;
