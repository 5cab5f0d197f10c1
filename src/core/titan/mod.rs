//! Titan math library.

pub mod algebra;
