//! Solver core: equation math and the input error type.

pub mod error;
pub mod titan;
