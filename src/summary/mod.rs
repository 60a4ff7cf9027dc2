//! Summary sheet module
//!
//! Reads the holder count and floor price from fixed cells.

mod extractor;

#[cfg(test)]
mod property_tests;

pub use extractor::*;
