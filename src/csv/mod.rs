//! CSV row parsing module
//!
//! The sheets are exported as plain comma-separated text: one row per line,
//! fields trimmed, no quoting or escaping.

mod entrant;
pub mod fields;


pub use entrant::*;
pub use fields::*;
