//! HTML presentation of the ranking board and summary figures

mod blocks;
mod container;
mod display;

pub use blocks::*;
pub use container::*;
pub use display::*;
