//! Tier classification module

mod board;
mod classifier;
#[cfg(feature = "python")]
mod session;


pub use board::*;
pub use classifier::*;
#[cfg(feature = "python")]
pub use session::*;
