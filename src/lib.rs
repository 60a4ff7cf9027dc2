//! Village Rank Core - tier ranking for published spreadsheet exports
//!
//! This crate turns two published CSV sheets into a ranking board (entrants
//! bucketed into declared score tiers) and a pair of summary figures, with
//! optional Python bindings via PyO3 (`python` feature).
//!
//! ```
//! use village_rank_core::config::BoardConfig;
//! use village_rank_core::pipeline::rank_csv;
//!
//! let board = rank_csv("氏名,保有点数\nalice,52\nbob,7\n", &BoardConfig::default());
//! assert_eq!(board.bucket("長老").unwrap().members[0].display_name, "alice");
//! assert_eq!(board.total_members(), 2);
//! ```

pub mod config;
pub mod csv;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod rank;
pub mod render;
pub mod summary;

#[cfg(feature = "python")]
mod python;

pub use error::{RankError, Result};
