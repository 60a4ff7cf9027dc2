//! Python bindings
//!
//! The configuration is cached once; every classification builds a fresh
//! board from it, so no result ever outlives the call that produced it.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::{deserialize_board_config, BoardConfig};
use crate::loader::HttpLoader;
use crate::pipeline::{load_board, rank_csv};
use crate::rank::RankBoard;
use crate::summary::extract_summary as extract_summary_figures;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

// ============================================================================
// Cached Configuration
// ============================================================================

/// Global cached configuration. Replaced wholesale, never edited in place.
static CACHED_CONFIG: OnceCell<RwLock<Arc<BoardConfig>>> = OnceCell::new();

fn current_config() -> PyResult<Arc<BoardConfig>> {
    CACHED_CONFIG
        .get()
        .map(|lock| lock.read().clone())
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                "Config not initialized. Call init_config() first.",
            )
        })
}

type SummaryPair = (Option<String>, Option<String>);

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the board configuration (call once at startup)
///
/// # Arguments
/// * `config` - Optional dict with "tiers", "columns", "summary" and "sources";
///   omitted sections use the built-in village defaults
#[pyfunction]
#[pyo3(signature = (config=None))]
fn init_config(config: Option<&Bound<'_, PyDict>>) -> PyResult<()> {
    let board_config = match config {
        Some(dict) => deserialize_board_config(dict)?,
        None => BoardConfig::default(),
    };
    let board_config = Arc::new(board_config);

    // If already initialized, swap in the new config
    let cached = CACHED_CONFIG.get_or_init(|| RwLock::new(board_config.clone()));
    *cached.write() = board_config;

    Ok(())
}

/// Check if config is initialized
#[pyfunction]
fn is_config_initialized() -> bool {
    CACHED_CONFIG.get().is_some()
}

/// Classify ranking sheet CSV text into tiers
///
/// # Raises
/// RuntimeError if `init_config` was not called first
#[pyfunction]
fn classify_csv(text: &str) -> PyResult<RankBoard> {
    let config = current_config()?;
    Ok(RankBoard::new(rank_csv(text, &config)))
}

/// Read (holder count, floor price) from summary sheet CSV text
///
/// Either value is None when its cell is missing or the sheet is too short.
#[pyfunction]
fn extract_summary(text: &str) -> PyResult<SummaryPair> {
    let config = current_config()?;
    let figures = extract_summary_figures(text, &config.summary);
    Ok((figures.member_count, figures.floor_price))
}

/// Fetch both sheets concurrently and process them
///
/// # Returns
/// An awaitable resolving to `(RankBoard | None, (count, price) | None)`;
/// a side is None when its fetch failed
///
/// # Example (Python)
/// ```python
/// board, summary = await load_board_async()
/// print(board.tier_names)
/// ```
#[pyfunction]
#[pyo3(signature = (ranking_url=None, summary_url=None))]
fn load_board_async<'py>(
    py: Python<'py>,
    ranking_url: Option<String>,
    summary_url: Option<String>,
) -> PyResult<Bound<'py, PyAny>> {
    let mut config = (*current_config()?).clone();
    if let Some(url) = ranking_url {
        config.sources.ranking_url = url;
    }
    if let Some(url) = summary_url {
        config.sources.summary_url = url;
    }

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let update = load_board(&HttpLoader::new(), &config).await;
        let ranking = update.ranking.map(RankBoard::new);
        let summary: Option<SummaryPair> = update
            .summary
            .map(|figures| (figures.member_count, figures.floor_price));
        Ok((ranking, summary))
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn village_rank_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_config, m)?)?;
    m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(classify_csv, m)?)?;
    m.add_function(wrap_pyfunction!(extract_summary, m)?)?;
    m.add_function(wrap_pyfunction!(load_board_async, m)?)?;
    m.add_class::<RankBoard>()?;
    Ok(())
}
