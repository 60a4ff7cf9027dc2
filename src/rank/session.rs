//! RankBoard - ranking board handle for the Python side
//!
//! Holds the classified board in Rust memory; Python reads tiers lazily
//! through the methods below instead of receiving one big nested structure.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::rank::{RankingBoard, TierBucket};
use crate::render::{render_board, HtmlContainer, DEFAULT_IMAGE_DIR};

#[pyclass]
pub struct RankBoard {
    board: RankingBoard,
}

impl RankBoard {
    pub fn new(board: RankingBoard) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &RankingBoard {
        &self.board
    }

    fn bucket_to_dict<'py>(py: Python<'py>, bucket: &TierBucket) -> PyResult<Bound<'py, PyDict>> {
        let def = &bucket.definition;
        let dict = PyDict::new(py);
        dict.set_item("name", &def.name)?;
        dict.set_item("description", &def.description)?;
        dict.set_item("image_ref", &def.image_ref)?;
        dict.set_item("range_label", def.range_label())?;

        let members = PyList::empty(py);
        for member in &bucket.members {
            let entry = PyDict::new(py);
            entry.set_item("display_name", &member.display_name)?;
            entry.set_item("score", member.score)?;
            members.append(entry)?;
        }
        dict.set_item("members", members)?;

        Ok(dict)
    }
}

#[pymethods]
impl RankBoard {
    /// Tier names in declaration order
    #[getter]
    fn tier_names(&self) -> Vec<String> {
        self.board.tier_names().map(str::to_string).collect()
    }

    /// Number of classified entrants across all tiers
    #[getter]
    fn total_members(&self) -> usize {
        self.board.total_members()
    }

    fn __len__(&self) -> usize {
        self.board.buckets().len()
    }

    /// Get one tier as a dict, or None for an unknown name
    fn get_tier(&self, py: Python<'_>, name: &str) -> PyResult<Py<PyAny>> {
        match self.board.bucket(name) {
            Some(bucket) => Ok(Self::bucket_to_dict(py, bucket)?.into()),
            None => Ok(py.None()),
        }
    }

    /// All tiers as a list of dicts, in declaration order
    fn to_list(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for bucket in self.board.buckets() {
            list.append(Self::bucket_to_dict(py, bucket)?)?;
        }
        Ok(list.into())
    }

    /// Rank block HTML for every tier
    #[pyo3(signature = (image_dir=None))]
    fn to_html(&self, image_dir: Option<&str>) -> String {
        let mut container = HtmlContainer::new();
        render_board(
            &self.board,
            &mut container,
            image_dir.unwrap_or(DEFAULT_IMAGE_DIR),
        );
        container.to_html()
    }
}
