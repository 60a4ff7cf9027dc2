//! CSV loading module
//!
//! One GET per sheet, no retry. The trait lets the pipeline run against any
//! source of CSV text.

mod http;

pub use http::*;

use crate::error::Result;
use std::future::Future;

/// Anything that can turn a sheet address into CSV text
pub trait CsvSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}
