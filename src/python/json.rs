//! JSON interface for large documents and batch processing
//!
//! Batches cross the Python↔Rust boundary once, and the documents are then
//! summarized in parallel on the Rust side.

use super::native::to_py_err;
use crate::json::{summarize_batch_json, summarize_json};
use pyo3::prelude::*;

/// Summarize a document from JSON input
///
/// Args:
///     json_input: JSON object with `text` and an optional `config`
///
/// Returns:
///     JSON string with the summary, sentences and keywords
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_from_json(json_input: &str) -> PyResult<String> {
    summarize_json(json_input).map_err(to_py_err)
}

/// Summarize multiple documents from a JSON array
///
/// Args:
///     json_input: JSON array of documents
///
/// Returns:
///     JSON array of results in input order; failed documents become
///     `{"error": ...}` entries
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_from_json(json_input: &str) -> PyResult<String> {
    summarize_batch_json(json_input).map_err(to_py_err)
}
