//! JSON interface for documents and batches
//!
//! A document is `{ "text": "...", "config": { ... } }`; every config field is
//! optional and falls back to [`SummarizerConfig::default`]. Results carry the
//! joined summary text next to the structured [`Summary`] fields.

use crate::errors::Result;
use crate::pipeline::runner::Summarizer;
use crate::types::{Keyword, Language, RankStrategy, Summary, SummarizerConfig, SummarySentence};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub text: String,
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

/// Output result for JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResult {
    /// Selected sentences joined by a single space
    pub summary: String,
    pub sentences: Vec<SummarySentence>,
    pub keywords: Vec<Keyword>,
    pub total_sentences: usize,
    pub strategy: RankStrategy,
    pub iterations: usize,
    pub converged: bool,
}

impl From<Summary> for JsonResult {
    fn from(summary: Summary) -> Self {
        Self {
            summary: summary.text(),
            sentences: summary.sentences,
            keywords: summary.keywords,
            total_sentences: summary.total_sentences,
            strategy: summary.strategy,
            iterations: summary.iterations,
            converged: summary.converged,
        }
    }
}

/// One entry of a batch response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonBatchEntry {
    Ok(JsonResult),
    Err { error: String },
}

impl From<Result<JsonResult>> for JsonBatchEntry {
    fn from(result: Result<JsonResult>) -> Self {
        match result {
            Ok(result) => JsonBatchEntry::Ok(result),
            Err(err) => JsonBatchEntry::Err {
                error: err.to_string(),
            },
        }
    }
}

/// Parse a document, reporting an unknown `config.language` as
/// `UnsupportedLanguage` like the direct API does
pub fn parse_document(value: serde_json::Value) -> Result<JsonDocument> {
    if let Some(tag) = value
        .get("config")
        .and_then(|config| config.get("language"))
        .and_then(serde_json::Value::as_str)
    {
        tag.parse::<Language>()?;
    }
    Ok(serde_json::from_value(value)?)
}

/// Summarize one parsed document
pub fn summarize_document(doc: &JsonDocument) -> Result<JsonResult> {
    let config = doc.config.clone().unwrap_or_default();
    let summarizer = Summarizer::with_config(config)?;
    Ok(summarizer.summarize(&doc.text).into())
}

/// Summarize a single JSON document
///
/// Malformed JSON or an invalid config fails the whole call.
pub fn summarize_json(json_input: &str) -> Result<String> {
    let doc = parse_document(serde_json::from_str(json_input)?)?;
    let result = summarize_document(&doc)?;
    Ok(serde_json::to_string(&result)?)
}

/// Summarize a JSON array of documents
///
/// Documents are processed in parallel and returned in input order. Only a
/// top level that is not an array fails the call; a bad document becomes an
/// `{ "error": ... }` entry at its position.
pub fn summarize_batch_json(json_input: &str) -> Result<String> {
    let docs: Vec<serde_json::Value> = serde_json::from_str(json_input)?;

    let results: Vec<JsonBatchEntry> = docs
        .into_par_iter()
        .map(|value| parse_document(value).and_then(|doc| summarize_document(&doc)))
        .map(JsonBatchEntry::from)
        .collect();

    Ok(serde_json::to_string(&results)?)
}
