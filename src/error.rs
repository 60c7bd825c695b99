//! Error types for the Comète library.
//!
//! Controller operations never surface these to the UI directly; they are
//! logged and turned into notifications. Binaries wrap them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading or saving profile data or exports.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// Failure while parsing the embedded period catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("period catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("period catalog is empty")]
    Empty,
    #[error("period '{id}' ends ({end}) before it starts ({start})")]
    InvertedSpan { id: String, start: i32, end: i32 },
    #[error("periods '{previous}' and '{next}' are out of chronological order")]
    Unordered { previous: String, next: String },
    #[error("period '{id}' has accent '{accent}', expected #rrggbb")]
    BadAccent { id: String, accent: String },
}

/// Problem found while validating the translation dictionaries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("message '{key}' is empty in {language}")]
    EmptyMessage { key: &'static str, language: &'static str },
    #[error("message '{key}' has placeholders {found:?} in {language}, expected {expected:?}")]
    PlaceholderMismatch {
        key: &'static str,
        language: &'static str,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// A language code outside the supported set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language code '{0}' (expected fr, en or es)")]
pub struct UnsupportedLanguage(pub String);
