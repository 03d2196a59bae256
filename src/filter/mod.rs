//! Resource format filters
//!
//! A filter converts between the bytes of a resource document and a
//! [`LanguageBundle`]. Filters are selected by the configured resource type:
//! - `java`: Java properties files ([`properties`])
//! - `json`: JSON string documents ([`json`])

pub mod json;
pub mod properties;

use thiserror::Error;

use crate::domain::LanguageBundle;

/// Resource types with a filter
pub const SUPPORTED_TYPES: &[&str] = &["java", "json"];

/// Error raised by a filter; the caller adds the file path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("invalid UTF-8 content: {0}")]
    Encoding(String),

    #[error("{0}")]
    Invalid(String),
}

/// Options passed to every filter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Language of the document being read or produced
    pub language: String,
}

impl FilterOptions {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

/// Format-specific reader/writer
pub trait ResourceFilter {
    /// Read a document into a resource set
    fn parse(&self, content: &[u8], options: &FilterOptions) -> Result<LanguageBundle, FilterError>;

    /// Rewrite `original` with values from `bundle`, keeping its structure.
    /// Keys missing from `bundle` keep their original value.
    fn merge(
        &self,
        original: &[u8],
        bundle: &LanguageBundle,
        options: &FilterOptions,
    ) -> Result<Vec<u8>, FilterError>;

    /// Write a standalone document containing only `bundle`
    fn write(&self, bundle: &LanguageBundle, options: &FilterOptions) -> Result<Vec<u8>, FilterError>;
}

/// Look up the filter for a resource type (case-insensitive)
pub fn filter_for(resource_type: &str) -> Option<Box<dyn ResourceFilter>> {
    match resource_type.trim().to_ascii_lowercase().as_str() {
        "java" => Some(Box::new(properties::PropertiesFilter)),
        "json" => Some(Box::new(json::JsonFilter)),
        _ => None,
    }
}

fn utf8(content: &[u8]) -> Result<&str, FilterError> {
    std::str::from_utf8(content).map_err(|e| FilterError::Encoding(e.to_string()))
}
