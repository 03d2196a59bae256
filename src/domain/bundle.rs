//! Bundle domain types
//!
//! Values exchanged with the bundle store and with the format filters.

use std::collections::BTreeSet;

/// Metadata of a bundle in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleInfo {
    pub source_language: String,
    pub target_languages: BTreeSet<String>,
}

impl BundleInfo {
    /// Source language plus every target language
    pub fn languages(&self) -> BTreeSet<String> {
        let mut languages = self.target_languages.clone();
        languages.insert(self.source_language.clone());
        languages
    }
}

/// Data for creating a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBundle {
    pub source_language: String,
    pub target_languages: BTreeSet<String>,
    pub notes: Vec<String>,
}

/// A stored resource entry as returned for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Translated value, absent when no translation exists yet
    pub value: Option<String>,
    /// Value in the bundle's source language
    pub source_value: Option<String>,
    pub sequence_number: Option<u32>,
    pub notes: Vec<String>,
    pub reviewed: bool,
}

/// A source-language entry to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResourceEntry {
    pub value: String,
    pub sequence_number: Option<u32>,
    pub notes: Vec<String>,
}

/// A key/value pair inside a [`LanguageBundle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceString {
    pub key: String,
    pub value: String,
    pub source_value: Option<String>,
    pub sequence_number: Option<u32>,
    pub notes: Vec<String>,
}

impl ResourceString {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source_value: None,
            sequence_number: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sequence_number(mut self, sequence_number: u32) -> Self {
        self.sequence_number = Some(sequence_number);
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// In-memory resource set: what a filter parses out of a document, or what
/// is handed to a filter to merge/write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBundle {
    /// Bundle-level notes (e.g. a file header comment)
    pub notes: Vec<String>,
    strings: Vec<ResourceString>,
}

impl LanguageBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource string, replacing an earlier string with the same key
    pub fn add(&mut self, string: ResourceString) {
        if let Some(existing) = self.strings.iter_mut().find(|s| s.key == string.key) {
            *existing = string;
        } else {
            self.strings.push(string);
        }
    }

    pub fn get(&self, key: &str) -> Option<&ResourceString> {
        self.strings.iter().find(|s| s.key == key)
    }

    pub fn strings(&self) -> &[ResourceString] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Strings ordered by sequence number; strings without one follow, by key
    pub fn ordered_strings(&self) -> Vec<&ResourceString> {
        let mut ordered: Vec<&ResourceString> = self.strings.iter().collect();
        ordered.sort_by(|a, b| match (a.sequence_number, b.sequence_number) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.key.cmp(&b.key)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.key.cmp(&b.key),
        });
        ordered
    }
}
