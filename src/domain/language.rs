//! Language identifier types
//!
//! A [`LanguageMapping`] carries the requested target languages of a run and
//! their optional display/storage ids. A [`LanguageIdStyle`] selects how a
//! language tag is rendered in file and directory names.

use std::collections::BTreeMap;
use std::str::FromStr;

/// Requested target languages mapped to an override id
///
/// Keys are the target language tags requested for the run, ordered by tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMapping {
    entries: BTreeMap<String, String>,
}

impl LanguageMapping {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Override id for a language tag
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    /// Requested target language tags, in sorted order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for LanguageMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// How a language id is rendered in output paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LanguageIdStyle {
    /// `pt-BR` stays `pt-BR`
    Bcp47,
    /// `pt-BR` becomes `pt_BR`
    #[default]
    Bcp47Underscore,
}

impl LanguageIdStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageIdStyle::Bcp47 => "bcp47",
            LanguageIdStyle::Bcp47Underscore => "bcp47_underscore",
        }
    }

    /// Parse a configured style, falling back to the underscore style for
    /// unknown names. The flag tells whether the name was recognized.
    pub fn parse_lenient(name: &str) -> (Self, bool) {
        match name.parse() {
            Ok(style) => (style, true),
            Err(()) => (LanguageIdStyle::Bcp47Underscore, false),
        }
    }
}

impl FromStr for LanguageIdStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bcp47" => Ok(LanguageIdStyle::Bcp47),
            "bcp47_underscore" => Ok(LanguageIdStyle::Bcp47Underscore),
            _ => Err(()),
        }
    }
}
