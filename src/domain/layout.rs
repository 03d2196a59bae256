//! Output layout strategies
//!
//! Where a downloaded translation lands relative to its source file. Which
//! path a strategy produces is computed in [`crate::resolver::output_path`].

use std::fmt;
use std::str::FromStr;

/// Directory-naming policy for exported files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// `dir/messages.properties` -> `dir/messages_de.properties`
    #[default]
    LangSuffix,
    /// `dir/sub/messages.json` -> `dir/de.json`
    LangOnly,
    /// `dir/messages.json` -> `dir/de/messages.json`
    LangSubdir,
    /// `dir/en/messages.json` -> `dir/de/messages.json`
    LangDir,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 4] = [
        LayoutStrategy::LangSuffix,
        LayoutStrategy::LangOnly,
        LayoutStrategy::LangSubdir,
        LayoutStrategy::LangDir,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutStrategy::LangSuffix => "lang_suffix",
            LayoutStrategy::LangOnly => "lang_only",
            LayoutStrategy::LangSubdir => "lang_subdir",
            LayoutStrategy::LangDir => "lang_dir",
        }
    }

    /// Whether the strategy writes next to the source file's parent directory,
    /// so the source file needs at least one directory below the base directory
    pub fn needs_parent_dir(self) -> bool {
        matches!(self, LayoutStrategy::LangOnly | LayoutStrategy::LangDir)
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == name)
            .ok_or_else(|| {
                format!(
                    "unknown layout '{name}' (expected one of: {})",
                    Self::ALL.map(LayoutStrategy::as_str).join(", ")
                )
            })
    }
}
