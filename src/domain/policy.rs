//! Output content policies

use std::fmt;
use std::str::FromStr;

/// Which values an exported document carries, and whether they are merged
/// into the source document or written as a standalone document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentPolicy {
    /// Translations (or source fallback) merged into the source document
    #[default]
    MergeToSource,
    TranslationWithFallback,
    TranslationOnly,
    /// Reviewed translations (or source fallback) merged into the source document
    MergeReviewedToSource,
    ReviewedWithFallback,
    ReviewedOnly,
}

impl ContentPolicy {
    pub const ALL: [ContentPolicy; 6] = [
        ContentPolicy::MergeToSource,
        ContentPolicy::TranslationWithFallback,
        ContentPolicy::TranslationOnly,
        ContentPolicy::MergeReviewedToSource,
        ContentPolicy::ReviewedWithFallback,
        ContentPolicy::ReviewedOnly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentPolicy::MergeToSource => "merge_to_src",
            ContentPolicy::TranslationWithFallback => "trans_with_fallback",
            ContentPolicy::TranslationOnly => "trans_only",
            ContentPolicy::MergeReviewedToSource => "merge_reviewed_to_src",
            ContentPolicy::ReviewedWithFallback => "reviewed_with_fallback",
            ContentPolicy::ReviewedOnly => "reviewed_only",
        }
    }

    /// Unreviewed translations are treated as absent
    pub fn reviewed_only(self) -> bool {
        matches!(
            self,
            ContentPolicy::MergeReviewedToSource
                | ContentPolicy::ReviewedWithFallback
                | ContentPolicy::ReviewedOnly
        )
    }

    /// Absent translations are replaced by the source value
    pub fn with_fallback(self) -> bool {
        !matches!(
            self,
            ContentPolicy::TranslationOnly | ContentPolicy::ReviewedOnly
        )
    }

    /// Output is the source document with translations merged in
    pub fn merges_into_source(self) -> bool {
        matches!(
            self,
            ContentPolicy::MergeToSource | ContentPolicy::MergeReviewedToSource
        )
    }
}

impl fmt::Display for ContentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == name)
            .ok_or_else(|| {
                format!(
                    "unknown output content option '{name}' (expected one of: {})",
                    Self::ALL.map(ContentPolicy::as_str).join(", ")
                )
            })
    }
}
