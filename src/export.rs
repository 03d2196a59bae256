//! Content policy application
//!
//! Decides which stored values take part in an exported document and hands
//! the result to the format filter. Formatting is entirely up to the filter.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::{ContentPolicy, LanguageBundle, ResourceEntry, ResourceString};
use crate::error::{Result, format, fs as fs_err};
use crate::filter::{FilterOptions, ResourceFilter};

/// Build the bundle to export from the stored entries of one language.
///
/// Per key: an unreviewed value is absent under a reviewed-only policy; an
/// absent value falls back to the source value when the policy allows it;
/// a key still without a value is left out.
pub fn select_entries(
    entries: &BTreeMap<String, ResourceEntry>,
    policy: ContentPolicy,
) -> LanguageBundle {
    let mut bundle = LanguageBundle::new();

    for (key, entry) in entries {
        let translated = entry
            .value
            .as_ref()
            .filter(|_| !policy.reviewed_only() || entry.reviewed);
        let value = match translated {
            Some(value) => Some(value),
            None if policy.with_fallback() => entry.source_value.as_ref(),
            None => None,
        };
        let Some(value) = value else {
            continue;
        };

        let mut string = ResourceString::new(key.clone(), value.clone()).with_notes(entry.notes.clone());
        string.source_value.clone_from(&entry.source_value);
        string.sequence_number = entry.sequence_number;
        bundle.add(string);
    }

    bundle
}

/// Produce the bytes of the output document at `dest`.
///
/// Merging policies read `source` and let the filter rewrite it; the others
/// write a standalone document from `bundle` alone.
pub fn render(
    filter: &dyn ResourceFilter,
    policy: ContentPolicy,
    source: &Path,
    bundle: &LanguageBundle,
    options: &FilterOptions,
    dest: &Path,
) -> Result<Vec<u8>> {
    if policy.merges_into_source() {
        let original = fs::read(source)
            .map_err(|e| fs_err::read_failed(source.display().to_string(), e.to_string()))?;
        filter
            .merge(&original, bundle, options)
            .map_err(|e| format::merge_failed(dest.display().to_string(), e.to_string()))
    } else {
        filter
            .write(bundle, options)
            .map_err(|e| format::write_failed(dest.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::properties::PropertiesFilter;

    fn entry(value: Option<&str>, source: &str, reviewed: bool) -> ResourceEntry {
        ResourceEntry {
            value: value.map(str::to_string),
            source_value: Some(source.to_string()),
            reviewed,
            ..ResourceEntry::default()
        }
    }

    fn entries() -> BTreeMap<String, ResourceEntry> {
        BTreeMap::from([
            ("done".to_string(), entry(Some("Fertig"), "Done", true)),
            ("draft".to_string(), entry(Some("Entwurf"), "Draft", false)),
            ("missing".to_string(), entry(None, "Missing", false)),
        ])
    }

    fn values(bundle: &LanguageBundle) -> Vec<(&str, &str)> {
        bundle
            .strings()
            .iter()
            .map(|s| (s.key.as_str(), s.value.as_str()))
            .collect()
    }

    #[test]
    fn test_trans_only_excludes_fallback_only_key() {
        let bundle = select_entries(&entries(), ContentPolicy::TranslationOnly);
        assert_eq!(values(&bundle), vec![("done", "Fertig"), ("draft", "Entwurf")]);
    }

    #[test]
    fn test_trans_with_fallback_includes_source_value() {
        let bundle = select_entries(&entries(), ContentPolicy::TranslationWithFallback);
        assert_eq!(
            values(&bundle),
            vec![("done", "Fertig"), ("draft", "Entwurf"), ("missing", "Missing")]
        );
    }

    #[test]
    fn test_reviewed_only_drops_unreviewed() {
        let bundle = select_entries(&entries(), ContentPolicy::ReviewedOnly);
        assert_eq!(values(&bundle), vec![("done", "Fertig")]);
    }

    #[test]
    fn test_reviewed_with_fallback_uses_source_for_unreviewed() {
        for policy in [
            ContentPolicy::ReviewedWithFallback,
            ContentPolicy::MergeReviewedToSource,
        ] {
            let bundle = select_entries(&entries(), policy);
            assert_eq!(
                values(&bundle),
                vec![("done", "Fertig"), ("draft", "Draft"), ("missing", "Missing")]
            );
        }
    }

    #[test]
    fn test_entry_without_any_value_is_omitted() {
        let mut entries = entries();
        entries.insert("orphan".to_string(), ResourceEntry::default());
        let bundle = select_entries(&entries, ContentPolicy::MergeToSource);
        assert!(bundle.get("orphan").is_none());
        assert_eq!(bundle.len(), 3);
    }

    #[test]
    fn test_selection_keeps_sequence_numbers_and_notes() {
        let entries = BTreeMap::from([(
            "k".to_string(),
            ResourceEntry {
                value: Some("v".to_string()),
                source_value: Some("s".to_string()),
                sequence_number: Some(7),
                notes: vec!["note".to_string()],
                reviewed: false,
            },
        )]);
        let bundle = select_entries(&entries, ContentPolicy::TranslationOnly);
        let string = bundle.get("k").unwrap();
        assert_eq!(string.sequence_number, Some(7));
        assert_eq!(string.notes, vec!["note"]);
        assert_eq!(string.source_value.as_deref(), Some("s"));
    }

    #[test]
    fn test_render_merges_into_source_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = dir.path().join("messages.properties");
        fs::write(&source, "# header\n\ngreeting = Hello\nfarewell = Bye\n").unwrap();

        let mut bundle = LanguageBundle::new();
        bundle.add(ResourceString::new("greeting", "Hallo"));
        let out = render(
            &PropertiesFilter,
            ContentPolicy::MergeToSource,
            &source,
            &bundle,
            &FilterOptions::new("de"),
            &dir.path().join("messages_de.properties"),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# header\n\ngreeting = Hallo\nfarewell = Bye\n"
        );
    }

    #[test]
    fn test_render_merge_reports_missing_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = render(
            &PropertiesFilter,
            ContentPolicy::MergeToSource,
            &dir.path().join("gone.properties"),
            &LanguageBundle::new(),
            &FilterOptions::new("de"),
            &dir.path().join("gone_de.properties"),
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::SyncError::FileReadFailed { .. }));
    }

    #[test]
    fn test_render_standalone_ignores_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut bundle = LanguageBundle::new();
        bundle.add(ResourceString::new("a", "b"));
        let out = render(
            &PropertiesFilter,
            ContentPolicy::TranslationOnly,
            &dir.path().join("not-read.properties"),
            &bundle,
            &FilterOptions::new("de"),
            &dir.path().join("out.properties"),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#Language: de\n\na=b\n");
    }
}
