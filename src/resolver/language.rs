//! Language id resolution

use crate::domain::{LanguageIdStyle, LanguageMapping};

/// Resolve the id used for `tag` in output file and directory names.
///
/// A mapping override replaces the tag first, then the style is applied to
/// whichever value won.
pub fn language_id(tag: &str, style: LanguageIdStyle, mapping: Option<&LanguageMapping>) -> String {
    let id = mapping.and_then(|m| m.get(tag)).unwrap_or(tag);
    match style {
        LanguageIdStyle::Bcp47 => id.to_string(),
        LanguageIdStyle::Bcp47Underscore => id.replace('-', "_"),
    }
}

/// Resolve the id a format filter embeds inside a generated document.
///
/// Only the mapping override applies; rendering is up to the filter.
pub fn embedded_language_id(tag: &str, mapping: Option<&LanguageMapping>) -> String {
    mapping
        .and_then(|m| m.get(tag))
        .unwrap_or(tag)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> LanguageMapping {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_bcp47_keeps_hyphens() {
        for tag in ["pt-BR", "zh-Hant-TW", "en"] {
            assert_eq!(language_id(tag, LanguageIdStyle::Bcp47, None), tag);
        }
    }

    #[test]
    fn test_underscore_replaces_every_hyphen() {
        assert_eq!(
            language_id("zh-Hant-TW", LanguageIdStyle::Bcp47Underscore, None),
            "zh_Hant_TW"
        );
        assert_eq!(language_id("de", LanguageIdStyle::Bcp47Underscore, None), "de");
    }

    #[test]
    fn test_default_style_is_underscore() {
        assert_eq!(language_id("pt-BR", LanguageIdStyle::default(), None), "pt_BR");
    }

    #[test]
    fn test_override_applies_before_style() {
        let m = mapping(&[("zh-Hans", "zh-CN")]);
        assert_eq!(
            language_id("zh-Hans", LanguageIdStyle::Bcp47Underscore, Some(&m)),
            "zh_CN"
        );
        assert_eq!(language_id("zh-Hans", LanguageIdStyle::Bcp47, Some(&m)), "zh-CN");
        assert_eq!(language_id("pt-BR", LanguageIdStyle::Bcp47, Some(&m)), "pt-BR");
    }

    #[test]
    fn test_embedded_id_ignores_style() {
        let m = mapping(&[("zh-Hans", "zh-CN")]);
        assert_eq!(embedded_language_id("zh-Hans", Some(&m)), "zh-CN");
        assert_eq!(embedded_language_id("pt-BR", Some(&m)), "pt-BR");
        assert_eq!(embedded_language_id("pt-BR", None), "pt-BR");
    }
}
