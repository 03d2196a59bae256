//! Java properties filter
//!
//! Supports `key=value`, `key:value` and `key value` entries, `#`/`!`
//! comments, backslash line continuations and the standard escapes
//! including `\uXXXX`. Comment lines directly above an entry become its
//! notes; a comment block at the top of the file followed by a blank line
//! becomes the bundle notes.

use crate::domain::{LanguageBundle, ResourceString};
use crate::filter::{FilterError, FilterOptions, ResourceFilter, utf8};

pub struct PropertiesFilter;

/// One entry spread over physical lines `first..=last`
struct Entry {
    first: usize,
    last: usize,
    /// Raw text of the first physical line up to the value
    prefix: String,
    key: String,
    value: String,
    notes: Vec<String>,
}

struct Document<'a> {
    lines: Vec<&'a str>,
    entries: Vec<Entry>,
    header_notes: Vec<String>,
    trailing_newline: bool,
}

impl ResourceFilter for PropertiesFilter {
    fn parse(&self, content: &[u8], _options: &FilterOptions) -> Result<LanguageBundle, FilterError> {
        let document = Document::parse(utf8(content)?)?;

        let mut bundle = LanguageBundle::new();
        bundle.notes = document.header_notes;
        for (idx, entry) in document.entries.into_iter().enumerate() {
            let sequence_number = u32::try_from(idx + 1)
                .map_err(|_| FilterError::Invalid("too many entries".to_string()))?;
            bundle.add(
                ResourceString::new(entry.key, entry.value)
                    .with_sequence_number(sequence_number)
                    .with_notes(entry.notes),
            );
        }
        Ok(bundle)
    }

    fn merge(
        &self,
        original: &[u8],
        bundle: &LanguageBundle,
        _options: &FilterOptions,
    ) -> Result<Vec<u8>, FilterError> {
        let document = Document::parse(utf8(original)?)?;

        let mut out: Vec<String> = Vec::with_capacity(document.lines.len());
        let mut entries = document.entries.iter().peekable();
        let mut line_no = 0;
        while line_no < document.lines.len() {
            match entries.peek() {
                Some(entry) if entry.first == line_no => {
                    match bundle.get(&entry.key) {
                        Some(string) => {
                            out.push(format!("{}{}", entry.prefix, escape_value(&string.value)));
                        }
                        None => out.extend(
                            document.lines[entry.first..=entry.last]
                                .iter()
                                .map(ToString::to_string),
                        ),
                    }
                    line_no = entry.last + 1;
                    entries.next();
                }
                _ => {
                    out.push(document.lines[line_no].to_string());
                    line_no += 1;
                }
            }
        }

        let mut text = out.join("\n");
        if document.trailing_newline {
            text.push('\n');
        }
        Ok(text.into_bytes())
    }

    fn write(&self, bundle: &LanguageBundle, options: &FilterOptions) -> Result<Vec<u8>, FilterError> {
        let mut text = String::new();
        text.push_str(&format!("#Language: {}\n", options.language));
        for note in &bundle.notes {
            text.push_str(&comment_line(note));
        }
        text.push('\n');

        for string in bundle.ordered_strings() {
            for note in &string.notes {
                text.push_str(&comment_line(note));
            }
            text.push_str(&escape_key(&string.key));
            text.push('=');
            text.push_str(&escape_value(&string.value));
            text.push('\n');
        }
        Ok(text.into_bytes())
    }
}

impl<'a> Document<'a> {
    fn parse(text: &'a str) -> Result<Self, FilterError> {
        let lines: Vec<&str> = text.lines().collect();
        let mut entries = Vec::new();
        let mut header_notes = Vec::new();
        let mut pending_notes: Vec<String> = Vec::new();

        let mut line_no = 0;
        while line_no < lines.len() {
            let trimmed = lines[line_no].trim_start();

            if trimmed.is_empty() {
                if entries.is_empty() && header_notes.is_empty() {
                    header_notes = std::mem::take(&mut pending_notes);
                } else {
                    pending_notes.clear();
                }
                line_no += 1;
                continue;
            }

            if let Some(comment) = trimmed.strip_prefix(['#', '!']) {
                pending_notes.push(comment.strip_prefix(' ').unwrap_or(comment).to_string());
                line_no += 1;
                continue;
            }

            // Join continuation lines into one logical line
            let first = line_no;
            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) && line_no + 1 < lines.len() {
                logical.pop();
                line_no += 1;
                logical.push_str(lines[line_no].trim_start());
            }
            if ends_with_continuation(&logical) {
                logical.pop();
            }

            let (raw_key, value_start) = split_key_value(&logical);
            let key = unescape(raw_key, first + 1)?;
            let value = unescape(&logical[value_start..], first + 1)?;

            let first_line = lines[first];
            let indent = &first_line[..first_line.len() - trimmed.len()];
            // Value starting on a continuation line: rebuild the separator
            let prefix = match first_line.get(..indent.len() + value_start) {
                Some(prefix) if value_start <= trimmed.len() => prefix.to_string(),
                _ => format!("{indent}{}=", escape_key(&key)),
            };

            entries.push(Entry {
                first,
                last: line_no,
                prefix,
                key,
                value,
                notes: std::mem::take(&mut pending_notes),
            });
            line_no += 1;
        }

        Ok(Self {
            lines,
            entries,
            header_notes,
            trailing_newline: text.ends_with('\n'),
        })
    }
}

/// An odd number of trailing backslashes continues the line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Split a logical line into the raw key and the byte offset of the value
fn split_key_value(line: &str) -> (&str, usize) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = idx;
                break;
            }
            _ => {}
        }
    }

    let rest = &line[key_end..];
    let mut offset = key_end;
    let after_ws = rest.trim_start_matches([' ', '\t', '\x0c']);
    offset += rest.len() - after_ws.len();
    if let Some(stripped) = after_ws.strip_prefix(['=', ':']) {
        offset += 1;
        let after_sep = stripped.trim_start_matches([' ', '\t', '\x0c']);
        offset += stripped.len() - after_sep.len();
    }
    (&line[..key_end], offset)
}

fn unescape(raw: &str, line: usize) -> Result<String, FilterError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut pending_high: Option<u16> = None;
    while let Some(c) = chars.next() {
        let escaped = if c == '\\' { chars.next() } else { None };
        // A high surrogate only pairs with an immediately following \u escape
        if escaped != Some('u') && pending_high.take().is_some() {
            out.push('\u{fffd}');
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match escaped {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let unit = u16::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .ok_or_else(|| FilterError::Syntax {
                        line,
                        message: format!("malformed \\uXXXX escape: \\u{hex}"),
                    })?;
                if let Some(high) = pending_high.take() {
                    out.extend(char::decode_utf16([high, unit]).map(|r| r.unwrap_or('\u{fffd}')));
                } else if (0xD800..0xDC00).contains(&unit) {
                    pending_high = Some(unit);
                } else {
                    out.extend(char::decode_utf16([unit]).map(|r| r.unwrap_or('\u{fffd}')));
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    if pending_high.is_some() {
        out.push('\u{fffd}');
    }
    Ok(out)
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            ' ' if is_key || idx == 0 => out.push_str("\\ "),
            '=' | ':' | '#' | '!' if is_key => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
        }
    }
    out
}

fn escape_key(key: &str) -> String {
    escape(key, true)
}

fn escape_value(value: &str) -> String {
    escape(value, false)
}

fn comment_line(note: &str) -> String {
    format!("# {note}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FilterOptions {
        FilterOptions::new("en")
    }

    fn parse(text: &str) -> LanguageBundle {
        PropertiesFilter.parse(text.as_bytes(), &options()).unwrap()
    }

    #[test]
    fn test_parse_separators() {
        let bundle = parse("a=1\nb: 2\nc 3\nd\t=\t4\n");
        let values: Vec<(&str, &str)> = bundle
            .strings()
            .iter()
            .map(|s| (s.key.as_str(), s.value.as_str()))
            .collect();
        assert_eq!(values, vec![("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
    }

    #[test]
    fn test_parse_sequence_numbers_follow_file_order() {
        let bundle = parse("z=1\na=2\n");
        assert_eq!(bundle.get("z").and_then(|s| s.sequence_number), Some(1));
        assert_eq!(bundle.get("a").and_then(|s| s.sequence_number), Some(2));
    }

    #[test]
    fn test_parse_notes() {
        let bundle = parse("# Copyright\n\n# Greeting shown on start\nhello=Hello\nbye=Bye\n");
        assert_eq!(bundle.notes, vec!["Copyright"]);
        assert_eq!(
            bundle.get("hello").map(|s| s.notes.clone()),
            Some(vec!["Greeting shown on start".to_string()])
        );
        assert!(bundle.get("bye").is_some_and(|s| s.notes.is_empty()));
    }

    #[test]
    fn test_parse_escapes_and_continuation() {
        let bundle = parse("greeting=Gr\\u00fc\\u00dfe\\n\\\n    zusammen\nkey\\ with\\ spaces=x\n");
        assert_eq!(
            bundle.get("greeting").map(|s| s.value.as_str()),
            Some("Grüße\nzusammen")
        );
        assert_eq!(bundle.get("key with spaces").map(|s| s.value.as_str()), Some("x"));
    }

    #[test]
    fn test_parse_surrogate_pair() {
        let bundle = parse("smile=\\uD83D\\uDE00\n");
        assert_eq!(bundle.get("smile").map(|s| s.value.as_str()), Some("😀"));
    }

    #[test]
    fn test_parse_lone_high_surrogate_keeps_order() {
        let bundle = parse("k=\\uD83Dxy\nend=\\uD83D\n");
        assert_eq!(bundle.get("k").map(|s| s.value.as_str()), Some("\u{fffd}xy"));
        assert_eq!(bundle.get("end").map(|s| s.value.as_str()), Some("\u{fffd}"));
    }

    #[test]
    fn test_parse_malformed_unicode_escape() {
        let err = PropertiesFilter
            .parse(b"a=ok\nb=\\u12G4\n", &options())
            .unwrap_err();
        assert!(matches!(err, FilterError::Syntax { line: 2, .. }));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let err = PropertiesFilter.parse(&[b'a', b'=', 0xff], &options()).unwrap_err();
        assert!(matches!(err, FilterError::Encoding(_)));
    }

    #[test]
    fn test_merge_replaces_values_and_keeps_layout() {
        let original = "# header\n\n# note\nhello = Hello\nmulti=one \\\n  two\nkeep=Keep\n";
        let mut bundle = LanguageBundle::new();
        bundle.add(ResourceString::new("hello", "Hallo"));
        bundle.add(ResourceString::new("multi", "eins zwei"));
        let merged = PropertiesFilter
            .merge(original.as_bytes(), &bundle, &FilterOptions::new("de"))
            .unwrap();
        assert_eq!(
            String::from_utf8(merged).unwrap(),
            "# header\n\n# note\nhello = Hallo\nmulti=eins zwei\nkeep=Keep\n"
        );
    }

    #[test]
    fn test_write_orders_and_escapes() {
        let mut bundle = LanguageBundle::new();
        bundle.add(ResourceString::new("b", "Grüße").with_sequence_number(2));
        bundle.add(
            ResourceString::new("a key", " lead")
                .with_sequence_number(1)
                .with_notes(vec!["first".to_string()]),
        );
        let written = PropertiesFilter
            .write(&bundle, &FilterOptions::new("de"))
            .unwrap();
        assert_eq!(
            String::from_utf8(written).unwrap(),
            "#Language: de\n\n# first\na\\ key=\\ lead\nb=Gr\\u00FC\\u00DFe\n"
        );
    }

    #[test]
    fn test_written_document_parses_back() {
        let mut bundle = LanguageBundle::new();
        bundle.add(ResourceString::new("path", "C:\\temp\\new").with_sequence_number(1));
        let written = PropertiesFilter.write(&bundle, &options()).unwrap();
        let parsed = PropertiesFilter.parse(&written, &options()).unwrap();
        assert_eq!(parsed.get("path").map(|s| s.value.as_str()), Some("C:\\temp\\new"));
    }
}
