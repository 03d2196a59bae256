//! Output path resolution
//!
//! Every layout starts from the source file's directory below the base
//! directory (`rel`), re-rooted under the output directory (`out`):
//!
//! | layout        | `rel/messages.json`, target `fr` |
//! |---------------|----------------------------------|
//! | `lang_suffix` | `out/rel/messages_fr.json`       |
//! | `lang_only`   | `out/<rel minus last>/fr.json`   |
//! | `lang_subdir` | `out/rel/fr/messages.json`       |
//! | `lang_dir`    | `out/<rel minus last>/fr/messages.json` |

use std::path::{Path, PathBuf};

use crate::domain::{LanguageIdStyle, LanguageMapping, LayoutStrategy, ResourceFile};
use crate::error::{Result, config};
use crate::path_utils;
use crate::resolver::language_id;

/// Computes destination paths for one run's layout settings
#[derive(Debug, Clone, Copy)]
pub struct OutputPathResolver<'a> {
    out_base: &'a Path,
    layout: LayoutStrategy,
    source_language: &'a str,
    style: LanguageIdStyle,
    mapping: &'a LanguageMapping,
}

impl<'a> OutputPathResolver<'a> {
    pub fn new(
        out_base: &'a Path,
        layout: LayoutStrategy,
        source_language: &'a str,
        style: LanguageIdStyle,
        mapping: &'a LanguageMapping,
    ) -> Self {
        Self {
            out_base,
            layout,
            source_language,
            style,
            mapping,
        }
    }

    /// Destination of `file` exported in `language`.
    ///
    /// Fails only for `lang_only` and `lang_dir` when the file sits directly
    /// under the base directory, since those layouts write next to its parent.
    pub fn resolve(&self, file: &ResourceFile, language: &str) -> Result<PathBuf> {
        let rel = file.dir_segments();
        let file_name = file.file_name();

        let path = match self.layout {
            LayoutStrategy::LangSuffix => path_utils::join_segments(self.out_base, rel)
                .join(self.suffixed_name(file_name, language)),
            LayoutStrategy::LangOnly => {
                let extension = file.extension().map_or(String::new(), |ext| format!(".{ext}"));
                self.parent_of_rel(file)?
                    .join(format!("{}{extension}", self.id(language)))
            }
            LayoutStrategy::LangSubdir => path_utils::join_segments(self.out_base, rel)
                .join(self.id(language))
                .join(file_name),
            LayoutStrategy::LangDir => self
                .parent_of_rel(file)?
                .join(self.id(language))
                .join(file_name),
        };
        Ok(path)
    }

    fn id(&self, language: &str) -> String {
        language_id(language, self.style, Some(self.mapping))
    }

    /// `out/rel` without its last segment
    fn parent_of_rel(&self, file: &ResourceFile) -> Result<PathBuf> {
        match file.dir_segments().split_last() {
            Some((_, parent)) => Ok(path_utils::join_segments(self.out_base, parent)),
            None => Err(config::layout_needs_parent(
                file.relative_path(),
                self.layout.as_str(),
            )),
        }
    }

    /// `messages_en.properties` -> `messages_de.properties`
    fn suffixed_name(&self, file_name: &str, language: &str) -> String {
        if language == self.source_language {
            return file_name.to_string();
        }

        // A leading dot does not start an extension (.properties is a base name)
        let (base, extension) = match file_name.rfind('.') {
            Some(idx) if idx > 0 => file_name.split_at(idx),
            _ => (file_name, ""),
        };
        let source_suffix = format!("_{}", self.id(self.source_language));
        let base = base.strip_suffix(&source_suffix).unwrap_or(base);

        format!("{base}_{}{extension}", self.id(language))
    }
}
