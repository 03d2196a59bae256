//! Validated run settings
//!
//! [`validate`] checks a merged [`SyncConfig`] in a fixed order and stops at
//! the first problem, so a run never reaches the store with a bad setting.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{LanguageMapSource, SyncConfig};
use crate::discovery;
use crate::domain::{ContentPolicy, LanguageIdStyle, LanguageMapping, LayoutStrategy, ResourceFile};
use crate::error::{Result, config};
use crate::filter;
use crate::path_utils;
use crate::store::ServiceAccount;

/// Output directory used when none is configured
pub const DEFAULT_OUT_DIR: &str = "target/classes";

/// Everything one upload or download run needs, fixed at start
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub account: ServiceAccount,
    pub base_dir: PathBuf,
    pub include: String,
    pub exclude: String,
    /// Lowercased resource type, always backed by a filter
    pub resource_type: String,
    pub source_language: String,
    pub language_map: LanguageMapping,
    pub language_id_style: LanguageIdStyle,
    pub output_source_language: bool,
    pub content_policy: ContentPolicy,
    pub layout: LayoutStrategy,
    pub out_dir: PathBuf,
    pub overwrite: bool,
    /// Files selected by include minus exclude, in path order
    pub files: Vec<ResourceFile>,
}

fn required(value: Option<&String>, name: &str) -> Result<String> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(config::missing(name)),
    }
}

fn optional(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Validate `raw` against the workspace and build the run settings
pub fn validate(raw: &SyncConfig, workspace: &Path) -> Result<RunSettings> {
    let account = ServiceAccount {
        url: required(raw.service.url.as_ref(), "service.url")?,
        instance_id: required(raw.service.instance_id.as_ref(), "service.instance_id")?,
        user_id: required(raw.service.user_id.as_ref(), "service.user_id")?,
        password: required(raw.service.password.as_ref(), "service.password")?,
    };

    let base_dir_setting = required(raw.base_dir.as_ref(), "base_dir")?;
    let include = required(raw.include.as_ref(), "include")?;
    let base_dir = path_utils::resolve_in(workspace, &base_dir_setting);
    if !base_dir.is_dir() {
        return Err(config::base_dir_not_found(base_dir.display().to_string()));
    }

    let exclude = optional(raw.exclude.as_ref()).unwrap_or_default().to_string();
    if include == exclude {
        return Err(config::same_patterns(include));
    }

    let selection = discovery::discover(&base_dir, &include, &exclude)?;
    if selection.included == 0 {
        return Err(config::no_files(format!(
            "no files under {} match the include rule '{include}'",
            base_dir.display()
        )));
    }
    if selection.files.is_empty() {
        return Err(config::no_files(format!(
            "the exclude rule '{exclude}' removes every file matched by '{include}'"
        )));
    }

    let source_language = required(raw.source_language.as_ref(), "source_language")?;
    let language_map = parse_language_map(raw.target_languages.as_ref())?;

    let resource_type = required(raw.resource_type.as_ref(), "type")?.to_ascii_lowercase();
    if filter::filter_for(&resource_type).is_none() {
        return Err(config::unsupported_type(resource_type));
    }

    let out_dir = match optional(raw.out_dir.as_ref()) {
        Some(out_dir) => path_utils::resolve_in(workspace, out_dir),
        None => {
            tracing::info!("Output directory not set, using {DEFAULT_OUT_DIR}");
            path_utils::resolve_in(workspace, DEFAULT_OUT_DIR)
        }
    };
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(config::output_not_directory(out_dir.display().to_string()));
    }

    let layout = match optional(raw.layout.as_ref()) {
        Some(name) => name.parse::<LayoutStrategy>().map_err(config::invalid)?,
        None => LayoutStrategy::default(),
    };
    let content_policy = match optional(raw.output_content.as_ref()) {
        Some(name) => name.parse::<ContentPolicy>().map_err(config::invalid)?,
        None => ContentPolicy::default(),
    };
    let language_id_style = match optional(raw.language_id_style.as_ref()) {
        Some(name) => {
            let (style, known) = LanguageIdStyle::parse_lenient(name);
            if !known {
                tracing::warn!(
                    "Unknown language id style '{name}', using {}",
                    style.as_str()
                );
            }
            style
        }
        None => LanguageIdStyle::default(),
    };

    if layout.needs_parent_dir() {
        if let Some(file) = selection.files.iter().find(|f| f.dir_segments().is_empty()) {
            return Err(config::layout_needs_parent(file.relative_path(), layout.as_str()));
        }
    }

    Ok(RunSettings {
        account,
        base_dir,
        include,
        exclude,
        resource_type,
        source_language,
        language_map,
        language_id_style,
        output_source_language: raw.output_source_language.unwrap_or(false),
        content_policy,
        layout,
        out_dir,
        overwrite: raw.overwrite.unwrap_or(false),
        files: selection.files,
    })
}

/// Parse the target language map: a non-empty JSON object whose values are
/// non-empty strings
pub fn parse_language_map(source: Option<&LanguageMapSource>) -> Result<LanguageMapping> {
    let object = match source {
        None => return Err(config::missing("target_languages")),
        Some(LanguageMapSource::Json(json)) => {
            if json.trim().is_empty() {
                return Err(config::missing("target_languages"));
            }
            match serde_json::from_str::<serde_json::Value>(json) {
                Ok(serde_json::Value::Object(map)) => map.into_iter().collect::<BTreeMap<_, _>>(),
                Ok(_) => return Err(config::language_map("not a JSON object")),
                Err(e) => return Err(config::language_map(e.to_string())),
            }
        }
        Some(LanguageMapSource::Table(table)) => table.clone(),
    };

    if object.is_empty() {
        return Err(config::language_map("no target language specified"));
    }

    object
        .into_iter()
        .map(|(tag, value)| match value {
            serde_json::Value::String(id) if !id.trim().is_empty() => Ok((tag, id.trim().to_string())),
            _ => Err(config::language_map(format!(
                "language id for '{tag}' must be a non-empty string"
            ))),
        })
        .collect()
}
