//! Configuration handling for gpsync
//!
//! Settings come from a `gpsync.yaml` document, overridden field by field
//! from the command line and environment. [`settings::validate`] turns the
//! merged [`SyncConfig`] into the immutable [`RunSettings`] of one run.

pub mod settings;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

pub use settings::{RunSettings, validate};

/// Configuration filename looked up in the workspace
pub const CONFIG_FILE: &str = "gpsync.yaml";

/// Configuration filename in the user configuration directory
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Bundle store connection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub url: Option<String>,
    pub instance_id: Option<String>,
    pub user_id: Option<String>,
    pub password: Option<String>,
}

/// Target languages, given either as a table or as a JSON object string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageMapSource {
    Json(String),
    Table(BTreeMap<String, serde_json::Value>),
}

/// Raw run configuration; every field is optional until validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub service: ServiceConfig,
    pub base_dir: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub source_language: Option<String>,
    pub target_languages: Option<LanguageMapSource>,
    pub language_id_style: Option<String>,
    pub output_source_language: Option<bool>,
    pub output_content: Option<String>,
    pub layout: Option<String>,
    pub out_dir: Option<String>,
    pub overwrite: Option<bool>,
}

macro_rules! override_fields {
    ($target:expr, $source:expr, $($field:ident).+) => {
        if $source.$($field).+.is_some() {
            $target.$($field).+ = $source.$($field).+;
        }
    };
}

impl SyncConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Load the configuration for `workspace`.
    ///
    /// An explicit file must exist. Otherwise `gpsync.yaml` in the workspace
    /// is used, then the user configuration, then an empty configuration.
    /// Returns the configuration and the file it was read from.
    pub fn load(explicit: Option<&Path>, workspace: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(config::not_found(path.display().to_string()));
            }
            return Ok((Self::read(path)?, Some(path.to_path_buf())));
        }

        let candidates = [
            Some(workspace.join(CONFIG_FILE)),
            dirs::config_dir().map(|dir| dir.join("gpsync").join(USER_CONFIG_FILE)),
        ];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Ok((Self::read(&path)?, Some(path)));
            }
        }
        Ok((Self::default(), None))
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content, path)
    }

    /// Replace every field that is set in `overrides`
    pub fn apply(&mut self, overrides: SyncConfig) {
        override_fields!(self, overrides, service.url);
        override_fields!(self, overrides, service.instance_id);
        override_fields!(self, overrides, service.user_id);
        override_fields!(self, overrides, service.password);
        override_fields!(self, overrides, base_dir);
        override_fields!(self, overrides, include);
        override_fields!(self, overrides, exclude);
        override_fields!(self, overrides, resource_type);
        override_fields!(self, overrides, source_language);
        override_fields!(self, overrides, target_languages);
        override_fields!(self, overrides, language_id_style);
        override_fields!(self, overrides, output_source_language);
        override_fields!(self, overrides, output_content);
        override_fields!(self, overrides, layout);
        override_fields!(self, overrides, out_dir);
        override_fields!(self, overrides, overwrite);
    }
}
