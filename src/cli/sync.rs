use clap::Parser;
use std::path::PathBuf;

use crate::config::{LanguageMapSource, ServiceConfig, SyncConfig};

/// Arguments shared by upload and download. Each option overrides the
/// setting of the same name in the configuration file.
#[derive(Parser, Debug, Default, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Upload with settings from gpsync.yaml:\n    gpsync upload\n\n\
                  Upload JSON files from another directory:\n    gpsync upload --base-dir web/i18n --include '**/*.json' --type json\n\n\
                  Download with reviewed strings only:\n    gpsync download --output-content reviewed_only")]
pub struct SyncArgs {
    /// Configuration file (defaults to gpsync.yaml in the workspace)
    #[arg(long, short = 'c', env = "GPSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bundle store URL (file: URL or path)
    #[arg(long, env = "GP_URL")]
    pub url: Option<String>,

    /// Bundle store instance id
    #[arg(long, env = "GP_INSTANCE_ID")]
    pub instance_id: Option<String>,

    /// Bundle store user id
    #[arg(long, env = "GP_USER_ID")]
    pub user_id: Option<String>,

    /// Bundle store password
    #[arg(long, env = "GP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory holding the source resource files, relative to the workspace
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Comma-separated ANT-style patterns of files to include
    #[arg(long)]
    pub include: Option<String>,

    /// Comma-separated ANT-style patterns of files to exclude
    #[arg(long)]
    pub exclude: Option<String>,

    /// Resource type (java, json)
    #[arg(long = "type", value_name = "TYPE")]
    pub resource_type: Option<String>,

    /// Source language tag
    #[arg(long)]
    pub source_language: Option<String>,

    /// Target languages as a JSON object of language tag to language id
    #[arg(long, value_name = "JSON")]
    pub lang_map: Option<String>,

    /// Language id style in output names (bcp47, bcp47_underscore)
    #[arg(long)]
    pub language_id_style: Option<String>,

    /// Also download the source language (`--output-source-language=false`
    /// turns a configured `true` off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub output_source_language: Option<bool>,

    /// Output content (merge_to_src, trans_with_fallback, trans_only,
    /// merge_reviewed_to_src, reviewed_with_fallback, reviewed_only)
    #[arg(long)]
    pub output_content: Option<String>,

    /// Output layout (lang_suffix, lang_only, lang_subdir, lang_dir)
    #[arg(long)]
    pub layout: Option<String>,

    /// Output directory, relative to the workspace
    #[arg(long)]
    pub out_dir: Option<String>,

    /// Replace output files that already exist (`--overwrite=false` turns a
    /// configured `true` off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub overwrite: Option<bool>,
}

impl SyncArgs {
    /// Settings given on the command line or through the environment
    pub fn overrides(&self) -> SyncConfig {
        SyncConfig {
            service: ServiceConfig {
                url: self.url.clone(),
                instance_id: self.instance_id.clone(),
                user_id: self.user_id.clone(),
                password: self.password.clone(),
            },
            base_dir: self.base_dir.clone(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            resource_type: self.resource_type.clone(),
            source_language: self.source_language.clone(),
            target_languages: self.lang_map.clone().map(LanguageMapSource::Json),
            language_id_style: self.language_id_style.clone(),
            output_source_language: self.output_source_language,
            output_content: self.output_content.clone(),
            layout: self.layout.clone(),
            out_dir: self.out_dir.clone(),
            overwrite: self.overwrite,
        }
    }
}
