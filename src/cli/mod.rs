//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - sync: Arguments shared by upload and download
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod sync;

pub use completions::CompletionsArgs;
pub use sync::SyncArgs;

/// gpsync - localization bundle synchronization
///
/// Upload source-language resource files to a translation bundle store and
/// download their translations into a configurable directory layout.
#[derive(Parser, Debug)]
#[command(
    name = "gpsync",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Synchronize localizable resource files with a translation bundle store",
    long_about = "gpsync uploads source-language resource files (Java properties, JSON) into \
                  translation bundles and downloads the translated content back into the \
                  workspace, one file per bundle and language.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  gpsync upload                              \x1b[90m# Upload using gpsync.yaml\x1b[0m\n   \
                  gpsync download --layout lang_subdir       \x1b[90m# Download into per-language directories\x1b[0m\n   \
                  gpsync download --overwrite                \x1b[90m# Replace existing translated files\x1b[0m\n   \
                  gpsync upload --lang-map '{\"de\":\"de\"}'   \x1b[90m# Override target languages\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "GPSYNC_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload source-language resource files to their bundles
    Upload(SyncArgs),

    /// Download translated resource files from their bundles
    Download(SyncArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
