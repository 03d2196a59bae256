//! Command helper utilities

use std::path::PathBuf;

use console::Style;

use crate::cli::SyncArgs;
use crate::config::SyncConfig;
use crate::error::{Result, fs};
use crate::operations::{SyncGoal, SyncOperation, SyncReport};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))?,
    };
    dunce::canonicalize(&path).map_err(|e| {
        fs::io_error(format!("Failed to resolve workspace {}: {e}", path.display()))
    })
}

/// Load configuration, apply command line overrides and run one pass
pub fn run_sync(goal: SyncGoal, workspace: Option<PathBuf>, args: &SyncArgs) -> Result<()> {
    let workspace = resolve_workspace_path(workspace)?;

    let (mut config, source) = SyncConfig::load(args.config.as_deref(), &workspace)?;
    match source {
        Some(path) => tracing::info!("Using configuration {}", path.display()),
        None => tracing::info!("No configuration file found, using command line settings"),
    }
    config.apply(args.overrides());

    let report = SyncOperation::new(goal).execute(&config, &workspace)?;
    print_report(goal, &report);
    Ok(())
}

/// Report lines of a finished run; counters that stayed at zero are omitted
pub fn report_lines(goal: SyncGoal, report: &SyncReport) -> Vec<(&'static str, usize)> {
    let lines = match goal {
        SyncGoal::Upload => vec![
            ("bundles created", report.bundles_created),
            ("files uploaded", report.files_uploaded),
            ("files without entries", report.files_without_entries),
            ("files skipped", report.files_skipped),
        ],
        SyncGoal::Download => vec![
            ("files written", report.outputs_written),
            ("files overwritten", report.outputs_overwritten),
            ("files skipped", report.outputs_skipped),
            ("bundles missing", report.bundles_missing),
            ("languages not in bundle", report.languages_skipped),
        ],
    };
    lines.into_iter().filter(|(_, count)| *count > 0).collect()
}

fn print_report(goal: SyncGoal, report: &SyncReport) {
    let title = match goal {
        SyncGoal::Upload => "Upload complete",
        SyncGoal::Download => "Download complete",
    };
    println!("{}", Style::new().bold().green().apply_to(title));
    for (label, count) in report_lines(goal, report) {
        println!("  {}: {count}", Style::new().bold().apply_to(label));
    }
}
