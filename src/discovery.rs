//! Resource file discovery
//!
//! Walks the base directory and selects files with ANT-style include and
//! exclude patterns. Both accept a comma-separated list; a pattern ending in
//! `/` selects everything below that directory.

use std::path::Path;

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::domain::ResourceFile;
use crate::error::{Result, config};
use crate::path_utils;

/// Outcome of matching the base directory against the patterns
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    /// Files matched by the include patterns before exclusion
    pub included: usize,
    /// Included files not excluded, in path order
    pub files: Vec<ResourceFile>,
}

/// Split a pattern list into normalized glob expressions
pub fn split_patterns(patterns: &str) -> Vec<String> {
    patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let p = p.replace('\\', "/");
            let p = p.trim_start_matches('/');
            if p.ends_with('/') {
                format!("{p}**")
            } else {
                p.to_string()
            }
        })
        .collect()
}

fn compile(patterns: &[String]) -> Result<Vec<Glob<'_>>> {
    patterns
        .iter()
        .map(|p| {
            Glob::new(p).map_err(|e| config::invalid(format!("invalid file pattern '{p}': {e}")))
        })
        .collect()
}

/// Enumerate the files below `base_dir` selected by `include` minus `exclude`
pub fn discover(base_dir: &Path, include: &str, exclude: &str) -> Result<FileSelection> {
    let include_patterns = split_patterns(include);
    let exclude_patterns = split_patterns(exclude);
    let includes = compile(&include_patterns)?;
    let excludes = compile(&exclude_patterns)?;

    let mut selection = FileSelection::default();
    for entry in WalkDir::new(base_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let Ok(relative) = entry.path().strip_prefix(base_dir) else {
            continue;
        };
        let normalized = path_utils::to_forward_slashes(relative);
        let candidate = CandidatePath::from(normalized.as_str());

        if !includes.iter().any(|g| g.matched(&candidate).is_some()) {
            continue;
        }
        selection.included += 1;

        if excludes.iter().any(|g| g.matched(&candidate).is_some()) {
            tracing::debug!(path = %normalized, "Excluded");
            continue;
        }
        if let Some(file) = ResourceFile::new(base_dir, relative) {
            selection.files.push(file);
        }
    }

    Ok(selection)
}
