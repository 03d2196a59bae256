//! Resource file domain type
//!
//! A [`ResourceFile`] is a local file selected for one run, addressed by its
//! path relative to the configured base directory.

use std::path::{Path, PathBuf};

use crate::path_utils;

/// A resource file enumerated under the base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    absolute_path: PathBuf,
    /// Directory segments between the base directory and the file
    dir_segments: Vec<String>,
    file_name: String,
}

impl ResourceFile {
    /// Create a resource file from the base directory and a base-relative path
    /// (e.g. `com/example/Messages.properties`).
    ///
    /// Returns `None` when the relative path has no file name.
    pub fn new(base_dir: &Path, relative_path: &Path) -> Option<Self> {
        let mut segments = path_utils::segments(relative_path);
        let file_name = segments.pop()?;
        let absolute_path = path_utils::join_segments(base_dir, &segments).join(&file_name);
        Some(Self {
            absolute_path,
            dir_segments: segments,
            file_name,
        })
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// Directory segments from the base directory to the file's parent,
    /// empty when the file sits directly under the base directory
    pub fn dir_segments(&self) -> &[String] {
        &self.dir_segments
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Extension after the last `.`, if any
    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .rfind('.')
            .map(|idx| &self.file_name[idx + 1..])
    }

    /// Base-relative path with forward slashes (e.g. `com/example/Messages.properties`)
    pub fn relative_path(&self) -> String {
        let mut parts: Vec<&str> = self.dir_segments.iter().map(String::as_str).collect();
        parts.push(&self.file_name);
        parts.join("/")
    }
}

impl std::fmt::Display for ResourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.relative_path())
    }
}
