//! Cross-platform path utilities for gpsync
//!
//! Resource identity is derived from paths, so every path that feeds a bundle
//! id or a glob match is first reduced to forward-slash separated segments.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes.
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("C:\\Users\\file.txt"));
/// assert_eq!(forward, "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Split a relative path into its normal segments.
///
/// `.` segments and empty segments are dropped, so `./a//b/` yields `["a", "b"]`.
pub fn segments(path: &Path) -> Vec<String> {
    to_forward_slashes(path)
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(ToString::to_string)
        .collect()
}

/// Join segments onto a root directory
pub fn join_segments<S: AsRef<str>>(root: &Path, segments: &[S]) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in segments {
        path.push(segment.as_ref());
    }
    path
}

/// Resolve a configured directory against the workspace root.
///
/// Absolute paths are kept as they are; relative paths are joined to `root`.
/// Leading `./` components are dropped so logged paths stay readable.
pub fn resolve_in(root: &Path, configured: &str) -> PathBuf {
    let configured = Path::new(configured.trim());
    if configured.is_absolute() {
        return configured.to_path_buf();
    }
    let mut path = root.to_path_buf();
    for component in configured.components() {
        match component {
            Component::CurDir => {}
            other => path.push(other.as_os_str()),
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_forward_slashes_unix() {
        let path = Path::new("/usr/local/bin");
        assert_eq!(to_forward_slashes(path), "/usr/local/bin");
    }

    #[test]
    fn test_to_forward_slashes_windows() {
        let path = Path::new("C:\\Users\\file.txt");
        assert_eq!(to_forward_slashes(path), "C:/Users/file.txt");
    }

    #[test]
    fn test_to_forward_slashes_empty() {
        assert_eq!(to_forward_slashes(Path::new("")), "");
    }

    #[test]
    fn test_segments_drops_empty_and_current() {
        assert_eq!(segments(Path::new("./a//b/")), vec!["a", "b"]);
        assert!(segments(Path::new("")).is_empty());
    }

    #[test]
    fn test_segments_backslashes() {
        assert_eq!(segments(Path::new("com\\example\\res")), vec!["com", "example", "res"]);
    }

    #[test]
    fn test_join_segments() {
        let joined = join_segments(Path::new("out"), &["a", "b"]);
        assert_eq!(joined, PathBuf::from("out/a/b"));
        let empty: [&str; 0] = [];
        assert_eq!(join_segments(Path::new("out"), &empty), PathBuf::from("out"));
    }

    #[test]
    fn test_resolve_in_relative_and_absolute() {
        assert_eq!(
            resolve_in(Path::new("/ws"), "./src/main/resources"),
            PathBuf::from("/ws/src/main/resources")
        );
        assert_eq!(resolve_in(Path::new("/ws"), "/abs/out"), PathBuf::from("/abs/out"));
    }
}
