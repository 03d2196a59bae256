//! Common test utilities for gpsync integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables read by the binary that must not leak in from the
/// developer's shell
const INHERITED_ENV: &[&str] = &[
    "GP_URL",
    "GP_INSTANCE_ID",
    "GP_USER_ID",
    "GP_PASSWORD",
    "GPSYNC_CONFIG",
    "GPSYNC_WORKSPACE",
    "GPSYNC_LOG",
];

/// Store document with one account and no bundles
pub const EMPTY_STORE: &str = r#"{
  "instance_id": "demo",
  "users": { "writer": "secret" },
  "bundles": {}
}
"#;

/// Workspace configuration pointing at `store.json` with `de` and `fr` targets
pub const CONFIG: &str = r#"service:
  url: file:store.json
  instance_id: demo
  user_id: writer
  password: secret
base_dir: res
include: "**/*.properties"
type: java
source_language: en
target_languages:
  de: de
  fr: fr
out_dir: out
"#;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Workspace with `gpsync.yaml`, an empty store and one properties file
    pub fn with_messages() -> Self {
        let workspace = Self::new();
        workspace.write_file("gpsync.yaml", CONFIG);
        workspace.write_file("store.json", EMPTY_STORE);
        workspace.write_file(
            "res/app/Messages.properties",
            "# Greetings\ngreeting=Hello\nfarewell=Bye\n",
        );
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse the store document
    pub fn store(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("store.json")).expect("Failed to parse store.json")
    }

    /// Command running the gpsync binary inside this workspace
    pub fn gpsync(&self) -> Command {
        let mut cmd = gpsync_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// gpsync binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn gpsync_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gpsync").unwrap();
    for name in INHERITED_ENV {
        cmd.env_remove(name);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("a/b.txt", "content");
        assert!(workspace.file_exists("a/b.txt"));
        assert_eq!(workspace.read_file("a/b.txt"), "content");
    }

    #[test]
    fn test_workspace_with_messages() {
        let workspace = TestWorkspace::with_messages();
        assert!(workspace.file_exists("gpsync.yaml"));
        assert_eq!(workspace.store()["instance_id"], "demo");
    }
}
