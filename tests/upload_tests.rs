//! Upload integration tests against a file-backed bundle store

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_upload_creates_bundle() {
    let workspace = TestWorkspace::with_messages();

    workspace
        .gpsync()
        .arg("upload")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upload complete"))
        .stderr(predicate::str::contains("Creating a new bundle"));

    let store = workspace.store();
    let bundle = &store["bundles"]["app.Messages"];
    assert_eq!(bundle["source_language"], "en");
    assert_eq!(bundle["target_languages"], serde_json::json!(["de", "fr"]));
    assert_eq!(bundle["entries"]["en"]["greeting"]["value"], "Hello");
    assert_eq!(bundle["entries"]["en"]["farewell"]["value"], "Bye");
}

#[test]
fn test_second_upload_reuses_bundle() {
    let workspace = TestWorkspace::with_messages();
    workspace.gpsync().arg("upload").assert().success();

    workspace.write_file(
        "res/app/Messages.properties",
        "greeting=Hello there\nfarewell=Bye\n",
    );
    workspace
        .gpsync()
        .arg("upload")
        .assert()
        .success()
        .stderr(predicate::str::contains("Found an existing bundle"));

    let store = workspace.store();
    assert_eq!(
        store["bundles"]["app.Messages"]["entries"]["en"]["greeting"]["value"],
        "Hello there"
    );
}

#[test]
fn test_upload_json_from_command_line() {
    let workspace = TestWorkspace::with_messages();
    workspace.write_file("web/i18n/strings.json", r#"{"title": "Welcome"}"#);

    workspace
        .gpsync()
        .args([
            "upload",
            "--base-dir",
            "web",
            "--include",
            "**/*.json",
            "--type",
            "json",
        ])
        .assert()
        .success();

    let store = workspace.store();
    assert_eq!(
        store["bundles"]["i18n-strings.json"]["entries"]["en"]["title"]["value"],
        "Welcome"
    );
}

#[test]
fn test_upload_source_language_mismatch() {
    let workspace = TestWorkspace::with_messages();
    workspace.write_file(
        "store.json",
        r#"{
  "instance_id": "demo",
  "users": { "writer": "secret" },
  "bundles": {
    "app.Messages": { "source_language": "fr", "target_languages": ["de"] }
  }
}
"#,
    );

    workspace
        .gpsync()
        .arg("upload")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "The source language in bundle:app.Messages(fr) does not match the specified language(en)",
        ));
}

#[test]
fn test_upload_skips_unparsable_file() {
    let workspace = TestWorkspace::with_messages();
    workspace.write_file("res/app/Broken.json", "{ not json");

    workspace
        .gpsync()
        .args(["upload", "--include", "**/*.json", "--type", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Failed to parse the resource data from app/Broken.json",
        ));

    let store = workspace.store();
    assert!(store["bundles"].as_object().unwrap().is_empty());
}
