//! Fixtures shared by the operation tests

use std::fs;

use tempfile::TempDir;

use crate::config::RunSettings;
use crate::discovery;
use crate::domain::{ContentPolicy, LanguageIdStyle, LayoutStrategy};
use crate::store::ServiceAccount;

/// Settings over a temporary workspace holding `files` below `res/`.
///
/// Source language `en`, targets `de` and `fr`, output below `out/`.
pub fn settings(resource_type: &str, files: &[(&str, &str)]) -> (TempDir, RunSettings) {
    let temp = TempDir::new().unwrap();
    let base_dir = temp.path().join("res");
    fs::create_dir_all(&base_dir).unwrap();
    for (path, content) in files {
        let path = base_dir.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    let selection = discovery::discover(&base_dir, "**/*", "").unwrap();
    let settings = RunSettings {
        account: ServiceAccount {
            url: "memory".to_string(),
            instance_id: "test".to_string(),
            user_id: "tester".to_string(),
            password: "secret".to_string(),
        },
        base_dir,
        include: "**/*".to_string(),
        exclude: String::new(),
        resource_type: resource_type.to_string(),
        source_language: "en".to_string(),
        language_map: [("de", "de"), ("fr", "fr")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        language_id_style: LanguageIdStyle::default(),
        output_source_language: false,
        content_policy: ContentPolicy::default(),
        layout: LayoutStrategy::default(),
        out_dir: temp.path().join("out"),
        overwrite: false,
        files: selection.files,
    };
    (temp, settings)
}
