//! File-backed bundle store
//!
//! The whole store is one JSON document:
//!
//! ```json
//! {
//!   "instance_id": "demo",
//!   "users": { "writer": "secret" },
//!   "bundles": {
//!     "com.example.Messages": {
//!       "source_language": "en",
//!       "target_languages": ["de"],
//!       "entries": {
//!         "en": { "greeting": { "value": "Hello", "sequence_number": 1 } },
//!         "de": { "greeting": { "value": "Hallo", "reviewed": true } }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Every mutation rewrites the document atomically.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{BundleInfo, NewBundle, NewResourceEntry, ResourceEntry};
use crate::error::{Result, service};
use crate::store::{BundleStore, ServiceAccount};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    users: BTreeMap<String, String>,
    #[serde(default)]
    bundles: BTreeMap<String, StoredBundle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredBundle {
    source_language: String,
    #[serde(default)]
    target_languages: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
    /// language -> key -> entry
    #[serde(default)]
    entries: BTreeMap<String, BTreeMap<String, StoredEntry>>,
}

impl StoredBundle {
    fn has_language(&self, language: &str) -> bool {
        self.source_language == language || self.target_languages.contains(language)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sequence_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    reviewed: bool,
}

/// Bundle store kept in a local JSON document
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    document: StoreDocument,
}

impl FileStore {
    /// Load the store document and check the account against it
    pub fn open(path: &Path, account: &ServiceAccount) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                service::unavailable(format!("store document {} not found", path.display()))
            } else {
                service::unavailable(format!("cannot read {}: {e}", path.display()))
            }
        })?;
        let document: StoreDocument = serde_json::from_str(&content).map_err(|e| {
            service::unavailable(format!("malformed store document {}: {e}", path.display()))
        })?;

        if let Some(found) = document
            .instance_id
            .as_ref()
            .filter(|found| **found != account.instance_id)
        {
            return Err(service::instance_mismatch(&account.instance_id, found));
        }
        if !document.users.is_empty()
            && document.users.get(&account.user_id) != Some(&account.password)
        {
            return Err(service::unavailable(format!(
                "invalid credentials for user '{}'",
                account.user_id
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    fn bundle(&self, id: &str) -> Result<&StoredBundle> {
        self.document
            .bundles
            .get(id)
            .ok_or_else(|| service::bundle_not_found(id))
    }

    fn save(&self, operation: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.document)
            .map_err(|e| service::request_failed(operation, e.to_string()))?;

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| service::request_failed(operation, e.to_string()))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.write_all(b"\n"))
            .map_err(|e| service::request_failed(operation, e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| service::request_failed(operation, e.to_string()))?;
        Ok(())
    }
}

impl BundleStore for FileStore {
    fn list_bundle_ids(&self) -> Result<BTreeSet<String>> {
        Ok(self.document.bundles.keys().cloned().collect())
    }

    fn get_bundle_info(&self, id: &str) -> Result<BundleInfo> {
        let bundle = self.bundle(id)?;
        Ok(BundleInfo {
            source_language: bundle.source_language.clone(),
            target_languages: bundle.target_languages.clone(),
        })
    }

    fn create_bundle(&mut self, id: &str, bundle: &NewBundle) -> Result<()> {
        if self.document.bundles.contains_key(id) {
            return Err(service::request_failed(
                "create_bundle",
                format!("bundle '{id}' already exists"),
            ));
        }

        let mut target_languages = bundle.target_languages.clone();
        target_languages.remove(&bundle.source_language);
        self.document.bundles.insert(
            id.to_string(),
            StoredBundle {
                source_language: bundle.source_language.clone(),
                target_languages,
                notes: bundle.notes.clone(),
                entries: BTreeMap::new(),
            },
        );
        self.save("create_bundle")
    }

    fn get_resource_entries(&self, id: &str, language: &str) -> Result<BTreeMap<String, ResourceEntry>> {
        let bundle = self.bundle(id)?;
        if !bundle.has_language(language) {
            return Err(service::request_failed(
                "get_resource_entries",
                format!("language '{language}' is not part of bundle '{id}'"),
            ));
        }

        let is_source = bundle.source_language == language;
        let translations = bundle.entries.get(language);
        let entries = bundle
            .entries
            .get(&bundle.source_language)
            .into_iter()
            .flatten()
            .map(|(key, source)| {
                let (value, reviewed) = if is_source {
                    // Source text is authoritative
                    (Some(source.value.clone()), true)
                } else {
                    translations
                        .and_then(|t| t.get(key))
                        .map_or((None, false), |t| (Some(t.value.clone()), t.reviewed))
                };
                let entry = ResourceEntry {
                    value,
                    source_value: Some(source.value.clone()),
                    sequence_number: source.sequence_number,
                    notes: source.notes.clone(),
                    reviewed,
                };
                (key.clone(), entry)
            })
            .collect();
        Ok(entries)
    }

    fn upload_resource_entries(
        &mut self,
        id: &str,
        language: &str,
        entries: &BTreeMap<String, NewResourceEntry>,
    ) -> Result<()> {
        let bundle = self
            .document
            .bundles
            .get_mut(id)
            .ok_or_else(|| service::bundle_not_found(id))?;
        if !bundle.has_language(language) {
            return Err(service::request_failed(
                "upload_resource_entries",
                format!("language '{language}' is not part of bundle '{id}'"),
            ));
        }

        let stored = entries
            .iter()
            .map(|(key, entry)| {
                let stored = StoredEntry {
                    value: entry.value.clone(),
                    sequence_number: entry.sequence_number,
                    notes: entry.notes.clone(),
                    reviewed: false,
                };
                (key.clone(), stored)
            })
            .collect();
        bundle.entries.insert(language.to_string(), stored);
        self.save("upload_resource_entries")
    }
}
