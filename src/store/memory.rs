//! In-memory bundle store for orchestrator tests

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{BundleInfo, NewBundle, NewResourceEntry, ResourceEntry};
use crate::error::{Result, service};
use crate::store::BundleStore;

#[derive(Debug, Clone)]
pub struct MemoryBundle {
    pub info: BundleInfo,
    pub notes: Vec<String>,
    /// language -> key -> entry
    pub entries: BTreeMap<String, BTreeMap<String, ResourceEntry>>,
}

/// Store double that records how it was called
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub bundles: BTreeMap<String, MemoryBundle>,
    pub create_calls: Vec<String>,
    pub upload_calls: Vec<(String, String, usize)>,
    /// Every call fails with a service error when set
    pub fail_with: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle with entries given as `(language, key, value, reviewed)`
    pub fn with_bundle(
        mut self,
        id: &str,
        source_language: &str,
        target_languages: &[&str],
        entries: &[(&str, &str, &str, bool)],
    ) -> Self {
        let mut by_language: BTreeMap<String, BTreeMap<String, ResourceEntry>> = BTreeMap::new();
        for (language, key, value, reviewed) in entries {
            let entry = ResourceEntry {
                value: Some((*value).to_string()),
                reviewed: *reviewed,
                ..ResourceEntry::default()
            };
            by_language
                .entry((*language).to_string())
                .or_default()
                .insert((*key).to_string(), entry);
        }
        self.bundles.insert(
            id.to_string(),
            MemoryBundle {
                info: BundleInfo {
                    source_language: source_language.to_string(),
                    target_languages: target_languages.iter().map(|l| (*l).to_string()).collect(),
                },
                notes: Vec::new(),
                entries: by_language,
            },
        );
        self
    }

    fn check(&self, operation: &str) -> Result<()> {
        match &self.fail_with {
            Some(reason) => Err(service::request_failed(operation, reason)),
            None => Ok(()),
        }
    }
}

impl BundleStore for MemoryStore {
    fn list_bundle_ids(&self) -> Result<BTreeSet<String>> {
        self.check("list_bundle_ids")?;
        Ok(self.bundles.keys().cloned().collect())
    }

    fn get_bundle_info(&self, id: &str) -> Result<BundleInfo> {
        self.check("get_bundle_info")?;
        self.bundles
            .get(id)
            .map(|b| b.info.clone())
            .ok_or_else(|| service::bundle_not_found(id))
    }

    fn create_bundle(&mut self, id: &str, bundle: &NewBundle) -> Result<()> {
        self.check("create_bundle")?;
        self.create_calls.push(id.to_string());
        if self.bundles.contains_key(id) {
            return Err(service::request_failed("create_bundle", "already exists"));
        }
        self.bundles.insert(
            id.to_string(),
            MemoryBundle {
                info: BundleInfo {
                    source_language: bundle.source_language.clone(),
                    target_languages: bundle.target_languages.clone(),
                },
                notes: bundle.notes.clone(),
                entries: BTreeMap::new(),
            },
        );
        Ok(())
    }

    fn get_resource_entries(&self, id: &str, language: &str) -> Result<BTreeMap<String, ResourceEntry>> {
        self.check("get_resource_entries")?;
        let bundle = self
            .bundles
            .get(id)
            .ok_or_else(|| service::bundle_not_found(id))?;
        let source = bundle.entries.get(&bundle.info.source_language);
        let target = bundle.entries.get(language);
        Ok(source
            .into_iter()
            .flatten()
            .map(|(key, src)| {
                let translated = target.and_then(|t| t.get(key));
                let entry = ResourceEntry {
                    value: translated.and_then(|t| t.value.clone()),
                    source_value: src.value.clone(),
                    sequence_number: src.sequence_number,
                    notes: src.notes.clone(),
                    reviewed: translated.is_some_and(|t| t.reviewed),
                };
                (key.clone(), entry)
            })
            .collect())
    }

    fn upload_resource_entries(
        &mut self,
        id: &str,
        language: &str,
        entries: &BTreeMap<String, NewResourceEntry>,
    ) -> Result<()> {
        self.check("upload_resource_entries")?;
        self.upload_calls
            .push((id.to_string(), language.to_string(), entries.len()));
        let bundle = self
            .bundles
            .get_mut(id)
            .ok_or_else(|| service::bundle_not_found(id))?;
        let stored = entries
            .iter()
            .map(|(key, entry)| {
                let stored = ResourceEntry {
                    value: Some(entry.value.clone()),
                    source_value: None,
                    sequence_number: entry.sequence_number,
                    notes: entry.notes.clone(),
                    reviewed: false,
                };
                (key.clone(), stored)
            })
            .collect();
        bundle.entries.insert(language.to_string(), stored);
        Ok(())
    }
}
