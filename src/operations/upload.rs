//! Upload pass
//!
//! For every selected file: find or create its bundle, parse the file and
//! replace the bundle's source-language entries with the parsed ones.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use crate::config::RunSettings;
use crate::domain::{LanguageBundle, NewBundle, NewResourceEntry, ResourceFile};
use crate::error::{Result, config, format, service};
use crate::filter::{self, FilterOptions, ResourceFilter};
use crate::operations::SyncReport;
use crate::resolver::bundle_id;
use crate::store::BundleStore;

pub struct UploadOperation<'a> {
    settings: &'a RunSettings,
    store: &'a mut dyn BundleStore,
}

impl<'a> UploadOperation<'a> {
    pub fn new(settings: &'a RunSettings, store: &'a mut dyn BundleStore) -> Self {
        Self { settings, store }
    }

    pub fn execute(&mut self, report: &mut SyncReport) -> Result<()> {
        let filter = filter::filter_for(&self.settings.resource_type)
            .ok_or_else(|| config::unsupported_type(&self.settings.resource_type))?;

        let mut known = self.store.list_bundle_ids()?;
        for file in &self.settings.files {
            self.upload_file(filter.as_ref(), file, &mut known, report)?;
        }
        Ok(())
    }

    fn upload_file(
        &mut self,
        filter: &dyn ResourceFilter,
        file: &ResourceFile,
        known: &mut BTreeSet<String>,
        report: &mut SyncReport,
    ) -> Result<()> {
        let settings = self.settings;
        let id = bundle_id(&settings.resource_type, file);
        let exists = known.contains(&id);

        if exists {
            let info = self.store.get_bundle_info(&id)?;
            if info.source_language != settings.source_language {
                return Err(service::source_language_mismatch(
                    &id,
                    &info.source_language,
                    &settings.source_language,
                ));
            }
            tracing::info!(bundle = %id, path = %file, "Found an existing bundle");
        }

        let bundle = match parse_file(filter, file, &settings.source_language) {
            Ok(bundle) => bundle,
            Err(err) => {
                tracing::warn!(bundle = %id, path = %file, "{err}; skipping");
                report.files_skipped += 1;
                return Ok(());
            }
        };

        if !exists {
            tracing::info!(bundle = %id, path = %file, "Creating a new bundle");
            self.store.create_bundle(
                &id,
                &NewBundle {
                    source_language: settings.source_language.clone(),
                    target_languages: settings.language_map.targets().map(str::to_string).collect(),
                    notes: bundle.notes.clone(),
                },
            )?;
            known.insert(id.clone());
            report.bundles_created += 1;
        }

        if bundle.is_empty() {
            tracing::info!(bundle = %id, path = %file, "No resource entries in {file}");
            report.files_without_entries += 1;
            return Ok(());
        }

        let entries: BTreeMap<String, NewResourceEntry> = bundle
            .strings()
            .iter()
            .map(|s| {
                let entry = NewResourceEntry {
                    value: s.value.clone(),
                    sequence_number: s.sequence_number,
                    notes: s.notes.clone(),
                };
                (s.key.clone(), entry)
            })
            .collect();
        self.store
            .upload_resource_entries(&id, &settings.source_language, &entries)?;
        tracing::info!(
            bundle = %id,
            language = %settings.source_language,
            "Uploaded {} resource entries from {file}",
            entries.len()
        );
        report.files_uploaded += 1;
        Ok(())
    }
}

/// Read and parse one source file; unreadable files count as unparsable
fn parse_file(filter: &dyn ResourceFilter, file: &ResourceFile, language: &str) -> Result<LanguageBundle> {
    let content =
        fs::read(file.absolute_path()).map_err(|e| format::parse_failed(file.to_string(), e.to_string()))?;
    filter
        .parse(&content, &FilterOptions::new(language))
        .map_err(|e| format::parse_failed(file.to_string(), e.to_string()))
}
