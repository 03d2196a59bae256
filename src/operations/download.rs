//! Download pass
//!
//! For every selected file and every requested language present in its
//! bundle, export the bundle content to the path given by the layout.
//! Existing outputs are only replaced when overwriting is enabled.

use std::fs;

use crate::config::RunSettings;
use crate::domain::ResourceFile;
use crate::error::{Result, config, fs as fs_err};
use crate::export;
use crate::filter::{self, FilterOptions, ResourceFilter};
use crate::operations::SyncReport;
use crate::resolver::{OutputPathResolver, bundle_id, embedded_language_id};
use crate::store::BundleStore;

pub struct DownloadOperation<'a> {
    settings: &'a RunSettings,
    store: &'a mut dyn BundleStore,
}

impl<'a> DownloadOperation<'a> {
    pub fn new(settings: &'a RunSettings, store: &'a mut dyn BundleStore) -> Self {
        Self { settings, store }
    }

    /// Languages to export: optionally the source language, then every
    /// requested target language in tag order
    fn requested_languages(&self) -> Vec<&'a str> {
        let settings = self.settings;
        let mut languages = Vec::new();
        if settings.output_source_language {
            languages.push(settings.source_language.as_str());
        }
        for target in settings.language_map.targets() {
            if !languages.contains(&target) {
                languages.push(target);
            }
        }
        languages
    }

    pub fn execute(&mut self, report: &mut SyncReport) -> Result<()> {
        let settings = self.settings;
        let filter = filter::filter_for(&settings.resource_type)
            .ok_or_else(|| config::unsupported_type(&settings.resource_type))?;
        let resolver = OutputPathResolver::new(
            &settings.out_dir,
            settings.layout,
            &settings.source_language,
            settings.language_id_style,
            &settings.language_map,
        );

        let known = self.store.list_bundle_ids()?;
        for file in &settings.files {
            let id = bundle_id(&settings.resource_type, file);
            if !known.contains(&id) {
                tracing::info!(bundle = %id, path = %file, "Bundle {id} does not exist, skipping");
                report.bundles_missing += 1;
                continue;
            }

            let info = self.store.get_bundle_info(&id)?;
            if info.source_language != settings.source_language {
                tracing::warn!(
                    bundle = %id,
                    "The source language in bundle:{id}({}) does not match the specified language({})",
                    info.source_language,
                    settings.source_language
                );
            }

            let bundle_languages = info.languages();
            for language in self.requested_languages() {
                if !bundle_languages.contains(language) {
                    tracing::info!(
                        bundle = %id,
                        language,
                        "Language {language} is not in bundle {id}, skipping"
                    );
                    report.languages_skipped += 1;
                    continue;
                }
                self.export_language(filter.as_ref(), &resolver, file, &id, language, report)?;
            }
        }
        Ok(())
    }

    fn export_language(
        &mut self,
        filter: &dyn ResourceFilter,
        resolver: &OutputPathResolver<'_>,
        file: &ResourceFile,
        id: &str,
        language: &str,
        report: &mut SyncReport,
    ) -> Result<()> {
        let settings = self.settings;
        let dest = resolver.resolve(file, language)?;

        let overwriting = dest.exists();
        if overwriting {
            if settings.overwrite {
                tracing::info!(
                    bundle = %id,
                    language,
                    path = %dest.display(),
                    "{} already exists - overwriting",
                    dest.display()
                );
            } else {
                tracing::info!(
                    bundle = %id,
                    language,
                    path = %dest.display(),
                    "{} already exists - skipping",
                    dest.display()
                );
                report.outputs_skipped += 1;
                return Ok(());
            }
        } else {
            tracing::info!(
                bundle = %id,
                language,
                path = %dest.display(),
                "Exporting to {}",
                dest.display()
            );
        }

        let entries = self.store.get_resource_entries(id, language)?;
        let embedded = embedded_language_id(language, Some(&settings.language_map));
        let bundle = export::select_entries(&entries, settings.content_policy);

        let content = export::render(
            filter,
            settings.content_policy,
            file.absolute_path(),
            &bundle,
            &FilterOptions::new(embedded),
            &dest,
        )?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| fs_err::write_failed(parent.display().to_string(), e.to_string()))?;
        }
        fs::write(&dest, content)
            .map_err(|e| fs_err::write_failed(dest.display().to_string(), e.to_string()))?;

        if overwriting {
            report.outputs_overwritten += 1;
        } else {
            report.outputs_written += 1;
        }
        Ok(())
    }
}
