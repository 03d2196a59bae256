//! Run state machine
//!
//! `Validating -> Uploading | Downloading -> Done`, with `Failed` reachable
//! from every phase.

use std::fmt;
use std::path::Path;

use crate::config::{RunSettings, SyncConfig, validate};
use crate::error::Result;
use crate::operations::{DownloadOperation, UploadOperation};
use crate::store::{self, BundleStore};

/// Direction of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncGoal {
    Upload,
    Download,
}

/// Phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Validating,
    Uploading,
    Downloading,
    Done,
    Failed,
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncPhase::Validating => "validating",
            SyncPhase::Uploading => "uploading",
            SyncPhase::Downloading => "downloading",
            SyncPhase::Done => "done",
            SyncPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Counters of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub bundles_created: usize,
    pub files_uploaded: usize,
    /// Files parsed without any resource entry
    pub files_without_entries: usize,
    /// Files skipped because they could not be parsed
    pub files_skipped: usize,
    /// Files whose bundle does not exist in the store
    pub bundles_missing: usize,
    /// Requested languages absent from a bundle
    pub languages_skipped: usize,
    pub outputs_written: usize,
    pub outputs_overwritten: usize,
    /// Outputs left alone because they already existed
    pub outputs_skipped: usize,
}

/// One upload or download run
#[derive(Debug)]
pub struct SyncOperation {
    goal: SyncGoal,
    phase: SyncPhase,
}

impl SyncOperation {
    pub fn new(goal: SyncGoal) -> Self {
        Self {
            goal,
            phase: SyncPhase::Validating,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    fn enter(&mut self, next: SyncPhase) {
        tracing::debug!(from = %self.phase, to = %next, "Phase change");
        self.phase = next;
    }

    /// Validate `raw`, connect to the configured store and run
    pub fn execute(&mut self, raw: &SyncConfig, workspace: &Path) -> Result<SyncReport> {
        let settings = validate(raw, workspace).inspect_err(|_| self.enter(SyncPhase::Failed))?;
        log_settings(&settings);

        let mut store = store::connect(&settings.account, workspace)
            .inspect_err(|_| self.enter(SyncPhase::Failed))?;
        self.run(&settings, store.as_mut())
    }

    /// Run the main pass with validated settings and a connected store
    pub fn run(&mut self, settings: &RunSettings, store: &mut dyn BundleStore) -> Result<SyncReport> {
        let mut report = SyncReport::default();
        let result = match self.goal {
            SyncGoal::Upload => {
                self.enter(SyncPhase::Uploading);
                UploadOperation::new(settings, store).execute(&mut report)
            }
            SyncGoal::Download => {
                self.enter(SyncPhase::Downloading);
                DownloadOperation::new(settings, store).execute(&mut report)
            }
        };

        match result {
            Ok(()) => {
                self.enter(SyncPhase::Done);
                Ok(report)
            }
            Err(e) => {
                self.enter(SyncPhase::Failed);
                Err(e)
            }
        }
    }
}

fn log_settings(settings: &RunSettings) {
    let account = &settings.account;
    tracing::info!(
        "Service: url={} instance_id={} user_id={} password={}",
        account.url,
        account.instance_id,
        account.user_id,
        account.masked_password()
    );
    tracing::info!(
        "Files: base_dir={} include={} exclude={} type={}",
        settings.base_dir.display(),
        settings.include,
        settings.exclude,
        settings.resource_type
    );
    tracing::info!(
        "Languages: source={} targets={} style={}",
        settings.source_language,
        settings.language_map.targets().collect::<Vec<_>>().join(","),
        settings.language_id_style.as_str()
    );
    tracing::info!(
        "Output: out_dir={} layout={} content={} source_language={} overwrite={}",
        settings.out_dir.display(),
        settings.layout,
        settings.content_policy,
        settings.output_source_language,
        settings.overwrite
    );
    for file in &settings.files {
        tracing::info!(path = %file, "Considering file");
    }
}
