//! Download command

use std::path::PathBuf;

use crate::cli::SyncArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::operations::SyncGoal;

/// Export bundle content for every selected resource file and language
pub fn run(workspace: Option<PathBuf>, args: SyncArgs) -> Result<()> {
    helpers::run_sync(SyncGoal::Download, workspace, &args)
}
