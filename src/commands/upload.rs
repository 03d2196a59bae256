//! Upload command

use std::path::PathBuf;

use crate::cli::SyncArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::operations::SyncGoal;

/// Upload the selected resource files to their bundles
pub fn run(workspace: Option<PathBuf>, args: SyncArgs) -> Result<()> {
    helpers::run_sync(SyncGoal::Upload, workspace, &args)
}
