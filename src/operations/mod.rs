//! Synchronization operations
//!
//! - [`SyncOperation`]: drives one run through its phases
//!   (validate, then upload or download)
//! - [`UploadOperation`]: pushes source-language files into their bundles
//! - [`DownloadOperation`]: exports bundle content as files per language
//!
//! Operations take the store as an explicit value; nothing here reads
//! ambient configuration.

pub mod download;
pub mod sync;
pub mod upload;

#[cfg(test)]
mod test_support;

pub use download::DownloadOperation;
pub use sync::{SyncGoal, SyncOperation, SyncPhase, SyncReport};
pub use upload::UploadOperation;
