//! Resource format errors

use super::SyncError;

pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::ResourceParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn merge_failed(path: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::ResourceMergeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::ResourceWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
