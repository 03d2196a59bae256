//! Bundle store errors

use super::SyncError;

/// Creates a store unavailable error (unreachable store or rejected credentials)
pub fn unavailable(reason: impl Into<String>) -> SyncError {
    SyncError::ServiceUnavailable {
        reason: reason.into(),
    }
}

pub fn instance_mismatch(expected: impl Into<String>, found: impl Into<String>) -> SyncError {
    SyncError::InstanceMismatch {
        expected: expected.into(),
        found: found.into(),
    }
}

pub fn bundle_not_found(id: impl Into<String>) -> SyncError {
    SyncError::BundleNotFound { id: id.into() }
}

pub fn source_language_mismatch(
    bundle: impl Into<String>,
    bundle_language: impl Into<String>,
    configured: impl Into<String>,
) -> SyncError {
    SyncError::SourceLanguageMismatch {
        bundle: bundle.into(),
        bundle_language: bundle_language.into(),
        configured: configured.into(),
    }
}

/// Creates a failed store request error
pub fn request_failed(operation: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::ServiceRequestFailed {
        operation: operation.into(),
        reason: reason.into(),
    }
}
