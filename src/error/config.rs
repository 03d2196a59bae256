//! Configuration errors

use super::SyncError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> SyncError {
    SyncError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SyncError {
    SyncError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing setting error
pub fn missing(name: impl Into<String>) -> SyncError {
    SyncError::MissingSetting { name: name.into() }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> SyncError {
    SyncError::ConfigInvalid {
        message: message.into(),
    }
}

pub fn language_map(reason: impl Into<String>) -> SyncError {
    SyncError::InvalidLanguageMap {
        reason: reason.into(),
    }
}

pub fn unsupported_type(resource_type: impl Into<String>) -> SyncError {
    SyncError::UnsupportedResourceType {
        resource_type: resource_type.into(),
    }
}

pub fn same_patterns(pattern: impl Into<String>) -> SyncError {
    SyncError::SamePatterns {
        pattern: pattern.into(),
    }
}

pub fn no_files(message: impl Into<String>) -> SyncError {
    SyncError::NoMatchingFiles {
        message: message.into(),
    }
}

pub fn base_dir_not_found(path: impl Into<String>) -> SyncError {
    SyncError::BaseDirNotFound { path: path.into() }
}

pub fn output_not_directory(path: impl Into<String>) -> SyncError {
    SyncError::OutputNotDirectory { path: path.into() }
}

pub fn layout_needs_parent(path: impl Into<String>, layout: impl Into<String>) -> SyncError {
    SyncError::LayoutNeedsParent {
        path: path.into(),
        layout: layout.into(),
    }
}

pub fn unsupported_url(url: impl Into<String>) -> SyncError {
    SyncError::UnsupportedServiceUrl { url: url.into() }
}
