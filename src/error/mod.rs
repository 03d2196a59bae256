//! Error types and handling for gpsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration and validation errors, always reported before
//!   the store is contacted
//! - [`service`]: Bundle store errors
//! - [`format`]: Resource file parse/merge/write errors
//! - [`fs`]: File system errors
//!
//! Every variant belongs to exactly one [`ErrorCategory`], which decides the
//! terminal status of a run.

pub mod config;
pub mod format;
pub mod fs;
pub mod service;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gpsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum SyncError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(gpsync::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(gpsync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Required setting '{name}' is missing or empty")]
    #[diagnostic(
        code(gpsync::config::missing_setting),
        help("Set it in gpsync.yaml or pass it on the command line")
    )]
    MissingSetting { name: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(gpsync::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid language map: {reason}")]
    #[diagnostic(
        code(gpsync::config::language_map),
        help("Use a JSON object mapping each target language to its language id")
    )]
    InvalidLanguageMap { reason: String },

    #[error("Resource type not supported: {resource_type}")]
    #[diagnostic(
        code(gpsync::config::unsupported_type),
        help("Supported resource types: java, json")
    )]
    UnsupportedResourceType { resource_type: String },

    #[error("Include and exclude rules are the same ('{pattern}'), no files to consider")]
    #[diagnostic(code(gpsync::config::same_patterns))]
    SamePatterns { pattern: String },

    #[error("No files to consider: {message}")]
    #[diagnostic(code(gpsync::config::no_files))]
    NoMatchingFiles { message: String },

    #[error("Base directory not found: {path}")]
    #[diagnostic(code(gpsync::config::base_dir_not_found))]
    BaseDirNotFound { path: String },

    #[error("Output path is not a directory: {path}")]
    #[diagnostic(code(gpsync::config::output_not_directory))]
    OutputNotDirectory { path: String },

    #[error("Layout '{layout}' needs a parent directory for {path}")]
    #[diagnostic(
        code(gpsync::config::layout_needs_parent),
        help("Move the resource file into a subdirectory of the base directory or pick another layout")
    )]
    LayoutNeedsParent { path: String, layout: String },

    #[error("Service URL not supported: {url}")]
    #[diagnostic(
        code(gpsync::config::unsupported_url),
        help("Use a file: URL or a path to a bundle store document")
    )]
    UnsupportedServiceUrl { url: String },

    // Service errors
    #[error("Bundle store unavailable: {reason}")]
    #[diagnostic(
        code(gpsync::service::unavailable),
        help("Check the service url and credentials (instance id, user id, password)")
    )]
    ServiceUnavailable { reason: String },

    #[error("Bundle store belongs to instance '{found}', expected '{expected}'")]
    #[diagnostic(code(gpsync::service::instance_mismatch))]
    InstanceMismatch { expected: String, found: String },

    #[error("Bundle '{id}' not found")]
    #[diagnostic(code(gpsync::service::bundle_not_found))]
    BundleNotFound { id: String },

    #[error(
        "The source language in bundle:{bundle}({bundle_language}) does not match the specified language({configured})"
    )]
    #[diagnostic(
        code(gpsync::service::source_language_mismatch),
        help("The source language of a bundle is fixed when the bundle is created")
    )]
    SourceLanguageMismatch {
        bundle: String,
        bundle_language: String,
        configured: String,
    },

    #[error("Bundle store request '{operation}' failed: {reason}")]
    #[diagnostic(code(gpsync::service::request_failed))]
    ServiceRequestFailed { operation: String, reason: String },

    // Format errors
    #[error("Failed to parse the resource data from {path}: {reason}")]
    #[diagnostic(code(gpsync::format::parse_failed))]
    ResourceParseFailed { path: String, reason: String },

    #[error("Resource filter error while merging the translated strings to {path}: {reason}")]
    #[diagnostic(code(gpsync::format::merge_failed))]
    ResourceMergeFailed { path: String, reason: String },

    #[error("Resource filter error while writing the translated strings to {path}: {reason}")]
    #[diagnostic(code(gpsync::format::write_failed))]
    ResourceWriteFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(gpsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(gpsync::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(gpsync::fs::io_error))]
    IoError { message: String },
}

/// Coarse classification of a failure, reported as the run's terminal status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid settings, detected before any store call
    Configuration,
    /// Store unreachable, rejected credentials or bundle metadata mismatch
    Service,
    /// A resource document could not be parsed, merged or written
    Format,
    /// Anything else (local I/O and the like)
    Unexpected,
}

impl ErrorCategory {
    /// Process exit code for a run that failed with this category
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Unexpected => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Service => 3,
            ErrorCategory::Format => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration error",
            ErrorCategory::Service => "service error",
            ErrorCategory::Format => "resource format error",
            ErrorCategory::Unexpected => "unexpected error",
        }
    }
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::ConfigNotFound { .. }
            | SyncError::ConfigParseFailed { .. }
            | SyncError::MissingSetting { .. }
            | SyncError::ConfigInvalid { .. }
            | SyncError::InvalidLanguageMap { .. }
            | SyncError::UnsupportedResourceType { .. }
            | SyncError::SamePatterns { .. }
            | SyncError::NoMatchingFiles { .. }
            | SyncError::BaseDirNotFound { .. }
            | SyncError::OutputNotDirectory { .. }
            | SyncError::LayoutNeedsParent { .. }
            | SyncError::UnsupportedServiceUrl { .. } => ErrorCategory::Configuration,

            SyncError::ServiceUnavailable { .. }
            | SyncError::InstanceMismatch { .. }
            | SyncError::BundleNotFound { .. }
            | SyncError::SourceLanguageMismatch { .. }
            | SyncError::ServiceRequestFailed { .. } => ErrorCategory::Service,

            SyncError::ResourceParseFailed { .. }
            | SyncError::ResourceMergeFailed { .. }
            | SyncError::ResourceWriteFailed { .. } => ErrorCategory::Format,

            SyncError::FileReadFailed { .. }
            | SyncError::FileWriteFailed { .. }
            | SyncError::IoError { .. } => ErrorCategory::Unexpected,
        }
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SyncError {
    fn from(err: serde_yaml::Error) -> Self {
        SyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SyncError>;
