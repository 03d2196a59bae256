//! Command implementations for gpsync CLI

pub mod completions;
pub mod download;
pub mod helpers;
pub mod upload;
pub mod version;
