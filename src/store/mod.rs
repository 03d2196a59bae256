//! Bundle store access
//!
//! The store holds one bundle per id, each with a fixed source language,
//! a set of target languages and per-language resource entries.
//! A store value is constructed explicitly for one run with [`connect`],
//! which also performs the connection check.

pub mod file;
#[cfg(test)]
pub mod memory;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{BundleInfo, NewBundle, NewResourceEntry, ResourceEntry};
use crate::error::{Result, config};

pub use file::FileStore;

/// Credentials and location of a bundle store
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceAccount {
    pub url: String,
    pub instance_id: String,
    pub user_id: String,
    pub password: String,
}

impl ServiceAccount {
    /// Password for log output: first three characters followed by `******`
    pub fn masked_password(&self) -> String {
        if self.password.chars().count() > 4 {
            let visible: String = self.password.chars().take(3).collect();
            format!("{visible}******")
        } else {
            "******".to_string()
        }
    }
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("url", &self.url)
            .field("instance_id", &self.instance_id)
            .field("user_id", &self.user_id)
            .field("password", &self.masked_password())
            .finish()
    }
}

/// Operations the synchronization engine needs from a bundle store
pub trait BundleStore {
    fn list_bundle_ids(&self) -> Result<BTreeSet<String>>;

    fn get_bundle_info(&self, id: &str) -> Result<BundleInfo>;

    fn create_bundle(&mut self, id: &str, bundle: &NewBundle) -> Result<()>;

    /// Entries of every source key, as seen from `language`
    fn get_resource_entries(&self, id: &str, language: &str) -> Result<BTreeMap<String, ResourceEntry>>;

    /// Replace the entries of `language` in the bundle
    fn upload_resource_entries(
        &mut self,
        id: &str,
        language: &str,
        entries: &BTreeMap<String, NewResourceEntry>,
    ) -> Result<()>;
}

/// Where a service URL points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A bundle store document on the local file system
    File(PathBuf),
}

impl StoreLocation {
    /// Parse a service URL: `file:///abs/store.json`, `file:rel/store.json`
    /// or a plain path. Relative paths resolve against `workspace`.
    pub fn parse(url: &str, workspace: &Path) -> Result<Self> {
        let url = url.trim();
        let path = if let Some(rest) = url.strip_prefix("file://") {
            rest
        } else if let Some(rest) = url.strip_prefix("file:") {
            rest
        } else if url.contains("://") {
            return Err(config::unsupported_url(url));
        } else {
            url
        };

        if path.is_empty() {
            return Err(config::unsupported_url(url));
        }
        Ok(StoreLocation::File(crate::path_utils::resolve_in(workspace, path)))
    }
}

/// Open the store for `account` and verify the connection
pub fn connect(account: &ServiceAccount, workspace: &Path) -> Result<Box<dyn BundleStore>> {
    match StoreLocation::parse(&account.url, workspace)? {
        StoreLocation::File(path) => {
            let store = FileStore::open(&path, account)?;
            store.list_bundle_ids()?;
            Ok(Box::new(store))
        }
    }
}
