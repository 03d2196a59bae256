//! Domain models for gpsync
//!
//! This module contains pure domain objects representing core business entities.
//! These types are free of external dependencies, constructed once at run start
//! and never mutated afterwards.

pub mod bundle;
pub mod language;
pub mod layout;
pub mod policy;
pub mod resource;

pub use bundle::{
    BundleInfo, LanguageBundle, NewBundle, NewResourceEntry, ResourceEntry, ResourceString,
};
pub use language::{LanguageIdStyle, LanguageMapping};
pub use layout::LayoutStrategy;
pub use policy::ContentPolicy;
pub use resource::ResourceFile;
