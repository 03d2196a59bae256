//! Identity and layout resolution
//!
//! Pure functions deriving everything a run needs from paths and settings:
//! - [`language`]: language tag -> id used in file and directory names
//! - [`bundle_id`]: resource file -> remote bundle id
//! - [`output_path`]: resource file + language -> exported file location
//!
//! Nothing here touches the filesystem or the store.

pub mod bundle_id;
pub mod language;
pub mod output_path;

pub use bundle_id::bundle_id;
pub use language::{embedded_language_id, language_id};
pub use output_path::OutputPathResolver;
