//! Version command implementation

use crate::error::Result;
use crate::filter::SUPPORTED_TYPES;

/// Run version command
pub fn run() -> Result<()> {
    println!("gpsync {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Resource types: {}", SUPPORTED_TYPES.join(", "));

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
