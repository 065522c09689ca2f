//! kitchen-core - native side of the component kitchen
//!
//! Config loading, testbed discovery and manifest generation. Used by the
//! `generate-kitchen-manifest` CLI.

pub mod config;
pub mod file_source;
pub mod generator;

pub use config::{ConfigError, KitchenConfig, KitchenPaths, CONFIG_FILE_NAME};
pub use file_source::FileManifestSource;
pub use generator::{
    check_manifest, generate_manifest, scan_testbeds, write_manifest, ManifestError,
    ManifestStatus,
};
