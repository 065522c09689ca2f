//! kitchen-common - types shared by the manifest generator and the UI
//!
//! Pure data and string rules with no I/O, so both the native generator and
//! the wasm app agree on what a manifest looks like.

pub mod manifest;
pub mod slug;
pub mod source;

pub use manifest::{
    parse_manifest, render_manifest, ManifestItem, EXPORT_SUFFIX, KITCHEN_ROUTE_PREFIX,
    TESTBED_SUFFIX,
};
pub use slug::to_slug;
pub use source::{
    decode_manifest, ManifestLoadError, ManifestLoader, ManifestSource, StaticManifestSource,
    GENERATE_COMMAND,
};
