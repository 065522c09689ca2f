//! Testbed registry
//!
//! Every `*.testbed.rs` file in this directory is listed in the generated
//! manifest under `<Name>Testbed`. Add new files here with the same export
//! name, then regenerate the manifest.

use kitchen_common::ManifestItem;
use kitchen_ui::{SchemaError, Testbed};
use thiserror::Error;

#[path = "Button.testbed.rs"]
mod button;
#[path = "SwitchRouterButton.testbed.rs"]
mod switch_router_button;
#[path = "TextInput.testbed.rs"]
mod text_input;

pub type TestbedFactory = fn() -> Result<Testbed, SchemaError>;

/// `(export name, factory)` for each testbed file
pub const TESTBEDS: &[(&str, TestbedFactory)] = &[
    ("ButtonTestbed", button::testbed),
    ("SwitchRouterButtonTestbed", switch_router_button::testbed),
    ("TextInputTestbed", text_input::testbed),
];

pub fn lookup(export_name: &str) -> Option<TestbedFactory> {
    TESTBEDS
        .iter()
        .find(|(name, _)| *name == export_name)
        .map(|(_, factory)| *factory)
}

/// Why a gallery link could not be turned into a testbed
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TestbedLookupError {
    #[error("No component registered under /kitchen/{0}")]
    UnknownSlug(String),
    #[error("{0} is in the manifest but not registered in kitchen-mocks/src/kitchen/mod.rs")]
    Unregistered(String),
    #[error("Invalid testbed definition: {0}")]
    Schema(#[from] SchemaError),
}

/// Find the manifest entry for `slug` and build its testbed.
pub fn resolve_testbed(items: &[ManifestItem], slug: &str) -> Result<Testbed, TestbedLookupError> {
    let item = items
        .iter()
        .find(|item| item.slug == slug)
        .ok_or_else(|| TestbedLookupError::UnknownSlug(slug.to_string()))?;
    let factory = lookup(&item.export_name)
        .ok_or_else(|| TestbedLookupError::Unregistered(item.export_name.clone()))?;
    Ok(factory()?)
}
