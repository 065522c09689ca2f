//! kitchen-ui - Testbed harness, gallery and sample components
//!
//! The testbed model (controls, props, variants) lives in [`testbed`], the
//! state transitions in [`stores`], and the rendering in [`components`].

pub mod components;
pub mod stores;
pub mod testbed;

pub use components::*;
pub use testbed::{
    ControlKind, PropControl, PropMap, PropValue, SchemaError, Testbed, TestbedBuilder, Variant,
};
