//! Testbed model: control schema, live props, variants and the usage snippet
//!
//! Pure data and rules. The components in `crate::components::testbed`
//! render on top of it.

pub mod control;
pub mod definition;
pub mod props;
pub mod snippet;
pub mod view_mode;

pub use control::{
    format_number, number_field_text, parse_number, ControlInput, ControlKind, ControlWidget,
    NumberDraft, PropControl, PropValue,
};
pub use definition::{RenderFn, SchemaError, Testbed, TestbedBuilder, Variant};
pub use props::PropMap;
pub use snippet::usage_snippet;
pub use view_mode::{ColorMode, ViewMode, Viewport};
