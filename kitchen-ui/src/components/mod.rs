//! Shared UI components

pub mod button;
pub mod gallery;
pub mod helpers;
pub mod select;
pub mod switch;
pub mod switch_router_button;
pub mod testbed;
pub mod text_input;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use gallery::{ComponentGallery, GalleryView};
pub use helpers::{ErrorDisplay, LoadingSpinner, SectionHeading};
pub use select::Select;
pub use switch::Switch;
pub use switch_router_button::SwitchRouterButton;
pub use testbed::{CodePanel, ControlRenderer, ModeToolbar, TestbedHarness, VariantCard};
pub use text_input::{TextInput, TextInputSize};
