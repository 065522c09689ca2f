//! UI state for the kitchen
//!
//! Plain state types held in signals by the components. All transitions are
//! methods here so they can be tested without rendering.

pub mod gallery;
pub mod testbed;

pub use gallery::{empty_message, GalleryBody, GalleryEntry, GalleryState};
pub use testbed::TestbedState;
