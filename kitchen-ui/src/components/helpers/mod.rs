//! Common helper UI components

mod error_display;
mod loading_spinner;
mod section_heading;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use section_heading::SectionHeading;
