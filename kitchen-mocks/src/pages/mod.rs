//! Routed pages

mod gallery;
mod not_found;
mod testbed;

pub use gallery::Gallery;
pub use not_found::NotFound;
pub use testbed::TestbedPage;
