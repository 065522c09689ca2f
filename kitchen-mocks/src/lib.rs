//! kitchen-mocks - Web app hosting the component gallery
//!
//! Serves `public/kitchen-manifest.json` next to the wasm bundle, lists it
//! at `/kitchen` and mounts each registered testbed at `/kitchen/:slug`.

pub mod kitchen;
pub mod manifest_source;
pub mod pages;

use dioxus::prelude::*;
use kitchen_common::ManifestLoader;
use manifest_source::HttpManifestSource;
use pages::{Gallery, NotFound, TestbedPage};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Gallery {})]
    #[route("/kitchen")]
    Gallery {},
    #[route("/kitchen/:slug")]
    TestbedPage { slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| ManifestLoader::new(HttpManifestSource::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
