//! Index of every registered testbed

use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::stores::{GalleryBody, GalleryEntry, GalleryState};
use dioxus::prelude::*;
use kitchen_common::ManifestLoader;

/// Loads the manifest once on mount and lists its entries.
#[component]
pub fn ComponentGallery(loader: ManifestLoader) -> Element {
    let manifest = use_resource(move || {
        let loader = loader.clone();
        async move { loader.load().await }
    });

    let state = GalleryState::from_load(manifest.read().as_ref());

    rsx! {
        GalleryView { state }
    }
}

/// Pure view over a [`GalleryState`]
#[component]
pub fn GalleryView(state: GalleryState) -> Element {
    let body = match state.body() {
        GalleryBody::Loading => rsx! {
            LoadingSpinner { message: "Loading components..." }
        },
        GalleryBody::Error { message, detail } => rsx! {
            ErrorDisplay { message, detail }
        },
        GalleryBody::Empty { message } => rsx! {
            p { class: "text-gray-400", "{message}" }
        },
        GalleryBody::Entries(entries) => rsx! {
            div { class: "flex flex-wrap gap-4",
                for entry in entries {
                    GalleryTile { key: "{entry.key}", entry }
                }
            }
        },
    };

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-3xl font-bold mb-2", "Component Test Gallery" }
            p { class: "text-gray-400 mb-8", "Select a component to open its testbed." }
            {body}
        }
    }
}

/// A 200x100 tile linking to the component's testbed page
#[component]
fn GalleryTile(entry: GalleryEntry) -> Element {
    rsx! {
        Link {
            to: entry.href.clone(),
            class: "flex items-center justify-center w-[200px] h-[100px] p-4 rounded-lg font-medium bg-gray-700 hover:bg-gray-600 text-gray-100 transition-colors",
            "{entry.label}"
        }
    }
}
