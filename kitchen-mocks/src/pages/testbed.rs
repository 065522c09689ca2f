//! One testbed, looked up by its gallery slug

use crate::kitchen::resolve_testbed;
use crate::Route;
use dioxus::prelude::*;
use kitchen_common::ManifestLoader;
use kitchen_ui::{ErrorDisplay, LoadingSpinner, TestbedHarness};
use tracing::warn;

#[component]
pub fn TestbedPage(slug: String) -> Element {
    let loader = use_context::<ManifestLoader>();
    let manifest = use_resource(move || {
        let loader = loader.clone();
        async move { loader.load().await }
    });

    let body = match &*manifest.read() {
        None => rsx! {
            LoadingSpinner { message: "Loading component..." }
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay { message: e.remediation(), detail: e.to_string() }
        },
        Some(Ok(items)) => match resolve_testbed(items, &slug) {
            Ok(testbed) => rsx! {
                document::Title { "{testbed.title} - Kitchen" }
                TestbedHarness { key: "{slug}", testbed }
            },
            Err(e) => {
                warn!("Cannot open testbed '{slug}': {e}");
                rsx! {
                    ErrorDisplay { message: e.to_string() }
                }
            }
        },
    };

    rsx! {
        div { class: "min-h-screen",
            nav { class: "px-6 pt-4",
                Link {
                    class: "text-sm text-indigo-400 hover:underline",
                    to: Route::Gallery {},
                    "← All components"
                }
            }
            {body}
        }
    }
}
