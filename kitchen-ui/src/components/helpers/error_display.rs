//! Error display component

use dioxus::prelude::*;

/// Red error box with a headline and optional detail line
#[component]
pub fn ErrorDisplay(message: String, #[props(default)] detail: Option<String>) -> Element {
    rsx! {
        div {
            class: "bg-red-900/40 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            role: "alert",
            p { "{message}" }
            if let Some(detail) = detail {
                p { class: "text-sm text-red-300 mt-1 font-mono break-words", "{detail}" }
            }
        }
    }
}
