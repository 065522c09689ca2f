//! Loading spinner component

use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    /// Message to display below the spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center gap-3 p-4",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-indigo-500" }
            p { class: "text-gray-400", "{message}" }
        }
    }
}
