use crate::Route;
use dioxus::prelude::*;
use kitchen_ui::ErrorDisplay;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            ErrorDisplay { message: format!("Nothing at /{path}") }
            Link { class: "text-indigo-400 hover:underline", to: Route::Gallery {}, "Back to the gallery" }
        }
    }
}
