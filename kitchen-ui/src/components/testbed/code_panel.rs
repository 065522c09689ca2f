use dioxus::prelude::*;

/// Read-only block showing the usage snippet for the current props
#[component]
pub fn CodePanel(snippet: String) -> Element {
    rsx! {
        pre { class: "overflow-x-auto rounded-lg bg-gray-900 p-4 text-sm text-gray-200",
            code { class: "font-mono", "{snippet}" }
        }
    }
}
