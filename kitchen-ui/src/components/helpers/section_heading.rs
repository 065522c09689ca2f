use dioxus::prelude::*;

/// Second-level heading used between testbed panels
#[component]
pub fn SectionHeading(title: String) -> Element {
    rsx! {
        h2 { class: "text-lg font-semibold mb-2", "{title}" }
    }
}
