use dioxus::prelude::*;
use kitchen_common::ManifestLoader;
use kitchen_ui::ComponentGallery;

#[component]
pub fn Gallery() -> Element {
    let loader = use_context::<ManifestLoader>();

    rsx! {
        document::Title { "Component Test Gallery" }
        ComponentGallery { loader }
    }
}
