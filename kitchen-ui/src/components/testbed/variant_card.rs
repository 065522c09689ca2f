//! Preset card with a miniature preview

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::testbed::Variant;
use dioxus::prelude::*;

/// Shows one variant rendered with its own props. Clicking "Apply" hands
/// the variant back so the harness can replace the live props.
#[component]
pub fn VariantCard(
    variant: Variant,
    preview: Element,
    active: bool,
    on_apply: EventHandler<Variant>,
) -> Element {
    let border = if active {
        "border-indigo-500"
    } else {
        "border-gray-600"
    };
    let name = variant.name.clone();

    rsx! {
        div {
            class: "flex flex-col gap-3 rounded-lg border p-4 {border}",
            "data-variant": "{name}",
            strong { "{name}" }
            div { class: "pointer-events-none", {preview} }
            Button {
                variant: if active { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                size: ButtonSize::Small,
                onclick: move |_| on_apply.call(variant.clone()),
                "Apply"
            }
        }
    }
}
