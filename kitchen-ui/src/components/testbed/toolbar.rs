//! Viewport and colour mode switcher

use crate::components::{Button, ButtonSize, ButtonVariant, Select};
use crate::testbed::{ColorMode, ViewMode, Viewport};
use dioxus::prelude::*;

#[component]
pub fn ModeToolbar(view: ViewMode, on_change: EventHandler<ViewMode>) -> Element {
    let options: Vec<(String, String)> = Viewport::ALL
        .iter()
        .map(|v| (v.width().to_string(), v.label().to_string()))
        .collect();

    let toggle_variant = match view.color_mode {
        ColorMode::Dark => ButtonVariant::Outline,
        ColorMode::Light => ButtonVariant::Secondary,
    };

    rsx! {
        div { class: "flex flex-wrap items-center gap-4",
            Button {
                variant: toggle_variant,
                size: ButtonSize::Small,
                onclick: move |_| {
                    on_change
                        .call(ViewMode {
                            color_mode: view.color_mode.toggled(),
                            ..view
                        })
                },
                "{view.color_mode.toggle_label()}"
            }
            Select {
                value: view.viewport.width().to_string(),
                options,
                placeholder: "Select viewport width".to_string(),
                onchange: move |width: String| {
                    if let Some(viewport) = Viewport::from_width(&width) {
                        on_change.call(ViewMode { viewport, ..view });
                    }
                },
            }
        }
    }
}
