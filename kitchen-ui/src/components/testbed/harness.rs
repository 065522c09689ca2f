//! The page-level testbed: controls, preview, snippet and variants

use super::{CodePanel, ControlRenderer, ModeToolbar, VariantCard};
use crate::components::helpers::SectionHeading;
use crate::stores::TestbedState;
use crate::testbed::{usage_snippet, PropValue, Testbed, Variant, ViewMode};
use dioxus::prelude::*;

/// Hosts one component with live controls.
///
/// State is seeded from the testbed when the harness mounts and is thrown
/// away when it unmounts. Every accepted control edit, variant click or
/// toolbar change re-renders the preview with the new props.
#[component]
pub fn TestbedHarness(testbed: Testbed) -> Element {
    let mut state = use_signal({
        let testbed = testbed.clone();
        move || TestbedState::new(&testbed)
    });

    let on_change = move |(name, value): (String, PropValue)| {
        state.write().update_prop(name, value);
    };
    let on_apply = move |variant: Variant| {
        state.write().apply_variant(&variant);
    };
    let on_view = move |view: ViewMode| {
        state.write().view = view;
    };

    let current = state.read().clone();
    let preview = (testbed.render)(&current.props);
    let snippet = usage_snippet(testbed.snippet_name(), &testbed.controls, &current.props);
    let fields: Vec<_> = testbed
        .controls
        .iter()
        .map(|c| (c.name.clone(), c.clone(), current.current(c).cloned()))
        .collect();
    let cards: Vec<_> = testbed
        .variants
        .iter()
        .map(|v| {
            (
                v.name.clone(),
                v.clone(),
                current.matches(v),
                (testbed.render)(&v.props),
            )
        })
        .collect();
    let root_class = current.view.color_mode.class();
    let root_style = current.view.color_mode.style();
    let preview_style = current.view.preview_style();

    rsx! {
        div {
            class: "kitchen-harness min-h-screen p-6 flex flex-col gap-6 {root_class}",
            style: "{root_style}",
            header { class: "flex flex-col gap-1",
                h1 { class: "text-2xl font-bold", "{testbed.title}" }
                if let Some(description) = &testbed.description {
                    p { class: "text-gray-500", "{description}" }
                }
            }

            if testbed.show_toolbar {
                ModeToolbar { view: current.view, on_change: on_view }
            }

            if !testbed.controls.is_empty() {
                section { class: "flex flex-col gap-3",
                    SectionHeading { title: "Props" }
                    div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                        for (key, control, value) in fields {
                            ControlRenderer {
                                key: "{key}",
                                control,
                                value,
                                revision: current.revision,
                                on_change,
                            }
                        }
                    }
                }
            }

            section { class: "flex flex-col gap-3",
                SectionHeading { title: "Preview" }
                div { class: "kitchen-preview", style: "{preview_style}",
                    {preview}
                }
            }

            if testbed.show_code {
                section { class: "flex flex-col gap-3",
                    SectionHeading { title: "Code" }
                    CodePanel { snippet }
                }
            }

            if !testbed.variants.is_empty() {
                section { class: "flex flex-col gap-3",
                    SectionHeading { title: "Variants" }
                    div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                        for (key, variant, active, preview) in cards {
                            VariantCard {
                                key: "{key}",
                                variant,
                                active,
                                preview,
                                on_apply,
                            }
                        }
                    }
                }
            }
        }
    }
}
