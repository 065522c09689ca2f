//! Native select menu with the panel styling

use dioxus::prelude::*;

/// Single-choice select over `(value, label)` options
#[component]
pub fn Select(
    /// Currently selected value
    value: String,
    /// Options as (value, label)
    options: Vec<(String, String)>,
    /// Called with the chosen value
    onchange: EventHandler<String>,
    /// Shown as a disabled first entry when nothing is selected
    #[props(default)]
    placeholder: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let has_selection = options.iter().any(|(v, _)| *v == value);

    rsx! {
        select {
            class: "bg-gray-700 text-gray-300 text-sm rounded px-2 py-1 border border-gray-600 disabled:opacity-50",
            disabled,
            onchange: move |e| onchange.call(e.value()),
            if let Some(placeholder) = placeholder {
                option {
                    value: "",
                    disabled: true,
                    selected: !has_selection,
                    "{placeholder}"
                }
            }
            for (option_value , label) in options {
                option {
                    key: "{option_value}",
                    selected: option_value == value,
                    value: "{option_value}",
                    "{label}"
                }
            }
        }
    }
}
