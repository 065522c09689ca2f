//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - for primary actions
    Primary,
    /// Gray background - for secondary actions
    Secondary,
    /// Border only
    Outline,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = match size {
        ButtonSize::Small => "inline-flex items-center gap-2 text-sm rounded-lg transition-colors",
        ButtonSize::Medium => "inline-flex items-center gap-2 rounded-lg transition-colors",
    };

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Outline => {
            "border border-gray-500 text-current hover:bg-gray-500/10 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            disabled,
            title: title.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
