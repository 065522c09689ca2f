//! Toggle switch component

use dioxus::prelude::*;

const TRACK_BASE: &str = "display: inline-flex; align-items: center; width: 2.75rem; \
    height: 1.5rem; padding: 0.125rem; border: none; border-radius: 9999px; cursor: pointer;";
const KNOB_BASE: &str = "display: block; width: 1.25rem; height: 1.25rem; border-radius: 9999px;";

/// Inline `(track, knob)` styles for a switch state.
pub fn switch_styles(checked: bool) -> (&'static str, &'static str) {
    if checked {
        (
            "background-color: #4f46e5; justify-content: flex-end;",
            "background-color: #ffffff;",
        )
    } else {
        (
            "background-color: #4b5563; justify-content: flex-start;",
            "background-color: #d1d5db;",
        )
    }
}

/// An on/off switch. Clicking reports the click; the caller decides the
/// new value.
#[component]
pub fn Switch(
    checked: bool,
    on_toggle: EventHandler<()>,
    #[props(default)] label: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let (track, knob) = switch_styles(checked);

    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: if checked { "true" } else { "false" },
            aria_label: label.as_deref(),
            disabled,
            class: "kitchen-switch",
            style: "{TRACK_BASE} {track}",
            onclick: move |_| {
                if !disabled {
                    on_toggle.call(());
                }
            },
            span {
                style: "{KNOB_BASE} {knob}",
            }
            span { class: "sr-only", if checked { "On" } else { "Off" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_and_off_look_different() {
        let (on_track, on_knob) = switch_styles(true);
        let (off_track, off_knob) = switch_styles(false);
        assert_ne!(on_track, off_track);
        assert_ne!(on_knob, off_knob);
        assert!(on_track.contains("flex-end"));
        assert!(off_track.contains("flex-start"));
    }
}
