use dioxus::prelude::*;
use kitchen_ui::{Button, ButtonSize, ButtonVariant, PropMap, SchemaError, Testbed, Variant};

fn render(props: &PropMap) -> Element {
    let variant = match props.str("variant") {
        Some("secondary") => ButtonVariant::Secondary,
        Some("outline") => ButtonVariant::Outline,
        Some("ghost") => ButtonVariant::Ghost,
        _ => ButtonVariant::Primary,
    };
    let size = match props.str("size") {
        Some("small") => ButtonSize::Small,
        _ => ButtonSize::Medium,
    };
    let disabled = props.bool("disabled").unwrap_or(false);
    let label = props.str("label").unwrap_or_default().to_string();
    let min_width = props.number("minWidth").unwrap_or(0.0).max(0.0);

    rsx! {
        div { style: "min-width: {min_width}px; display: inline-flex;",
            Button {
                variant,
                size,
                disabled,
                class: "w-full justify-center".to_string(),
                onclick: |_| {},
                "{label}"
            }
        }
    }
}

pub fn testbed() -> Result<Testbed, SchemaError> {
    Testbed::builder("Button", render)
        .description("Reusable button with variant and size styling")
        .display_name("Button")
        .select_control(
            "variant",
            "primary",
            &["primary", "secondary", "outline", "ghost"],
        )
        .select_control("size", "medium", &["small", "medium"])
        .bool_control("disabled", false)
        .string_control("label", "Click me")
        .number_control("minWidth", 0.0)
        .doc("Minimum width in pixels")
        .variant(Variant::new("Default").set_choice("variant", "primary").set_string("label", "Click me"))
        .variant(
            Variant::new("Secondary Small")
                .set_choice("variant", "secondary")
                .set_choice("size", "small")
                .set_string("label", "Cancel"),
        )
        .variant(
            Variant::new("Disabled Outline")
                .set_choice("variant", "outline")
                .set_bool("disabled", true)
                .set_string("label", "Unavailable"),
        )
        .show_code(true)
        .show_toolbar(true)
        .build()
}
