use dioxus::prelude::*;
use kitchen_ui::{PropMap, SchemaError, Testbed, TextInput, TextInputSize, Variant};

fn render(props: &PropMap) -> Element {
    let size = match props.str("size") {
        Some("medium") => TextInputSize::Medium,
        _ => TextInputSize::Small,
    };
    let placeholder = props
        .str("placeholder")
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    rsx! {
        TextInput {
            value: props.str("value").unwrap_or_default().to_string(),
            on_input: |_| {},
            size,
            placeholder,
            disabled: props.bool("disabled").unwrap_or(false),
            monospace: props.bool("monospace").unwrap_or(false),
            invalid: props.bool("invalid").unwrap_or(false),
        }
    }
}

pub fn testbed() -> Result<Testbed, SchemaError> {
    Testbed::builder("TextInput", render)
        .description("Single-line text input with consistent styling")
        .display_name("TextInput")
        .string_control("value", "")
        .string_control("placeholder", "Type here")
        .select_control("size", "small", &["small", "medium"])
        .bool_control("disabled", false)
        .bool_control("monospace", false)
        .doc("Use a fixed-width font, e.g. for keys and hashes")
        .bool_control("invalid", false)
        .variant(Variant::new("Empty").set_string("placeholder", "Type here"))
        .variant(
            Variant::new("Invalid")
                .set_string("value", "not-an-email")
                .set_bool("invalid", true),
        )
        .variant(
            Variant::new("Monospace")
                .set_string("value", "a3f9c2e1")
                .set_bool("monospace", true)
                .set_choice("size", "medium"),
        )
        .show_code(true)
        .build()
}
