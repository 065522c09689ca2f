//! One input widget per control type

use crate::components::{Select, Switch, TextInput, TextInputSize};
use crate::testbed::{
    format_number, number_field_text, parse_number, ControlInput, ControlWidget, NumberDraft,
    PropControl, PropValue,
};
use dioxus::prelude::*;

/// Render the widget for `control` and report accepted edits as
/// `(name, value)` through `on_change`. Rejected edits never reach it.
///
/// `revision` changes whenever the live props are replaced wholesale.
#[component]
pub fn ControlRenderer(
    control: PropControl,
    value: Option<PropValue>,
    #[props(default)] revision: u64,
    on_change: EventHandler<(String, PropValue)>,
) -> Element {
    let widget = control.widget(value.as_ref());
    let name = control.name.clone();
    let description = control.description.clone();

    let emit = use_callback(move |input: ControlInput| {
        if let Some(next) = control.apply_input(value.as_ref(), input) {
            on_change.call((control.name.clone(), next));
        }
    });

    let field = match widget {
        ControlWidget::Toggle { checked } => rsx! {
            Switch {
                checked,
                label: name.clone(),
                on_toggle: move |_| emit.call(ControlInput::Toggle),
            }
        },
        ControlWidget::Text { value } => rsx! {
            TextInput {
                value,
                size: TextInputSize::Small,
                placeholder: format!("Enter {name}"),
                on_input: move |text| emit.call(ControlInput::Text(text)),
            }
        },
        ControlWidget::Numeric { value } => rsx! {
            NumberField {
                name: name.clone(),
                value,
                revision,
                on_text: move |text| emit.call(ControlInput::Text(text)),
            }
        },
        ControlWidget::Choice { selected, options } => rsx! {
            Select {
                value: selected,
                options: options.into_iter().map(|o| (o.clone(), o)).collect::<Vec<_>>(),
                placeholder: format!("Select {name}..."),
                onchange: move |choice| emit.call(ControlInput::Select(choice)),
            }
        },
    };

    rsx! {
        div { class: "flex flex-col gap-1", "data-control": "{name}",
            label { class: "text-sm font-medium", "{name}" }
            {field}
            if let Some(description) = description {
                p { class: "text-xs text-gray-500", "{description}" }
            }
        }
    }
}

/// Numeric text entry that keeps what the user typed until it parses.
///
/// Text that is not a finite number stays in the field, flagged invalid,
/// while the prop keeps its last valid value. A new value or revision from
/// outside replaces the text.
#[component]
fn NumberField(name: String, value: f64, revision: u64, on_text: EventHandler<String>) -> Element {
    let mut draft = use_signal(|| None::<NumberDraft>);

    let text = number_field_text(draft.read().as_ref(), value, revision);
    let invalid = parse_number(&text).is_none();
    let kept = format_number(value);

    rsx! {
        TextInput {
            value: text,
            size: TextInputSize::Small,
            numeric: true,
            invalid,
            placeholder: format!("Enter {name}"),
            on_input: move |text: String| {
                draft.set(Some(NumberDraft::new(text.clone(), value, revision)));
                on_text.call(text);
            },
        }
        if invalid {
            p { class: "text-xs text-red-400", "Not a number; keeping {kept}" }
        }
    }
}
