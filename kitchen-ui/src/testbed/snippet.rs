//! Usage snippet shown in the code panel

use super::control::{format_number, PropControl, PropValue};
use super::props::PropMap;

fn attribute(key: &str, value: &PropValue) -> String {
    match value {
        PropValue::Str(s) | PropValue::Choice(s) => format!("{key}=\"{s}\""),
        PropValue::Bool(b) => format!("{key}={{{b}}}"),
        PropValue::Num(n) => format!("{key}={{{}}}", format_number(*n)),
    }
}

/// Render a single-line usage snippet for `props`.
///
/// Declared controls come first in schema order, then any other keys in
/// key order. Only keys present in `props` are emitted. Best effort: string
/// values are not escaped.
pub fn usage_snippet(name: &str, controls: &[PropControl], props: &PropMap) -> String {
    let declared = controls
        .iter()
        .filter_map(|c| props.get(&c.name).map(|v| (c.name.as_str(), v)));
    let undeclared = props
        .iter()
        .filter(|(key, _)| !controls.iter().any(|c| c.name == *key));

    let attributes: Vec<String> = declared
        .chain(undeclared)
        .map(|(key, value)| attribute(key, value))
        .collect();

    if attributes.is_empty() {
        format!("<{name} />")
    } else {
        format!("<{name} {} />", attributes.join(" "))
    }
}
