//! Control schema and the per-type edit dispatch

/// A prop value. Each variant pairs with one [`ControlKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Str(String),
    Num(f64),
    /// One of a select control's options
    Choice(String),
}

impl PropValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Num(_) => "number",
            Self::Choice(_) => "select",
        }
    }

    /// String-typed values render as quoted attributes in the usage snippet.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Choice(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Num(value.into())
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Control type together with its default, so a default of the wrong type
/// cannot be written down.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    Boolean { default: bool },
    String { default: String },
    Number { default: f64 },
    Select { default: String, options: Vec<String> },
}

impl ControlKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean { .. } => "boolean",
            Self::String { .. } => "string",
            Self::Number { .. } => "number",
            Self::Select { .. } => "select",
        }
    }

    pub fn default_value(&self) -> PropValue {
        match self {
            Self::Boolean { default } => PropValue::Bool(*default),
            Self::String { default } => PropValue::Str(default.clone()),
            Self::Number { default } => PropValue::Num(*default),
            Self::Select { default, .. } => PropValue::Choice(default.clone()),
        }
    }

    /// Whether `value` has the shape this control produces.
    pub fn accepts(&self, value: &PropValue) -> bool {
        matches!(
            (self, value),
            (Self::Boolean { .. }, PropValue::Bool(_))
                | (Self::String { .. }, PropValue::Str(_))
                | (Self::Number { .. }, PropValue::Num(_))
                | (Self::Select { .. }, PropValue::Choice(_))
        )
    }
}

/// One user-editable prop of the component under test.
#[derive(Clone, Debug, PartialEq)]
pub struct PropControl {
    pub name: String,
    pub kind: ControlKind,
    pub description: Option<String>,
}

/// What a control shows for the current value.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlWidget {
    Toggle { checked: bool },
    Text { value: String },
    Numeric { value: f64 },
    Choice { selected: String, options: Vec<String> },
}

/// A raw user interaction with a control widget.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlInput {
    Toggle,
    Text(String),
    Select(String),
}

impl PropControl {
    pub fn new(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
        }
    }

    /// Live value if it fits this control, else the declared default.
    pub fn effective_value(&self, current: Option<&PropValue>) -> PropValue {
        match current {
            Some(value) if self.kind.accepts(value) => value.clone(),
            _ => self.kind.default_value(),
        }
    }

    /// Widget state for the current value.
    pub fn widget(&self, current: Option<&PropValue>) -> ControlWidget {
        match (&self.kind, self.effective_value(current)) {
            (ControlKind::Boolean { .. }, PropValue::Bool(checked)) => {
                ControlWidget::Toggle { checked }
            }
            (ControlKind::Number { .. }, PropValue::Num(value)) => ControlWidget::Numeric { value },
            (ControlKind::Select { options, .. }, PropValue::Choice(selected)) => {
                ControlWidget::Choice {
                    selected,
                    options: options.clone(),
                }
            }
            (_, value) => ControlWidget::Text {
                value: value.as_str().unwrap_or_default().to_string(),
            },
        }
    }

    /// Turn an interaction into the value to store, or `None` to reject it.
    ///
    /// Toggles negate the effective value. Text is forwarded untrimmed for
    /// string controls and must parse to a finite number for number controls.
    /// Selections must name one of the options.
    pub fn apply_input(&self, current: Option<&PropValue>, input: ControlInput) -> Option<PropValue> {
        match (&self.kind, input) {
            (ControlKind::Boolean { .. }, ControlInput::Toggle) => {
                match self.effective_value(current) {
                    PropValue::Bool(checked) => Some(PropValue::Bool(!checked)),
                    _ => None,
                }
            }
            (ControlKind::String { .. }, ControlInput::Text(text)) => Some(PropValue::Str(text)),
            (ControlKind::Number { .. }, ControlInput::Text(text)) => {
                parse_number(&text).map(PropValue::Num)
            }
            (ControlKind::Select { options, .. }, ControlInput::Select(choice)) => options
                .contains(&choice)
                .then_some(PropValue::Choice(choice)),
            _ => None,
        }
    }
}

/// Parse number-control text. Surrounding whitespace is ignored; empty,
/// non-numeric and non-finite input is rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a number the way `JSON.stringify` would: integral values without
/// a fraction, and exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    let abs = value.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    if value.fract() == 0.0 && abs < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Text typed into a number field, tied to the live value and state
/// revision it was typed against.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberDraft {
    pub text: String,
    /// Value the live state holds once this text has been handled
    pub expected: f64,
    pub revision: u64,
}

impl NumberDraft {
    /// Valid text becomes the new live value; invalid text leaves `current`.
    pub fn new(text: impl Into<String>, current: f64, revision: u64) -> Self {
        let text = text.into();
        Self {
            expected: parse_number(&text).unwrap_or(current),
            text,
            revision,
        }
    }
}

/// What a number field shows.
///
/// The draft is shown only while the live value and revision are the ones it
/// was typed against. Anything else (a variant, an edit elsewhere) replaces
/// it with the formatted live value.
pub fn number_field_text(draft: Option<&NumberDraft>, value: f64, revision: u64) -> String {
    match draft {
        Some(d) if d.revision == revision && d.expected == value => d.text.clone(),
        _ => format_number(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boolean(default: bool) -> PropControl {
        PropControl::new("pagesMode", ControlKind::Boolean { default })
    }

    fn size_select() -> PropControl {
        PropControl::new(
            "size",
            ControlKind::Select {
                default: "medium".into(),
                options: vec!["small".into(), "medium".into()],
            },
        )
    }

    #[test]
    fn toggle_falls_back_to_default_then_negates() {
        let control = boolean(true);
        assert_eq!(control.widget(None), ControlWidget::Toggle { checked: true });
        assert_eq!(
            control.apply_input(None, ControlInput::Toggle),
            Some(PropValue::Bool(false))
        );
        assert_eq!(
            control.apply_input(Some(&PropValue::Bool(false)), ControlInput::Toggle),
            Some(PropValue::Bool(true))
        );
    }

    #[test]
    fn string_text_is_forwarded_raw() {
        let control = PropControl::new("label", ControlKind::String { default: "Go".into() });
        assert_eq!(
            control.apply_input(None, ControlInput::Text("  spaced  ".into())),
            Some(PropValue::Str("  spaced  ".into()))
        );
        assert_eq!(
            control.apply_input(None, ControlInput::Text(String::new())),
            Some(PropValue::Str(String::new()))
        );
    }

    #[test]
    fn number_text_is_parsed_or_rejected() {
        let control = PropControl::new("count", ControlKind::Number { default: 3.0 });
        assert_eq!(
            control.apply_input(None, ControlInput::Text(" 12.5 ".into())),
            Some(PropValue::Num(12.5))
        );
        assert_eq!(control.apply_input(None, ControlInput::Text("abc".into())), None);
        assert_eq!(control.apply_input(None, ControlInput::Text("".into())), None);
        assert_eq!(control.apply_input(None, ControlInput::Text("NaN".into())), None);
        assert_eq!(control.apply_input(None, ControlInput::Text("inf".into())), None);
    }

    #[test]
    fn select_only_accepts_declared_options() {
        let control = size_select();
        assert_eq!(
            control.apply_input(None, ControlInput::Select("small".into())),
            Some(PropValue::Choice("small".into()))
        );
        assert_eq!(control.apply_input(None, ControlInput::Select("huge".into())), None);
        assert_eq!(
            control.widget(None),
            ControlWidget::Choice {
                selected: "medium".into(),
                options: vec!["small".into(), "medium".into()],
            }
        );
    }

    #[test]
    fn mismatched_input_is_ignored() {
        assert_eq!(boolean(false).apply_input(None, ControlInput::Text("x".into())), None);
        assert_eq!(size_select().apply_input(None, ControlInput::Toggle), None);
    }

    #[test]
    fn widget_ignores_live_value_of_wrong_type() {
        let control = boolean(false);
        let stale = PropValue::Str("yes".into());
        assert_eq!(control.widget(Some(&stale)), ControlWidget::Toggle { checked: false });
    }

    #[test]
    fn numbers_format_like_json() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "null");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn number_field_keeps_draft_while_typing() {
        // "1." parses to 1, so the live value moves to 1 and the text stays
        let draft = NumberDraft::new("1.", 0.0, 0);
        assert_eq!(number_field_text(Some(&draft), 1.0, 0), "1.");

        let invalid = NumberDraft::new("abc", 4.0, 0);
        assert_eq!(invalid.expected, 4.0);
        assert_eq!(number_field_text(Some(&invalid), 4.0, 0), "abc");
        assert_eq!(number_field_text(None, 4.0, 0), "4");
    }

    #[test]
    fn number_field_drops_invalid_draft_when_value_changes() {
        let draft = NumberDraft::new("abc", 0.0, 0);
        // another value arrives
        assert_eq!(number_field_text(Some(&draft), 120.0, 0), "120");
        // same value, but the state was replaced
        assert_eq!(number_field_text(Some(&draft), 0.0, 1), "0");
    }
}
