//! Testbed definitions: the schema a testbed author writes against

use super::control::{ControlKind, PropControl, PropValue};
use super::props::PropMap;
use dioxus::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

/// Renders the component under test from a set of props.
pub type RenderFn = fn(&PropMap) -> Element;

/// Mistakes in a testbed definition, caught when it is built.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SchemaError {
    #[error("control '{0}' is declared more than once")]
    DuplicateControl(String),
    #[error("select control '{0}' has no options")]
    EmptyOptions(String),
    #[error("select control '{control}' defaults to '{value}', which is not one of its options")]
    DefaultNotInOptions { control: String, value: String },
    #[error("{context}: '{control}' is a {expected} control but got a {found} value")]
    TypeMismatch {
        context: String,
        control: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{context}: '{value}' is not an option of select control '{control}'")]
    UnknownOption {
        context: String,
        control: String,
        value: String,
    },
}

/// A named preset of prop values
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub name: String,
    pub props: PropMap,
}

impl Variant {
    /// Create a new variant with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: PropMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &str, value: bool) -> Self {
        self.props.insert(key, PropValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &str, value: &str) -> Self {
        self.props.insert(key, PropValue::Str(value.to_string()));
        self
    }

    pub fn set_number(mut self, key: &str, value: f64) -> Self {
        self.props.insert(key, PropValue::Num(value));
        self
    }

    pub fn set_choice(mut self, key: &str, value: &str) -> Self {
        self.props.insert(key, PropValue::Choice(value.to_string()));
        self
    }
}

/// One component's testbed: its controls, defaults and variants.
#[derive(Clone)]
pub struct Testbed {
    pub title: String,
    pub description: Option<String>,
    /// Name used in the usage snippet
    pub display_name: Option<String>,
    pub controls: Vec<PropControl>,
    pub defaults: PropMap,
    pub variants: Vec<Variant>,
    pub show_code: bool,
    pub show_toolbar: bool,
    pub render: RenderFn,
}

impl PartialEq for Testbed {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.display_name == other.display_name
            && self.controls == other.controls
            && self.defaults == other.defaults
            && self.variants == other.variants
            && self.show_code == other.show_code
            && self.show_toolbar == other.show_toolbar
            && self.render as usize == other.render as usize
    }
}

impl std::fmt::Debug for Testbed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Testbed")
            .field("title", &self.title)
            .field("controls", &self.controls)
            .field("defaults", &self.defaults)
            .field("variants", &self.variants)
            .finish_non_exhaustive()
    }
}

impl Testbed {
    pub fn builder(title: impl Into<String>, render: RenderFn) -> TestbedBuilder {
        TestbedBuilder::new(title, render)
    }

    pub fn control(&self, name: &str) -> Option<&PropControl> {
        self.controls.iter().find(|c| c.name == name)
    }

    /// Name shown in the usage snippet.
    pub fn snippet_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Component")
    }
}

/// Builder for a [`Testbed`]
pub struct TestbedBuilder {
    testbed: Testbed,
}

impl TestbedBuilder {
    pub fn new(title: impl Into<String>, render: RenderFn) -> Self {
        Self {
            testbed: Testbed {
                title: title.into(),
                description: None,
                display_name: None,
                controls: Vec::new(),
                defaults: PropMap::new(),
                variants: Vec::new(),
                show_code: true,
                show_toolbar: true,
                render,
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.testbed.description = Some(description.to_string());
        self
    }

    pub fn display_name(mut self, name: &str) -> Self {
        self.testbed.display_name = Some(name.to_string());
        self
    }

    fn control(mut self, name: &str, kind: ControlKind) -> Self {
        self.testbed.controls.push(PropControl::new(name, kind));
        self
    }

    /// Add a boolean control
    pub fn bool_control(self, name: &str, default: bool) -> Self {
        self.control(name, ControlKind::Boolean { default })
    }

    /// Add a free-form string control
    pub fn string_control(self, name: &str, default: &str) -> Self {
        self.control(
            name,
            ControlKind::String {
                default: default.to_string(),
            },
        )
    }

    /// Add a number control
    pub fn number_control(self, name: &str, default: f64) -> Self {
        self.control(name, ControlKind::Number { default })
    }

    /// Add a single-choice control over `options`
    pub fn select_control(self, name: &str, default: &str, options: &[&str]) -> Self {
        self.control(
            name,
            ControlKind::Select {
                default: default.to_string(),
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &str) -> Self {
        if let Some(last) = self.testbed.controls.last_mut() {
            last.description = Some(doc.to_string());
        }
        self
    }

    /// Seed a prop; takes precedence over the control's own default.
    pub fn default_prop(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.testbed.defaults.insert(name, value.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.testbed.variants.push(variant);
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.testbed.show_code = show;
        self
    }

    pub fn show_toolbar(mut self, show: bool) -> Self {
        self.testbed.show_toolbar = show;
        self
    }

    /// Validate and return the testbed.
    ///
    /// Plain strings given for select controls are taken as choices. Keys
    /// with no matching control pass through untouched.
    pub fn build(mut self) -> Result<Testbed, SchemaError> {
        let controls = &self.testbed.controls;

        let mut seen = HashSet::new();
        for control in controls {
            if !seen.insert(control.name.as_str()) {
                return Err(SchemaError::DuplicateControl(control.name.clone()));
            }
            if let ControlKind::Select { default, options } = &control.kind {
                if options.is_empty() {
                    return Err(SchemaError::EmptyOptions(control.name.clone()));
                }
                if !options.contains(default) {
                    return Err(SchemaError::DefaultNotInOptions {
                        control: control.name.clone(),
                        value: default.clone(),
                    });
                }
            }
        }

        check_props(controls, &mut self.testbed.defaults, "defaults")?;
        for variant in &mut self.testbed.variants {
            let context = format!("variant '{}'", variant.name);
            check_props(controls, &mut variant.props, &context)?;
        }

        Ok(self.testbed)
    }
}

fn check_props(
    controls: &[PropControl],
    props: &mut PropMap,
    context: &str,
) -> Result<(), SchemaError> {
    for (name, value) in props.iter_mut() {
        let Some(control) = controls.iter().find(|c| c.name == name) else {
            continue;
        };

        if matches!(control.kind, ControlKind::Select { .. }) {
            if let PropValue::Str(s) = value {
                let choice = std::mem::take(s);
                *value = PropValue::Choice(choice);
            }
        }
        if !control.kind.accepts(value) {
            return Err(SchemaError::TypeMismatch {
                context: context.to_string(),
                control: name.to_string(),
                expected: control.kind.type_name(),
                found: value.type_name(),
            });
        }
        if let (ControlKind::Select { options, .. }, PropValue::Choice(choice)) =
            (&control.kind, &*value)
        {
            if !options.contains(choice) {
                return Err(SchemaError::UnknownOption {
                    context: context.to_string(),
                    control: name.to_string(),
                    value: choice.clone(),
                });
            }
        }
    }
    Ok(())
}
