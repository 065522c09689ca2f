//! Live state of one mounted testbed

use crate::testbed::{PropControl, PropMap, PropValue, Testbed, Variant, ViewMode};
use tracing::debug;

/// Live props plus view mode. Lives in a signal owned by the harness and is
/// dropped on unmount, so nothing survives a remount.
#[derive(Clone, Debug, PartialEq)]
pub struct TestbedState {
    pub props: PropMap,
    pub view: ViewMode,
    /// Bumped whenever the props are replaced wholesale, so controls drop
    /// any half-typed text.
    pub revision: u64,
}

impl TestbedState {
    /// Seed from each control's default, then the author's defaults on top.
    pub fn new(testbed: &Testbed) -> Self {
        let mut props: PropMap = testbed
            .controls
            .iter()
            .map(|c| (c.name.clone(), c.kind.default_value()))
            .collect();
        for (name, value) in testbed.defaults.iter() {
            props.insert(name, value.clone());
        }

        Self {
            props,
            view: ViewMode::default(),
            revision: 0,
        }
    }

    /// Merge one prop into the live state. The value is not checked against
    /// the control type.
    pub fn update_prop(&mut self, name: impl Into<String>, value: PropValue) {
        let name = name.into();
        debug!("update_prop {name} = {value:?}");
        self.props.insert(name, value);
    }

    /// Replace the live props with the variant's map. Keys the variant does
    /// not set are dropped.
    pub fn apply_variant(&mut self, variant: &Variant) {
        debug!("apply_variant {}", variant.name);
        self.props = variant.props.clone();
        self.revision += 1;
    }

    /// Live value for a control, if one is set.
    pub fn current(&self, control: &PropControl) -> Option<&PropValue> {
        self.props.get(&control.name)
    }

    /// Whether the live props are exactly the variant's map.
    pub fn matches(&self, variant: &Variant) -> bool {
        self.props == variant.props
    }
}
