use super::control::PropValue;
use std::collections::BTreeMap;

/// Props handed to a component under test, keyed by control name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropMap(BTreeMap<String, PropValue>);

impl PropMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropValue) -> Option<PropValue> {
        self.0.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut PropValue)> {
        self.0.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String or select value.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            PropValue::Num(n) => Some(*n),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, PropValue)> for PropMap {
    fn from_iter<I: IntoIterator<Item = (K, PropValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
