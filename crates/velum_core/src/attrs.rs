//! Insertion-ordered HTML attribute bag
//!
//! Attributes render in the order they were set, so output is deterministic
//! for a given build sequence. Boolean attributes (`disabled`, `required`,
//! `checked`, `open`) are flags without a value.
//!
//! Components with a `rest` passthrough surface restrict it to an explicit
//! allow-list at the boundary: unknown keys are dropped with a debug log,
//! never an error.

use indexmap::IndexMap;

/// A single attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    /// Bare boolean attribute, rendered as the name alone.
    Flag,
}

/// Insertion-ordered attribute bag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs {
    map: IndexMap<String, AttrValue>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text attribute, replacing any previous value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.map.insert(name.into(), AttrValue::Text(value.into()));
    }

    /// Sets a bare boolean attribute.
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.map.insert(name.into(), AttrValue::Flag);
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.map.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keeps only attributes named in `allowed`; everything else is dropped
    /// with a debug log. This is the `rest` passthrough boundary check.
    pub fn retain_allowed(&mut self, allowed: &[&str]) {
        self.map.retain(|name, _| {
            let keep = allowed.contains(&name.as_str());
            if !keep {
                tracing::debug!(attr = %name, "dropping attribute outside the allow-list");
            }
            keep
        });
    }

    /// Appends all of `other`'s attributes after this bag's.
    pub fn merge(&mut self, other: Attrs) {
        for (name, value) in other.map {
            self.map.insert(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut attrs = Attrs::new();
        attrs.set("placeholder", "Search...");
        attrs.set("autocomplete", "off");
        attrs.set_flag("required");
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["placeholder", "autocomplete", "required"]);
    }

    #[test]
    fn test_retain_allowed_drops_unknown_keys() {
        let mut attrs: Attrs = [("placeholder", "x"), ("onclick", "alert(1)")]
            .into_iter()
            .collect();
        attrs.retain_allowed(&["placeholder", "autocomplete", "disabled"]);
        assert_eq!(attrs.len(), 1);
        assert!(attrs.get("placeholder").is_some());
        assert!(attrs.get("onclick").is_none());
    }
}
