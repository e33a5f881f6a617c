//! Raw tenant content and caller overrides

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::theme::SectionName;

/// Key of the `{ "value": V }` wrapper some content sources emit
pub(crate) const WRAPPER_KEY: &str = "value";

/// Untyped content bundle as stored by the content source
///
/// Keys are section keys or legacy aliases; fragments may have any shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawContentBundle {
    entries: Map<String, Value>,
}

impl From<Value> for RawContentBundle {
    /// Anything but a JSON object yields an empty bundle
    fn from(value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            _ => Self::default(),
        }
    }
}

impl RawContentBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bundle from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Value>(content).map(Self::from)
    }

    /// Add a top-level entry, builder style
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Get a top-level fragment
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Follow a key path from the bundle root
    ///
    /// Intermediate `{ "value": ... }` wrappers are stepped through.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.entries.get(*first)?;
        for key in rest {
            current = descend(current, key)?;
        }
        Some(current)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

/// Step into `key`, looking through a value wrapper if needed
pub(crate) fn descend<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let object = value.as_object()?;
    if let Some(child) = object.get(key) {
        return Some(child);
    }
    wrapped_inner(value)?.as_object()?.get(key)
}

/// Unwrap `{ "value": V }` into `V`; other values pass through
pub(crate) fn unwrap_value(value: &Value) -> &Value {
    wrapped_inner(value).unwrap_or(value)
}

/// The inner value if `value` is a wrapper object
///
/// Only an object whose sole key is `value` is a wrapper; objects that carry
/// other keys next to `value` are plain fragments.
pub(crate) fn wrapped_inner(value: &Value) -> Option<&Value> {
    let object = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.get(WRAPPER_KEY)
}

/// Explicit per-section props supplied by the caller
///
/// These win over everything in the bundle and the default tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionOverrides {
    props: HashMap<SectionName, Value>,
}

impl SectionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit props for a section, builder style
    pub fn with(mut self, section: SectionName, props: Value) -> Self {
        self.set(section, props);
        self
    }

    pub fn set(&mut self, section: SectionName, props: Value) {
        self.props.insert(section, props);
    }

    pub fn get(&self, section: SectionName) -> Option<&Value> {
        self.props.get(&section)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_bundle_is_empty() {
        assert!(RawContentBundle::from(json!([1, 2, 3])).is_empty());
        assert!(RawContentBundle::from(json!(null)).is_empty());
        assert!(RawContentBundle::from_json_str("\"text\"").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(RawContentBundle::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_deserialize_via_serde() {
        let bundle: RawContentBundle = serde_json::from_str(r#"{"hero": {"title": "Hi"}}"#).unwrap();
        assert_eq!(bundle.lookup(&["hero", "title"]), Some(&json!("Hi")));
    }

    #[test]
    fn test_lookup_steps_through_wrappers() {
        let bundle = RawContentBundle::from(json!({
            "cta_section": { "value": { "cta_boxes": [{"title": "A"}] } }
        }));
        assert_eq!(
            bundle.lookup(&["cta_section", "cta_boxes"]),
            Some(&json!([{"title": "A"}]))
        );
        assert_eq!(bundle.lookup(&["cta_section", "missing"]), None);
        assert_eq!(bundle.lookup(&[]), None);
    }

    #[test]
    fn test_unwrap_value() {
        assert_eq!(unwrap_value(&json!({"value": 3})), &json!(3));
        assert_eq!(unwrap_value(&json!({"title": 3})), &json!({"title": 3}));
        assert_eq!(unwrap_value(&json!("x")), &json!("x"));
    }

    #[test]
    fn test_value_key_beside_other_keys_is_not_a_wrapper() {
        let fragment = json!({"value": "legacy", "title": "T"});
        assert_eq!(wrapped_inner(&fragment), None);
        assert_eq!(unwrap_value(&fragment), &fragment);

        let bundle = RawContentBundle::from(json!({
            "cta_section": {"value": {"boxes": []}, "boxes": [{"title": "B"}]}
        }));
        assert_eq!(bundle.lookup(&["cta_section", "boxes"]), Some(&json!([{"title": "B"}])));
        assert_eq!(bundle.lookup(&["cta_section", "title"]), None);
    }
}
