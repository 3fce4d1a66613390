/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Item values for preview data and placeholder proxies.
//!
//! [`Value`] plays two roles. In preview mode it carries the concrete items an
//! author supplies for each blocks. In build mode it carries the placeholder
//! proxy synthesized from an item shape, where every leaf is a
//! `{{dotted.path}}` string. Item renderers receive both through the same
//! type, which is what guarantees preview/build symmetry: a renderer cannot
//! tell which mode it is serving.
//!
//! Objects are ordered field lists, not hash maps. Proxy generation must be
//! deterministic, so field order has to survive construction and traversal.

use std::fmt;

/// A value usable as a preview item or a placeholder proxy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A null/missing value.
    #[default]
    Null,

    /// A boolean value.
    Bool(bool),

    /// A string value.
    String(String),

    /// A list of values.
    List(Vec<Value>),

    /// An ordered mapping from field name to value.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Build an ordered object value.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up a direct field of an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Look up a nested field by dotted path (e.g. `"address.city"`).
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self, |value, segment| value.get(segment))
    }

    /// Render this value as text for embedding in content.
    ///
    /// - String: as-is
    /// - Bool: `"true"` or `""`
    /// - List: concatenation of rendered elements
    /// - Object: `"true"`
    /// - Null: `""`
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => String::new(),
            Value::String(s) => s.clone(),
            Value::List(items) => items.iter().map(Value::render).collect(),
            Value::Object(_) => "true".to_string(),
        }
    }

    /// Convert from a JSON value, preserving object field order.
    ///
    /// JSON numbers have no dedicated variant here; they are converted to
    /// their rendered string form on import.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::String(n.to_string()),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_preserves_field_order() {
        let value = Value::object([
            ("zeta", Value::from("z")),
            ("alpha", Value::from("a")),
            ("mid", Value::from("m")),
        ]);

        let Value::Object(fields) = &value else {
            panic!("expected object");
        };
        let names: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_get() {
        let value = Value::object([("name", Value::from("Alice"))]);
        assert_eq!(value.get("name"), Some(&Value::from("Alice")));
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::from("scalar").get("name"), None);
    }

    #[test]
    fn test_get_path() {
        let value = Value::object([(
            "address",
            Value::object([("city", Value::from("Lisbon"))]),
        )]);

        assert_eq!(value.get_path("address.city"), Some(&Value::from("Lisbon")));
        assert_eq!(value.get_path("address.street"), None);
        assert_eq!(value.get_path("missing"), None);
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::Bool(true).render(), "true");
        assert_eq!(Value::Bool(false).render(), "");
        assert_eq!(Value::from("hello").render(), "hello");
        assert_eq!(
            Value::List(vec![Value::from("a"), Value::from("b")]).render(),
            "ab"
        );
        assert_eq!(Value::object([("k", Value::Null)]).render(), "true");
    }

    #[test]
    fn test_display_matches_render() {
        let value = Value::from("x");
        assert_eq!(value.to_string(), value.render());
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value = serde_json::json!({
            "name": "Alice",
            "age": 30,
            "active": true,
            "tags": ["a", "b"],
            "note": null,
        });

        let value = Value::from_json(&json);
        assert_eq!(value.get("name"), Some(&Value::from("Alice")));
        assert_eq!(value.get("age"), Some(&Value::from("30")));
        assert_eq!(value.get("active"), Some(&Value::Bool(true)));
        assert_eq!(
            value.get("tags"),
            Some(&Value::List(vec![Value::from("a"), Value::from("b")]))
        );
        assert_eq!(value.get("note"), Some(&Value::Null));
    }

    #[test]
    fn test_from_json_preserves_field_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).expect("valid json");

        let Value::Object(fields) = Value::from_json(&json) else {
            panic!("expected object");
        };
        let names: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
