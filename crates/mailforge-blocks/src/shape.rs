/*
 * shape.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Structural item-shape descriptions.
//!
//! A [`Shape`] describes the structure of the items an each block iterates
//! over, so that build mode can synthesize a placeholder proxy without any
//! concrete data. It is a tagged variant the core operates on directly;
//! adapters translate external schema representations into it at the
//! boundary, keeping the proxy algorithm independent of any particular
//! validation library.
//!
//! Shapes are never used to validate real data.

/// Structural description of a data shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// An ordered mapping from field name to child shape.
    ///
    /// Zero fields is a valid object.
    Object(Vec<(String, Shape)>),

    /// Any non-object primitive shape (string, number, boolean, ...).
    Leaf,
}

impl Shape {
    /// Build an object shape from named fields, preserving their order.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Shape)>) -> Self {
        Shape::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// True if this shape is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Shape::Object(_))
    }

    /// The fields of an object shape, or `None` for a leaf.
    pub fn fields(&self) -> Option<&[(String, Shape)]> {
        match self {
            Shape::Object(fields) => Some(fields),
            Shape::Leaf => None,
        }
    }

    /// Derive a shape from a JSON sample value.
    ///
    /// JSON objects become [`Shape::Object`] (recursively, preserving field
    /// order); everything else becomes [`Shape::Leaf`]. This is the boundary
    /// adapter for callers whose item shapes live in JSON-ish schema
    /// descriptions.
    pub fn from_json(sample: &serde_json::Value) -> Shape {
        match sample {
            serde_json::Value::Object(fields) => Shape::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Shape::from_json(v)))
                    .collect(),
            ),
            _ => Shape::Leaf,
        }
    }
}
