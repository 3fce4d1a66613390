/*
 * placeholder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder proxy generation.
//!
//! Build mode renders an each block's body exactly once, against a value that
//! mirrors the item shape but holds `{{dotted.path}}` placeholder strings at
//! every leaf. The downstream Handlebars engine later substitutes those paths
//! against real data; this module only synthesizes the text.

use crate::shape::Shape;
use crate::value::Value;

/// Synthesize the placeholder proxy for an item shape.
///
/// Each leaf becomes `Value::String("{{path}}")` where `path` is the chain of
/// field names from the root to that leaf, joined with `.`. Object nodes
/// become ordered object values with the same field order as the shape, so
/// the result is byte-identical across calls for the same shape.
///
/// Callers must ensure the root shape is an object; the each block enforces
/// this before calling. A leaf handed directly to this function would name
/// the empty path.
pub fn placeholder_proxy(shape: &Shape) -> Value {
    generate(shape, "")
}

fn generate(node: &Shape, path: &str) -> Value {
    match node {
        Shape::Leaf => Value::String(format!("{{{{{path}}}}}")),
        Shape::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, child)| {
                    let child_path = if path.is_empty() {
                        name.clone()
                    } else {
                        format!("{path}.{name}")
                    };
                    (name.clone(), generate(child, &child_path))
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_shape() {
        let shape = Shape::object([("name", Shape::Leaf), ("email", Shape::Leaf)]);

        assert_eq!(
            placeholder_proxy(&shape),
            Value::object([
                ("name", Value::from("{{name}}")),
                ("email", Value::from("{{email}}")),
            ])
        );
    }

    #[test]
    fn test_nested_shape_uses_dotted_paths() {
        let shape = Shape::object([
            ("name", Shape::Leaf),
            ("address", Shape::object([("city", Shape::Leaf)])),
        ]);

        assert_eq!(
            placeholder_proxy(&shape),
            Value::object([
                ("name", Value::from("{{name}}")),
                (
                    "address",
                    Value::object([("city", Value::from("{{address.city}}"))])
                ),
            ])
        );
    }

    #[test]
    fn test_deeply_nested_paths() {
        let shape = Shape::object([(
            "a",
            Shape::object([("b", Shape::object([("c", Shape::Leaf)]))]),
        )]);

        let proxy = placeholder_proxy(&shape);
        assert_eq!(proxy.get_path("a.b.c"), Some(&Value::from("{{a.b.c}}")));
    }

    #[test]
    fn test_empty_object_shape() {
        let shape = Shape::object(Vec::<(String, Shape)>::new());
        assert_eq!(placeholder_proxy(&shape), Value::Object(vec![]));
    }

    #[test]
    fn test_field_order_matches_shape() {
        let shape = Shape::object([
            ("zeta", Shape::Leaf),
            ("alpha", Shape::Leaf),
            ("mid", Shape::Leaf),
        ]);

        let Value::Object(fields) = placeholder_proxy(&shape) else {
            panic!("expected object proxy");
        };
        let names: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let shape = Shape::object([
            ("name", Shape::Leaf),
            ("address", Shape::object([("city", Shape::Leaf)])),
        ]);

        assert_eq!(placeholder_proxy(&shape), placeholder_proxy(&shape));
    }
}
