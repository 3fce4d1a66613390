/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Structured content tree for mailforge output.
//!
//! This crate provides the [`Doc`] type that block renderers emit into. It is a
//! deliberately small value tree: literal text fragments composed into ordered
//! sequences, serialized to a single string at the end of a render pass.
//!
//! Blocks never concatenate strings directly; they build `Doc`s and let the
//! final caller serialize once. This keeps directive text (e.g. `{{#if x}}`)
//! byte-exact: no component can accidentally inject whitespace between
//! fragments, because joining is a structural no-op.

use std::fmt;

/// A structured content tree.
///
/// `Doc` is the interface boundary between the block engine and whatever
/// surface finally displays or writes the output: the engine produces a `Doc`,
/// the surface calls [`Doc::render`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Doc {
    /// Empty content (produces no output).
    #[default]
    Empty,

    /// A literal text fragment, emitted as-is.
    Text(String),

    /// Ordered sequence of children, emitted back-to-back with nothing
    /// between them.
    Sequence(Vec<Doc>),
}

impl Doc {
    /// Create a text fragment. Empty strings collapse to [`Doc::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() { Doc::Empty } else { Doc::Text(s) }
    }

    /// Compose an ordered sequence of documents.
    ///
    /// Empty children are dropped; a sequence that collapses to zero or one
    /// child is simplified to `Empty` or the child itself.
    pub fn sequence(children: impl IntoIterator<Item = Doc>) -> Self {
        let mut kept: Vec<Doc> = children.into_iter().filter(|d| !d.is_empty()).collect();
        match kept.len() {
            0 => Doc::Empty,
            1 => kept.remove(0),
            _ => Doc::Sequence(kept),
        }
    }

    /// Append another document after this one.
    pub fn then(self, other: Doc) -> Self {
        Doc::sequence([self, other])
    }

    /// True if this document produces no output.
    pub fn is_empty(&self) -> bool {
        match self {
            Doc::Empty => true,
            Doc::Text(s) => s.is_empty(),
            Doc::Sequence(children) => children.iter().all(Doc::is_empty),
        }
    }

    /// Serialize the tree to its final string form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Doc::Empty => {}
            Doc::Text(s) => out.push_str(s),
            Doc::Sequence(children) => {
                for child in children {
                    child.write_to(out);
                }
            }
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Doc {
    fn from(s: &str) -> Self {
        Doc::text(s)
    }
}

impl From<String> for Doc {
    fn from(s: String) -> Self {
        Doc::text(s)
    }
}

/// Concatenate any number of documents into one.
pub fn concat_docs(docs: impl IntoIterator<Item = Doc>) -> Doc {
    Doc::sequence(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        assert_eq!(Doc::Empty.render(), "");
        assert!(Doc::Empty.is_empty());
    }

    #[test]
    fn test_text() {
        assert_eq!(Doc::text("hello").render(), "hello");
        assert!(!Doc::text("hello").is_empty());

        // Empty string becomes Empty
        assert!(Doc::text("").is_empty());
    }

    #[test]
    fn test_sequence_joins_without_separator() {
        let doc = Doc::sequence([Doc::text("a"), Doc::text("b"), Doc::text("c")]);
        assert_eq!(doc.render(), "abc");
    }

    #[test]
    fn test_sequence_drops_empty_children() {
        let doc = Doc::sequence([Doc::text("a"), Doc::Empty, Doc::text("c")]);
        assert_eq!(doc, Doc::Sequence(vec![Doc::text("a"), Doc::text("c")]));
        assert_eq!(doc.render(), "ac");
    }

    #[test]
    fn test_sequence_simplifies() {
        assert_eq!(Doc::sequence([]), Doc::Empty);
        assert_eq!(Doc::sequence([Doc::Empty, Doc::Empty]), Doc::Empty);
        assert_eq!(Doc::sequence([Doc::text("only")]), Doc::text("only"));
    }

    #[test]
    fn test_then_is_identity_on_empty() {
        assert_eq!(Doc::text("a").then(Doc::Empty), Doc::text("a"));
        assert_eq!(Doc::Empty.then(Doc::text("a")), Doc::text("a"));
    }

    #[test]
    fn test_nested_sequences_flatten_in_output() {
        let inner = Doc::sequence([Doc::text("b"), Doc::text("c")]);
        let doc = Doc::sequence([Doc::text("a"), inner, Doc::text("d")]);
        assert_eq!(doc.render(), "abcd");
    }

    #[test]
    fn test_no_whitespace_injected() {
        // Directive fragments must join byte-exactly.
        let doc = Doc::sequence([
            Doc::text("{{#if x}}"),
            Doc::text("body"),
            Doc::text("{{/if}}"),
        ]);
        assert_eq!(doc.render(), "{{#if x}}body{{/if}}");
    }

    #[test]
    fn test_display_matches_render() {
        let doc = Doc::sequence([Doc::text("a"), Doc::text("b")]);
        assert_eq!(doc.to_string(), doc.render());
    }

    #[test]
    fn test_concat_docs() {
        let docs = vec![Doc::text("a"), Doc::text("b"), Doc::text("c")];
        assert_eq!(concat_docs(docs).render(), "abc");
    }
}
