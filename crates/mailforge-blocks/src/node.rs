/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The composition tree.
//!
//! Authors describe an email once as a [`Node`] tree mixing ordinary text
//! content with the three control-flow blocks ([`IfBlock`], [`UnlessBlock`],
//! [`EachBlock`]) and mode scopes. The same tree renders either as a live
//! preview or as a Handlebars template, depending on the mode the enclosing
//! scope provides; see [`crate::render`].

use std::fmt;
use std::rc::Rc;

use crate::runtime::RenderMode;
use crate::shape::Shape;
use crate::value::Value;

/// A node in the composition tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// Empty content.
    Empty,

    /// Literal text, emitted as-is in both modes.
    Text(String),

    /// Ordered children, emitted back-to-back.
    Sequence(Vec<Node>),

    /// Provides a runtime mode for the nested subtree (and nothing else).
    Scope(RenderMode, Box<Node>),

    /// Conditional block: `{{#if ...}}` semantics.
    If(IfBlock),

    /// Inverted conditional block: `{{#unless ...}}` semantics.
    Unless(UnlessBlock),

    /// Iteration block: `{{#each ...}}` semantics.
    Each(EachBlock),
}

impl Node {
    /// Literal text content.
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// A leaf placeholder: the literal text `{{path}}`.
    ///
    /// Useful for interpolating a Handlebars variable outside any each block
    /// (inside one, placeholders come from the item proxy instead).
    pub fn placeholder(path: impl AsRef<str>) -> Self {
        Node::Text(format!("{{{{{}}}}}", path.as_ref()))
    }

    /// An ordered sequence of children.
    pub fn sequence(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(children.into_iter().collect())
    }

    /// Scope a runtime mode to `subtree`.
    pub fn scoped(mode: RenderMode, subtree: Node) -> Self {
        Node::Scope(mode, Box::new(subtree))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::text(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

/// Conditional block descriptor.
///
/// Preview mode selects between the branches using [`preview`](Self::preview);
/// build mode ignores it and wraps both branches in `{{#if}}` directive text
/// keyed on [`condition_path`](Self::condition_path).
#[derive(Debug, Clone)]
pub struct IfBlock {
    /// Dotted lookup path in the eventual template data context
    /// (e.g. `"user.isSubscribed"`).
    pub condition_path: String,

    /// The boolean simulating the condition in preview mode.
    pub preview: bool,

    /// Content when the condition holds.
    pub then_branch: Box<Node>,

    /// Content for the `{{else}}` branch, if any.
    pub else_branch: Option<Box<Node>>,
}

impl IfBlock {
    /// A conditional with no else branch.
    pub fn new(condition_path: impl Into<String>, preview: bool, then_branch: Node) -> Self {
        IfBlock {
            condition_path: condition_path.into(),
            preview,
            then_branch: Box::new(then_branch),
            else_branch: None,
        }
    }

    /// Attach an else branch.
    pub fn with_else(mut self, else_branch: Node) -> Self {
        self.else_branch = Some(Box::new(else_branch));
        self
    }
}

impl From<IfBlock> for Node {
    fn from(block: IfBlock) -> Self {
        Node::If(block)
    }
}

/// Inverted conditional block descriptor.
///
/// Same fields as [`IfBlock`]; the primary body is the named
/// [`then_branch`](Self::then_branch) field. Preview selection is inverted:
/// the body renders when [`preview`](Self::preview) is false.
#[derive(Debug, Clone)]
pub struct UnlessBlock {
    /// Dotted lookup path in the eventual template data context.
    pub condition_path: String,

    /// The boolean simulating the condition in preview mode.
    pub preview: bool,

    /// Content when the condition does not hold (the `#unless` body).
    pub then_branch: Box<Node>,

    /// Content for the `{{else}}` branch, if any.
    pub else_branch: Option<Box<Node>>,
}

impl UnlessBlock {
    /// An inverted conditional with no else branch.
    pub fn new(condition_path: impl Into<String>, preview: bool, then_branch: Node) -> Self {
        UnlessBlock {
            condition_path: condition_path.into(),
            preview,
            then_branch: Box::new(then_branch),
            else_branch: None,
        }
    }

    /// Attach an else branch.
    pub fn with_else(mut self, else_branch: Node) -> Self {
        self.else_branch = Some(Box::new(else_branch));
        self
    }
}

impl From<UnlessBlock> for Node {
    fn from(block: UnlessBlock) -> Self {
        Node::Unless(block)
    }
}

/// The item renderer of an each block: one item-shaped value in, content out.
pub type ItemRenderer = Rc<dyn Fn(&Value) -> Node>;

/// Iteration block descriptor.
///
/// Preview mode maps [`render_item`](Self::render_item) over
/// [`preview_items`](Self::preview_items) in order. Build mode ignores the
/// preview items entirely: it synthesizes one placeholder proxy from
/// [`item_shape`](Self::item_shape), renders the body once against it, and
/// wraps the result in `{{#each}}` directive text keyed on
/// [`var`](Self::var).
#[derive(Clone)]
pub struct EachBlock {
    /// Name of the variable the template iterates over (e.g. `"users"`).
    pub var: String,

    /// Structural shape of one item. Must be object-rooted in build mode.
    pub item_shape: Shape,

    /// Concrete items rendered in preview mode, in order.
    pub preview_items: Vec<Value>,

    /// Renders one item (or the placeholder proxy) to content.
    pub render_item: ItemRenderer,
}

impl EachBlock {
    pub fn new(
        var: impl Into<String>,
        item_shape: Shape,
        preview_items: Vec<Value>,
        render_item: impl Fn(&Value) -> Node + 'static,
    ) -> Self {
        EachBlock {
            var: var.into(),
            item_shape,
            preview_items,
            render_item: Rc::new(render_item),
        }
    }
}

impl fmt::Debug for EachBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EachBlock")
            .field("var", &self.var)
            .field("item_shape", &self.item_shape)
            .field("preview_items", &self.preview_items)
            .field("render_item", &"<fn>")
            .finish()
    }
}

impl From<EachBlock> for Node {
    fn from(block: EachBlock) -> Self {
        Node::Each(block)
    }
}
