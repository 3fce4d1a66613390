/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Dual-mode email building blocks.
//!
//! One declarative composition tree describes both a live rendered preview of
//! an email and a static Handlebars template for a downstream engine. The
//! tree mixes ordinary text content with three control-flow blocks, each of
//! which branches on the ambient [`RenderMode`]:
//!
//! - [`IfBlock`]: preview renders the branch selected by a simulated boolean;
//!   build emits `{{#if path}}...{{else}}...{{/if}}`
//! - [`UnlessBlock`]: the inverse selection; build emits `{{#unless ...}}`
//! - [`EachBlock`]: preview maps the item renderer over concrete items; build
//!   renders the body once against a placeholder proxy synthesized from the
//!   item's [`Shape`] and wraps it in `{{#each name}}...{{/each}}`
//!
//! The same body code serves both modes, so preview and emitted template
//! cannot drift apart.
//!
//! # Example
//!
//! ```ignore
//! use mailforge_blocks::{EachBlock, Node, Shape, Value, render_preview, render_template};
//!
//! let tree: Node = EachBlock::new(
//!     "users",
//!     Shape::object([("name", Shape::Leaf)]),
//!     vec![Value::object([("name", Value::from("Alice"))])],
//!     |user| Node::text(format!("Hi {}!", user.get("name").unwrap())),
//! )
//! .into();
//!
//! assert_eq!(render_preview(&tree)?, "Hi Alice!");
//! assert_eq!(render_template(&tree)?, "{{#each users}}Hi {{name}}!{{/each}}");
//! ```

pub mod error;
pub mod node;
pub mod placeholder;
pub mod render;
pub mod runtime;
pub mod shape;
pub mod value;

// Re-export main types at crate root
pub use error::{RenderError, RenderResult};
pub use mailforge_doc::Doc;
pub use node::{EachBlock, IfBlock, ItemRenderer, Node, UnlessBlock};
pub use placeholder::placeholder_proxy;
pub use render::{render, render_preview, render_template};
pub use runtime::{HostMode, ModeSource, RenderEnv, RenderMode, ScopedMode};
pub use shape::Shape;
pub use value::Value;
