/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The dual-mode tree walk.
//!
//! Rendering is one synchronous depth-first walk of the composition tree.
//! Every control-flow block reads the ambient mode from the [`RenderEnv`] at
//! the point it is visited and decides which of its sub-results to produce
//! and how to wrap them. The walk either completes with a [`Doc`] or fails
//! fast with a [`crate::RenderError`]; there is no partial output.
//!
//! Directive text is emitted as separate `Doc` fragments with no whitespace
//! injected beyond what branch content itself contains.

use mailforge_doc::{Doc, concat_docs};

use crate::error::{RenderError, RenderResult};
use crate::node::{EachBlock, IfBlock, Node, UnlessBlock};
use crate::placeholder::placeholder_proxy;
use crate::runtime::{RenderEnv, RenderMode};

/// Render a composition tree in preview mode and serialize the result.
pub fn render_preview(tree: &Node) -> RenderResult<String> {
    render_with_mode(tree, RenderMode::Preview)
}

/// Render a composition tree in build mode and serialize the resulting
/// Handlebars template text.
pub fn render_template(tree: &Node) -> RenderResult<String> {
    render_with_mode(tree, RenderMode::Build)
}

fn render_with_mode(tree: &Node, mode: RenderMode) -> RenderResult<String> {
    tracing::debug!(mode = %mode, "rendering composition tree");
    let env = RenderEnv::detached().provide(mode);
    Ok(render(tree, &env)?.render())
}

/// Render a single node against an environment.
///
/// This is the generic entry point for callers that manage their own
/// [`RenderEnv`] (e.g. with an injected host mode source) or that want the
/// structured [`Doc`] instead of a string.
pub fn render(node: &Node, env: &RenderEnv) -> RenderResult<Doc> {
    match node {
        Node::Empty => Ok(Doc::Empty),

        Node::Text(text) => Ok(Doc::text(text)),

        Node::Sequence(children) => {
            let docs: Result<Vec<Doc>, _> = children.iter().map(|c| render(c, env)).collect();
            Ok(concat_docs(docs?))
        }

        Node::Scope(mode, subtree) => render(subtree, &env.provide(*mode)),

        Node::If(block) => render_if(block, env),

        Node::Unless(block) => render_unless(block, env),

        Node::Each(block) => render_each(block, env),
    }
}

fn render_if(block: &IfBlock, env: &RenderEnv) -> RenderResult<Doc> {
    match env.current_mode("If")? {
        RenderMode::Preview => render_branch(block.preview, block, env),
        RenderMode::Build => directive_block(
            "if",
            &block.condition_path,
            &block.then_branch,
            block.else_branch.as_deref(),
            env,
        ),
    }
}

fn render_unless(block: &UnlessBlock, env: &RenderEnv) -> RenderResult<Doc> {
    match env.current_mode("Unless")? {
        // The unless body renders when the simulated condition is false.
        RenderMode::Preview => {
            if block.preview {
                match &block.else_branch {
                    Some(else_branch) => render(else_branch, env),
                    None => Ok(Doc::Empty),
                }
            } else {
                render(&block.then_branch, env)
            }
        }
        RenderMode::Build => directive_block(
            "unless",
            &block.condition_path,
            &block.then_branch,
            block.else_branch.as_deref(),
            env,
        ),
    }
}

fn render_branch(take_then: bool, block: &IfBlock, env: &RenderEnv) -> RenderResult<Doc> {
    if take_then {
        render(&block.then_branch, env)
    } else {
        match &block.else_branch {
            Some(else_branch) => render(else_branch, env),
            None => Ok(Doc::Empty),
        }
    }
}

/// Emit `{{#NAME PATH}}THEN[{{else}}ELSE]{{/NAME}}`.
///
/// The `{{else}}` marker appears only when an else branch exists.
fn directive_block(
    name: &str,
    path: &str,
    then_branch: &Node,
    else_branch: Option<&Node>,
    env: &RenderEnv,
) -> RenderResult<Doc> {
    let mut parts = vec![Doc::text(format!("{{{{#{name} {path}}}}}"))];
    parts.push(render(then_branch, env)?);
    if let Some(else_branch) = else_branch {
        parts.push(Doc::text("{{else}}"));
        parts.push(render(else_branch, env)?);
    }
    parts.push(Doc::text(format!("{{{{/{name}}}}}")));
    Ok(concat_docs(parts))
}

fn render_each(block: &EachBlock, env: &RenderEnv) -> RenderResult<Doc> {
    match env.current_mode("Each")? {
        // Preview never inspects the item shape.
        RenderMode::Preview => {
            let docs: Result<Vec<Doc>, _> = block
                .preview_items
                .iter()
                .map(|item| render(&(block.render_item)(item), env))
                .collect();
            Ok(concat_docs(docs?))
        }
        RenderMode::Build => {
            // The shape check must precede any user renderer logic.
            if !block.item_shape.is_object() {
                return Err(RenderError::SchemaShape {
                    var: block.var.clone(),
                });
            }
            tracing::debug!(var = %block.var, "emitting each directive from item shape");
            let proxy = placeholder_proxy(&block.item_shape);
            let body = (block.render_item)(&proxy);
            Ok(concat_docs([
                Doc::text(format!("{{{{#each {}}}}}", block.var)),
                render(&body, env)?,
                Doc::text("{{/each}}"),
            ]))
        }
    }
}
