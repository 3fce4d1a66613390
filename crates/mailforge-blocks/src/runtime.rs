/*
 * runtime.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ambient runtime mode.
//!
//! A render pass runs in exactly one [`RenderMode`], supplied by the caller at
//! the root and immutable for the duration of the pass. Blocks never receive
//! the mode as a parameter; they read it from the [`RenderEnv`] threaded
//! through the tree walk. The environment is an immutable value, so providing
//! a mode for a subtree is strictly lexical: it applies to that subtree and
//! everything nested inside it, never to siblings or ancestors.
//!
//! The mode can come from more than one host facility (the renderer's own
//! scoping, or a surrounding build toolchain). [`ModeSource`] is the minimal
//! provide/consume interface both are adapted to; which implementation backs a
//! given environment is invisible to callers of [`RenderEnv::current_mode`].

use std::fmt;
use std::rc::Rc;

use crate::error::{RenderError, RenderResult};

/// The mode a render pass runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Evaluate blocks against concrete preview values and produce final
    /// content.
    Preview,

    /// Evaluate blocks into literal Handlebars directive text, ignoring
    /// preview values.
    Build,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Preview => f.write_str("preview"),
            RenderMode::Build => f.write_str("build"),
        }
    }
}

/// A source of the ambient mode.
///
/// Implementations answer one question: what mode, if any, does the nearest
/// enclosing scope provide?
pub trait ModeSource {
    /// The nearest provided mode, or `None` when nothing provided one.
    fn current(&self) -> Option<RenderMode>;
}

/// Renderer-native source: a lexical scope pinning a single mode.
#[derive(Debug, Clone, Copy)]
pub struct ScopedMode(pub RenderMode);

impl ModeSource for ScopedMode {
    fn current(&self) -> Option<RenderMode> {
        Some(self.0)
    }
}

/// Host-toolchain source: defers to a callback owned by the surrounding
/// build tool.
pub struct HostMode<F>(pub F);

impl<F> ModeSource for HostMode<F>
where
    F: Fn() -> Option<RenderMode>,
{
    fn current(&self) -> Option<RenderMode> {
        (self.0)()
    }
}

/// The immutable render environment passed to every node visit.
///
/// This is the single source of truth for preview/build branching: no block
/// may read or infer the mode any other way.
#[derive(Clone, Default)]
pub struct RenderEnv {
    source: Option<Rc<dyn ModeSource>>,
}

impl RenderEnv {
    /// An environment with no provided mode. Reading the mode from it fails
    /// with [`RenderError::MissingProvider`].
    pub fn detached() -> Self {
        Self::default()
    }

    /// An environment backed by an injected mode source.
    pub fn with_source(source: impl ModeSource + 'static) -> Self {
        RenderEnv {
            source: Some(Rc::new(source)),
        }
    }

    /// A child environment scoping `mode` to the subtree it is passed to.
    pub fn provide(&self, mode: RenderMode) -> RenderEnv {
        RenderEnv::with_source(ScopedMode(mode))
    }

    /// The nearest provided mode.
    ///
    /// `consumer` names the block doing the read; it appears in the error
    /// when no scope provided a mode.
    pub fn current_mode(&self, consumer: &str) -> RenderResult<RenderMode> {
        self.source
            .as_ref()
            .and_then(|s| s.current())
            .ok_or_else(|| RenderError::MissingProvider {
                consumer: consumer.to_string(),
            })
    }
}

impl fmt::Debug for RenderEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEnv")
            .field("mode", &self.source.as_ref().and_then(|s| s.current()))
            .finish()
    }
}
