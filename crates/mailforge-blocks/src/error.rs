/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for block rendering.
//!
//! There are exactly two failure kinds, both local precondition violations.
//! Either one aborts the whole render pass; nothing is downgraded to a
//! default value.

use thiserror::Error;

/// Errors that can occur while rendering a composition tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A block read the ambient runtime mode outside any providing scope.
    #[error("{consumer} was rendered outside of a runtime mode scope")]
    MissingProvider { consumer: String },

    /// A build-mode each block was given an item shape whose root is not
    /// an object.
    #[error("each block '{var}' requires an object item shape")]
    SchemaShape { var: String },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
