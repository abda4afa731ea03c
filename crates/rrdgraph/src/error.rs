//! Error types for rrdgraph operations.
//!
//! This module provides the main error type [`RrdGraphError`] which wraps
//! the error conditions that can occur while loading, building and
//! generating a graph.

use std::{io, ops::Range};

use thiserror::Error;

use rrdgraph_core::error::{AttributeError, ElementError};

use crate::runner::RunnerError;

/// The main error type for rrdgraph operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the document source and the byte span of the
/// syntax error, which the CLI uses for rich error reporting.
#[derive(Debug, Error)]
pub enum RrdGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Parse {
        message: String,
        src: String,
        span: Option<Range<usize>>,
    },

    #[error("Document error: {0}")]
    Document(String),

    #[error("Invalid attribute: {0}")]
    Attribute(#[from] AttributeError),

    #[error("Invalid element: {0}")]
    Element(#[from] ElementError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("rrdtool error: {0}")]
    Runner(#[from] RunnerError),
}

impl RrdGraphError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(
        message: impl Into<String>,
        src: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            src: src.into(),
            span,
        }
    }
}
