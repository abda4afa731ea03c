//! Error types for attribute values and graph elements.
//!
//! Two families of errors live here:
//!
//! - [`AttributeError`] is raised when a graph attribute is assigned a value
//!   of the wrong shape ([`AttributeError::Type`]) or a value outside of its
//!   allowed set ([`AttributeError::Validation`]).
//! - [`ElementError`] is raised when a graph element cannot be constructed,
//!   for example because a variable name is malformed.

use std::convert::Infallible;

use thiserror::Error;

/// Error raised when a value cannot be assigned to a graph attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The value does not have the shape the attribute requires.
    #[error("expected {expected}, got `{value}`")]
    Type {
        /// Human readable description of the accepted shape.
        expected: &'static str,
        /// The rejected input, as text.
        value: String,
    },

    /// The value has the right shape but is not one of the allowed values.
    #[error("`{value}` is not an allowed {kind}, valid values: {allowed}")]
    Validation {
        /// The kind of value being validated (e.g. "image format").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma separated list of allowed values.
        allowed: String,
    },
}

impl AttributeError {
    /// Creates an [`AttributeError::Type`] for the given input.
    pub fn type_error(expected: &'static str, value: impl ToString) -> Self {
        Self::Type {
            expected,
            value: value.to_string(),
        }
    }

    /// Returns `true` for [`AttributeError::Type`].
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    /// Returns `true` for [`AttributeError::Validation`].
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// Infallible conversions (e.g. `DateTime<Utc>` into `Timestamp`) go through
// the same fallible setter signatures as text input.
impl From<Infallible> for AttributeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Error raised when a graph element cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    #[error("invalid variable name `{0}`: expected 1 to 255 characters of [A-Za-z0-9_-]")]
    InvalidVName(String),

    #[error("`{definition}` does not define a variable and cannot be used as a data source")]
    NotAValue { definition: String },

    #[error("{0}")]
    InvalidColor(String),

    #[error("invalid consolidation function `{0}`, valid values: AVERAGE, MIN, MAX, LAST")]
    InvalidConsolidation(String),

    #[error("invalid line width `{0}`: expected a positive finite number")]
    InvalidWidth(String),
}
