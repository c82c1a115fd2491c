//! Error types for the colorgear core.

use std::fmt::Display;
use thiserror::Error;

/// Errors produced by color conversion and validation.
///
/// Conversion failures are out-of-contract values. Name lookups for formats
/// and harmony schemes fail separately so callers can tell a bad value from a
/// bad choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A color component, hex string or textual input was outside its domain.
    #[error("invalid {field} value: {value} (expected {expected})")]
    InvalidColorValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A format or scheme name matched none of the known names.
    #[error("unknown {kind}: {name} (expected {expected})")]
    UnknownName {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },
}

impl ColorError {
    /// Builds an [`ColorError::InvalidColorValue`] from any displayable value.
    pub fn invalid(field: &'static str, value: impl Display, expected: &'static str) -> Self {
        ColorError::InvalidColorValue {
            field,
            value: value.to_string(),
            expected,
        }
    }

    /// Builds an [`ColorError::UnknownName`] for a failed name lookup.
    pub fn unknown(kind: &'static str, name: &str, expected: &'static str) -> Self {
        ColorError::UnknownName {
            kind,
            name: name.to_string(),
            expected,
        }
    }

    /// Name of the field or lookup that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ColorError::InvalidColorValue { field, .. } => field,
            ColorError::UnknownName { kind, .. } => kind,
        }
    }
}
