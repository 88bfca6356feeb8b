//! Error types for document loading and validation.

use thiserror::Error;

/// Error type for document loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error while reading the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A top-level node does not match the shape of its category.
    #[error("invalid node '{key}': {source}")]
    InvalidNode {
        /// Document key of the node.
        key: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// Unrecognized pointer/const annotation.
    #[error("invalid annotation '{value}'")]
    InvalidAnnotation {
        /// Annotation text.
        value: String,
    },

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

/// Error type for document validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two keys convert to the same generated identifier.
    #[error("keys '{first}' and '{second}' both generate identifier '{name}'")]
    DuplicateIdentifier {
        /// Generated identifier.
        name: String,
        /// Key registered first.
        first: String,
        /// Key registered second.
        second: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an invalid node error.
    pub fn invalid_node(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidNode {
            key: key.into(),
            source,
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
