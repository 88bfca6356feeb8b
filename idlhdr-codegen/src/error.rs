//! Error types for header generation.

use thiserror::Error;

/// Error type for header generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Document parsing error.
    #[error("document parse error: {0}")]
    Parse(#[from] idlhdr_schema::ParseError),

    /// Document validation error.
    #[error("schema error: {0}")]
    Schema(#[from] idlhdr_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A type reference matches neither a primitive nor a declared key.
    #[error("unresolved type '{type_name}' referenced by '{context}'")]
    UnresolvedType {
        /// Referenced type key.
        type_name: String,
        /// Declaration holding the reference.
        context: String,
    },

    /// Structs that contain each other by value.
    #[error("cyclic by-value dependency: {path}")]
    CyclicDependency {
        /// Keys along the cycle, joined with `->`.
        path: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unresolved type error.
    pub fn unresolved(type_name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnresolvedType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }
}
