//! Loaded schema ready for code generation.
//!
//! Bundles the typed document with its Type Registry. Both are immutable once
//! built and are passed explicitly into every generation phase.

use crate::error::SchemaError;
use crate::parser::parse_document;
use crate::registry::TypeRegistry;
use crate::types::Document;
use crate::validation::validate_document;

/// Parsed, validated document plus its Type Registry.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Typed document in document order.
    pub document: Document,
    /// Registered types in Generation Order.
    pub registry: TypeRegistry,
}

impl SchemaIr {
    /// Validates a document and builds its registry.
    ///
    /// # Errors
    /// Returns `SchemaError` if validation or registration fails.
    pub fn from_document(document: Document, type_prefix: &str) -> Result<Self, SchemaError> {
        validate_document(&document)?;
        let registry = TypeRegistry::build(&document, type_prefix)?;
        Ok(Self { document, registry })
    }

    /// Parses, validates and registers a document from JSON text.
    ///
    /// # Errors
    /// Returns `SchemaError` if any loading phase fails.
    pub fn from_json(json: &str, type_prefix: &str) -> Result<Self, SchemaError> {
        let document = parse_document(json)?;
        Self::from_document(document, type_prefix)
    }
}
