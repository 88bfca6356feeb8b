//! Type Registry and Generation Order.
//!
//! The registry maps every registered document key to its generated C
//! identifier. It is built once per run and only read afterwards. Insertion
//! order is the Generation Order shared by every emission phase.

use crate::error::SchemaError;
use crate::naming::to_pascal_case;
use crate::primitives::PrimitiveType;
use crate::types::{Category, Document};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Document key.
    pub key: String,
    /// Generated identifier (`WGPUBufferDescriptor`).
    pub name: String,
    /// Node category.
    pub category: Category,
}

/// Document key to generated identifier map, in Generation Order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: IndexMap<String, RegistryEntry>,
}

impl TypeRegistry {
    /// Builds the registry from a parsed document.
    ///
    /// # Arguments
    /// * `document` - Parsed document
    /// * `type_prefix` - Namespace tag prepended to every generated name
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateIdentifier` if two keys convert to the
    /// same generated identifier.
    pub fn build(document: &Document, type_prefix: &str) -> Result<Self, SchemaError> {
        let mut entries = IndexMap::new();
        let mut names: HashMap<String, String> = HashMap::new();

        for (key, node) in document.iter() {
            let category = node.category();
            // Keys shadowed by the primitive table always resolve to the primitive.
            if !category.is_registered() || PrimitiveType::from_idl_name(key).is_some() {
                continue;
            }

            let name = generated_name(type_prefix, key);
            if let Some(first) = names.insert(name.clone(), key.to_string()) {
                return Err(SchemaError::DuplicateIdentifier {
                    name,
                    first,
                    second: key.to_string(),
                });
            }

            entries.insert(
                key.to_string(),
                RegistryEntry {
                    key: key.to_string(),
                    name,
                    category,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Looks up a registered type by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    /// Returns true if `key` is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the category of a registered key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<Category> {
        self.entries.get(key).map(|e| e.category)
    }

    /// Iterates registered keys in Generation Order.
    pub fn order(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates entries in Generation Order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the generated identifier for a document key.
#[must_use]
pub fn generated_name(type_prefix: &str, key: &str) -> String {
    format!("{}{}", type_prefix, to_pascal_case(key))
}
