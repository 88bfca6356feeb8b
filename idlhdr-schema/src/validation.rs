//! Structural document validation.
//!
//! Only checks what is needed to emit valid declarations: names that would
//! collide after case conversion inside one declaration.

use crate::error::SchemaError;
use crate::naming::{to_camel_case, to_enum_value_case};
use crate::types::{Document, EnumDef, RecordMember, SchemaNode};
use std::collections::HashSet;

/// Validates a parsed document.
///
/// # Arguments
/// * `document` - The document to validate
///
/// # Errors
/// Returns `SchemaError::Validation` describing the first collision found.
pub fn validate_document(document: &Document) -> Result<(), SchemaError> {
    for (key, node) in document.iter() {
        match node {
            SchemaNode::Structure(s) | SchemaNode::CallbackInfo(s) => {
                validate_records(key, "member", &s.members)?;
            }
            SchemaNode::Enum(e) | SchemaNode::Bitmask(e) => {
                validate_enum(key, e)?;
            }
            SchemaNode::FunctionPointer(f)
            | SchemaNode::CallbackFunction(f)
            | SchemaNode::Function(f) => {
                validate_records(key, "argument", &f.args)?;
            }
            SchemaNode::Object(o) => {
                let mut seen = HashSet::new();
                for method in &o.methods {
                    if !seen.insert(to_camel_case(&method.name)) {
                        return Err(SchemaError::validation(format!(
                            "duplicate method '{}' in object '{}'",
                            method.name, key
                        )));
                    }
                    let context = format!("{}.{}", key, method.name);
                    validate_records(&context, "argument", &method.args)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Rejects members or arguments whose converted names collide.
fn validate_records(
    owner: &str,
    kind: &str,
    records: &[RecordMember],
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(to_camel_case(&record.name)) {
            return Err(SchemaError::validation(format!(
                "duplicate {} '{}' in '{}'",
                kind, record.name, owner
            )));
        }
    }
    Ok(())
}

/// Rejects enum values whose converted names collide.
fn validate_enum(key: &str, enum_def: &EnumDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for value in &enum_def.values {
        if !seen.insert(to_enum_value_case(&value.name)) {
            return Err(SchemaError::validation(format!(
                "duplicate enum value name '{}' in '{}'",
                value.name, key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_validate_valid_document() {
        let json = r#"{
            "a": {"category": "structure", "members": [
                {"name": "x", "type": "uint32_t"},
                {"name": "y", "type": "uint32_t"}
            ]},
            "mode": {"category": "enum", "values": [
                {"name": "always-hit", "value": 0},
                {"name": "never", "value": 1}
            ]}
        }"#;

        let doc = parse_document(json).expect("Failed to parse");
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_validate_duplicate_enum_value() {
        let json = r#"{
            "mode": {"category": "enum", "values": [
                {"name": "always-hit", "value": 0},
                {"name": "always hit", "value": 1}
            ]}
        }"#;

        let doc = parse_document(json).expect("Failed to parse");
        assert!(validate_document(&doc).is_err());
    }

    #[test]
    fn test_validate_duplicate_member() {
        let json = r#"{
            "a": {"category": "structure", "members": [
                {"name": "x", "type": "uint32_t"},
                {"name": "x", "type": "float"}
            ]}
        }"#;

        let doc = parse_document(json).expect("Failed to parse");
        let err = validate_document(&doc).expect_err("duplicate member");
        assert!(err.to_string().contains("duplicate member 'x'"));
    }

    #[test]
    fn test_validate_duplicate_method_argument() {
        let json = r#"{
            "buffer": {"category": "object", "methods": [
                {"name": "map async", "args": [
                    {"name": "offset", "type": "size_t"},
                    {"name": "offset", "type": "size_t"}
                ]}
            ]}
        }"#;

        let doc = parse_document(json).expect("Failed to parse");
        let err = validate_document(&doc).expect_err("duplicate argument");
        assert!(err.to_string().contains("buffer.map async"));
    }
}
