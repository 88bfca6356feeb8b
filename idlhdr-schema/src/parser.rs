//! IDL document loader.
//!
//! The document is a JSON object mapping keys to schema nodes. Keys starting
//! with [`PRIVATE_KEY_PREFIX`] are implementation-private (`_comment`,
//! `_metadata`, ...) and never reach the typed tree.

use crate::error::ParseError;
use crate::types::{Document, SchemaNode};
use indexmap::IndexMap;
use std::path::Path;

/// Prefix marking implementation-private top-level keys.
pub const PRIVATE_KEY_PREFIX: char = '_';

/// Parses an IDL document from a string.
///
/// # Arguments
/// * `json` - Document content
///
/// # Returns
/// Typed document with nodes in document order.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, the top level is not an
/// object, or a node does not match its category.
pub fn parse_document(json: &str) -> Result<Document, ParseError> {
    let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut document = Document::new();
    for (key, value) in raw {
        if is_private_key(&key) {
            continue;
        }
        if !value.is_object() {
            return Err(ParseError::invalid_structure(format!(
                "node '{key}' is not an object"
            )));
        }
        let node: SchemaNode =
            serde_json::from_value(value).map_err(|e| ParseError::invalid_node(&key, e))?;
        document.insert(key, node);
    }

    Ok(document)
}

/// Reads and parses an IDL document from a file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, or any error of
/// [`parse_document`].
pub fn load_document(path: &Path) -> Result<Document, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_document(&json)
}

/// Returns true if the key is implementation-private.
#[must_use]
pub fn is_private_key(key: &str) -> bool {
    key.starts_with(PRIVATE_KEY_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::io::Write;

    #[test]
    fn test_parse_document_order() {
        let json = r#"{
            "_comment": ["private", "notes"],
            "zeta": {"category": "object"},
            "alpha": {"category": "enum", "values": []},
            "mid": {"category": "structure", "members": []}
        }"#;

        let doc = parse_document(json).expect("Failed to parse");
        let keys: Vec<_> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert!(!doc.contains_key("_comment"));
        assert_eq!(
            doc.get("alpha").map(SchemaNode::category),
            Some(Category::Enum)
        );
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_document(r#"{"a": {"category": "object""#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_top_level_not_object() {
        assert!(matches!(parse_document("[1, 2]"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_invalid_node() {
        let json = r#"{"s": {"category": "structure", "members": [{"name": "x"}]}}"#;
        match parse_document(json) {
            Err(ParseError::InvalidNode { key, .. }) => assert_eq!(key, "s"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_parse_node_not_object() {
        let result = parse_document(r#"{"s": 5}"#);
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(br#"{"adapter": {"category": "object"}}"#)
            .expect("write");

        let doc = load_document(file.path()).expect("Failed to load");
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_load_document_missing_file() {
        let result = load_document(Path::new("/nonexistent/idlhdr/dawn.json"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
