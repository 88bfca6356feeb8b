//! # idlhdr Codegen
//!
//! C header generation from IDL documents.
//!
//! This crate provides:
//! - Type reference formatting against the primitive table and registry
//! - The struct dependency graph
//! - Declaration, enum, callback, struct and prototype emission
//! - Build-then-flush entry points for build pipelines

pub mod c;
pub mod config;
pub mod error;
pub mod generator;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;

use idlhdr_schema::SchemaIr;
use std::io::Write;
use std::path::Path;

/// Generates a header from an IDL document string.
///
/// # Arguments
/// * `json` - IDL document content
/// * `config` - Generator options
///
/// # Returns
/// Generated header text.
///
/// # Errors
/// Returns `CodegenError` if loading, validation or generation fails.
pub fn generate_from_json(json: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let ir = SchemaIr::from_json(json, &config.type_prefix)?;
    Generator::new(&ir, config).generate()
}

/// Generates a header from an IDL document file.
///
/// # Errors
/// Returns `CodegenError` if reading, loading or generation fails.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let document = idlhdr_schema::load_document(path)?;
    let ir = SchemaIr::from_document(document, &config.type_prefix)?;
    Generator::new(&ir, config).generate()
}

/// Writes a generated header so readers never observe a partial file.
///
/// The content goes to a temporary file in the target directory, which is
/// then renamed over `path`.
///
/// # Errors
/// Returns `CodegenError::Io` if the file cannot be written or renamed.
pub fn write_header(path: &Path, header: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(header.as_bytes())?;
    file.persist(path).map_err(|e| CodegenError::Io(e.error))?;
    tracing::info!("wrote {} bytes to {}", header.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "a": {"category": "structure", "members": [{"name": "x", "type": "uint32_t"}]}
    }"#;

    #[test]
    fn test_generate_from_json() {
        let header = generate_from_json(DOCUMENT, &GeneratorConfig::default()).expect("header");
        assert!(header.contains("struct WGPUA {"));
    }

    #[test]
    fn test_generate_from_json_parse_error() {
        let result = generate_from_json("{", &GeneratorConfig::default());
        assert!(matches!(result, Err(CodegenError::Schema(_))));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dawn.json");
        std::fs::write(&path, DOCUMENT).expect("write");

        let header = generate_from_file(&path, &GeneratorConfig::default()).expect("header");
        assert!(header.contains("typedef struct WGPUA WGPUA;"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(
            Path::new("/nonexistent/idlhdr/dawn.json"),
            &GeneratorConfig::default(),
        );
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }

    #[test]
    fn test_write_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("webgpu.h");
        std::fs::write(&path, "old").expect("write");

        write_header(&path, "#ifndef WEBGPU_H_\n").expect("write header");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "#ifndef WEBGPU_H_\n"
        );
    }
}
