//! Prelude module for convenient imports.
//!
//! ```ignore
//! use idlhdr::prelude::*;
//! ```

// Schema types
pub use idlhdr_schema::{
    Category, Document, ExclusionSet, ParseError, SchemaError, SchemaIr, SchemaNode, TypeRegistry,
};

// Generation
pub use idlhdr_codegen::{
    CodegenError, Generator, GeneratorConfig, generate_from_file, generate_from_json, write_header,
};
