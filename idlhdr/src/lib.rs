//! # idlhdr
//!
//! IDL-to-C-header compiler.
//!
//! Reads a declarative description of a C API surface (structs, enums,
//! bitmasks, function pointers, free functions and object methods) and emits
//! one dependency-ordered header with no forward value references.
//!
//! ## Quick Start
//!
//! ```ignore
//! use idlhdr::prelude::*;
//!
//! let config = GeneratorConfig::default()
//!     .with_exclusions(ExclusionSet::from_lists(["dawn,native"]));
//! let header = generate_from_file(Path::new("dawn.json"), &config)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Document loading, naming, registry and validation
//! - [`codegen`] - Type formatting, dependency ordering and emission
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod prelude;

/// Document loading, type registry and validation.
pub mod schema {
    pub use idlhdr_schema::*;
}

/// Header generation.
pub mod codegen {
    pub use idlhdr_codegen::*;
}
