//! # idlhdr Schema
//!
//! IDL document loader and type definitions.
//!
//! This crate provides:
//! - JSON document parsing into a typed node tree
//! - Identifier case conversion
//! - The fixed primitive type table
//! - The Type Registry and Generation Order
//! - Structural validation
//! - Tag-based exclusion

pub mod error;
pub mod ir;
pub mod naming;
pub mod parser;
pub mod primitives;
pub mod registry;
pub mod tags;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::SchemaIr;
pub use parser::{load_document, parse_document};
pub use primitives::PrimitiveType;
pub use registry::{RegistryEntry, TypeRegistry};
pub use tags::ExclusionSet;
pub use types::{
    Annotation, Category, ChainDirection, ConstantDef, ConstantValue, Document, EnumDef,
    EnumValue, FunctionDef, MethodDef, ObjectDef, RecordMember, SchemaNode, StructDef, Tagged,
    TypedefDef,
};
