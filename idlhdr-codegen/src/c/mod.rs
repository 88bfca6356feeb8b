//! C header generation modules.

pub mod aliases;
pub mod decls;
pub mod deps;
pub mod enums;
pub mod functions;
pub mod preamble;
pub mod structs;
pub mod types;

pub use aliases::AliasGenerator;
pub use decls::DeclarationGenerator;
pub use deps::{Dependency, DependencyGraph};
pub use enums::EnumGenerator;
pub use functions::{FunctionGenerator, Prototype};
pub use preamble::PreambleGenerator;
pub use structs::{EmissionState, StructGenerator, VisitState};
pub use types::TypeFormatter;
