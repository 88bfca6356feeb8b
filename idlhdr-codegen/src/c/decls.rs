//! Handle and forward struct declarations.
//!
//! These make every registered name usable before any definition appears.

use crate::config::GeneratorConfig;
use idlhdr_schema::{Category, SchemaIr, SchemaNode};

/// Generator for the leading alias declarations.
pub struct DeclarationGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> DeclarationGenerator<'a> {
    /// Creates a new declaration generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates opaque handle aliases for every `object`.
    #[must_use]
    pub fn generate_handles(&self) -> String {
        let mut output = String::new();
        for (name, _) in self.included(|c| c == Category::Object) {
            output.push_str(&format!("typedef struct {name}Impl* {name};\n"));
        }
        output
    }

    /// Generates forward struct aliases for every `structure`/`callback info`.
    #[must_use]
    pub fn generate_forward_structs(&self) -> String {
        let mut output = String::new();
        for (name, _) in self.included(|c| c.is_struct_like()) {
            output.push_str(&format!("typedef struct {name} {name};\n"));
        }
        output
    }

    /// Registered, non-excluded nodes of the matching categories.
    fn included(
        &self,
        filter: impl Fn(Category) -> bool,
    ) -> impl Iterator<Item = (&'a str, &'a SchemaNode)> {
        let ir = self.ir;
        let config = self.config;
        ir.registry
            .entries()
            .filter(move |entry| filter(entry.category))
            .filter_map(move |entry| {
                let node = ir.document.get(&entry.key)?;
                (!config.exclude.excludes(node)).then_some((entry.name.as_str(), node))
            })
    }
}
