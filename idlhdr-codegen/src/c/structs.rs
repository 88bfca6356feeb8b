//! Struct body generation in dependency order.
//!
//! Bodies are emitted depth-first: a struct's by-value dependencies are
//! emitted before the struct itself. Pointer members only need the forward
//! alias from the declarations pass, so they do not constrain ordering.

use crate::c::deps::DependencyGraph;
use crate::c::types::TypeFormatter;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use idlhdr_schema::{ChainDirection, PrimitiveType, SchemaIr, StructDef};
use std::collections::HashMap;

/// Key of the enum naming chained struct types.
const S_TYPE_KEY: &str = "s type";

/// Per-key progress of the struct body pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Not visited yet.
    Pending,
    /// Dependencies are being emitted.
    InProgress,
    /// Visited; body emitted unless excluded.
    Emitted,
}

/// Emission state for every struct-like key.
#[derive(Debug, Clone, Default)]
pub struct EmissionState {
    states: HashMap<String, VisitState>,
}

impl EmissionState {
    /// Creates a state with every graph node pending.
    #[must_use]
    pub fn new(graph: &DependencyGraph) -> Self {
        let states = graph
            .nodes()
            .map(|key| (key.to_string(), VisitState::Pending))
            .collect();
        Self { states }
    }

    /// Returns the state of `key`; unknown keys count as emitted.
    #[must_use]
    pub fn get(&self, key: &str) -> VisitState {
        self.states.get(key).copied().unwrap_or(VisitState::Emitted)
    }

    fn set(&mut self, key: &str, state: VisitState) {
        if let Some(slot) = self.states.get_mut(key) {
            *slot = state;
        }
    }
}

/// Generator for chain-link structs and struct bodies.
pub struct StructGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
    graph: &'a DependencyGraph,
    formatter: TypeFormatter<'a>,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig, graph: &'a DependencyGraph) -> Self {
        Self {
            ir,
            config,
            graph,
            formatter: TypeFormatter::new(ir, &config.type_prefix),
        }
    }

    /// Generates the input and output chain-link structs.
    #[must_use]
    pub fn generate_chain_structs(&self) -> String {
        let s_type = match self.ir.registry.get(S_TYPE_KEY) {
            Some(entry) => entry.name.clone(),
            None => {
                tracing::debug!("no '{}' enum declared, chain links use uint32_t", S_TYPE_KEY);
                "uint32_t".to_string()
            }
        };
        let prefix = &self.config.type_prefix;
        let chained = PrimitiveType::ChainedStruct.c_type(prefix);
        let chained_out = PrimitiveType::ChainedStructOut.c_type(prefix);

        let mut output = String::new();
        output.push_str(&format!("typedef struct {chained} {{\n"));
        output.push_str(&format!("    const struct {chained}* next;\n"));
        output.push_str(&format!("    {s_type} sType;\n"));
        output.push_str(&format!("}} {chained};\n\n"));

        output.push_str(&format!("typedef struct {chained_out} {{\n"));
        output.push_str(&format!("    struct {chained_out}* next;\n"));
        output.push_str(&format!("    {s_type} sType;\n"));
        output.push_str(&format!("}} {chained_out};\n\n"));
        output
    }

    /// Generates every struct body in dependency order.
    ///
    /// # Errors
    /// Returns `CodegenError::CyclicDependency` if structs contain each other
    /// by value, or `CodegenError::UnresolvedType` for an unresolved member.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut state = EmissionState::new(self.graph);
        let mut path = Vec::new();
        let mut output = String::new();

        for key in self.graph.nodes() {
            if state.get(key) == VisitState::Pending {
                self.visit(key, &mut state, &mut path, &mut output)?;
            }
        }

        Ok(output)
    }

    fn visit(
        &self,
        key: &'a str,
        state: &mut EmissionState,
        path: &mut Vec<&'a str>,
        output: &mut String,
    ) -> Result<(), CodegenError> {
        state.set(key, VisitState::InProgress);
        path.push(key);

        for dep in self.graph.dependencies(key).iter().filter(|d| d.by_value) {
            match state.get(&dep.key) {
                VisitState::Pending => self.visit(&dep.key, state, path, output)?,
                VisitState::InProgress => {
                    let start = path.iter().position(|k| *k == dep.key).unwrap_or(0);
                    let mut cycle: Vec<&str> = path[start..].to_vec();
                    cycle.push(&dep.key);
                    return Err(CodegenError::CyclicDependency {
                        path: cycle.join(" -> "),
                    });
                }
                VisitState::Emitted => {}
            }
        }

        path.pop();
        state.set(key, VisitState::Emitted);

        let Some(node) = self.ir.document.get(key) else {
            return Ok(());
        };
        if self.config.exclude.excludes(node) {
            tracing::debug!("struct '{}' excluded by tag", key);
            return Ok(());
        }
        if let (Some(entry), Some(def)) = (self.ir.registry.get(key), node.as_struct()) {
            output.push_str(&self.generate_body(key, &entry.name, def)?);
        }
        Ok(())
    }

    /// Generates one struct body.
    fn generate_body(&self, key: &str, name: &str, def: &StructDef) -> Result<String, CodegenError> {
        let prefix = &self.config.type_prefix;
        let mut output = String::new();

        output.push_str(&format!("struct {} {{\n", name));

        if let Some(direction) = def.extensible {
            let field = match direction {
                ChainDirection::In => {
                    format!("const {}* nextInChain", PrimitiveType::ChainedStruct.c_type(prefix))
                }
                ChainDirection::Out => {
                    format!("{}* nextInChain", PrimitiveType::ChainedStructOut.c_type(prefix))
                }
            };
            output.push_str(&format!("    {};\n", field));
        } else if let Some(direction) = def.chained {
            let link = match direction {
                ChainDirection::In => PrimitiveType::ChainedStruct,
                ChainDirection::Out => PrimitiveType::ChainedStructOut,
            };
            output.push_str(&format!("    {} chain;\n", link.c_type(prefix)));
        }

        for member in &def.members {
            if self.config.exclude.excludes(member) {
                continue;
            }
            output.push_str(&format!("    {};\n", self.formatter.declaration(member, key)?));
        }

        output.push_str("};\n\n");
        Ok(output)
    }
}
