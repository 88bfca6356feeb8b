//! `typedef`, function pointer and callback typedef generation.
//!
//! These aliases may name each other, so they share one section emitted
//! depth-first: an alias is written after every alias it references.

use crate::c::structs::VisitState;
use crate::c::types::TypeFormatter;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use idlhdr_schema::{Category, FunctionDef, SchemaIr, SchemaNode, TypedefDef};
use std::collections::HashMap;

/// Generator for `typedef`, `function pointer` and `callback function` nodes.
pub struct AliasGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
    formatter: TypeFormatter<'a>,
}

impl<'a> AliasGenerator<'a> {
    /// Creates a new alias generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self {
            ir,
            config,
            formatter: TypeFormatter::new(ir, &config.type_prefix),
        }
    }

    /// Generates every alias, each one after the aliases it refers to.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if a referenced type is
    /// unresolved, or `CodegenError::CyclicDependency` if aliases refer to
    /// each other in a loop.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut state: HashMap<&'a str, VisitState> = HashMap::new();
        let mut path = Vec::new();
        let mut output = String::new();

        for entry in self.ir.registry.entries() {
            if is_alias(entry.category) && !state.contains_key(entry.key.as_str()) {
                self.visit(&entry.key, &mut state, &mut path, &mut output)?;
            }
        }

        Ok(output)
    }

    fn visit(
        &self,
        key: &'a str,
        state: &mut HashMap<&'a str, VisitState>,
        path: &mut Vec<&'a str>,
        output: &mut String,
    ) -> Result<(), CodegenError> {
        state.insert(key, VisitState::InProgress);
        path.push(key);

        for dep in self.references(key) {
            match state.get(dep).copied().unwrap_or(VisitState::Pending) {
                VisitState::Pending => self.visit(dep, state, path, output)?,
                VisitState::InProgress => {
                    let start = path.iter().position(|k| *k == dep).unwrap_or(0);
                    let mut cycle: Vec<&str> = path[start..].to_vec();
                    cycle.push(dep);
                    return Err(CodegenError::CyclicDependency {
                        path: cycle.join(" -> "),
                    });
                }
                VisitState::Emitted => {}
            }
        }

        path.pop();
        state.insert(key, VisitState::Emitted);

        let (Some(entry), Some(node)) = (self.ir.registry.get(key), self.ir.document.get(key))
        else {
            return Ok(());
        };
        if self.config.exclude.excludes(node) {
            tracing::debug!("alias '{}' excluded by tag", key);
            return Ok(());
        }
        match node {
            SchemaNode::Typedef(def) => {
                output.push_str(&self.generate_typedef(key, &entry.name, def)?);
            }
            SchemaNode::FunctionPointer(def) | SchemaNode::CallbackFunction(def) => {
                output.push_str(&self.generate_function_pointer(key, &entry.name, def)?);
            }
            _ => {}
        }
        Ok(())
    }

    /// Alias keys referenced by `key`, in declaration order.
    fn references(&self, key: &str) -> Vec<&'a str> {
        let ir = self.ir;
        let names: Vec<&'a str> = match ir.document.get(key) {
            Some(SchemaNode::Typedef(def)) => vec![def.type_name.as_str()],
            Some(SchemaNode::FunctionPointer(def) | SchemaNode::CallbackFunction(def)) => def
                .returns
                .as_deref()
                .into_iter()
                .chain(def.args.iter().map(|a| a.type_name.as_str()))
                .collect(),
            _ => Vec::new(),
        };
        names
            .into_iter()
            .filter(|name| ir.registry.category(name).is_some_and(is_alias))
            .collect()
    }

    fn generate_typedef(
        &self,
        key: &str,
        name: &str,
        def: &TypedefDef,
    ) -> Result<String, CodegenError> {
        let fragment = self.formatter.format(&def.type_name, def.annotation, key)?;
        Ok(format!("typedef {fragment} {name};\n"))
    }

    fn generate_function_pointer(
        &self,
        key: &str,
        name: &str,
        def: &FunctionDef,
    ) -> Result<String, CodegenError> {
        let returns = self.formatter.format_returns(def.returns.as_deref(), key)?;
        let args = self.formatter.argument_list(
            None,
            def.args.iter().filter(|a| !self.config.exclude.excludes(*a)),
            key,
        )?;
        Ok(format!("typedef {returns} (*{name})({args});\n"))
    }
}

const fn is_alias(category: Category) -> bool {
    matches!(
        category,
        Category::Typedef | Category::FunctionPointer | Category::CallbackFunction
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use idlhdr_schema::ExclusionSet;

    fn create_test_ir() -> SchemaIr {
        let json = r#"{
            "map async status": {"category": "enum", "values": [{"name": "success", "value": 1}]},
            "proc": {"category": "function pointer"},
            "buffer map callback": {"category": "callback function", "args": [
                {"name": "status", "type": "map async status"},
                {"name": "message", "type": "char", "annotation": "const*", "tags": ["dawn"]},
                {"name": "userdata", "type": "void *"}
            ]},
            "get proc address": {"category": "function pointer", "returns": "proc", "args": [
                {"name": "proc name", "type": "char", "annotation": "const*"}
            ]},
            "flags alias": {"category": "typedef", "type": "uint64_t"},
            "label ptr": {"category": "typedef", "type": "char", "annotation": "const*"}
        }"#;
        SchemaIr::from_json(json, "WGPU").expect("Failed to load")
    }

    #[test]
    fn test_generate_callbacks() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = AliasGenerator::new(&ir, &config).generate().expect("aliases");

        assert!(output.contains("typedef void (*WGPUProc)(void);\n"));
        assert!(output.contains(
            "typedef void (*WGPUBufferMapCallback)(WGPUMapAsyncStatus status, \
             const char* message, void* userdata);\n"
        ));
        assert!(output.contains(
            "typedef WGPUProc (*WGPUGetProcAddress)(const char* procName);\n"
        ));
    }

    #[test]
    fn test_generate_typedefs() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = AliasGenerator::new(&ir, &config).generate().expect("aliases");
        assert!(output.contains("typedef uint64_t WGPUFlagsAlias;\n"));
        assert!(output.contains("typedef const char* WGPULabelPtr;\n"));
    }

    #[test]
    fn test_alias_follows_its_target() {
        let json = r#"{
            "cb alias": {"category": "typedef", "type": "cb"},
            "holder": {"category": "function pointer", "args": [
                {"name": "inner", "type": "late alias"}
            ]},
            "late alias": {"category": "typedef", "type": "uint32_t"},
            "cb": {"category": "callback function"}
        }"#;
        let ir = SchemaIr::from_json(json, "WGPU").expect("Failed to load");
        let config = GeneratorConfig::default();
        let output = AliasGenerator::new(&ir, &config).generate().expect("aliases");

        assert_eq!(
            output,
            "typedef void (*WGPUCb)(void);\n\
             typedef WGPUCb WGPUCbAlias;\n\
             typedef uint32_t WGPULateAlias;\n\
             typedef void (*WGPUHolder)(WGPULateAlias inner);\n"
        );
    }

    #[test]
    fn test_alias_loop_rejected() {
        let json = r#"{
            "ping": {"category": "typedef", "type": "pong"},
            "pong": {"category": "typedef", "type": "ping"}
        }"#;
        let ir = SchemaIr::from_json(json, "WGPU").expect("Failed to load");
        let config = GeneratorConfig::default();
        match AliasGenerator::new(&ir, &config).generate() {
            Err(CodegenError::CyclicDependency { path }) => {
                assert_eq!(path, "ping -> pong -> ping");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_excluded_argument() {
        let ir = create_test_ir();
        let config =
            GeneratorConfig::default().with_exclusions(ExclusionSet::from_lists(["dawn"]));
        let output = AliasGenerator::new(&ir, &config).generate().expect("aliases");

        assert!(output.contains(
            "typedef void (*WGPUBufferMapCallback)(WGPUMapAsyncStatus status, void* userdata);\n"
        ));
    }

    #[test]
    fn test_unresolved_argument() {
        let json = r#"{
            "cb": {"category": "callback function", "args": [{"name": "x", "type": "ghost"}]}
        }"#;
        let ir = SchemaIr::from_json(json, "WGPU").expect("Failed to load");
        let config = GeneratorConfig::default();
        let result = AliasGenerator::new(&ir, &config).generate();
        assert!(matches!(result, Err(CodegenError::UnresolvedType { .. })));
    }
}
