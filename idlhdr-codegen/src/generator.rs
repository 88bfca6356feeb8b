//! Header assembly.
//!
//! Runs every emission phase against one loaded schema and joins the sections
//! in their fixed order. The header is only returned once every phase has
//! succeeded, so a late error never yields a truncated header.

use crate::c::{
    AliasGenerator, DeclarationGenerator, DependencyGraph, EnumGenerator, FunctionGenerator,
    PreambleGenerator, StructGenerator,
};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use idlhdr_schema::SchemaIr;

/// Main header generator.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for a loaded schema.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the complete header.
    ///
    /// # Errors
    /// Returns `CodegenError` if a type reference is unresolved or structs
    /// contain each other by value.
    pub fn generate(&self) -> Result<String, CodegenError> {
        if !self.config.exclude.is_empty() {
            tracing::info!(
                "excluding tags: {}",
                self.config.exclude.iter().collect::<Vec<_>>().join(", ")
            );
        }
        tracing::info!(
            "generating header for {} registered types",
            self.ir.registry.len()
        );

        let preamble = PreambleGenerator::new(self.ir, self.config);
        let decls = DeclarationGenerator::new(self.ir, self.config);
        let graph = DependencyGraph::build(self.ir);
        let structs = StructGenerator::new(self.ir, self.config, &graph);
        let functions = FunctionGenerator::new(self.ir, self.config);
        let prototypes = functions.prototypes()?;

        let mut output = String::new();
        output.push_str(&preamble.generate_prologue());
        output.push_str(&preamble.generate_primitive_aliases());
        push_section(&mut output, &preamble.generate_constants()?);

        // Declarations pass
        push_section(&mut output, &decls.generate_handles());
        push_section(&mut output, &decls.generate_forward_structs());
        push_section(&mut output, &EnumGenerator::new(self.ir, self.config).generate());
        push_section(
            &mut output,
            &AliasGenerator::new(self.ir, self.config).generate()?,
        );

        // Struct body pass
        output.push_str(&structs.generate_chain_structs());
        let bodies = structs.generate()?;
        tracing::debug!("{} struct nodes in dependency graph", graph.len());
        push_section(&mut output, &bodies);

        output.push_str(&preamble.generate_extern_open());
        if self.config.emit_procs {
            output.push_str(&functions.generate_procs(&prototypes));
        }
        output.push_str(&functions.generate_prototypes(&prototypes));
        tracing::debug!("{} prototypes emitted", prototypes.len());
        output.push_str(&preamble.generate_epilogue());

        Ok(output)
    }
}

/// Appends a section followed by exactly one blank line; skips empty sections.
fn push_section(output: &mut String, section: &str) {
    if section.is_empty() {
        return;
    }
    output.push_str(section);
    if !section.ends_with("\n\n") {
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idlhdr_schema::ExclusionSet;

    const DOCUMENT: &str = r#"{
        "_comment": "private notes are never emitted",
        "s type": {"category": "enum", "values": [
            {"name": "invalid", "value": 0},
            {"name": "surface source metal layer", "value": 1}
        ]},
        "b": {"category": "structure", "members": [{"name": "child", "type": "a"}]},
        "a": {"category": "structure", "members": [{"name": "x", "type": "uint32_t"}]},
        "adapter": {"category": "object", "methods": [
            {"name": "get limits", "returns": "bool", "args": [
                {"name": "limits", "type": "b", "annotation": "*"}
            ]}
        ]},
        "buffer usage": {"category": "bitmask", "values": [
            {"name": "none", "value": 0},
            {"name": "map read", "value": 1}
        ]},
        "request adapter callback": {"category": "callback function", "args": [
            {"name": "adapter", "type": "adapter"},
            {"name": "userdata", "type": "void *"}
        ]},
        "request adapter callback info": {"category": "callback info", "members": [
            {"name": "next in chain", "type": "chained struct", "annotation": "const*"},
            {"name": "callback", "type": "request adapter callback"}
        ]},
        "create instance": {"category": "function", "returns": "adapter"}
    }"#;

    fn generate(json: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
        let ir = SchemaIr::from_json(json, &config.type_prefix).expect("Failed to load");
        Generator::new(&ir, config).generate()
    }

    fn position(output: &str, needle: &str) -> usize {
        output
            .find(needle)
            .unwrap_or_else(|| panic!("missing '{needle}' in:\n{output}"))
    }

    #[test]
    fn test_section_order() {
        let output = generate(DOCUMENT, &GeneratorConfig::default()).expect("header");

        let order = [
            "define WGPU_EXPORT",
            "#include <stdint.h>",
            "typedef uint32_t WGPUBool;",
            "typedef struct WGPUAdapterImpl* WGPUAdapter;",
            "typedef struct WGPUB WGPUB;",
            "typedef enum WGPUSType {",
            "typedef WGPUFlags WGPUBufferUsageFlags;",
            "typedef void (*WGPURequestAdapterCallback)(WGPUAdapter adapter, void* userdata);",
            "typedef struct WGPUChainedStruct {",
            "struct WGPUA {",
            "struct WGPUB {",
            "struct WGPURequestAdapterCallbackInfo {",
            "extern \"C\" {",
            "WGPU_EXPORT WGPUAdapter wgpuCreateInstance(void);",
            "WGPU_EXPORT WGPUBool wgpuAdapterGetLimits(WGPUAdapter adapter, WGPUB* limits);",
            "#endif // WEBGPU_H_",
        ];
        for pair in order.windows(2) {
            assert!(
                position(&output, pair[0]) < position(&output, pair[1]),
                "'{}' should precede '{}'",
                pair[0],
                pair[1]
            );
        }
        assert!(!output.contains("Comment"));
        assert!(!output.contains("WGPU_SKIP_PROCS"));
    }

    #[test]
    fn test_end_to_end_by_value_member() {
        let json = r#"{
            "a": {"category": "structure", "members": [{"name": "x", "type": "uint32_t"}]},
            "b": {"category": "structure", "members": [{"name": "child", "type": "a"}]}
        }"#;

        let output = generate(json, &GeneratorConfig::default()).expect("header");
        let a = position(&output, "struct WGPUA {\n    uint32_t x;\n};");
        let b = position(&output, "struct WGPUB {\n    WGPUA child;\n};");
        assert!(a < b);
    }

    #[test]
    fn test_exclusion_scenario() {
        let json = r#"{
            "a": {"category": "structure", "tags": ["internal"], "members": [
                {"name": "x", "type": "uint32_t"}
            ]},
            "b": {"category": "structure", "members": [{"name": "child", "type": "a"}]},
            "c": {"category": "structure", "members": [{"name": "y", "type": "float"}]}
        }"#;

        let config =
            GeneratorConfig::default().with_exclusions(ExclusionSet::from_lists(["internal"]));
        let output = generate(json, &config).expect("header");

        assert!(!output.contains("struct WGPUA {"));
        assert!(!output.contains("typedef struct WGPUA WGPUA;"));
        assert!(output.contains("struct WGPUB {"));
        assert!(output.contains("struct WGPUC {\n    float y;\n};"));

        let unfiltered = generate(json, &GeneratorConfig::default()).expect("header");
        let unrelated = "struct WGPUC {\n    float y;\n};";
        assert!(unfiltered.contains(unrelated));
    }

    #[test]
    fn test_deterministic_output() {
        let config =
            GeneratorConfig::default().with_exclusions(ExclusionSet::from_lists(["x,y"]));
        let first = generate(DOCUMENT, &config).expect("header");
        let second = generate(DOCUMENT, &config).expect("header");
        assert_eq!(first, second);
    }

    #[test]
    fn test_by_value_members_defined_earlier() {
        let json = r#"{
            "outer": {"category": "structure", "members": [
                {"name": "mid", "type": "middle"},
                {"name": "leaf ptr", "type": "leaf", "annotation": "const*"}
            ]},
            "middle": {"category": "structure", "members": [{"name": "leaf", "type": "leaf"}]},
            "leaf": {"category": "structure", "members": [{"name": "v", "type": "double"}]}
        }"#;

        let output = generate(json, &GeneratorConfig::default()).expect("header");
        let leaf = position(&output, "struct WGPULeaf {");
        let middle = position(&output, "struct WGPUMiddle {");
        let outer = position(&output, "struct WGPUOuter {");
        assert!(leaf < middle);
        assert!(middle < outer);
    }

    #[test]
    fn test_aliases_declared_before_use() {
        let json = r#"{
            "b": {"category": "structure", "members": [{"name": "inner", "type": "alias"}]},
            "alias": {"category": "typedef", "type": "a"},
            "cb alias": {"category": "typedef", "type": "cb"},
            "a": {"category": "structure", "members": [{"name": "x", "type": "uint32_t"}]},
            "cb": {"category": "callback function"}
        }"#;

        let output = generate(json, &GeneratorConfig::default()).expect("header");
        let cb = position(&output, "typedef void (*WGPUCb)(void);");
        let cb_alias = position(&output, "typedef WGPUCb WGPUCbAlias;");
        let a = position(&output, "struct WGPUA {");
        let b = position(&output, "struct WGPUB {");
        assert!(cb < cb_alias);
        assert!(a < b);
    }

    #[test]
    fn test_member_typed_as_function_rejected() {
        let json = r#"{
            "s": {"category": "structure", "members": [{"name": "x", "type": "create instance"}]},
            "create instance": {"category": "function"}
        }"#;

        let result = generate(json, &GeneratorConfig::default());
        assert!(matches!(result, Err(CodegenError::UnresolvedType { .. })));
    }

    #[test]
    fn test_unresolved_type_yields_no_output() {
        let json = r#"{
            "a": {"category": "structure", "members": [{"name": "x", "type": "uint32_t"}]},
            "get ghost": {"category": "function", "returns": "ghost"}
        }"#;

        let result = generate(json, &GeneratorConfig::default());
        assert!(matches!(result, Err(CodegenError::UnresolvedType { .. })));
    }

    #[test]
    fn test_procs_enabled() {
        let config = GeneratorConfig::default().with_procs(true);
        let output = generate(DOCUMENT, &config).expect("header");
        let procs = position(&output, "typedef WGPUAdapter (*WGPUProcCreateInstance)(void);");
        let protos = position(&output, "WGPU_EXPORT WGPUAdapter wgpuCreateInstance(void);");
        assert!(procs < protos);
    }

    #[test]
    fn test_custom_prefixes() {
        let config = GeneratorConfig::default()
            .with_type_prefix("Gfx")
            .with_function_prefix("gfx");
        let output = generate(DOCUMENT, &config).expect("header");
        assert!(output.starts_with("#ifndef GFX_H_\n"));
        assert!(output.contains("GFX_EXPORT GfxAdapter gfxCreateInstance(void);"));
        assert!(output.contains("typedef uint32_t GfxBool;"));
    }
}
