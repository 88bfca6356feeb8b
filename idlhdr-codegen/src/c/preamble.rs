//! Fixed header prologue, constants and epilogue.

use crate::c::types::TypeFormatter;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use idlhdr_schema::naming::to_constant_case;
use idlhdr_schema::{ConstantValue, SchemaIr, SchemaNode};

/// Generator for the parts of the header that frame the declarations.
pub struct PreambleGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> PreambleGenerator<'a> {
    /// Creates a new preamble generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the opening include guard and export visibility macros.
    #[must_use]
    pub fn generate_prologue(&self) -> String {
        let guard = &self.config.header_guard;
        let export = &self.config.export_macro;
        let upper = self.config.macro_prefix();

        let mut output = String::new();
        output.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
        output.push_str(&format!("#if defined({upper}_SHARED_LIBRARY)\n"));
        output.push_str("#    if defined(_WIN32)\n");
        output.push_str(&format!("#        if defined({upper}_IMPLEMENTATION)\n"));
        output.push_str(&format!("#            define {export} __declspec(dllexport)\n"));
        output.push_str("#        else\n");
        output.push_str(&format!("#            define {export} __declspec(dllimport)\n"));
        output.push_str("#        endif\n");
        output.push_str("#    else  // defined(_WIN32)\n");
        output.push_str(&format!("#        if defined({upper}_IMPLEMENTATION)\n"));
        output.push_str(&format!(
            "#            define {export} __attribute__((visibility(\"default\")))\n"
        ));
        output.push_str("#        else\n");
        output.push_str(&format!("#            define {export}\n"));
        output.push_str("#        endif\n");
        output.push_str("#    endif  // defined(_WIN32)\n");
        output.push_str(&format!("#else  // defined({upper}_SHARED_LIBRARY)\n"));
        output.push_str(&format!("#    define {export}\n"));
        output.push_str(&format!("#endif  // defined({upper}_SHARED_LIBRARY)\n\n"));

        output.push_str("#include <stdint.h>\n");
        output.push_str("#include <stddef.h>\n\n");
        output
    }

    /// Generates the flags and boolean primitive aliases.
    #[must_use]
    pub fn generate_primitive_aliases(&self) -> String {
        let prefix = &self.config.type_prefix;
        format!("typedef uint32_t {prefix}Flags;\ntypedef uint32_t {prefix}Bool;\n\n")
    }

    /// Generates `#define`s for `constant` nodes.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if a constant's type is unresolved.
    pub fn generate_constants(&self) -> Result<String, CodegenError> {
        let formatter = TypeFormatter::new(self.ir, &self.config.type_prefix);
        let upper = self.config.macro_prefix();
        let mut output = String::new();

        for (key, node) in self.ir.document.iter() {
            let SchemaNode::Constant(def) = node else {
                continue;
            };
            if self.config.exclude.excludes(node) {
                continue;
            }
            let name = format!("{}_{}", upper, to_constant_case(key));
            let value = match &def.value {
                ConstantValue::Number(n) => {
                    format!("(({}){})", formatter.resolve(&def.type_name, key)?, n)
                }
                ConstantValue::Text(text) => format!("({text})"),
            };
            output.push_str(&format!("#define {name} {value}\n"));
        }

        if !output.is_empty() {
            output.push('\n');
        }
        Ok(output)
    }

    /// Opens the `extern "C"` block.
    #[must_use]
    pub fn generate_extern_open(&self) -> String {
        "#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n".to_string()
    }

    /// Closes the `extern "C"` block and the include guard.
    #[must_use]
    pub fn generate_epilogue(&self) -> String {
        format!(
            "\n#ifdef __cplusplus\n}} // extern \"C\"\n#endif\n\n#endif // {}\n",
            self.config.header_guard
        )
    }
}
