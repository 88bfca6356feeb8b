//! Enum and bitmask code generation.

use crate::config::GeneratorConfig;
use idlhdr_schema::naming::to_enum_value_case;
use idlhdr_schema::{EnumDef, SchemaIr, SchemaNode};

/// Sentinel value forcing 32-bit enum storage.
pub const FORCE32_VALUE: u32 = 0x7FFF_FFFF;

/// Generator for enum and bitmask definitions.
pub struct EnumGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates all enum and bitmask definitions in Generation Order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for entry in self.ir.registry.entries() {
            let Some(node) = self.ir.document.get(&entry.key) else {
                continue;
            };
            if self.config.exclude.excludes(node) {
                continue;
            }
            match node {
                SchemaNode::Enum(def) => {
                    output.push_str(&self.generate_enum(&entry.name, def));
                }
                SchemaNode::Bitmask(def) => {
                    output.push_str(&self.generate_enum(&entry.name, def));
                    output.push_str(&self.generate_flags_alias(&entry.name));
                }
                _ => {}
            }
        }

        output
    }

    /// Generates one `typedef enum` with its Force32 sentinel.
    fn generate_enum(&self, name: &str, def: &EnumDef) -> String {
        let mut output = String::new();

        output.push_str(&format!("typedef enum {} {{\n", name));

        let mut next_value: u64 = 0;
        for value in &def.values {
            let numeric = value.value.unwrap_or(next_value);
            next_value = numeric.wrapping_add(1);
            if self.config.exclude.excludes(value) {
                continue;
            }
            output.push_str(&format!(
                "    {}_{} = 0x{:08X},\n",
                name,
                to_enum_value_case(&value.name),
                numeric
            ));
        }

        output.push_str(&format!("    {}_Force32 = 0x{:08X}\n", name, FORCE32_VALUE));
        output.push_str(&format!("}} {};\n\n", name));

        output
    }

    /// Generates the flags alias of a bitmask.
    fn generate_flags_alias(&self, name: &str) -> String {
        format!(
            "typedef {}Flags {}Flags;\n\n",
            self.config.type_prefix, name
        )
    }
}
