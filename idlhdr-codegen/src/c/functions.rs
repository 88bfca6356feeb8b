//! Free function and object method prototypes.

use crate::c::types::TypeFormatter;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use idlhdr_schema::naming::{to_camel_case, to_pascal_case};
use idlhdr_schema::{RecordMember, SchemaIr, SchemaNode};

/// One resolved C function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prototype {
    /// PascalCase name without the function prefix (`AdapterRelease`).
    pub stem: String,
    /// Return type fragment.
    pub returns: String,
    /// Joined argument list.
    pub args: String,
}

/// Generator for function and method prototypes.
pub struct FunctionGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
    formatter: TypeFormatter<'a>,
}

impl<'a> FunctionGenerator<'a> {
    /// Creates a new function generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self {
            ir,
            config,
            formatter: TypeFormatter::new(ir, &config.type_prefix),
        }
    }

    /// Collects every non-excluded function and method signature.
    ///
    /// Free functions come first, then methods grouped by object, each in
    /// document order.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if an argument or return type is
    /// unresolved.
    pub fn prototypes(&self) -> Result<Vec<Prototype>, CodegenError> {
        let mut prototypes = Vec::new();

        for (key, node) in self.ir.document.iter() {
            if let SchemaNode::Function(def) = node {
                if self.config.exclude.excludes(node) {
                    continue;
                }
                prototypes.push(Prototype {
                    stem: to_pascal_case(key),
                    returns: self.formatter.format_returns(def.returns.as_deref(), key)?,
                    args: self.args(None, &def.args, key)?,
                });
            }
        }

        for (key, node) in self.ir.document.iter() {
            let SchemaNode::Object(def) = node else {
                continue;
            };
            if self.config.exclude.excludes(node) {
                continue;
            }
            let handle = self.formatter.resolve(key, key)?;
            for method in &def.methods {
                if self.config.exclude.excludes(method) {
                    continue;
                }
                let context = format!("{}.{}", key, method.name);
                let receiver = format!("{} {}", handle, to_camel_case(key));
                prototypes.push(Prototype {
                    stem: format!("{}{}", to_pascal_case(key), to_pascal_case(&method.name)),
                    returns: self
                        .formatter
                        .format_returns(method.returns.as_deref(), &context)?,
                    args: self.args(Some(receiver), &method.args, &context)?,
                });
            }
        }

        Ok(prototypes)
    }

    /// Generates exported prototype declarations.
    #[must_use]
    pub fn generate_prototypes(&self, prototypes: &[Prototype]) -> String {
        let mut output = String::new();
        for proto in prototypes {
            output.push_str(&format!(
                "{} {} {}{}({});\n",
                self.config.export_macro,
                proto.returns,
                self.config.function_prefix,
                proto.stem,
                proto.args
            ));
        }
        output
    }

    /// Generates proc-table typedefs, guarded by `<PREFIX>_SKIP_PROCS`.
    #[must_use]
    pub fn generate_procs(&self, prototypes: &[Prototype]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "#if !defined({}_SKIP_PROCS)\n\n",
            self.config.macro_prefix()
        ));
        for proto in prototypes {
            output.push_str(&format!(
                "typedef {} (*{}Proc{})({});\n",
                proto.returns, self.config.type_prefix, proto.stem, proto.args
            ));
        }
        output.push_str(&format!(
            "\n#endif  // !defined({}_SKIP_PROCS)\n\n",
            self.config.macro_prefix()
        ));
        output
    }

    fn args(
        &self,
        receiver: Option<String>,
        args: &[RecordMember],
        context: &str,
    ) -> Result<String, CodegenError> {
        self.formatter.argument_list(
            receiver,
            args.iter().filter(|a| !self.config.exclude.excludes(*a)),
            context,
        )
    }
}
