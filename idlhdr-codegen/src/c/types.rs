//! Type reference formatting.
//!
//! Turns a document type key plus annotation into a C declaration fragment.
//! Resolution order: primitive table, Type Registry, then keys the document
//! declares in a category that is not registered (`native` and unknown
//! categories). Anything else is an [`CodegenError::UnresolvedType`].

use crate::error::CodegenError;
use idlhdr_schema::naming::to_camel_case;
use idlhdr_schema::registry::generated_name;
use idlhdr_schema::{Annotation, Category, PrimitiveType, RecordMember, SchemaIr, SchemaNode};

/// Resolves type references against the primitive table and registry.
pub struct TypeFormatter<'a> {
    ir: &'a SchemaIr,
    type_prefix: &'a str,
}

impl<'a> TypeFormatter<'a> {
    /// Creates a new type formatter.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, type_prefix: &'a str) -> Self {
        Self { ir, type_prefix }
    }

    /// Resolves a type key to its bare C name.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if nothing declares `type_name`.
    pub fn resolve(&self, type_name: &str, context: &str) -> Result<String, CodegenError> {
        self.resolve_base(type_name, context).map(|(name, _)| name)
    }

    /// Formats a type reference with its annotation, e.g. `const WGPUFoo*`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if nothing declares `type_name`.
    pub fn format(
        &self,
        type_name: &str,
        annotation: Option<Annotation>,
        context: &str,
    ) -> Result<String, CodegenError> {
        let (base, const_view) = self.resolve_base(type_name, context)?;
        Ok(apply_annotation(&base, annotation, const_view))
    }

    /// Formats a return type; an absent return type is `void`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if nothing declares `returns`.
    pub fn format_returns(
        &self,
        returns: Option<&str>,
        context: &str,
    ) -> Result<String, CodegenError> {
        match returns {
            Some(type_name) => self.resolve(type_name, context),
            None => Ok("void".to_string()),
        }
    }

    /// Formats a member or argument declaration, e.g. `const char* label`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if the member type is unresolved.
    pub fn declaration(&self, record: &RecordMember, owner: &str) -> Result<String, CodegenError> {
        let context = format!("{}.{}", owner, record.name);
        let fragment = self.format(&record.type_name, record.annotation, &context)?;
        Ok(format!("{} {}", fragment, to_camel_case(&record.name)))
    }

    /// Formats a comma-separated argument list, `void` when empty.
    ///
    /// `leading` declarations (such as a method receiver) come first.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if any argument is unresolved.
    pub fn argument_list<'r>(
        &self,
        leading: Option<String>,
        args: impl IntoIterator<Item = &'r RecordMember>,
        owner: &str,
    ) -> Result<String, CodegenError> {
        let mut parts: Vec<String> = leading.into_iter().collect();
        for arg in args {
            parts.push(self.declaration(arg, owner)?);
        }
        if parts.is_empty() {
            Ok("void".to_string())
        } else {
            Ok(parts.join(", "))
        }
    }

    fn resolve_base(&self, type_name: &str, context: &str) -> Result<(String, bool), CodegenError> {
        if let Some(prim) = PrimitiveType::from_idl_name(type_name) {
            return Ok((prim.c_type(self.type_prefix), prim.is_const_view()));
        }
        if let Some(entry) = self.ir.registry.get(type_name) {
            return Ok((entry.name.clone(), false));
        }
        match self.ir.document.get(type_name).map(SchemaNode::category) {
            Some(Category::Native | Category::Other) => {
                Ok((generated_name(self.type_prefix, type_name), false))
            }
            _ => Err(CodegenError::unresolved(type_name, context)),
        }
    }
}

/// Applies a pointer/const annotation to a resolved base type.
///
/// Bases that already start with `const` do not get a second one.
#[must_use]
pub fn apply_annotation(base: &str, annotation: Option<Annotation>, const_view: bool) -> String {
    let qualifier = if const_view { "" } else { "const " };
    match annotation {
        None => base.to_string(),
        Some(Annotation::Pointer) => format!("{base}*"),
        Some(Annotation::ConstPointer) => format!("{qualifier}{base}*"),
        Some(Annotation::ConstPointerConstPointer) => format!("{qualifier}{base}* const*"),
    }
}
