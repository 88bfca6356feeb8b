//! Generator configuration.

use idlhdr_schema::ExclusionSet;

/// Options for one generator invocation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespace tag prepended to generated type names.
    pub type_prefix: String,
    /// Namespace tag prepended to function symbols.
    pub function_prefix: String,
    /// Include guard macro.
    pub header_guard: String,
    /// Export visibility macro placed before every prototype.
    pub export_macro: String,
    /// Tags whose bearers are omitted from output.
    pub exclude: ExclusionSet,
    /// Emit proc-table typedefs alongside the prototypes.
    pub emit_procs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            type_prefix: "WGPU".to_string(),
            function_prefix: "wgpu".to_string(),
            header_guard: "WEBGPU_H_".to_string(),
            export_macro: "WGPU_EXPORT".to_string(),
            exclude: ExclusionSet::new(),
            emit_procs: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type prefix and derives the guard and export macro from it.
    #[must_use]
    pub fn with_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = prefix.into();
        let upper = self.macro_prefix();
        self.header_guard = format!("{upper}_H_");
        self.export_macro = format!("{upper}_EXPORT");
        self
    }

    /// Sets the function symbol prefix.
    #[must_use]
    pub fn with_function_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.function_prefix = prefix.into();
        self
    }

    /// Sets the include guard macro.
    #[must_use]
    pub fn with_header_guard(mut self, guard: impl Into<String>) -> Self {
        self.header_guard = guard.into();
        self
    }

    /// Sets the export visibility macro.
    #[must_use]
    pub fn with_export_macro(mut self, name: impl Into<String>) -> Self {
        self.export_macro = name.into();
        self
    }

    /// Sets the exclusion set.
    #[must_use]
    pub fn with_exclusions(mut self, exclude: ExclusionSet) -> Self {
        self.exclude = exclude;
        self
    }

    /// Enables or disables proc-table typedefs.
    #[must_use]
    pub fn with_procs(mut self, emit: bool) -> Self {
        self.emit_procs = emit;
        self
    }

    /// Upper-cased type prefix used for preprocessor macros.
    #[must_use]
    pub fn macro_prefix(&self) -> String {
        self.type_prefix.to_ascii_uppercase()
    }
}
