//! Fixed primitive type table.
//!
//! Type references are resolved against this table before the Type Registry
//! is consulted.

/// Built-in types every document may reference without declaring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `char`
    Char,
    /// `int8_t`
    Int8,
    /// `int16_t`
    Int16,
    /// `int32_t`
    Int32,
    /// `int64_t`
    Int64,
    /// `uint8_t`
    Uint8,
    /// `uint16_t`
    Uint16,
    /// `uint32_t`
    Uint32,
    /// `uint64_t`
    Uint64,
    /// `size_t`
    Size,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `void`
    Void,
    /// 32-bit boolean alias.
    Bool,
    /// `void*`
    VoidPtr,
    /// `const void*`
    ConstVoidPtr,
    /// Immutable string view, `const char*`.
    String,
    /// Input extension-chain link.
    ChainedStruct,
    /// Output extension-chain link.
    ChainedStructOut,
}

impl PrimitiveType {
    /// Parses a primitive from its document spelling.
    #[must_use]
    pub fn from_idl_name(name: &str) -> Option<Self> {
        match name {
            "char" => Some(Self::Char),
            "int8_t" => Some(Self::Int8),
            "int16_t" => Some(Self::Int16),
            "int32_t" => Some(Self::Int32),
            "int64_t" => Some(Self::Int64),
            "uint8_t" => Some(Self::Uint8),
            "uint16_t" => Some(Self::Uint16),
            "uint32_t" => Some(Self::Uint32),
            "uint64_t" => Some(Self::Uint64),
            "size_t" => Some(Self::Size),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "void" => Some(Self::Void),
            "bool" => Some(Self::Bool),
            "void *" | "void*" => Some(Self::VoidPtr),
            "void const *" | "const void *" | "const void*" => Some(Self::ConstVoidPtr),
            "string" => Some(Self::String),
            "chained struct" => Some(Self::ChainedStruct),
            "chained struct out" => Some(Self::ChainedStructOut),
            _ => None,
        }
    }

    /// Returns the C spelling, prefixing generated aliases with `type_prefix`.
    #[must_use]
    pub fn c_type(&self, type_prefix: &str) -> String {
        let fixed = match self {
            Self::Char => "char",
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Uint8 => "uint8_t",
            Self::Uint16 => "uint16_t",
            Self::Uint32 => "uint32_t",
            Self::Uint64 => "uint64_t",
            Self::Size => "size_t",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
            Self::VoidPtr => "void*",
            Self::ConstVoidPtr => "const void*",
            Self::String => "const char*",
            Self::Bool => return format!("{type_prefix}Bool"),
            Self::ChainedStruct => return format!("{type_prefix}ChainedStruct"),
            Self::ChainedStructOut => return format!("{type_prefix}ChainedStructOut"),
        };
        fixed.to_string()
    }

    /// Returns true if the C spelling already carries a leading `const`.
    #[must_use]
    pub const fn is_const_view(&self) -> bool {
        matches!(self, Self::ConstVoidPtr | Self::String)
    }
}
