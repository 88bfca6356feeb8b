//! Typed schema node definitions.
//!
//! Every top-level entry of the IDL document is deserialized into one
//! [`SchemaNode`] variant keyed by its `category`, so later phases never probe
//! raw JSON fields.

use crate::error::ParseError;
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;

/// Parsed IDL document: every non-private top-level node in document order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: IndexMap<String, SchemaNode>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node. A repeated key keeps its first position.
    pub fn insert(&mut self, key: String, node: SchemaNode) {
        self.nodes.insert(key, node);
    }

    /// Looks up a node by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.nodes.get(key)
    }

    /// Returns true if the document declares `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// Iterates nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Node category as declared by the `category` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Plain C struct.
    Structure,
    /// Opaque reference-counted handle with methods.
    Object,
    /// Enumeration.
    Enum,
    /// Bit flags enumeration.
    Bitmask,
    /// Function pointer type.
    FunctionPointer,
    /// Callback function pointer type.
    CallbackFunction,
    /// Struct bundling a callback with its parameters.
    CallbackInfo,
    /// Free function.
    Function,
    /// Type alias.
    Typedef,
    /// Compile-time constant.
    Constant,
    /// Native type declared for reference only.
    Native,
    /// Any category this generator does not emit.
    Other,
}

impl Category {
    /// Returns true if nodes of this category receive a Type Registry entry.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(
            self,
            Self::Structure
                | Self::Object
                | Self::Enum
                | Self::Bitmask
                | Self::FunctionPointer
                | Self::CallbackFunction
                | Self::CallbackInfo
                | Self::Typedef
        )
    }

    /// Returns true for categories that get a struct body.
    #[must_use]
    pub const fn is_struct_like(&self) -> bool {
        matches!(self, Self::Structure | Self::CallbackInfo)
    }

    /// Returns the category name as written in the document.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Object => "object",
            Self::Enum => "enum",
            Self::Bitmask => "bitmask",
            Self::FunctionPointer => "function pointer",
            Self::CallbackFunction => "callback function",
            Self::CallbackInfo => "callback info",
            Self::Function => "function",
            Self::Typedef => "typedef",
            Self::Constant => "constant",
            Self::Native => "native",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level document entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "category")]
pub enum SchemaNode {
    /// `structure`
    #[serde(rename = "structure")]
    Structure(StructDef),
    /// `callback info`
    #[serde(rename = "callback info")]
    CallbackInfo(StructDef),
    /// `object`
    #[serde(rename = "object")]
    Object(ObjectDef),
    /// `enum`
    #[serde(rename = "enum")]
    Enum(EnumDef),
    /// `bitmask`
    #[serde(rename = "bitmask")]
    Bitmask(EnumDef),
    /// `function pointer`
    #[serde(rename = "function pointer")]
    FunctionPointer(FunctionDef),
    /// `callback function`
    #[serde(rename = "callback function")]
    CallbackFunction(FunctionDef),
    /// `function`
    #[serde(rename = "function")]
    Function(FunctionDef),
    /// `typedef`
    #[serde(rename = "typedef")]
    Typedef(TypedefDef),
    /// `constant`
    #[serde(rename = "constant")]
    Constant(ConstantDef),
    /// `native`
    #[serde(rename = "native")]
    Native {
        /// Exclusion tags.
        #[serde(default)]
        tags: Vec<String>,
    },
    /// Unknown category.
    #[serde(other)]
    Other,
}

impl SchemaNode {
    /// Returns the node category.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Structure(_) => Category::Structure,
            Self::CallbackInfo(_) => Category::CallbackInfo,
            Self::Object(_) => Category::Object,
            Self::Enum(_) => Category::Enum,
            Self::Bitmask(_) => Category::Bitmask,
            Self::FunctionPointer(_) => Category::FunctionPointer,
            Self::CallbackFunction(_) => Category::CallbackFunction,
            Self::Function(_) => Category::Function,
            Self::Typedef(_) => Category::Typedef,
            Self::Constant(_) => Category::Constant,
            Self::Native { .. } => Category::Native,
            Self::Other => Category::Other,
        }
    }

    /// Returns the struct definition for `structure` and `callback info` nodes.
    #[must_use]
    pub const fn as_struct(&self) -> Option<&StructDef> {
        match self {
            Self::Structure(s) | Self::CallbackInfo(s) => Some(s),
            _ => None,
        }
    }
}

impl Tagged for SchemaNode {
    fn tags(&self) -> &[String] {
        match self {
            Self::Structure(s) | Self::CallbackInfo(s) => &s.tags,
            Self::Object(o) => &o.tags,
            Self::Enum(e) | Self::Bitmask(e) => &e.tags,
            Self::FunctionPointer(f) | Self::CallbackFunction(f) | Self::Function(f) => &f.tags,
            Self::Typedef(t) => &t.tags,
            Self::Constant(c) => &c.tags,
            Self::Native { tags } => tags,
            Self::Other => &[],
        }
    }
}

/// Anything that can carry exclusion tags.
pub trait Tagged {
    /// Returns the tags attached to this item.
    fn tags(&self) -> &[String];
}

/// Direction of an extension chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainDirection {
    /// Chain passed into the API (const link).
    In,
    /// Chain filled in by the API (mutable link).
    Out,
}

/// `structure` / `callback info` definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructDef {
    /// Struct members in declaration order.
    #[serde(default)]
    pub members: Vec<RecordMember>,
    /// Struct carries an optional pointer to an extension chain.
    #[serde(default, deserialize_with = "deserialize_chain")]
    pub extensible: Option<ChainDirection>,
    /// Struct begins with an extension-chain header.
    #[serde(default, deserialize_with = "deserialize_chain")]
    pub chained: Option<ChainDirection>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A struct member or a function argument.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordMember {
    /// Member name.
    pub name: String,
    /// Referenced type key.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Pointer/const annotation.
    #[serde(default)]
    pub annotation: Option<Annotation>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecordMember {
    /// Creates a member with no annotation and no tags.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotation: None,
            tags: Vec::new(),
        }
    }

    /// Returns true if the member holds its type by value.
    #[must_use]
    pub fn is_by_value(&self) -> bool {
        self.annotation.is_none()
    }
}

impl Tagged for RecordMember {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// `object` definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectDef {
    /// Methods callable on the handle.
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A method of an `object`.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDef {
    /// Method name.
    pub name: String,
    /// Return type key, `void` when absent.
    #[serde(default)]
    pub returns: Option<String>,
    /// Arguments after the receiving handle.
    #[serde(default)]
    pub args: Vec<RecordMember>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Tagged for MethodDef {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// `enum` / `bitmask` definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnumDef {
    /// Declared values.
    #[serde(default)]
    pub values: Vec<EnumValue>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single enum or bitmask value.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumValue {
    /// Value name, hyphen or space separated.
    pub name: String,
    /// Numeric value. Omitted values continue from the previous one.
    #[serde(default)]
    pub value: Option<u64>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Tagged for EnumValue {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// `function`, `function pointer` and `callback function` definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionDef {
    /// Return type key, `void` when absent.
    #[serde(default)]
    pub returns: Option<String>,
    /// Arguments.
    #[serde(default)]
    pub args: Vec<RecordMember>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `typedef` definition.
#[derive(Debug, Clone, Deserialize)]
pub struct TypedefDef {
    /// Aliased type key.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Pointer/const annotation of the aliased type.
    #[serde(default)]
    pub annotation: Option<Annotation>,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `constant` definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ConstantDef {
    /// Type key of the constant.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Literal value.
    pub value: ConstantValue,
    /// Exclusion tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Literal of a `constant` node.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    /// Numeric literal.
    Number(serde_json::Number),
    /// Expression text, emitted verbatim (`UINT32_MAX`, `0xffffffffUL`).
    Text(String),
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Pointer/const annotation on a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Annotation {
    /// `*`
    Pointer,
    /// `const*`
    ConstPointer,
    /// `const*const*`
    ConstPointerConstPointer,
}

impl Annotation {
    /// Parses an annotation from its document spelling.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidAnnotation` for unknown spellings.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s {
            "*" => Ok(Self::Pointer),
            "const*" => Ok(Self::ConstPointer),
            "const*const*" => Ok(Self::ConstPointerConstPointer),
            other => Err(ParseError::InvalidAnnotation {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Annotation {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Accepts `true`/`false` or a direction string for `extensible`/`chained`.
fn deserialize_chain<'de, D>(deserializer: D) -> Result<Option<ChainDirection>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Direction(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None | Some(Raw::Flag(false)) => Ok(None),
        Some(Raw::Flag(true)) => Ok(Some(ChainDirection::In)),
        Some(Raw::Direction(dir)) => match dir.as_str() {
            "in" => Ok(Some(ChainDirection::In)),
            "out" => Ok(Some(ChainDirection::Out)),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"true, false, \"in\" or \"out\"",
            )),
        },
    }
}
