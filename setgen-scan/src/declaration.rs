//! Plain data describing C# type declarations.

use std::{fmt, path::PathBuf};

use serde::Serialize;

/// The keyword introducing a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKeyword {
    Class,
    Struct,
    Record,
    /// `record struct`
    RecordStruct,
}

impl TypeKeyword {
    /// The keyword as written in C# source.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKeyword::Class => "class",
            TypeKeyword::Struct => "struct",
            TypeKeyword::Record => "record",
            TypeKeyword::RecordStruct => "record struct",
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One argument of an attribute usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AttributeArg {
    /// A string literal, unescaped.
    String(String),
    /// Any other expression, kept as token text.
    Expr(String),
}

impl AttributeArg {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeArg::String(value) => Some(value),
            AttributeArg::Expr(_) => None,
        }
    }
}

/// An attribute applied to a declaration, e.g. `[GlobalSettings("a.asset")]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The name as written, possibly qualified (`Game.GlobalSettings`).
    pub name: String,
    /// Constructor arguments in order.
    pub args: Vec<AttributeArg>,
    /// Property assignments (`Name = value`).
    pub named: Vec<(String, AttributeArg)>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            named: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: AttributeArg) -> Self {
        self.args.push(arg);
        self
    }
}

/// A type that contains a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnclosingType {
    pub name: String,
    pub keyword: TypeKeyword,
    pub modifiers: Vec<String>,
}

/// A type declaration visible in the compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Containing namespace, `None` for the global namespace.
    pub namespace: Option<String>,
    /// Containing types, outermost first.
    pub enclosing: Vec<EnclosingType>,
    pub name: String,
    pub keyword: TypeKeyword,
    /// Modifiers as written (`public`, `static`, `partial`, ...).
    pub modifiers: Vec<String>,
    /// File containing the declaration.
    pub file: PathBuf,
    pub attributes: Vec<Attribute>,
}

impl Declaration {
    /// Create a top-level `class` declaration with no modifiers or attributes.
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            namespace: None,
            enclosing: Vec::new(),
            name: name.into(),
            keyword: TypeKeyword::Class,
            modifiers: Vec::new(),
            file: file.into(),
            attributes: Vec::new(),
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers = modifiers.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Dotted path of enclosing types and this type, e.g. `Outer.Settings`.
    pub fn qualified_name(&self) -> String {
        self.enclosing
            .iter()
            .map(|outer| outer.name.as_str())
            .chain(std::iter::once(self.name.as_str()))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// A settings container found by [`scan`](crate::scan).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationTarget {
    pub namespace: Option<String>,
    pub enclosing: Vec<EnclosingType>,
    pub name: String,
    pub keyword: TypeKeyword,
    pub modifiers: Vec<String>,
    /// File declaring the container; the settings path is relative to it.
    pub file: PathBuf,
    /// The attribute's path argument.
    pub settings_path: String,
    /// The attribute name the container was matched by.
    pub attribute: String,
}

impl DeclarationTarget {
    pub(crate) fn from_declaration(
        declaration: &Declaration,
        settings_path: &str,
        attribute: &str,
    ) -> Self {
        Self {
            namespace: declaration.namespace.clone(),
            enclosing: declaration.enclosing.clone(),
            name: declaration.name.clone(),
            keyword: declaration.keyword,
            modifiers: declaration.modifiers.clone(),
            file: declaration.file.clone(),
            settings_path: settings_path.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// Human-readable location, e.g. `Game.Config.Settings`.
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(namespace) = &self.namespace {
            parts.push(namespace);
        }
        parts.extend(self.enclosing.iter().map(|outer| outer.name.as_str()));
        parts.push(&self.name);
        parts.join(".")
    }
}
