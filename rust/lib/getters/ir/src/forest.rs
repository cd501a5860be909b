//! Forest IR — the declarations a host hands to one generation pass.
//!
//! The host owns parsing. This layer only mirrors what the generator needs:
//! container declarations, the attributes attached to them, and the import
//! directives of each file with their source offsets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete snapshot of every source file seen by one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forest {
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

impl Forest {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    /// Parse a forest from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One source file: its import directives and top-level items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path as reported by the host (e.g. `Assets/Scripts/Player.cs`).
    pub path: String,

    /// Import/using directives anywhere in the file.
    #[serde(default)]
    pub imports: Vec<ImportDirective>,

    #[serde(default)]
    pub items: Vec<Item>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Import directives in source-position order.
    ///
    /// The sort is stable, so directives the host reports with equal
    /// offsets keep their listed order.
    pub fn ordered_imports(&self) -> Vec<&ImportDirective> {
        let mut imports: Vec<&ImportDirective> = self.imports.iter().collect();
        imports.sort_by_key(|i| i.span_start);
        imports
    }
}

/// A verbatim import directive (e.g. `using UnityEngine;`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDirective {
    pub text: String,

    /// Byte offset of the directive in its file.
    pub span_start: usize,
}

impl ImportDirective {
    pub fn new(text: impl Into<String>, span_start: usize) -> Self {
        Self {
            text: text.into(),
            span_start,
        }
    }
}

/// A declaration that may appear at file or namespace scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Item {
    Namespace(NamespaceDecl),
    Class(ClassDecl),
}

/// A namespace block. `name` may itself be dotted (`Game.Units`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDecl {
    pub name: String,

    #[serde(default)]
    pub items: Vec<Item>,
}

/// A container declaration (e.g. a component class).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Simple name (e.g. `Player`).
    pub name: String,

    #[serde(default)]
    pub attributes: Vec<AttributeNode>,

    pub location: Location,
}

/// One attribute instance attached to a class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeNode {
    /// Attribute name as written (`RequireComponent`, `ComponentUtils.RequireComponentGetter`, ...).
    pub name: String,

    #[serde(default)]
    pub arguments: Vec<AttributeArgument>,

    pub location: Location,

    /// Source rendering of the whole attribute, used in diagnostic messages.
    #[serde(default)]
    pub text: String,
}

/// An attribute argument, positional or named (`name: value`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeArgument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub expr: ArgExpr,
}

impl AttributeArgument {
    pub fn positional(expr: ArgExpr) -> Self {
        Self { name: None, expr }
    }

    pub fn named(name: impl Into<String>, expr: ArgExpr) -> Self {
        Self {
            name: Some(name.into()),
            expr,
        }
    }
}

/// The shape of an argument expression, as far as the generator cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ArgExpr {
    /// A direct type reference (`typeof(Rigidbody)`).
    TypeOf { ty: String },
    /// A compile-time string literal.
    StringLiteral { value: String },
    /// Anything else: identifiers, constants, calls, interpolations.
    Other { text: String },
}

impl ArgExpr {
    pub fn type_of(ty: impl Into<String>) -> Self {
        Self::TypeOf { ty: ty.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    pub fn other(text: impl Into<String>) -> Self {
        Self::Other { text: text.into() }
    }

    /// The referenced type, if this is a direct type reference.
    pub fn as_type(&self) -> Option<&str> {
        match self {
            ArgExpr::TypeOf { ty } => Some(ty),
            _ => None,
        }
    }

    /// The literal value, if this is a string literal.
    pub fn as_str_literal(&self) -> Option<&str> {
        match self {
            ArgExpr::StringLiteral { value } => Some(value),
            _ => None,
        }
    }
}

/// A position in a source file. Line and column are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
