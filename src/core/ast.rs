//! Owned declaration tree for a Go source file.
//!
//! The Go parser lowers a tree-sitter parse into these types so that the
//! classifier and scanner never need token access.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoFile {
    pub package_name: String,
    pub imports: Vec<ImportSpec>,
    pub functions: Vec<FuncDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSpec {
    /// Import path without surrounding quotes
    pub path: String,
    pub alias: Option<ImportAlias>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportAlias {
    /// `import name "path"`
    Named(String),
    /// `import . "path"`
    Dot,
    /// `import _ "path"`
    Blank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// 1-based line of the `func` keyword
    pub line: usize,
    pub has_receiver: bool,
    /// One entry per declared parameter; `a, b T` contributes two
    pub params: Vec<TypeExpr>,
    pub results: Vec<TypeExpr>,
}

/// The type expression shapes the classifier distinguishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// `error`, `Event` (under a dot import)
    Ident(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `pkg.Name`
    Qualified { package: String, name: String },
    /// Anything else, kept as source text for diagnostics
    Other(String),
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Split a named type into `(qualifier, name)`; a plain identifier has
    /// an empty qualifier.
    pub fn as_named(&self) -> Option<(&str, &str)> {
        match self {
            Self::Ident(name) => Some(("", name)),
            Self::Qualified { package, name } => Some((package, name)),
            Self::Pointer(_) | Self::Other(_) => None,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Other(text) => write!(f, "{text}"),
        }
    }
}
