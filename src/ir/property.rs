use serde::Serialize;

use crate::ir::position::Position;
use crate::ir::trees::{Ident, StringLiteral, Tree, TreeError};

/// Syntactic property key.
///
/// A named member access or object-literal field carries its key in one of
/// two physical encodings: a bare identifier or a string literal. The two
/// are observably equivalent through [`PropertyName::name`]; the
/// normalizing [`PropertyName::new`] picks the encoding so consumers never
/// have to.
///
/// # Examples
/// ```
/// use trellis_ir::{Position, PropertyName};
///
/// // Identifier-shaped names become bare identifiers...
/// let key = PropertyName::new("field", Position::NONE);
/// assert!(matches!(key, PropertyName::Ident(_)));
/// assert_eq!(key.name(), "field");
///
/// // ...anything else falls back to a string key.
/// let key = PropertyName::new("not-an-ident", Position::NONE);
/// assert!(matches!(key, PropertyName::StringLiteral(_)));
/// assert_eq!(key.name(), "not-an-ident");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyName {
    /// Bare identifier key (`obj.field`, `{ field: ... }`)
    Ident(Ident),

    /// String key (`obj["a-b"]`, `{ "a-b": ... }`)
    StringLiteral(StringLiteral),
}

impl PropertyName {
    /// Normalizing constructor.
    ///
    /// Yields an [`Ident`] whenever `name` satisfies the identifier
    /// grammar and a [`StringLiteral`] otherwise. Total: the string key is
    /// always a safe fallback.
    pub fn new(name: impl Into<String>, pos: Position) -> PropertyName {
        match Ident::new(name, pos) {
            Ok(ident) => PropertyName::Ident(ident),
            Err(TreeError::InvalidIdentifier(name)) => {
                PropertyName::StringLiteral(StringLiteral::new(name, pos))
            }
        }
    }

    /// The underlying name, whichever encoding was chosen.
    ///
    /// Total inverse of [`PropertyName::new`]:
    /// `PropertyName::new(s, pos).name() == s` for every string `s`.
    pub fn name(&self) -> &str {
        match self {
            PropertyName::Ident(ident) => ident.name(),
            PropertyName::StringLiteral(lit) => &lit.value,
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            PropertyName::Ident(ident) => ident.pos(),
            PropertyName::StringLiteral(lit) => lit.pos,
        }
    }

    /// Recognize a tree node usable as a property key.
    ///
    /// Matches [`Tree::Ident`] and [`Tree::StringLiteral`]; every other
    /// shape is not a named key.
    pub fn from_tree(tree: &Tree) -> Option<PropertyName> {
        match tree {
            Tree::Ident(ident) => Some(PropertyName::Ident(ident.clone())),
            Tree::StringLiteral(lit) => Some(PropertyName::StringLiteral(lit.clone())),
            _ => None,
        }
    }
}

impl From<PropertyName> for Tree {
    fn from(name: PropertyName) -> Tree {
        match name {
            PropertyName::Ident(ident) => Tree::Ident(ident),
            PropertyName::StringLiteral(lit) => Tree::StringLiteral(lit),
        }
    }
}
