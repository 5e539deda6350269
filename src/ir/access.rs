//! Normalized member access and method calls.
//!
//! Dotted access (`obj.field`) and bracketed access with a string key
//! (`obj["field"]`) encode the same semantic construct. The paired
//! constructors and matchers here let every rewriting pass reason about
//! "named member access" and "method call" as single concepts, whichever
//! physical encoding a producer happened to build.

use crate::ir::position::Position;
use crate::ir::property::PropertyName;
use crate::ir::trees::{Ident, StringLiteral, Tree, TreeError};

/// Build a named member access, picking the physical encoding.
///
/// Yields [`Tree::DotSelect`] whenever the property's name satisfies the
/// identifier grammar. A [`PropertyName::StringLiteral`] whose value
/// happens to be identifier-shaped degenerates to the dotted form too.
/// Everything else becomes a [`Tree::BracketSelect`] with a string-literal
/// index.
///
/// # Examples
/// ```
/// use trellis_ir::{make_select, Position, PropertyName, Tree};
///
/// let q = Tree::This { pos: Position::NONE };
/// let sel = make_select(q, PropertyName::new("field", Position::NONE), Position::NONE);
/// assert!(matches!(sel, Tree::DotSelect { .. }));
/// ```
pub fn make_select(qualifier: Tree, property: PropertyName, pos: Position) -> Tree {
    match property {
        PropertyName::Ident(item) => Tree::DotSelect {
            qualifier: Box::new(qualifier),
            item,
            pos,
        },
        PropertyName::StringLiteral(lit) => {
            let StringLiteral { value, pos: key_pos } = lit;
            match Ident::new(value, key_pos) {
                Ok(item) => Tree::DotSelect {
                    qualifier: Box::new(qualifier),
                    item,
                    pos,
                },
                Err(TreeError::InvalidIdentifier(value)) => Tree::BracketSelect {
                    qualifier: Box::new(qualifier),
                    item: Box::new(Tree::StringLiteral(StringLiteral::new(value, key_pos))),
                    pos,
                },
            }
        }
    }
}

/// Recognize a named member access in either physical encoding.
///
/// Matches [`Tree::DotSelect`] unconditionally, and
/// [`Tree::BracketSelect`] only when the index is a string literal — a
/// computed index is not a *named* access and does not match.
pub fn match_select(tree: &Tree) -> Option<(&Tree, PropertyName)> {
    match tree {
        Tree::DotSelect {
            qualifier, item, ..
        } => Some((qualifier, PropertyName::Ident(item.clone()))),
        Tree::BracketSelect {
            qualifier, item, ..
        } => match item.as_ref() {
            Tree::StringLiteral(lit) => {
                Some((qualifier, PropertyName::StringLiteral(lit.clone())))
            }
            _ => None,
        },
        _ => None,
    }
}

/// Build a method call: `receiver.method(args)`.
///
/// Composes [`make_select`] with [`Tree::Apply`], so the member access is
/// normalized the same way a plain select would be.
pub fn make_apply_method(
    receiver: Tree,
    method: PropertyName,
    args: Vec<Tree>,
    pos: Position,
) -> Tree {
    Tree::Apply {
        fun: Box::new(make_select(receiver, method, pos)),
        args,
        pos,
    }
}

/// Recognize "call a method on a receiver" as a structural pattern.
///
/// Matches any [`Tree::Apply`] whose callee is a recognized select, and is
/// therefore agnostic to which physical encoding the select uses.
pub fn match_apply_method(tree: &Tree) -> Option<(&Tree, PropertyName, &[Tree])> {
    match tree {
        Tree::Apply { fun, args, .. } => {
            match_select(fun).map(|(receiver, method)| (receiver, method, args.as_slice()))
        }
        _ => None,
    }
}
