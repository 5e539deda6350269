//! Context-aware tree rewriting.
//!
//! The target grammar distinguishes statement and expression positions,
//! and several constructs (blocks, conditionals, loops, try/throw) are
//! valid in either — but their children must be recursed into with the
//! context implied by where each child sits, not the context of the parent
//! call. This module knows that routing for every node kind so concrete
//! passes don't have to.
//!
//! A pass implements [`Transformer`] and overrides an entry point for the
//! shapes it cares about, delegating to the matching `walk_*` function for
//! everything else:
//!
//! ```
//! use trellis_ir::{Position, Transformer, Tree};
//! use trellis_ir::rewrite::walk_expression;
//!
//! /// Replaces `undefined` with the integer zero, everywhere.
//! struct ZeroUndefined;
//!
//! impl Transformer for ZeroUndefined {
//!     fn rewrite_expression(&mut self, tree: Tree) -> Tree {
//!         match tree {
//!             Tree::Undefined { pos } => Tree::IntLiteral { value: 0, pos },
//!             other => walk_expression(self, other),
//!         }
//!     }
//! }
//!
//! let tree = Tree::Return {
//!     expr: Box::new(Tree::Undefined { pos: Position::new(3) }),
//!     pos: Position::new(1),
//! };
//! let rewritten = ZeroUndefined.rewrite_statement(tree);
//! assert_eq!(
//!     rewritten,
//!     Tree::Return {
//!         expr: Box::new(Tree::IntLiteral { value: 0, pos: Position::new(3) }),
//!         pos: Position::new(1),
//!     }
//! );
//! ```
//!
//! The framework is total (unrecognized shapes pass through unchanged) and
//! pure: every rebuild is a fresh node carrying the original node's
//! position, and positions are only ever propagated, never synthesized.
//!
//! Recursion is plain descent, so call-stack depth is bounded by tree
//! depth; pathologically deep inputs (long `BinaryOp` chains, say) can
//! exhaust the stack.

use crate::ir::trees::Tree;

/// A recursive, context-aware tree transformer.
///
/// All three entry points default to the full structural rebuild performed
/// by [`walk_statement`] / [`walk_expression`] / [`walk_definition`],
/// which is observably the identity transform. Override the entry points
/// for the shapes your pass changes; the walk functions call back into
/// `self` for every child, so overrides are honored at any depth.
pub trait Transformer {
    /// Rewrite a tree sitting in statement position.
    fn rewrite_statement(&mut self, tree: Tree) -> Tree {
        walk_statement(self, tree)
    }

    /// Rewrite a tree sitting in expression position.
    fn rewrite_expression(&mut self, tree: Tree) -> Tree {
        walk_expression(self, tree)
    }

    /// Rewrite a class-member definition.
    ///
    /// Applies to `MethodDef`, `GetterDef`, and `SetterDef`; any other
    /// node passes through unchanged.
    fn rewrite_definition(&mut self, tree: Tree) -> Tree {
        walk_definition(self, tree)
    }
}

/// The default framework with no overrides: a pure identity transform
/// that still exercises the full structural rebuild.
pub struct IdentityTransformer;

impl Transformer for IdentityTransformer {}

/// Syntactic position of the tree currently being rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Statement,
    Expression,
}

fn recurse<T: Transformer + ?Sized>(t: &mut T, tree: Tree, ctx: Context) -> Tree {
    match ctx {
        Context::Statement => t.rewrite_statement(tree),
        Context::Expression => t.rewrite_expression(tree),
    }
}

/// Structural recursion for statement position.
///
/// Statement-shaped children are rewritten as statements, value-producing
/// children as expressions.
pub fn walk_statement<T: Transformer + ?Sized>(t: &mut T, tree: Tree) -> Tree {
    walk(t, tree, Context::Statement)
}

/// Structural recursion for expression position.
///
/// Same shapes as [`walk_statement`], but positions that denote "the
/// produced value" (a block's trailing expression, a conditional's
/// branches) switch to expression rewriting.
pub fn walk_expression<T: Transformer + ?Sized>(t: &mut T, tree: Tree) -> Tree {
    walk(t, tree, Context::Expression)
}

/// Structural recursion for class-member definitions.
///
/// Member bodies are statement sequences, never values, so they are
/// rewritten in statement context. Non-definition nodes pass through
/// unchanged, without recursion.
pub fn walk_definition<T: Transformer + ?Sized>(t: &mut T, tree: Tree) -> Tree {
    match tree {
        Tree::MethodDef {
            name,
            params,
            body,
            pos,
        } => Tree::MethodDef {
            name,
            params,
            body: Box::new(t.rewrite_statement(*body)),
            pos,
        },
        Tree::GetterDef { name, body, pos } => Tree::GetterDef {
            name,
            body: Box::new(t.rewrite_statement(*body)),
            pos,
        },
        Tree::SetterDef {
            name,
            param,
            body,
            pos,
        } => Tree::SetterDef {
            name,
            param,
            body: Box::new(t.rewrite_statement(*body)),
            pos,
        },
        other => other,
    }
}

fn walk<T: Transformer + ?Sized>(t: &mut T, tree: Tree, ctx: Context) -> Tree {
    match tree {
        // Definitions: the initializer is a value, the body a statement
        // sequence, from either entry point.
        Tree::VarDef { name, init, pos } => Tree::VarDef {
            name,
            init: Box::new(t.rewrite_expression(*init)),
            pos,
        },
        Tree::FunDef {
            name,
            params,
            body,
            pos,
        } => Tree::FunDef {
            name,
            params,
            body: Box::new(t.rewrite_statement(*body)),
            pos,
        },

        // The trailing value takes the block's own context: discarded in
        // statement position, produced in expression position.
        Tree::Block { stats, expr, pos } => Tree::Block {
            stats: stats.into_iter().map(|s| t.rewrite_statement(s)).collect(),
            expr: Box::new(recurse(t, *expr, ctx)),
            pos,
        },

        Tree::Assign { lhs, rhs, pos } => Tree::Assign {
            lhs: Box::new(t.rewrite_expression(*lhs)),
            rhs: Box::new(t.rewrite_expression(*rhs)),
            pos,
        },
        Tree::Return { expr, pos } => Tree::Return {
            expr: Box::new(t.rewrite_expression(*expr)),
            pos,
        },
        Tree::Throw { expr, pos } => Tree::Throw {
            expr: Box::new(t.rewrite_expression(*expr)),
            pos,
        },

        // Branches take the conditional's own context.
        Tree::If {
            cond,
            then_branch,
            else_branch,
            pos,
        } => Tree::If {
            cond: Box::new(t.rewrite_expression(*cond)),
            then_branch: Box::new(recurse(t, *then_branch, ctx)),
            else_branch: Box::new(recurse(t, *else_branch, ctx)),
            pos,
        },
        Tree::While { cond, body, pos } => Tree::While {
            cond: Box::new(t.rewrite_expression(*cond)),
            body: Box::new(recurse(t, *body, ctx)),
            pos,
        },

        // Block and handler take the try's own context; the finalizer
        // never produces a value, so it stays a statement. The caught
        // error binder is untouched.
        Tree::Try {
            block,
            err_var,
            handler,
            finalizer,
            pos,
        } => Tree::Try {
            block: Box::new(recurse(t, *block, ctx)),
            err_var,
            handler: Box::new(recurse(t, *handler, ctx)),
            finalizer: Box::new(t.rewrite_statement(*finalizer)),
            pos,
        },

        Tree::DotSelect {
            qualifier,
            item,
            pos,
        } => Tree::DotSelect {
            qualifier: Box::new(t.rewrite_expression(*qualifier)),
            item,
            pos,
        },
        Tree::BracketSelect {
            qualifier,
            item,
            pos,
        } => Tree::BracketSelect {
            qualifier: Box::new(t.rewrite_expression(*qualifier)),
            item: Box::new(t.rewrite_expression(*item)),
            pos,
        },

        Tree::Apply { fun, args, pos } => Tree::Apply {
            fun: Box::new(t.rewrite_expression(*fun)),
            args: args.into_iter().map(|a| t.rewrite_expression(a)).collect(),
            pos,
        },
        Tree::New { ctor, args, pos } => Tree::New {
            ctor: Box::new(t.rewrite_expression(*ctor)),
            args: args.into_iter().map(|a| t.rewrite_expression(a)).collect(),
            pos,
        },

        Tree::Function { params, body, pos } => Tree::Function {
            params,
            body: Box::new(t.rewrite_statement(*body)),
            pos,
        },

        Tree::UnaryOp { op, operand, pos } => Tree::UnaryOp {
            op,
            operand: Box::new(t.rewrite_expression(*operand)),
            pos,
        },
        Tree::BinaryOp {
            op,
            left,
            right,
            pos,
        } => Tree::BinaryOp {
            op,
            left: Box::new(t.rewrite_expression(*left)),
            right: Box::new(t.rewrite_expression(*right)),
            pos,
        },

        Tree::ArrayConstr { items, pos } => Tree::ArrayConstr {
            items: items.into_iter().map(|i| t.rewrite_expression(i)).collect(),
            pos,
        },
        // Field values are expressions; keys are untouched.
        Tree::ObjectConstr { fields, pos } => Tree::ObjectConstr {
            fields: fields
                .into_iter()
                .map(|(key, value)| (key, t.rewrite_expression(value)))
                .collect(),
            pos,
        },

        // Members go through the definition entry point; the parent is an
        // expression.
        Tree::ClassDef {
            name,
            parent,
            members,
            pos,
        } => Tree::ClassDef {
            name,
            parent: Box::new(t.rewrite_expression(*parent)),
            members: members
                .into_iter()
                .map(|m| t.rewrite_definition(m))
                .collect(),
            pos,
        },

        // Leaves and member definitions: identity. Unrecognized shapes
        // falling through here keep the framework total.
        other => other,
    }
}
