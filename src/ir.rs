//! # Trellis IR - Intermediate Syntax Trees
//!
//! This module defines the intermediate syntax tree for a JavaScript-like
//! target language: the representation a compiler backend works on between
//! code generation and code emission.
//!
//! ## Architecture Overview
//!
//! The IR module is organized into focused submodules:
//!
//! - **[position]** - Opaque source-position tokens, propagated but never interpreted
//! - **[operators]** - Unary and binary operators
//! - **[trees]** - The tree node hierarchy, identifier validation, errors
//! - **[property]** - The property-name capability and its normalizing constructor
//! - **[access]** - Normalized member access and method-call patterns
//!
//! ## Core Concepts
//!
//! ### Immutable value trees
//!
//! Nodes never change after construction; a rewrite always produces a new
//! tree. Children are uniquely owned, so the structure is strictly a tree
//! (no sharing, no cycles), which is what lets the rewriting framework in
//! [`crate::rewrite`] rebuild structurally.
//!
//! ### Smart constructors
//!
//! Some semantic constructs have two interchangeable physical encodings:
//!
//! - a property key is a bare identifier or a string literal
//!   ([`PropertyName::new`](property::PropertyName::new)),
//! - a named member access is dotted or bracketed
//!   ([`access::make_select`]),
//! - a method call is an application of a select
//!   ([`access::make_apply_method`]).
//!
//! The constructors normalize toward the identifier-shaped encoding; the
//! paired matchers recognize both encodings, so passes handle each concept
//! exactly once.
//!
//! ### Validation
//!
//! The only fallible construction is [`trees::Ident::new`], which enforces
//! the identifier grammar (first character not a digit; subsequent
//! characters letters, digits, `$`, or `_`). Everything else is total.
pub mod access;
pub mod operators;
pub mod position;
pub mod property;
pub mod trees;

pub use operators::{BinaryOperator, UnaryOperator};
pub use position::Position;
pub use property::PropertyName;
pub use trees::{Ident, StringLiteral, Tree, TreeError, is_valid_identifier};
