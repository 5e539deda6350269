pub mod ir;
pub mod rewrite;

pub use ir::access::{make_apply_method, make_select, match_apply_method, match_select};
pub use ir::{
    BinaryOperator, Ident, Position, PropertyName, StringLiteral, Tree, TreeError, UnaryOperator,
    is_valid_identifier,
};
pub use rewrite::{
    IdentityTransformer, Transformer, walk_definition, walk_expression, walk_statement,
};
