use serde::Serialize;

use crate::ir::operators::{BinaryOperator, UnaryOperator};
use crate::ir::position::Position;
use crate::ir::property::PropertyName;

/// Check a string against the identifier grammar.
///
/// The grammar is a stable contract shared with every consumer of the
/// trees: the first character must not be a digit, and every subsequent
/// character must be a letter, a digit, `$`, or `_`. Empty names are
/// rejected. Unicode letter/digit classification is the host's
/// ([`char::is_numeric`] / [`char::is_alphanumeric`]).
///
/// # Examples
/// ```
/// use trellis_ir::ir::trees::is_valid_identifier;
///
/// assert!(is_valid_identifier("a_1$"));
/// assert!(!is_valid_identifier("3bad"));
/// assert!(!is_valid_identifier("a-b"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => false,
        Some(first) => {
            !first.is_numeric() && chars.all(|c| c.is_alphanumeric() || c == '$' || c == '_')
        }
    }
}

/// Errors raised by tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Identifier name violating the identifier grammar, carrying the
    /// offending name
    InvalidIdentifier(String),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidIdentifier(name) => {
                write!(f, "Invalid identifier: {:?} does not match the identifier grammar", name)
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Validated identifier node.
///
/// Used both as an expression (a variable reference) and as a property
/// name in dotted member access, object literals, and class members.
/// The name is guaranteed to satisfy [`is_valid_identifier`]; the only
/// way to obtain an `Ident` is through the fallible [`Ident::new`].
///
/// # Examples
/// ```
/// use trellis_ir::{Ident, Position, TreeError};
///
/// let ok = Ident::new("count", Position::NONE).unwrap();
/// assert_eq!(ok.name(), "count");
///
/// let err = Ident::new("3bad", Position::NONE).unwrap_err();
/// assert_eq!(err, TreeError::InvalidIdentifier("3bad".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    name: String,
    pos: Position,
}

impl Ident {
    /// Construct a validated identifier.
    ///
    /// Fails with [`TreeError::InvalidIdentifier`] (carrying the
    /// offending name back to the caller) when `name` violates the
    /// identifier grammar. Empty names are rejected explicitly.
    pub fn new(name: impl Into<String>, pos: Position) -> Result<Ident, TreeError> {
        let name = name.into();
        if is_valid_identifier(&name) {
            Ok(Ident { name, pos })
        } else {
            Err(TreeError::InvalidIdentifier(name))
        }
    }

    /// The identifier text.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pos(&self) -> Position {
        self.pos
    }
}

/// String literal node.
///
/// Doubles as a property key: an object field or member access whose key
/// is not identifier-shaped is carried as a `StringLiteral`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral {
    pub value: String,
    pub pos: Position,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>, pos: Position) -> StringLiteral {
        StringLiteral {
            value: value.into(),
            pos,
        }
    }
}

/// Syntax tree node for the JavaScript-like target language.
///
/// This is the representation a compiler backend works on between code
/// generation and emission: upstream passes build these trees, rewriting
/// passes (see [`crate::rewrite`]) produce new ones, and an external
/// emitter serializes the final tree.
///
/// Trees are immutable value structures with derived structural equality.
/// Every variant carries a [`Position`]; the sole exception is the
/// [`Tree::Empty`] sentinel, whose position is [`Position::NONE`].
/// Children are uniquely owned (`Box` / `Vec`), so a subtree never
/// appears under two parents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Tree {
    /// Empty-tree sentinel.
    ///
    /// Stands in for an absent child, e.g. a `VarDef` without an
    /// initializer or a `ClassDef` without a parent class.
    Empty,

    /// Validated identifier in expression position
    ///
    /// # Example
    /// ```text
    /// count
    /// ```
    Ident(Ident),

    /// String literal (also usable as a property key)
    ///
    /// # Example
    /// ```text
    /// "hello"
    /// ```
    StringLiteral(StringLiteral),

    // Definitions
    /// Variable definition
    ///
    /// The initializer is [`Tree::Empty`] when the variable is declared
    /// without a value.
    ///
    /// # Example
    /// ```text
    /// var x = 1;
    /// ```
    VarDef {
        name: Ident,
        init: Box<Tree>,
        pos: Position,
    },

    /// Named function definition
    ///
    /// # Example
    /// ```text
    /// function f(a, b) { return a; }
    /// ```
    FunDef {
        name: Ident,
        params: Vec<Ident>,
        body: Box<Tree>,
        pos: Position,
    },

    // Statements
    /// Empty statement (`;`)
    Skip { pos: Position },

    /// Statement block with a trailing value
    ///
    /// The leading `stats` are always in statement position; whether the
    /// trailing `expr` produces a value depends on where the block itself
    /// sits (its value is discarded in statement position).
    ///
    /// # Example
    /// ```text
    /// { var tmp = f(); tmp + 1 }
    /// ```
    Block {
        stats: Vec<Tree>,
        expr: Box<Tree>,
        pos: Position,
    },

    /// Assignment
    ///
    /// # Example
    /// ```text
    /// x.field = y
    /// ```
    Assign {
        lhs: Box<Tree>,
        rhs: Box<Tree>,
        pos: Position,
    },

    /// Return statement
    ///
    /// # Example
    /// ```text
    /// return x + 1;
    /// ```
    Return { expr: Box<Tree>, pos: Position },

    /// Conditional
    ///
    /// Valid in both statement and expression position; the branches take
    /// the context of the `If` itself.
    ///
    /// # Example
    /// ```text
    /// if (cond) { a() } else { b() }
    /// ```
    If {
        cond: Box<Tree>,
        then_branch: Box<Tree>,
        else_branch: Box<Tree>,
        pos: Position,
    },

    /// While loop
    ///
    /// # Example
    /// ```text
    /// while (i < n) { i = i + 1; }
    /// ```
    While {
        cond: Box<Tree>,
        body: Box<Tree>,
        pos: Position,
    },

    /// Try/catch/finally
    ///
    /// `err_var` binds the caught error inside `handler`. The finalizer
    /// never produces a value, whatever position the `Try` sits in; use
    /// [`Tree::Empty`] / [`Tree::Skip`] for an absent handler or
    /// finalizer.
    ///
    /// # Example
    /// ```text
    /// try { f() } catch (e) { g(e) } finally { h() }
    /// ```
    Try {
        block: Box<Tree>,
        err_var: Ident,
        handler: Box<Tree>,
        finalizer: Box<Tree>,
        pos: Position,
    },

    /// Throw statement
    ///
    /// # Example
    /// ```text
    /// throw new Error("boom");
    /// ```
    Throw { expr: Box<Tree>, pos: Position },

    /// Loop break (`break;`)
    Break { pos: Position },

    /// Loop continue (`continue;`)
    Continue { pos: Position },

    // Expressions
    /// Dotted member access
    ///
    /// The member is always identifier-shaped. Prefer building through
    /// [`crate::ir::access::make_select`], which picks between the dotted
    /// and bracketed form automatically.
    ///
    /// # Example
    /// ```text
    /// obj.field
    /// ```
    DotSelect {
        qualifier: Box<Tree>,
        item: Ident,
        pos: Position,
    },

    /// Bracketed (computed) member access
    ///
    /// # Examples
    /// ```text
    /// obj["not-an-ident"]
    /// arr[i + 1]
    /// ```
    BracketSelect {
        qualifier: Box<Tree>,
        item: Box<Tree>,
        pos: Position,
    },

    /// Function application
    ///
    /// # Example
    /// ```text
    /// f(a, b)
    /// ```
    Apply {
        fun: Box<Tree>,
        args: Vec<Tree>,
        pos: Position,
    },

    /// Anonymous function expression
    ///
    /// # Example
    /// ```text
    /// function(a) { return a; }
    /// ```
    Function {
        params: Vec<Ident>,
        body: Box<Tree>,
        pos: Position,
    },

    /// Unary operation
    ///
    /// # Example
    /// ```text
    /// !flag
    /// ```
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Tree>,
        pos: Position,
    },

    /// Binary operation
    ///
    /// # Example
    /// ```text
    /// a + b
    /// ```
    BinaryOp {
        op: BinaryOperator,
        left: Box<Tree>,
        right: Box<Tree>,
        pos: Position,
    },

    /// Constructor invocation
    ///
    /// # Example
    /// ```text
    /// new Point(1, 2)
    /// ```
    New {
        ctor: Box<Tree>,
        args: Vec<Tree>,
        pos: Position,
    },

    /// The `this` reference
    This { pos: Position },

    // Literals
    /// The `undefined` literal
    Undefined { pos: Position },

    /// The `null` literal
    Null { pos: Position },

    /// Boolean literal
    BooleanLiteral { value: bool, pos: Position },

    /// Integer literal (64-bit)
    IntLiteral { value: i64, pos: Position },

    /// Floating-point literal
    DoubleLiteral { value: f64, pos: Position },

    // Compounds
    /// Array literal, order-preserving
    ///
    /// # Example
    /// ```text
    /// [1, 2, 3]
    /// ```
    ArrayConstr { items: Vec<Tree>, pos: Position },

    /// Object literal, order-preserving
    ///
    /// Keys need not be unique; whether duplicates resolve last-wins is
    /// the emitter's concern, not the representation's.
    ///
    /// # Example
    /// ```text
    /// { name: $name, "not-an-ident": 1 }
    /// ```
    ObjectConstr {
        fields: Vec<(PropertyName, Tree)>,
        pos: Position,
    },

    // Class forms (ES6-level; lowered to pre-ES6 forms by external passes)
    /// Class definition
    ///
    /// The parent is [`Tree::Empty`] when the class has no `extends`
    /// clause.
    ///
    /// # Example
    /// ```text
    /// class Point extends Base { ... }
    /// ```
    ClassDef {
        name: Ident,
        parent: Box<Tree>,
        members: Vec<Tree>,
        pos: Position,
    },

    /// Class method definition
    ///
    /// # Example
    /// ```text
    /// dist(other) { ... }
    /// ```
    MethodDef {
        name: PropertyName,
        params: Vec<Ident>,
        body: Box<Tree>,
        pos: Position,
    },

    /// Class getter definition
    ///
    /// # Example
    /// ```text
    /// get size() { ... }
    /// ```
    GetterDef {
        name: PropertyName,
        body: Box<Tree>,
        pos: Position,
    },

    /// Class setter definition
    ///
    /// # Example
    /// ```text
    /// set size(v) { ... }
    /// ```
    SetterDef {
        name: PropertyName,
        param: Ident,
        body: Box<Tree>,
        pos: Position,
    },

    /// The `super` reference
    Super { pos: Position },
}

impl Tree {
    /// The source position this node carries.
    ///
    /// [`Tree::Empty`] carries the [`Position::NONE`] sentinel.
    pub fn pos(&self) -> Position {
        match self {
            Tree::Empty => Position::NONE,
            Tree::Ident(ident) => ident.pos(),
            Tree::StringLiteral(lit) => lit.pos,
            Tree::VarDef { pos, .. }
            | Tree::FunDef { pos, .. }
            | Tree::Skip { pos }
            | Tree::Block { pos, .. }
            | Tree::Assign { pos, .. }
            | Tree::Return { pos, .. }
            | Tree::If { pos, .. }
            | Tree::While { pos, .. }
            | Tree::Try { pos, .. }
            | Tree::Throw { pos, .. }
            | Tree::Break { pos }
            | Tree::Continue { pos }
            | Tree::DotSelect { pos, .. }
            | Tree::BracketSelect { pos, .. }
            | Tree::Apply { pos, .. }
            | Tree::Function { pos, .. }
            | Tree::UnaryOp { pos, .. }
            | Tree::BinaryOp { pos, .. }
            | Tree::New { pos, .. }
            | Tree::This { pos }
            | Tree::Undefined { pos }
            | Tree::Null { pos }
            | Tree::BooleanLiteral { pos, .. }
            | Tree::IntLiteral { pos, .. }
            | Tree::DoubleLiteral { pos, .. }
            | Tree::ArrayConstr { pos, .. }
            | Tree::ObjectConstr { pos, .. }
            | Tree::ClassDef { pos, .. }
            | Tree::MethodDef { pos, .. }
            | Tree::GetterDef { pos, .. }
            | Tree::SetterDef { pos, .. }
            | Tree::Super { pos } => *pos,
        }
    }
}

#[test]
fn test_identifier_grammar() {
    assert!(is_valid_identifier("x"));
    assert!(is_valid_identifier("a_1$"));
    assert!(is_valid_identifier("$tmp"));
    assert!(is_valid_identifier("_private"));
    assert!(!is_valid_identifier(""));
    assert!(!is_valid_identifier("3bad"));
    assert!(!is_valid_identifier("a-b"));
    assert!(!is_valid_identifier("a b"));
}

#[test]
fn test_ident_construction() {
    let ident = Ident::new("ok$_1", Position::new(4)).unwrap();
    assert_eq!(ident.name(), "ok$_1");
    assert_eq!(ident.pos(), Position::new(4));

    assert_eq!(
        Ident::new("1abc", Position::NONE),
        Err(TreeError::InvalidIdentifier("1abc".to_string()))
    );
}

#[test]
fn test_empty_tree_position() {
    assert_eq!(Tree::Empty.pos(), Position::NONE);
    let skip = Tree::Skip {
        pos: Position::new(9),
    };
    assert_eq!(skip.pos(), Position::new(9));
}
