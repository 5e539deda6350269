use serde::Serialize;

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    /// Logical negation (`!`)
    Not,
    /// Arithmetic negation (`-`)
    Neg,
    /// Unary plus (`+`)
    Pos,
    /// Bitwise complement (`~`)
    BitNot,
    /// Type query (`typeof`)
    TypeOf,
    /// Discard to `undefined` (`void`)
    Void,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    // Arithmetic
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,

    // Comparison
    /// Loose equality (`==`)
    Eq,
    /// Loose inequality (`!=`)
    NotEq,
    /// Strict equality (`===`)
    StrictEq,
    /// Strict inequality (`!==`)
    StrictNotEq,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    LtEq,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    GtEq,

    // Logical
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,

    // Bitwise
    /// Bitwise AND (`&`)
    BitAnd,
    /// Bitwise OR (`|`)
    BitOr,
    /// Bitwise XOR (`^`)
    BitXor,
    /// Shift left (`<<`)
    Shl,
    /// Sign-propagating shift right (`>>`)
    Shr,
    /// Zero-filling shift right (`>>>`)
    UnsignedShr,

    // Relational keywords
    /// Property membership (`in`)
    In,
    /// Prototype-chain test (`instanceof`)
    Instanceof,
}
