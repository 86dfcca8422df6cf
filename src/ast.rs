use crate::source::Position;

/// An abstract syntax tree (AST) node.
///
/// One parse produces one `Ast` tree. Statement forms (`NoOp`, `Compound`,
/// `Assign`) execute for their side effects; expression forms (`Number`,
/// `Variable`, `UnaryOp`, `BinaryOp`) evaluate to a numeric value. Each
/// node exclusively owns its children, so dropping the root drops the whole
/// tree. Nodes are never mutated after the parser builds them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Ast {
    /// An empty statement, produced at the end of a block.
    #[default]
    NoOp,
    /// A unary operation (e.g. negation or bitwise complement).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Position of the operator in the source code.
        position: Position,
    },
    /// A binary operation (addition, shifting, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the source code.
        position: Position,
    },
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Position of the literal in the source code.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position of the reference in the source code.
        position: Position,
    },
    /// A brace-delimited block of statements, evaluated in order.
    Compound {
        /// The statements inside the block.
        statements: Vec<Self>,
    },
    /// An assignment binding a name to the value of an expression.
    Assign {
        /// The name being assigned to.
        name:     String,
        /// The right-hand side expression.
        value:    Box<Self>,
        /// Position of the assigned name in the source code.
        position: Position,
    },
}

/// Represents a binary operator.
///
/// The four float-arithmetic operators work directly on `f64` values; the
/// remaining operators truncate their operands to `i64` first (see the
/// evaluator for the exact coercion rules). Assignment is not an operator —
/// it is its own statement form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`), on truncated integers
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise and (`&`), on truncated integers
    BitAnd,
    /// Bitwise or (`|`), on truncated integers
    BitOr,
    /// Bitwise exclusive or (`^`), on truncated integers
    BitXor,
    /// Left shift (`<<`), on truncated integers
    ShiftLeft,
    /// Right shift (`>>`), on truncated integers
    ShiftRight,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`), the value unchanged.
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise complement (`~x`), on the truncated integer.
    Not,
}

impl std::fmt::Display for BinaryOperator {
    /// Writes the operator as it appears in source code.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.to_string(), "**");
    /// assert_eq!(BinaryOperator::ShiftLeft.to_string(), "<<");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "~",
        };
        write!(f, "{operator}")
    }
}
