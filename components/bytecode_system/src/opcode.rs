//! Bytecode opcodes for the tally VM
//!
//! The catalog is closed: every opcode is a constant push, a unary operation
//! or a binary operation. There are no jumps; execution is strictly linear.

use core_types::Value;

/// Dispatch shape of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Push the embedded immediate value
    PushConstant,
    /// Pop one operand, push one result
    Unary,
    /// Pop the right operand, then the left, push one result
    Binary,
}

/// Bytecode opcodes for expression evaluation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Literals
    /// Push a constant onto the operand stack
    Push(Value),

    // Additive
    /// Add top two stack values
    Add,
    /// Subtract top from second-top
    Sub,
    /// Unary plus (identity)
    Plus,
    /// Unary minus
    Negate,

    // Multiplicative
    /// Multiply top two stack values
    Mul,
    /// Divide second-top by top
    Div,
    /// Divide and floor toward negative infinity
    FloorDiv,
    /// Truncated remainder of second-top by top
    Mod,

    // Shifts
    /// Arithmetic shift left (`<<<`)
    ArithmeticShiftLeft,
    /// Arithmetic shift right (`>>>`)
    ArithmeticShiftRight,
    /// Logical shift left (`<<`)
    LogicalShiftLeft,
    /// Logical shift right (`>>`)
    LogicalShiftRight,

    // Bitwise
    /// Bitwise and of the raw representations
    BitAnd,
    /// Bitwise or of the raw representations
    BitOr,
    /// Bitwise xor of the raw representations
    BitXor,
    /// Bitwise complement of the raw representation
    BitNot,

    // Logical
    /// Logical and, yielding 0 or 1
    And,
    /// Logical or, yielding 0 or 1
    Or,
    /// Logical not, yielding 0 or 1
    Not,

    // Math functions
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Natural logarithm
    Ln,
    /// Binary logarithm
    Lb,
    /// Common logarithm
    Lg,

    // Comparison
    /// Equality (==)
    Equal,
    /// Inequality (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Greater than (>)
    GreaterThan,
    /// Less than or equal (<=)
    LessThanEqual,
    /// Greater than or equal (>=)
    GreaterThanEqual,
    /// Three-way comparison (<=>), yielding -1, 0 or 1
    Compare,
}

impl Opcode {
    /// The dispatch shape of this opcode.
    pub fn shape(&self) -> Shape {
        match self {
            Opcode::Push(_) => Shape::PushConstant,
            Opcode::Plus
            | Opcode::Negate
            | Opcode::BitNot
            | Opcode::Not
            | Opcode::Sin
            | Opcode::Cos
            | Opcode::Ln
            | Opcode::Lb
            | Opcode::Lg => Shape::Unary,
            _ => Shape::Binary,
        }
    }

    /// Net change in operand stack depth when this opcode executes.
    pub fn stack_effect(&self) -> isize {
        match self.shape() {
            Shape::PushConstant => 1,
            Shape::Unary => 0,
            Shape::Binary => -1,
        }
    }

    /// Number of operands popped before the result is pushed.
    pub fn operand_count(&self) -> usize {
        match self.shape() {
            Shape::PushConstant => 0,
            Shape::Unary => 1,
            Shape::Binary => 2,
        }
    }

    /// Upper-case name used in disassembly and diagnostics.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Push(_) => "PUSH",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Plus => "UADD",
            Opcode::Negate => "USUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::FloorDiv => "FLOORDIV",
            Opcode::Mod => "MOD",
            Opcode::ArithmeticShiftLeft => "ASHL",
            Opcode::ArithmeticShiftRight => "ASHR",
            Opcode::LogicalShiftLeft => "SHL",
            Opcode::LogicalShiftRight => "SHR",
            Opcode::BitAnd => "BAND",
            Opcode::BitOr => "BOR",
            Opcode::BitXor => "BXOR",
            Opcode::BitNot => "BNOT",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Not => "NOT",
            Opcode::Sin => "SIN",
            Opcode::Cos => "COS",
            Opcode::Ln => "LN",
            Opcode::Lb => "LB",
            Opcode::Lg => "LG",
            Opcode::Equal => "EQ",
            Opcode::NotEqual => "NE",
            Opcode::LessThan => "LT",
            Opcode::GreaterThan => "GT",
            Opcode::LessThanEqual => "LE",
            Opcode::GreaterThanEqual => "GE",
            Opcode::Compare => "CMP",
        }
    }
}
