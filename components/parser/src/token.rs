//! Tokens produced by the lexer

use std::fmt;

use core_types::{Number, SourcePosition};

/// Family a token kind belongs to.
///
/// Every kind maps to exactly one category, so membership tests are a single
/// match rather than a scan over the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Numbers and names
    Value,
    /// Infix operators
    BinaryOperator,
    /// Prefix operators and the math functions
    UnaryOperator,
    /// Parentheses
    Grouping,
    /// `print`, `;` and end of input
    Statement,
}

/// Closed catalog of token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Values
    /// Numeric literal
    Number,
    /// Identifier that is not a keyword
    Name,

    // Keywords
    /// `print`
    Print,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `ln`
    Ln,
    /// `lb`
    Lb,
    /// `lg`
    Lg,

    // Additive
    /// Binary `+`
    Plus,
    /// Binary `-`
    Minus,
    /// Prefix `+`
    UnaryPlus,
    /// Prefix `-`
    UnaryMinus,

    // Multiplicative
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `//`
    SlashSlash,
    /// `%`
    Percent,

    // Shifts
    /// `<<<` arithmetic shift left
    LtLtLt,
    /// `>>>` arithmetic shift right
    GtGtGt,
    /// `<<` logical shift left
    LtLt,
    /// `>>` logical shift right
    GtGt,

    // Bitwise
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,

    // Logical
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `!`
    Bang,

    // Comparison
    /// `==`
    EqEq,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<=>`
    LtEqGt,

    /// `=`
    Assign,

    // Grouping
    /// `(`
    LParen,
    /// `)`
    RParen,

    // Statement
    /// `;`
    Semicolon,
    /// End of transmission or end of stream
    EndOfInput,
}

impl TokenKind {
    /// Map a keyword spelling to its kind. Matching is exact and
    /// case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "print" => Some(TokenKind::Print),
            "sin" => Some(TokenKind::Sin),
            "cos" => Some(TokenKind::Cos),
            "ln" => Some(TokenKind::Ln),
            "lb" => Some(TokenKind::Lb),
            "lg" => Some(TokenKind::Lg),
            _ => None,
        }
    }

    /// The category this kind belongs to.
    pub fn category(self) -> Category {
        use TokenKind::*;
        match self {
            Number | Name => Category::Value,
            Sin | Cos | Ln | Lb | Lg | UnaryPlus | UnaryMinus | Tilde | Bang => {
                Category::UnaryOperator
            }
            Plus | Minus | Star | Slash | SlashSlash | Percent | LtLtLt | GtGtGt | LtLt
            | GtGt | Amp | Pipe | Caret | AmpAmp | PipePipe | EqEq | BangEq | Lt | Gt | LtEq
            | GtEq | LtEqGt | Assign => Category::BinaryOperator,
            LParen | RParen => Category::Grouping,
            Print | Semicolon | EndOfInput => Category::Statement,
        }
    }

    /// Check if this kind is an infix operator
    pub fn is_binary_operator(self) -> bool {
        self.category() == Category::BinaryOperator
    }

    /// Check if this kind is a prefix operator or math function
    pub fn is_unary_operator(self) -> bool {
        self.category() == Category::UnaryOperator
    }

    /// Check if this kind is a parenthesis
    pub fn is_grouping(self) -> bool {
        self.category() == Category::Grouping
    }

    /// Check if this kind is a number or a name
    pub fn is_value_like(self) -> bool {
        self.category() == Category::Value
    }

    /// Whether a `+` or `-` following this kind is binary.
    pub(crate) fn ends_operand(self) -> bool {
        self.is_value_like() || self == TokenKind::RParen
    }

    /// Source spelling, or a description for kinds without a fixed one.
    pub fn describe(self) -> &'static str {
        use TokenKind::*;
        match self {
            Number => "number",
            Name => "name",
            Print => "print",
            Sin => "sin",
            Cos => "cos",
            Ln => "ln",
            Lb => "lb",
            Lg => "lg",
            Plus | UnaryPlus => "+",
            Minus | UnaryMinus => "-",
            Star => "*",
            Slash => "/",
            SlashSlash => "//",
            Percent => "%",
            LtLtLt => "<<<",
            GtGtGt => ">>>",
            LtLt => "<<",
            GtGt => ">>",
            Amp => "&",
            Pipe => "|",
            Caret => "^",
            Tilde => "~",
            AmpAmp => "&&",
            PipePipe => "||",
            Bang => "!",
            EqEq => "==",
            BangEq => "!=",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            LtEqGt => "<=>",
            Assign => "=",
            LParen => "(",
            RParen => ")",
            Semicolon => ";",
            EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Payload carried by value tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Value of a numeric literal
    Number(Number),
    /// Text of a name, verbatim
    Name(String),
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Payload for number and name tokens
    pub literal: Option<Literal>,
    /// Line on which the token began
    pub position: SourcePosition,
}

impl Token {
    /// A token without payload
    pub fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Self {
            kind,
            literal: None,
            position,
        }
    }

    /// A number token
    pub fn number(value: Number, position: SourcePosition) -> Self {
        Self {
            kind: TokenKind::Number,
            literal: Some(Literal::Number(value)),
            position,
        }
    }

    /// A name token
    pub fn name(text: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind: TokenKind::Name,
            literal: Some(Literal::Name(text.into())),
            position,
        }
    }

    /// Numeric payload, if any
    pub fn as_number(&self) -> Option<Number> {
        match &self.literal {
            Some(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Name payload, if any
    pub fn as_name(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Name(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(Literal::Number(n)) => write!(f, "number({})", n),
            Some(Literal::Name(s)) => write!(f, "name({})", s),
            None => match self.kind {
                TokenKind::UnaryPlus => f.write_str("unary +"),
                TokenKind::UnaryMinus => f.write_str("unary -"),
                kind => write!(f, "{}", kind),
            },
        }
    }
}
