//! Statement compiler
//!
//! Pulls tokens from a [`Lexer`] and emits one [`BytecodeChunk`] per
//! statement:
//!
//! ```text
//! statement  := ["print"] expression ";" | ";"
//! expression := unary (binary-op unary)*
//! unary      := prefix-op unary | primary
//! primary    := number | "(" expression ")"
//! ```
//!
//! Binary operators are left-associative and bind by the levels in
//! [`binary_operator`].

use bytecode_system::{BytecodeChunk, Opcode};
use core_types::Value;
use tracing::debug;

use crate::error::{unexpected_token, CompileError};
use crate::lexer::{CharSource, Lexer};
use crate::sink::{ErrorSink, StderrSink};
use crate::token::{Token, TokenKind};

/// Deepest nesting of parentheses and prefix operators one expression may use
pub const MAX_NESTING_DEPTH: usize = 256;

/// One compiled statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Bytecode for the statement's expression
    pub code: BytecodeChunk,
    /// Whether the result should be printed
    pub print: bool,
}

/// Compiles statements from a token stream
///
/// # Examples
///
/// ```
/// use parser::{Compiler, Lexer};
///
/// let mut compiler = Compiler::new(Lexer::new("print 1 + 2;".chars()));
/// let statement = compiler.compile_statement().unwrap().unwrap();
/// assert!(statement.print);
/// assert_eq!(statement.code.instruction_count(), 3);
/// ```
pub struct Compiler<S, E = StderrSink> {
    lexer: Lexer<S, E>,
    peeked: Option<Token>,
    finished: bool,
    depth: usize,
}

impl<S: CharSource, E: ErrorSink> Compiler<S, E> {
    /// Create a compiler reading from `lexer`
    pub fn new(lexer: Lexer<S, E>) -> Self {
        Self {
            lexer,
            peeked: None,
            finished: false,
            depth: 0,
        }
    }

    /// The underlying lexer
    pub fn lexer(&self) -> &Lexer<S, E> {
        &self.lexer
    }

    /// Whether the character stream has been fully consumed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Compile the next statement.
    ///
    /// Returns `Ok(None)` when no complete statement is available: an empty
    /// statement, or end of input. After an error the remainder of the
    /// failed statement is skipped.
    pub fn compile_statement(&mut self) -> Result<Option<Statement>, CompileError> {
        match self.statement() {
            Ok(statement) => Ok(statement),
            Err(error) => {
                debug!(%error, "compile error, resynchronizing");
                self.synchronize();
                Err(error)
            }
        }
    }

    fn statement(&mut self) -> Result<Option<Statement>, CompileError> {
        self.depth = 0;
        match self.peek_kind()? {
            TokenKind::EndOfInput => {
                self.consume_end_of_input();
                return Ok(None);
            }
            TokenKind::Semicolon => {
                self.advance()?;
                return Ok(None);
            }
            _ => {}
        }

        let print = if self.peek_kind()? == TokenKind::Print {
            self.advance()?;
            true
        } else {
            false
        };

        let mut code = BytecodeChunk::new();
        self.expression(&mut code, 0)?;

        match self.peek_kind()? {
            TokenKind::Semicolon => {
                self.advance()?;
            }
            TokenKind::EndOfInput => self.consume_end_of_input(),
            found => return Err(unexpected_token("';'", found, self.peek_line())),
        }

        debug!(instructions = code.instruction_count(), print, "compiled statement");
        Ok(Some(Statement { code, print }))
    }

    fn expression(&mut self, code: &mut BytecodeChunk, min_level: u8) -> Result<(), CompileError> {
        self.unary(code)?;

        loop {
            let kind = self.peek_kind()?;
            let (level, opcode) = match binary_operator(kind) {
                Some((level, opcode)) if level >= min_level => (level, opcode),
                _ => return Ok(()),
            };
            let token = self.advance()?;
            self.expression(code, level + 1)?;
            code.emit_with_position(opcode, token.position);
        }
    }

    /// Every `(` and prefix operator passes through here, so this is where
    /// nesting is counted.
    fn unary(&mut self, code: &mut BytecodeChunk) -> Result<(), CompileError> {
        let kind = self.peek_kind()?;
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(CompileError::NestingTooDeep {
                line: self.peek_line(),
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let result = self.unary_operand(kind, code);
        self.depth -= 1;
        result
    }

    fn unary_operand(
        &mut self,
        kind: TokenKind,
        code: &mut BytecodeChunk,
    ) -> Result<(), CompileError> {
        match unary_operator(kind) {
            Some(opcode) => {
                let token = self.advance()?;
                self.unary(code)?;
                code.emit_with_position(opcode, token.position);
                Ok(())
            }
            None => self.primary(code),
        }
    }

    fn primary(&mut self, code: &mut BytecodeChunk) -> Result<(), CompileError> {
        let kind = self.peek_kind()?;
        let line = self.peek_line();
        match kind {
            TokenKind::Number => {
                let token = self.advance()?;
                let value = token.as_number().unwrap_or_default();
                code.emit_with_position(Opcode::Push(Value::from(value)), token.position);
                Ok(())
            }
            TokenKind::LParen => {
                self.advance()?;
                self.expression(code, 0)?;
                match self.peek_kind()? {
                    TokenKind::RParen => {
                        self.advance()?;
                        Ok(())
                    }
                    found => Err(unexpected_token("')'", found, self.peek_line())),
                }
            }
            TokenKind::Name => {
                let name = self
                    .peeked
                    .as_ref()
                    .and_then(Token::as_name)
                    .unwrap_or_default()
                    .to_string();
                Err(CompileError::UnsupportedName { name, line })
            }
            found => Err(unexpected_token("expression", found, line)),
        }
    }

    /// Skip to just past the next `;` or end of input.
    fn synchronize(&mut self) {
        loop {
            match self.peek_kind() {
                Ok(TokenKind::Semicolon) => {
                    self.peeked = None;
                    return;
                }
                Ok(TokenKind::EndOfInput) => {
                    self.consume_end_of_input();
                    return;
                }
                Ok(_) => self.peeked = None,
                // Already reported through the sink; keep skipping.
                Err(_) => {}
            }
        }
    }

    fn consume_end_of_input(&mut self) {
        self.peeked = None;
        if self.lexer.is_exhausted() {
            self.finished = true;
        }
    }

    fn peek_kind(&mut self) -> Result<TokenKind, CompileError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.as_ref().map_or(TokenKind::EndOfInput, |t| t.kind))
    }

    fn peek_line(&self) -> u32 {
        self.peeked
            .as_ref()
            .map_or(self.lexer.line(), |t| t.position.line)
    }

    fn advance(&mut self) -> Result<Token, CompileError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }
}

/// Binding level and opcode of an infix operator; higher binds tighter.
fn binary_operator(kind: TokenKind) -> Option<(u8, Opcode)> {
    let entry = match kind {
        TokenKind::PipePipe => (1, Opcode::Or),
        TokenKind::AmpAmp => (2, Opcode::And),
        TokenKind::Pipe => (3, Opcode::BitOr),
        TokenKind::Caret => (4, Opcode::BitXor),
        TokenKind::Amp => (5, Opcode::BitAnd),
        TokenKind::EqEq => (6, Opcode::Equal),
        TokenKind::BangEq => (6, Opcode::NotEqual),
        TokenKind::Lt => (7, Opcode::LessThan),
        TokenKind::Gt => (7, Opcode::GreaterThan),
        TokenKind::LtEq => (7, Opcode::LessThanEqual),
        TokenKind::GtEq => (7, Opcode::GreaterThanEqual),
        TokenKind::LtEqGt => (7, Opcode::Compare),
        TokenKind::LtLtLt => (8, Opcode::ArithmeticShiftLeft),
        TokenKind::GtGtGt => (8, Opcode::ArithmeticShiftRight),
        TokenKind::LtLt => (8, Opcode::LogicalShiftLeft),
        TokenKind::GtGt => (8, Opcode::LogicalShiftRight),
        TokenKind::Plus => (9, Opcode::Add),
        TokenKind::Minus => (9, Opcode::Sub),
        TokenKind::Star => (10, Opcode::Mul),
        TokenKind::Slash => (10, Opcode::Div),
        TokenKind::SlashSlash => (10, Opcode::FloorDiv),
        TokenKind::Percent => (10, Opcode::Mod),
        _ => return None,
    };
    Some(entry)
}

fn unary_operator(kind: TokenKind) -> Option<Opcode> {
    match kind {
        TokenKind::UnaryPlus => Some(Opcode::Plus),
        TokenKind::UnaryMinus => Some(Opcode::Negate),
        TokenKind::Tilde => Some(Opcode::BitNot),
        TokenKind::Bang => Some(Opcode::Not),
        TokenKind::Sin => Some(Opcode::Sin),
        TokenKind::Cos => Some(Opcode::Cos),
        TokenKind::Ln => Some(Opcode::Ln),
        TokenKind::Lb => Some(Opcode::Lb),
        TokenKind::Lg => Some(Opcode::Lg),
        _ => None,
    }
}

/// Compile every statement in `source`, stopping at the first error.
///
/// Lexical errors go to standard error as well as being returned.
pub fn compile_source(source: &str) -> Result<Vec<Statement>, CompileError> {
    let mut compiler = Compiler::new(Lexer::new(source.chars()));
    let mut statements = Vec::new();
    while !compiler.is_finished() {
        if let Some(statement) = compiler.compile_statement()? {
            statements.push(statement);
        }
    }
    Ok(statements)
}

impl<S: CharSource, E: ErrorSink> Iterator for Compiler<S, E> {
    type Item = Result<Statement, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.compile_statement() {
                Ok(Some(statement)) => return Some(Ok(statement)),
                Ok(None) => continue,
                Err(error) => return Some(Err(error)),
            }
        }
        None
    }
}
