//! Tally lexer - turns a pull-based character stream into tokens
//!
//! The lexer holds one character of lookahead, the current line and the kind
//! of the last token it emitted. That last kind is the only history it keeps;
//! it decides whether `+` and `-` are binary or unary.

use core_types::{Number, SourcePosition};
use tracing::{debug, trace};

use crate::error::LexError;
use crate::sink::{ErrorSink, StderrSink};
use crate::token::{Token, TokenKind};

/// Capacity of the identifier buffer
pub const MAX_IDENTIFIER_LEN: usize = 256;
/// Longest name a name token can carry
pub const MAX_NAME_LEN: usize = 32;
/// Capacity of the literal buffer, per digit run
pub const MAX_NUMBER_LEN: usize = 256;

/// End-of-transmission control character
const END_OF_TRANSMISSION: char = '\u{4}';
/// Starts a comment running to end of line
const COMMENT_CHAR: char = '#';

/// A pull interface over characters. `None` means the stream has ended.
pub trait CharSource {
    /// Next character, or `None` at end of stream
    fn next_char(&mut self) -> Option<char>;
}

impl<I> CharSource for I
where
    I: Iterator<Item = char>,
{
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Lexer for tally source text
///
/// # Examples
///
/// ```
/// use parser::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("3-2".chars());
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Minus);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
pub struct Lexer<S, E = StderrSink> {
    source: S,
    lookahead: Option<char>,
    line: u32,
    last: Option<TokenKind>,
    sink: E,
    finished: bool,
}

impl<S: CharSource> Lexer<S> {
    /// Create a lexer that reports errors to standard error
    pub fn new(source: S) -> Self {
        Self::with_sink(source, StderrSink)
    }
}

impl<S: CharSource, E: ErrorSink> Lexer<S, E> {
    /// Create a lexer that reports errors to `sink`
    pub fn with_sink(mut source: S, sink: E) -> Self {
        let lookahead = source.next_char();
        Self {
            source,
            lookahead,
            line: 1,
            last: None,
            sink,
            finished: false,
        }
    }

    /// Current line number (1-based)
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether the underlying stream has run dry
    pub fn is_exhausted(&self) -> bool {
        self.lookahead.is_none()
    }

    /// The error sink
    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Mutable access to the error sink
    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// Scan the next token.
    ///
    /// Errors are handed to the sink and then returned. Characters that
    /// start no token are skipped.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.scan_token() {
            Ok(token) => {
                trace!(kind = ?token.kind, line = token.position.line, "token");
                self.last = match token.kind {
                    TokenKind::EndOfInput => None,
                    kind => Some(kind),
                };
                Ok(token)
            }
            Err(error) => {
                debug!(%error, "lexical error");
                self.sink.report(&error);
                Err(error)
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_whitespace_and_comments();

            let start = SourcePosition::new(self.line);
            let ch = match self.advance() {
                Some(ch) => ch,
                None => return Ok(Token::new(TokenKind::EndOfInput, start)),
            };

            let kind = match ch {
                END_OF_TRANSMISSION => TokenKind::EndOfInput,
                ';' => TokenKind::Semicolon,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '*' => TokenKind::Star,
                '%' => TokenKind::Percent,
                '^' => TokenKind::Caret,
                '~' => TokenKind::Tilde,

                '+' => {
                    if self.follows_operand() {
                        TokenKind::Plus
                    } else {
                        TokenKind::UnaryPlus
                    }
                }

                '-' => {
                    if self.follows_operand() {
                        TokenKind::Minus
                    } else {
                        TokenKind::UnaryMinus
                    }
                }

                '/' => {
                    if self.match_char('/') {
                        TokenKind::SlashSlash
                    } else {
                        TokenKind::Slash
                    }
                }

                '<' => {
                    if self.match_char('<') {
                        if self.match_char('<') {
                            TokenKind::LtLtLt
                        } else {
                            TokenKind::LtLt
                        }
                    } else if self.match_char('=') {
                        if self.match_char('>') {
                            TokenKind::LtEqGt
                        } else {
                            TokenKind::LtEq
                        }
                    } else {
                        TokenKind::Lt
                    }
                }

                '>' => {
                    if self.match_char('>') {
                        if self.match_char('>') {
                            TokenKind::GtGtGt
                        } else {
                            TokenKind::GtGt
                        }
                    } else if self.match_char('=') {
                        TokenKind::GtEq
                    } else {
                        TokenKind::Gt
                    }
                }

                '=' => {
                    if self.match_char('=') {
                        TokenKind::EqEq
                    } else {
                        TokenKind::Assign
                    }
                }

                '!' => {
                    if self.match_char('=') {
                        TokenKind::BangEq
                    } else {
                        TokenKind::Bang
                    }
                }

                '&' => {
                    if self.match_char('&') {
                        TokenKind::AmpAmp
                    } else {
                        TokenKind::Amp
                    }
                }

                '|' => {
                    if self.match_char('|') {
                        TokenKind::PipePipe
                    } else {
                        TokenKind::Pipe
                    }
                }

                _ if ch.is_ascii_digit() => return self.scan_number(ch, start),

                _ if ch.is_ascii_alphabetic() => return self.scan_identifier(ch, start),

                _ => {
                    trace!(?ch, line = self.line, "skipping unrecognized character");
                    continue;
                }
            };

            return Ok(Token::new(kind, start));
        }
    }

    fn scan_number(&mut self, first: char, start: SourcePosition) -> Result<Token, LexError> {
        let mut digits = String::from(first);
        let mut overflow = self.read_digits(&mut digits);

        let mut fraction = String::new();
        if self.match_char('.') {
            overflow |= self.read_digits(&mut fraction);
        }

        if overflow {
            return Err(LexError::NumberTooLong {
                line: start.line,
                limit: MAX_NUMBER_LEN,
            });
        }

        let value = Number::from_digits(&digits) + Number::from_fraction_digits(&fraction);
        Ok(Token::number(value, start))
    }

    /// Append a digit run to `buf`, consuming any excess past the buffer
    /// capacity. Returns whether the run overflowed.
    fn read_digits(&mut self, buf: &mut String) -> bool {
        let mut overflow = buf.len() > MAX_NUMBER_LEN;
        while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
            self.advance();
            if buf.len() < MAX_NUMBER_LEN {
                buf.push(ch);
            } else {
                overflow = true;
            }
        }
        overflow
    }

    fn scan_identifier(&mut self, first: char, start: SourcePosition) -> Result<Token, LexError> {
        let mut text = String::from(first);
        let mut length = 1;
        while let Some(ch) = self.peek().filter(|c| is_id_continue(*c)) {
            self.advance();
            length += 1;
            if length <= MAX_IDENTIFIER_LEN {
                text.push(ch);
            }
        }

        if length > MAX_IDENTIFIER_LEN {
            return Err(LexError::IdentifierTooLong {
                line: start.line,
                limit: MAX_IDENTIFIER_LEN,
            });
        }

        if let Some(kind) = TokenKind::keyword(&text) {
            return Ok(Token::new(kind, start));
        }

        if length > MAX_NAME_LEN {
            return Err(LexError::NameTooLong {
                name: text,
                line: start.line,
                limit: MAX_NAME_LEN,
            });
        }

        Ok(Token::name(text, start))
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                COMMENT_CHAR => {
                    // Runs to newline or end of stream; the newline itself is
                    // left for the outer loop to count.
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ if ch.is_whitespace() => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn follows_operand(&self) -> bool {
        self.last.is_some_and(TokenKind::ends_operand)
    }

    fn peek(&self) -> Option<char> {
        self.lookahead
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.lookahead.take()?;
        self.lookahead = self.source.next_char();
        Some(ch)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}

impl<S: CharSource, E: ErrorSink> Iterator for Lexer<S, E> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including the end-of-input token produced when
    /// the stream runs dry.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if matches!(&result, Ok(token) if token.kind == TokenKind::EndOfInput) && self.is_exhausted() {
            self.finished = true;
        }
        Some(result)
    }
}

fn is_id_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
