use crate::diagnostic::Diagnostic;
use crate::token::{keyword, Literal, Token, TokenKind};
use std::fmt;

/// A fatal scanning failure. Scanning aborts on the first error; no partial
/// token sequence is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    UnexpectedCharacter(char),
    UnterminatedString,
}

impl LexError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::at_line(self.line, self.to_string())
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter(c) => write!(f, "Unexpected character '{}'.", c),
            LexErrorKind::UnterminatedString => write!(f, "Unterminated string."),
        }
    }
}

impl std::error::Error for LexError {}

/// Scans a source string into tokens. The returned sequence always ends
/// with a single `Eof` token.
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).scan_tokens()
}

struct Lexer {
    chars: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, "", None, self.line));
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LParen),
            ')' => self.add_token(TokenKind::RParen),
            '{' => self.add_token(TokenKind::LBrace),
            '}' => self.add_token(TokenKind::RBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '?' => self.add_token(TokenKind::Question),
            ':' => self.add_token(TokenKind::Colon),
            '!' => {
                let kind = if self.match_next('=') {
                    TokenKind::BangEq
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_next('=') {
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_next('=') {
                    TokenKind::LessEq
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_next('=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_next('/') {
                    // A comment runs to the end of the line and emits nothing.
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string()?,
            _ => {
                if c.is_ascii_digit() {
                    self.number();
                } else if is_alpha(c) {
                    self.identifier();
                } else {
                    return Err(LexError {
                        kind: LexErrorKind::UnexpectedCharacter(c),
                        line: self.line,
                    });
                }
            }
        }
        Ok(())
    }

    fn string(&mut self) -> Result<(), LexError> {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError {
                kind: LexErrorKind::UnterminatedString,
                line: self.line,
            });
        }

        // The closing quote.
        self.advance();

        // The stored literal excludes the delimiting quotes.
        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_literal_token(TokenKind::Str, Literal::Str(value));
        Ok(())
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A '.' is only part of the number when a digit follows; a trailing
        // dot is left for the next token.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.chars[self.start..self.current].iter().collect();
        let value: f64 = text.parse().unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let text: String = self.chars[self.start..self.current].iter().collect();
        let kind = keyword(&text).unwrap_or(TokenKind::Ident);
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, None, self.line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        self.tokens
            .push(Token::new(kind, lexeme, Some(literal), self.line));
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
