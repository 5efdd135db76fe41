use crate::ast::{Expr, Stmt};
use crate::diagnostic::{Diagnostic, ErrorLocation};
use crate::token::{Literal, Token, TokenKind};
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

/// A recoverable statement-level parse failure. The parser reports it and
/// synchronizes to the next statement boundary instead of aborting.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub location: ErrorLocation,
}

impl ParseError {
    fn at_token(token: &Token, message: impl Into<String>) -> Self {
        let location = if token.kind == TokenKind::Eof {
            ErrorLocation::AtEnd
        } else {
            ErrorLocation::At(token.lexeme.clone())
        };
        Self {
            message: message.into(),
            line: token.line,
            location,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.line, self.location.clone(), self.message.clone())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}

impl std::error::Error for ParseError {}

/// The outcome of a parse: a best-effort statement list plus every
/// diagnostic produced along the way. Malformed statements are omitted
/// from the list, never partially included.
#[derive(Debug)]
pub struct ParseResult {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Recursive-descent parser over the scanned token sequence. Precedence is
/// encoded in the call chain, one method per level.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    loop_depth: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            loop_depth: 0,
            errors: Vec::new(),
        }
    }

    /// Parses the whole token sequence. Never fails as a whole: each
    /// malformed statement produces one diagnostic and parsing resumes at
    /// the next statement boundary.
    pub fn parse(mut self) -> ParseResult {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }
        ParseResult {
            statements,
            errors: self.errors,
        }
    }

    fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Ident, "Expect variable name.")?;
        let initializer = if self.match_kind(TokenKind::Assign) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(TokenKind::If) {
            return self.if_statement();
        }
        if self.match_kind(TokenKind::Print) {
            return self.print_statement();
        }
        if self.match_kind(TokenKind::While) {
            return self.while_statement();
        }
        if self.match_kind(TokenKind::For) {
            return self.for_statement();
        }
        if self.match_kind(TokenKind::Break) {
            return self.break_statement();
        }
        if self.match_kind(TokenKind::LBrace) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn break_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.loop_depth == 0 {
            return Err(ParseError::at_token(
                self.previous(),
                "Break outside of loop.",
            ));
        }
        self.consume(TokenKind::Semicolon, "Expect ';' after break.")?;
        Ok(Stmt::Break)
    }

    /// `for` is pure sugar: it is rewritten here into an equivalent `while`
    /// wrapped in blocks, so the evaluator never sees a for loop.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_kind(TokenKind::Semicolon) {
            None
        } else if self.match_kind(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RParen, "Expect ')' after for clauses.")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;
        let mut body = body?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        body = Stmt::While {
            condition: condition.unwrap_or(Expr::Literal(Value::Bool(true))),
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RParen, "Expect ')' after condition.")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;

        Ok(Stmt::While {
            condition,
            body: Box::new(body?),
        })
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        // A dangling else binds to the nearest unmatched if.
        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }
        self.consume(TokenKind::RBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.sequence()?;

        if self.match_kind(TokenKind::Assign) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable { name } = expr {
                return Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                });
            }

            // Reported but not fatal: the surrounding statement still parses.
            self.errors
                .push(ParseError::at_token(&equals, "Invalid assignment target."));
        }

        Ok(expr)
    }

    fn sequence(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.ternary()?;

        while self.match_kind(TokenKind::Comma) {
            let operator = self.previous().clone();
            let right = self.ternary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn ternary(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or()?;

        if self.match_kind(TokenKind::Question) {
            let then_branch = self.or()?;
            self.consume(TokenKind::Colon, "Expect ':' after then branch.")?;
            let else_branch = self.or()?;
            return Ok(Expr::Ternary {
                condition: Box::new(expr),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            });
        }

        Ok(expr)
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and()?;

        while self.match_kind(TokenKind::Or) {
            let operator = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;

        while self.match_kind(TokenKind::And) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_chain(&[TokenKind::BangEq, TokenKind::Eq], Self::comparison)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_chain(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEq,
                TokenKind::Less,
                TokenKind::LessEq,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_chain(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_chain(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Left-associative binary chain over the next-higher precedence level.
    fn binary_chain(
        &mut self,
        operators: &[TokenKind],
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut expr = next(self)?;

        while self.match_any(operators) {
            let operator = self.previous().clone();
            let right = next(self)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kind(TokenKind::False) {
            return Ok(Expr::Literal(Value::Bool(false)));
        }
        if self.match_kind(TokenKind::True) {
            return Ok(Expr::Literal(Value::Bool(true)));
        }
        if self.match_kind(TokenKind::Nil) {
            return Ok(Expr::Literal(Value::Nil));
        }

        if self.match_any(&[TokenKind::Number, TokenKind::Str]) {
            let value = match &self.previous().literal {
                Some(Literal::Number(n)) => Value::Number(*n),
                Some(Literal::Str(s)) => Value::Str(Rc::from(s.as_str())),
                // The scanner always attaches a literal to these kinds.
                None => Value::Nil,
            };
            return Ok(Expr::Literal(value));
        }

        if self.match_kind(TokenKind::Ident) {
            return Ok(Expr::Variable {
                name: self.previous().clone(),
            });
        }

        if self.match_kind(TokenKind::LParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(ParseError::at_token(self.peek(), "Expect expression."))
    }

    /// Panic-mode recovery: skip tokens until just past a ';' or just
    /// before a token that starts a new statement.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }

            self.advance();
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(ParseError::at_token(self.peek(), message))
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }
}
