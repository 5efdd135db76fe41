use crate::ast::{Expr, Stmt};
use crate::diagnostic::Diagnostic;
use crate::lexer;
use crate::token::{Token, TokenKind};
use crate::value::Value;
use std::io::{self, Write};
use std::rc::Rc;

use super::control_flow::ControlFlow;
use super::environment::{Environment, VarError};
use super::error::RuntimeError;
use super::parser::Parser;

/// Tree-walking interpreter. Owns the scope chain and the output sink that
/// `print` statements write to.
pub struct Interpreter<W: Write> {
    env: Environment,
    out: W,
}

impl Interpreter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            env: Environment::new(),
            out,
        }
    }

    /// Consumes the interpreter and returns the output sink, so callers can
    /// inspect what a partially-run program printed.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes top-level statements in order. Fail-fast: the first
    /// runtime error aborts the remaining statements.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            // The parser rejects `break` outside a loop, so a Break signal
            // cannot reach the top level.
            if self.execute(statement)? == ControlFlow::Break {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, statement: &Stmt) -> Result<ControlFlow, RuntimeError> {
        match statement {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(ControlFlow::Next)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let _ = writeln!(self.out, "{}", value);
                Ok(ControlFlow::Next)
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => Some(self.evaluate(expr)?),
                    None => None,
                };
                self.env.define(name.lexeme.clone(), value);
                Ok(ControlFlow::Next)
            }
            Stmt::Block(statements) => {
                self.env.push_scope();
                let result = self.execute_block(statements);
                self.env.pop_scope();
                result
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(ControlFlow::Next)
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    // The nearest while is the only consumer of Break.
                    if self.execute(body)? == ControlFlow::Break {
                        break;
                    }
                }
                Ok(ControlFlow::Next)
            }
            Stmt::Break => Ok(ControlFlow::Break),
        }
    }

    fn execute_block(&mut self, statements: &[Stmt]) -> Result<ControlFlow, RuntimeError> {
        for statement in statements {
            if self.execute(statement)? == ControlFlow::Break {
                return Ok(ControlFlow::Break);
            }
        }
        Ok(ControlFlow::Next)
    }

    /// Evaluates a single expression against the current scope chain. Also
    /// the entry point the line-mode driver uses to echo bare expressions.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Variable { name } => self
                .env
                .get(&name.lexeme)
                .map_err(|err| var_error(err, name)),

            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env
                    .assign(&name.lexeme, value.clone())
                    .map_err(|err| var_error(err, name))?;
                Ok(value)
            }

            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                match operator.kind {
                    TokenKind::Minus => {
                        let n = number_operand(&right, operator)?;
                        Ok(Value::Number(-n))
                    }
                    TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
                    _ => Err(RuntimeError::type_error(
                        "Invalid unary operator.",
                        operator.line,
                    )),
                }
            }

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                // Short-circuit: the result is the raw value of the last
                // operand evaluated, not a coerced boolean.
                match operator.kind {
                    TokenKind::Or if left.is_truthy() => Ok(left),
                    TokenKind::And if !left.is_truthy() => Ok(left),
                    _ => self.evaluate(right),
                }
            }

            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.eval_binary(&left, operator, &right)
            }
        }
    }

    fn eval_binary(
        &self,
        left: &Value,
        operator: &Token,
        right: &Value,
    ) -> Result<Value, RuntimeError> {
        match operator.kind {
            TokenKind::Minus => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Number(a - b))
            }
            TokenKind::Star => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Number(a * b))
            }
            TokenKind::Slash => {
                let (a, b) = number_operands(left, right, operator)?;
                if b == 0.0 {
                    return Err(RuntimeError::division_by_zero(operator.line));
                }
                Ok(Value::Number(a / b))
            }
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => {
                    let mut combined = String::with_capacity(a.len() + b.len());
                    combined.push_str(a);
                    combined.push_str(b);
                    Ok(Value::Str(Rc::from(combined)))
                }
                _ => Err(RuntimeError::type_error(
                    "Operands must be two numbers or two strings.",
                    operator.line,
                )),
            },
            TokenKind::Greater => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a > b))
            }
            TokenKind::GreaterEq => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a >= b))
            }
            TokenKind::Less => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a < b))
            }
            TokenKind::LessEq => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a <= b))
            }
            TokenKind::Eq => Ok(Value::Bool(left == right)),
            TokenKind::BangEq => Ok(Value::Bool(left != right)),
            // Comma: both sides already evaluated left to right; the left
            // value is discarded.
            TokenKind::Comma => Ok(right.clone()),
            _ => Err(RuntimeError::type_error(
                "Invalid binary operator.",
                operator.line,
            )),
        }
    }
}

fn number_operand(value: &Value, operator: &Token) -> Result<f64, RuntimeError> {
    value
        .as_number()
        .ok_or_else(|| RuntimeError::operand_not_number(value.type_name(), operator.line))
}

fn number_operands(
    left: &Value,
    right: &Value,
    operator: &Token,
) -> Result<(f64, f64), RuntimeError> {
    let a = number_operand(left, operator)?;
    let b = number_operand(right, operator)?;
    Ok((a, b))
}

fn var_error(err: VarError, name: &Token) -> RuntimeError {
    match err {
        VarError::Undefined => RuntimeError::undefined_variable(&name.lexeme, name.line),
        VarError::Uninitialized => RuntimeError::uninitialized_variable(&name.lexeme, name.line),
    }
}

/// Scans, parses, and interprets a whole program, funneling `print` output
/// into `out`. Returns the sink on success or every diagnostic produced by
/// whichever stage failed.
pub fn run_program<W: Write>(source: &str, out: W) -> Result<W, Vec<Diagnostic>> {
    let tokens = lexer::scan(source).map_err(|err| vec![err.to_diagnostic()])?;

    let parsed = Parser::new(tokens).parse();
    if !parsed.is_ok() {
        return Err(parsed.errors.iter().map(|e| e.to_diagnostic()).collect());
    }

    let mut interpreter = Interpreter::with_output(out);
    interpreter
        .interpret(&parsed.statements)
        .map_err(|err| vec![err.to_diagnostic()])?;
    Ok(interpreter.out)
}
