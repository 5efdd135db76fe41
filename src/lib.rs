pub mod ast;
pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod interpreter;
pub mod lexer;
pub mod token;
pub mod value;

pub use ast::{Expr, Stmt};
pub use token::{Token, TokenKind};
pub use value::Value;
