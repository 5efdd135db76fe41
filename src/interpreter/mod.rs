pub mod control_flow;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use control_flow::ControlFlow;
pub use environment::Environment;
pub use error::RuntimeError;
pub use evaluator::{run_program, Interpreter};
pub use parser::{ParseError, ParseResult, Parser};
