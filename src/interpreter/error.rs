use crate::diagnostic::Diagnostic;
use std::fmt;

/// A runtime failure. The first one aborts the remaining top-level
/// statements; every variant carries the line of the operator or name that
/// triggered it.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    TypeError { message: String, line: usize },
    DivisionByZero { line: usize },
    UndefinedVariable { name: String, line: usize },
    UninitializedVariable { name: String, line: usize },
}

impl RuntimeError {
    pub fn type_error(message: impl Into<String>, line: usize) -> Self {
        Self::TypeError {
            message: message.into(),
            line,
        }
    }

    pub fn operand_not_number(got: &'static str, line: usize) -> Self {
        Self::type_error(
            format!("Operand must be a number. Got {} instead.", got),
            line,
        )
    }

    pub fn division_by_zero(line: usize) -> Self {
        Self::DivisionByZero { line }
    }

    pub fn undefined_variable(name: impl Into<String>, line: usize) -> Self {
        Self::UndefinedVariable {
            name: name.into(),
            line,
        }
    }

    pub fn uninitialized_variable(name: impl Into<String>, line: usize) -> Self {
        Self::UninitializedVariable {
            name: name.into(),
            line,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::TypeError { line, .. } => *line,
            Self::DivisionByZero { line } => *line,
            Self::UndefinedVariable { line, .. } => *line,
            Self::UninitializedVariable { line, .. } => *line,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::at_line(self.line(), self.to_string())
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeError { message, .. } => write!(f, "{}", message),
            RuntimeError::DivisionByZero { .. } => write!(f, "Division by zero."),
            RuntimeError::UndefinedVariable { name, .. } => {
                write!(f, "Undefined variable '{}'.", name)
            }
            RuntimeError::UninitializedVariable { name, .. } => {
                write!(f, "Access to uninitialized variable '{}'.", name)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
