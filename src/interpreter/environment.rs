use crate::value::Value;
use std::collections::HashMap;

/// A binding slot. `None` means the variable was declared without an
/// initializer and has not been assigned yet; reading it is an error
/// distinct from the name being undefined.
type Scope = HashMap<String, Option<Value>>;

/// Why a variable lookup or assignment failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarError {
    Undefined,
    Uninitialized,
}

/// Manages the lexical scope chain as a stack of scopes. A block pushes a
/// scope on entry and pops it on exit; name resolution walks from the
/// innermost scope outward and the first scope defining the name wins.
#[derive(Debug, Default)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn pop_scope(&mut self) {
        // The global scope is never popped.
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare a variable in the innermost scope. Re-declaration in the
    /// same scope overwrites the previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Option<Value>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value);
        }
    }

    /// Read a variable, searching from the innermost scope outward.
    pub fn get(&self, name: &str) -> Result<Value, VarError> {
        for scope in self.scopes.iter().rev() {
            match scope.get(name) {
                Some(Some(value)) => return Ok(value.clone()),
                Some(None) => return Err(VarError::Uninitialized),
                None => {}
            }
        }
        Err(VarError::Undefined)
    }

    /// Assign to an existing variable in the nearest scope defining it.
    /// Assignment never creates a binding; assigning to an uninitialized
    /// variable initializes it.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), VarError> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = Some(value);
                return Ok(());
            }
        }
        Err(VarError::Undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut env = Environment::new();
        env.define("x", Some(Value::Number(42.0)));
        assert_eq!(env.get("x"), Ok(Value::Number(42.0)));
    }

    #[test]
    fn test_undefined_read() {
        let env = Environment::new();
        assert_eq!(env.get("missing"), Err(VarError::Undefined));
    }

    #[test]
    fn test_uninitialized_read_is_distinct() {
        let mut env = Environment::new();
        env.define("x", None);
        assert_eq!(env.get("x"), Err(VarError::Uninitialized));
    }

    #[test]
    fn test_shadowing_does_not_overwrite_outer() {
        let mut env = Environment::new();
        env.define("a", Some(Value::Number(1.0)));

        env.push_scope();
        env.define("a", Some(Value::Number(2.0)));
        assert_eq!(env.get("a"), Ok(Value::Number(2.0)));

        env.pop_scope();
        assert_eq!(env.get("a"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn test_assign_mutates_enclosing_scope() {
        let mut env = Environment::new();
        env.define("a", Some(Value::Number(1.0)));

        env.push_scope();
        assert!(env.assign("a", Value::Number(5.0)).is_ok());
        env.pop_scope();

        assert_eq!(env.get("a"), Ok(Value::Number(5.0)));
    }

    #[test]
    fn test_assign_never_creates_binding() {
        let mut env = Environment::new();
        assert_eq!(
            env.assign("ghost", Value::Number(1.0)),
            Err(VarError::Undefined)
        );
    }

    #[test]
    fn test_assign_initializes_declared_variable() {
        let mut env = Environment::new();
        env.define("x", None);
        assert!(env.assign("x", Value::Bool(true)).is_ok());
        assert_eq!(env.get("x"), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_redeclaration_in_same_scope() {
        let mut env = Environment::new();
        env.define("x", Some(Value::Number(1.0)));
        env.define("x", Some(Value::Number(2.0)));
        assert_eq!(env.get("x"), Ok(Value::Number(2.0)));
    }
}
