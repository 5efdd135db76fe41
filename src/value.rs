use std::fmt;
use std::rc::Rc;

/// A runtime value. The language is dynamically typed; every expression
/// evaluates to one of these.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(left_bool), Value::Bool(right_bool)) => left_bool == right_bool,
            (Value::Number(left_num), Value::Number(right_num)) => left_num == right_num,
            (Value::Str(left_str), Value::Str(right_str)) => left_str == right_str,
            // No coercion across types.
            _ => false,
        }
    }
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(numeric_value) = self {
            Some(*numeric_value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(string_ref) = self {
            Some(string_ref.as_ref())
        } else {
            None
        }
    }

    /// Conditional contexts treat `nil` and `false` as falsy and everything
    /// else (including `0` and `""`) as truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }

    /// Name used in operand type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Str(Rc::from("")).is_truthy());
    }

    #[test]
    fn test_no_cross_type_equality() {
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_ne!(Value::Str(Rc::from("1")), Value::Number(1.0));
        assert_ne!(Value::Nil, Value::Bool(false));
    }

    #[test]
    fn test_display_trims_integral_numbers() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Nil.to_string(), "nil");
    }
}
