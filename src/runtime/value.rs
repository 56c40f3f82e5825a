use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime value representation
///
/// Values are immutable once produced: each one is pushed onto the pending
/// value stack, consumed by at most one enclosing builtin call, or returned
/// as the final result of the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit integer value
    Int(i64),
    /// 64-bit floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Boolean value
    Bool(bool),
    /// Array of values (homogeneous by literal-syntax convention only)
    Array(Vec<Value>),
}

impl Value {
    /// Creates an array value from a vector of values
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(values)
    }

    /// Returns the runtime kind name as used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
        }
    }

    /// Returns true for the numeric kinds (Int and Float)
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Bare textual rendition, used by the `string` builtin
    ///
    /// Strings render without quotes; everything else renders as in
    /// [`fmt::Display`]. The display form (strings quoted) is what the REPL
    /// prints.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Canonical serialized form, used for structural array equality
    pub fn canonical(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, val) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Int(42).kind_name(), "int");
        assert_eq!(Value::Float(2.71).kind_name(), "float");
        assert_eq!(Value::String("test".to_string()).kind_name(), "string");
        assert_eq!(Value::Bool(true).kind_name(), "boolean");
        assert_eq!(Value::array(vec![]).kind_name(), "array");
    }

    #[test]
    fn test_is_number() {
        assert!(Value::Int(1).is_number());
        assert!(Value::Float(0.5).is_number());
        assert!(!Value::Bool(true).is_number());
        assert!(!Value::String("1".to_string()).is_number());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(5).to_string(), "5");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::String("hi".to_string()).to_string(), "\"hi\"");
        assert_eq!(Value::Bool(false).to_string(), "false");

        let arr = Value::array(vec![
            Value::Int(1),
            Value::String("two".to_string()),
            Value::Bool(true),
        ]);
        assert_eq!(arr.to_string(), "[1 \"two\" true]");
    }

    #[test]
    fn test_to_text_strips_quotes() {
        assert_eq!(Value::String("hi".to_string()).to_text(), "hi");
        assert_eq!(Value::Int(7).to_text(), "7");
        assert_eq!(Value::Float(1.0).to_text(), "1");
    }

    #[test]
    fn test_canonical_structural_equality() {
        let a = Value::array(vec![Value::Int(1), Value::Int(2)]);
        let b = Value::array(vec![Value::Int(1), Value::Int(2)]);
        let c = Value::array(vec![Value::Int(2), Value::Int(1)]);

        assert_eq!(a.canonical(), b.canonical());
        assert_ne!(a.canonical(), c.canonical());
    }
}
