use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Constant environment populated by `def` forms
///
/// Maps identifier text to a previously defined literal value. The evaluator
/// creates a fresh environment per pass; a host that wants constants to
/// persist across passes (the REPL does) threads one through
/// [`Evaluator::eval_with_env`](crate::Evaluator::eval_with_env) instead.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    constants: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            constants: HashMap::new(),
        }
    }

    /// Binds a constant, overwriting any previous binding of the same name
    pub fn define(&mut self, name: String, value: Value) {
        self.constants.insert(name, value);
    }

    /// Gets the value of a constant by name
    pub fn get(&self, name: &str) -> Result<Value> {
        self.constants
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndefinedConstant {
                name: name.to_string(),
            })
    }

    /// Checks if a constant is bound
    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Number of bound constants
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns true if no constants are bound
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut env = Environment::new();
        env.define("x".to_string(), Value::Int(42));

        assert_eq!(env.get("x").unwrap(), Value::Int(42));
        assert!(env.contains("x"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_undefined_constant() {
        let env = Environment::new();
        let result = env.get("missing");
        assert_eq!(
            result,
            Err(Error::UndefinedConstant {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_redefinition_overwrites() {
        let mut env = Environment::new();
        env.define("x".to_string(), Value::Int(1));
        env.define("x".to_string(), Value::String("one".to_string()));

        assert_eq!(env.get("x").unwrap(), Value::String("one".to_string()));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_empty() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert!(!env.contains("x"));
    }
}
