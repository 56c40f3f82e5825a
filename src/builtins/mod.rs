//! Builtin operation registry
//!
//! Declares each builtin's fixed arity, per-position expected runtime kind,
//! and its evaluation function. The table is immutable after construction;
//! the evaluator reads it during the pass and never mutates it.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Expected runtime kind for one argument position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Accepts both Int and Float
    Number,
    /// Accepts String only
    String,
    /// Accepts Bool only
    Boolean,
    /// Accepts any runtime kind
    Anything,
}

impl ArgKind {
    /// Checks a value's runtime kind against this declared kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ArgKind::Number => value.is_number(),
            ArgKind::String => matches!(value, Value::String(_)),
            ArgKind::Boolean => matches!(value, Value::Bool(_)),
            ArgKind::Anything => true,
        }
    }

    /// Kind name as used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ArgKind::Number => "number",
            ArgKind::String => "string",
            ArgKind::Boolean => "boolean",
            ArgKind::Anything => "anything",
        }
    }
}

/// Builtin descriptor: name, declared argument kinds, evaluation function
pub struct Builtin {
    name: &'static str,
    arg_kinds: &'static [ArgKind],
    run: fn(&[Value]) -> Result<Value>,
}

impl Builtin {
    /// Builtin name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared per-position argument kinds, in source order
    pub fn arg_kinds(&self) -> &'static [ArgKind] {
        self.arg_kinds
    }

    /// Fixed arity
    pub fn arity(&self) -> usize {
        self.arg_kinds.len()
    }

    /// Invokes the builtin on kind-checked arguments in source order
    pub fn apply(&self, args: &[Value]) -> Result<Value> {
        debug_assert_eq!(args.len(), self.arity());
        (self.run)(args)
    }
}

/// Fixed table of builtin operations
pub struct BuiltinRegistry {
    builtins: HashMap<&'static str, Builtin>,
}

impl BuiltinRegistry {
    /// Creates the registry with the full builtin set
    pub fn new() -> Self {
        let mut registry = BuiltinRegistry {
            builtins: HashMap::new(),
        };

        registry.register(Builtin {
            name: "plus",
            arg_kinds: &[ArgKind::Number, ArgKind::Number],
            run: builtin_plus,
        });
        registry.register(Builtin {
            name: "minus",
            arg_kinds: &[ArgKind::Number, ArgKind::Number],
            run: builtin_minus,
        });
        registry.register(Builtin {
            name: "concat",
            arg_kinds: &[ArgKind::String, ArgKind::String],
            run: builtin_concat,
        });
        registry.register(Builtin {
            name: "int",
            arg_kinds: &[ArgKind::String],
            run: builtin_int,
        });
        registry.register(Builtin {
            name: "float",
            arg_kinds: &[ArgKind::String],
            run: builtin_float,
        });
        registry.register(Builtin {
            name: "string",
            arg_kinds: &[ArgKind::Anything],
            run: builtin_string,
        });
        registry.register(Builtin {
            name: "length",
            arg_kinds: &[ArgKind::Anything],
            run: builtin_length,
        });
        registry.register(Builtin {
            name: "equals",
            arg_kinds: &[ArgKind::Anything, ArgKind::Anything],
            run: builtin_equals,
        });
        registry.register(Builtin {
            name: "if",
            arg_kinds: &[ArgKind::Boolean, ArgKind::Anything, ArgKind::Anything],
            run: builtin_if,
        });

        registry
    }

    fn register(&mut self, builtin: Builtin) {
        self.builtins.insert(builtin.name, builtin);
    }

    /// Gets a builtin by name
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }

    /// Checks if a builtin exists
    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Lists all builtin names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.builtins.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered builtins
    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    /// Returns true if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Arguments reach the functions below already arity- and kind-checked by the
// evaluator's dispatch, so the numeric helpers only distinguish Int from Float.

fn numeric_pair(a: &Value, b: &Value) -> Option<(f64, f64)> {
    let as_f64 = |v: &Value| match v {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    };
    Some((as_f64(a)?, as_f64(b)?))
}

fn builtin_plus(args: &[Value]) -> Result<Value> {
    match (&args[0], &args[1]) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
        (a, b) => {
            let (x, y) = numeric_pair(a, b).ok_or(Error::ArgumentKind {
                name: "plus".to_string(),
                index: 0,
                expected: "number",
                got: a.kind_name(),
            })?;
            Ok(Value::Float(x + y))
        }
    }
}

fn builtin_minus(args: &[Value]) -> Result<Value> {
    match (&args[0], &args[1]) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_sub(*b))),
        (a, b) => {
            let (x, y) = numeric_pair(a, b).ok_or(Error::ArgumentKind {
                name: "minus".to_string(),
                index: 0,
                expected: "number",
                got: a.kind_name(),
            })?;
            Ok(Value::Float(x - y))
        }
    }
}

fn builtin_concat(args: &[Value]) -> Result<Value> {
    match (&args[0], &args[1]) {
        (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{}{}", a, b))),
        (a, _) => Err(Error::ArgumentKind {
            name: "concat".to_string(),
            index: 0,
            expected: "string",
            got: a.kind_name(),
        }),
    }
}

fn builtin_int(args: &[Value]) -> Result<Value> {
    let text = match &args[0] {
        Value::String(s) => s,
        other => {
            return Err(Error::ArgumentKind {
                name: "int".to_string(),
                index: 0,
                expected: "string",
                got: other.kind_name(),
            })
        }
    };

    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    // A fractional string still casts, truncated toward zero.
    match trimmed.parse::<f64>() {
        Ok(f) if !f.is_nan() => Ok(Value::Int(f as i64)),
        _ => Err(Error::Cast {
            text: text.clone(),
            target: "an integer",
        }),
    }
}

fn builtin_float(args: &[Value]) -> Result<Value> {
    let text = match &args[0] {
        Value::String(s) => s,
        other => {
            return Err(Error::ArgumentKind {
                name: "float".to_string(),
                index: 0,
                expected: "string",
                got: other.kind_name(),
            })
        }
    };

    match text.trim().parse::<f64>() {
        Ok(f) if !f.is_nan() => Ok(Value::Float(f)),
        _ => Err(Error::Cast {
            text: text.clone(),
            target: "a float",
        }),
    }
}

fn builtin_string(args: &[Value]) -> Result<Value> {
    Ok(Value::String(args[0].to_text()))
}

fn builtin_length(args: &[Value]) -> Result<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::Int(s.chars().count() as i64)),
        Value::Array(items) => Ok(Value::Int(items.len() as i64)),
        other => Err(Error::NoLength {
            kind: other.kind_name(),
        }),
    }
}

fn builtin_equals(args: &[Value]) -> Result<Value> {
    let eq = match (&args[0], &args[1]) {
        // Arrays compare structurally via their canonical serialization.
        (Value::Array(_), Value::Array(_)) => args[0].canonical() == args[1].canonical(),
        // Int and Float compare numerically across kinds.
        (Value::Int(a), Value::Float(b)) => (*a as f64) == *b,
        (Value::Float(a), Value::Int(b)) => *a == (*b as f64),
        (a, b) => a == b,
    };
    Ok(Value::Bool(eq))
}

fn builtin_if(args: &[Value]) -> Result<Value> {
    // Both branches were already evaluated during the scan; this only selects.
    if matches!(args[0], Value::Bool(true)) {
        Ok(args[1].clone())
    } else {
        Ok(args[2].clone())
    }
}
