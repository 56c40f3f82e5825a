use crate::builtins::BuiltinRegistry;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::runtime::{Environment, Value};

/// Single-pass parser/evaluator
///
/// Consumes the token sequence in one left-to-right scan with two stacks:
/// pending function names (operator stack) and pending values (operand
/// stack). Each parenthesized sub-expression is evaluated the moment its
/// closing parenthesis is seen; no tree is ever built. A consequence worth
/// knowing: every argument is evaluated before the enclosing call fires, so
/// `if` is not short-circuiting — both branches always run.
///
/// The evaluator itself holds only the immutable builtin table. All per-pass
/// state lives in a fresh machine struct, so one `Evaluator` can serve any
/// number of sequential calls.
pub struct Evaluator {
    builtins: BuiltinRegistry,
}

/// Transient machine state, one per evaluation pass
#[derive(Debug, Default)]
struct Machine {
    /// Open/close parenthesis balance, never negative
    depth: i64,
    /// Function names for open, not-yet-closed expressions
    pending_functions: Vec<String>,
    /// Evaluated literals and sub-expression results, in source order
    pending_values: Vec<Value>,
    /// The next identifier names a function (set right after `(`)
    expecting_name: bool,
    /// An array literal is open
    building_array: bool,
    /// Elements of the in-progress array literal
    array_buffer: Vec<Value>,
    /// Tokens before this index were absorbed by a `def` form
    skip_until: usize,
}

impl Evaluator {
    /// Creates an evaluator with the standard builtin table
    pub fn new() -> Self {
        Evaluator {
            builtins: BuiltinRegistry::new(),
        }
    }

    /// Evaluates a token sequence with a fresh constant environment
    pub fn eval(&self, tokens: &[Token]) -> Result<Value> {
        let mut env = Environment::new();
        self.eval_with_env(tokens, &mut env)
    }

    /// Evaluates a token sequence against a caller-provided environment
    ///
    /// Constants bound by `def` forms land in `env`, so a host can thread one
    /// environment through successive calls to make definitions persist.
    pub fn eval_with_env(&self, tokens: &[Token], env: &mut Environment) -> Result<Value> {
        // Whitespace never reaches the machine; the def form's fixed token
        // shape relies on this.
        let tokens: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .collect();

        let mut machine = Machine::default();
        for (i, &token) in tokens.iter().enumerate() {
            if i < machine.skip_until {
                continue;
            }
            self.step(i, token, &tokens, &mut machine, env)?;
        }

        if machine.depth != 0 {
            return Err(Error::ParenMismatch {
                depth: machine.depth,
            });
        }

        // Extra values below the top (from sequential top-level forms such
        // as a def followed by an expression) are intentionally ignored.
        machine.pending_values.pop().ok_or(Error::EmptyProgram)
    }

    fn step(
        &self,
        i: usize,
        token: &Token,
        tokens: &[&Token],
        machine: &mut Machine,
        env: &mut Environment,
    ) -> Result<()> {
        if machine.expecting_name {
            if let Some(name) = token.identifier() {
                if name == "def" {
                    return self.eval_definition(i, tokens, machine, env);
                }
                machine.pending_functions.push(name.to_string());
                machine.expecting_name = false;
                return Ok(());
            }
        } else if let Some(name) = token.identifier() {
            // Identifier in value position: resolve against the environment.
            // This pushes to the value stack even inside an array literal.
            machine.pending_values.push(env.get(name)?);
            return Ok(());
        }

        if !machine.expecting_name && token.is_literal() {
            // is_literal() guarantees a value here.
            if let Some(value) = token.literal_value() {
                if machine.building_array {
                    machine.array_buffer.push(value);
                } else {
                    machine.pending_values.push(value);
                }
            }
            return Ok(());
        }

        match token.kind {
            TokenKind::LeftBracket => {
                if machine.building_array {
                    return Err(Error::NestedArray);
                }
                machine.building_array = true;
            }
            TokenKind::RightBracket => {
                if !machine.building_array {
                    return Err(Error::UnopenedArray);
                }
                machine.building_array = false;
                let items = std::mem::take(&mut machine.array_buffer);
                machine.pending_values.push(Value::array(items));
            }
            TokenKind::LeftParen => {
                if machine.building_array {
                    return Err(Error::ExpressionInArray);
                }
                machine.depth += 1;
                machine.expecting_name = true;
            }
            TokenKind::RightParen => {
                if machine.building_array {
                    return Err(Error::EvaluationInArray);
                }
                if machine.depth == 0 {
                    return Err(Error::TooManyCloseParens);
                }
                machine.depth -= 1;
                machine.expecting_name = false;
                self.apply_pending(machine)?;
            }
            // A literal in function-name position falls through unprocessed,
            // matching the original scan; the eventual close paren reports
            // the missing function.
            _ => {}
        }

        Ok(())
    }

    /// Handles a `def` form: `( def <identifier> <literal> )`
    ///
    /// The shape is matched explicitly against the upcoming tokens; the key,
    /// value, and closing parenthesis are then absorbed via `skip_until`, and
    /// the depth is decremented for the close paren that will never be
    /// processed normally. The form evaluates to the value it defines.
    fn eval_definition(
        &self,
        i: usize,
        tokens: &[&Token],
        machine: &mut Machine,
        env: &mut Environment,
    ) -> Result<()> {
        let key = tokens
            .get(i + 1)
            .and_then(|t| t.identifier())
            .ok_or_else(|| Error::MalformedDefinition {
                reason: "expected an identifier after def".to_string(),
            })?;

        let value = tokens
            .get(i + 2)
            .and_then(|t| t.literal_value())
            .ok_or_else(|| Error::MalformedDefinition {
                reason: format!("expected a literal value for {}", key),
            })?;

        match tokens.get(i + 3) {
            Some(t) if t.kind == TokenKind::RightParen => {}
            _ => {
                return Err(Error::MalformedDefinition {
                    reason: format!("expected a closing parenthesis after the value of {}", key),
                })
            }
        }

        tracing::debug!(name = key, "defined constant");
        env.define(key.to_string(), value.clone());
        machine.pending_values.push(value);
        machine.skip_until = i + 4;
        machine.depth -= 1;
        machine.expecting_name = false;
        Ok(())
    }

    /// Evaluates the expression whose closing parenthesis was just seen
    fn apply_pending(&self, machine: &mut Machine) -> Result<()> {
        let name = machine
            .pending_functions
            .pop()
            .ok_or(Error::MissingFunction)?;

        // Constants are never callable, so anything outside the builtin
        // table fails resolution, bound in the environment or not.
        let builtin = self
            .builtins
            .get(&name)
            .ok_or_else(|| Error::NotAFunction { name: name.clone() })?;

        // Arguments were pushed in source order and the stack is LIFO, so
        // the kinds are checked back to front and the list reversed after.
        let mut args = Vec::with_capacity(builtin.arity());
        for (index, kind) in builtin.arg_kinds().iter().enumerate().rev() {
            let value = match machine.pending_values.pop() {
                Some(v) => v,
                None => {
                    return Err(Error::ArityMismatch {
                        name,
                        expected: builtin.arity(),
                        got: args.len(),
                    })
                }
            };
            if !kind.matches(&value) {
                return Err(Error::ArgumentKind {
                    name,
                    index,
                    expected: kind.name(),
                    got: value.kind_name(),
                });
            }
            args.push(value);
        }
        args.reverse();

        tracing::trace!(builtin = %name, argc = args.len(), "applying builtin");
        let result = builtin.apply(&args)?;
        machine.pending_values.push(result);
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
