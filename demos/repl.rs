//! Interactive REPL for lispet
//!
//! Usage: cargo run --example repl
//!
//! Constants defined with `def` persist across lines until `clear`.

use std::io::{self, Write};

use anyhow::Result;
use lispet::{Environment, Evaluator, Lexer, Value};

fn main() -> Result<()> {
    println!("lispet {} — a minimal prefix expression language", lispet::VERSION);
    println!("Type an expression like (plus 1 (minus 5 4)) and press Enter.");
    println!("Commands: help, clear, exit");
    println!();

    let lexer = Lexer::new();
    let evaluator = Evaluator::new();
    let mut env = Environment::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();

        match input {
            "" => continue,
            "exit" | "quit" => break,
            "help" => {
                print_help();
                continue;
            }
            "clear" => {
                env = Environment::new();
                println!("environment cleared");
                continue;
            }
            _ => {}
        }

        match eval_line(&lexer, &evaluator, &mut env, input) {
            Ok(value) => println!("{}", value),
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}

fn eval_line(
    lexer: &Lexer,
    evaluator: &Evaluator,
    env: &mut Environment,
    source: &str,
) -> lispet::Result<Value> {
    let tokens = lexer.tokenize(source)?;
    evaluator.eval_with_env(&tokens, env)
}

fn print_help() {
    println!();
    println!("Builtins:");
    println!("  (plus 1 2)              numeric addition");
    println!("  (minus 5 4)             numeric subtraction");
    println!("  (concat \"a\" \"b\")        string concatenation");
    println!("  (int \"123\")             cast string to int");
    println!("  (float \".5\")            cast string to float");
    println!("  (string 1)              cast anything to string");
    println!("  (length \"hi\")           length of a string or array");
    println!("  (equals 1 1)            value equality");
    println!("  (if true 1 2)           select by condition (both branches evaluate)");
    println!();
    println!("Constants and arrays:");
    println!("  (def x 5)               bind a constant for this session");
    println!("  [1 2 3]                 array literal (literals only, no nesting)");
    println!();
}
