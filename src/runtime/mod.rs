//! Runtime: values, the constant environment, and the stack evaluator

mod environment;
mod evaluator;
mod value;

pub use environment::Environment;
pub use evaluator::Evaluator;
pub use value::Value;
