pub mod ast;
pub mod builder;
pub mod error;
pub mod eval;

pub use ast::expr::{BinaryOp, BinaryOperator, Expr, Ident, ident, value};
pub use builder::condition::ConditionBuilder;
pub use error::EvalError;
pub use eval::{evaluate, evaluate_value};
