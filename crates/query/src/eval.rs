//! Evaluates predicate expressions against in-memory rows. This is what
//! lets a memory-backed provider honor the predicates produced by
//! `ConditionBuilder`; SQL-backed providers render the same AST instead.

use crate::{
    ast::expr::{BinaryOp, BinaryOperator, Expr},
    error::EvalError,
};
use model::{core::value::Value, records::row::Row};
use std::cmp::Ordering;

pub fn evaluate(expr: &Expr, row: &Row) -> Result<bool, EvalError> {
    match evaluate_value(expr, row)? {
        Value::Boolean(b) => Ok(b),
        other => Err(EvalError::TypeMismatch {
            expected: "boolean".to_string(),
            actual: other.data_type().to_string(),
        }),
    }
}

pub fn evaluate_value(expr: &Expr, row: &Row) -> Result<Value, EvalError> {
    match expr {
        Expr::Identifier(id) => Ok(row.get_value(&id.name)),
        Expr::Value(v) => Ok(v.clone()),
        Expr::BinaryOp(op) => evaluate_binary(op, row),
    }
}

fn evaluate_binary(op: &BinaryOp, row: &Row) -> Result<Value, EvalError> {
    let left = evaluate_value(&op.left, row)?;
    let right = evaluate_value(&op.right, row)?;

    match op.op {
        BinaryOperator::And | BinaryOperator::Or => {
            let (l, r) = match (&left, &right) {
                (Value::Boolean(l), Value::Boolean(r)) => (*l, *r),
                _ => {
                    return Err(EvalError::TypeMismatch {
                        expected: "boolean".to_string(),
                        actual: format!("{} and {}", left.data_type(), right.data_type()),
                    });
                }
            };
            Ok(Value::Boolean(match op.op {
                BinaryOperator::And => l && r,
                _ => l || r,
            }))
        }

        BinaryOperator::Eq => Ok(Value::Boolean(left.equal(&right))),
        BinaryOperator::NotEq => Ok(Value::Boolean(!left.equal(&right))),

        BinaryOperator::Lt | BinaryOperator::LtEq | BinaryOperator::Gt | BinaryOperator::GtEq => {
            let ord = left
                .compare(&right)
                .ok_or_else(|| EvalError::UnsupportedOperation(format!(
                    "cannot compare {} with {}",
                    left.data_type(),
                    right.data_type()
                )))?;
            Ok(Value::Boolean(match op.op {
                BinaryOperator::Lt => ord == Ordering::Less,
                BinaryOperator::LtEq => ord != Ordering::Greater,
                BinaryOperator::Gt => ord == Ordering::Greater,
                _ => ord != Ordering::Less,
            }))
        }
    }
}
