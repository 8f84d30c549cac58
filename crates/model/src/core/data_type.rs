use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a sortable attribute, used for cursor validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Integer,
    Float,
    String,
    Boolean,
    Timestamp,
    Null,
}

impl DataType {
    /// Checks that a decoded cursor value is acceptable for a column of
    /// this type. `Null` values are accepted for every column type
    /// (nullable columns), and `Float` columns accept integral values
    /// since derived numeric expressions may come back as integers.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (DataType::Integer, Value::Int(_)) => true,
            (DataType::Float, Value::Float(_) | Value::Int(_)) => true,
            (DataType::String, Value::String(_)) => true,
            (DataType::Boolean, Value::Boolean(_)) => true,
            (DataType::Timestamp, Value::Timestamp(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Timestamp => "timestamp",
            DataType::Null => "null",
        };
        write!(f, "{name}")
    }
}
