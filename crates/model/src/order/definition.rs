use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderDirection {
    pub fn flip(self) -> Self {
        match self {
            OrderDirection::Ascending => OrderDirection::Descending,
            OrderDirection::Descending => OrderDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == OrderDirection::Ascending
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Ascending => write!(f, "ASC"),
            OrderDirection::Descending => write!(f, "DESC"),
        }
    }
}

/// One sortable attribute of a dataset.
///
/// A definition with `distinct = true` is a tie-breaker: the attribute
/// alone uniquely identifies a row, so no further columns are needed
/// after it. Every order spec must end with exactly one such column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDefinition {
    pub attribute: String,
    pub direction: OrderDirection,
    pub distinct: bool,
    pub value_type: DataType,
}

impl OrderDefinition {
    pub fn asc(attribute: &str, value_type: DataType) -> Self {
        OrderDefinition {
            attribute: attribute.to_string(),
            direction: OrderDirection::Ascending,
            distinct: false,
            value_type,
        }
    }

    pub fn desc(attribute: &str, value_type: DataType) -> Self {
        OrderDefinition {
            attribute: attribute.to_string(),
            direction: OrderDirection::Descending,
            distinct: false,
            value_type,
        }
    }

    /// A final, always-unique tie-breaker, typically a primary identifier.
    pub fn tie_breaker(attribute: &str, direction: OrderDirection, value_type: DataType) -> Self {
        OrderDefinition {
            attribute: attribute.to_string(),
            direction,
            distinct: true,
            value_type,
        }
    }

    pub fn reversed(&self) -> Self {
        OrderDefinition {
            attribute: self.attribute.clone(),
            direction: self.direction.flip(),
            distinct: self.distinct,
            value_type: self.value_type,
        }
    }
}

impl fmt::Display for OrderDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.attribute, self.direction)
    }
}
