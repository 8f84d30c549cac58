use crate::{
    error::OrderError,
    order::definition::{OrderDefinition, OrderDirection},
    records::row::Row,
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// An ordered list of definitions forming a total order over a dataset.
///
/// Invariants, enforced at construction:
/// - at least one definition;
/// - exactly one `distinct` definition, and it is the last one;
/// - attribute names are unique.
///
/// Deserialization routes through [`OrderSpec::new`], so a serialized
/// spec cannot smuggle in an invalid definition list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OrderDefinition>", into = "Vec<OrderDefinition>")]
pub struct OrderSpec {
    definitions: Vec<OrderDefinition>,
}

impl TryFrom<Vec<OrderDefinition>> for OrderSpec {
    type Error = OrderError;

    fn try_from(definitions: Vec<OrderDefinition>) -> Result<Self, Self::Error> {
        OrderSpec::new(definitions)
    }
}

impl From<OrderSpec> for Vec<OrderDefinition> {
    fn from(spec: OrderSpec) -> Self {
        spec.definitions
    }
}

impl OrderSpec {
    pub fn new(definitions: Vec<OrderDefinition>) -> Result<Self, OrderError> {
        if definitions.is_empty() {
            return Err(OrderError::Empty);
        }

        let distinct_count = definitions.iter().filter(|d| d.distinct).count();
        if distinct_count == 0 {
            return Err(OrderError::MissingTieBreaker);
        }
        if distinct_count > 1 {
            return Err(OrderError::MultipleTieBreakers);
        }
        if let Some(def) = definitions[..definitions.len() - 1].iter().find(|d| d.distinct) {
            return Err(OrderError::TieBreakerNotLast {
                attribute: def.attribute.clone(),
            });
        }

        for (i, def) in definitions.iter().enumerate() {
            let dup = definitions[..i]
                .iter()
                .any(|d| d.attribute.eq_ignore_ascii_case(&def.attribute));
            if dup {
                return Err(OrderError::DuplicateAttribute {
                    attribute: def.attribute.clone(),
                });
            }
        }

        Ok(OrderSpec { definitions })
    }

    /// Shorthand for the common single tie-breaker case.
    pub fn single(definition: OrderDefinition) -> Result<Self, OrderError> {
        OrderSpec::new(vec![definition])
    }

    pub fn definitions(&self) -> &[OrderDefinition] {
        &self.definitions
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.attribute.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Same attribute sequence with every direction flipped. Serves
    /// "last N" requests as "first N of the reversed order". Reversing
    /// twice yields a spec equal to the original.
    pub fn reversed(&self) -> OrderSpec {
        OrderSpec {
            definitions: self.definitions.iter().map(|d| d.reversed()).collect(),
        }
    }

    /// True when both specs name the same attributes in the same order,
    /// ignoring directions. Used by the registry's multi-ordering mode.
    pub fn same_attributes(&self, other: &OrderSpec) -> bool {
        self.definitions.len() == other.definitions.len()
            && self
                .definitions
                .iter()
                .zip(other.definitions.iter())
                .all(|(a, b)| a.attribute.eq_ignore_ascii_case(&b.attribute))
    }

    /// The total order this spec induces over rows. Missing attributes
    /// read as `Null`, which sorts first.
    pub fn compare_rows(&self, left: &Row, right: &Row) -> Result<Ordering, OrderError> {
        for def in &self.definitions {
            let a = left.get_value(&def.attribute);
            let b = right.get_value(&def.attribute);
            let ord = a.compare(&b).ok_or_else(|| OrderError::Incomparable {
                attribute: def.attribute.clone(),
            })?;
            let ord = match def.direction {
                OrderDirection::Ascending => ord,
                OrderDirection::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }
        Ok(Ordering::Equal)
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, def) in self.definitions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{def}")?;
        }
        Ok(())
    }
}
