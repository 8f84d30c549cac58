use crate::{
    core::value::Value,
    order::spec::OrderSpec,
    records::row::{FieldValue, Row},
};
use serde::{Deserialize, Serialize};

/// The sort-key values of one specific row, marking a position in an
/// ordered dataset. Field order follows the order spec. Created
/// transiently per page response and carried between requests as an
/// opaque token; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    fields: Vec<FieldValue>,
}

impl Cursor {
    /// The position before the first row of the dataset.
    pub fn empty() -> Self {
        Cursor { fields: Vec::new() }
    }

    pub fn new(fields: Vec<FieldValue>) -> Self {
        Cursor { fields }
    }

    /// Snapshots the row's value for each order attribute. A missing
    /// attribute reads as `Null`.
    pub fn from_row(order: &OrderSpec, row: &Row) -> Self {
        Cursor {
            fields: order
                .definitions()
                .iter()
                .map(|def| FieldValue::new(&def.attribute, row.get_value(&def.attribute)))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(attribute))
            .map(|f| &f.value)
    }
}
