use crate::provider::{DatasetProvider, ProviderError};
use model::{order::spec::OrderSpec, records::row::Row};
use query::{ast::expr::Expr, eval::evaluate};
use std::cmp::Ordering;

/// Reference provider over an in-memory row set. Filters through the
/// expression evaluator and sorts with the order spec's row comparator,
/// so it honors exactly the contract a SQL-backed provider would.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    rows: Vec<Row>,
}

impl MemoryProvider {
    pub fn new(rows: Vec<Row>) -> Self {
        MemoryProvider { rows }
    }

    fn sorted(&self, order: &OrderSpec) -> Vec<Row> {
        let mut rows = self.rows.clone();
        // Incomparable pairs keep their input order.
        rows.sort_by(|a, b| order.compare_rows(a, b).unwrap_or(Ordering::Equal));
        rows
    }
}

impl DatasetProvider for MemoryProvider {
    fn query(
        &self,
        filter: &Expr,
        order: &OrderSpec,
        limit: usize,
    ) -> Result<Vec<Row>, ProviderError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut selected = Vec::new();
        for row in self.sorted(order) {
            if evaluate(filter, &row).map_err(|e| ProviderError(e.to_string()))? {
                selected.push(row);
                if selected.len() >= limit {
                    break;
                }
            }
        }
        Ok(selected)
    }

    fn query_offset(
        &self,
        order: &OrderSpec,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Row>, ProviderError> {
        Ok(self
            .sorted(order)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    fn count(&self) -> Result<usize, ProviderError> {
        Ok(self.rows.len())
    }
}
