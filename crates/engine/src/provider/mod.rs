pub mod memory;

use model::{order::spec::OrderSpec, records::row::Row};
use query::ast::expr::Expr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("provider error: {0}")]
pub struct ProviderError(pub String);

/// An ordered collection of rows that can execute predicate + order +
/// limit queries. The predicate is opaque to the paginator: a SQL-backed
/// provider renders it into a WHERE clause, the in-memory provider
/// evaluates it row by row.
///
/// Implementations must honor the exact row order implied by `order`,
/// and must support arbitrary and/or-combinations of simple comparisons
/// on the declared attributes. Consistency of reads under concurrent
/// writes (a stable snapshot per query) is the provider's concern; the
/// engine only guarantees that, given a consistent read, the cursor
/// math is correct.
pub trait DatasetProvider {
    /// Rows matching `filter`, sorted by `order`, at most `limit` of them.
    fn query(&self, filter: &Expr, order: &OrderSpec, limit: usize)
    -> Result<Vec<Row>, ProviderError>;

    /// Offset window into the full dataset. Used only by the offset
    /// fallback path; keyset pagination never skips rows.
    fn query_offset(
        &self,
        order: &OrderSpec,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Row>, ProviderError>;

    /// Total row count. Used by the offset fallback and by enforcement
    /// checks; keyset pagination never counts.
    fn count(&self) -> Result<usize, ProviderError>;
}
