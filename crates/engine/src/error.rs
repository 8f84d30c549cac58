use crate::{provider::ProviderError, registry::DatasetType};
use model::error::{CursorError, OrderError};
use thiserror::Error;

/// Errors surfaced by a pagination request. All are synchronous returns;
/// none are retried here — they represent malformed client input or
/// unsupported configurations, not transient failures.
#[derive(Debug, Error, PartialEq)]
pub enum PaginationError {
    #[error("keyset pagination is not supported for dataset '{dataset}' ordered by [{order}]")]
    UnsupportedScopeOrder { dataset: DatasetType, order: String },

    #[error(
        "dataset '{dataset}' requires keyset pagination above {threshold} rows \
         ({row_count} rows present)"
    )]
    EnforcementViolation {
        dataset: DatasetType,
        row_count: u64,
        threshold: u64,
    },

    #[error(transparent)]
    Cursor(#[from] CursorError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
