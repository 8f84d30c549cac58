use crate::{
    error::PaginationError,
    keyset::KeysetPaginator,
    offset::OffsetPaginator,
    provider::DatasetProvider,
    registry::{CapabilityRegistry, DatasetType},
};
use model::{
    order::spec::OrderSpec,
    pagination::page::{OffsetPage, OffsetRequest, Page, PageRequest},
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Keyset,
    Offset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaginationParams {
    Keyset(PageRequest),
    Offset(OffsetRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paginated {
    Keyset(Page),
    Offset(OffsetPage),
}

/// Decides keyset vs. offset pagination per dataset and requested order,
/// and refuses offset pagination where the registry makes keyset
/// mandatory. Enforcement rejects rather than silently degrading, to
/// keep query cost predictable on large datasets.
pub struct StrategySelector<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> StrategySelector<'a> {
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        StrategySelector { registry }
    }

    pub fn available(&self, dataset: &DatasetType, order: &OrderSpec) -> bool {
        self.registry.supports(dataset, order)
    }

    pub fn is_enforced(&self, dataset: &DatasetType) -> bool {
        self.registry.is_enforced(dataset)
    }

    /// Picks the strategy for a request. `row_count` is the dataset size
    /// used for the enforcement threshold; callers without a cheap count
    /// can pass `u64::MAX` to enforce conservatively.
    pub fn select(
        &self,
        dataset: &DatasetType,
        order: &OrderSpec,
        row_count: u64,
    ) -> Result<Strategy, PaginationError> {
        if self.available(dataset, order) {
            return Ok(Strategy::Keyset);
        }
        self.check_enforcement(dataset, row_count)?;
        warn!(dataset = %dataset, order = %order, "keyset pagination unavailable, falling back to offset");
        Ok(Strategy::Offset)
    }

    /// One-call façade: dispatches to the keyset paginator or the offset
    /// fallback according to the supplied parameters. Offset parameters
    /// against an enforced dataset over its threshold are refused even
    /// when a keyset ordering would have been available — opting out is
    /// rejected, not degraded.
    pub fn paginate(
        &self,
        provider: &dyn DatasetProvider,
        dataset: &DatasetType,
        order: &OrderSpec,
        params: &PaginationParams,
    ) -> Result<Paginated, PaginationError> {
        match params {
            PaginationParams::Keyset(request) => {
                let page =
                    KeysetPaginator::new(self.registry).paginate(provider, dataset, order, request)?;
                Ok(Paginated::Keyset(page))
            }
            PaginationParams::Offset(request) => {
                let row_count = provider.count()? as u64;
                self.check_enforcement(dataset, row_count)?;
                let page = OffsetPaginator::paginate(provider, order, request)?;
                Ok(Paginated::Offset(page))
            }
        }
    }

    fn check_enforcement(
        &self,
        dataset: &DatasetType,
        row_count: u64,
    ) -> Result<(), PaginationError> {
        match self.registry.enforcement(dataset) {
            Some(threshold) if row_count > threshold => {
                Err(PaginationError::EnforcementViolation {
                    dataset: dataset.clone(),
                    row_count,
                    threshold,
                })
            }
            _ => Ok(()),
        }
    }
}
