use crate::{error::PaginationError, provider::DatasetProvider};
use model::{
    order::spec::OrderSpec,
    pagination::page::{OffsetPage, OffsetRequest},
};
use tracing::debug;

/// Page-number fallback for datasets without a registered keyset
/// ordering. Counts the dataset and skips `(page - 1) * per_page` rows,
/// which is why enforcement refuses this path for large datasets.
pub struct OffsetPaginator;

impl OffsetPaginator {
    pub fn paginate(
        provider: &dyn DatasetProvider,
        order: &OrderSpec,
        request: &OffsetRequest,
    ) -> Result<OffsetPage, PaginationError> {
        let page = request.effective_page();
        let per_page = request.effective_per_page();

        let total_count = provider.count()?;
        // An empty dataset still has one (empty) page.
        let total_pages = if total_count == 0 {
            1
        } else {
            total_count.div_ceil(per_page)
        };

        debug!(page, per_page, total_count, "fetching offset page");
        let rows = provider.query_offset(order, per_page, (page - 1) * per_page)?;

        Ok(OffsetPage {
            rows,
            total_count,
            total_pages,
            current_page: page,
            next_page: (page < total_pages).then_some(page + 1),
            prev_page: (page > 1).then_some(page - 1),
        })
    }
}
