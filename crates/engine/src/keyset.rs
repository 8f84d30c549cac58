use crate::{
    error::PaginationError,
    provider::DatasetProvider,
    registry::{CapabilityRegistry, DatasetType},
};
use model::{
    order::spec::OrderSpec,
    pagination::{
        codec::CursorCodec,
        cursor::Cursor,
        page::{Page, PageRequest},
    },
};
use query::builder::condition::ConditionBuilder;
use tracing::{debug, warn};

/// Produces exactly one page per request. Stateless: every request is
/// validated, bounded, fetched, and re-oriented independently.
pub struct KeysetPaginator<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> KeysetPaginator<'a> {
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        KeysetPaginator { registry }
    }

    /// Fetches one page of `dataset` ordered by `order`.
    ///
    /// A backward request (`last = true`, bounded by `before`) traverses
    /// the reversed order and is re-reversed before returning, so rows
    /// always come back in caller-facing order. The provider is asked for
    /// `limit + 1` rows; the extra row only signals that more exist and is
    /// never returned.
    pub fn paginate(
        &self,
        provider: &dyn DatasetProvider,
        dataset: &DatasetType,
        order: &OrderSpec,
        request: &PageRequest,
    ) -> Result<Page, PaginationError> {
        if !self.registry.supports(dataset, order) {
            return Err(PaginationError::UnsupportedScopeOrder {
                dataset: dataset.clone(),
                order: order.to_string(),
            });
        }

        let limit = request.effective_limit();
        // A `before` bound implies backward traversal even without the
        // `last` flag; ignoring the bound would silently return the
        // wrong page.
        let backward = request.last || request.before.is_some();
        let traversal = if backward { order.reversed() } else { order.clone() };
        let token = if backward {
            request.before.as_deref()
        } else {
            request.after.as_deref()
        };

        let codec = CursorCodec::new(order);
        let cursor = match codec.decode(token.unwrap_or_default()) {
            Ok(cursor) => cursor,
            Err(err) if request.lenient_cursors => {
                warn!(dataset = %dataset, error = %err, "discarding malformed cursor");
                Cursor::empty()
            }
            Err(err) => return Err(err.into()),
        };
        let bounded = !cursor.is_empty();

        // "Strictly after" in the traversal order; for a backward request
        // the traversal is reversed, which makes this "strictly before"
        // the bound in caller-facing order.
        let filter = ConditionBuilder::build_after(&traversal, &cursor)?;

        debug!(dataset = %dataset, limit, backward, bounded, "fetching page");
        let mut rows = provider.query(&filter, &traversal, limit + 1)?;
        let has_more = rows.len() > limit;
        rows.truncate(limit);
        if backward {
            rows.reverse();
        }

        let (has_next_page, has_previous_page) = if backward {
            (bounded, has_more)
        } else {
            (has_more, bounded)
        };

        let start_cursor = rows
            .first()
            .map(|row| codec.encode(&Cursor::from_row(order, row)));
        let end_cursor = rows
            .last()
            .map(|row| codec.encode(&Cursor::from_row(order, row)));

        Ok(Page {
            rows,
            has_next_page,
            has_previous_page,
            start_cursor,
            end_cursor,
        })
    }
}
