use crate::records::row::Row;
use serde::{Deserialize, Serialize};

/// Lower bound applied to requested page sizes. A limit of zero has no
/// defined fetch semantics, so it clamps here rather than at call sites.
pub const MIN_LIMIT: usize = 1;

/// One keyset pagination request. `after`/`before` carry encoded cursor
/// tokens; `last` selects backward traversal ("last N before X").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: usize,
    pub after: Option<String>,
    pub before: Option<String>,
    pub last: bool,
    /// When set, a malformed cursor token is treated as "no cursor"
    /// instead of an error. Off by default: a bad token surfaces.
    pub lenient_cursors: bool,
}

impl PageRequest {
    pub fn new(limit: usize) -> Self {
        PageRequest {
            limit,
            after: None,
            before: None,
            last: false,
            lenient_cursors: false,
        }
    }

    pub fn after(mut self, token: impl Into<String>) -> Self {
        self.after = Some(token.into());
        self
    }

    pub fn before(mut self, token: impl Into<String>) -> Self {
        self.before = Some(token.into());
        self
    }

    pub fn last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    pub fn lenient_cursors(mut self, lenient: bool) -> Self {
        self.lenient_cursors = lenient;
        self
    }

    pub fn effective_limit(&self) -> usize {
        self.limit.max(MIN_LIMIT)
    }
}

/// One page of results in caller-facing order, with connection-style
/// metadata. Cursors are encoded tokens for the first and last row, absent
/// when the page is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub rows: Vec<Row>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl Page {
    pub fn empty() -> Self {
        Page {
            rows: Vec::new(),
            has_next_page: false,
            has_previous_page: false,
            start_cursor: None,
            end_cursor: None,
        }
    }
}

/// Legacy page-number request, served by the offset fallback only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetRequest {
    pub page: usize,
    pub per_page: usize,
}

impl OffsetRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        OffsetRequest { page, per_page }
    }

    pub fn effective_page(&self) -> usize {
        self.page.max(1)
    }

    pub fn effective_per_page(&self) -> usize {
        self.per_page.max(MIN_LIMIT)
    }
}

/// Offset fallback result. This is the only place total counts exist:
/// keyset mode never computes them, since counting defeats the purpose of
/// avoiding offset scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetPage {
    pub rows: Vec<Row>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
}
