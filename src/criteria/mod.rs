//! Request descriptors: page/sort criteria, the paged result envelope, and stored-procedure calls.

mod paging;
mod procedure;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use paging::Paging;
pub use procedure::{ProcedureCriteria, ProcedureDirection, ProcedureParam};

/// One page request: which page, how large, in what order, and whether a previously
/// computed row count may be reused.
///
/// Paging is active only when both `page` and `size` are set and `size` is non-zero.
/// A `page` of zero or below is treated as page 1 by every offset calculation; the stored
/// value itself is left alone.
///
/// ```rust
/// use sql_dao::prelude::*;
///
/// let criteria = Criteria::paged(2, 20).sort_desc("created_at");
/// assert_eq!(criteria.row_start(), Some(20));
/// assert_eq!(criteria.oracle_row_end(), Some(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    pub page: Option<i32>,
    pub size: Option<u32>,
    pub sorts: IndexMap<String, String>,
    pub skip_row_count: bool,
    pub total_element: Option<u64>,
}

impl Criteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paged(page: i32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Self::default()
        }
    }

    /// Append a sort column. The direction is emitted verbatim.
    #[must_use]
    pub fn sort(mut self, column: impl Into<String>, direction: impl Into<String>) -> Self {
        self.add_sort(column, direction);
        self
    }

    #[must_use]
    pub fn sort_asc(self, column: impl Into<String>) -> Self {
        self.sort(column, "ASC")
    }

    #[must_use]
    pub fn sort_desc(self, column: impl Into<String>) -> Self {
        self.sort(column, "DESC")
    }

    pub fn add_sort(&mut self, column: impl Into<String>, direction: impl Into<String>) {
        self.sorts.insert(column.into(), direction.into());
    }

    /// Reuse `total` instead of running the count query on the next paged call.
    #[must_use]
    pub fn with_cached_total(mut self, total: u64) -> Self {
        self.skip_row_count = true;
        self.total_element = Some(total);
        self
    }

    /// Copy page, size, and sorts from another request, keeping this one's count settings.
    pub fn with_paging_and_sorting_from(&mut self, other: &Criteria) {
        self.sorts = other.sorts.clone();
        self.size = other.size;
        self.page = other.page;
    }

    #[must_use]
    pub fn is_paging(&self) -> bool {
        self.page.is_some() && matches!(self.size, Some(size) if size > 0)
    }

    #[must_use]
    pub fn is_empty_sort(&self) -> bool {
        self.sorts.is_empty()
    }

    /// True when a fresh count is worth running: no page, or the first one.
    #[must_use]
    pub fn is_count_query(&self) -> bool {
        self.page.is_none_or(|page| page <= 1)
    }

    /// The 1-based page with values below 1 clamped to 1.
    #[must_use]
    pub fn normalized_page(&self) -> Option<u64> {
        self.page
            .map(|page| u64::try_from(page).unwrap_or(0).max(1))
    }

    /// Zero-based index of the first row on the page: `(page - 1) * size`.
    #[must_use]
    pub fn row_start(&self) -> Option<u64> {
        if !self.is_paging() {
            return None;
        }
        let page = self.normalized_page()?;
        let size = u64::from(self.size?);
        Some((page - 1) * size)
    }

    #[must_use]
    pub fn mysql_offset(&self) -> Option<u64> {
        self.row_start()
    }

    #[must_use]
    pub fn mssql_offset(&self) -> Option<u64> {
        self.row_start()
    }

    /// First `ROWNUM` on the page (1-based).
    #[must_use]
    pub fn oracle_row_start(&self) -> Option<u64> {
        self.row_start().map(|start| start + 1)
    }

    /// Last `ROWNUM` on the page (inclusive).
    #[must_use]
    pub fn oracle_row_end(&self) -> Option<u64> {
        Some(self.row_start()? + u64::from(self.size?))
    }
}
