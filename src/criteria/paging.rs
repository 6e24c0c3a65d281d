use serde::{Deserialize, Serialize};

use super::Criteria;

/// One page of results plus the page arithmetic derived from the total row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    /// The request this page answers, with `total_element` filled in so the caller can pass
    /// it back with `skip_row_count` for the next page.
    pub criteria: Option<Criteria>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            first: false,
            last: false,
            criteria: None,
        }
    }
}

impl<T> Paging<T> {
    /// Assemble a page and derive `total_pages`, `first`, and `last`.
    #[must_use]
    pub fn new(items: Vec<T>, total_elements: u64, criteria: Option<Criteria>) -> Self {
        let mut paging = Self {
            items,
            total_elements,
            criteria,
            ..Self::default()
        };
        paging.calculate_total_page();
        paging
    }

    /// Recompute the derived fields from `total_elements` and `criteria`.
    ///
    /// Zero rows or no criteria: `first`, no pages, `last` stays false. Criteria without
    /// paging (no page or no size): everything is on one page, so `total_pages` is 1 and
    /// both `first` and `last` are true. Earlier releases reported 0 pages with `first` and
    /// `last` false in that case; callers comparing against those values must update.
    pub fn calculate_total_page(&mut self) {
        let Some(criteria) = self.criteria.as_ref().filter(|_| self.total_elements > 0) else {
            self.first = true;
            self.total_pages = 0;
            return;
        };

        match (criteria.normalized_page(), criteria.size) {
            (Some(page), Some(size)) if criteria.is_paging() => {
                self.total_pages = self.total_elements.div_ceil(u64::from(size));
                self.first = page == 1;
                self.last = page >= self.total_pages;
            }
            _ => {
                self.total_pages = 1;
                self.first = true;
                self.last = true;
            }
        }
    }

    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    /// Convert the items while keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paging<U> {
        Paging {
            items: self.items.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
            criteria: self.criteria,
        }
    }
}
