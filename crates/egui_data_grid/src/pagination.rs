use std::ops::Range;

pub(crate) const DEFAULT_PAGE_SIZE: usize = 10;

/// Which page of rows is shown, and how many rows a page holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PaginationState {
    /// Zero-based.
    page_index: usize,

    /// Always at least 1.
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    #[inline]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `row_count` rows. An empty table still has one (empty) page.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    /// Indices of the rows on the current page. Never longer than the page size.
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }

    #[inline]
    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    #[inline]
    pub fn can_next_page(&self, row_count: usize) -> bool {
        self.page_index + 1 < self.page_count(row_count)
    }

    /// Go to `page_index`, clamped to the existing pages.
    pub fn set_page_index(&mut self, page_index: usize, row_count: usize) {
        self.page_index = page_index.min(self.page_count(row_count) - 1);
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, row_count: usize) {
        self.set_page_index(self.page_index + 1, row_count);
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn last_page(&mut self, row_count: usize) {
        self.page_index = self.page_count(row_count) - 1;
    }

    /// Change the page size, keeping the first row of the current page in view.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let top_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.page_index = top_row / page_size;
    }

    /// Pull the page index back in range after the row count shrank.
    ///
    /// Returns `true` if the page index changed.
    pub fn clamp(&mut self, row_count: usize) -> bool {
        let last = self.page_count(row_count) - 1;
        if self.page_index > last {
            self.page_index = last;
            true
        } else {
            false
        }
    }
}
