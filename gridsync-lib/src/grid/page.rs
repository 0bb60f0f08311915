//! Pagination state for the grid projection

/// Which slice of the filtered, sorted rows to render.
///
/// `size = None` means unpaginated: the whole row set is one page. The page
/// index is clamped during slicing, so state pointing past the end of a
/// shrunken row set degrades to an empty page rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    index: usize,
    size: Option<usize>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::all()
    }
}

impl PageState {
    /// Creates an unpaginated state.
    pub fn all() -> Self {
        Self {
            index: 0,
            size: None,
        }
    }

    /// Creates a state for the first page with the given page size.
    ///
    /// A size of zero is treated as one row per page.
    pub fn with_size(size: usize) -> Self {
        Self {
            index: 0,
            size: Some(size.max(1)),
        }
    }

    /// Returns the zero-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the page size, or `None` when unpaginated.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Moves to a specific page.
    pub fn go_to(&mut self, index: usize) {
        self.index = index;
    }

    /// Moves to the next page.
    pub fn next(&mut self) {
        self.index += 1;
    }

    /// Moves to the previous page, stopping at the first.
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Returns the number of pages a row set of the given size spans.
    ///
    /// An empty row set still has one (empty) page.
    pub fn page_count(&self, row_count: usize) -> usize {
        match self.size {
            None => 1,
            Some(size) => row_count.div_ceil(size).max(1),
        }
    }

    /// Returns the slice of items falling on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.size {
            None => items,
            Some(size) => {
                let start = self.index.saturating_mul(size).min(items.len());
                let end = (start + size).min(items.len());
                &items[start..end]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaginated_returns_everything() {
        let items = [1, 2, 3];
        assert_eq!(PageState::all().slice(&items), &items);
        assert_eq!(PageState::all().page_count(3), 1);
    }

    #[test]
    fn test_slices_by_page() {
        let items = [1, 2, 3, 4, 5];
        let mut page = PageState::with_size(2);
        assert_eq!(page.slice(&items), &[1, 2]);
        page.next();
        assert_eq!(page.slice(&items), &[3, 4]);
        page.next();
        assert_eq!(page.slice(&items), &[5]);
        assert_eq!(page.page_count(5), 3);
    }

    #[test]
    fn test_index_past_end_yields_empty_page() {
        let items = [1, 2, 3];
        let mut page = PageState::with_size(2);
        page.go_to(9);
        assert_eq!(page.slice(&items), &[] as &[i32]);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut page = PageState::with_size(2);
        page.prev();
        assert_eq!(page.index(), 0);
    }

    #[test]
    fn test_empty_row_set_has_one_page() {
        assert_eq!(PageState::with_size(10).page_count(0), 1);
    }
}
