//! Pagination engine
//!
//! Slices an ordered sequence into fixed-size pages. Out-of-range pages
//! yield fewer or zero items, never an error.

use serde::Serialize;

/// Fixed page size for the directory view.
pub const PAGE_SIZE: usize = 9;

/// Page metadata for a sliced sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current 1-based page index
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// True page count: ceil(total_items / page_size)
    pub total_pages: usize,
}

impl PageInfo {
    pub fn new(total_items: usize, page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
        }
    }

    /// Page count for display: an empty result still renders one empty page.
    pub fn display_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// 1-based index of the first item on this page, 0 when there are none.
    pub fn first_item(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.page.saturating_sub(1) * self.page_size + 1).min(self.total_items)
    }

    /// 1-based index of the last item on this page.
    pub fn last_item(&self) -> usize {
        (self.page * self.page_size).min(self.total_items)
    }
}

/// Number of pages needed to hold `total_items`.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Slice out the 1-based `page`, clamped to the sequence bounds.
///
/// Page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_one_items_make_three_pages() {
        let items: Vec<u32> = (0..21).collect();
        assert_eq!(total_pages(items.len(), 9), 3);
        assert_eq!(paginate(&items, 1, 9).len(), 9);
        assert_eq!(paginate(&items, 2, 9).len(), 9);
        assert_eq!(paginate(&items, 3, 9), &[18, 19, 20]);
    }

    #[test]
    fn test_concatenating_pages_reconstructs_input() {
        let items: Vec<u32> = (0..25).collect();
        let mut rebuilt = Vec::new();
        for page in 1..=total_pages(items.len(), 9) {
            rebuilt.extend_from_slice(paginate(&items, page, 9));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_an_error() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 7, 9).is_empty());
    }

    #[test]
    fn test_page_zero_behaves_like_page_one() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(&items, 0, 9), paginate(&items, 1, 9));
    }

    #[test]
    fn test_empty_sequence_still_displays_one_page() {
        let info = PageInfo::new(0, 1, 9);
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.display_pages(), 1);
        assert_eq!(info.first_item(), 0);
        assert_eq!(info.last_item(), 0);
    }

    #[test]
    fn test_item_range_metadata() {
        let info = PageInfo::new(21, 3, 9);
        assert_eq!(info.first_item(), 19);
        assert_eq!(info.last_item(), 21);

        let first = PageInfo::new(21, 1, 9);
        assert_eq!(first.first_item(), 1);
        assert_eq!(first.last_item(), 9);
    }
}
