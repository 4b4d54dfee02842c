//! Fixed-size paging over the visible list.
//!
//! All functions are total: out-of-range pages yield empty slices, and a zero
//! page size is treated as 1. Pages are 1-based.

use std::ops::Range;

/// Number of pages needed for `len` items. Never less than 1, so an empty list
/// still has a (blank) first page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Index range of `page` within a list of `len` items.
///
/// Empty when `page` is 0 or past the last page.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let size = page_size.max(1);
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(size).min(len);
    let end = page.saturating_mul(size).min(len);
    start..end
}

/// The items shown on `page`.
pub fn page_items<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Clamp a requested page into `[1, page_count]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(len, page_size))
}

/// A clickable page number in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub page: usize,
    pub active: bool,
}

/// The flat `1..=page_count` strip. No ellipsis compaction for long lists.
pub fn page_indicators(page_count: usize, current: usize) -> Vec<PageIndicator> {
    (1..=page_count)
        .map(|page| PageIndicator {
            page,
            active: page == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(1, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(45, 20), 3);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        assert_eq!(page_count(3, 0), 3);
        assert_eq!(page_range(3, 2, 0), 1..2);
    }

    #[test]
    fn test_page_items_slices() {
        let items: Vec<u32> = (1..=30).collect();
        assert_eq!(page_items(&items, 1, 20), &items[0..20]);
        assert_eq!(page_items(&items, 2, 20), &items[20..30]);
        assert!(page_items(&items, 3, 20).is_empty());
        assert!(page_items(&items, 0, 20).is_empty());
    }

    #[test]
    fn test_page_range_huge_page_does_not_overflow() {
        assert_eq!(page_range(10, usize::MAX, 20), 10..10);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 45, 20), 1);
        assert_eq!(clamp_page(2, 45, 20), 2);
        assert_eq!(clamp_page(9, 45, 20), 3);
        assert_eq!(clamp_page(5, 0, 20), 1);
    }

    #[test]
    fn test_page_indicators_flat_sequence() {
        let strip = page_indicators(3, 2);
        assert_eq!(
            strip,
            vec![
                PageIndicator { page: 1, active: false },
                PageIndicator { page: 2, active: true },
                PageIndicator { page: 3, active: false },
            ]
        );
    }

    proptest! {
        #[test]
        fn pages_partition_the_list(len in 0usize..500, size in 1usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let count = page_count(len, size);
            let mut rebuilt = Vec::with_capacity(len);
            for page in 1..=count {
                let slice = page_items(&items, page, size);
                prop_assert!(slice.len() <= size);
                rebuilt.extend_from_slice(slice);
            }
            prop_assert_eq!(rebuilt, items);
        }
    }
}
