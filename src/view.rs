//! Page slicing for displayed collections

/// Number of pages needed to show `count` items, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Slice out the 1-based `page` of `items`.
///
/// Returns `[page_size * (page - 1), min(page_size * page, len))`. Page 0 is read
/// as page 1 and a page past the end yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = page_size.saturating_mul(page - 1).min(items.len());
    let end = page_size.saturating_mul(page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_never_zero() {
        assert_eq!(total_pages(0, 100), 1);
        assert_eq!(total_pages(1, 100), 1);
        assert_eq!(total_pages(100, 100), 1);
        assert_eq!(total_pages(101, 100), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 2, 10).is_empty());
        assert!(paginate(&items, 100, 10).is_empty());
        assert_eq!(paginate(&items, 0, 2), &[1, 2]);
        assert!(paginate::<u32>(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_paginate_stays_within_bounds() {
        for len in 0..20usize {
            let items: Vec<usize> = (0..len).collect();
            for page_size in 1..7 {
                for page in 0..8 {
                    let slice = paginate(&items, page, page_size);
                    assert!(slice.len() <= page_size);
                    if let Some(first) = slice.first() {
                        assert_eq!(*first, page_size * (page.max(1) - 1));
                    }
                }
            }
        }
    }
}
