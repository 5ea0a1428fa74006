//! Fixed-size paging over an ordered slice.

/// Number of pages needed for `total` items, rounding up.
///
/// A zero `per_page` yields zero pages.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Return the 1-indexed `page` of `items`.
///
/// Page 0, a zero page size, and pages past the end all yield an empty slice.
pub fn paginate<T>(items: &[T], per_page: usize, page: usize) -> &[T] {
    if per_page == 0 || page == 0 {
        return &[];
    }

    let Some(start) = (page - 1).checked_mul(per_page) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn pages_fifty_items() {
        let items: Vec<usize> = (0..50).collect();

        assert_eq!(paginate(&items, 10, 1), &items[0..10]);
        assert_eq!(paginate(&items, 10, 5), &items[40..50]);
        assert!(paginate(&items, 10, 6).is_empty());
        assert_eq!(total_pages(items.len(), 10), 5);
    }

    #[test]
    fn partial_last_page() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(paginate(&items, 10, 3), &items[20..23]);
        assert_eq!(total_pages(items.len(), 10), 3);
    }

    #[test]
    fn page_zero_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 10, 0).is_empty());
    }

    #[test]
    fn huge_page_number_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 10, usize::MAX).is_empty());
    }

    #[test]
    fn empty_input() {
        let items: [u8; 0] = [];
        assert!(paginate(&items, 10, 1).is_empty());
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn zero_page_size() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 1).is_empty());
        assert_eq!(total_pages(3, 0), 0);
    }
}
