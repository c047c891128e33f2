//! This modules defines the common functionality for paging data.
//!
//! Paging happens over a list that has already been fetched in full, so the
//! total number of items is always known.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The number of records to display per page.
    pub page_size: usize,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_pages: 5,
        }
    }
}

/// One page of a list of items.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    /// The 1-based page number.
    pub number: usize,
    /// The items on this page.
    pub items: &'a [T],
    /// The position of the first item on this page within the full list, starting at 1.
    pub first_serial: usize,
    /// The number of pages needed to show every item.
    pub page_count: usize,
    /// Whether there is a page before this one.
    pub has_previous: bool,
    /// Whether there is a page after this one.
    pub has_next: bool,
}

/// The number of pages needed to show `total` items, `page_size` at a time.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }

    total.div_ceil(page_size)
}

/// Get page number `page` (1-based) of `items`.
///
/// Pages past the end are empty. `has_next` is decided from the total number
/// of items, so a list whose length is a multiple of `page_size` does not
/// offer an empty trailing page.
pub fn get_page<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        number: page,
        items: &items[start..end],
        first_serial: start + 1,
        page_count: page_count(items.len(), page_size),
        has_previous: page > 1,
        has_next: page.saturating_mul(page_size) < items.len(),
    }
}

/// One element of the row of page links under a table.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(usize),
    /// The page being shown.
    CurrPage(usize),
    /// A gap in the page numbers.
    Ellipsis,
    /// A link to the following page.
    NextButton(usize),
    /// A link to the preceding page.
    BackButton(usize),
}

/// Lay out the page links for page `curr_page` of `page_count`, showing at most `max_pages` numbers.
pub fn create_pagination_indicators(
    curr_page: usize,
    page_count: usize,
    max_pages: usize,
) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let mut indicators: Vec<PaginationIndicator> = if page_count <= max_pages {
        (1..=page_count).map(map_page).collect()
    } else if curr_page <= (max_pages / 2) {
        (1..=max_pages).map(map_page).collect()
    } else if curr_page > (page_count - max_pages / 2) {
        ((page_count - max_pages + 1)..=page_count)
            .map(map_page)
            .collect()
    } else {
        ((curr_page - max_pages / 2)..=(curr_page + max_pages / 2))
            .map(map_page)
            .collect()
    };

    if page_count > max_pages {
        if curr_page > (max_pages / 2) + 1 {
            indicators.insert(0, PaginationIndicator::Page(1));
            indicators.insert(1, PaginationIndicator::Ellipsis);
        }

        if curr_page < (page_count - max_pages / 2) {
            indicators.push(PaginationIndicator::Ellipsis);
            indicators.push(PaginationIndicator::Page(page_count));
        }
    }

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}

#[cfg(test)]
mod tests {
    use crate::pagination::{PaginationIndicator, create_pagination_indicators, get_page};

    #[test]
    fn shows_all_pages() {
        let max_pages = 5;
        let page_count = 5;
        let curr_page = 1;
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_on_left() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 1;
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_both_buttons_and_trailing_ellipsis() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 3;
        let want = [
            PaginationIndicator::BackButton(2),
            PaginationIndicator::Page(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::CurrPage(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(4),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_on_right() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 10;
        let want = [
            PaginationIndicator::BackButton(9),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::Page(8),
            PaginationIndicator::Page(9),
            PaginationIndicator::CurrPage(10),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_both_buttons_and_leading_ellipsis() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 8;
        let want = [
            PaginationIndicator::BackButton(7),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::CurrPage(8),
            PaginationIndicator::Page(9),
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(9),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn pagination_indicator_shows_page_subset_in_center() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 5;
        let want = [
            PaginationIndicator::BackButton(4),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::CurrPage(5),
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(6),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }
    #[test]
    fn shows_nothing_without_pages() {
        let got = create_pagination_indicators(1, 0, 5);

        assert!(got.is_empty());
    }

    #[test]
    fn pages_of_twenty_five_items() {
        let items: Vec<usize> = (1..=25).collect();

        let first = get_page(&items, 1, 10);
        let second = get_page(&items, 2, 10);
        let third = get_page(&items, 3, 10);

        assert_eq!(first.items.len(), 10);
        assert_eq!(second.items.len(), 10);
        assert_eq!(third.items, &[21, 22, 23, 24, 25]);
        assert_eq!(third.first_serial, 21);
        assert_eq!(third.page_count, 3);
        assert!(!first.has_previous);
        assert!(first.has_next);
        assert!(second.has_previous && second.has_next);
        assert!(third.has_previous);
        assert!(!third.has_next);
    }

    #[test]
    fn no_next_page_when_items_fill_the_last_page_exactly() {
        let items: Vec<usize> = (1..=10).collect();

        let page = get_page(&items, 1, 10);

        assert_eq!(page.items.len(), 10);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (1..=5).collect();

        let page = get_page(&items, 4, 10);

        assert!(page.items.is_empty());
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn page_zero_is_treated_as_the_first_page() {
        let items: Vec<usize> = (1..=5).collect();

        let page = get_page(&items, 0, 10);

        assert_eq!(page.number, 1);
        assert_eq!(page.items.len(), 5);
    }
}
