use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// A page of items plus everything the templates need to draw the
/// pagination controls.
///
/// `pages` is a window of page numbers around the current page with `None`
/// marking an elided gap, e.g. `1 2 … 5 6 7 … 11 12`.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            page,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
            pages: page_window(total_pages, page, 2, 2),
        }
    }
}

/// Page numbers to render: `edge` pages at each end and `around` pages on
/// each side of the current page, with `None` where ranges do not touch.
fn page_window(
    total_pages: usize,
    current_page: usize,
    edge: usize,
    around: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    // A current page past the end would otherwise leave a trailing gap
    // marker with no page after it.
    let current_page = current_page.min(total_pages);

    let mut pages = Vec::new();

    let left_end = (1 + edge).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(around));
    let mid_end = (current_page + around + 1).min(total_pages + 1);
    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(edge) + 1);
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}
