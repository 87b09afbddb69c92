pub const RESULTS_PER_PAGE: usize = 10;

/// Requested page, 1-indexed. The page number may run past the end of the
/// current results; [`paginate`] clamps it when slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn first() -> Self {
        Self {
            page_number: 1,
            page_size: RESULTS_PER_PAGE,
        }
    }

    pub fn with_page(self, page_number: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            ..self
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
    /// The page actually sliced after clamping.
    pub page_number: usize,
}

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

pub fn paginate<T>(items: &[T], page: PageState) -> Page<'_, T> {
    let page_size = page.page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page_number = page.page_number.clamp(1, total_pages);
    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        visible: &items[start.min(end)..end],
        total_pages,
        page_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_one_empty_page() {
        let items: [u8; 0] = [];
        let page = paginate(&items, PageState::first().with_page(3));
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items = [1, 2, 3];
        let page = paginate(
            &items,
            PageState {
                page_number: 2,
                page_size: 0,
            },
        );
        assert_eq!(page.visible, &[2]);
        assert_eq!(page.total_pages, 3);
    }
}
