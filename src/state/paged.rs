//! A collection shown one page at a time

use super::Observable;
use crate::view::{paginate, total_pages};

#[derive(Debug)]
pub struct PagedCollection<T> {
    /// Every item that can be paged through
    pub items: Observable<Vec<T>>,
    /// Current 1-based page
    pub page: Observable<usize>,
    /// Derived from `items` and the page size, at least 1
    pub total_pages: Observable<usize>,
    /// Items on the current page
    pub view: Observable<Vec<T>>,
}

impl<T> Default for PagedCollection<T> {
    fn default() -> Self {
        Self {
            items: Observable::new(Vec::new()),
            page: Observable::new(1),
            total_pages: Observable::new(1),
            view: Observable::new(Vec::new()),
        }
    }
}

impl<T: Clone> PagedCollection<T> {
    /// Recompute the page count and the current page from `items`
    pub fn refresh(&self, page_size: usize) {
        let page = self.page.get();
        let (pages, view) = self.items.with(|items| {
            (
                total_pages(items.len(), page_size),
                paginate(items, page, page_size).to_vec(),
            )
        });
        self.total_pages.set(pages);
        self.view.set(view);
    }

    /// Number of items across all pages
    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_slices_current_page() {
        let paged = PagedCollection::default();
        paged.items.set((1..=7).collect::<Vec<u32>>());
        paged.page.set(2);
        paged.refresh(3);

        assert_eq!(paged.total_pages.get(), 3);
        assert_eq!(paged.view.get(), vec![4, 5, 6]);
        assert_eq!(paged.len(), 7);
    }

    #[test]
    fn test_refresh_empty() {
        let paged: PagedCollection<u32> = PagedCollection::default();
        paged.refresh(10);
        assert_eq!(paged.total_pages.get(), 1);
        assert!(paged.view.get().is_empty());
        assert!(paged.is_empty());
    }
}
