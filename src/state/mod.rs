//! Browser state
//!
//! `Store` is the context object every query operation reads and writes. It is
//! made of observable cells, so a front end can subscribe to exactly the
//! views it renders.

mod games;
mod observable;
mod paged;
mod sizes;

pub use games::GamesState;
pub use observable::Observable;
pub use paged::PagedCollection;
pub use sizes::SizesState;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::BrowseConfig;
use crate::filter::GameFilter;
use crate::model::{Rom, System};

/// Page size used when nothing is configured
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug)]
pub struct Store {
    /// Items per page, shared by every paged view, always at least 1
    pub page_size: Observable<usize>,
    pub systems: PagedCollection<System>,
    pub games: GamesState,
    pub roms: PagedCollection<Rom>,
    pub sizes: SizesState,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, GameFilter::default())
    }
}

impl Store {
    pub fn new(page_size: usize, filter: GameFilter) -> Self {
        Self {
            page_size: Observable::new(page_size.max(1)),
            systems: PagedCollection::default(),
            games: GamesState::new(filter),
            roms: PagedCollection::default(),
            sizes: SizesState::default(),
        }
    }

    /// Build a store seeded with the configured page size and filters
    pub fn from_config(browse: &BrowseConfig) -> Self {
        Self::new(browse.page_size, browse.game_filter())
    }

    /// Log every recomputed view at debug level until the store is dropped
    pub fn log_view_changes(&self) -> Vec<JoinHandle<()>> {
        vec![
            log_changes("systems", self.systems.view.subscribe()),
            log_changes("games", self.games.filtered.view.subscribe()),
            log_changes("roms", self.roms.view.subscribe()),
        ]
    }
}

fn log_changes<T>(name: &'static str, mut rx: watch::Receiver<Vec<T>>) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let shown = rx.borrow_and_update().len();
            tracing::debug!("{} view now shows {} items", name, shown);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_clamped() {
        let store = Store::new(0, GameFilter::default());
        assert_eq!(store.page_size.get(), 1);
    }

    #[test]
    fn test_from_config() {
        let browse = BrowseConfig {
            page_size: 25,
            one_region: true,
            ..BrowseConfig::default()
        };
        let store = Store::from_config(&browse);
        assert_eq!(store.page_size.get(), 25);
        assert!(store.games.filter.get().one_region);
        assert_eq!(store.systems.total_pages.get(), 1);
    }

    #[tokio::test]
    async fn test_view_loggers_stop_with_store() {
        let store = Store::new(2, GameFilter::default());
        let handles = store.log_view_changes();
        assert_eq!(handles.len(), 3);

        store.systems.refresh(2);
        store.games.refresh(2);
        store.roms.refresh(2);
        drop(store);

        for handle in handles {
            handle.await.unwrap();
        }
    }
}
