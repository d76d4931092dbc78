//! Games state: raw list, filter settings, filtered pages

use super::{Observable, PagedCollection};
use crate::filter::GameFilter;
use crate::model::Game;

#[derive(Debug, Default)]
pub struct GamesState {
    /// Games of the last fetched system, as returned by the server
    pub unfiltered: Observable<Vec<Game>>,
    /// Active filter settings
    pub filter: Observable<GameFilter>,
    /// Games passing `filter`, paged for display
    pub filtered: PagedCollection<Game>,
}

impl GamesState {
    pub fn new(filter: GameFilter) -> Self {
        Self {
            filter: Observable::new(filter),
            ..Self::default()
        }
    }

    /// Re-run the filter over the raw list, then re-page
    pub fn refresh(&self, page_size: usize) {
        let filtered = self
            .filter
            .with(|filter| self.unfiltered.with(|games| filter.apply(games)));
        self.filtered.items.set(filtered);
        self.filtered.refresh(page_size);
    }
}
