//! Byte totals for the selected system

use super::Observable;
use crate::model::Sizes;

#[derive(Debug, Default)]
pub struct SizesState {
    pub total_original: Observable<u64>,
    pub one_region_original: Observable<u64>,
    pub total_actual: Observable<u64>,
    pub one_region_actual: Observable<u64>,
}

impl SizesState {
    /// Current values of all four cells
    pub fn snapshot(&self) -> Sizes {
        Sizes {
            total_original: self.total_original.get(),
            one_region_original: self.one_region_original.get(),
            total_actual: self.total_actual.get(),
            one_region_actual: self.one_region_actual.get(),
        }
    }
}
