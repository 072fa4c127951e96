use rand::Rng;

use crate::model::{Level, SORTING_SETS, SortItem, SortingSet};
use crate::random;

/// The category set for a level with its items in dealing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingRound {
    pub set: &'static SortingSet,
    pub items: Vec<SortItem>,
}

/// Levels past the last set keep replaying the last set.
#[must_use]
pub fn sorting_round<R: Rng + ?Sized>(level: Level, rng: &mut R) -> SortingRound {
    let index = level.index().min(SORTING_SETS.len() - 1);
    let set = &SORTING_SETS[index];
    let mut items = set.items.to_vec();
    random::shuffle(&mut items, rng);
    SortingRound { set, items }
}
