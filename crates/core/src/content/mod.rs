//! Content generators: pure functions of a level and an RNG.

mod daily;
mod memory;
mod quiz;
mod sorting;

use rand::Rng;

use crate::model::{Challenge, Level, Notification};
use crate::random;

pub use daily::{DAILY_STEPS, DailyGenerator, DailyOption};
pub use memory::{MemoryCard, MemoryDealer};
pub use quiz::{ColorGenerator, CountingGenerator, LetterGenerator, MAX_COUNT, ShapeGenerator};
pub use sorting::{SortingRound, sorting_round};

/// Produces the challenge for a level, plus the wording of the feedback around it.
pub trait ContentGenerator {
    type Item: Clone + std::fmt::Debug;

    fn generate<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Challenge<Self::Item>;

    fn on_correct(&self, _challenge: &Challenge<Self::Item>) -> Notification {
        Notification::success("Great job!", "You got it right!")
    }

    fn on_incorrect(&self, _challenge: &Challenge<Self::Item>) -> Notification {
        Notification::destructive("Try again!", "That's not the right answer. Keep trying!")
    }

    fn on_complete(&self) -> Notification {
        Notification::success("Amazing!", "You've completed all levels!")
    }
}

/// Draw one answer from `pool` and up to `option_count - 1` other pool entries as distractors.
///
/// `pool` must hold distinct entries and must not be empty.
fn draw<T: Clone, R: Rng + ?Sized>(pool: &[T], option_count: usize, rng: &mut R) -> (T, Vec<T>) {
    debug_assert!(!pool.is_empty(), "content pools are never empty");
    let answer_at = rng.random_range(0..pool.len());
    let rest: Vec<T> = pool
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != answer_at)
        .map(|(_, entry)| entry.clone())
        .collect();
    let distractors = random::sample(&rest, option_count.saturating_sub(1), rng);
    (pool[answer_at].clone(), distractors)
}

/// Pool size of the discrete-category games: grows by one every two levels.
fn pool_size(level: Level, catalog_len: usize) -> usize {
    let grown = 3 + level.value() / 2;
    usize::try_from(grown).map_or(catalog_len, |size| size.min(catalog_len))
}
