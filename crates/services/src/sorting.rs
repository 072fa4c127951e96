//! Sorting game: drag each item onto the category it belongs to.

use rand::rngs::StdRng;

use playtime_core::config::SortingConfig;
use playtime_core::content::{SortingRound, sorting_round};
use playtime_core::model::{Effect, Level, Notification, SORTING_SETS, SortCategory, SortItem, Sound};
use playtime_core::random;
use playtime_core::scoring::sorting_score;

use crate::feedback::Reaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed,
    /// Wrong category: only the attempt counter moves.
    Misplaced,
    /// The last item was sorted; carries the level score.
    LevelComplete { score: u32 },
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortingPhase {
    #[default]
    Sorting,
    LevelComplete,
    GameComplete,
}

pub struct SortingGame {
    config: SortingConfig,
    rng: StdRng,
    level: Level,
    round: SortingRound,
    unsorted: Vec<SortItem>,
    sorted: Vec<SortItem>,
    dragging: Option<&'static str>,
    attempts: u32,
    score: u32,
    phase: SortingPhase,
    disposed: bool,
}

impl SortingGame {
    #[must_use]
    pub fn new(config: SortingConfig, seed: u64) -> Self {
        let mut rng = random::seeded(seed);
        let round = sorting_round(Level::FIRST, &mut rng);
        let unsorted = round.items.clone();
        Self {
            config,
            rng,
            level: Level::FIRST,
            round,
            unsorted,
            sorted: Vec::new(),
            dragging: None,
            attempts: 0,
            score: 0,
            phase: SortingPhase::Sorting,
            disposed: false,
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        SORTING_SETS.len()
    }

    #[must_use]
    pub fn set_name(&self) -> &'static str {
        self.round.set.name
    }

    #[must_use]
    pub fn categories(&self) -> &'static [SortCategory] {
        &self.round.set.categories
    }

    #[must_use]
    pub fn unsorted(&self) -> &[SortItem] {
        &self.unsorted
    }

    /// Items already placed in `category_id`, in placement order.
    pub fn sorted_in<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a SortItem> {
        self.sorted
            .iter()
            .filter(move |item| item.category == category_id)
    }

    #[must_use]
    pub fn dragging(&self) -> Option<&'static str> {
        self.dragging
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> SortingPhase {
        self.phase
    }

    /// Pick up an unsorted item. Returns `false` if it cannot be dragged.
    pub fn begin_drag(&mut self, item_id: &str) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.unsorted.iter().find(|item| item.id == item_id) {
            Some(item) => {
                self.dragging = Some(item.id);
                true
            }
            None => false,
        }
    }

    /// Release the dragged item over a category.
    pub fn drop_on(&mut self, category_id: &str) -> Reaction<DropOutcome> {
        match self.dragging.take() {
            Some(item_id) => self.drop_item(item_id, category_id),
            None => Reaction::quiet(DropOutcome::Ignored),
        }
    }

    /// Evaluate placing `item_id` in `category_id`.
    pub fn drop_item(&mut self, item_id: &str, category_id: &str) -> Reaction<DropOutcome> {
        if !self.accepts_input() {
            return Reaction::quiet(DropOutcome::Ignored);
        }
        let Some(position) = self.unsorted.iter().position(|item| item.id == item_id) else {
            return Reaction::quiet(DropOutcome::Ignored);
        };
        let Some(category) = self.round.set.category(category_id) else {
            return Reaction::quiet(DropOutcome::Ignored);
        };
        self.dragging = None;
        self.attempts = self.attempts.saturating_add(1);

        if self.unsorted[position].category != category.id {
            tracing::debug!(item_id, category_id, attempts = self.attempts, "sorting miss");
            return Reaction::new(
                DropOutcome::Misplaced,
                vec![
                    Effect::Play(Sound::Incorrect),
                    Effect::Notify(Notification::destructive(
                        "Try again!",
                        "That doesn't belong there. Try another category!",
                    )),
                ],
            );
        }

        let item = self.unsorted.remove(position);
        self.sorted.push(item);
        let mut effects = vec![
            Effect::Play(Sound::Correct),
            Effect::Notify(Notification::success(
                "Great job!",
                format!("That's right! {} belongs in {}!", item.emoji, category.name),
            )),
        ];
        if !self.unsorted.is_empty() {
            return Reaction::new(DropOutcome::Placed, effects);
        }

        self.phase = SortingPhase::LevelComplete;
        let total_items = u32::try_from(self.sorted.len()).unwrap_or(u32::MAX);
        let earned = sorting_score(&self.config, total_items, self.attempts);
        self.score = self.score.saturating_add(earned);
        tracing::debug!(level = %self.level, earned, attempts = self.attempts, "sorting level complete");
        effects.push(Effect::Play(Sound::Success));
        effects.push(Effect::Notify(Notification::success(
            "Level Complete!",
            "You've sorted all the items correctly!",
        )));
        Reaction::new(DropOutcome::LevelComplete { score: earned }, effects)
    }

    /// Move on after a completed level; past the last set the whole game is complete.
    pub fn next_level(&mut self) -> Vec<Effect> {
        if self.disposed || self.phase != SortingPhase::LevelComplete {
            return Vec::new();
        }
        let level_count = u32::try_from(SORTING_SETS.len()).unwrap_or(u32::MAX);
        if self.level.value() >= level_count {
            self.phase = SortingPhase::GameComplete;
            tracing::debug!(score = self.score, "sorting game complete");
            return vec![
                Effect::Play(Sound::Complete),
                Effect::Notify(Notification::success(
                    "Game Complete!",
                    "You've completed all sorting levels!",
                )),
                Effect::Celebrate,
            ];
        }
        self.level = self.level.next();
        self.deal();
        Vec::new()
    }

    /// Reshuffle the current set and clear its progress. The session score is kept.
    pub fn restart(&mut self) {
        if self.disposed {
            return;
        }
        self.deal();
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.dragging = None;
    }

    fn accepts_input(&self) -> bool {
        !self.disposed && self.phase == SortingPhase::Sorting
    }

    fn deal(&mut self) {
        self.round = sorting_round(self.level, &mut self.rng);
        self.unsorted = self.round.items.clone();
        self.sorted.clear();
        self.dragging = None;
        self.attempts = 0;
        self.phase = SortingPhase::Sorting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_everything(game: &mut SortingGame) -> Reaction<DropOutcome> {
        let mut last = Reaction::quiet(DropOutcome::Ignored);
        while let Some(item) = game.unsorted().first().copied() {
            last = game.drop_item(item.id, item.category);
        }
        last
    }

    #[test]
    fn wrong_category_only_counts_an_attempt() {
        let mut game = SortingGame::new(SortingConfig::default(), 1);
        assert_eq!(game.set_name(), "Colors");
        assert!(game.begin_drag("apple"));
        let reaction = game.drop_on("blue");
        assert_eq!(reaction.outcome, DropOutcome::Misplaced);
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.unsorted().len(), 6);
        assert_eq!(game.dragging(), None);

        assert!(game.begin_drag("apple"));
        assert_eq!(game.drop_on("red").outcome, DropOutcome::Placed);
        assert_eq!(game.attempts(), 2);
        assert_eq!(game.unsorted().len(), 5);
        assert_eq!(game.sorted_in("red").count(), 1);
        assert!(!game.begin_drag("apple"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut game = SortingGame::new(SortingConfig::default(), 2);
        assert_eq!(game.drop_on("red").outcome, DropOutcome::Ignored);
        assert_eq!(game.drop_item("apple", "purple").outcome, DropOutcome::Ignored);
        assert_eq!(game.drop_item("whale", "red").outcome, DropOutcome::Ignored);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn perfect_level_scores_item_count() {
        let mut game = SortingGame::new(SortingConfig::default(), 3);
        let last = sort_everything(&mut game);
        assert_eq!(last.outcome, DropOutcome::LevelComplete { score: 6 });
        assert_eq!(game.phase(), SortingPhase::LevelComplete);
        assert_eq!(game.drop_item("apple", "red").outcome, DropOutcome::Ignored);
    }

    #[test]
    fn one_miss_costs_a_point() {
        let mut game = SortingGame::new(SortingConfig::default(), 4);
        game.drop_item("apple", "yellow");
        assert_eq!(
            sort_everything(&mut game).outcome,
            DropOutcome::LevelComplete { score: 5 }
        );
    }

    #[test]
    fn levels_walk_the_sets_then_the_game_completes() {
        let mut game = SortingGame::new(SortingConfig::default(), 5);
        assert!(game.next_level().is_empty());
        for expected in ["Colors", "Animals", "Shapes"] {
            assert_eq!(game.set_name(), expected);
            sort_everything(&mut game);
            let effects = game.next_level();
            if expected == "Shapes" {
                assert!(effects.contains(&Effect::Celebrate));
            }
        }
        assert_eq!(game.phase(), SortingPhase::GameComplete);
        assert_eq!(game.score(), 18);
    }

    #[test]
    fn restart_reshuffles_current_set() {
        let mut game = SortingGame::new(SortingConfig::default(), 6);
        game.drop_item("apple", "red");
        game.restart();
        assert_eq!(game.unsorted().len(), 6);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.set_name(), "Colors");
    }
}
