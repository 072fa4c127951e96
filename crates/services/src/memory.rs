//! Memory match: flip two cards, keep matching pairs face up.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;

use playtime_core::config::MemoryConfig;
use playtime_core::content::{MemoryCard, MemoryDealer};
use playtime_core::model::{Effect, Level, Notification, Sound};
use playtime_core::random;
use playtime_core::scoring::memory_score;

use crate::feedback::Reaction;
use crate::timers::{Fired, Timeline};

const STOPWATCH_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a pair turned over.
    Revealed,
    Matched,
    /// Both cards flip back after the mismatch delay.
    Mismatched,
    /// The last pair was found; carries the level score.
    Completed { score: u32 },
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryAction {
    HideMismatch,
    ReleaseMatch,
}

pub struct MemoryGame {
    config: MemoryConfig,
    dealer: MemoryDealer,
    rng: StdRng,
    level: Level,
    deck: Vec<MemoryCard>,
    face_up: Vec<usize>,
    matched: HashSet<&'static str>,
    moves: u32,
    elapsed_secs: u32,
    started: bool,
    complete: bool,
    score: u32,
    timeline: Timeline<MemoryAction>,
}

impl MemoryGame {
    /// Deal the first level. The stopwatch starts with the first flip.
    #[must_use]
    pub fn new(config: MemoryConfig, seed: u64) -> Self {
        let dealer = MemoryDealer::new(&config);
        let mut game = Self {
            config,
            dealer,
            rng: random::seeded(seed),
            level: Level::FIRST,
            deck: Vec::new(),
            face_up: Vec::with_capacity(2),
            matched: HashSet::new(),
            moves: 0,
            elapsed_secs: 0,
            started: false,
            complete: false,
            score: 0,
            timeline: Timeline::new(),
        };
        game.deal();
        game
    }

    #[must_use]
    pub fn deck(&self) -> &[MemoryCard] {
        &self.deck
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Accumulated over every completed level of the session.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.len() / 2
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Indices currently turned over and awaiting comparison or release.
    #[must_use]
    pub fn face_up(&self) -> &[usize] {
        &self.face_up
    }

    /// Whether the card shows its face: turned over or already matched.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.face_up.contains(&index)
            || self
                .deck
                .get(index)
                .is_some_and(|card| self.matched.contains(card.token))
    }

    pub fn flip(&mut self, index: usize) -> Reaction<FlipOutcome> {
        if self.complete || self.timeline.is_disposed() || self.face_up.len() >= 2 {
            return Reaction::quiet(FlipOutcome::Ignored);
        }
        if index >= self.deck.len() || self.is_revealed(index) {
            return Reaction::quiet(FlipOutcome::Ignored);
        }

        if !self.started {
            self.started = true;
            self.timeline.start_interval(STOPWATCH_TICK);
        }
        self.face_up.push(index);

        let &[first, second] = self.face_up.as_slice() else {
            return Reaction::new(FlipOutcome::Revealed, vec![Effect::Play(Sound::Click)]);
        };

        self.moves = self.moves.saturating_add(1);
        let token = self.deck[first].token;
        if token != self.deck[second].token {
            self.timeline
                .schedule(self.config.mismatch_delay(), MemoryAction::HideMismatch);
            tracing::debug!(moves = self.moves, "memory mismatch");
            return Reaction::new(FlipOutcome::Mismatched, vec![Effect::Play(Sound::Incorrect)]);
        }

        self.matched.insert(token);
        self.timeline
            .schedule(self.config.match_release_delay(), MemoryAction::ReleaseMatch);
        tracing::debug!(moves = self.moves, matched = self.matched.len(), "memory match");

        if self.matched.len() < self.total_pairs() {
            return Reaction::new(FlipOutcome::Matched, vec![Effect::Play(Sound::Correct)]);
        }
        self.finish_level()
    }

    /// Let `elapsed` pass: hide mismatches, release matched slots, run the stopwatch.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timeline.now() + elapsed;
        while let Some(fired) = self.timeline.pop_due(until) {
            match fired {
                Fired::Delay(MemoryAction::HideMismatch | MemoryAction::ReleaseMatch) => {
                    self.face_up.clear();
                }
                Fired::Tick => self.elapsed_secs = self.elapsed_secs.saturating_add(1),
            }
        }
        self.timeline.settle(until);
    }

    /// Deal the next, larger board. Only available once the current level is complete.
    pub fn next_level(&mut self) -> bool {
        if !self.complete || self.timeline.is_disposed() {
            return false;
        }
        self.level = self.level.next();
        self.deal();
        true
    }

    /// Back to level one with a fresh deck and zero score.
    pub fn restart(&mut self) {
        if self.timeline.is_disposed() {
            return;
        }
        self.level = Level::FIRST;
        self.score = 0;
        self.deal();
    }

    pub fn dispose(&mut self) {
        self.timeline.dispose();
    }

    fn finish_level(&mut self) -> Reaction<FlipOutcome> {
        self.complete = true;
        self.timeline.stop_interval();
        let total_pairs = u32::try_from(self.total_pairs()).unwrap_or(u32::MAX);
        let earned = memory_score(
            &self.config,
            self.level.value(),
            self.moves,
            total_pairs,
            self.elapsed_secs,
        );
        self.score = self.score.saturating_add(earned);
        tracing::debug!(level = %self.level, earned, moves = self.moves, "memory level complete");
        Reaction::new(
            FlipOutcome::Completed { score: earned },
            vec![
                Effect::Play(Sound::Complete),
                Effect::Notify(Notification::success(
                    "Level Complete!",
                    format!(
                        "You found all pairs in {} moves and {} seconds!",
                        self.moves, self.elapsed_secs
                    ),
                )),
                Effect::Celebrate,
            ],
        )
    }

    fn deal(&mut self) {
        self.timeline.cancel();
        self.timeline.stop_interval();
        self.deck = self.dealer.deal(self.level, &mut self.rng);
        self.face_up.clear();
        self.matched.clear();
        self.moves = 0;
        self.elapsed_secs = 0;
        self.started = false;
        self.complete = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn partner(game: &MemoryGame, index: usize) -> usize {
        let card = game.deck()[index];
        game.deck()
            .iter()
            .position(|other| other.token == card.token && other.copy != card.copy)
            .unwrap()
    }

    fn non_partner(game: &MemoryGame, index: usize) -> usize {
        let token = game.deck()[index].token;
        game.deck()
            .iter()
            .position(|other| other.token != token)
            .unwrap()
    }

    fn solve(game: &mut MemoryGame) -> Vec<Reaction<FlipOutcome>> {
        let mut reactions = Vec::new();
        for index in 0..game.deck().len() {
            if game.is_revealed(index) {
                continue;
            }
            let other = partner(game, index);
            game.flip(index);
            reactions.push(game.flip(other));
            game.advance(ms(500));
        }
        reactions
    }

    #[test]
    fn mismatch_flips_back_after_delay() {
        let mut game = MemoryGame::new(MemoryConfig::default(), 3);
        let other = non_partner(&game, 0);
        assert_eq!(game.flip(0).outcome, FlipOutcome::Revealed);
        assert_eq!(game.flip(other).outcome, FlipOutcome::Mismatched);
        assert_eq!(game.moves(), 1);

        let third = (0..game.deck().len())
            .find(|index| *index != 0 && *index != other)
            .unwrap();
        assert_eq!(game.flip(third).outcome, FlipOutcome::Ignored);

        game.advance(ms(999));
        assert_eq!(game.face_up(), &[0, other]);
        game.advance(ms(1));
        assert!(game.face_up().is_empty());
        assert!(!game.is_revealed(0));
    }

    #[test]
    fn match_stays_revealed() {
        let mut game = MemoryGame::new(MemoryConfig::default(), 8);
        let other = partner(&game, 0);
        game.flip(0);
        assert_eq!(game.flip(other).outcome, FlipOutcome::Matched);
        game.advance(ms(500));
        assert!(game.face_up().is_empty());
        assert!(game.is_revealed(0));
        assert!(game.is_revealed(other));
        assert_eq!(game.flip(0).outcome, FlipOutcome::Ignored);
    }

    #[test]
    fn flipping_the_same_card_twice_is_ignored() {
        let mut game = MemoryGame::new(MemoryConfig::default(), 5);
        game.flip(2);
        assert_eq!(game.flip(2).outcome, FlipOutcome::Ignored);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn perfect_level_scores_with_time_penalty() {
        let mut game = MemoryGame::new(MemoryConfig::default(), 21);
        assert_eq!(game.total_pairs(), 5);
        game.flip(0);
        game.advance(Duration::from_secs(20));
        let other = partner(&game, 0);
        game.flip(other);
        game.advance(ms(500));
        let last = solve(&mut game).pop().unwrap();
        assert_eq!(last.outcome, FlipOutcome::Completed { score: 8 });
        assert!(last.effects.contains(&Effect::Celebrate));
        assert!(game.is_complete());
        assert_eq!(game.moves(), 5);
        assert_eq!(game.score(), 8);
    }

    #[test]
    fn next_level_deals_more_pairs_and_keeps_score() {
        let mut game = MemoryGame::new(MemoryConfig::default(), 13);
        assert!(!game.next_level());
        solve(&mut game);
        assert!(game.is_complete());
        let score = game.score();
        assert!(game.next_level());
        assert_eq!(game.level(), Level::new(2));
        assert_eq!(game.total_pairs(), 6);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.score(), score);

        game.restart();
        assert_eq!(game.level(), Level::FIRST);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn disposed_game_ignores_everything() {
        let mut game = MemoryGame::new(MemoryConfig::default(), 1);
        let other = non_partner(&game, 0);
        game.flip(0);
        game.flip(other);
        game.dispose();
        game.advance(Duration::from_secs(5));
        assert_eq!(game.face_up(), &[0, other]);
        assert_eq!(game.flip(3).outcome, FlipOutcome::Ignored);
    }
}
