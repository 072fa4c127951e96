//! Generic round-based quiz controller shared by every question-and-answer game.

use std::time::Duration;

use rand::rngs::StdRng;

use playtime_core::config::RoundConfig;
use playtime_core::content::ContentGenerator;
use playtime_core::model::{
    Challenge, Effect, Level, Notification, RoundState, SessionProgress, Sound,
};
use playtime_core::random;

use crate::feedback::Reaction;
use crate::timers::{Fired, Timeline};

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Correct,
    Incorrect,
    /// Not accepted: the round was not active, or the option does not exist.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundAction {
    Advance,
    Retry,
}

/// Drives `Idle → Active → {Correct | Incorrect | TimedOut} → … → Completed`.
pub struct RoundController<G: ContentGenerator> {
    generator: G,
    config: RoundConfig,
    rng: StdRng,
    state: RoundState,
    challenge: Option<Challenge<G::Item>>,
    selection: Option<usize>,
    progress: SessionProgress,
    timeline: Timeline<RoundAction>,
}

impl<G: ContentGenerator> RoundController<G> {
    #[must_use]
    pub fn new(generator: G, config: RoundConfig, seed: u64) -> Self {
        let progress = SessionProgress::new(config.max_level, config.countdown_secs);
        Self {
            generator,
            config,
            rng: random::seeded(seed),
            state: RoundState::Idle,
            challenge: None,
            selection: None,
            progress,
            timeline: Timeline::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn challenge(&self) -> Option<&Challenge<G::Item>> {
        self.challenge.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[must_use]
    pub fn progress(&self) -> &SessionProgress {
        &self.progress
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.progress.level()
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.timeline.is_disposed()
    }

    /// Begin a fresh session at the first level. Also used to restart after completion.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.is_disposed() {
            return Vec::new();
        }
        self.timeline.cancel();
        self.timeline.stop_interval();
        self.progress = SessionProgress::new(self.config.max_level, self.config.countdown_secs);
        self.load_challenge();
        self.activate();
        tracing::debug!(level = %self.level(), "round session started");
        vec![Effect::Play(Sound::Click)]
    }

    pub fn restart(&mut self) -> Vec<Effect> {
        self.start()
    }

    /// Answer the current challenge with the option at `index`.
    pub fn select(&mut self, index: usize) -> Reaction<SelectOutcome> {
        if self.state != RoundState::Active || self.is_disposed() {
            return Reaction::quiet(SelectOutcome::Ignored);
        }
        let Some(challenge) = self.challenge.as_ref() else {
            return Reaction::quiet(SelectOutcome::Ignored);
        };
        if challenge.option(index).is_none() {
            return Reaction::quiet(SelectOutcome::Ignored);
        }

        self.selection = Some(index);
        self.timeline.stop_interval();

        if challenge.is_correct(index) {
            let notice = self.generator.on_correct(challenge);
            self.state = RoundState::Correct;
            self.progress.award(self.config.reward_points);
            self.timeline
                .schedule(self.config.advance_delay(), RoundAction::Advance);
            tracing::debug!(level = %self.level(), score = self.score(), "answer correct");
            Reaction::new(
                SelectOutcome::Correct,
                vec![Effect::Play(Sound::Correct), Effect::Notify(notice)],
            )
        } else {
            let notice = self.generator.on_incorrect(challenge);
            self.state = RoundState::Incorrect;
            self.progress.break_streak();
            self.timeline
                .schedule(self.config.retry_delay(), RoundAction::Retry);
            tracing::debug!(level = %self.level(), "answer incorrect");
            Reaction::new(
                SelectOutcome::Incorrect,
                vec![Effect::Play(Sound::Incorrect), Effect::Notify(notice)],
            )
        }
    }

    /// Let `elapsed` pass, running every transition that falls due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        let until = self.timeline.now() + elapsed;
        let mut effects = Vec::new();
        while let Some(fired) = self.timeline.pop_due(until) {
            match fired {
                Fired::Delay(RoundAction::Advance) => self.next_round(&mut effects),
                Fired::Delay(RoundAction::Retry) => self.retry(),
                Fired::Tick => self.countdown_tick(&mut effects),
            }
        }
        self.timeline.settle(until);
        effects
    }

    /// Tear down: cancel every pending transition. Nothing changes state afterwards.
    pub fn dispose(&mut self) {
        self.timeline.dispose();
    }

    fn load_challenge(&mut self) {
        let challenge = self.generator.generate(self.progress.level(), &mut self.rng);
        self.challenge = Some(challenge);
        self.selection = None;
    }

    fn activate(&mut self) {
        self.state = RoundState::Active;
        self.selection = None;
        if self.progress.remaining_secs().is_some_and(|secs| secs > 0) {
            self.timeline.start_interval(COUNTDOWN_TICK);
        }
    }

    fn next_round(&mut self, effects: &mut Vec<Effect>) {
        if self.progress.is_last_level() {
            self.state = RoundState::Completed;
            self.timeline.stop_interval();
            tracing::debug!(score = self.score(), "round session completed");
            effects.push(Effect::Play(Sound::Complete));
            effects.push(Effect::Notify(self.generator.on_complete()));
            effects.push(Effect::Celebrate);
            return;
        }
        self.progress.advance_level();
        self.load_challenge();
        self.activate();
    }

    fn retry(&mut self) {
        if self.state == RoundState::Incorrect {
            self.activate();
        }
    }

    fn countdown_tick(&mut self, effects: &mut Vec<Effect>) {
        if self.state != RoundState::Active {
            return;
        }
        if self.progress.tick_countdown() != Some(0) {
            return;
        }
        self.state = RoundState::TimedOut;
        self.selection = None;
        self.progress.break_streak();
        self.timeline.stop_interval();
        self.timeline
            .schedule(self.config.timeout_delay(), RoundAction::Advance);
        tracing::debug!(level = %self.level(), "question timed out");
        effects.push(Effect::Notify(Notification::destructive(
            "Time's up!",
            "You ran out of time for this question.",
        )));
        effects.push(Effect::Play(Sound::Incorrect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playtime_core::content::{ColorGenerator, CountingGenerator};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn wrong_index<T>(challenge: &Challenge<T>) -> usize {
        (0..challenge.options().len())
            .find(|index| !challenge.is_correct(*index))
            .unwrap()
    }

    #[test]
    fn idle_until_started() {
        let mut game = RoundController::new(ColorGenerator::default(), RoundConfig::quiz(), 1);
        assert_eq!(game.state(), RoundState::Idle);
        assert_eq!(game.select(0).outcome, SelectOutcome::Ignored);
        assert_eq!(game.start(), vec![Effect::Play(Sound::Click)]);
        assert_eq!(game.state(), RoundState::Active);
        assert!(game.challenge().is_some());
    }

    #[test]
    fn correct_answer_scores_and_advances_after_delay() {
        let mut game = RoundController::new(CountingGenerator::default(), RoundConfig::quiz(), 9);
        game.start();
        let answer = game.challenge().unwrap().answer_index();

        let reaction = game.select(answer);
        assert_eq!(reaction.outcome, SelectOutcome::Correct);
        assert!(reaction.effects.contains(&Effect::Play(Sound::Correct)));
        assert_eq!(game.state(), RoundState::Correct);
        assert_eq!(game.score(), 10);
        assert_eq!(game.selection(), Some(answer));

        // Further input is ignored during feedback.
        assert_eq!(game.select(answer).outcome, SelectOutcome::Ignored);
        assert_eq!(game.score(), 10);

        assert!(game.advance(ms(1499)).is_empty());
        assert_eq!(game.level(), Level::FIRST);
        game.advance(ms(1));
        assert_eq!(game.state(), RoundState::Active);
        assert_eq!(game.level(), Level::new(2));
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn incorrect_answer_retries_same_level() {
        let mut game = RoundController::new(ColorGenerator::default(), RoundConfig::quiz(), 4);
        game.start();
        let before = game.challenge().unwrap().clone();
        let reaction = game.select(wrong_index(&before));
        assert_eq!(reaction.outcome, SelectOutcome::Incorrect);
        assert_eq!(game.state(), RoundState::Incorrect);
        assert_eq!(game.score(), 0);

        game.advance(ms(1500));
        assert_eq!(game.state(), RoundState::Active);
        assert_eq!(game.level(), Level::FIRST);
        assert_eq!(game.selection(), None);
        assert_eq!(game.challenge(), Some(&before));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut game = RoundController::new(ColorGenerator::default(), RoundConfig::quiz(), 2);
        game.start();
        let reaction = game.select(17);
        assert_eq!(reaction, Reaction::quiet(SelectOutcome::Ignored));
        assert_eq!(game.state(), RoundState::Active);
    }

    #[test]
    fn last_level_completes_and_restart_resets() {
        let config = RoundConfig {
            max_level: 2,
            ..RoundConfig::quiz()
        };
        let mut game = RoundController::new(ColorGenerator::default(), config, 5);
        game.start();
        for _ in 0..2 {
            let answer = game.challenge().unwrap().answer_index();
            game.select(answer);
            let effects = game.advance(ms(1500));
            if game.state() == RoundState::Completed {
                assert!(effects.contains(&Effect::Celebrate));
            }
        }
        assert_eq!(game.state(), RoundState::Completed);
        assert_eq!(game.score(), 20);
        assert_eq!(game.select(0).outcome, SelectOutcome::Ignored);

        game.restart();
        assert_eq!(game.state(), RoundState::Active);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), Level::FIRST);
    }

    #[test]
    fn score_never_decreases() {
        let mut game = RoundController::new(ColorGenerator::default(), RoundConfig::quiz(), 77);
        game.start();
        let mut last = 0;
        for step in 0..60_usize {
            if let Some(challenge) = game.challenge() {
                let pick = if step % 3 == 0 {
                    challenge.answer_index()
                } else {
                    step % challenge.options().len()
                };
                game.select(pick);
            }
            game.advance(ms(700));
            assert!(game.score() >= last);
            last = game.score();
        }
    }

    #[test]
    fn dispose_cancels_pending_transitions() {
        let mut game = RoundController::new(ColorGenerator::default(), RoundConfig::quiz(), 3);
        game.start();
        let answer = game.challenge().unwrap().answer_index();
        game.select(answer);
        game.dispose();
        assert!(game.advance(ms(10_000)).is_empty());
        assert_eq!(game.state(), RoundState::Correct);
        assert_eq!(game.level(), Level::FIRST);
        assert!(game.start().is_empty());
    }
}
