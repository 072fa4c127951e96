//! The quiz games and the daily challenge: each is a `RoundController` over one generator.

use playtime_core::content::{
    ColorGenerator, CountingGenerator, DailyGenerator, LetterGenerator, ShapeGenerator,
};
use playtime_core::time::daily_seed;
use playtime_core::{Clock, GameConfig};

use crate::round::RoundController;

pub type ColorGame = RoundController<ColorGenerator>;
pub type ShapeGame = RoundController<ShapeGenerator>;
pub type LetterGame = RoundController<LetterGenerator>;
pub type CountingGame = RoundController<CountingGenerator>;
pub type DailyChallenge = RoundController<DailyGenerator>;

#[must_use]
pub fn color_game(config: &GameConfig, seed: u64) -> ColorGame {
    RoundController::new(
        ColorGenerator::new(config.option_count),
        config.quiz.clone(),
        seed,
    )
}

#[must_use]
pub fn shape_game(config: &GameConfig, seed: u64) -> ShapeGame {
    RoundController::new(
        ShapeGenerator::new(config.option_count),
        config.quiz.clone(),
        seed,
    )
}

#[must_use]
pub fn letter_game(config: &GameConfig, seed: u64) -> LetterGame {
    RoundController::new(
        LetterGenerator::new(config.option_count),
        config.quiz.clone(),
        seed,
    )
}

#[must_use]
pub fn counting_game(config: &GameConfig, seed: u64) -> CountingGame {
    RoundController::new(
        CountingGenerator::new(config.option_count),
        config.quiz.clone(),
        seed,
    )
}

/// Today's challenge. The option order is stable for the whole calendar day.
#[must_use]
pub fn daily_challenge(config: &GameConfig, clock: &Clock) -> DailyChallenge {
    let today = clock.today();
    tracing::debug!(%today, "daily challenge prepared");
    RoundController::new(DailyGenerator, config.daily.clone(), daily_seed(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use playtime_core::content::DAILY_STEPS;
    use playtime_core::model::{Effect, RoundState};
    use playtime_core::time::fixed_clock;

    #[test]
    fn daily_challenge_is_stable_for_a_day() {
        let config = GameConfig::default();
        let clock = fixed_clock();
        let mut first = daily_challenge(&config, &clock);
        let mut second = daily_challenge(&config, &clock);
        first.start();
        second.start();
        assert_eq!(first.challenge(), second.challenge());
    }

    #[test]
    fn daily_challenge_completes_after_five_steps() {
        let config = GameConfig::default();
        let mut game = daily_challenge(&config, &fixed_clock());
        game.start();
        let mut completed_effects = Vec::new();
        for _ in 0..DAILY_STEPS {
            let answer = game.challenge().unwrap().answer_index();
            game.select(answer);
            completed_effects = game.advance(config.daily.advance_delay());
        }
        assert_eq!(game.state(), RoundState::Completed);
        assert_eq!(game.score(), 50);
        assert!(completed_effects.contains(&Effect::Celebrate));
    }

    #[test]
    fn daily_countdown_times_out_and_advances() {
        let config = GameConfig::default();
        let mut game = daily_challenge(&config, &fixed_clock());
        game.start();
        let effects = game.advance(Duration::from_secs(30));
        assert_eq!(game.state(), RoundState::TimedOut);
        assert!(!effects.is_empty());
        assert_eq!(game.score(), 0);

        game.advance(config.daily.timeout_delay());
        assert_eq!(game.state(), RoundState::Active);
        assert_eq!(game.level().value(), 2);
        assert_eq!(game.progress().remaining_secs(), Some(30));
    }

    #[test]
    fn countdown_pauses_during_feedback() {
        let config = GameConfig::default();
        let mut game = daily_challenge(&config, &fixed_clock());
        game.start();
        game.advance(Duration::from_secs(10));
        assert_eq!(game.progress().remaining_secs(), Some(20));

        let challenge = game.challenge().unwrap().clone();
        let wrong = (0..challenge.options().len())
            .find(|index| !challenge.is_correct(*index))
            .unwrap();
        game.select(wrong);
        game.advance(config.daily.retry_delay());
        assert_eq!(game.state(), RoundState::Active);
        assert_eq!(game.progress().remaining_secs(), Some(20));
    }

    #[test]
    fn counting_level_three_asks_for_three() {
        let config = GameConfig::default();
        let mut game = counting_game(&config, 31);
        game.start();
        for _ in 0..2 {
            let answer = game.challenge().unwrap().answer_index();
            game.select(answer);
            game.advance(config.quiz.advance_delay());
        }
        assert_eq!(game.level().value(), 3);

        let challenge = game.challenge().unwrap();
        assert_eq!(challenge.assets().len(), 3);
        let three = challenge.options().iter().position(|count| *count == 3).unwrap();
        let before = game.score();
        assert_eq!(game.select(three).outcome, crate::round::SelectOutcome::Correct);
        assert_eq!(game.score(), before + 10);
    }

    #[test]
    fn quiz_games_run_ten_levels() {
        let config = GameConfig::default();
        let mut game = counting_game(&config, 11);
        game.start();
        for _ in 0..10 {
            let answer = game.challenge().unwrap().answer_index();
            game.select(answer);
            game.advance(config.quiz.advance_delay());
        }
        assert_eq!(game.state(), RoundState::Completed);
        assert_eq!(game.score(), 100);
    }
}
