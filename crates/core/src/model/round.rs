use crate::model::level::Level;

/// Where a quiz round currently stands. Exactly one value per game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    #[default]
    Idle,
    Active,
    Correct,
    Incorrect,
    TimedOut,
    Completed,
}

/// Ephemeral counters for one play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    score: u32,
    level: Level,
    max_level: u32,
    streak: u32,
    countdown_secs: Option<u32>,
    remaining_secs: Option<u32>,
}

impl SessionProgress {
    #[must_use]
    pub fn new(max_level: u32, countdown_secs: Option<u32>) -> Self {
        Self {
            score: 0,
            level: Level::FIRST,
            max_level: max_level.max(1),
            streak: 0,
            countdown_secs,
            remaining_secs: countdown_secs,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_last_level(&self) -> bool {
        self.level.value() >= self.max_level
    }

    /// Share of levels already cleared, for progress bars.
    #[must_use]
    pub fn percent(&self) -> u8 {
        let cleared = u64::from(self.level.value().saturating_sub(1));
        let percent = (cleared * 100 / u64::from(self.max_level)).min(100);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Record a correct answer.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.streak = self.streak.saturating_add(1);
    }

    pub fn break_streak(&mut self) {
        self.streak = 0;
    }

    /// Move to the next level and restart the countdown.
    pub fn advance_level(&mut self) -> Level {
        self.level = self.level.next();
        self.reset_countdown();
        self.level
    }

    pub fn reset_countdown(&mut self) {
        self.remaining_secs = self.countdown_secs;
    }

    /// Take one second off the countdown. Returns the seconds left, or `None` for untimed games.
    pub fn tick_countdown(&mut self) -> Option<u32> {
        let remaining = self.remaining_secs.as_mut()?;
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_and_streak() {
        let mut progress = SessionProgress::new(10, None);
        progress.award(10);
        progress.award(10);
        assert_eq!(progress.score(), 20);
        assert_eq!(progress.streak(), 2);
        progress.break_streak();
        assert_eq!(progress.score(), 20);
        assert_eq!(progress.streak(), 0);
    }

    #[test]
    fn countdown_resets_on_advance() {
        let mut progress = SessionProgress::new(5, Some(3));
        assert_eq!(progress.tick_countdown(), Some(2));
        assert_eq!(progress.tick_countdown(), Some(1));
        progress.advance_level();
        assert_eq!(progress.remaining_secs(), Some(3));
        assert_eq!(progress.percent(), 20);
    }

    #[test]
    fn untimed_progress_has_no_countdown() {
        let mut progress = SessionProgress::new(10, None);
        assert_eq!(progress.tick_countdown(), None);
        assert_eq!(progress.percent(), 0);
    }
}
