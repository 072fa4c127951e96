use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based game level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(u32);

impl Level {
    pub const FIRST: Level = Level(1);

    /// Creates a level, raising `0` to the first level.
    #[must_use]
    pub fn new(level: u32) -> Self {
        Self(level.max(1))
    }

    /// Creates a level from untrusted input; anything below `1` becomes `1`.
    #[must_use]
    pub fn clamped(raw: i64) -> Self {
        u32::try_from(raw.max(1)).map_or(Self(u32::MAX), Self)
    }

    /// Returns the underlying level number.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Zero-based index, handy for table lookups.
    #[must_use]
    pub fn index(&self) -> usize {
        usize::try_from(self.0.saturating_sub(1)).unwrap_or(usize::MAX)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
