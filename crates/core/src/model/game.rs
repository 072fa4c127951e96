use std::fmt;

pub const HOME_PATH: &str = "/";
pub const HUB_PATH: &str = "/games";

/// Every game the hub links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Colors,
    Shapes,
    Numbers,
    Letters,
    Music,
    Memory,
    Sorting,
    DailyChallenge,
}

impl GameKind {
    pub const ALL: [GameKind; 8] = [
        GameKind::Colors,
        GameKind::Shapes,
        GameKind::Numbers,
        GameKind::Letters,
        GameKind::Music,
        GameKind::Memory,
        GameKind::Sorting,
        GameKind::DailyChallenge,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            GameKind::Colors => "colors",
            GameKind::Shapes => "shapes",
            GameKind::Numbers => "numbers",
            GameKind::Letters => "letters",
            GameKind::Music => "music",
            GameKind::Memory => "memory",
            GameKind::Sorting => "sorting",
            GameKind::DailyChallenge => "daily-challenge",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Colors => "Color Match",
            GameKind::Shapes => "Shape Sort",
            GameKind::Numbers => "Number Fun",
            GameKind::Letters => "Letter Land",
            GameKind::Music => "Music Maker",
            GameKind::Memory => "Memory Match",
            GameKind::Sorting => "Sorting Game",
            GameKind::DailyChallenge => "Daily Challenge",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            GameKind::Colors => "Match colors with their names",
            GameKind::Shapes => "Identify different shapes",
            GameKind::Numbers => "Count objects and learn numbers",
            GameKind::Letters => "Learn the alphabet with fun pictures",
            GameKind::Music => "Create your own music",
            GameKind::Memory => "Find matching pairs",
            GameKind::Sorting => "Sort items into categories",
            GameKind::DailyChallenge => "Five quick questions, one every day",
        }
    }

    /// Stable navigation path of the game's entry point.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            GameKind::DailyChallenge => "/daily-challenge".to_owned(),
            other => format!("{HUB_PATH}/{}", other.slug()),
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|kind| kind.path() == path)
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_path(&kind.path()), Some(kind));
            assert_eq!(GameKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(GameKind::Colors.path(), "/games/colors");
        assert_eq!(GameKind::from_path("/daily-challenge/"), Some(GameKind::DailyChallenge));
        assert_eq!(GameKind::from_path(HUB_PATH), None);
    }
}
