use crate::model::music::{Instrument, Note};

/// Sound effects the audio service knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Correct,
    Incorrect,
    Click,
    Success,
    Pop,
    Complete,
}

impl Sound {
    pub const ALL: [Sound; 6] = [
        Sound::Correct,
        Sound::Incorrect,
        Sound::Click,
        Sound::Success,
        Sound::Pop,
        Sound::Complete,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Sound::Correct => "correct",
            Sound::Incorrect => "incorrect",
            Sound::Click => "click",
            Sound::Success => "success",
            Sound::Pop => "pop",
            Sound::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Destructive,
}

/// Transient feedback shown to the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Info)
    }

    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Success)
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Destructive)
    }
}

/// A request a game controller hands to its collaborators.
///
/// Controllers decide *that* something should be shown or played; rendering and playback
/// belong to the notification and audio services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    Play(Sound),
    PlayNote {
        note: Note,
        instrument: Instrument,
        volume: u8,
    },
    Celebrate,
}
