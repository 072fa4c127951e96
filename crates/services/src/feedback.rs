use std::sync::Arc;

use playtime_core::model::{Effect, Notification};

use crate::audio::AudioService;

/// Result of one user action: what happened, plus the feedback to hand off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction<O> {
    pub outcome: O,
    pub effects: Vec<Effect>,
}

impl<O> Reaction<O> {
    #[must_use]
    pub fn new(outcome: O, effects: Vec<Effect>) -> Self {
        Self { outcome, effects }
    }

    /// An outcome without any feedback, e.g. an ignored input.
    #[must_use]
    pub fn quiet(outcome: O) -> Self {
        Self::new(outcome, Vec::new())
    }
}

/// Presents transient feedback (toasts, confetti). Rendering is up to the implementation.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);

    fn celebrate(&self) {}
}

/// Routes controller effects to the audio service and the notifier.
#[derive(Clone)]
pub struct FeedbackDispatcher {
    audio: Arc<AudioService>,
    notifier: Arc<dyn Notifier>,
}

impl FeedbackDispatcher {
    #[must_use]
    pub fn new(audio: Arc<AudioService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { audio, notifier }
    }

    pub fn dispatch(&self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Notify(notification) => self.notifier.notify(notification),
                Effect::Play(sound) => {
                    self.audio.play(*sound);
                }
                Effect::PlayNote {
                    note,
                    instrument,
                    volume,
                } => {
                    self.audio.play_note(*note, *instrument, *volume);
                }
                Effect::Celebrate => self.notifier.celebrate(),
            }
        }
    }
}
