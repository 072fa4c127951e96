use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use playtime_core::model::{Instrument, Note, Sound};
use storage::repository::{AUDIO_MUTED_KEY, PreferenceRepository};

use crate::error::AudioServiceError;

/// Why a backend could not play something.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AudioError {
    #[error("playback blocked: {0}")]
    Blocked(String),
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// Platform playback. Implementations may fail; the service never lets that reach a game.
pub trait AudioBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns `AudioError` when the platform refuses to play.
    fn play(&self, sound: Sound) -> Result<(), AudioError>;

    /// # Errors
    ///
    /// Returns `AudioError` when the platform refuses to play.
    fn play_note(&self, note: Note, instrument: Instrument, volume: u8) -> Result<(), AudioError>;
}

/// Process-wide audio with a persisted mute switch.
///
/// Built once at startup and shared by every game through an `Arc`.
pub struct AudioService {
    backend: Arc<dyn AudioBackend>,
    preferences: Arc<dyn PreferenceRepository>,
    muted: AtomicBool,
    active: AtomicBool,
}

impl AudioService {
    /// Load the saved mute flag and get ready to play.
    ///
    /// # Errors
    ///
    /// Returns `AudioServiceError::Storage` if the flag cannot be read.
    pub async fn init(
        backend: Arc<dyn AudioBackend>,
        preferences: Arc<dyn PreferenceRepository>,
    ) -> Result<Self, AudioServiceError> {
        let muted = preferences
            .get_flag(AUDIO_MUTED_KEY)
            .await?
            .unwrap_or(false);
        tracing::debug!(muted, "audio service ready");
        Ok(Self {
            backend,
            preferences,
            muted: AtomicBool::new(muted),
            active: AtomicBool::new(true),
        })
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Flip the mute switch and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AudioServiceError::ShutDown` after `shutdown`, or
    /// `AudioServiceError::Storage` if persisting fails (the in-memory flag still changes).
    pub async fn set_muted(&self, muted: bool) -> Result<(), AudioServiceError> {
        if !self.is_active() {
            return Err(AudioServiceError::ShutDown);
        }
        self.muted.store(muted, Ordering::Release);
        self.preferences.set_flag(AUDIO_MUTED_KEY, muted).await?;
        tracing::info!(muted, "audio mute changed");
        Ok(())
    }

    /// Request a sound effect. Returns whether the backend accepted it.
    pub fn play(&self, sound: Sound) -> bool {
        if !self.should_play() {
            return false;
        }
        match self.backend.play(sound) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(sound = sound.id(), error = %err, "audio playback failed");
                false
            }
        }
    }

    /// Request a sequencer note. Returns whether the backend accepted it.
    pub fn play_note(&self, note: Note, instrument: Instrument, volume: u8) -> bool {
        if !self.should_play() || volume == 0 {
            return false;
        }
        match self.backend.play_note(note, instrument, volume) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    note = note.letter(),
                    instrument = instrument.name(),
                    error = %err,
                    "note playback failed"
                );
                false
            }
        }
    }

    /// Stop accepting requests; later calls are no-ops.
    pub fn shutdown(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            tracing::debug!("audio service shut down");
        }
    }

    fn should_play(&self) -> bool {
        self.is_active() && !self.is_muted()
    }
}
