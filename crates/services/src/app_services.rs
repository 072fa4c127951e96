use std::sync::Arc;

use playtime_core::model::GameKind;
use playtime_core::GameConfig;
use storage::repository::Storage;

use crate::audio::{AudioBackend, AudioService};
use crate::error::AppServicesError;
use crate::feedback::{FeedbackDispatcher, Notifier};
use crate::games::{self, ColorGame, CountingGame, DailyChallenge, LetterGame, ShapeGame};
use crate::memory::MemoryGame;
use crate::sequencer::Sequencer;
use crate::sorting::SortingGame;
use crate::Clock;

/// Assembles the shared audio and feedback services and hands out fresh game instances.
#[derive(Clone)]
pub struct AppServices {
    config: Arc<GameConfig>,
    clock: Clock,
    storage: Storage,
    audio: Arc<AudioService>,
    feedback: FeedbackDispatcher,
}

impl AppServices {
    /// Build services on top of an existing storage bundle.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the config is invalid or the audio preferences cannot
    /// be loaded.
    pub async fn new(
        storage: Storage,
        config: GameConfig,
        clock: Clock,
        backend: Arc<dyn AudioBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppServicesError> {
        config.validate()?;
        let audio = Arc::new(AudioService::init(backend, Arc::clone(&storage.preferences)).await?);
        let feedback = FeedbackDispatcher::new(Arc::clone(&audio), notifier);
        Ok(Self {
            config: Arc::new(config),
            clock,
            storage,
            audio,
            feedback,
        })
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or `new` fails.
    pub async fn new_sqlite(
        db_url: &str,
        config: GameConfig,
        clock: Clock,
        backend: Arc<dyn AudioBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::new(storage, config, clock, backend, notifier).await
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn audio(&self) -> Arc<AudioService> {
        Arc::clone(&self.audio)
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackDispatcher {
        &self.feedback
    }

    #[must_use]
    pub fn color_game(&self, seed: u64) -> ColorGame {
        games::color_game(&self.config, seed)
    }

    #[must_use]
    pub fn shape_game(&self, seed: u64) -> ShapeGame {
        games::shape_game(&self.config, seed)
    }

    #[must_use]
    pub fn letter_game(&self, seed: u64) -> LetterGame {
        games::letter_game(&self.config, seed)
    }

    #[must_use]
    pub fn counting_game(&self, seed: u64) -> CountingGame {
        games::counting_game(&self.config, seed)
    }

    #[must_use]
    pub fn daily_challenge(&self) -> DailyChallenge {
        games::daily_challenge(&self.config, &self.clock)
    }

    #[must_use]
    pub fn memory_game(&self, seed: u64) -> MemoryGame {
        MemoryGame::new(self.config.memory.clone(), seed)
    }

    #[must_use]
    pub fn sorting_game(&self, seed: u64) -> SortingGame {
        SortingGame::new(self.config.sorting.clone(), seed)
    }

    #[must_use]
    pub fn sequencer(&self) -> Sequencer {
        Sequencer::new(self.config.sequencer.clone())
    }

    /// Every game listed on the hub, in display order.
    #[must_use]
    pub fn catalog(&self) -> &'static [GameKind] {
        &GameKind::ALL
    }

    /// Release process-wide resources. Games created earlier keep working silently.
    pub fn shutdown(&self) {
        self.audio.shutdown();
        tracing::info!("app services shut down");
    }
}
