#![forbid(unsafe_code)]

pub mod app_services;
pub mod audio;
pub mod error;
pub mod feedback;
pub mod games;
pub mod memory;
pub mod round;
pub mod sequencer;
pub mod sorting;
pub mod timers;

pub use playtime_core::Clock;

pub use app_services::AppServices;
pub use audio::{AudioBackend, AudioError, AudioService};
pub use error::{AppServicesError, AudioServiceError};
pub use feedback::{FeedbackDispatcher, Notifier, Reaction};
pub use games::{ColorGame, CountingGame, DailyChallenge, LetterGame, ShapeGame};
pub use memory::{FlipOutcome, MemoryGame};
pub use round::{RoundController, SelectOutcome};
pub use sequencer::{BEATS, Sequencer};
pub use sorting::{DropOutcome, SortingGame, SortingPhase};
pub use timers::{Fired, Timeline};
