//! Terminal stand-ins for the platform audio device and toast area.

use playtime_core::model::{Instrument, Note, Notification, Severity, Sound};
use services::{AudioBackend, AudioError, Notifier};

/// Prints a short cue line instead of producing sound.
pub struct TerminalAudio;

impl AudioBackend for TerminalAudio {
    fn play(&self, sound: Sound) -> Result<(), AudioError> {
        println!("  ♪ {}", sound.id());
        Ok(())
    }

    fn play_note(&self, note: Note, instrument: Instrument, volume: u8) -> Result<(), AudioError> {
        println!(
            "  ♪ {} ({}) on {} {} at {volume}%",
            note.solfege(),
            note.letter(),
            instrument.emoji(),
            instrument.name()
        );
        Ok(())
    }
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        let marker = match notification.severity {
            Severity::Info => "·",
            Severity::Success => "✔",
            Severity::Destructive => "✘",
        };
        println!(
            "{marker} {}: {}",
            notification.title, notification.description
        );
    }

    fn celebrate(&self) {
        println!("🎉🎉🎉");
    }
}
