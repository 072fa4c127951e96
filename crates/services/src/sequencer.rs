//! Sixteen-step note sequencer.

use std::time::Duration;

use playtime_core::config::SequencerConfig;
use playtime_core::model::{Effect, Instrument, Note, Notification, Sound};

use crate::timers::{Fired, Timeline};

/// Number of beat slots in a composition.
pub const BEATS: usize = 16;

const MAX_VOLUME: u8 = 100;

pub struct Sequencer {
    config: SequencerConfig,
    slots: [Option<Note>; BEATS],
    selected_note: Note,
    instrument: Instrument,
    tempo: u32,
    volume: u8,
    cursor: Option<usize>,
    score: u32,
    timeline: Timeline<()>,
}

impl Sequencer {
    #[must_use]
    pub fn new(config: SequencerConfig) -> Self {
        let tempo = config.clamp_tempo(config.default_tempo);
        let volume = config.default_volume.min(MAX_VOLUME);
        Self {
            config,
            slots: [None; BEATS],
            selected_note: Note::C,
            instrument: Instrument::default(),
            tempo,
            volume,
            cursor: None,
            score: 0,
            timeline: Timeline::new(),
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Note>; BEATS] {
        &self.slots
    }

    #[must_use]
    pub fn selected_note(&self) -> Note {
        self.selected_note
    }

    #[must_use]
    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    #[must_use]
    pub fn tempo(&self) -> u32 {
        self.tempo
    }

    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Beat currently sounding; `None` while stopped.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.cursor.is_some()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Time between two beats: a sixteenth of a bar at the current tempo.
    ///
    /// `60000 / tempo / 4` ms, computed in microseconds so fast tempos keep their fraction.
    #[must_use]
    pub fn beat_duration(&self) -> Duration {
        Duration::from_micros(60_000_000 / u64::from(self.tempo.max(1)) / 4)
    }

    /// Put the selected note in `slot`, or clear it if it already holds that note.
    pub fn toggle(&mut self, slot: usize) -> Vec<Effect> {
        if self.timeline.is_disposed() {
            return Vec::new();
        }
        let Some(current) = self.slots.get_mut(slot) else {
            return Vec::new();
        };
        if *current == Some(self.selected_note) {
            *current = None;
            return Vec::new();
        }
        *current = Some(self.selected_note);
        self.note_effect(self.selected_note).into_iter().collect()
    }

    /// Choose the note used by `toggle`, previewing it.
    pub fn select_note(&mut self, note: Note) -> Vec<Effect> {
        if self.timeline.is_disposed() {
            return Vec::new();
        }
        self.selected_note = note;
        self.note_effect(note).into_iter().collect()
    }

    pub fn select_instrument(&mut self, instrument: Instrument) {
        if self.timeline.is_disposed() {
            return;
        }
        self.instrument = instrument;
    }

    /// Park the cursor on the first beat and start ticking. Notes sound only on ticks.
    ///
    /// Returns `false` when already playing or disposed.
    pub fn play(&mut self) -> bool {
        if self.is_playing() || self.timeline.is_disposed() {
            return false;
        }
        self.cursor = Some(0);
        self.timeline.start_interval(self.beat_duration());
        tracing::debug!(tempo = self.tempo, "sequencer playing");
        true
    }

    pub fn stop(&mut self) {
        if self.cursor.take().is_some() {
            self.timeline.stop_interval();
            tracing::debug!("sequencer stopped");
        }
    }

    /// Returns whether the sequencer is playing afterwards.
    pub fn toggle_play(&mut self) -> bool {
        if self.is_playing() {
            self.stop();
        } else {
            self.play();
        }
        self.is_playing()
    }

    /// Clamp and apply a tempo. While playing, the beat keeps its position.
    pub fn set_tempo(&mut self, bpm: u32) -> u32 {
        self.tempo = self.config.clamp_tempo(bpm);
        if self.is_playing() {
            self.timeline.start_interval(self.beat_duration());
        }
        self.tempo
    }

    pub fn set_volume(&mut self, volume: u8) -> u8 {
        if self.timeline.is_disposed() {
            return self.volume;
        }
        self.volume = volume.min(MAX_VOLUME);
        self.volume
    }

    pub fn clear(&mut self) -> Vec<Effect> {
        if self.timeline.is_disposed() {
            return Vec::new();
        }
        self.slots = [None; BEATS];
        vec![Effect::Notify(Notification::info(
            "Composition Cleared",
            "Start creating a new musical masterpiece!",
        ))]
    }

    pub fn save(&mut self) -> Vec<Effect> {
        if self.timeline.is_disposed() {
            return Vec::new();
        }
        self.score = self.score.saturating_add(self.config.save_reward);
        vec![
            Effect::Play(Sound::Success),
            Effect::Notify(Notification::success(
                "Composition Saved!",
                "Your musical masterpiece has been saved!",
            )),
        ]
    }

    /// Let `elapsed` pass, stepping the cursor once per beat.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        let until = self.timeline.now() + elapsed;
        let mut effects = Vec::new();
        while let Some(fired) = self.timeline.pop_due(until) {
            if let Fired::Tick = fired {
                let Some(cursor) = self.cursor else { continue };
                let next = (cursor + 1) % BEATS;
                self.cursor = Some(next);
                effects.extend(self.effect_at(next));
            }
        }
        self.timeline.settle(until);
        effects
    }

    pub fn dispose(&mut self) {
        self.cursor = None;
        self.timeline.dispose();
    }

    fn effect_at(&self, slot: usize) -> Option<Effect> {
        self.slots
            .get(slot)
            .copied()
            .flatten()
            .and_then(|note| self.note_effect(note))
    }

    fn note_effect(&self, note: Note) -> Option<Effect> {
        (self.volume > 0).then_some(Effect::PlayNote {
            note,
            instrument: self.instrument,
            volume: self.volume,
        })
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn note(effect: &Effect) -> Option<Note> {
        match effect {
            Effect::PlayNote { note, .. } => Some(*note),
            _ => None,
        }
    }

    #[test]
    fn toggle_sets_then_clears_the_same_note() {
        let mut sequencer = Sequencer::default();
        sequencer.select_note(Note::E);
        let effects = sequencer.toggle(3);
        assert_eq!(sequencer.slots()[3], Some(Note::E));
        assert_eq!(effects.iter().find_map(note), Some(Note::E));

        assert!(sequencer.toggle(3).is_empty());
        assert_eq!(sequencer.slots()[3], None);

        sequencer.toggle(3);
        sequencer.select_note(Note::G);
        sequencer.toggle(3);
        assert_eq!(sequencer.slots()[3], Some(Note::G));
        assert!(sequencer.toggle(BEATS).is_empty());
    }

    #[test]
    fn beats_follow_the_tempo() {
        let mut sequencer = Sequencer::default();
        assert_eq!(sequencer.beat_duration(), ms(125));
        sequencer.toggle(2);

        assert!(sequencer.play());
        assert_eq!(sequencer.cursor(), Some(0));
        assert!(sequencer.advance(ms(125)).is_empty());
        assert_eq!(sequencer.cursor(), Some(1));
        let effects = sequencer.advance(ms(125));
        assert_eq!(sequencer.cursor(), Some(2));
        assert_eq!(effects.iter().filter_map(note).collect::<Vec<_>>(), vec![Note::C]);

        sequencer.advance(ms(125 * 14));
        assert_eq!(sequencer.cursor(), Some(0));
    }

    #[test]
    fn first_beat_waits_for_a_tick() {
        let mut sequencer = Sequencer::default();
        sequencer.toggle(0);
        sequencer.toggle(1);

        assert!(sequencer.play());
        assert_eq!(sequencer.cursor(), Some(0));
        let effects = sequencer.advance(ms(125));
        assert_eq!(effects.iter().filter_map(note).collect::<Vec<_>>(), vec![Note::C]);
        assert_eq!(sequencer.cursor(), Some(1));

        // Slot 0 sounds once per bar, on the wrap.
        let bar = sequencer.advance(ms(125 * 16));
        assert_eq!(bar.iter().filter_map(note).count(), 2);
        assert!(!sequencer.play());
    }

    #[test]
    fn disposed_sequencer_ignores_edits() {
        let mut sequencer = Sequencer::default();
        sequencer.toggle(4);
        sequencer.dispose();

        assert!(sequencer.clear().is_empty());
        assert_eq!(sequencer.slots()[4], Some(Note::C));
        assert!(sequencer.select_note(Note::G).is_empty());
        assert_eq!(sequencer.selected_note(), Note::C);
        sequencer.select_instrument(Instrument::Drum);
        assert_eq!(sequencer.instrument(), Instrument::Piano);
        assert_eq!(sequencer.set_volume(90), 50);
        assert!(!sequencer.toggle_play());
        assert!(sequencer.save().is_empty());
    }

    #[test]
    fn tempo_change_keeps_the_cursor() {
        let mut sequencer = Sequencer::default();
        sequencer.play();
        sequencer.advance(ms(375));
        assert_eq!(sequencer.cursor(), Some(3));
        assert_eq!(sequencer.set_tempo(60), 60);
        assert_eq!(sequencer.cursor(), Some(3));
        sequencer.advance(ms(249));
        assert_eq!(sequencer.cursor(), Some(3));
        sequencer.advance(ms(1));
        assert_eq!(sequencer.cursor(), Some(4));
    }

    #[test]
    fn stop_resets_the_cursor() {
        let mut sequencer = Sequencer::default();
        sequencer.play();
        sequencer.advance(ms(500));
        sequencer.stop();
        assert_eq!(sequencer.cursor(), None);
        assert!(sequencer.advance(ms(5000)).is_empty());
        assert_eq!(sequencer.cursor(), None);
    }

    #[test]
    fn settings_are_clamped() {
        let mut sequencer = Sequencer::default();
        assert_eq!(sequencer.set_tempo(10), 60);
        assert_eq!(sequencer.set_tempo(900), 200);
        assert_eq!(sequencer.beat_duration(), ms(75));
        assert_eq!(sequencer.set_tempo(70), 70);
        assert_eq!(sequencer.beat_duration(), Duration::from_micros(214_285));
        assert_eq!(sequencer.set_volume(250), 100);
        assert_eq!(sequencer.set_volume(0), 0);
        assert!(sequencer.select_note(Note::A).is_empty());
    }

    #[test]
    fn save_rewards_and_clear_empties() {
        let mut sequencer = Sequencer::default();
        sequencer.toggle(0);
        sequencer.save();
        sequencer.save();
        assert_eq!(sequencer.score(), 20);
        sequencer.clear();
        assert!(sequencer.slots().iter().all(Option::is_none));
    }
}
