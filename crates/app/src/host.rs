//! Line-oriented terminal host: reads commands from stdin and drives game timers in real time.

use std::fmt::Write as _;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};

use playtime_core::content::ContentGenerator;
use playtime_core::model::{Asset, Effect, Instrument, Note, OptionLabel, RoundState};
use services::{
    AppServices, AudioServiceError, BEATS, MemoryGame, RoundController, Sequencer, SortingGame,
    SortingPhase,
};

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HostError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Audio(#[from] AudioServiceError),
}

/// A game the terminal host can show and drive.
pub trait TerminalGame {
    /// Effects of opening the game screen.
    fn begin(&mut self) -> Vec<Effect> {
        Vec::new()
    }

    fn render(&self) -> String;

    fn help(&self) -> &'static str;

    /// `None` when the input is not a command of this game.
    fn handle(&mut self, input: &str) -> Option<Vec<Effect>>;

    fn advance(&mut self, elapsed: Duration) -> Vec<Effect>;

    fn dispose(&mut self);
}

/// Play `game` until stdin closes or the player quits.
///
/// # Errors
///
/// Returns `HostError` if stdin cannot be read or the mute flag cannot be saved.
pub async fn run(services: &AppServices, game: &mut dyn TerminalGame) -> Result<(), HostError> {
    let feedback = services.feedback();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    feedback.dispatch(&game.begin());
    println!("{}", game.help());
    let mut shown = game.render();
    println!("{shown}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim();
                match input {
                    "" => continue,
                    "q" | "quit" => break,
                    "?" | "help" => {
                        println!("{}", game.help());
                        continue;
                    }
                    "mute" | "unmute" => {
                        services.audio().set_muted(input == "mute").await?;
                        println!("sound {}", if input == "mute" { "off" } else { "on" });
                        continue;
                    }
                    _ => {}
                }
                match game.handle(input) {
                    Some(effects) => feedback.dispatch(&effects),
                    None => println!("unknown command: {input} (type `help`)"),
                }
            }
            _ = ticker.tick() => {
                let now = Instant::now();
                let effects = game.advance(now - last_tick);
                last_tick = now;
                feedback.dispatch(&effects);
            }
        }

        let current = game.render();
        if current != shown {
            println!("{current}");
            shown = current;
        }
    }

    game.dispose();
    Ok(())
}

fn parse_index(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}

fn describe_asset(asset: &Asset) -> String {
    match asset {
        Asset::Emoji(emoji) => (*emoji).to_owned(),
        Asset::Swatch { name, hex } => format!("[{name} {hex}]"),
        Asset::Shape { shape, tint } => format!("[{tint:?} {}]", shape.name()),
    }
}

impl<G> TerminalGame for RoundController<G>
where
    G: ContentGenerator,
    G::Item: OptionLabel,
{
    fn begin(&mut self) -> Vec<Effect> {
        self.start()
    }

    fn render(&self) -> String {
        let progress = self.progress();
        let mut out = format!(
            "\nLevel {}/{}  Score {}",
            progress.level(),
            progress.max_level(),
            progress.score()
        );
        if let Some(secs) = progress.remaining_secs() {
            let _ = write!(out, "  ⏱ {secs}s");
        }
        match self.state() {
            RoundState::Completed => {
                let _ = write!(out, "\nAll levels done! Type `restart` to play again.");
                return out;
            }
            RoundState::Idle => {
                let _ = write!(out, "\nType `start` to begin.");
                return out;
            }
            _ => {}
        }
        let Some(challenge) = self.challenge() else {
            return out;
        };
        let _ = write!(out, "\n{}", challenge.prompt());
        if !challenge.assets().is_empty() {
            let assets: Vec<String> = challenge.assets().iter().map(describe_asset).collect();
            let _ = write!(out, "\n  {}", assets.join(" "));
        }
        for (index, option) in challenge.options().iter().enumerate() {
            let marker = if self.selection() == Some(index) { ">" } else { " " };
            let _ = write!(out, "\n {marker}{}) {}", index + 1, option.label());
        }
        out
    }

    fn help(&self) -> &'static str {
        "Answer with the option number. Also: restart, mute, unmute, quit."
    }

    fn handle(&mut self, input: &str) -> Option<Vec<Effect>> {
        match input {
            "start" | "restart" => Some(self.start()),
            _ => parse_index(input).map(|index| self.select(index).effects),
        }
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        RoundController::advance(self, elapsed)
    }

    fn dispose(&mut self) {
        RoundController::dispose(self);
    }
}

impl TerminalGame for MemoryGame {
    fn render(&self) -> String {
        let mut out = format!(
            "\nLevel {}  Moves {}  Time {}s  Pairs {}/{}  Score {}\n",
            self.level(),
            self.moves(),
            self.elapsed_secs(),
            self.matched_pairs(),
            self.total_pairs(),
            self.score()
        );
        for (index, card) in self.deck().iter().enumerate() {
            let face = if self.is_revealed(index) { card.token } else { "🂠" };
            let _ = write!(out, "{:>3}:{face}", index + 1);
            if (index + 1) % 6 == 0 {
                out.push('\n');
            }
        }
        if self.is_complete() {
            out.push_str("\nType `next` for a bigger board or `restart`.");
        }
        out
    }

    fn help(&self) -> &'static str {
        "Flip a card by number. Also: next, restart, mute, unmute, quit."
    }

    fn handle(&mut self, input: &str) -> Option<Vec<Effect>> {
        match input {
            "next" => {
                self.next_level();
                Some(Vec::new())
            }
            "restart" => {
                self.restart();
                Some(Vec::new())
            }
            _ => parse_index(input).map(|index| self.flip(index).effects),
        }
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        MemoryGame::advance(self, elapsed);
        Vec::new()
    }

    fn dispose(&mut self) {
        MemoryGame::dispose(self);
    }
}

impl TerminalGame for SortingGame {
    fn render(&self) -> String {
        let mut out = format!(
            "\n{} (level {}/{})  Attempts {}  Score {}",
            self.set_name(),
            self.level(),
            self.level_count(),
            self.attempts(),
            self.score()
        );
        for category in self.categories() {
            let placed: Vec<&str> = self.sorted_in(category.id).map(|item| item.emoji).collect();
            let _ = write!(out, "\n  [{}] {}: {}", category.id, category.name, placed.join(" "));
        }
        let waiting: Vec<String> = self
            .unsorted()
            .iter()
            .map(|item| format!("{} {}", item.id, item.emoji))
            .collect();
        let _ = write!(out, "\n  to sort: {}", waiting.join(", "));
        match self.phase() {
            SortingPhase::Sorting => {}
            SortingPhase::LevelComplete => out.push_str("\nType `next` to continue."),
            SortingPhase::GameComplete => out.push_str("\nAll sets sorted!"),
        }
        out
    }

    fn help(&self) -> &'static str {
        "Sort with `<item> <category>`, e.g. `apple red`. Also: next, restart, mute, unmute, quit."
    }

    fn handle(&mut self, input: &str) -> Option<Vec<Effect>> {
        match input {
            "next" => return Some(self.next_level()),
            "restart" => {
                self.restart();
                return Some(Vec::new());
            }
            _ => {}
        }
        let (item, category) = input.split_once(char::is_whitespace)?;
        if !self.begin_drag(item.trim()) {
            return Some(Vec::new());
        }
        Some(self.drop_on(category.trim()).effects)
    }

    fn advance(&mut self, _elapsed: Duration) -> Vec<Effect> {
        Vec::new()
    }

    fn dispose(&mut self) {
        SortingGame::dispose(self);
    }
}

impl TerminalGame for Sequencer {
    fn render(&self) -> String {
        let mut out = format!(
            "\nNote {} ({})  {} {}  Tempo {} BPM  Volume {}%  {}  Score {}\n",
            self.selected_note().solfege(),
            self.selected_note().letter(),
            self.instrument().emoji(),
            self.instrument().name(),
            self.tempo(),
            self.volume(),
            if self.is_playing() { "▶ playing" } else { "■ stopped" },
            self.score()
        );
        for (slot, note) in self.slots().iter().enumerate() {
            let cell = note.map_or("·", Note::letter);
            let _ = write!(out, "{:>3}:{cell}", slot + 1);
        }
        out
    }

    fn help(&self) -> &'static str {
        "Toggle a beat 1-16. Also: note <do|C..>, inst <piano|drum|guitar|xylophone>, \
         play, stop, tempo <bpm>, vol <0-100>, clear, save, quit."
    }

    fn handle(&mut self, input: &str) -> Option<Vec<Effect>> {
        let (command, argument) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(command, argument)| (command, argument.trim()));
        match command {
            "note" => Note::parse(argument).map(|note| self.select_note(note)),
            "inst" => Instrument::parse(argument).map(|instrument| {
                self.select_instrument(instrument);
                Vec::new()
            }),
            "play" | "stop" | "p" => {
                self.toggle_play();
                Some(Vec::new())
            }
            "tempo" => argument.parse().ok().map(|bpm| {
                self.set_tempo(bpm);
                Vec::new()
            }),
            "vol" => argument.parse().ok().map(|volume| {
                self.set_volume(volume);
                Vec::new()
            }),
            "clear" => Some(self.clear()),
            "save" => Some(self.save()),
            _ => parse_index(command)
                .filter(|slot| *slot < BEATS)
                .map(|slot| self.toggle(slot)),
        }
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        Sequencer::advance(self, elapsed)
    }

    fn dispose(&mut self) {
        Sequencer::dispose(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playtime_core::config::{MemoryConfig, SortingConfig};
    use playtime_core::content::ColorGenerator;
    use playtime_core::config::RoundConfig;

    #[test]
    fn quiz_accepts_one_based_option_numbers() {
        let mut game = RoundController::new(ColorGenerator::default(), RoundConfig::quiz(), 3);
        game.begin();
        let answer = game.challenge().unwrap().answer_index();
        let effects = game.handle(&(answer + 1).to_string()).unwrap();
        assert!(!effects.is_empty());
        assert_eq!(game.state(), RoundState::Correct);
        assert!(game.handle("banana").is_none());
        assert!(game.handle("0").is_none());
    }

    #[test]
    fn sorting_reads_item_and_category() {
        let mut game = SortingGame::new(SortingConfig::default(), 1);
        assert!(game.handle("apple red").is_some());
        assert_eq!(game.unsorted().len(), 5);
        assert!(game.handle("apple").is_none());
    }

    #[test]
    fn sequencer_commands() {
        let mut sequencer = Sequencer::default();
        sequencer.handle("note mi").unwrap();
        assert_eq!(sequencer.selected_note(), Note::E);
        sequencer.handle("4").unwrap();
        assert_eq!(sequencer.slots()[3], Some(Note::E));
        sequencer.handle("tempo 300").unwrap();
        assert_eq!(sequencer.tempo(), 200);
        sequencer.handle("1").unwrap();
        assert!(sequencer.handle("play").unwrap().is_empty());
        assert!(sequencer.is_playing());
        assert!(sequencer.handle("17").is_none());
        assert!(sequencer.handle("note la la la").is_none());
    }

    #[test]
    fn memory_board_hides_unflipped_cards() {
        let mut game = MemoryGame::new(MemoryConfig::default(), 2);
        assert!(!game.render().contains(game.deck()[0].token));
        game.handle("1").unwrap();
        assert!(game.render().contains(game.deck()[0].token));
    }
}
