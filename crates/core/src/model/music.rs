use crate::model::challenge::OptionLabel;

/// A note of the C major scale, named the way the sequencer shows it (solfège).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Note {
    pub const ALL: [Note; 7] = [Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B];

    #[must_use]
    pub fn solfege(self) -> &'static str {
        match self {
            Note::C => "Do",
            Note::D => "Re",
            Note::E => "Mi",
            Note::F => "Fa",
            Note::G => "Sol",
            Note::A => "La",
            Note::B => "Ti",
        }
    }

    /// Parse either the letter (`"C"`) or the solfège name (`"do"`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|note| {
            raw.eq_ignore_ascii_case(note.letter()) || raw.eq_ignore_ascii_case(note.solfege())
        })
    }

    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::D => "D",
            Note::E => "E",
            Note::F => "F",
            Note::G => "G",
            Note::A => "A",
            Note::B => "B",
        }
    }
}

impl OptionLabel for Note {
    fn label(&self) -> String {
        self.solfege().to_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Instrument {
    #[default]
    Piano,
    Drum,
    Guitar,
    Xylophone,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Piano,
        Instrument::Drum,
        Instrument::Guitar,
        Instrument::Xylophone,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Instrument::Piano => "Piano",
            Instrument::Drum => "Drum",
            Instrument::Guitar => "Guitar",
            Instrument::Xylophone => "Xylophone",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Instrument::Piano => "🎹",
            Instrument::Drum => "🥁",
            Instrument::Guitar => "🎸",
            Instrument::Xylophone => "🔔",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|instrument| raw.eq_ignore_ascii_case(instrument.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_parse_by_letter_or_solfege() {
        assert_eq!(Note::parse("c"), Some(Note::C));
        assert_eq!(Note::parse("Sol"), Some(Note::G));
        assert_eq!(Note::parse("H"), None);
        assert_eq!(Instrument::parse("drum"), Some(Instrument::Drum));
    }
}
