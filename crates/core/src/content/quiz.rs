use rand::Rng;

use crate::content::{ContentGenerator, draw, pool_size};
use crate::model::{
    Asset, COLORS, Challenge, ColorSwatch, CountObject, LETTERS, Level, LetterCard, Notification,
    ShapeKind, Tint,
};
use crate::random;

/// Largest count the counting game asks about.
pub const MAX_COUNT: u8 = 10;

const DEFAULT_OPTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGenerator {
    option_count: usize,
}

impl ColorGenerator {
    #[must_use]
    pub fn new(option_count: usize) -> Self {
        Self { option_count }
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIONS)
    }
}

impl ContentGenerator for ColorGenerator {
    type Item = ColorSwatch;

    fn generate<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Challenge<ColorSwatch> {
        let pool = random::sample(&COLORS, pool_size(level, COLORS.len()), rng);
        let (answer, distractors) = draw(&pool, self.option_count, rng);
        let assets = vec![Asset::Swatch {
            name: answer.name,
            hex: answer.hex,
        }];
        Challenge::shuffled("What color is this?", assets, answer, distractors, rng)
    }

    fn on_correct(&self, challenge: &Challenge<ColorSwatch>) -> Notification {
        let name = challenge.answer().name;
        Notification::success("Great job!", format!("That's right! This is {name}!"))
    }

    fn on_incorrect(&self, challenge: &Challenge<ColorSwatch>) -> Notification {
        let name = challenge.answer().name;
        Notification::destructive("Try again!", format!("That's not {name}. Let's try again!"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGenerator {
    option_count: usize,
}

impl ShapeGenerator {
    #[must_use]
    pub fn new(option_count: usize) -> Self {
        Self { option_count }
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIONS)
    }
}

impl ContentGenerator for ShapeGenerator {
    type Item = ShapeKind;

    fn generate<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Challenge<ShapeKind> {
        let pool = random::sample(&ShapeKind::ALL, pool_size(level, ShapeKind::ALL.len()), rng);
        let (answer, distractors) = draw(&pool, self.option_count, rng);
        let tint = random::pick(&Tint::ALL, rng).copied().unwrap_or(Tint::Red);
        let assets = vec![Asset::Shape {
            shape: answer,
            tint,
        }];
        Challenge::shuffled("What shape is this?", assets, answer, distractors, rng)
    }

    fn on_correct(&self, challenge: &Challenge<ShapeKind>) -> Notification {
        let name = challenge.answer().name();
        Notification::success("Great job!", format!("That's right! This is a {name}!"))
    }

    fn on_incorrect(&self, challenge: &Challenge<ShapeKind>) -> Notification {
        let name = challenge.answer().name();
        Notification::destructive("Try again!", format!("That's not a {name}. Let's try again!"))
    }
}

/// Early levels walk the alphabet five letters at a time; later levels mix the whole alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterGenerator {
    option_count: usize,
}

const LETTER_WINDOW: usize = 5;
const LETTER_WINDOW_LEVELS: u32 = 5;
const LETTER_MIXED_POOL: usize = 10;

impl LetterGenerator {
    #[must_use]
    pub fn new(option_count: usize) -> Self {
        Self { option_count }
    }

    fn pool<R: Rng + ?Sized>(level: Level, rng: &mut R) -> Vec<LetterCard> {
        if level.value() <= LETTER_WINDOW_LEVELS {
            let start = level.index() * LETTER_WINDOW;
            let end = (start + LETTER_WINDOW).min(LETTERS.len());
            LETTERS[start..end].to_vec()
        } else {
            random::sample(&LETTERS, LETTER_MIXED_POOL, rng)
        }
    }
}

impl Default for LetterGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIONS)
    }
}

impl ContentGenerator for LetterGenerator {
    type Item = LetterCard;

    fn generate<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Challenge<LetterCard> {
        let pool = Self::pool(level, rng);
        let (answer, distractors) = draw(&pool, self.option_count, rng);
        let prompt = format!("Which letter does {} start with?", answer.word);
        let assets = vec![Asset::Emoji(answer.emoji)];
        Challenge::shuffled(prompt, assets, answer, distractors, rng)
    }

    fn on_correct(&self, challenge: &Challenge<LetterCard>) -> Notification {
        let card = challenge.answer();
        Notification::success(
            "Great job!",
            format!("That's right! {} is for {}!", card.letter, card.word),
        )
    }

    fn on_incorrect(&self, challenge: &Challenge<LetterCard>) -> Notification {
        let word = challenge.answer().word;
        Notification::destructive(
            "Try again!",
            format!("That's not the letter for {word}. Let's try again!"),
        )
    }
}

/// Counting: the answer is the number of objects shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingGenerator {
    option_count: usize,
}

const COUNT_FIXED_LEVELS: u32 = 5;

impl CountingGenerator {
    #[must_use]
    pub fn new(option_count: usize) -> Self {
        Self { option_count }
    }

    fn count_for<R: Rng + ?Sized>(level: Level, rng: &mut R) -> u8 {
        if level.value() <= COUNT_FIXED_LEVELS {
            u8::try_from(level.value()).unwrap_or(MAX_COUNT)
        } else {
            rng.random_range(5..=9)
        }
    }
}

impl Default for CountingGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIONS)
    }
}

impl ContentGenerator for CountingGenerator {
    type Item = u8;

    fn generate<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Challenge<u8> {
        let count = Self::count_for(level, rng);
        let assets = (0..count)
            .map(|_| {
                let object = random::pick(&CountObject::ALL, rng).copied();
                Asset::Emoji(object.unwrap_or(CountObject::Apple).emoji())
            })
            .collect();

        let near: Vec<u8> = [-2_i16, -1, 1, 2]
            .into_iter()
            .map(|delta| i16::from(count) + delta)
            .filter(|candidate| (1..=i16::from(MAX_COUNT)).contains(candidate))
            .filter_map(|candidate| u8::try_from(candidate).ok())
            .collect();
        let distractors = random::sample(&near, self.option_count.saturating_sub(1), rng);

        Challenge::shuffled("How many objects do you see?", assets, count, distractors, rng)
    }

    fn on_correct(&self, _challenge: &Challenge<u8>) -> Notification {
        Notification::success("Great job!", "You counted correctly!")
    }

    fn on_incorrect(&self, _challenge: &Challenge<u8>) -> Notification {
        Notification::destructive(
            "Try again!",
            "That's not the right number. Let's count together!",
        )
    }
}
