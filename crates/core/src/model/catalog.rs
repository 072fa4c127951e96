//! Static content pools the generators draw from.

use crate::model::challenge::OptionLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
}

impl OptionLabel for ColorSwatch {
    fn label(&self) -> String {
        self.name.to_owned()
    }
}

pub const COLORS: [ColorSwatch; 10] = [
    ColorSwatch { name: "Red", hex: "#ef4444" },
    ColorSwatch { name: "Blue", hex: "#3b82f6" },
    ColorSwatch { name: "Green", hex: "#22c55e" },
    ColorSwatch { name: "Yellow", hex: "#eab308" },
    ColorSwatch { name: "Purple", hex: "#a855f7" },
    ColorSwatch { name: "Orange", hex: "#f97316" },
    ColorSwatch { name: "Pink", hex: "#ec4899" },
    ColorSwatch { name: "Brown", hex: "#a16207" },
    ColorSwatch { name: "Black", hex: "#171717" },
    ColorSwatch { name: "White", hex: "#f9fafb" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Rectangle,
    Oval,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Oval,
        ShapeKind::Diamond,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Oval => "Oval",
            ShapeKind::Diamond => "Diamond",
        }
    }
}

impl OptionLabel for ShapeKind {
    fn label(&self) -> String {
        self.name().to_owned()
    }
}

/// Fill color a shape prompt is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
}

impl Tint {
    pub const ALL: [Tint; 6] = [
        Tint::Red,
        Tint::Blue,
        Tint::Green,
        Tint::Yellow,
        Tint::Purple,
        Tint::Pink,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterCard {
    pub letter: char,
    pub emoji: &'static str,
    pub word: &'static str,
}

impl OptionLabel for LetterCard {
    fn label(&self) -> String {
        self.letter.to_string()
    }
}

const fn card(letter: char, emoji: &'static str, word: &'static str) -> LetterCard {
    LetterCard {
        letter,
        emoji,
        word,
    }
}

pub const LETTERS: [LetterCard; 26] = [
    card('A', "🍎", "Apple"),
    card('B', "🐻", "Bear"),
    card('C', "🐱", "Cat"),
    card('D', "🦮", "Dog"),
    card('E', "🐘", "Elephant"),
    card('F', "🐟", "Fish"),
    card('G', "🦒", "Giraffe"),
    card('H', "🏠", "House"),
    card('I', "🍦", "Ice cream"),
    card('J', "🤹", "Juggler"),
    card('K', "🪁", "Kite"),
    card('L', "🦁", "Lion"),
    card('M', "🐵", "Monkey"),
    card('N', "📰", "Newspaper"),
    card('O', "🦉", "Owl"),
    card('P', "🐧", "Penguin"),
    card('Q', "👸", "Queen"),
    card('R', "🌈", "Rainbow"),
    card('S', "🌞", "Sun"),
    card('T', "🐯", "Tiger"),
    card('U', "☂️", "Umbrella"),
    card('V', "🚐", "Van"),
    card('W', "🐺", "Wolf"),
    card('X', "📦", "Box"),
    card('Y', "🧶", "Yarn"),
    card('Z', "🦓", "Zebra"),
];

/// Things the counting game lines up for the child to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountObject {
    Apple,
    Star,
    Ball,
    Block,
}

impl CountObject {
    pub const ALL: [CountObject; 4] = [
        CountObject::Apple,
        CountObject::Star,
        CountObject::Ball,
        CountObject::Block,
    ];

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            CountObject::Apple => "🍎",
            CountObject::Star => "⭐",
            CountObject::Ball => "⚽",
            CountObject::Block => "🧱",
        }
    }
}

pub const MEMORY_TOKENS: [&str; 24] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔",
    "🦄", "🐙", "🐢", "🦋", "🐬", "🦕", "🦖", "🐘",
];
