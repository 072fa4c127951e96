mod catalog;
mod challenge;
mod feedback;
mod game;
mod level;
mod music;
mod round;
mod sorting;

pub use catalog::{
    COLORS, ColorSwatch, CountObject, LETTERS, LetterCard, MEMORY_TOKENS, ShapeKind, Tint,
};
pub use challenge::{Asset, Challenge, OptionLabel};
pub use feedback::{Effect, Notification, Severity, Sound};
pub use game::{GameKind, HOME_PATH, HUB_PATH};
pub use level::Level;
pub use music::{Instrument, Note};
pub use round::{RoundState, SessionProgress};
pub use sorting::{SORTING_SETS, SortCategory, SortItem, SortingSet};
