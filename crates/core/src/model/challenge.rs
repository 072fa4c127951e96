use rand::Rng;

use crate::model::catalog::{ShapeKind, Tint};
use crate::random;

/// Something the presentation layer shows next to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Emoji(&'static str),
    Swatch { name: &'static str, hex: &'static str },
    Shape { shape: ShapeKind, tint: Tint },
}

/// Text shown on an option button.
pub trait OptionLabel {
    fn label(&self) -> String;
}

impl OptionLabel for u8 {
    fn label(&self) -> String {
        self.to_string()
    }
}

/// One generated question: a prompt, display assets and an ordered option set.
///
/// Immutable once built; the correct option is present exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge<T> {
    prompt: String,
    assets: Vec<Asset>,
    options: Vec<T>,
    answer: usize,
}

impl<T> Challenge<T> {
    /// Shuffle `answer` in among `distractors`.
    ///
    /// Generators guarantee the distractors are distinct from each other and from the answer.
    pub(crate) fn shuffled<R: Rng + ?Sized>(
        prompt: impl Into<String>,
        assets: Vec<Asset>,
        answer: T,
        distractors: Vec<T>,
        rng: &mut R,
    ) -> Self {
        let mut tagged: Vec<(bool, T)> = Vec::with_capacity(distractors.len() + 1);
        tagged.push((true, answer));
        tagged.extend(distractors.into_iter().map(|option| (false, option)));
        random::shuffle(&mut tagged, rng);

        let answer = tagged.iter().position(|(correct, _)| *correct).unwrap_or(0);
        let options = tagged.into_iter().map(|(_, option)| option).collect();
        Self {
            prompt: prompt.into(),
            assets,
            options,
            answer,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn options(&self) -> &[T] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&T> {
        self.options.get(index)
    }

    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.answer
    }

    #[must_use]
    pub fn answer(&self) -> &T {
        &self.options[self.answer]
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn shuffled_tracks_the_answer() {
        let mut rng = seeded(11);
        for _ in 0..50 {
            let challenge = Challenge::shuffled("pick", Vec::new(), 'a', vec!['b', 'c'], &mut rng);
            assert_eq!(*challenge.answer(), 'a');
            assert_eq!(challenge.options().len(), 3);
            assert!(challenge.is_correct(challenge.answer_index()));
        }
    }
}
