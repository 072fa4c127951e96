use rand::Rng;

use crate::config::MemoryConfig;
use crate::model::{Level, MEMORY_TOKENS};
use crate::random;

/// One face-down card; two cards share each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryCard {
    pub token: &'static str,
    /// `0` or `1`, telling the two copies of a token apart.
    pub copy: u8,
}

/// Deals shuffled memory decks whose size grows with the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryDealer {
    base_pairs: u32,
    max_pairs: u32,
}

impl MemoryDealer {
    #[must_use]
    pub fn new(config: &MemoryConfig) -> Self {
        Self {
            base_pairs: config.base_pairs,
            max_pairs: config.max_pairs,
        }
    }

    /// `min(base + level, max)`, never more than the token pool allows.
    #[must_use]
    pub fn pair_count(&self, level: Level) -> usize {
        let pairs = self
            .base_pairs
            .saturating_add(level.value())
            .min(self.max_pairs);
        usize::try_from(pairs).map_or(MEMORY_TOKENS.len(), |pairs| pairs.min(MEMORY_TOKENS.len()))
    }

    #[must_use]
    pub fn deal<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Vec<MemoryCard> {
        let tokens = random::sample(&MEMORY_TOKENS, self.pair_count(level), rng);
        let mut deck: Vec<MemoryCard> = tokens
            .into_iter()
            .flat_map(|token| [MemoryCard { token, copy: 0 }, MemoryCard { token, copy: 1 }])
            .collect();
        random::shuffle(&mut deck, rng);
        deck
    }
}

impl Default for MemoryDealer {
    fn default() -> Self {
        Self::new(&MemoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;
    use std::collections::HashMap;

    #[test]
    fn level_one_deals_five_pairs() {
        let deck = MemoryDealer::default().deal(Level::FIRST, &mut seeded(4));
        assert_eq!(deck.len(), 10);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in &deck {
            *counts.entry(card.token).or_default() += 1;
        }
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|count| *count == 2));
    }

    #[test]
    fn pairs_are_capped() {
        let dealer = MemoryDealer::default();
        assert_eq!(dealer.pair_count(Level::new(8)), 12);
        assert_eq!(dealer.deal(Level::new(40), &mut seeded(2)).len(), 24);
    }
}
