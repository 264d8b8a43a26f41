use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// An ordered pile of all 52 distinct cards with a seeded RNG for shuffling.
///
/// The "top" of the deck is the end of the sequence: [`Deck::draw`] removes
/// the last card. Emptiness is a normal, checkable condition, not an error.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Uniformly permutes the cards currently in the deck. Calling after
    /// draws have begun reorders only the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Refills the full 52-card set. The RNG stream is kept, so successive
    /// reset+shuffle cycles of one deck stay reproducible from its seed.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
