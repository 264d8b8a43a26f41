use std::collections::VecDeque;

use crate::cards::Card;

/// One side's ordered pile of cards, acting as a FIFO queue.
///
/// Draws remove from the front (the logical top of the hand); awarded cards
/// are appended to the back. The same container serves both the human side
/// and the CPU side; there is no decision logic here.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    pile: VecDeque<Card>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pile: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_cards(&self) -> bool {
        !self.pile.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.pile.len()
    }

    /// Removes and returns the front card, or `None` when the pile is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.pile.pop_front()
    }

    /// Appends cards to the bottom of the pile, preserving their order.
    pub fn add_to_bottom<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.pile.extend(cards);
    }

    /// Empties the pile. Used when a game is reinitialized.
    pub fn clear(&mut self) {
        self.pile.clear();
    }
}
