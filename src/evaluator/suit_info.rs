use crate::cards::{Card, Suit};

/// The distinct suits present in a hand, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    suits: Vec<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut suits = Vec::with_capacity(4);
        for card in cards {
            if !suits.contains(&card.suit()) {
                suits.push(card.suit());
            }
        }
        Self { suits }
    }

    /// All five cards share one suit.
    pub fn is_flush(&self) -> bool {
        self.suits.len() == 1
    }

    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }
}
