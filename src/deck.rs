use crate::cards::{Card, Rank, Suit};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// A standard 52-card deck. The front of the sequence is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the 52 cards in canonical order: every rank of hearts, then
    /// diamonds, clubs and spades.
    ///
    /// ```
    /// use poker_hand::cards::{Card, Rank, Suit};
    /// use poker_hand::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Hearts));
    /// assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle in place with the provided random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Remove and return the top `n` cards in deck order.
    ///
    /// Fails without touching the deck when fewer than `n` cards remain.
    ///
    /// ```
    /// use poker_hand::deck::{Deck, DeckError};
    ///
    /// let mut deck = Deck::new();
    /// let hand = deck.deal(5).unwrap();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(deck.len(), 47);
    ///
    /// let err = deck.deal(48).unwrap_err();
    /// assert_eq!(err, DeckError::InsufficientCards { requested: 48, remaining: 47 });
    /// assert_eq!(deck.len(), 47);
    /// ```
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            debug!("cannot deal {n} cards, {} remaining", self.cards.len());
            return Err(DeckError::InsufficientCards { requested: n, remaining: self.cards.len() });
        }
        let dealt: Vec<Card> = self.cards.drain(..n).collect();
        trace!("dealt {n} cards, {} remaining", self.cards.len());
        Ok(dealt)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
