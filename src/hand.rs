use crate::cards::{parse_cards, Card, CardParseError, Rank, Suit};
use crate::evaluator::hand_analysis::HandAnalysis;
use crate::evaluator::{classify, Classification};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("invalid hand size: expected 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// Exactly five cards plus the rank and suit views derived from them.
///
/// Cards need not come from one deck and need not be distinct; use
/// [`Hand::try_new_distinct`] to reject repeats.
///
/// ```
/// use poker_hand::cards::{Card, Rank, Suit};
/// use poker_hand::hand::{Hand, HandError};
///
/// let hand: Hand = "Th Td Ts 4c 4h".parse().unwrap();
/// assert_eq!(hand.ranks(), [4, 4, 10, 10, 10]);
/// assert_eq!(hand.rank_counts(), &[(Rank::Ten, 3), (Rank::Four, 2)]);
///
/// let short = [Card::new(Rank::Ace, Suit::Spades); 4];
/// assert_eq!(Hand::try_new(&short), Err(HandError::InvalidHandSize(4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    analysis: HandAnalysis,
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        let analysis = HandAnalysis::new(&cards);
        Self { cards, analysis }
    }

    /// Build a hand from a slice, which must hold exactly five cards.
    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self::new(cards))
    }

    /// Like [`Hand::try_new`] but also rejects a card appearing more than once.
    pub fn try_new_distinct(cards: &[Card]) -> Result<Self, HandError> {
        let hand = Self::try_new(cards)?;
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in hand.cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(hand)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Rank ordinals sorted ascending.
    pub fn ranks(&self) -> [u8; HAND_SIZE] {
        self.analysis.ordinals
    }

    /// Distinct suits present, in order of first appearance.
    pub fn suits(&self) -> &[Suit] {
        self.analysis.suit_info.suits()
    }

    /// Cards per rank, most frequent first; equal counts order by rank descending.
    pub fn rank_counts(&self) -> &[(Rank, u8)] {
        self.analysis.rank_groups.as_slice()
    }

    pub fn is_flush(&self) -> bool {
        self.analysis.suit_info.is_flush()
    }

    /// Five consecutive ranks, or A-2-3-4-5.
    pub fn is_straight(&self) -> bool {
        self.analysis.straight_info.is_straight
    }

    pub fn classify(&self) -> Classification {
        classify(self)
    }

    pub(crate) fn analysis(&self) -> &HandAnalysis {
        &self.analysis
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_new(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::try_new(&cards)
    }
}

impl fmt::Display for Hand {
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
