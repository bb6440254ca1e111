pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::Hand;
use hand_analysis::HandAnalysis;
use log::trace;
use std::fmt;

/// Poker hand category from weakest to strongest.
/// The discriminant is the strength level, 1 (High Card) to 10 (Royal Flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Strength level, 1..=10 with 10 best.
    pub const fn level(self) -> u8 {
        self as u8
    }

    pub const fn from_level(level: u8) -> Option<Category> {
        match level {
            1..=10 => Some(Category::ALL[(level - 1) as usize]),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a hand: the category and its strength level.
/// Ordering follows the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Classification {
    pub category: Category,
    pub level: u8,
}

impl Classification {
    pub const fn label(&self) -> &'static str {
        self.category.label()
    }

    /// The `(label, level)` pair.
    pub const fn as_pair(&self) -> (&'static str, u8) {
        (self.category.label(), self.level)
    }
}

impl From<Category> for Classification {
    fn from(category: Category) -> Self {
        Self { category, level: category.level() }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.level)
    }
}

/// Classify a hand into its highest-priority category.
///
/// ```
/// use poker_hand::evaluator::{classify, Category};
/// use poker_hand::hand::Hand;
///
/// let hand: Hand = "A♠ 2♥ 3♦ 4♣ 5♠".parse().unwrap();
/// let result = classify(&hand);
/// assert_eq!(result.category, Category::Straight);
/// assert_eq!(result.as_pair(), ("Straight", 5));
/// ```
pub fn classify(hand: &Hand) -> Classification {
    let result = classify_analysis(hand.analysis());
    trace!("classified {hand} as {result}");
    result
}

/// Classify exactly five cards without building a [`Hand`].
pub fn classify_five(cards: &[Card; 5]) -> Classification {
    classify_analysis(&HandAnalysis::new(cards))
}

fn classify_analysis(analysis: &HandAnalysis) -> Classification {
    // First match in priority order wins; several detectors can match one hand.
    detector::DETECTORS
        .iter()
        .find(|d| d.detect(analysis))
        .map_or(Category::HighCard, |d| d.category())
        .into()
}
