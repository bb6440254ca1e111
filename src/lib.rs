//! poker-hand: 52-card deck model and five-card hand classifier
//!
//! Goals:
//! - Classify any five cards into one of the ten standard categories
//! - Reproducible shuffles through an injected random source
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal and classify a hand
//! ```
//! use poker_hand::deck::Deck;
//! use poker_hand::hand::Hand;
//!
//! let mut deck = Deck::new();
//! deck.shuffle_seeded(42);
//! let cards = deck.deal(5).unwrap();
//! let hand = Hand::try_new(&cards).unwrap();
//!
//! let result = hand.classify();
//! assert!((1..=10).contains(&result.level));
//! assert_eq!(deck.len(), 47);
//! ```
//!
//! ## Classifying known cards
//! ```
//! use poker_hand::evaluator::Category;
//! use poker_hand::hand::Hand;
//!
//! let hand: Hand = "Ah Kh Qh Jh 10h".parse().unwrap();
//! assert_eq!(hand.classify().category, Category::RoyalFlush);
//! assert_eq!(hand.classify().as_pair(), ("Royal Flush", 10));
//! ```
//!
//! ## Demo driver
//! Print, shuffle, deal and classify with:
//! ```sh
//! cargo run --bin poker-hand -- --seed 7 --hands 3
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
