use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;

/// Rank ordinals of 10-J-Q-K-A, sorted ascending.
const BROADWAY: [u8; 5] = [10, 11, 12, 13, 14];

/// Pre-computed views of a 5-card hand.
/// Built once when the hand is constructed and shared by all category detectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandAnalysis {
    pub ordinals: [u8; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ordinals = cards.map(|c| c.rank().value());
        ordinals.sort_unstable();

        let mut rank_counts = [0u8; 15];
        for &v in ordinals.iter() {
            rank_counts[v as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ordinals);

        Self { ordinals, rank_groups, suit_info, straight_info }
    }

    /// The rank set is exactly {10, J, Q, K, A}.
    pub fn is_broadway(&self) -> bool {
        self.ordinals == BROADWAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn royal_flush_views() {
        let cards = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.ordinals, BROADWAY);
        assert!(analysis.is_broadway());
        assert!(analysis.suit_info.is_flush());
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.rank_groups.top_count(), 1);
    }

    #[test]
    fn ordinals_are_sorted_ascending() {
        let cards = [
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Three, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.ordinals, [3, 3, 5, 13, 14]);
        assert!(!analysis.is_broadway());
        assert_eq!(analysis.rank_groups.as_slice()[0], (Rank::Three, 2));
        assert_eq!(analysis.suit_info.suits(), &[Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]);
    }

    #[test]
    fn full_house_views() {
        let cards = [
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Four, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.rank_groups.top_count(), 3);
        assert_eq!(analysis.rank_groups.second_count(), 2);
        assert!(!analysis.straight_info.is_straight);
        assert!(!analysis.suit_info.is_flush());
    }
}
