use crate::cards::Rank;

/// Ranks present in a hand with their multiplicity, sorted by (count desc, rank desc).
///
/// Example: 8 8 8 K 3 groups as [(Eight, 3), (King, 1), (Three, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Count of the most frequent rank.
    pub fn top_count(&self) -> u8 {
        self.groups.first().map_or(0, |&(_, count)| count)
    }

    /// Count of the second most frequent rank, 0 when every card shares a rank.
    pub fn second_count(&self) -> u8 {
        self.groups.get(1).map_or(0, |&(_, count)| count)
    }

    /// Number of distinct ranks occurring exactly `count` times.
    pub fn ranks_with_count(&self, count: u8) -> usize {
        self.groups.iter().filter(|&&(_, c)| c == count).count()
    }

    pub fn as_slice(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn quads() {
        let groups = RankGroups::from_counts(&make_counts(&[(7, 4), (9, 1)]));
        assert_eq!(groups.top_count(), 4);
        assert_eq!(groups.second_count(), 1);
        assert_eq!(groups.as_slice()[0], (Rank::Seven, 4));
    }

    #[test]
    fn full_house_lists_trips_first() {
        let groups = RankGroups::from_counts(&make_counts(&[(4, 2), (10, 3)]));
        assert_eq!(groups.as_slice(), &[(Rank::Ten, 3), (Rank::Four, 2)]);
        assert_eq!(groups.top_count(), 3);
        assert_eq!(groups.second_count(), 2);
    }

    #[test]
    fn two_pair() {
        let groups = RankGroups::from_counts(&make_counts(&[(11, 2), (4, 2), (14, 1)]));
        assert_eq!(groups.ranks_with_count(2), 2);
        assert_eq!(groups.ranks_with_count(1), 1);
        assert_eq!(groups.as_slice()[0], (Rank::Jack, 2));
    }

    #[test]
    fn equal_counts_order_by_rank_desc() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 1), (14, 1), (10, 1), (2, 1), (7, 1)]));
        let ranks: Vec<Rank> = groups.as_slice().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Ten, Rank::Seven, Rank::Five, Rank::Two]);
    }

    #[test]
    fn single_rank_has_no_second_group() {
        // Only reachable with duplicated cards.
        let groups = RankGroups::from_counts(&make_counts(&[(3, 5)]));
        assert_eq!(groups.top_count(), 5);
        assert_eq!(groups.second_count(), 0);
    }
}
