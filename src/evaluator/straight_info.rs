/// Ordinals of the ace-low straight A-2-3-4-5, sorted ascending.
const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

/// Whether five rank ordinals form a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    /// Detect a straight from rank ordinals sorted ascending.
    /// Only A-2-3-4-5 wraps; K-A-2-3-4 and friends are not straights.
    pub fn detect(ordinals: &[u8; 5]) -> Self {
        let consecutive = ordinals.windows(2).all(|w| w[1] == w[0] + 1);
        StraightInfo { is_straight: consecutive || *ordinals == WHEEL }
    }
}
