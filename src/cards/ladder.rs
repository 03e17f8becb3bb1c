//! The rank ladder.
//!
//! A board with `cards_per_row` columns plays with the ranks
//! `2..=cards_per_row` (Ace excluded). The ladder lists them in order:
//! ladder index `i` is the rank that belongs in column `i` of a finished row.
//!
//! ```
//! use gaps_engine::cards::{Rank, RankLadder};
//!
//! let ladder = RankLadder::new(5);
//! assert_eq!(ladder.len(), 4);
//! assert_eq!(ladder.rank_at(0), Some(Rank::Two));
//! assert_eq!(ladder.rank_at(3), Some(Rank::Five));
//! assert_eq!(ladder.index_of(Rank::Ace), None);
//! assert_eq!(ladder.index_of(Rank::Six), None);
//! ```

use serde::{Deserialize, Serialize};

use super::card::Rank;

/// Ordered ranks in play for a given board width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankLadder {
    len: usize,
}

impl RankLadder {
    /// Ladder for a board with `cards_per_row` columns.
    ///
    /// # Panics
    ///
    /// Panics if `cards_per_row` is outside 4..=13.
    #[must_use]
    pub fn new(cards_per_row: usize) -> Self {
        assert!(
            crate::core::config::is_valid_cards_per_row(cards_per_row),
            "cards_per_row {cards_per_row} outside 4..=13"
        );
        Self {
            len: cards_per_row - 1,
        }
    }

    /// Number of ranks on the ladder (`cards_per_row - 1`).
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Never true; a ladder has at least three ranks.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Rank at ladder index `index`.
    #[must_use]
    pub fn rank_at(self, index: usize) -> Option<Rank> {
        if index >= self.len {
            return None;
        }
        Rank::from_value(index as u8 + 2)
    }

    /// Ladder index of `rank`, `None` for Aces and ranks above the ladder.
    #[must_use]
    pub fn index_of(self, rank: Rank) -> Option<usize> {
        let index = usize::from(rank.value()).checked_sub(2)?;
        (index < self.len).then_some(index)
    }

    /// The rank that starts every row.
    #[must_use]
    pub const fn lowest(self) -> Rank {
        Rank::Two
    }

    /// The rank that ends every row.
    #[must_use]
    pub fn highest(self) -> Rank {
        self.rank_at(self.len - 1).unwrap_or(Rank::Two)
    }

    /// Rank that must follow `rank` in the same suit.
    #[must_use]
    pub fn successor(self, rank: Rank) -> Option<Rank> {
        self.rank_at(self.index_of(rank)? + 1)
    }

    /// Rank that must precede `rank` in the same suit.
    #[must_use]
    pub fn predecessor(self, rank: Rank) -> Option<Rank> {
        self.rank_at(self.index_of(rank)?.checked_sub(1)?)
    }

    /// Iterate over the ladder in order.
    pub fn ranks(self) -> impl Iterator<Item = Rank> {
        (0..self.len).filter_map(move |i| self.rank_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_ladder() {
        let ladder = RankLadder::new(4);
        let ranks: Vec<_> = ladder.ranks().collect();
        assert_eq!(ranks, vec![Rank::Two, Rank::Three, Rank::Four]);
        assert_eq!(ladder.highest(), Rank::Four);
    }

    #[test]
    fn test_full_ladder() {
        let ladder = RankLadder::new(13);
        assert_eq!(ladder.len(), 12);
        assert_eq!(ladder.highest(), Rank::King);
        assert_eq!(ladder.index_of(Rank::King), Some(11));
        assert_eq!(ladder.index_of(Rank::Ace), None);
    }

    #[test]
    fn test_successor_and_predecessor() {
        let ladder = RankLadder::new(5);
        assert_eq!(ladder.successor(Rank::Two), Some(Rank::Three));
        assert_eq!(ladder.successor(Rank::Five), None);
        assert_eq!(ladder.successor(Rank::Ace), None);
        assert_eq!(ladder.predecessor(Rank::Three), Some(Rank::Two));
        assert_eq!(ladder.predecessor(Rank::Two), None);
        assert_eq!(ladder.predecessor(Rank::Nine), None);
    }

    #[test]
    #[should_panic(expected = "outside 4..=13")]
    fn test_too_narrow() {
        let _ = RankLadder::new(3);
    }
}
