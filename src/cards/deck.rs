//! Deck construction.
//!
//! A Gaps deck holds, for every suit, the Ace plus every ladder rank.
//! That is exactly `4 * cards_per_row` cards: one per board cell.

use super::card::{Card, Rank, Suit};
use super::ladder::RankLadder;
use crate::core::GameRng;

/// Every card used on a board of this ladder, Aces included, in suit order.
#[must_use]
pub fn full_deck(ladder: RankLadder) -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| {
            std::iter::once(Rank::Ace)
                .chain(ladder.ranks())
                .map(move |rank| Card::new(suit, rank))
        })
        .collect()
}

/// The four Aces, in suit order.
#[must_use]
pub fn aces() -> [Card; 4] {
    Suit::ALL.map(|suit| Card::new(suit, Rank::Ace))
}

/// A freshly shuffled deck.
#[must_use]
pub fn shuffled_deck(ladder: RankLadder, rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck(ladder);
    rng.shuffle(&mut deck);
    deck
}
