//! The 4 × `cards_per_row` card grid.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board for an
//! undo snapshot is O(1) and later moves only copy the touched chunk.
//!
//! ## Text form
//!
//! Boards parse from one line per row (or rows separated by `/`), cells
//! separated by whitespace, `__` or `.` for a gap:
//!
//! ```
//! use gaps_engine::board::Board;
//! use gaps_engine::core::Cell;
//!
//! let board: Board = "2S 3S 4S __ 5S
//!                     2H 3H 4H 5H __
//!                     2D 3D 4D 5D __
//!                     2C 3C 4C 5C __".parse().unwrap();
//! assert_eq!(board.cards_per_row(), 5);
//! assert_eq!(board.gap_count(), 4);
//! assert!(board.is_gap(Cell::new(0, 3)));
//! ```

use std::str::FromStr;

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{shuffled_deck, Card, CardParseError, RankLadder};
use crate::core::cell::{Cell, ROWS};
use crate::core::config::is_valid_cards_per_row;
use crate::core::GameRng;

/// Errors building a board from explicit rows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a board has 4 rows, got {0}")]
    WrongRowCount(usize),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, found: usize, expected: usize },
    #[error("cards per row must be between 4 and 13, got {0}")]
    CardsPerRowOutOfRange(usize),
    #[error("card {0} does not belong to this board's deck")]
    OffLadderCard(Card),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

/// The game board: 4 rows of `cards_per_row` cells, each a card or a gap.
///
/// Serializes as nested rows. Deserializing goes through `from_rows`, so a
/// malformed payload is rejected with its `BoardError`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<Option<Card>>>",
    into = "Vec<Vec<Option<Card>>>"
)]
pub struct Board {
    cards_per_row: usize,
    cells: Vector<Option<Card>>,
}

impl Board {
    /// Create a board with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `cards_per_row` is outside 4..=13.
    #[must_use]
    pub fn empty(cards_per_row: usize) -> Self {
        assert!(
            is_valid_cards_per_row(cards_per_row),
            "cards_per_row {cards_per_row} outside 4..=13"
        );
        Self {
            cards_per_row,
            cells: std::iter::repeat(None).take(ROWS * cards_per_row).collect(),
        }
    }

    /// Deal a fresh board: shuffle the full deck, lay it out row-major,
    /// then remove the four Aces to open the gaps.
    #[must_use]
    pub fn deal(cards_per_row: usize, rng: &mut GameRng) -> Self {
        let mut board = Self::empty(cards_per_row);
        let deck = shuffled_deck(board.ladder(), rng);
        board.cells = deck.into_iter().map(Some).collect();
        board.remove_aces();
        board
    }

    /// Build a board from explicit rows.
    ///
    /// Rejects boards that are not 4 rows of equal, supported width, and
    /// boards holding a card twice or a card outside the deck.
    pub fn from_rows(rows: Vec<Vec<Option<Card>>>) -> Result<Self, BoardError> {
        if rows.len() != ROWS {
            return Err(BoardError::WrongRowCount(rows.len()));
        }
        let cards_per_row = rows[0].len();
        if !is_valid_cards_per_row(cards_per_row) {
            return Err(BoardError::CardsPerRowOutOfRange(cards_per_row));
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cards_per_row {
                return Err(BoardError::RaggedRow {
                    row,
                    found: cells.len(),
                    expected: cards_per_row,
                });
            }
        }

        let ladder = RankLadder::new(cards_per_row);
        let mut seen = FxHashSet::default();
        for card in rows.iter().flatten().flatten() {
            if !card.is_ace() && ladder.index_of(card.rank).is_none() {
                return Err(BoardError::OffLadderCard(*card));
            }
            if !seen.insert(*card) {
                return Err(BoardError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            cards_per_row,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    // === Dimensions ===

    #[must_use]
    pub fn cards_per_row(&self) -> usize {
        self.cards_per_row
    }

    /// Rank ladder for this board width.
    #[must_use]
    pub fn ladder(&self) -> RankLadder {
        RankLadder::new(self.cards_per_row)
    }

    /// Does `cell` lie on this board?
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < ROWS && cell.col < self.cards_per_row
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell {cell} outside {ROWS}x{} board",
            self.cards_per_row
        );
        cell.index(self.cards_per_row)
    }

    // === Cell Access ===

    /// Card at `cell`, `None` for a gap.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is off the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Card> {
        self.cells[self.index(cell)]
    }

    /// Is `cell` a gap?
    #[must_use]
    pub fn is_gap(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    pub(crate) fn set(&mut self, cell: Cell, card: Option<Card>) {
        let index = self.index(cell);
        self.cells.set(index, card);
    }

    /// Move whatever is at `from` into `to`, leaving a gap behind.
    pub(crate) fn relocate(&mut self, from: Cell, to: Cell) {
        let card = self.get(from);
        self.set(from, None);
        self.set(to, card);
    }

    /// Clear every Ace off the board. Returns how many were removed.
    pub(crate) fn remove_aces(&mut self) -> usize {
        let aces: Vec<Cell> = self
            .cards()
            .filter(|(_, card)| card.is_ace())
            .map(|(cell, _)| cell)
            .collect();
        for &cell in &aces {
            self.set(cell, None);
        }
        aces.len()
    }

    // === Iteration (row-major) ===

    /// Every cell with its contents.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<Card>)> + '_ {
        let cards_per_row = self.cards_per_row;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, card)| (Cell::from_index(i, cards_per_row), *card))
    }

    /// Every occupied cell with its card.
    pub fn cards(&self) -> impl Iterator<Item = (Cell, Card)> + '_ {
        self.cells().filter_map(|(cell, card)| Some((cell, card?)))
    }

    /// Every gap.
    pub fn gaps(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(|(_, card)| card.is_none())
            .map(|(cell, _)| cell)
    }

    /// Contents of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<Card>> + '_ {
        assert!(row < ROWS, "row {row} outside board");
        let start = row * self.cards_per_row;
        self.cells.iter().skip(start).take(self.cards_per_row).copied()
    }

    /// First cell (row-major) holding a card that satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(Card) -> bool) -> Option<Cell> {
        self.cards().find(|&(_, card)| pred(card)).map(|(cell, _)| cell)
    }

    /// Where `card` sits, if it is on the board.
    #[must_use]
    pub fn position_of(&self, card: Card) -> Option<Cell> {
        self.find(|c| c == card)
    }

    /// Rows as nested vectors (for display layers).
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<Card>>> {
        (0..ROWS).map(|row| self.row(row).collect()).collect()
    }

    // === Counting ===

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.cells.len() - self.occupied_count()
    }

    /// Multiset of cards on the board.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for (_, card) in self.cards() {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }
}

impl TryFrom<Vec<Vec<Option<Card>>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Option<Card>>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Option<Card>>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|code| match code {
                        "__" | "." => Ok(None),
                        code => code.parse::<Card>().map(Some),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_rows(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            let line: Vec<String> = self
                .row(row)
                .map(|card| match card {
                    Some(card) => format!("{card:>3}"),
                    None => " __".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
