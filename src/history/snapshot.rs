//! Game snapshots stored in the undo history.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Cell;

/// Immutable copy of the mutable game state.
///
/// The board clones in O(1) (it shares structure with the live board), so
/// one snapshot per move is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub selected: Option<Cell>,
    pub won: bool,
    pub redeal_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot {
            board: Board::deal(5, &mut GameRng::new(4)),
            selected: Some(Cell::new(1, 2)),
            won: false,
            redeal_count: 3,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
