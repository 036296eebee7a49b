use serde::Serialize;

use crate::board::Piece;
use crate::types::PieceKind;

/// Read-only view of a board, detached from the live state.
///
/// `cells` is row-major with the floor row first; 0 is empty and 1..=7 is [`PieceKind::code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub visible_height: usize,
    pub hidden_rows: usize,
    pub cells: Vec<u8>,
    pub current: Option<Piece>,
    pub ghost_drop_distance: u32,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: i32,
    pub back_to_back: bool,
    pub game_over: bool,
}

impl BoardSnapshot {
    pub fn total_height(&self) -> usize {
        self.visible_height + self.hidden_rows
    }

    /// Cell code at (x, y), `None` when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.total_height() {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Rows in the visible area, floor first
    pub fn visible_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .take(self.visible_height)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
