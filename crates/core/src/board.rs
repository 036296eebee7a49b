//! Board module - the rule engine state machine
//!
//! The board ties together the grid, the active piece, the 7-bag queue and the scoring rules.
//! It has two states: active (a placeable `current` piece exists) and game over (terminal).
//!
//! Every command either fully applies or leaves the board untouched. Blocked moves, blocked
//! rotations and unavailable holds come back as `false`; once the game is over every mutator is
//! a no-op that reports failure.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::pieces::{get_shape, try_rotate, PieceShape};
use crate::rng::PieceQueue;
use crate::scoring::{
    calculate_drop_score, calculate_level, calculate_score, next_combo, NO_COMBO,
};
use crate::snapshot::BoardSnapshot;
use crate::types::{BoardConfig, Cell, Orientation, PieceKind, RotationDirection};

/// A piece value: kind, orientation and the grid position of its rotation origin.
///
/// Pieces are plain values. Moving or rotating builds a new one; the board swaps it in only
/// after it has been checked against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(kind: PieceKind, orientation: Orientation, x: i32, y: i32) -> Self {
        Self {
            kind,
            orientation,
            x,
            y,
        }
    }

    /// A piece in spawn orientation at the given origin
    pub fn spawn(kind: PieceKind, x: i32, y: i32) -> Self {
        Self::new(kind, Orientation::Spawn, x, y)
    }

    /// Get the shape (mino offsets) for the current orientation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.orientation)
    }

    /// Absolute grid cells covered by this piece
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.shape()
            .map(|(dx, dy)| (self.x + i32::from(dx), self.y + i32::from(dy)))
    }

    /// The same piece translated by (dx, dy)
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece turned one step, without any kick
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        Self {
            orientation: self.orientation.rotate(direction),
            ..*self
        }
    }
}

/// Summary of the most recent lock, kept until a caller drains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Base clear points, including any back-to-back multiplier
    pub line_clear_score: u32,
    pub combo_bonus: u32,
    /// Combo value after the lock
    pub combo: i32,
    /// Back-to-back flag after the lock
    pub back_to_back: bool,
    pub b2b_applied: bool,
}

/// Complete board state
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    visible_height: usize,
    hidden_rows: usize,
    current: Option<Piece>,
    hold: Option<PieceKind>,
    /// Set once hold has been used since the last spawn
    hold_used: bool,
    queue: PieceQueue,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    combo: i32,
    back_to_back: bool,
    game_over: bool,
}

impl Board {
    /// Create a board and spawn its first piece.
    ///
    /// The grid is `width` by `visible_height + hidden_rows`. With `Some(seed)` the piece
    /// sequence is reproducible. If the first piece cannot be placed the board starts game over.
    pub fn new(width: usize, visible_height: usize, hidden_rows: usize, seed: Option<u64>) -> Self {
        let mut board = Self {
            grid: Grid::new(width, visible_height + hidden_rows),
            visible_height,
            hidden_rows,
            current: None,
            hold: None,
            hold_used: false,
            queue: PieceQueue::new(seed),
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            combo: NO_COMBO,
            back_to_back: false,
            game_over: false,
        };
        board.spawn_piece(None);
        board
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(
            config.width,
            config.visible_height,
            config.hidden_rows,
            config.seed,
        )
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn visible_height(&self) -> usize {
        self.visible_height
    }

    pub fn hidden_rows(&self) -> usize {
        self.hidden_rows
    }

    /// Visible plus hidden rows
    pub fn total_height(&self) -> usize {
        self.grid.height()
    }

    /// Cell content at (x, y), or `None` when out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.get(x, y)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active piece; `None` only once the game is over
    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        !self.game_over && !self.hold_used
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    /// Combo index: -1 when no combo chain is active
    pub fn combo(&self) -> i32 {
        self.combo
    }

    pub fn back_to_back(&self) -> bool {
        self.back_to_back
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The piece the next randomizer draw will produce
    pub fn next_piece(&self) -> Option<PieceKind> {
        self.queue.peek_next()
    }

    /// The next `count` randomizer draws, in order
    pub fn preview(&mut self, count: usize) -> Vec<PieceKind> {
        self.queue.peek(count)
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn origin: near-top-center column, second row from the top of the full grid
    fn spawn_origin(&self) -> (i32, i32) {
        let x = (self.width().saturating_sub(1) / 2) as i32;
        let y = self.total_height() as i32 - 2;
        (x, y)
    }

    /// Spawn `forced` (or the next queued piece) at the spawn origin.
    ///
    /// On collision the board enters game over and `current` is cleared.
    fn spawn_piece(&mut self, forced: Option<PieceKind>) -> bool {
        if self.game_over {
            return false;
        }

        let kind = forced.unwrap_or_else(|| self.queue.draw());
        let (x, y) = self.spawn_origin();
        let piece = Piece::spawn(kind, x, y);

        if !self.can_place(&piece) {
            info!("game over: {:?} blocked at spawn ({}, {})", kind, x, y);
            self.game_over = true;
            self.current = None;
            return false;
        }

        self.current = Some(piece);
        self.hold_used = false;
        true
    }

    /// Check that every cell of `piece` is inside the grid and empty
    pub fn can_place(&self, piece: &Piece) -> bool {
        self.placement_error(piece).is_none()
    }

    fn placement_error(&self, piece: &Piece) -> Option<PlacementError> {
        piece.cells().iter().find_map(|&(x, y)| match self.grid.get(x, y) {
            None => Some(PlacementError::OutOfBounds {
                kind: piece.kind,
                orientation: piece.orientation,
                x: piece.x,
                y: piece.y,
            }),
            Some(Some(_)) => Some(PlacementError::Occupied {
                kind: piece.kind,
                orientation: piece.orientation,
                x: piece.x,
                y: piece.y,
            }),
            Some(None) => None,
        })
    }

    /// Try to translate the active piece
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.current else {
            return false;
        };

        let moved = active.moved(dx, dy);
        if self.can_place(&moved) {
            self.current = Some(moved);
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row, scoring 1 point on success. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, -1);
        if moved {
            self.score = self
                .score
                .saturating_add(calculate_drop_score(1, false));
        }
        moved
    }

    /// Drop to the lowest reachable row, score 2 points per row, and lock.
    ///
    /// Locks even when the piece could not move. Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over || self.current.is_none() {
            return 0;
        }

        let mut drop_distance: u32 = 0;
        while self.try_move(0, -1) {
            drop_distance += 1;
        }

        self.score = self
            .score
            .saturating_add(calculate_drop_score(drop_distance, true));
        self.lock_piece();
        drop_distance
    }

    /// Rotate one step with wall kicks. On failure the piece is left exactly as it was.
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.current else {
            return false;
        };

        let result = try_rotate(
            active.kind,
            active.orientation,
            active.x,
            active.y,
            direction,
            |x, y| self.grid.is_valid(x, y),
        );

        match result {
            Some((orientation, (dx, dy))) => {
                self.current = Some(Piece {
                    orientation,
                    x: active.x + i32::from(dx),
                    y: active.y + i32::from(dy),
                    ..active
                });
                true
            }
            None => {
                trace!("rotation {:?} blocked for {:?}", direction, active);
                false
            }
        }
    }

    /// Swap the active piece with the hold slot.
    ///
    /// With an empty slot the active kind is stashed and the next queued piece spawns; otherwise
    /// the held kind spawns in its place. Allowed once per spawn. The spawn can end the game.
    pub fn hold(&mut self) -> bool {
        if self.game_over || self.hold_used {
            return false;
        }
        let Some(active) = self.current else {
            return false;
        };

        let previous = self.hold.replace(active.kind);
        self.current = None;
        self.spawn_piece(previous);
        self.hold_used = true;
        true
    }

    /// One gravity step: move down a row, or lock immediately if blocked.
    ///
    /// Returns `false` only when the board is game over.
    pub fn tick_gravity(&mut self) -> bool {
        if self.game_over || self.current.is_none() {
            return false;
        }
        if !self.try_move(0, -1) {
            self.lock_piece();
        }
        true
    }

    /// Install a piece directly, bypassing movement rules. Meant for scenario setup.
    pub fn set_current(&mut self, piece: Piece) -> Result<(), PlacementError> {
        if self.game_over {
            return Err(PlacementError::GameOver);
        }
        if let Some(err) = self.placement_error(&piece) {
            return Err(err);
        }
        self.current = Some(piece);
        Ok(())
    }

    /// Rows the active piece could fall before landing. Does not change any state.
    pub fn ghost_drop_distance(&self) -> u32 {
        let Some(active) = self.current else {
            return 0;
        };

        let mut distance = 0;
        let mut piece = active;
        loop {
            let moved = piece.moved(0, -1);
            if !self.can_place(&moved) {
                break;
            }
            piece = moved;
            distance += 1;
        }
        distance
    }

    /// Where the active piece would land under a hard drop
    pub fn ghost_piece(&self) -> Option<Piece> {
        let active = self.current?;
        Some(active.moved(0, -(self.ghost_drop_distance() as i32)))
    }

    /// Lock the active piece onto the grid, resolve line clears, and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(active) = self.current.take() else {
            return;
        };

        // `current` is always placeable, so its cells are free.
        let locked = self.grid.lock_piece(&active.cells(), active.kind);
        debug_assert!(locked, "active piece {:?} overlaps terrain", active);

        let event = self.resolve_lines(active.kind);
        debug!(
            "locked {:?}: {} line(s), +{} (combo {}, b2b {})",
            active.kind,
            event.lines_cleared,
            event.line_clear_score + event.combo_bonus,
            event.combo,
            event.back_to_back
        );
        self.last_event = Some(event);

        self.spawn_piece(None);
    }

    /// Clear full rows and update lines, combo, back-to-back, score and level
    fn resolve_lines(&mut self, kind: PieceKind) -> LockEvent {
        let lines_cleared = self.grid.clear_full_rows().len();

        self.combo = next_combo(self.combo, lines_cleared);
        let result = calculate_score(lines_cleared, self.combo, self.back_to_back);

        if lines_cleared > 0 {
            self.lines = self.lines.saturating_add(lines_cleared as u32);
            self.back_to_back = result.qualifies_for_b2b;
            self.score = self.score.saturating_add(result.total);
            self.level = self.level.max(calculate_level(self.lines));
        }

        LockEvent {
            kind,
            lines_cleared: lines_cleared as u32,
            line_clear_score: result.line_clear_score,
            combo_bonus: result.combo_bonus,
            combo: self.combo,
            back_to_back: self.back_to_back,
            b2b_applied: result.b2b_applied,
        }
    }

    /// Read-only copy of everything a presentation layer draws
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width(),
            visible_height: self.visible_height,
            hidden_rows: self.hidden_rows,
            cells: self
                .grid
                .cells()
                .iter()
                .map(|cell| cell.map_or(0, |kind| kind.code()))
                .collect(),
            current: self.current,
            ghost_drop_distance: self.ghost_drop_distance(),
            hold: self.hold,
            can_hold: self.can_hold(),
            next: self.next_piece(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            combo: self.combo,
            back_to_back: self.back_to_back,
            game_over: self.game_over,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
