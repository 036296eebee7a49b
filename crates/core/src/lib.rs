//! Core rule engine - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block puzzle and nothing else. It has no
//! dependencies on rendering, input or timing. Callers drive it with discrete commands.
//!
//! - **Deterministic**: the same seed produces the same piece sequence and the same game
//! - **Atomic**: a command either applies fully or leaves the board untouched
//! - **Terminal game over**: once a spawn collides, every mutator is a no-op
//!
//! # Module Structure
//!
//! - [`grid`]: cell storage, bounds checks and line clearing
//! - [`pieces`]: shape tables and SRS rotation with wall kicks
//! - [`rng`]: 7-bag random piece generation
//! - [`scoring`]: line clear points, combos and back-to-back
//! - [`board`]: the active piece, hold, drops and lock resolution
//! - [`snapshot`]: a detached, serializable view of a board
//! - [`error`]: errors for direct piece placement
//!
//! # Coordinates
//!
//! `x` grows to the right and `y` grows upward; row 0 is the floor. The board is
//! `visible_height + hidden_rows` rows tall, with the hidden rows on top. Pieces spawn at
//! `x = (width - 1) / 2`, `y = total_height - 2` in spawn orientation.
//!
//! # Example
//!
//! ```
//! use falling_puzzle_core::Board;
//! use falling_puzzle_core::types::RotationDirection;
//!
//! let mut board = Board::new(10, 20, 2, Some(12345));
//!
//! board.move_right();
//! board.rotate(RotationDirection::Clockwise);
//! let rows = board.hard_drop();
//!
//! // Hard drop awards 2 points per row
//! assert_eq!(board.score(), 2 * rows);
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use falling_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockEvent, Piece};
pub use error::PlacementError;
pub use grid::Grid;
pub use pieces::{get_shape, kick_candidates, try_rotate, KickClass};
pub use rng::PieceQueue;
pub use scoring::{calculate_drop_score, calculate_score, ScoreResult, NO_COMBO};
pub use snapshot::BoardSnapshot;
