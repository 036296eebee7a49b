//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental vocabulary of the rule engine: piece kinds, orientations,
//! rotation directions, grid cells, scoring constants, and the board configuration.
//! It carries no game logic, so a renderer or driver can depend on it without pulling in the
//! engine itself.
//!
//! # Coordinates
//!
//! - `x` grows to the right, starting at column 0.
//! - `y` grows **upward**; row 0 is the floor of the playfield.
//! - The top `hidden_rows` rows sit above the visible field and are used as spawn headroom.
//!
//! # Default dimensions
//!
//! | Constant | Value |
//! |----------|-------|
//! | `DEFAULT_WIDTH` | 10 |
//! | `DEFAULT_VISIBLE_HEIGHT` | 20 |
//! | `DEFAULT_HIDDEN_ROWS` | 2 |
//!
//! # Examples
//!
//! ```
//! use falling_puzzle_types::{Orientation, PieceKind, RotationDirection};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.code(), 3);
//!
//! let o = Orientation::Spawn.rotate(RotationDirection::Clockwise);
//! assert_eq!(o, Orientation::Right);
//! assert_eq!(o.rotate(RotationDirection::CounterClockwise), Orientation::Spawn);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default visible playfield height in cells
pub const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Default number of hidden rows stacked above the visible field
pub const DEFAULT_HIDDEN_ROWS: usize = 2;

/// Number of distinct piece kinds, and the size of one randomizer bag
pub const BAG_SIZE: usize = 7;

/// Line clear base scores, indexed by the number of rows cleared.
///
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Combo bonus per combo step (50 × combo index, applied from the second consecutive clear)
pub const COMBO_BASE: u32 = 50;

/// Back-to-back bonus numerator (3/2 = 1.5x multiplier)
pub const B2B_NUMERATOR: u32 = 3;

/// Back-to-back bonus denominator
pub const B2B_DENOMINATOR: u32 = 2;

/// Lines required per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row for a successful soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row for a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// The seven piece kinds
///
/// - **I**: the line shape, 4 long
/// - **O**: 2x2 square, rotation invariant
/// - **T**, **S**, **Z**, **J**, **L**: the five generic shapes sharing one kick table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in declaration order. This is the unshuffled content of one bag.
    pub const ALL: [PieceKind; BAG_SIZE] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Compact cell code used by snapshots: 1..=7 in declaration order (0 is reserved for empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// Direction of a single 90° rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Orientation states of a piece
///
/// - **Spawn**: orientation on spawn (0°)
/// - **Right**: rotated 90° clockwise
/// - **Reverse**: rotated 180°
/// - **Left**: rotated 90° counter-clockwise
///
/// The four values form a cyclic group: clockwise is +1 mod 4, counter-clockwise is -1 mod 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Spawn,
    Right,
    Reverse,
    Left,
}

impl Orientation {
    /// All orientations in clockwise order starting at `Spawn`
    pub const ALL: [Orientation; 4] = [
        Orientation::Spawn,
        Orientation::Right,
        Orientation::Reverse,
        Orientation::Left,
    ];

    /// Position in the clockwise cycle (Spawn = 0 .. Left = 3)
    pub fn index(&self) -> usize {
        match self {
            Orientation::Spawn => 0,
            Orientation::Right => 1,
            Orientation::Reverse => 2,
            Orientation::Left => 3,
        }
    }

    fn from_index(index: usize) -> Self {
        Self::ALL[index & 3]
    }

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use falling_puzzle_types::Orientation;
    ///
    /// assert_eq!(Orientation::Left.rotate_cw(), Orientation::Spawn);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use falling_puzzle_types::Orientation;
    ///
    /// assert_eq!(Orientation::Spawn.rotate_ccw(), Orientation::Left);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Rotate one step in the given direction
    pub fn rotate(&self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => self.rotate_cw(),
            RotationDirection::CounterClockwise => self.rotate_ccw(),
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: terrain written by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Board construction parameters
///
/// Missing fields fall back to the defaults when deserialized, so a driver can load a partial
/// config such as `{"seed": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub visible_height: usize,
    pub hidden_rows: usize,
    /// Randomizer seed. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl BoardConfig {
    /// Total grid height, visible plus hidden rows
    pub fn total_height(&self) -> usize {
        self.visible_height + self.hidden_rows
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            visible_height: DEFAULT_VISIBLE_HEIGHT,
            hidden_rows: DEFAULT_HIDDEN_ROWS,
            seed: None,
        }
    }
}
