//! Pieces module - shape tables and SRS rotation with wall kicks
//!
//! Offsets are relative to the piece's rotation origin, with `y` pointing up.
//! Reference: https://tetris.wiki/SRS

use crate::types::{Orientation, PieceKind, RotationDirection};

/// Offset of a single mino relative to the piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece origin
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and orientation
pub fn get_shape(kind: PieceKind, orientation: Orientation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(orientation),
        PieceKind::O => get_o_shape(orientation),
        PieceKind::T => get_t_shape(orientation),
        PieceKind::S => get_s_shape(orientation),
        PieceKind::Z => get_z_shape(orientation),
        PieceKind::J => get_j_shape(orientation),
        PieceKind::L => get_l_shape(orientation),
    }
}

/// I piece shapes
fn get_i_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        // horizontal through the origin row
        Orientation::Spawn => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        // vertical, one column right of the origin
        Orientation::Right => [(1, -1), (1, 0), (1, 1), (1, 2)],
        // horizontal, one row above the origin
        Orientation::Reverse => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        // vertical through the origin column
        Orientation::Left => [(0, -1), (0, 0), (0, 1), (0, 2)],
    }
}

/// O piece shapes (same for all orientations)
fn get_o_shape(_orientation: Orientation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// T piece shapes
fn get_t_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Spawn => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        Orientation::Right => [(0, -1), (0, 0), (0, 1), (1, 0)],
        Orientation::Reverse => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        Orientation::Left => [(0, -1), (0, 0), (0, 1), (-1, 0)],
    }
}

/// S piece shapes
fn get_s_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Spawn | Orientation::Reverse => [(0, 0), (1, 0), (-1, 1), (0, 1)],
        Orientation::Right | Orientation::Left => [(0, 0), (0, 1), (1, -1), (1, 0)],
    }
}

/// Z piece shapes
fn get_z_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Spawn | Orientation::Reverse => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        Orientation::Right | Orientation::Left => [(1, 0), (1, 1), (0, 0), (0, -1)],
    }
}

/// J piece shapes
fn get_j_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Spawn => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        Orientation::Right => [(0, -1), (0, 0), (0, 1), (1, 1)],
        Orientation::Reverse => [(1, -1), (-1, 0), (0, 0), (1, 0)],
        Orientation::Left => [(-1, -1), (0, -1), (0, 0), (0, 1)],
    }
}

/// L piece shapes
fn get_l_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Spawn => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        Orientation::Right => [(0, -1), (0, 0), (0, 1), (1, -1)],
        Orientation::Reverse => [(-1, 0), (0, 0), (1, 0), (-1, -1)],
        Orientation::Left => [(0, -1), (0, 0), (0, 1), (-1, 1)],
    }
}

/// Which kick table a piece kind uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KickClass {
    /// The I piece, with its own table
    Line,
    /// The O piece, which never needs correction
    Square,
    /// J, L, S, T and Z, sharing one table
    Generic,
}

impl KickClass {
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => KickClass::Line,
            PieceKind::O => KickClass::Square,
            PieceKind::T | PieceKind::S | PieceKind::Z | PieceKind::J | PieceKind::L => {
                KickClass::Generic
            }
        }
    }
}

/// SRS wall kick data
/// Each entry is a (dx, dy) offset added to the origin, tried in order.
/// The first entry is always the unkicked rotation.
pub type KickTable = [[MinoOffset; 5]; 8];

/// O piece: the unkicked rotation only
static O_KICKS: [MinoOffset; 1] = [(0, 0)];

/// JLSTZ kick table, indexed by [`transition_index`]
static JLSTZ_KICKS: KickTable = [
    // Spawn -> Right
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // Right -> Spawn
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // Right -> Reverse
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // Reverse -> Right
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // Reverse -> Left
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // Left -> Reverse
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // Left -> Spawn
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // Spawn -> Left
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// I piece kick table (different from JLSTZ)
static I_KICKS: KickTable = [
    // Spawn -> Right
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // Right -> Spawn
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // Right -> Reverse
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // Reverse -> Right
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // Reverse -> Left
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // Left -> Reverse
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // Left -> Spawn
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // Spawn -> Left
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Index of a single-step transition in the kick tables.
///
/// Returns `None` for pairs that are not one clockwise or counter-clockwise step apart.
pub fn transition_index(from: Orientation, to: Orientation) -> Option<usize> {
    use Orientation::*;
    match (from, to) {
        (Spawn, Right) => Some(0),
        (Right, Spawn) => Some(1),
        (Right, Reverse) => Some(2),
        (Reverse, Right) => Some(3),
        (Reverse, Left) => Some(4),
        (Left, Reverse) => Some(5),
        (Left, Spawn) => Some(6),
        (Spawn, Left) => Some(7),
        _ => None,
    }
}

/// Ordered kick candidates for rotating `kind` from `from` to `to`.
///
/// Empty when the transition is not a single 90° step.
pub fn kick_candidates(kind: PieceKind, from: Orientation, to: Orientation) -> &'static [MinoOffset] {
    let Some(index) = transition_index(from, to) else {
        return &[];
    };
    match KickClass::of(kind) {
        KickClass::Square => &O_KICKS,
        KickClass::Line => &I_KICKS[index],
        KickClass::Generic => &JLSTZ_KICKS[index],
    }
}

/// Try to rotate a piece with wall kicks
///
/// `is_valid` reports whether a single grid cell is in bounds and empty.
/// Returns `Some((new_orientation, kick_offset))` for the first candidate whose every mino is
/// valid, or `None` if all candidates fail.
pub fn try_rotate(
    kind: PieceKind,
    orientation: Orientation,
    x: i32,
    y: i32,
    direction: RotationDirection,
    is_valid: impl Fn(i32, i32) -> bool,
) -> Option<(Orientation, MinoOffset)> {
    let new_orientation = orientation.rotate(direction);
    let new_shape = get_shape(kind, new_orientation);

    kick_candidates(kind, orientation, new_orientation)
        .iter()
        .copied()
        .find(|&(dx, dy)| {
            let new_x = x + i32::from(dx);
            let new_y = y + i32::from(dy);
            new_shape
                .iter()
                .all(|&(mx, my)| is_valid(new_x + i32::from(mx), new_y + i32::from(my)))
        })
        .map(|kick| (new_orientation, kick))
}
