use crate::types::{Orientation, PieceKind};

/// Why [`Board::set_current`](crate::Board::set_current) refused a piece.
///
/// This only fires when scenario setup hands the board a piece it cannot hold; normal play
/// reports blocked moves as `false` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("board is game over; no piece can be installed")]
    GameOver,
    #[error("cannot place {kind:?} ({orientation:?}) at ({x}, {y}): cell out of bounds")]
    OutOfBounds {
        kind: PieceKind,
        orientation: Orientation,
        x: i32,
        y: i32,
    },
    #[error("cannot place {kind:?} ({orientation:?}) at ({x}, {y}): cell occupied")]
    Occupied {
        kind: PieceKind,
        orientation: Orientation,
        x: i32,
        y: i32,
    },
}

impl PlacementError {
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::GameOver => "game_over",
            PlacementError::OutOfBounds { .. } | PlacementError::Occupied { .. } => {
                "invalid_place"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_piece_and_origin() {
        let err = PlacementError::Occupied {
            kind: PieceKind::T,
            orientation: Orientation::Right,
            x: 3,
            y: -1,
        };
        assert_eq!(
            err.to_string(),
            "cannot place T (Right) at (3, -1): cell occupied"
        );
        assert_eq!(err.code(), "invalid_place");
        assert_eq!(PlacementError::GameOver.code(), "game_over");
    }
}
