//! Pieces module tests - shape tables and SRS kick data

use falling_puzzle::core::pieces::{get_shape, kick_candidates, try_rotate};
use falling_puzzle::types::{Orientation, PieceKind, RotationDirection};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::I, Orientation::Spawn),
        [(-1, 0), (0, 0), (1, 0), (2, 0)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Orientation::Right),
        [(1, -1), (1, 0), (1, 1), (1, 2)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Orientation::Reverse),
        [(-1, 1), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Orientation::Left),
        [(0, -1), (0, 0), (0, 1), (0, 2)]
    );
}

#[test]
fn test_t_piece_points_up_at_spawn() {
    let spawn = get_shape(PieceKind::T, Orientation::Spawn);
    assert!(spawn.contains(&(0, 1)));
    assert!(!spawn.contains(&(0, -1)));

    let reverse = get_shape(PieceKind::T, Orientation::Reverse);
    assert!(reverse.contains(&(0, -1)));
}

#[test]
fn test_s_z_share_opposite_orientations() {
    for kind in [PieceKind::S, PieceKind::Z] {
        assert_eq!(
            get_shape(kind, Orientation::Spawn),
            get_shape(kind, Orientation::Reverse)
        );
        assert_eq!(
            get_shape(kind, Orientation::Right),
            get_shape(kind, Orientation::Left)
        );
    }
}

#[test]
fn test_spawn_shapes_cover_origin() {
    for kind in PieceKind::ALL {
        assert!(
            get_shape(kind, Orientation::Spawn).contains(&(0, 0)),
            "{:?} spawn shape should cover its origin",
            kind
        );
    }
}

#[test]
fn test_spawn_shapes_fit_two_rows() {
    for kind in PieceKind::ALL {
        for (_, dy) in get_shape(kind, Orientation::Spawn) {
            assert!((0..=1).contains(&dy), "{:?} spawns outside its two rows", kind);
        }
    }
}

// ============== Kick Tests ==============

#[test]
fn test_kick_candidate_counts() {
    for from in Orientation::ALL {
        let to = from.rotate_cw();
        assert_eq!(kick_candidates(PieceKind::O, from, to), &[(0, 0)]);
        assert_eq!(kick_candidates(PieceKind::I, from, to).len(), 5);
        assert_eq!(kick_candidates(PieceKind::T, from, to).len(), 5);
    }
}

#[test]
fn test_generic_kicks_shared_by_five_kinds() {
    let reference = kick_candidates(PieceKind::T, Orientation::Spawn, Orientation::Right);
    for kind in [PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(
            kick_candidates(kind, Orientation::Spawn, Orientation::Right),
            reference
        );
    }
    assert_ne!(
        kick_candidates(PieceKind::I, Orientation::Spawn, Orientation::Right),
        reference
    );
}

#[test]
fn test_reverse_transition_negates_kicks() {
    for kind in [PieceKind::I, PieceKind::T] {
        for from in Orientation::ALL {
            let to = from.rotate_cw();
            let forward = kick_candidates(kind, from, to);
            let backward = kick_candidates(kind, to, from);
            for (f, b) in forward.iter().zip(backward) {
                assert_eq!((f.0 + b.0, f.1 + b.1), (0, 0), "{:?} {:?}->{:?}", kind, from, to);
            }
        }
    }
}

#[test]
fn test_i_kick_values() {
    assert_eq!(
        kick_candidates(PieceKind::I, Orientation::Spawn, Orientation::Right),
        &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)]
    );
    assert_eq!(
        kick_candidates(PieceKind::I, Orientation::Right, Orientation::Reverse),
        &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)]
    );
}

#[test]
fn test_generic_kick_values() {
    assert_eq!(
        kick_candidates(PieceKind::J, Orientation::Spawn, Orientation::Right),
        &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]
    );
    assert_eq!(
        kick_candidates(PieceKind::L, Orientation::Reverse, Orientation::Left),
        &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)]
    );
}

// ============== Rotation Tests ==============

#[test]
fn test_try_rotate_open_space_needs_no_kick() {
    for kind in PieceKind::ALL {
        for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
            let result = try_rotate(kind, Orientation::Spawn, 5, 5, direction, |_, _| true);
            assert_eq!(
                result,
                Some((Orientation::Spawn.rotate(direction), (0, 0)))
            );
        }
    }
}

#[test]
fn test_try_rotate_floor_kick() {
    // I flat on the floor rotating to Right: the vertical bar would dip to y = -1 unkicked.
    let result = try_rotate(
        PieceKind::I,
        Orientation::Spawn,
        4,
        0,
        RotationDirection::Clockwise,
        |x, y| (0..10).contains(&x) && y >= 0,
    );
    // (0, 0) and (-2, 0) and (1, 0) keep the dip; (-2, -1) sinks further; (1, 2) lifts it out.
    assert_eq!(result, Some((Orientation::Right, (1, 2))));
}
