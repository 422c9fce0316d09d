//! Pieces module - tetromino shape table and horizontal wall kicks
//!
//! Shapes are a precomputed lookup table indexed by `[kind][rotation]`, never
//! rotated at runtime. Each entry lists the 4 cell offsets relative to the
//! piece anchor inside a 4x4 box. The O piece repeats the same entry four
//! times, so rotating it changes nothing visible.

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Horizontal offsets tried, in order, when rotating.
///
/// No shift first, then one cell left, one right, two left, two right. The
/// first offset that fits wins.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (SPAWN_X, SPAWN_Y);

/// `SHAPES[kind.index()][rotation.index()]`
pub static SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
#[inline]
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Absolute board cells of a piece anchored at (x, y)
///
/// Saturates at the `i8` limits; a saturated cell is always off the board.
#[inline]
pub fn cells_at(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> PieceShape {
    get_shape(kind, rotation).map(|(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
}

/// Try to rotate a piece clockwise with horizontal kicks.
///
/// `collides(rotation, x)` reports whether the piece would collide at the new
/// rotation with anchor column `x` (the row never changes). Returns the new
/// rotation and the kick offset that was used, or `None` if every offset is
/// blocked.
pub fn try_rotate(
    rotation: Rotation,
    x: i8,
    collides: impl Fn(Rotation, i8) -> bool,
) -> Option<(Rotation, i8)> {
    let new_rotation = rotation.rotate_cw();

    KICK_OFFSETS
        .iter()
        .copied()
        .find(|&dx| x.checked_add(dx).is_some_and(|kx| !collides(new_rotation, kx)))
        .map(|dx| (new_rotation, dx))
}
