use crate::pieces::cells_at;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
use crate::Tetromino;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute board cells of the piece.
    pub fn cells(&self) -> [(i8, i8); 4] {
        cells_at(self.kind, self.rotation, self.x, self.y)
    }

    /// Absolute cells if the piece sat at row `y` instead.
    pub fn cells_at_row(&self, y: i8) -> [(i8, i8); 4] {
        cells_at(self.kind, self.rotation, self.x, y)
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything a renderer needs.
///
/// Being a value, it stays valid after the game moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, 1-7 = locked piece kind + 1
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub game_over: bool,
    pub seed: u32,
    pub pieces_spawned: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// What an absent game looks like: empty, zeroed and over.
    pub fn inert() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            game_over: true,
            seed: 0,
            pieces_spawned: 0,
            score: 0,
            level: 0,
            lines: 0,
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Board value at (x, y), 0 when out of bounds.
    pub fn cell(&self, x: i8, y: i8) -> u8 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::inert()
    }
}
