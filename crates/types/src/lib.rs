//! Shared types and constants for the classic falling-block game.
//!
//! Everything in this crate is plain data: no I/O, no timing, no state. The
//! engine (`tetris-classic-core`), the terminal shell and the leaderboard all
//! agree on these definitions.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0)
//!
//! # Drop Interval Curve
//!
//! The engine has no clock. It suggests a gravity interval per level and the
//! caller decides when to tick:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 500ms |
//! | 1 | 465ms |
//! | 5 | 325ms |
//! | 12 | 80ms |
//! | 13+ | 60ms (floor) |
//!
//! # Examples
//!
//! ```
//! use tetris_classic_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.cell_value(), 3);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor column for a freshly spawned piece
pub const SPAWN_X: i8 = 3;

/// Anchor row for a freshly spawned piece
pub const SPAWN_Y: i8 = 0;

/// Seed used when a game is reset with seed 0.
pub const DEFAULT_SEED: u32 = 0x1234_5678;

/// Gravity interval at level 0
pub const BASE_DROP_MS: u32 = 500;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 35;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_FLOOR_MS: u32 = 60;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for clearing N lines with a single lock.
///
/// Index 4 is the maximal ("tetris") clear. The table is flat: the level does
/// not scale it.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// The declaration order is the engine's type index (0..=6): it is what the
/// piece generator maps random draws onto, and `index + 1` is the value a
/// locked cell of that kind holds on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// All kinds in type-index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Type index in `0..7`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a type index; `None` outside `0..7`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Board value of a locked cell of this kind (1-7; 0 means empty).
    pub fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::cell_value`].
    ///
    /// ```
    /// use tetris_classic_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_cell_value(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_cell_value(7), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_cell_value(0), None);
    /// assert_eq!(PieceKind::from_cell_value(8), None);
    /// ```
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tetris_classic_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states, clockwise from the spawn orientation.
///
/// The cycle goes North → East → South → West → North; `index()` gives the
/// numeric rotation state 0-3 used by the shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetris_classic_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation state 0-3
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for a state index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Player actions the engine understands.
///
/// Pausing, restarting and quitting belong to the shell, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use tetris_classic_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECW"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
        }
    }
}

/// Outcome of a mutating engine call.
///
/// A rejected transition is not an error: the engine reports `Blocked` and
/// leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Ok,
    Blocked,
}

impl MoveResult {
    pub fn is_ok(self) -> bool {
        self == MoveResult::Ok
    }

    pub fn is_blocked(self) -> bool {
        self == MoveResult::Blocked
    }
}

impl From<bool> for MoveResult {
    fn from(ok: bool) -> Self {
        if ok {
            MoveResult::Ok
        } else {
            MoveResult::Blocked
        }
    }
}

/// Outcome of a piece lock, kept by the engine until the shell takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// The spawn that followed this lock was blocked.
    pub topped_out: bool,
}

/// A cell on the game board
///
/// - `None`: empty (board value 0)
/// - `Some(kind)`: locked cell (board value `kind.cell_value()`)
pub type Cell = Option<PieceKind>;
