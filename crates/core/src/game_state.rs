//! Game state module - the engine
//!
//! Owns the board, the active and next piece, the counters and the RNG. Every
//! mutation is checked against [`Game::collides`] before it is applied, so a
//! rejected move leaves the state exactly as it was.
//!
//! There are two states: playing and game over. The only way into game over
//! is a spawn whose initial position is already blocked; the only way out is
//! [`Game::reset`].

use crate::pieces::{cells_at, try_rotate, PieceShape, SPAWN_POSITION};
use crate::rng::{effective_seed, Lcg};
use crate::scoring::{calculate_level, drop_interval_ms, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Absolute board cells for the current anchor and rotation
    pub fn cells(&self) -> PieceShape {
        cells_at(self.kind, self.rotation, self.x, self.y)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    rng: Lcg,
    /// Seed of the current game, after the 0 → default mapping.
    seed: u32,
    /// Pieces spawned since the last reset (including a blocked final spawn).
    pieces_spawned: u32,
    /// Last lock outcome (consumed by the shell).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    game_over: bool,
}

impl Game {
    /// Create a game and reset it with `seed`
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            board: Board::new(),
            active: Tetromino::new(PieceKind::I),
            next: PieceKind::I,
            rng: Lcg::new(seed),
            seed: effective_seed(seed),
            pieces_spawned: 0,
            last_event: None,
            score: 0,
            lines: 0,
            game_over: false,
        };
        game.reset(seed);
        game
    }

    /// Start over: empty board, zero counters, fresh RNG.
    ///
    /// Seed 0 runs with [`DEFAULT_SEED`]. The first "next" piece is drawn
    /// and immediately spawned.
    pub fn reset(&mut self, seed: u32) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.last_event = None;
        self.pieces_spawned = 0;
        self.seed = effective_seed(seed);
        self.rng = Lcg::new(seed);
        self.next = self.rng.next_piece();
        self.spawn();
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        calculate_level(self.lines)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    /// Absolute cells of the active piece
    pub fn active_cells(&self) -> [(i8, i8); 4] {
        self.active.cells()
    }

    /// Live view of the locked cells.
    ///
    /// The borrow ends before the next mutating call; take a
    /// [`Game::snapshot`] to keep a copy around.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Suggested gravity interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level())
    }

    /// True if the piece would leave the board or hit a locked cell.
    ///
    /// This is the single legality test behind spawn, move, rotate and drop.
    pub fn collides(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        cells_at(kind, rotation, x, y)
            .iter()
            .any(|&(cx, cy)| !self.board.is_free(cx, cy))
    }

    fn active_collides_at(&self, x: i8, y: i8) -> bool {
        self.collides(self.active.kind, self.active.rotation, x, y)
    }

    /// Gravity step: move down one row, or lock if the piece is resting.
    pub fn tick(&mut self) -> MoveResult {
        if self.game_over {
            return MoveResult::Blocked;
        }

        let (x, y) = (self.active.x, self.active.y);
        if !self.active_collides_at(x, y + 1) {
            self.active.y = y + 1;
        } else {
            self.lock_active();
        }
        MoveResult::Ok
    }

    /// Shift the active piece by (dx, dy). Never locks, even when the
    /// piece ends up resting on something.
    pub fn move_by(&mut self, dx: i8, dy: i8) -> MoveResult {
        if self.game_over {
            return MoveResult::Blocked;
        }

        let (Some(x), Some(y)) = (
            self.active.x.checked_add(dx),
            self.active.y.checked_add(dy),
        ) else {
            return MoveResult::Blocked;
        };
        if self.active_collides_at(x, y) {
            return MoveResult::Blocked;
        }
        self.active.x = x;
        self.active.y = y;
        MoveResult::Ok
    }

    /// Rotate clockwise, trying horizontal kicks 0, -1, +1, -2, +2 in order.
    pub fn rotate_cw(&mut self) -> MoveResult {
        if self.game_over {
            return MoveResult::Blocked;
        }

        let Tetromino { kind, rotation, x, y } = self.active;
        match try_rotate(rotation, x, |r, kx| self.collides(kind, r, kx, y)) {
            Some((new_rotation, dx)) => {
                self.active.rotation = new_rotation;
                self.active.x = x + dx;
                MoveResult::Ok
            }
            None => MoveResult::Blocked,
        }
    }

    /// Drop straight down to the resting row, then lock.
    pub fn hard_drop(&mut self) -> MoveResult {
        if self.game_over {
            return MoveResult::Blocked;
        }

        self.active.y = self.resting_y();
        self.lock_active();
        MoveResult::Ok
    }

    /// Remove every full row from the board and return how many went.
    ///
    /// Score bookkeeping is done by the lock path, not here.
    pub fn clear_lines(&mut self) -> usize {
        self.board.clear_lines()
    }

    /// Dispatch a player action to the matching primitive.
    pub fn apply_action(&mut self, action: GameAction) -> MoveResult {
        match action {
            GameAction::MoveLeft => self.move_by(-1, 0),
            GameAction::MoveRight => self.move_by(1, 0),
            GameAction::SoftDrop => self.move_by(0, 1),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Row the active piece would come to rest on
    fn resting_y(&self) -> i8 {
        let (x, mut y) = (self.active.x, self.active.y);
        while !self.active_collides_at(x, y + 1) {
            y += 1;
        }
        y
    }

    /// Landing row of the active piece, `None` once the game is over.
    pub fn ghost_y(&self) -> Option<i8> {
        (!self.game_over).then(|| self.resting_y())
    }

    /// Lock → clear lines → score → spawn. Shared by tick and hard drop.
    fn lock_active(&mut self) {
        let piece = self.active;
        // The active piece is always legal while playing, so this cannot fail.
        let locked = self.board.lock_cells(&piece.cells(), piece.kind);
        debug_assert!(locked, "active piece overlapped the board at lock");

        let cleared = self.clear_lines();
        let points = line_clear_score(cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);

        self.spawn();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            line_clear_score: points,
            topped_out: self.game_over,
        });
    }

    /// Promote next → active, draw a new next, test the spawn position.
    fn spawn(&mut self) {
        self.active = Tetromino::new(self.next);
        self.next = self.rng.next_piece();
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if self.active_collides_at(self.active.x, self.active.y) {
            self.game_over = true;
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.ghost_y = self.ghost_y();
        out.next = Some(self.next);
        out.game_over = self.game_over;
        out.seed = self.seed;
        out.pieces_spawned = self.pieces_spawned;
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(0)
    }
}
