//! Optional engine handle.
//!
//! Callers that may not hold a game yet (before the first reset, between
//! sessions) can keep an `Option<Game>` and drive it through [`GameHandle`].
//! An absent game is inert: mutators report `Blocked` and change nothing,
//! queries return zero, empty, or "game over".

use arrayvec::ArrayVec;

use crate::snapshot::GameSnapshot;
use crate::types::{MoveResult, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::Game;

pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

pub trait GameHandle {
    fn reset(&mut self, seed: u32);
    fn tick(&mut self) -> MoveResult;
    fn move_by(&mut self, dx: i8, dy: i8) -> MoveResult;
    fn rotate_cw(&mut self) -> MoveResult;
    fn hard_drop(&mut self) -> MoveResult;

    fn is_game_over(&self) -> bool;
    fn score(&self) -> u32;
    fn lines(&self) -> u32;
    fn board_grid(&self) -> BoardGrid;
    fn active_cells(&self) -> ArrayVec<(i8, i8), 4>;
    fn next_kind(&self) -> Option<PieceKind>;
    fn snapshot(&self) -> GameSnapshot;
}

impl GameHandle for Option<Game> {
    fn reset(&mut self, seed: u32) {
        if let Some(game) = self {
            game.reset(seed);
        }
    }

    fn tick(&mut self) -> MoveResult {
        self.as_mut().map_or(MoveResult::Blocked, Game::tick)
    }

    fn move_by(&mut self, dx: i8, dy: i8) -> MoveResult {
        self.as_mut()
            .map_or(MoveResult::Blocked, |game| game.move_by(dx, dy))
    }

    fn rotate_cw(&mut self) -> MoveResult {
        self.as_mut().map_or(MoveResult::Blocked, Game::rotate_cw)
    }

    fn hard_drop(&mut self) -> MoveResult {
        self.as_mut().map_or(MoveResult::Blocked, Game::hard_drop)
    }

    fn is_game_over(&self) -> bool {
        self.as_ref().map_or(true, Game::game_over)
    }

    fn score(&self) -> u32 {
        self.as_ref().map_or(0, Game::score)
    }

    fn lines(&self) -> u32 {
        self.as_ref().map_or(0, Game::lines)
    }

    fn board_grid(&self) -> BoardGrid {
        self.as_ref()
            .map_or([[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize], |game| {
                game.board().to_u8_grid()
            })
    }

    fn active_cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.as_ref()
            .map(|game| ArrayVec::from(game.active_cells()))
            .unwrap_or_default()
    }

    fn next_kind(&self) -> Option<PieceKind> {
        self.as_ref().map(Game::next_kind)
    }

    fn snapshot(&self) -> GameSnapshot {
        self.as_ref().map_or_else(GameSnapshot::inert, Game::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_game_is_inert() {
        let mut handle: Option<Game> = None;

        handle.reset(5);
        assert!(handle.is_none());
        assert_eq!(handle.tick(), MoveResult::Blocked);
        assert_eq!(handle.move_by(1, 0), MoveResult::Blocked);
        assert_eq!(handle.rotate_cw(), MoveResult::Blocked);
        assert_eq!(handle.hard_drop(), MoveResult::Blocked);

        assert!(handle.is_game_over());
        assert_eq!(handle.score(), 0);
        assert_eq!(handle.lines(), 0);
        assert!(handle.board_grid().iter().flatten().all(|&v| v == 0));
        assert!(handle.active_cells().is_empty());
        assert_eq!(handle.next_kind(), None);
        assert_eq!(handle.snapshot(), GameSnapshot::inert());
    }

    #[test]
    fn present_game_forwards_to_engine() {
        let mut handle = Some(Game::new(1));

        assert!(!handle.is_game_over());
        assert_eq!(handle.active_cells().len(), 4);
        assert_eq!(handle.next_kind(), Some(PieceKind::Z));
        assert_eq!(handle.move_by(i8::MAX, 0), MoveResult::Blocked);
        assert_eq!(handle.move_by(1, 0), MoveResult::Ok);
        assert_eq!(handle.hard_drop(), MoveResult::Ok);
        assert_eq!(handle.board_grid()[19][4], PieceKind::J.cell_value());

        handle.reset(1);
        assert_eq!(handle, Some(Game::new(1)));
    }
}
