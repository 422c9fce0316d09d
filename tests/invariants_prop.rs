//! Property tests for engine invariants.
//!
//! Random seeds and random call sequences; after every mutating call:
//! - board cells stay in 0..=7
//! - while playing, the active piece is on the board and overlaps nothing
//! - score and lines never decrease, score moves only by the line table
//! - level is lines / 10
//! - once over, every mutator is a no-op returning `Blocked` until reset

use proptest::prelude::*;
use tetris_classic::core::Game;
use tetris_classic::types::{MoveResult, LINE_SCORES};

#[derive(Debug, Clone, Copy)]
enum Call {
    Tick,
    Left,
    Right,
    Down,
    Rotate,
    HardDrop,
}

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![
        3 => Just(Call::Tick),
        2 => Just(Call::Left),
        2 => Just(Call::Right),
        1 => Just(Call::Down),
        2 => Just(Call::Rotate),
        1 => Just(Call::HardDrop),
    ]
}

fn apply(game: &mut Game, call: Call) -> MoveResult {
    match call {
        Call::Tick => game.tick(),
        Call::Left => game.move_by(-1, 0),
        Call::Right => game.move_by(1, 0),
        Call::Down => game.move_by(0, 1),
        Call::Rotate => game.rotate_cw(),
        Call::HardDrop => game.hard_drop(),
    }
}

fn check_state(game: &Game) -> Result<(), TestCaseError> {
    let snap = game.snapshot();
    prop_assert!(snap.board.iter().flatten().all(|&v| v <= 7));
    prop_assert_eq!(game.level(), game.lines() / 10);

    if !game.game_over() {
        for (x, y) in game.active_cells() {
            prop_assert!(
                game.board().is_free(x, y),
                "active cell ({}, {}) off board or overlapping",
                x,
                y
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u32>(),
        calls in prop::collection::vec(call_strategy(), 1..600),
    ) {
        let mut game = Game::new(seed);
        check_state(&game)?;

        for call in calls {
            let before = game.clone();
            let result = apply(&mut game, call);

            if before.game_over() {
                prop_assert_eq!(result, MoveResult::Blocked);
                prop_assert_eq!(&game, &before);
                continue;
            }

            check_state(&game)?;
            prop_assert!(game.score() >= before.score());
            prop_assert!(game.lines() >= before.lines());

            let cleared = (game.lines() - before.lines()) as usize;
            prop_assert!(cleared <= 4);
            prop_assert_eq!(game.score() - before.score(), LINE_SCORES[cleared]);

            if result.is_blocked() {
                prop_assert_eq!(&game, &before);
            }
        }
    }

    #[test]
    fn same_seed_same_outcome(
        seed in any::<u32>(),
        calls in prop::collection::vec(call_strategy(), 1..300),
    ) {
        let mut a = Game::new(seed);
        let mut b = Game::new(seed);
        for &call in &calls {
            prop_assert_eq!(apply(&mut a, call), apply(&mut b, call));
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn reset_restores_fresh_game(
        seed in any::<u32>(),
        calls in prop::collection::vec(call_strategy(), 0..200),
    ) {
        let mut game = Game::new(seed);
        for call in calls {
            apply(&mut game, call);
        }
        game.reset(seed);
        prop_assert_eq!(game, Game::new(seed));
    }
}
