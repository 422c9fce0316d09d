//! Headless replays.
//!
//! A script is a string of one-letter steps:
//!
//! | Letter | Step |
//! |--------|------|
//! | `L` | move left |
//! | `R` | move right |
//! | `D` | soft drop |
//! | `U` | rotate clockwise |
//! | `H` | hard drop |
//! | `.` | gravity tick |
//!
//! Letters are case-insensitive and whitespace is ignored. The same seed and
//! script always produce the same [`ReplaySummary`].

use anyhow::{bail, Result};
use serde::Serialize;

use crate::core::Game;
use crate::types::{GameAction, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Action(GameAction),
    Tick,
}

pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| {
            let step = match c.to_ascii_uppercase() {
                'L' => ScriptStep::Action(GameAction::MoveLeft),
                'R' => ScriptStep::Action(GameAction::MoveRight),
                'D' => ScriptStep::Action(GameAction::SoftDrop),
                'U' => ScriptStep::Action(GameAction::RotateCw),
                'H' => ScriptStep::Action(GameAction::HardDrop),
                '.' => ScriptStep::Tick,
                other => bail!("unknown step {:?} at position {}", other, i),
            };
            Ok(step)
        })
        .collect()
}

/// JSON-friendly end state of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub seed: u32,
    pub steps: usize,
    pub pieces_spawned: u32,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
    /// Top to bottom; `.` for empty, the piece letter for locked cells.
    pub board: Vec<String>,
}

impl ReplaySummary {
    pub fn from_game(game: &Game, steps: usize) -> Self {
        let board: Vec<String> = game
            .board()
            .to_u8_grid()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| {
                        PieceKind::from_cell_value(v)
                            .map_or('.', |k| k.as_str().chars().next().unwrap_or('#'))
                    })
                    .collect::<String>()
            })
            .collect();

        Self {
            seed: game.seed(),
            steps,
            pieces_spawned: game.pieces_spawned(),
            score: game.score(),
            lines: game.lines(),
            level: game.level(),
            game_over: game.game_over(),
            board,
        }
    }
}

/// Run `steps` on a fresh game, with `ticks_per_action` gravity ticks after
/// every player action. Stops early once the game is over.
pub fn run(seed: u32, steps: &[ScriptStep], ticks_per_action: u32) -> ReplaySummary {
    let mut game = Game::new(seed);
    let mut applied = 0;

    for &step in steps {
        if game.game_over() {
            break;
        }
        match step {
            ScriptStep::Action(action) => {
                game.apply_action(action);
                for _ in 0..ticks_per_action {
                    game.tick();
                }
            }
            ScriptStep::Tick => {
                game.tick();
            }
        }
        applied += 1;
    }

    ReplaySummary::from_game(&game, applied)
}
