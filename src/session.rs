//! Interactive play session.
//!
//! Wraps a [`Game`] with the state that belongs to the shell rather than the
//! engine: the pause flag, the gravity timer and the leaderboard hookup.
//! Nothing here touches the terminal. Log lines produced while playing are
//! queued and handed out by [`Session::take_messages`] so the caller can print
//! them once the screen is restored.

use crate::config::GameConfig;
use crate::core::{Game, GameSnapshot};
use crate::input::InputCommand;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::term::PanelInfo;
use crate::types::{GameAction, MoveResult};

/// High scores kept for the side panel.
const PANEL_HIGH_SCORES: usize = 5;

pub struct Session {
    game: Game,
    paused: bool,
    /// Milliseconds of gravity time not yet spent on a tick.
    gravity_ms: u32,
    player: String,
    fixed_seed: Option<u32>,
    leaderboard: Option<Leaderboard>,
    high_scores: Vec<LeaderboardEntry>,
    /// The current game's result has gone to the leaderboard.
    submitted: bool,
    tetrises: u32,
    messages: Vec<String>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_parts(
            Game::new(config.next_seed()),
            &config.player,
            config.seed,
            config.leaderboard(),
        )
    }

    /// `fixed_seed` is used by every restart; `None` takes a clock seed.
    pub fn with_parts(
        game: Game,
        player: &str,
        fixed_seed: Option<u32>,
        leaderboard: Option<Leaderboard>,
    ) -> Self {
        let mut session = Self {
            game,
            paused: false,
            gravity_ms: 0,
            player: player.to_string(),
            fixed_seed,
            leaderboard,
            high_scores: Vec::new(),
            submitted: false,
            tetrises: 0,
            messages: Vec::new(),
        };
        session.refresh_high_scores();
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn high_scores(&self) -> &[LeaderboardEntry] {
        &self.high_scores
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn panel(&self) -> PanelInfo<'_> {
        PanelInfo {
            paused: self.paused,
            player: &self.player,
            high_scores: &self.high_scores,
        }
    }

    /// Handle one input command.
    pub fn apply(&mut self, command: InputCommand) -> MoveResult {
        match command {
            InputCommand::Play(action) => self.play(action),
            InputCommand::Pause => {
                if self.game.game_over() {
                    return MoveResult::Blocked;
                }
                self.paused = !self.paused;
                MoveResult::Ok
            }
            InputCommand::Restart => {
                let seed = self
                    .fixed_seed
                    .unwrap_or_else(crate::config::clock_seed);
                self.restart(seed);
                MoveResult::Ok
            }
        }
    }

    /// Forward a player action unless paused.
    pub fn play(&mut self, action: GameAction) -> MoveResult {
        if self.paused {
            return MoveResult::Blocked;
        }
        let result = self.game.apply_action(action);
        if action == GameAction::HardDrop && result.is_ok() {
            // A new piece starts with a full gravity interval.
            self.gravity_ms = 0;
        }
        self.after_move();
        result
    }

    /// Let `elapsed_ms` of wall time pass, ticking once per drop interval.
    ///
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.paused || self.game.game_over() {
            return 0;
        }

        self.gravity_ms = self.gravity_ms.saturating_add(elapsed_ms);
        let mut ticks = 0;
        loop {
            // The interval can shrink mid-loop when a clear levels up.
            let interval = self.game.drop_interval_ms();
            if self.gravity_ms < interval {
                break;
            }
            self.gravity_ms -= interval;
            self.game.tick();
            ticks += 1;
            self.after_move();
            if self.game.game_over() {
                self.gravity_ms = 0;
                break;
            }
        }
        ticks
    }

    /// New game with `seed`; pause and timers are cleared.
    pub fn restart(&mut self, seed: u32) {
        self.game.reset(seed);
        self.paused = false;
        self.gravity_ms = 0;
        self.submitted = false;
        self.tetrises = 0;
        self.refresh_high_scores();
    }

    /// Drain queued log lines.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    fn after_move(&mut self) {
        if let Some(event) = self.game.take_last_event() {
            if event.lines_cleared == 4 {
                self.tetrises += 1;
            }
        }
        if self.game.game_over() && !self.submitted {
            self.submitted = true;
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let (score, lines, level) = (self.game.score(), self.game.lines(), self.game.level());
        self.messages.push(format!(
            "[Session] Game over (seed {}): score {}, lines {}, level {}, tetrises {}",
            self.game.seed(),
            score,
            lines,
            level,
            self.tetrises
        ));

        let Some(board) = &self.leaderboard else {
            return;
        };
        let entry = LeaderboardEntry::new(&self.player, score, lines, level);
        match board.try_submit(entry) {
            Ok(()) => self.messages.push(format!(
                "[Leaderboard] Saved {} points for {} to {}",
                score,
                self.player,
                board.path().display()
            )),
            Err(e) => self
                .messages
                .push(format!("[Leaderboard] Submit error: {:#}", e)),
        }
        self.refresh_high_scores();
    }

    fn refresh_high_scores(&mut self) {
        let Some(board) = &self.leaderboard else {
            return;
        };
        match board.try_load_all() {
            Ok(mut all) => {
                all.truncate(PANEL_HIGH_SCORES);
                self.high_scores = all;
            }
            Err(e) => self
                .messages
                .push(format!("[Leaderboard] Load error: {:#}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_HEIGHT;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn offline(seed: u32) -> Session {
        Session::with_parts(Game::new(seed), "tester", Some(seed), None)
    }

    fn temp_csv(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "tetris_session_{}_{}_{}.csv",
            tag,
            std::process::id(),
            nanos
        ))
    }

    fn play_until_over(session: &mut Session) {
        for _ in 0..1000 {
            if session.game().game_over() {
                return;
            }
            session.play(GameAction::HardDrop);
        }
        panic!("stacking hard drops never topped out");
    }

    #[test]
    fn advance_ticks_once_per_interval() {
        let mut session = offline(1);
        let y0 = session.game().active().y;

        assert_eq!(session.advance(499), 0);
        assert_eq!(session.advance(1), 1);
        assert_eq!(session.game().active().y, y0 + 1);

        assert_eq!(session.advance(1000), 2);
        assert_eq!(session.game().active().y, y0 + 3);
    }

    #[test]
    fn gravity_alone_locks_the_first_piece() {
        let mut session = offline(1);
        session.advance(500 * BOARD_HEIGHT as u32);
        assert_eq!(session.game().pieces_spawned(), 2);
        assert!(!session.game().game_over());
    }

    #[test]
    fn pause_freezes_gravity_and_input() {
        let mut session = offline(1);
        let before = session.snapshot();

        assert_eq!(session.apply(InputCommand::Pause), MoveResult::Ok);
        assert!(session.is_paused());
        assert!(session.panel().paused);
        assert_eq!(session.advance(10_000), 0);
        assert_eq!(
            session.apply(InputCommand::Play(GameAction::MoveLeft)),
            MoveResult::Blocked
        );
        assert_eq!(session.snapshot(), before);

        session.apply(InputCommand::Pause);
        assert!(!session.is_paused());
        assert_eq!(
            session.apply(InputCommand::Play(GameAction::MoveLeft)),
            MoveResult::Ok
        );
    }

    #[test]
    fn restart_uses_fixed_seed() {
        let mut session = offline(7);
        session.play(GameAction::HardDrop);
        session.apply(InputCommand::Pause);

        session.apply(InputCommand::Restart);
        assert!(!session.is_paused());
        assert_eq!(session.game(), &Game::new(7));
    }

    #[test]
    fn game_over_is_reported_once() {
        let mut session = offline(3);
        play_until_over(&mut session);

        assert_eq!(session.apply(InputCommand::Pause), MoveResult::Blocked);
        assert_eq!(session.advance(5000), 0);
        session.play(GameAction::HardDrop);

        let messages = session.take_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("[Session] Game over"));
        assert!(session.take_messages().is_empty());
    }

    #[test]
    fn game_over_submits_to_leaderboard() {
        let path = temp_csv("submit");
        let board = Leaderboard::new(&path, 10);
        let mut session = Session::with_parts(Game::new(3), "ada", Some(3), Some(board.clone()));
        assert!(session.high_scores().is_empty());

        play_until_over(&mut session);
        let score = session.game().score();

        let top = board.load_top(10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "ada");
        assert_eq!(top[0].score, score);
        assert_eq!(session.high_scores(), &top[..]);

        // A second game adds a second record, the same game never does.
        session.play(GameAction::HardDrop);
        assert_eq!(board.load_top(10).len(), 1);
        session.apply(InputCommand::Restart);
        play_until_over(&mut session);
        assert_eq!(board.load_top(10).len(), 2);

        let _ = std::fs::remove_file(&path);
    }
}
