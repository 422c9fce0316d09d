//! Terminal rendering for the falling-block game.
//!
//! A small framebuffer pipeline instead of a widget toolkit:
//!
//! - [`GameView`] draws a [`core::GameSnapshot`] plus [`PanelInfo`] into a
//!   [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] diffs consecutive framebuffers and writes the changes
//!   through crossterm
//!
//! Board cells are two columns wide by default to offset the tall aspect
//! ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_classic_core as core;
pub use tetris_classic_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, PanelInfo, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
