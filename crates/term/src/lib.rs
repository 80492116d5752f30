//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! [`core::GameSnapshot`] into a simple framebuffer that can be flushed to a
//! terminal backend, without any widget or layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Pick the board scale from the terminal size
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView};
pub use layout::{Layout, Viewport};
pub use renderer::TerminalRenderer;
