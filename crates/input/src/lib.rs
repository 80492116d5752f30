//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events and mouse drags into [`crate::types::GameAction`].
//! It holds no game state; filtering actions against the current game (no active
//! piece, game over) is the engine's job.

pub mod map;
pub mod swipe;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeTracker;
