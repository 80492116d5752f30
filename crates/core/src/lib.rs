//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **no dependencies** on
//! terminals, input devices or storage, making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: gravity runs off a virtual clock, never the wall clock
//! - **Portable**: any host that can call [`BoardEngine::tick`] can run a game
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid (plus 2 hidden rows) with collision checks and line clearing
//! - [`engine`]: the board engine: active piece, score, game lifecycle
//! - [`pieces`]: shape matrices and the clockwise rotation transform
//! - [`rng`]: 7-bag random piece generation
//! - [`snapshot`]: plain-data view of a frame for renderers
//! - [`ticker`]: gravity timer driven by elapsed milliseconds
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every kind appears once per seven pieces
//! - **Rotation**: clockwise matrix rotation, no wall kicks; blocked rotations are dropped
//! - **Locking**: a piece locks the moment gravity cannot move it down
//! - **Scoring**: flat 100 points per cleared line, best score tracked alongside
//! - **Game Over**: a lock that leaves cells above the playfield, or a blocked spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::BoardEngine;
//! use blockfall_types::{GameAction, GRAVITY_INTERVAL_MS};
//!
//! let mut game = BoardEngine::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // One gravity step per interval.
//! assert_eq!(game.tick(GRAVITY_INTERVAL_MS), 1);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod ticker;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{BoardEngine, Piece, StepOutcome};
pub use pieces::{get_shape, spawn_position, Shape};
pub use rng::{PieceBag, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use ticker::GravityTicker;
