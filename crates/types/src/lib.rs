//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 visible rows (indexed 0-19, top to bottom)
//! - **Hidden rows**: 2 rows above the playfield (indexed -2 and -1) where
//!   new pieces spawn before they drop into view
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `GRAVITY_INTERVAL_MS` | 500 | Time between gravity steps |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_code(piece.code()), Some(PieceKind::T));
//! assert_eq!(PieceKind::from_code(0), None);
//!
//! assert_ne!(GameAction::Rotate, GameAction::Restart);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Rows stored above the visible playfield for spawning pieces.
pub const HIDDEN_ROWS: u8 = 2;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval: one automatic step every 500ms.
pub const GRAVITY_INTERVAL_MS: u32 = 500;

/// Flat score per cleared row. No multi-line bonus.
pub const POINTS_PER_LINE: u32 = 100;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
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
    /// Every kind, in bag order before shuffling.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Non-zero grid code for this kind (`0` is reserved for empty cells).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]. Returns `None` for `0` and unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Game actions produced by input sources (keyboard, swipes).
///
/// Each action maps onto exactly one engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance one gravity step (locks the piece if it cannot fall)
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a fresh game
    Restart,
}

/// Lifecycle of a single game.
///
/// `Playing → GameOver` when a lock overflows the playfield or a spawn collides,
/// `GameOver → Playing` on reset. There are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Core-side event emitted after a piece locks (or fails to).
///
/// Hosts consume this to persist the best score without polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// The lock pushed the score above the previous best.
    pub new_best: bool,
    /// The lock (or the following spawn) ended the game.
    pub topped_out: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
