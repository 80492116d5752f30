//! Board engine - the complete state of one game
//!
//! Ties together the board, piece shapes, the 7-bag generator and the gravity
//! ticker. Every mutation runs to completion on `&mut self`; hosts own the engine
//! and call into it from their input and timer events.
//!
//! Rejected moves and rotations are silent no-ops that return `false`. Game over is
//! a normal state, not an error: gravity and manual moves are ignored until
//! [`BoardEngine::reset`].

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::{cell_at, Board};
use crate::pieces::{get_shape, spawn_position, Shape, MAX_SHAPE_SIZE};
use crate::rng::PieceBag;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::ticker::GravityTicker;
use crate::types::{
    GameAction, GamePhase, LockEvent, PieceKind, GRAVITY_INTERVAL_MS, POINTS_PER_LINE,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation at its spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Absolute (x, y) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .filter_map(move |(dx, dy)| cell_at(self.x, self.y, dx, dy))
    }

    /// Check if the piece fits the board where it stands
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(self.shape.offsets(), self.x, self.y)
    }
}

/// What a single gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked and the next one spawned.
    Locked { lines_cleared: u32 },
    /// The lock overflowed the playfield or the next spawn collided.
    ToppedOut,
    /// Nothing to do: no active piece or the game is over.
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct BoardEngine {
    board: Board,
    active: Option<Piece>,
    bag: PieceBag,
    ticker: GravityTicker,
    phase: GamePhase,
    score: u32,
    best_score: u32,
    lines: u32,
    /// Last lock event (consumed by the host).
    last_event: Option<LockEvent>,
}

impl BoardEngine {
    /// Create a new game with the given bag seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_gravity(seed, GRAVITY_INTERVAL_MS)
    }

    /// Create a new game whose gravity fires every `interval_ms`
    pub fn with_gravity(seed: u32, interval_ms: u32) -> Self {
        let mut engine = Self {
            board: Board::new(),
            active: None,
            bag: PieceBag::new(seed),
            ticker: GravityTicker::new(interval_ms),
            phase: GamePhase::Playing,
            score: 0,
            best_score: 0,
            lines: 0,
            last_event: None,
        };
        engine.spawn();
        engine
    }

    /// Seed the best score loaded from persistent storage
    pub fn with_best_score(mut self, best_score: u32) -> Self {
        self.best_score = self.best_score.max(best_score);
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups (puzzles, tests).
    ///
    /// Writing cells under the active piece breaks the collision invariant; callers
    /// are expected to arrange the board before the piece reaches it.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn ticker(&self) -> &GravityTicker {
        &self.ticker
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.score = self.score;
        out.best_score = self.best_score;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn the next piece from the bag
    ///
    /// Returns false (and ends the game) if the spawn position collides with
    /// locked cells. The board is never touched by a failed spawn.
    pub fn spawn(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let kind = self.bag.draw();
        self.spawn_piece(kind)
    }

    /// Spawn a specific piece kind, bypassing the bag
    pub fn spawn_piece(&mut self, kind: PieceKind) -> bool {
        if self.is_game_over() {
            return false;
        }

        let piece = Piece::new(kind);
        if !piece.fits(&self.board) {
            self.active = None;
            self.end_game("spawn blocked");
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the active piece by (dx, dy)
    ///
    /// Accepted only if every cell stays inside the side walls, above the floor and
    /// off occupied cells. Nothing is checked above the board, but a move whose
    /// coordinates would overflow `i8` is refused.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let Some((x, y)) = cell_at(active.x, active.y, dx, dy) else {
            return false;
        };
        if !self.board.fits(active.shape.offsets(), x, y) {
            return false;
        }

        self.active = Some(Piece { x, y, ..active });
        true
    }

    /// Try to rotate the active piece 90° clockwise in place (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let shape = active.shape.rotate_cw();
        if !self.board.fits(shape.offsets(), active.x, active.y) {
            return false;
        }

        self.active = Some(Piece { shape, ..active });
        true
    }

    /// Advance gravity by one row, locking the piece if it cannot fall
    pub fn step(&mut self) -> StepOutcome {
        if self.is_game_over() || self.active.is_none() {
            return StepOutcome::Ignored;
        }

        if self.try_move(0, 1) {
            return StepOutcome::Fell;
        }

        let event = self.lock_active();
        if event.topped_out {
            StepOutcome::ToppedOut
        } else {
            StepOutcome::Locked {
                lines_cleared: event.lines_cleared,
            }
        }
    }

    /// Lock the active piece, clear lines and spawn the next piece.
    fn lock_active(&mut self) -> LockEvent {
        let mut event = LockEvent::default();
        let Some(piece) = self.active.take() else {
            return event;
        };

        let offsets: ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> =
            piece.shape.offsets().collect();

        // A cell still above the visible playfield means the stack has reached the top.
        if !self.board.lock_piece(&offsets, piece.x, piece.y, piece.kind) {
            self.end_game("lock above playfield");
            event.topped_out = true;
            self.last_event = Some(event);
            return event;
        }

        let best_before = self.best_score;
        let score_before = self.score;
        event.lines_cleared = self.clear_lines();
        event.score_gained = self.score - score_before;
        event.new_best = self.best_score > best_before;

        self.ticker.reset();
        if !self.spawn() {
            event.topped_out = true;
        }

        self.last_event = Some(event);
        event
    }

    /// Remove every full row and score it
    ///
    /// Rows above a cleared row drop down, keeping their order, and empty rows are
    /// added at the top. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared == 0 {
            return 0;
        }

        self.lines += cleared;
        self.score += cleared * POINTS_PER_LINE;
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        debug!(
            "cleared {} line(s): score={} lines={}",
            cleared, self.score, self.lines
        );
        cleared
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start a fresh game: empty board, zero score, new bag, new piece.
    ///
    /// The best score is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.bag.discard();
        self.ticker.reset();
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lines = 0;
        self.last_event = None;
        info!("new game (best score {})", self.best_score);
        self.spawn();
    }

    /// Feed elapsed time into the gravity ticker and run every step that came due.
    ///
    /// Returns the number of steps run. Time does not accumulate while the game is over.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if self.is_game_over() {
            return 0;
        }

        let due = self.ticker.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            if self.step() == StepOutcome::Ignored {
                break;
            }
            ran += 1;
            if self.is_game_over() {
                break;
            }
        }
        ran
    }

    /// Apply an input action
    ///
    /// Everything but `Restart` is ignored when there is no active piece or the
    /// game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.reset();
                true
            }
            _ if self.is_game_over() || self.active.is_none() => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::MoveDown => self.step() != StepOutcome::Ignored,
            GameAction::Rotate => self.try_rotate(),
        }
    }

    fn end_game(&mut self, reason: &str) {
        self.phase = GamePhase::GameOver;
        info!(
            "game over ({}): score={} best={} lines={}",
            reason, self.score, self.best_score, self.lines
        );
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
