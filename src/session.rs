//! A game plus the store that remembers its best score.
//!
//! The session forwards input and elapsed time to the engine and writes the best
//! score back after any lock that beats the stored value.

use log::info;

use crate::core::{BoardEngine, GameSnapshot};
use crate::store::{load_or_default, save_or_warn, ScoreStore};
use crate::types::GameAction;

pub struct GameSession {
    engine: BoardEngine,
    store: Box<dyn ScoreStore>,
    /// Best score as last written to the store.
    saved_best: u32,
}

impl GameSession {
    /// Load the best score from `store` and start a game.
    pub fn new(seed: u32, mut store: Box<dyn ScoreStore>) -> Self {
        let saved_best = load_or_default(store.as_mut());
        info!("starting game: seed={} best={}", seed, saved_best);
        Self {
            engine: BoardEngine::new(seed).with_best_score(saved_best),
            store,
            saved_best,
        }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn saved_best(&self) -> u32 {
        self.saved_best
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    /// Apply one input action. Returns whether the engine accepted it.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let accepted = self.engine.apply_action(action);
        self.persist_best();
        accepted
    }

    /// Advance gravity by `elapsed_ms`. Returns the number of steps run.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        let steps = self.engine.tick(elapsed_ms);
        self.persist_best();
        steps
    }

    fn persist_best(&mut self) {
        if self.engine.take_last_event().is_none() {
            return;
        }
        let best = self.engine.best_score();
        if best > self.saved_best && save_or_warn(self.store.as_mut(), best) {
            self.saved_best = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{PieceKind, BOARD_WIDTH, POINTS_PER_LINE};
    use anyhow::{bail, Result};

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn load(&mut self) -> Result<u32> {
            bail!("disk on fire")
        }

        fn save(&mut self, _best_score: u32) -> Result<()> {
            bail!("disk on fire")
        }
    }

    /// Swap in an O at its spawn point over a bottom row missing columns 4 and 5,
    /// then soft-drop until the row clears.
    fn clear_bottom_row(session: &mut GameSession) {
        assert!(session.engine.spawn_piece(PieceKind::O));
        for x in 0..BOARD_WIDTH as i8 {
            if x != 4 && x != 5 {
                session.engine.board_mut().set(x, 19, Some(PieceKind::Z));
            }
        }
        let lines_before = session.engine.lines();
        for _ in 0..30 {
            session.apply(GameAction::MoveDown);
            if session.engine.lines() > lines_before {
                return;
            }
        }
        panic!("bottom row never cleared");
    }

    #[test]
    fn loads_best_score_at_start() {
        let s = GameSession::new(7, Box::new(MemoryStore::new(900)));
        assert_eq!(s.engine().best_score(), 900);
        assert_eq!(s.saved_best(), 900);
    }

    #[test]
    fn beating_best_score_writes_store() {
        let mut s = GameSession::new(7, Box::new(MemoryStore::new(0)));
        clear_bottom_row(&mut s);

        assert_eq!(s.engine().best_score(), POINTS_PER_LINE);
        assert_eq!(s.saved_best(), POINTS_PER_LINE);
        assert_eq!(s.store.load().unwrap(), POINTS_PER_LINE);
    }

    #[test]
    fn score_below_best_leaves_store_alone() {
        let mut s = GameSession::new(7, Box::new(MemoryStore::new(5000)));
        clear_bottom_row(&mut s);

        assert_eq!(s.engine().score(), POINTS_PER_LINE);
        assert_eq!(s.saved_best(), 5000);
        assert_eq!(s.store.load().unwrap(), 5000);
    }

    #[test]
    fn store_failures_do_not_stop_play() {
        let mut s = GameSession::new(7, Box::new(FailingStore));
        assert_eq!(s.engine().best_score(), 0);

        clear_bottom_row(&mut s);
        assert_eq!(s.engine().best_score(), POINTS_PER_LINE);
        assert_eq!(s.saved_best(), 0);
        assert!(s.engine().active().is_some());
    }

    #[test]
    fn restart_keeps_best_score() {
        let mut s = GameSession::new(7, Box::new(MemoryStore::new(0)));
        clear_bottom_row(&mut s);

        assert!(s.apply(GameAction::Restart));
        assert_eq!(s.engine().score(), 0);
        assert_eq!(s.engine().best_score(), POINTS_PER_LINE);
    }
}
