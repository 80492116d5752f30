//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, J, L, O, S, T, Z), shuffled with
//! Fisher-Yates. Pieces are drawn from the bag until it is empty, then a new bag
//! is shuffled, so any kind reappears within at most 12 draws.
//!
//! The RNG is a small LCG so that a seed fully determines the piece sequence.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current shuffled bag
    bag: [PieceKind; 7],
    /// Index of the next piece to hand out
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a new bag with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece, shuffling a fresh bag when the current one is exhausted
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Throw away the rest of the current bag and shuffle a new one.
    ///
    /// The RNG keeps running, so a restarted game gets a different sequence.
    pub fn discard(&mut self) {
        self.refill();
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
