//! Gravity ticker - a virtual clock for the fall timer.
//!
//! The host reports elapsed time; the ticker says how many gravity steps are due.
//! Nothing here reads the wall clock, so tests can drive it with exact values.

/// Accumulates elapsed milliseconds and converts them into whole intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTicker {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl GravityTicker {
    /// Create a ticker firing every `interval_ms` (clamped to at least 1ms).
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next step.
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Add `elapsed_ms` and return the number of intervals that completed.
    ///
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms = total % self.interval_ms;
        total / self.interval_ms
    }

    /// Restart the current interval from zero.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}
