//! Retrigger gate
//!
//! A single board-wide suppression window. Closing the gate hands out a new
//! generation number; the timer armed for that window reports back with the
//! same number, and only the newest generation may reopen the gate. A timer
//! from an older window firing late is a no-op.
//!
//! The window is global: while it is closed every key-down is ignored, not
//! just the key that fired, so at most one player is spawned per window.

/// Board-wide retrigger suppression
#[derive(Debug, Clone, Default)]
pub struct RetriggerGate {
    generation: u64,
    closed: bool,
}

impl RetriggerGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// Current (most recently armed) generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Close the gate and return the generation the reopening timer must carry
    pub fn close(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.closed = true;
        self.generation
    }

    /// Reopen immediately, ahead of the armed timer
    ///
    /// The pending timer's generation goes stale, so it cannot close or
    /// reopen anything when it fires later.
    pub fn open(&mut self) {
        if self.closed {
            self.generation = self.generation.wrapping_add(1);
            self.closed = false;
        }
    }

    /// Timer callback. Returns `true` if this call reopened the gate.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::trace!(
                "Ignoring stale retrigger timer (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }
        let was_closed = self.closed;
        self.closed = false;
        was_closed
    }
}
