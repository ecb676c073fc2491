//! Press-duration tracking
//!
//! Remembers the most recent key-down so the matching key-up can tell a tap
//! from a long hold. Only one press is tracked at a time; every key-down
//! overwrites it, even while the board is suppressed or rebinding.
//!
//! Durations are the absolute difference between two wall-clock readings, so
//! a clock stepped backwards mid-press still yields a positive hold time.
//! Wall time is not monotonic; a large clock adjustment during a hold can
//! misreport its length.

use std::time::{Duration, SystemTime};

use crate::messages::NoteKey;

/// Hold time on key-up that requests a rebind
pub const REBIND_HOLD: Duration = Duration::from_secs(5);

/// A key-down awaiting its key-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: NoteKey,
    pub pressed_at: SystemTime,
}

/// How a key-up relates to the tracked press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Nothing was being tracked
    Spurious,
    /// Key-up for a key other than the last one pressed
    OtherKey,
    /// Released before the rebind threshold
    Tap { held: Duration },
    /// Held at least [`REBIND_HOLD`]
    Hold { held: Duration },
}

#[derive(Debug, Clone, Default)]
pub struct PressTracker {
    last: Option<KeyPress>,
}

impl PressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down, replacing whatever was tracked
    pub fn record(&mut self, key: NoteKey, pressed_at: SystemTime) {
        self.last = Some(KeyPress { key, pressed_at });
    }

    /// Classify a key-up. A matching key-up ends the tracked press.
    pub fn release(&mut self, key: NoteKey, released_at: SystemTime) -> Release {
        let Some(press) = self.last else {
            return Release::Spurious;
        };

        if press.key != key {
            return Release::OtherKey;
        }

        self.last = None;
        let held = abs_diff(press.pressed_at, released_at);
        if held >= REBIND_HOLD {
            Release::Hold { held }
        } else {
            Release::Tap { held }
        }
    }

    pub fn current(&self) -> Option<&KeyPress> {
        self.last.as_ref()
    }
}

fn abs_diff(a: SystemTime, b: SystemTime) -> Duration {
    match b.duration_since(a) {
        Ok(d) => d,
        Err(e) => e.duration(),
    }
}
