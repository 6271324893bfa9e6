//! Injected clock abstraction
//!
//! Wall-clock time feeds identifier salting, event-key suffixes, and
//! validity windows, so no component in the core reads the system clock
//! directly. The registry and recorder take a [`Clock`] at construction;
//! production code passes [`SystemClock`], tests pass a [`FixedClock`]
//! and drive it explicitly to reproduce same-second collisions and
//! validity-window edges.

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Source of the current time for ledger operations
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Controllable clock for deterministic tests and simulation
///
/// Frozen at a fixed instant until advanced or reset; every `now()` call
/// between adjustments returns the identical timestamp.
#[derive(Debug)]
pub struct FixedClock {
    current: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at the given instant
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    /// Advance the frozen time by a duration
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }

    /// Move the frozen time to a specific instant
    pub fn set(&self, at: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = at;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
