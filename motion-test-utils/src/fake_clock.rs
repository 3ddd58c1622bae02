// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::{Clock, SharedClock};
use parking_lot::Mutex;
use std::sync::Arc;

/// A deterministic clock. Clones share the same reading.
#[derive(Debug, Clone)]
pub struct FakeClock {
    now: Arc<Mutex<f64>>,
}

impl FakeClock {
    /// Starts the clock at `start` milliseconds.
    pub fn new(start: f64) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward by `millis`.
    pub fn advance(&self, millis: f64) {
        *self.now.lock() += millis;
    }

    /// Jumps to an absolute reading.
    pub fn set(&self, millis: f64) {
        *self.now.lock() = millis;
    }

    /// A shared handle reading this clock.
    pub fn shared(&self) -> SharedClock {
        Arc::new(self.clone())
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Clock for FakeClock {
    fn now(&self) -> f64 {
        *self.now.lock()
    }
}
