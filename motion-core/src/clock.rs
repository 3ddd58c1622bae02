// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Injectable time source for timestamping.
//!
//! Reading the clock is the only impure step in the engine. Operators that need
//! the time take a [`SharedClock`] so tests can substitute a controllable one.

use std::fmt::Debug;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// A monotonic time source measured in milliseconds.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current reading. Successive calls never decrease.
    fn now(&self) -> f64;
}

/// Shared handle to a clock, as accepted by the timing operators.
pub type SharedClock = Arc<dyn Clock>;

/// Monotonic wall clock backed by [`Instant`].
///
/// All instances share one process-wide anchor, so readings from different
/// `SystemClock` values are comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    fn anchor() -> Instant {
        static ANCHOR: OnceLock<Instant> = OnceLock::new();
        *ANCHOR.get_or_init(Instant::now)
    }

    /// A [`SharedClock`] reading the system clock.
    #[must_use]
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Self::anchor().elapsed().as_secs_f64() * 1000.0
    }
}
