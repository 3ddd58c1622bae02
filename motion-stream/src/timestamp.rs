// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timestamping operator.
//!
//! Pairs every value with the clock reading at the moment it is dispatched.
//! [`Timestampable`] is the capability the velocity operator asks of its pulse:
//! anything that can produce a timestamped stream, whether a [`MotionStream`] or
//! a [`MotionSubject`].
//!
//! ```
//! use motion_core::{Clock, MotionSubject, SystemClock};
//! use motion_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let subject = MotionSubject::<&'static str>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _subscription = subject
//!     .stream()
//!     .timestamp()
//!     .subscribe(move |item| sink.lock().unwrap().push(item));
//!
//! let before = SystemClock.now();
//! subject.next("tap");
//!
//! let item = seen.lock().unwrap()[0];
//! assert_eq!(item.value, "tap");
//! assert!(item.timestamp >= before);
//! ```

use motion_core::{Channel, MotionStream, MotionSubject, SharedClock, SystemClock, Timestamped};

/// Sources that can produce a stream of timestamped values.
pub trait Timestampable {
    type Item: Send + 'static;

    /// Timestamps every value with `clock`.
    fn timestamp_with(&self, clock: SharedClock) -> MotionStream<Timestamped<Self::Item>>;
}

impl<T: Send + 'static> Timestampable for MotionStream<T> {
    type Item = T;

    fn timestamp_with(&self, clock: SharedClock) -> MotionStream<Timestamped<T>> {
        self.next_operator(move |value, dispatch: &Channel<Timestamped<T>>| {
            dispatch.dispatch(Timestamped::new(value, clock.now()));
        })
    }
}

impl<T: Clone + Send + 'static> Timestampable for MotionSubject<T> {
    type Item = T;

    fn timestamp_with(&self, clock: SharedClock) -> MotionStream<Timestamped<T>> {
        self.stream().timestamp_with(clock)
    }
}

/// Extension trait providing [`timestamp`](TimestampExt::timestamp) with the system clock.
pub trait TimestampExt<T>: Timestampable<Item = T> {
    /// Timestamps every value with [`SystemClock`].
    fn timestamp(&self) -> MotionStream<Timestamped<T>> {
        self.timestamp_with(SystemClock::shared())
    }
}

impl<T: Send + 'static> TimestampExt<T> for MotionStream<T> {}
