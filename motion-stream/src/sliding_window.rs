// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding-window operator that turns a stream of values into a stream of recent history.
//!
//! On every upstream value the window appends it, evicts the oldest entries
//! until at most `capacity` remain, and dispatches a snapshot. The newest value
//! is always last. Until `capacity` values have arrived the snapshot is simply
//! shorter, so consumers must not assume a fixed length.
//!
//! # Basic Usage
//!
//! ```
//! use motion_core::MotionSubject;
//! use motion_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! # fn main() -> motion_core::Result<()> {
//! let subject = MotionSubject::<i32>::new();
//! let windows = subject.stream().sliding_window(2)?;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _subscription = windows.subscribe(move |w| sink.lock().unwrap().push(w));
//!
//! subject.next(1);
//! subject.next(2);
//! subject.next(3);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![vec![1], vec![1, 2], vec![2, 3]]);
//! # Ok(())
//! # }
//! ```

use motion_core::{MotionError, MotionStream, Result};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Ordered recent history, oldest first and newest last.
pub type Window<T> = Vec<T>;

/// Extension trait providing the [`sliding_window`](SlidingWindowExt::sliding_window) operator.
pub trait SlidingWindowExt<T> {
    /// Dispatches the last `capacity` values on every upstream value.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidConfiguration`] if `capacity` is 0.
    fn sliding_window(&self, capacity: usize) -> Result<MotionStream<Window<T>>>;

    /// Infallible form of [`sliding_window`](Self::sliding_window).
    fn sliding_window_nonzero(&self, capacity: NonZeroUsize) -> MotionStream<Window<T>>;
}

impl<T: Clone + Send + 'static> SlidingWindowExt<T> for MotionStream<T> {
    fn sliding_window(&self, capacity: usize) -> Result<MotionStream<Window<T>>> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            motion_core::warn!("sliding_window: rejected capacity 0");
            MotionError::invalid_configuration("sliding_window capacity must be at least 1")
        })?;

        Ok(self.sliding_window_nonzero(capacity))
    }

    fn sliding_window_nonzero(&self, capacity: NonZeroUsize) -> MotionStream<Window<T>> {
        let capacity = capacity.get();

        self.stateful_operator(
            move || VecDeque::with_capacity(capacity),
            move |buffer: &mut VecDeque<T>, value| {
                buffer.push_back(value);
                while buffer.len() > capacity {
                    buffer.pop_front();
                }
                Some(buffer.iter().cloned().collect())
            },
        )
    }
}
