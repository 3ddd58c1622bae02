// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::MotionStream;

/// Extension trait providing the [`dedupe`](DedupeExt::dedupe) operator.
pub trait DedupeExt<T> {
    /// Suppresses values equal to the one forwarded immediately before.
    ///
    /// # Behavior
    ///
    /// - The first value of every activation is always forwarded
    /// - A value is forwarded only if it differs from the last forwarded value
    /// - Non-consecutive repeats are forwarded (`1, 1, 2, 1` becomes `1, 2, 1`)
    ///
    /// ```
    /// use motion_core::MotionStream;
    /// use motion_stream::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// let _subscription = MotionStream::of(vec![1, 1, 2, 2, 2, 3, 2])
    ///     .dedupe()
    ///     .subscribe(move |x| sink.lock().unwrap().push(x));
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 2]);
    /// ```
    fn dedupe(&self) -> MotionStream<T>;
}

impl<T: Clone + PartialEq + Send + 'static> DedupeExt<T> for MotionStream<T> {
    fn dedupe(&self) -> MotionStream<T> {
        self.stateful_operator(
            || None,
            |previous: &mut Option<T>, value| {
                if previous.as_ref() == Some(&value) {
                    return None;
                }
                *previous = Some(value.clone());
                Some(value)
            },
        )
    }
}
