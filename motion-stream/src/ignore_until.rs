// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Gate that drops values until a target value is seen.
//!
//! Once a value equal to the target arrives the gate opens for the rest of the
//! activation and that value is forwarded too. Useful for waiting on a gesture
//! phase, for example ignoring pointer moves until the first "down".

use motion_core::MotionStream;

/// Extension trait providing the [`ignore_until`](IgnoreUntilExt::ignore_until) operator.
pub trait IgnoreUntilExt<T> {
    /// Drops values until one equals `target`, then forwards that value and every later one.
    ///
    /// ```
    /// use motion_core::MotionStream;
    /// use motion_stream::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// let _subscription = MotionStream::of(vec![1, 2, 3])
    ///     .ignore_until(2)
    ///     .subscribe(move |x| sink.lock().unwrap().push(x));
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
    /// ```
    fn ignore_until(&self, target: T) -> MotionStream<T>;
}

impl<T: PartialEq + Send + Sync + 'static> IgnoreUntilExt<T> for MotionStream<T> {
    fn ignore_until(&self, target: T) -> MotionStream<T> {
        self.stateful_operator(
            || false,
            move |open: &mut bool, value| {
                if !*open && value == target {
                    *open = true;
                }
                open.then_some(value)
            },
        )
    }
}
