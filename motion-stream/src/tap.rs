// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::{Channel, MotionStream};

/// Extension trait providing the [`tap`](TapExt::tap) operator.
pub trait TapExt<T> {
    /// Invokes `effect` on every value, then forwards the value unchanged.
    ///
    /// Useful for logging or counting upstream work. The effect runs once per
    /// value per activation, so tapping below a [`remember`](crate::RememberExt::remember)
    /// counts shared work, while tapping above it counts per-listener work.
    ///
    /// ```
    /// use motion_core::MotionStream;
    /// use motion_stream::prelude::*;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let _subscription = MotionStream::of(vec![1, 2, 3])
    ///     .tap(move |_| {
    ///         counter.fetch_add(1, Ordering::SeqCst);
    ///     })
    ///     .subscribe(|_| {});
    ///
    /// assert_eq!(calls.load(Ordering::SeqCst), 3);
    /// ```
    fn tap<F>(&self, effect: F) -> MotionStream<T>
    where
        F: Fn(&T) + Send + Sync + 'static;
}

impl<T: Send + 'static> TapExt<T> for MotionStream<T> {
    fn tap<F>(&self, effect: F) -> MotionStream<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.next_operator(move |value, dispatch: &Channel<T>| {
            effect(&value);
            dispatch.dispatch(value);
        })
    }
}
