// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::{Channel, MotionStream};

/// Extension trait providing the [`filter`](FilterExt::filter) operator.
pub trait FilterExt<T> {
    /// Forwards only the values for which `predicate` returns `true`.
    fn filter<F>(&self, predicate: F) -> MotionStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T: Send + 'static> FilterExt<T> for MotionStream<T> {
    fn filter<F>(&self, predicate: F) -> MotionStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.next_operator(move |value, dispatch: &Channel<T>| {
            if predicate(&value) {
                dispatch.dispatch(value);
            }
        })
    }
}
