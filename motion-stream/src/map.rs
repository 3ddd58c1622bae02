// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::{Channel, MotionStream};

/// Extension trait providing the [`map`](MapExt::map) operator.
pub trait MapExt<T> {
    /// Transforms every value with `transform`.
    fn map<U, F>(&self, transform: F) -> MotionStream<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static;
}

impl<T: Send + 'static> MapExt<T> for MotionStream<T> {
    fn map<U, F>(&self, transform: F) -> MotionStream<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.next_operator(move |value, dispatch: &Channel<U>| dispatch.dispatch(transform(value)))
    }
}
