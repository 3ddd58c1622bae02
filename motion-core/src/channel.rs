// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;
use std::sync::Arc;

/// A single-listener delivery callback: the unit of dispatch.
///
/// Cloning a `Channel` is cheap and every clone points at the same listener.
pub struct Channel<T> {
    listener: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Channel<T> {
    /// Wraps a listener function.
    pub fn new<F>(listener: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            listener: Arc::new(listener),
        }
    }

    /// Pushes one value to the listener.
    pub fn dispatch(&self, value: T) {
        (self.listener)(value);
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listener: Arc::clone(&self.listener),
        }
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel").finish_non_exhaustive()
    }
}
