// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::{Channel, MotionStream};
use parking_lot::Mutex;
use std::sync::Arc;

struct ObserverState<T> {
    next_id: u64,
    channels: Vec<(u64, Channel<T>)>,
    connects: usize,
    disconnects: usize,
}

/// A hand-driven source that records how it is connected.
///
/// Every activation of [`stream`](Self::stream) registers its channel here;
/// [`next`](Self::next) pushes a value into all registered channels.
pub struct MockObserver<T> {
    state: Arc<Mutex<ObserverState<T>>>,
}

impl<T: Clone + Send + 'static> MockObserver<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ObserverState {
                next_id: 0,
                channels: Vec::new(),
                connects: 0,
                disconnects: 0,
            })),
        }
    }

    /// A stream connected to this observer.
    pub fn stream(&self) -> MotionStream<T> {
        let state = Arc::clone(&self.state);

        MotionStream::new(move |channel| {
            let id = {
                let mut guard = state.lock();
                let id = guard.next_id;
                guard.next_id += 1;
                guard.connects += 1;
                guard.channels.push((id, channel));
                id
            };

            let state = Arc::clone(&state);
            Box::new(move || {
                let mut guard = state.lock();
                guard.disconnects += 1;
                guard.channels.retain(|(channel_id, _)| *channel_id != id);
            })
        })
    }

    /// Pushes `value` into every connected channel.
    pub fn next(&self, value: T) {
        let channels: Vec<Channel<T>> = self
            .state
            .lock()
            .channels
            .iter()
            .map(|(_, channel)| channel.clone())
            .collect();

        for channel in channels {
            channel.dispatch(value.clone());
        }
    }

    /// Pushes each value in order.
    pub fn feed(&self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.next(value);
        }
    }

    /// Number of activations ever started.
    pub fn connect_count(&self) -> usize {
        self.state.lock().connects
    }

    /// Number of activations torn down.
    pub fn disconnect_count(&self) -> usize {
        self.state.lock().disconnects
    }

    /// Number of activations currently live.
    pub fn live_connections(&self) -> usize {
        self.state.lock().channels.len()
    }
}

impl<T: Clone + Send + 'static> Default for MockObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MockObserver<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
