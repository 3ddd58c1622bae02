// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-listener push source for motion streams.
//!
//! A [`MotionSubject`] is the entry point for raw signals: gesture adapters call
//! [`next`](MotionSubject::next) and every listener currently attached through
//! [`stream`](MotionSubject::stream) receives the value synchronously.
//!
//! ## Characteristics
//!
//! - **Hot**: late listeners only see values pushed after they subscribed.
//! - **Ordered**: listeners are called in the order they subscribed.
//! - **Re-entrant**: a listener may subscribe or unsubscribe while a value is
//!   being dispatched; the dispatch works from a snapshot of the listener list.
//!
//! ## Example
//!
//! ```
//! use motion_core::MotionSubject;
//! use std::sync::{Arc, Mutex};
//!
//! let subject = MotionSubject::<f64>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let subscription = subject.stream().subscribe(move |x| sink.lock().unwrap().push(x));
//!
//! subject.next(1.5);
//! subscription.unsubscribe();
//! subject.next(2.5);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1.5]);
//! ```

use crate::lock::Mutex;
use crate::{Channel, MotionStream};
use std::sync::Arc;

struct SubjectState<T> {
    next_id: u64,
    listeners: Vec<(u64, Channel<T>)>,
}

/// A hot source that broadcasts pushed values to all current listeners.
pub struct MotionSubject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> MotionSubject<T> {
    /// Creates a subject with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Pushes `value` to every listener attached at the time of the call.
    pub fn next(&self, value: T) {
        let listeners: Vec<Channel<T>> = self
            .state
            .lock()
            .listeners
            .iter()
            .map(|(_, channel)| channel.clone())
            .collect();

        trace!("subject: dispatching to {} listener(s)", listeners.len());

        for channel in listeners {
            channel.dispatch(value.clone());
        }
    }

    /// A stream whose every activation attaches one listener to this subject.
    #[must_use]
    pub fn stream(&self) -> MotionStream<T> {
        let state = Arc::clone(&self.state);

        MotionStream::new(move |channel| {
            let id = {
                let mut guard = state.lock();
                let id = guard.next_id;
                guard.next_id += 1;
                guard.listeners.push((id, channel));
                id
            };

            let state = Arc::clone(&state);
            Box::new(move || {
                state.lock().listeners.retain(|(listener_id, _)| *listener_id != id);
            })
        })
    }

    /// Number of listeners currently attached.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.state.lock().listeners.len()
    }
}

impl<T: Clone + Send + 'static> Default for MotionSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MotionSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
