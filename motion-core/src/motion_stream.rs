// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The composable push stream every operator attaches to.
//!
//! A [`MotionStream`] wraps a *connector*: a function that, given an output
//! [`Channel`], starts producing values into it and returns a [`Disconnect`]
//! that stops production. The stream itself holds no state; every call to
//! [`subscribe`](MotionStream::subscribe) runs the connector again and yields an
//! independent activation.
//!
//! Operators never mutate a stream. They return a new stream whose connector
//! subscribes to the parent, transforms each value and forwards the results.
//!
//! ## Example
//!
//! ```
//! use motion_core::{Channel, MotionStream};
//! use std::sync::{Arc, Mutex};
//!
//! let source = MotionStream::new(|channel: Channel<i32>| {
//!     channel.dispatch(1);
//!     channel.dispatch(2);
//!     Box::new(|| {})
//! });
//!
//! let doubled = source.next_operator(|value, dispatch: &Channel<i32>| dispatch.dispatch(value * 2));
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _subscription = doubled.subscribe(move |value| sink.lock().unwrap().push(value));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![2, 4]);
//! ```

use crate::lock::Mutex;
use crate::{Channel, Disconnect, Subscription};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Connector<T> = dyn Fn(Channel<T>) -> Disconnect + Send + Sync;

/// A cold, push-based stream of values over time.
///
/// Cloning is cheap: clones share the connector, not any activation state.
pub struct MotionStream<T> {
    connector: Arc<Connector<T>>,
}

impl<T: Send + 'static> MotionStream<T> {
    /// Creates a stream from a connector function.
    pub fn new<F>(connector: F) -> Self
    where
        F: Fn(Channel<T>) -> Disconnect + Send + Sync + 'static,
    {
        Self {
            connector: Arc::new(connector),
        }
    }

    /// A stream that never dispatches.
    pub fn empty() -> Self {
        Self::new(|_channel| Box::new(|| {}))
    }

    /// A stream that synchronously dispatches `values`, in order, to every new subscriber.
    pub fn of(values: Vec<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move |channel| {
            for value in &values {
                channel.dispatch(value.clone());
            }
            Box::new(|| {})
        })
    }

    /// Activates the stream and delivers every value to `listener`.
    ///
    /// After the returned subscription is unsubscribed (or dropped) the listener
    /// is never called again, even by an upstream that is still dispatching.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.subscribe_channel(Channel::new(listener))
    }

    /// Activates the stream and forwards every value into an existing channel.
    pub fn subscribe_channel(&self, channel: Channel<T>) -> Subscription {
        let open = Arc::new(AtomicBool::new(true));
        let gate = Arc::clone(&open);
        let gated = Channel::new(move |value| {
            if gate.load(Ordering::Acquire) {
                channel.dispatch(value);
            }
        });

        let disconnect = (self.connector)(gated);

        Subscription::new(move || {
            open.store(false, Ordering::Release);
            disconnect();
        })
    }

    /// Builds a stateless operator.
    ///
    /// `operator` receives every upstream value together with the downstream
    /// channel and may dispatch zero, one or many derived values.
    pub fn next_operator<U, F>(&self, operator: F) -> MotionStream<U>
    where
        U: Send + 'static,
        F: Fn(T, &Channel<U>) + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let operator = Arc::new(operator);

        MotionStream::new(move |downstream: Channel<U>| {
            let operator = Arc::clone(&operator);
            let subscription = upstream.subscribe(move |value| operator(value, &downstream));
            Box::new(move || subscription.unsubscribe())
        })
    }

    /// Builds an operator with private state per activation.
    ///
    /// `init` runs once for every subscribe, so independent subscriptions never
    /// share state. `operator` folds each upstream value into the state and
    /// returns the value to forward, if any. The state is unlocked before the
    /// result is dispatched.
    pub fn stateful_operator<U, S, I, F>(&self, init: I, operator: F) -> MotionStream<U>
    where
        U: Send + 'static,
        S: Send + 'static,
        I: Fn() -> S + Send + Sync + 'static,
        F: Fn(&mut S, T) -> Option<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let operator = Arc::new(operator);

        MotionStream::new(move |downstream: Channel<U>| {
            let state = Mutex::new(init());
            let operator = Arc::clone(&operator);
            let subscription = upstream.subscribe(move |value| {
                let output = operator(&mut state.lock(), value);
                if let Some(output) = output {
                    downstream.dispatch(output);
                }
            });
            Box::new(move || subscription.unsubscribe())
        })
    }
}

impl<T> Clone for MotionStream<T> {
    fn clone(&self) -> Self {
        Self {
            connector: Arc::clone(&self.connector),
        }
    }
}

impl<T> fmt::Debug for MotionStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionStream").finish_non_exhaustive()
    }
}
