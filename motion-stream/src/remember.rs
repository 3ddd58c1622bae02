// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Multicast cache operator.
//!
//! [`remember`](RememberExt::remember) turns a stream with one upstream activation
//! per subscriber into a stream with a single shared activation, and replays the
//! most recent value to subscribers that join later.
//!
//! ## Characteristics
//!
//! - **Shared execution**: upstream work runs once per value no matter how many
//!   listeners are attached.
//! - **Lazy**: the upstream is connected when the first listener arrives and
//!   disconnected when the last one leaves.
//! - **Replay**: a listener joining after a value was seen receives that value
//!   synchronously, before `subscribe` returns.
//! - **Retained cache**: the last value survives a full disconnect, so the next
//!   first listener is primed with it immediately.
//!
//! ## Example
//!
//! ```
//! use motion_core::MotionSubject;
//! use motion_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let subject = MotionSubject::<i32>::new();
//! let remembered = subject.stream().map(|x| x * 10).remember();
//!
//! let _first = remembered.subscribe(|_| {});
//! subject.next(4);
//!
//! let late = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&late);
//! let _second = remembered.subscribe(move |x| sink.lock().unwrap().push(x));
//!
//! assert_eq!(*late.lock().unwrap(), vec![40]);
//! ```

use motion_core::lock::Mutex;
use motion_core::{Channel, MotionStream, Subscription};
use std::sync::Arc;

struct RememberState<T> {
    last_value: Option<T>,
    listeners: Vec<(u64, Channel<T>)>,
    next_id: u64,
    connected: bool,
    upstream: Option<Subscription>,
}

/// Extension trait providing the [`remember`](RememberExt::remember) operator.
pub trait RememberExt<T> {
    /// Shares one upstream activation among all subscribers and replays the
    /// latest value to late subscribers.
    ///
    /// See the [module documentation](self) for the full contract.
    fn remember(&self) -> MotionStream<T>;
}

impl<T: Clone + Send + 'static> RememberExt<T> for MotionStream<T> {
    fn remember(&self) -> MotionStream<T> {
        let upstream = self.clone();
        let state = Arc::new(Mutex::new(RememberState {
            last_value: None,
            listeners: Vec::new(),
            next_id: 0,
            connected: false,
            upstream: None,
        }));

        MotionStream::new(move |channel: Channel<T>| {
            let (id, replay, first) = {
                let mut guard = state.lock();
                let id = guard.next_id;
                guard.next_id += 1;
                guard.listeners.push((id, channel.clone()));

                let first = !guard.connected;
                guard.connected = true;

                (id, guard.last_value.clone(), first)
            };

            if let Some(value) = replay {
                channel.dispatch(value);
            }

            if first {
                connect_upstream(&upstream, &state);
            }

            let state = Arc::clone(&state);
            Box::new(move || disconnect_listener(&state, id))
        })
    }
}

fn connect_upstream<T: Clone + Send + 'static>(
    upstream: &MotionStream<T>,
    state: &Arc<Mutex<RememberState<T>>>,
) {
    motion_core::debug!("remember: first listener attached, connecting upstream");

    let weak = Arc::downgrade(state);
    let subscription = upstream.subscribe(move |value: T| {
        let Some(state) = weak.upgrade() else {
            return;
        };

        let listeners: Vec<Channel<T>> = {
            let mut guard = state.lock();
            guard.last_value = Some(value.clone());
            guard
                .listeners
                .iter()
                .map(|(_, channel)| channel.clone())
                .collect()
        };

        for channel in listeners {
            channel.dispatch(value.clone());
        }
    });

    // The first listener cannot leave before its connector returns, so the
    // listener set is non-empty here.
    state.lock().upstream = Some(subscription);
}

fn disconnect_listener<T>(state: &Mutex<RememberState<T>>, id: u64) {
    let upstream = {
        let mut guard = state.lock();
        guard.listeners.retain(|(listener_id, _)| *listener_id != id);
        if guard.listeners.is_empty() && guard.connected {
            guard.connected = false;
            guard.upstream.take()
        } else {
            None
        }
    };

    if let Some(subscription) = upstream {
        motion_core::debug!("remember: last listener detached, disconnecting upstream");
        subscription.unsubscribe();
    }
}
