// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from a synchronous push stream to an async [`futures::Stream`].
//!
//! The stream is subscribed immediately. Every dispatched value is queued in an
//! unbounded channel until the async consumer polls it, so a fast producer never
//! blocks on a slow consumer. Dropping the receiver unsubscribes.

use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::{Stream, StreamExt};
use motion_core::{MotionStream, Subscription};
use std::pin::Pin;
use std::task::{Context, Poll};

/// An async stream fed by a [`MotionStream`] subscription.
#[derive(Debug)]
pub struct MotionReceiver<T> {
    receiver: UnboundedReceiver<T>,
    subscription: Subscription,
}

impl<T> MotionReceiver<T> {
    /// Unsubscribes from the source. Values already queued are still yielded,
    /// after which the stream ends.
    pub fn close(&self) {
        self.subscription.unsubscribe();
    }
}

impl<T> Stream for MotionReceiver<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.receiver.poll_next_unpin(cx)
    }
}

/// Extension trait providing [`into_receiver`](IntoReceiverExt::into_receiver).
pub trait IntoReceiverExt<T> {
    /// Subscribes and exposes the values as an async stream.
    ///
    /// ```
    /// use futures::StreamExt;
    /// use motion_core::MotionStream;
    /// use motion_stream::prelude::*;
    ///
    /// # futures::executor::block_on(async {
    /// let values: Vec<i32> = MotionStream::of(vec![1, 2, 3])
    ///     .into_receiver()
    ///     .take(3)
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(values, vec![1, 2, 3]);
    /// # });
    /// ```
    fn into_receiver(&self) -> MotionReceiver<T>;
}

impl<T: Send + 'static> IntoReceiverExt<T> for MotionStream<T> {
    fn into_receiver(&self) -> MotionReceiver<T> {
        let (sender, receiver) = mpsc::unbounded();

        let subscription = self.subscribe(move |value| {
            // receiver gone: nothing left to deliver to
            let _ = sender.unbounded_send(value);
        });

        MotionReceiver {
            receiver,
            subscription,
        }
    }
}
