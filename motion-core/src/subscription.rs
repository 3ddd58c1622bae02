// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::lock::Mutex;
use std::fmt;

/// Tears down one activation of a stream. Returned by every connector.
pub type Disconnect = Box<dyn FnOnce() + Send + 'static>;

/// Handle to one live activation of a [`MotionStream`](crate::MotionStream).
///
/// A subscription owns exactly one disconnect capability. [`unsubscribe`](Self::unsubscribe)
/// runs it at most once; later calls are no-ops. Dropping the subscription
/// unsubscribes as well, so keep it alive for as long as values should flow.
#[must_use = "dropping a Subscription disconnects it immediately"]
pub struct Subscription {
    disconnect: Mutex<Option<Disconnect>>,
}

impl Subscription {
    /// Wraps a disconnect function.
    pub fn new<F>(disconnect: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            disconnect: Mutex::new(Some(Box::new(disconnect))),
        }
    }

    /// A subscription that is already closed. Unsubscribing it does nothing.
    pub fn closed() -> Self {
        Self {
            disconnect: Mutex::new(None),
        }
    }

    /// Disconnects the activation. Idempotent.
    pub fn unsubscribe(&self) {
        // Take under the lock, run outside it: disconnect may re-enter this stream.
        let disconnect = self.disconnect.lock().take();
        if let Some(disconnect) = disconnect {
            disconnect();
        }
    }

    /// Returns `true` once the subscription has been disconnected.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.disconnect.lock().is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.is_closed())
            .finish()
    }
}
