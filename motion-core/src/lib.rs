// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for push-based motion streams.
//!
//! Producers push values (pointer positions, scroll offsets, timestamps) into
//! [`Channel`]s; consumers compose [`MotionStream`]s into chains of operators and
//! react to the result. Dispatch is synchronous: a pushed value travels
//! depth-first through the whole chain before the push returns.
//!
//! # Lifecycle
//!
//! Nothing runs until a stream is subscribed. [`MotionStream::subscribe`] activates
//! the entire upstream chain and returns a [`Subscription`]; unsubscribing tears
//! the chain down again.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod channel;
pub mod clock;
pub mod lock;
pub mod motion_error;
pub mod motion_stream;
pub mod motion_subject;
pub mod point;
pub mod subscription;
pub mod timestamped;

pub use self::channel::Channel;
pub use self::clock::{Clock, SharedClock, SystemClock};
pub use self::motion_error::{MotionError, Result};
pub use self::motion_stream::MotionStream;
pub use self::motion_subject::MotionSubject;
pub use self::point::Point2D;
pub use self::subscription::{Disconnect, Subscription};
pub use self::timestamped::{HasTimestamp, Timestamped};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}
