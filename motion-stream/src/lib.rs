// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators for push-based motion streams.
//!
//! Every operator is an extension trait implemented for
//! [`MotionStream`](motion_core::MotionStream). Import [`prelude`] to bring them
//! all into scope.
//!
//! ## Operator Categories
//!
//! ### Sharing
//!
//! - **[`remember`](RememberExt::remember)**: one shared upstream activation, latest value replayed to late listeners
//!
//! ### Shaping
//!
//! - **[`sliding_window`](SlidingWindowExt::sliding_window)**: the last `n` values on every value
//! - **[`timestamp`](TimestampExt::timestamp)**: pairs every value with a clock reading
//! - **[`map`](MapExt::map)**, **[`filter`](FilterExt::filter)**, **[`tap`](TapExt::tap)**
//! - **[`dedupe`](DedupeExt::dedupe)**: drops consecutive duplicates
//! - **[`ignore_until`](IgnoreUntilExt::ignore_until)**: drops values until a target is seen
//!
//! ### Motion
//!
//! - **[`velocity`](VelocityExt::velocity)**: rate of change per millisecond, on every value
//! - **[`velocity_on`](VelocityExt::velocity_on)**: rate of change, only when a pulse dispatches
//!
//! ### Async
//!
//! - **[`into_receiver`](IntoReceiverExt::into_receiver)**: consume a stream as a [`futures::Stream`]
//!
//! ## Example: Release Velocity of a Drag
//!
//! ```
//! use motion_core::{MotionSubject, Point2D};
//! use motion_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let moves = MotionSubject::<Point2D>::new();
//! let up = MotionSubject::<()>::new();
//!
//! let position = moves.stream().remember();
//! let fling = Arc::new(Mutex::new(None));
//!
//! let sink = Arc::clone(&fling);
//! let _fling = position
//!     .velocity_on(&up)
//!     .subscribe(move |v| *sink.lock().unwrap() = Some(v));
//!
//! moves.next(Point2D::new(0.0, 0.0));
//! up.next(());
//!
//! assert_eq!(*fling.lock().unwrap(), Some(Point2D::ORIGIN));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod dedupe;
pub mod filter;
pub mod ignore_until;
pub mod into_receiver;
pub mod map;
pub mod prelude;
pub mod remember;
pub mod sliding_window;
pub mod tap;
pub mod timestamp;
pub mod velocity;

pub use self::dedupe::DedupeExt;
pub use self::filter::FilterExt;
pub use self::ignore_until::IgnoreUntilExt;
pub use self::into_receiver::{IntoReceiverExt, MotionReceiver};
pub use self::map::MapExt;
pub use self::remember::RememberExt;
pub use self::sliding_window::{SlidingWindowExt, Window};
pub use self::tap::TapExt;
pub use self::timestamp::{TimestampExt, Timestampable};
pub use self::velocity::{Kinematic, VelocityConfig, VelocityExt};
