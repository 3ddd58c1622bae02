// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # motion-rx
//!
//! Synchronous, push-based streams for interactive motion.
//!
//! A gesture adapter pushes raw samples (pointer positions, scroll offsets,
//! phase changes) into [`MotionSubject`]s. Consumers compose [`MotionStream`]s
//! from them with the operators in [`prelude`] and subscribe to the result.
//! Every push travels synchronously through the chain before it returns, so a
//! frame's worth of derived state is ready as soon as the raw input is.
//!
//! ## Quick Start
//!
//! ```
//! use motion_rx::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let pointer = MotionSubject::<Point2D>::new();
//! let phase = MotionSubject::<&'static str>::new();
//!
//! // one shared upstream for every consumer of the position
//! let position = pointer.stream().remember();
//!
//! let release = phase.stream().filter(|p| *p == "up");
//! let fling = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&fling);
//! let _fling = position
//!     .velocity_on(&release)
//!     .subscribe(move |v| sink.lock().unwrap().push(v));
//!
//! pointer.next(Point2D::new(10.0, 10.0));
//! phase.next("up");
//!
//! assert_eq!(fling.lock().unwrap().len(), 1);
//! ```
//!
//! ## Crates
//!
//! - `motion-core`: [`MotionStream`], [`MotionSubject`], [`Subscription`] and the value types
//! - `motion-stream`: the operators
//!
//! ## Features
//!
//! - `tracing`: structured diagnostics through the `tracing` crate
//! - `serde`: `Serialize`/`Deserialize` for [`Point2D`], [`Timestamped`] and [`VelocityConfig`]

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use motion_core::{
    Channel, Clock, Disconnect, HasTimestamp, MotionError, MotionStream, MotionSubject, Point2D,
    Result, SharedClock, Subscription, SystemClock, Timestamped,
};
pub use motion_stream::velocity::{calculate_velocity, Kinematic, VelocityConfig};
pub use motion_stream::{MotionReceiver, Window};

/// Prelude module for convenient imports
pub mod prelude {
    pub use motion_core::{
        Channel, Clock, MotionError, MotionStream, MotionSubject, Point2D, SharedClock,
        Subscription, SystemClock, Timestamped,
    };
    pub use motion_stream::prelude::*;
}
