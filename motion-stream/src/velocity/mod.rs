// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Velocity operator: rate of change of a scalar or 2-D signal.
//!
//! The operator timestamps the incoming stream, keeps a sliding window of the
//! most recent samples and, for every evaluation, estimates the velocity in
//! value-units per millisecond. A pointer stream measured in pixels therefore
//! yields pixels per millisecond.
//!
//! # Evaluation
//!
//! 1. Samples older than [`VelocityConfig::maximum_age_ms`] at evaluation time are
//!    discarded, so a stall on the producing thread cannot drag in stale data.
//! 2. [`calculate_velocity`] runs on the remaining values (per axis for [`Point2D`]).
//! 3. Implausibly fast estimates are replaced by a positive constant; see
//!    [`calculate_velocity`] for the exact rule.
//!
//! # Triggering
//!
//! - [`velocity`](VelocityExt::velocity) evaluates on every upstream value.
//! - [`velocity_on`](VelocityExt::velocity_on) evaluates only when a *pulse*
//!   dispatches, using the pulse's timestamp as "now". This keeps the estimate
//!   cheap when it is only needed at specific moments, such as pointer release.
//!
//! # Example
//!
//! ```
//! use motion_core::{MotionSubject, Point2D};
//! use motion_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let moves = MotionSubject::<Point2D>::new();
//! let releases = MotionSubject::<()>::new();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _subscription = moves
//!     .stream()
//!     .velocity_on(&releases)
//!     .subscribe(move |v| sink.lock().unwrap().push(v));
//!
//! moves.next(Point2D::new(0.0, 0.0));
//! assert!(seen.lock().unwrap().is_empty());
//!
//! releases.next(());
//! assert_eq!(seen.lock().unwrap().len(), 1);
//! ```
//!
//! [`Point2D`]: motion_core::Point2D

mod calculate;
mod config;
mod kinematic;

pub use calculate::calculate_velocity;
pub use config::{
    VelocityConfig, DEFAULT_VELOCITY, MAXIMUM_AGE_MS, MAXIMUM_INCOMING_DISPATCHES,
    MAXIMUM_VELOCITY,
};
pub use kinematic::Kinematic;

use crate::sliding_window::{SlidingWindowExt, Window};
use crate::timestamp::Timestampable;
use kinematic::estimate;
use motion_core::lock::Mutex;
use motion_core::{Channel, MotionStream, Result, SharedClock, SystemClock, Timestamped};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Extension trait providing the velocity operators.
pub trait VelocityExt<T: Kinematic> {
    /// Velocity evaluated on every upstream value, with the default
    /// [`VelocityConfig`] and the system clock.
    fn velocity(&self) -> MotionStream<T>;

    /// Velocity evaluated whenever `pulse` dispatches, with the default
    /// [`VelocityConfig`] and the system clock.
    fn velocity_on<P: Timestampable>(&self, pulse: &P) -> MotionStream<T>;

    /// [`velocity`](Self::velocity) with an explicit clock and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidConfiguration`](motion_core::MotionError) if
    /// `config` fails [`VelocityConfig::validate`].
    fn velocity_with(&self, clock: SharedClock, config: VelocityConfig) -> Result<MotionStream<T>>;

    /// [`velocity_on`](Self::velocity_on) with an explicit clock and configuration.
    /// The same clock timestamps both the signal and the pulse.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidConfiguration`](motion_core::MotionError) if
    /// `config` fails [`VelocityConfig::validate`].
    fn velocity_on_with<P: Timestampable>(
        &self,
        pulse: &P,
        clock: SharedClock,
        config: VelocityConfig,
    ) -> Result<MotionStream<T>>;
}

impl<T: Kinematic> VelocityExt<T> for MotionStream<T> {
    fn velocity(&self) -> MotionStream<T> {
        on_every_value(self, SystemClock::shared(), VelocityConfig::default())
    }

    fn velocity_on<P: Timestampable>(&self, pulse: &P) -> MotionStream<T> {
        let clock = SystemClock::shared();
        on_pulse(self, pulse.timestamp_with(Arc::clone(&clock)), clock, VelocityConfig::default())
    }

    fn velocity_with(&self, clock: SharedClock, config: VelocityConfig) -> Result<MotionStream<T>> {
        config.validate()?;
        Ok(on_every_value(self, clock, config))
    }

    fn velocity_on_with<P: Timestampable>(
        &self,
        pulse: &P,
        clock: SharedClock,
        config: VelocityConfig,
    ) -> Result<MotionStream<T>> {
        config.validate()?;
        Ok(on_pulse(self, pulse.timestamp_with(Arc::clone(&clock)), clock, config))
    }
}

fn timestamped_windows<T: Kinematic>(
    source: &MotionStream<T>,
    clock: &SharedClock,
    config: &VelocityConfig,
) -> MotionStream<Window<Timestamped<T>>> {
    // validated by the caller
    let capacity = NonZeroUsize::new(config.window_capacity).unwrap_or(NonZeroUsize::MIN);

    source
        .timestamp_with(Arc::clone(clock))
        .sliding_window_nonzero(capacity)
}

fn on_every_value<T: Kinematic>(
    source: &MotionStream<T>,
    clock: SharedClock,
    config: VelocityConfig,
) -> MotionStream<T> {
    timestamped_windows(source, &clock, &config).next_operator(
        move |window: Window<Timestamped<T>>, dispatch: &Channel<T>| {
            dispatch.dispatch(estimate(&window, clock.now(), &config));
        },
    )
}

fn on_pulse<T, I>(
    source: &MotionStream<T>,
    pulses: MotionStream<Timestamped<I>>,
    clock: SharedClock,
    config: VelocityConfig,
) -> MotionStream<T>
where
    T: Kinematic,
    I: Send + 'static,
{
    let windows = timestamped_windows(source, &clock, &config);

    MotionStream::new(move |downstream: Channel<T>| {
        let latest: Arc<Mutex<Option<Window<Timestamped<T>>>>> = Arc::new(Mutex::new(None));

        let store = Arc::clone(&latest);
        let window_subscription = windows.subscribe(move |window| {
            *store.lock() = Some(window);
        });

        let pulse_subscription = pulses.subscribe(move |pulse: Timestamped<I>| {
            let window = latest.lock().clone();
            if let Some(window) = window {
                downstream.dispatch(estimate(&window, pulse.timestamp, &config));
            }
        });

        Box::new(move || {
            pulse_subscription.unsubscribe();
            window_subscription.unsubscribe();
        })
    })
}
