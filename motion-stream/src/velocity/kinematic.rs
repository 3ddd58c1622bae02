// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{calculate_velocity, VelocityConfig};
use motion_core::{HasTimestamp, Point2D, Timestamped};

/// Value shapes whose rate of change the velocity operator can estimate.
///
/// The velocity has the same shape as the value: a scalar for `f64`, one
/// component per axis for [`Point2D`].
pub trait Kinematic: Clone + Send + Sync + 'static {
    /// Estimates velocity from `recent` samples paired with `timestamps`.
    fn velocity(recent: &[Self], timestamps: &[f64], config: &VelocityConfig) -> Self;
}

impl Kinematic for f64 {
    fn velocity(recent: &[Self], timestamps: &[f64], config: &VelocityConfig) -> Self {
        calculate_velocity(recent, timestamps, config)
    }
}

impl Kinematic for Point2D {
    fn velocity(recent: &[Self], timestamps: &[f64], config: &VelocityConfig) -> Self {
        let xs: Vec<f64> = recent.iter().map(|point| point.x).collect();
        let ys: Vec<f64> = recent.iter().map(|point| point.y).collect();

        Point2D::new(
            calculate_velocity(&xs, timestamps, config),
            calculate_velocity(&ys, timestamps, config),
        )
    }
}

/// Evaluates one window at time `now`.
///
/// Values are restricted to those younger than `config.maximum_age_ms`, while
/// the timestamps are taken from the whole window. The two stay aligned from
/// the front, so when old samples are dropped the remaining values are paired
/// with the window's earliest timestamps.
pub(crate) fn estimate<T: Kinematic>(window: &[Timestamped<T>], now: f64, config: &VelocityConfig) -> T {
    let recent: Vec<T> = window
        .iter()
        .filter(|sample| now - sample.timestamp() < config.maximum_age_ms)
        .map(|sample| sample.value.clone())
        .collect();
    let timestamps: Vec<f64> = window.iter().map(HasTimestamp::timestamp).collect();

    T::velocity(&recent, &timestamps, config)
}
