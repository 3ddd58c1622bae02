// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::VelocityConfig;

/// Estimates velocity using the oldest sample still moving in the current direction.
///
/// Scans from the newest pair backwards. The slope to the newest pair always
/// seeds the estimate; each older slope replaces it only if it has the same
/// sign, so a momentary reversal close to "now" does not hide a consistent
/// longer motion. Fewer than two samples yield 0.
///
/// `values[i]` is paired with `timestamps[i]`; only the common prefix of the two
/// slices is used.
///
/// An estimate above `config.maximum_velocity` in magnitude is replaced by the
/// *positive* constant `config.default_velocity` when fewer than three samples
/// were available, and by the *positive* constant `config.maximum_velocity`
/// otherwise. The sign of the raw estimate is not kept.
///
/// # Examples
///
/// ```
/// use motion_stream::velocity::{calculate_velocity, VelocityConfig};
///
/// // Dipped, then recovered: the oldest consistent slope wins.
/// let velocity = calculate_velocity(&[10.0, 0.0, 20.0], &[0.0, 10.0, 20.0], &VelocityConfig::default());
/// assert_eq!(velocity, 0.5);
/// ```
#[must_use]
pub fn calculate_velocity(values: &[f64], timestamps: &[f64], config: &VelocityConfig) -> f64 {
    let len = values.len().min(timestamps.len());
    if len < 2 {
        return 0.0;
    }

    let last = len - 1;
    let mut velocity = 0.0;

    for i in (0..last).rev() {
        let candidate = (values[last] - values[i]) / (timestamps[last] - timestamps[i]);

        // 0/0: no information in this pair
        if candidate.is_nan() {
            continue;
        }

        if (candidate > 0.0) == (velocity > 0.0) || velocity == 0.0 {
            velocity = candidate;
        }
    }

    if velocity.abs() > config.maximum_velocity {
        let clamped = if len < 3 {
            config.default_velocity
        } else {
            config.maximum_velocity
        };
        motion_core::trace!("velocity: clamped {velocity} to {clamped} ({len} samples)");
        velocity = clamped;
    }

    velocity
}
