// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::{MotionError, Result};

/// Samples older than this (relative to the evaluation time) are ignored, in ms.
pub const MAXIMUM_AGE_MS: f64 = 250.0;

/// Number of recent samples the estimator looks at.
pub const MAXIMUM_INCOMING_DISPATCHES: usize = 5;

/// Ceiling for a trusted estimate, in value-units per ms.
pub const MAXIMUM_VELOCITY: f64 = 5.0;

/// Substitute for an over-limit estimate made from fewer than three samples.
pub const DEFAULT_VELOCITY: f64 = 1.0;

/// Tuning of the velocity estimator.
///
/// The defaults are the constants above and match the behavior of
/// [`VelocityExt::velocity`](super::VelocityExt::velocity).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VelocityConfig {
    pub maximum_age_ms: f64,
    pub window_capacity: usize,
    pub maximum_velocity: f64,
    pub default_velocity: f64,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            maximum_age_ms: MAXIMUM_AGE_MS,
            window_capacity: MAXIMUM_INCOMING_DISPATCHES,
            maximum_velocity: MAXIMUM_VELOCITY,
            default_velocity: DEFAULT_VELOCITY,
        }
    }
}

impl VelocityConfig {
    /// Checks that every field is inside its domain.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidConfiguration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.window_capacity == 0 {
            return Err(reject("velocity window_capacity must be at least 1"));
        }
        if !(self.maximum_age_ms.is_finite() && self.maximum_age_ms > 0.0) {
            return Err(reject("velocity maximum_age_ms must be finite and positive"));
        }
        if !(self.maximum_velocity.is_finite() && self.maximum_velocity > 0.0) {
            return Err(reject("velocity maximum_velocity must be finite and positive"));
        }
        if !self.default_velocity.is_finite() {
            return Err(reject("velocity default_velocity must be finite"));
        }
        Ok(())
    }
}

fn reject(context: &str) -> MotionError {
    motion_core::warn!("{context}");
    MotionError::invalid_configuration(context)
}
