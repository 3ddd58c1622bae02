// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::ops::Deref;

/// A trait for types that carry a clock reading in milliseconds.
///
/// Only differences between readings are meaningful; the epoch depends on the
/// [`Clock`](crate::Clock) that produced them.
///
/// # Examples
///
/// ```
/// use motion_core::HasTimestamp;
///
/// struct Touch {
///     at: f64,
/// }
///
/// impl HasTimestamp for Touch {
///     fn timestamp(&self) -> f64 {
///         self.at
///     }
/// }
///
/// assert_eq!(Touch { at: 16.0 }.timestamp(), 16.0);
/// ```
pub trait HasTimestamp {
    /// Clock reading, in milliseconds.
    fn timestamp(&self) -> f64;
}

/// A value paired with the clock reading taken when it was dispatched.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamped<T> {
    pub value: T,
    pub timestamp: f64,
}

impl<T> Timestamped<T> {
    /// Pairs `value` with `timestamp` (milliseconds).
    pub fn new(value: T, timestamp: f64) -> Self {
        Self { value, timestamp }
    }

    /// Drops the timestamp.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> HasTimestamp for Timestamped<T> {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

impl<T> Deref for Timestamped<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
