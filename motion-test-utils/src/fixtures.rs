// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canned pointer traces.

use crate::{FakeClock, MockObserver};
use motion_core::Point2D;

/// A pointer moving by `step` every sample, starting at `start`.
pub fn linear_drag(start: Point2D, step: Point2D, samples: usize) -> Vec<Point2D> {
    (0..samples)
        .map(|i| {
            let i = i as f64;
            Point2D::new(start.x + step.x * i, start.y + step.y * i)
        })
        .collect()
}

/// Pushes `values` through `observer`, advancing `clock` by `interval` before each one.
pub fn feed_every<T: Clone + Send + 'static>(
    observer: &MockObserver<T>,
    clock: &FakeClock,
    interval: f64,
    values: impl IntoIterator<Item = T>,
) {
    for value in values {
        clock.advance(interval);
        observer.next(value);
    }
}
