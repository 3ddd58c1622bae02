// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::Point2D;
use motion_stream::prelude::*;
use motion_stream::velocity::{DEFAULT_VELOCITY, MAXIMUM_VELOCITY};
use motion_test_utils::fixtures::{feed_every, linear_drag};
use motion_test_utils::{assert_approx_eq, assert_point_approx_eq, FakeClock, MockObserver, Recorder};

#[test]
fn test_velocity_of_steady_scalar_motion() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<f64>::new();
    let recorder = Recorder::new();
    let _subscription = observer
        .stream()
        .velocity_with(clock.shared(), VelocityConfig::default())?
        .subscribe(recorder.listener());

    // Act
    feed_every(&observer, &clock, 10.0, [0.0, 1.0, 2.0, 3.0]);

    // Assert
    let values = recorder.values();
    assert_eq!(values.len(), 4);
    assert_approx_eq(values[0], 0.0);
    for velocity in &values[1..] {
        assert_approx_eq(*velocity, 0.1);
    }

    Ok(())
}

#[test]
fn test_velocity_of_point_is_per_axis() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<Point2D>::new();
    let recorder = Recorder::new();
    let _subscription = observer
        .stream()
        .velocity_with(clock.shared(), VelocityConfig::default())?
        .subscribe(recorder.listener());

    // Act
    feed_every(
        &observer,
        &clock,
        10.0,
        linear_drag(Point2D::new(100.0, 100.0), Point2D::new(2.0, -1.0), 5),
    );

    // Assert
    assert_point_approx_eq(recorder.last().unwrap_or_default(), Point2D::new(0.2, -0.1));

    Ok(())
}

#[test]
fn test_velocity_only_looks_at_window_capacity_samples() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<f64>::new();
    let recorder = Recorder::new();
    let config = VelocityConfig {
        window_capacity: 2,
        ..VelocityConfig::default()
    };
    let _subscription = observer
        .stream()
        .velocity_with(clock.shared(), config)?
        .subscribe(recorder.listener());

    // Act
    feed_every(&observer, &clock, 10.0, [0.0, 100.0, 101.0]);

    // Assert
    assert_approx_eq(recorder.last().unwrap_or_default(), 0.1);

    Ok(())
}

#[test]
fn test_velocity_ignores_samples_older_than_maximum_age() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<f64>::new();
    let recorder = Recorder::new();
    let _subscription = observer
        .stream()
        .velocity_with(clock.shared(), VelocityConfig::default())?
        .subscribe(recorder.listener());

    // Act
    observer.next(0.0);
    clock.advance(1_000.0);
    observer.next(5.0);

    // Assert
    assert_eq!(recorder.values(), vec![0.0, 0.0]);

    Ok(())
}

#[test]
fn test_velocity_replaces_implausible_two_sample_estimate_with_default() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<f64>::new();
    let recorder = Recorder::new();
    let _subscription = observer
        .stream()
        .velocity_with(clock.shared(), VelocityConfig::default())?
        .subscribe(recorder.listener());

    // Act
    feed_every(&observer, &clock, 10.0, [0.0, 100.0]);

    // Assert
    assert_eq!(recorder.last(), Some(DEFAULT_VELOCITY));

    Ok(())
}

#[test]
fn test_velocity_clamps_implausible_estimate_to_maximum() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<f64>::new();
    let recorder = Recorder::new();
    let _subscription = observer
        .stream()
        .velocity_with(clock.shared(), VelocityConfig::default())?
        .subscribe(recorder.listener());

    // Act
    feed_every(&observer, &clock, 10.0, [300.0, 200.0, 100.0]);

    // Assert
    assert_eq!(recorder.last(), Some(MAXIMUM_VELOCITY));

    Ok(())
}

#[test]
fn test_velocity_activations_are_independent() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<f64>::new();
    let speed = observer
        .stream()
        .velocity_with(clock.shared(), VelocityConfig::default())?;
    let early = Recorder::new();
    let late = Recorder::new();
    let _early = speed.subscribe(early.listener());
    feed_every(&observer, &clock, 10.0, [0.0, 1.0]);

    // Act
    let _late = speed.subscribe(late.listener());
    feed_every(&observer, &clock, 10.0, [2.0]);

    // Assert
    assert_approx_eq(early.last().unwrap_or_default(), 0.1);
    assert_eq!(late.values(), vec![0.0]);
    assert_eq!(observer.connect_count(), 2);

    Ok(())
}

#[test]
fn test_velocity_stops_after_unsubscribe() -> anyhow::Result<()> {
    // Arrange
    let clock = FakeClock::default();
    let observer = MockObserver::<f64>::new();
    let recorder = Recorder::new();
    let subscription = observer
        .stream()
        .velocity_with(clock.shared(), VelocityConfig::default())?
        .subscribe(recorder.listener());
    observer.next(1.0);

    // Act
    subscription.unsubscribe();
    observer.next(2.0);

    // Assert
    assert_eq!(recorder.count(), 1);
    assert_eq!(observer.live_connections(), 0);

    Ok(())
}
