// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::{MotionStream, MotionSubject};
use motion_stream::prelude::*;
use motion_test_utils::{MockObserver, Recorder};

#[test]
fn test_ignore_until_drops_values_before_target() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = MotionStream::of(vec![1, 2, 3])
        .ignore_until(2)
        .subscribe(recorder.listener());

    // Assert
    assert_eq!(recorder.values(), vec![2, 3]);

    Ok(())
}

#[test]
fn test_ignore_until_stays_open_after_target() -> anyhow::Result<()> {
    // Arrange
    let observer = MockObserver::<i32>::new();
    let recorder = Recorder::new();
    let _subscription = observer.stream().ignore_until(2).subscribe(recorder.listener());

    // Act
    observer.feed([5, 2, 1, 2, 7]);

    // Assert
    assert_eq!(recorder.values(), vec![2, 1, 2, 7]);

    Ok(())
}

#[test]
fn test_ignore_until_target_never_seen() -> anyhow::Result<()> {
    // Arrange
    let observer = MockObserver::<&'static str>::new();
    let recorder = Recorder::new();
    let _subscription = observer
        .stream()
        .ignore_until("down")
        .subscribe(recorder.listener());

    // Act
    observer.feed(["move", "move", "up"]);

    // Assert
    assert_eq!(recorder.count(), 0);

    Ok(())
}

#[test]
fn test_ignore_until_gate_is_per_activation() -> anyhow::Result<()> {
    // Arrange
    let subject = MotionSubject::<i32>::new();
    let gated = subject.stream().ignore_until(0);
    let early = Recorder::new();
    let late = Recorder::new();
    let _early = gated.subscribe(early.listener());
    subject.next(0);

    // Act
    let _late = gated.subscribe(late.listener());
    subject.next(1);
    subject.next(0);
    subject.next(2);

    // Assert
    assert_eq!(early.values(), vec![0, 1, 0, 2]);
    assert_eq!(late.values(), vec![0, 2]);

    Ok(())
}
