// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_stream::prelude::*;
use motion_test_utils::{MockObserver, Recorder};

#[test]
fn test_filter_keeps_matching_values() -> anyhow::Result<()> {
    // Arrange
    let observer = MockObserver::<i32>::new();
    let recorder = Recorder::new();
    let _subscription = observer
        .stream()
        .filter(|x| x % 2 == 0)
        .subscribe(recorder.listener());

    // Act
    observer.feed(1..=6);

    // Assert
    assert_eq!(recorder.values(), vec![2, 4, 6]);

    Ok(())
}

#[test]
fn test_filter_rejecting_everything() -> anyhow::Result<()> {
    // Arrange
    let observer = MockObserver::<i32>::new();
    let recorder = Recorder::new();
    let _subscription = observer.stream().filter(|_| false).subscribe(recorder.listener());

    // Act
    observer.feed([1, 2, 3]);

    // Assert
    assert_eq!(recorder.count(), 0);

    Ok(())
}
