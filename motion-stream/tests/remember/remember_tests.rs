// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use motion_core::lock::Mutex;
use motion_core::{Channel, MotionStream, MotionSubject, Subscription};
use motion_stream::prelude::*;
use motion_test_utils::{MockObserver, Recorder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_remember_forwards_to_every_listener() -> anyhow::Result<()> {
    // Arrange
    let subject = MotionSubject::<i32>::new();
    let remembered = subject.stream().remember();
    let first = Recorder::new();
    let second = Recorder::new();
    let _a = remembered.subscribe(first.listener());
    let _b = remembered.subscribe(second.listener());

    // Act
    subject.next(1);
    subject.next(2);

    // Assert
    assert_eq!(first.values(), vec![1, 2]);
    assert_eq!(second.values(), vec![1, 2]);

    Ok(())
}

#[test]
fn test_remember_replays_latest_value_to_late_listener() -> anyhow::Result<()> {
    // Arrange
    let subject = MotionSubject::<&'static str>::new();
    let remembered = subject.stream().remember();
    let _early = remembered.subscribe(|_| {});
    subject.next("old");
    subject.next("latest");

    // Act
    let late = Recorder::new();
    let _late = remembered.subscribe(late.listener());

    // Assert
    assert_eq!(late.values(), vec!["latest"]);

    subject.next("fresh");
    assert_eq!(late.values(), vec!["latest", "fresh"]);

    Ok(())
}

#[test]
fn test_remember_listener_before_first_value_gets_nothing() -> anyhow::Result<()> {
    // Arrange
    let subject = MotionSubject::<i32>::new();
    let remembered = subject.stream().remember();
    let recorder = Recorder::new();

    // Act
    let _subscription = remembered.subscribe(recorder.listener());

    // Assert
    assert_eq!(recorder.count(), 0);

    Ok(())
}

#[test]
fn test_remember_connects_upstream_once_for_many_listeners() -> anyhow::Result<()> {
    // Arrange
    let observer = MockObserver::<i32>::new();
    let work = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&work);
    let remembered = observer
        .stream()
        .tap(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .remember();

    let recorders: Vec<Recorder<i32>> = (0..3).map(|_| Recorder::new()).collect();
    let _subscriptions: Vec<_> = recorders
        .iter()
        .map(|recorder| remembered.subscribe(recorder.listener()))
        .collect();

    // Act
    observer.feed([10, 20]);

    // Assert
    assert_eq!(observer.connect_count(), 1);
    assert_eq!(work.load(Ordering::SeqCst), 2);
    for recorder in &recorders {
        assert_eq!(recorder.values(), vec![10, 20]);
    }

    Ok(())
}

#[test]
fn test_remember_disconnects_upstream_after_last_listener() -> anyhow::Result<()> {
    // Arrange
    let observer = MockObserver::<i32>::new();
    let remembered = observer.stream().remember();
    let first = remembered.subscribe(|_| {});
    let second = remembered.subscribe(|_| {});

    // Act
    first.unsubscribe();

    // Assert
    assert_eq!(observer.live_connections(), 1);

    second.unsubscribe();
    assert_eq!(observer.live_connections(), 0);
    assert_eq!(observer.disconnect_count(), 1);

    Ok(())
}

#[test]
fn test_remember_keeps_last_value_across_full_disconnect() -> anyhow::Result<()> {
    // Arrange
    let observer = MockObserver::<i32>::new();
    let remembered = observer.stream().remember();
    let first = remembered.subscribe(|_| {});
    observer.next(7);
    first.unsubscribe();

    // Act
    let recorder = Recorder::new();
    let _second = remembered.subscribe(recorder.listener());

    // Assert
    assert_eq!(recorder.values(), vec![7]);
    assert_eq!(observer.connect_count(), 2);
    assert_eq!(observer.live_connections(), 1);

    Ok(())
}

#[test]
fn test_remember_unsubscribed_listener_gets_nothing_more() -> anyhow::Result<()> {
    // Arrange
    let subject = MotionSubject::<i32>::new();
    let remembered = subject.stream().remember();
    let gone = Recorder::new();
    let stays = Recorder::new();
    let gone_subscription = remembered.subscribe(gone.listener());
    let _stays = remembered.subscribe(stays.listener());
    subject.next(1);

    // Act
    gone_subscription.unsubscribe();
    subject.next(2);

    // Assert
    assert_eq!(gone.values(), vec![1]);
    assert_eq!(stays.values(), vec![1, 2]);

    Ok(())
}

#[test]
fn test_remember_listener_subscribing_during_dispatch() -> anyhow::Result<()> {
    // Arrange
    let subject = MotionSubject::<i32>::new();
    let remembered = subject.stream().remember();
    let late = Recorder::new();
    let late_subscriptions = Arc::new(Mutex::new(Vec::new()));

    let inner = remembered.clone();
    let sink = late.clone();
    let store = Arc::clone(&late_subscriptions);
    let _trigger = remembered.subscribe(move |value| {
        if value == 1 {
            store.lock().push(inner.subscribe(sink.listener()));
        }
    });

    // Act
    subject.next(1);
    subject.next(2);

    // Assert
    assert_eq!(late.values(), vec![1, 2]);

    Ok(())
}

#[test]
fn test_remember_listener_removed_during_dispatch_gets_nothing() -> anyhow::Result<()> {
    // Arrange
    let subject = MotionSubject::<i32>::new();
    let remembered = subject.stream().remember();
    let first = Recorder::new();
    let removed = Recorder::new();
    let pending: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let sink = first.listener();
    let to_remove = Arc::clone(&pending);
    let _first = remembered.subscribe(move |value| {
        sink(value);
        let taken = to_remove.lock().take();
        drop(taken);
    });
    *pending.lock() = Some(remembered.subscribe(removed.listener()));

    // Act
    subject.next(1);
    subject.next(2);

    // Assert
    assert_eq!(first.values(), vec![1, 2]);
    assert_eq!(removed.count(), 0);
    assert_eq!(subject.observer_count(), 1);

    Ok(())
}

#[test]
fn test_remember_listener_leaving_during_upstream_connect() -> anyhow::Result<()> {
    // Arrange
    let disconnects = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&disconnects);
    let upstream = MotionStream::new(move |channel: Channel<i32>| {
        channel.dispatch(1);
        let counter = Arc::clone(&counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    });
    let remembered = upstream.remember();
    let brief = Recorder::new();

    let inner = remembered.clone();
    let sink = brief.clone();
    let first = remembered.subscribe(move |_| {
        let short_lived = inner.subscribe(sink.listener());
        short_lived.unsubscribe();
    });

    // Act
    assert_eq!(disconnects.load(Ordering::SeqCst), 0);
    first.unsubscribe();

    // Assert
    assert_eq!(brief.values(), vec![1]);
    assert_eq!(disconnects.load(Ordering::SeqCst), 1);

    Ok(())
}
