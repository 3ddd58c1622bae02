// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for motion streams.
//!
//! This crate is designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `MockObserver<T>`
//!
//! A controllable source. Build a stream from it, subscribe, then push values
//! by hand. It also counts how often the stream was connected and disconnected,
//! which is how tests observe upstream activation.
//!
//! ```rust
//! use motion_test_utils::{MockObserver, Recorder};
//!
//! let observer = MockObserver::<i32>::new();
//! let recorder = Recorder::new();
//!
//! let _subscription = observer.stream().subscribe(recorder.listener());
//! observer.next(1);
//!
//! assert_eq!(recorder.values(), vec![1]);
//! assert_eq!(observer.connect_count(), 1);
//! ```
//!
//! ## `FakeClock`
//!
//! A [`Clock`](motion_core::Clock) that only moves when told to:
//!
//! ```rust
//! use motion_core::Clock;
//! use motion_test_utils::FakeClock;
//!
//! let clock = FakeClock::new(100.0);
//! clock.advance(16.0);
//! assert_eq!(clock.now(), 116.0);
//! ```
//!
//! # Module Organization
//!
//! - `mock_observer` - `MockObserver<T>` controllable source
//! - `fake_clock` - `FakeClock` deterministic time
//! - `recorder` - `Recorder<T>` listener spy
//! - `fixtures` - canned gesture traces
//! - `helpers` - float assertions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fake_clock;
pub mod fixtures;
pub mod helpers;
pub mod mock_observer;
pub mod recorder;

pub use fake_clock::FakeClock;
pub use helpers::{assert_approx_eq, assert_point_approx_eq};
pub use mock_observer::MockObserver;
pub use recorder::Recorder;
