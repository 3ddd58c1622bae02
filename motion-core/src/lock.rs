// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronization primitive shared by every stateful operator.
//!
//! Guards are never held while a listener or connector runs; callers copy what
//! they need out of the guard and dispatch afterwards.

pub use parking_lot::{Mutex, MutexGuard};
