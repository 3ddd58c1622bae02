// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Every operator trait, for glob import.
//!
//! ```
//! use motion_stream::prelude::*;
//! ```

pub use crate::dedupe::DedupeExt;
pub use crate::filter::FilterExt;
pub use crate::ignore_until::IgnoreUntilExt;
pub use crate::into_receiver::{IntoReceiverExt, MotionReceiver};
pub use crate::map::MapExt;
pub use crate::remember::RememberExt;
pub use crate::sliding_window::{SlidingWindowExt, Window};
pub use crate::tap::TapExt;
pub use crate::timestamp::{TimestampExt, Timestampable};
pub use crate::velocity::{Kinematic, VelocityConfig, VelocityExt};
