// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-clock abstraction.
//!
//! Elapsed time is the only external input to the temperature model, so
//! the clock is a trait seam: production code uses [`SystemClock`],
//! tests substitute a fixed clock and step it by hand.

/// Source of the current wall-clock time in whole seconds since the
/// Unix epoch.
pub trait Clock {
    /// Returns the current time in epoch seconds.
    fn now_seconds(&self) -> i64;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
