// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constrained value types used throughout the library.
//!
//! Each type validates on construction, so downstream code can assume
//! every value it holds is legal.

mod fan_speed;
mod temperature;
mod tier;

pub use fan_speed::FanSpeed;
pub use temperature::TempSetting;
pub use tier::Tier;
