// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status text shown to the chat user.

use std::fmt;

use crate::physics::round1;
use crate::types::Tier;
use crate::unit::AirconUnit;

/// A formatted status snapshot of one unit.
///
/// The fan-speed line only appears while a home unit is running; the
/// room temperature is rounded to one decimal for display (the stored
/// value keeps its full precision).
///
/// # Examples
///
/// ```
/// use aircon_lib::report::StatusReport;
/// use aircon_lib::unit::AirconUnit;
///
/// let unit = AirconUnit::new(10, 0);
/// let text = StatusReport::new(&unit).to_string();
/// assert!(text.contains("room temperature 33 °C"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatusReport<'a> {
    unit: &'a AirconUnit,
}

impl<'a> StatusReport<'a> {
    /// Builds a report for `unit`.
    #[must_use]
    pub const fn new(unit: &'a AirconUnit) -> Self {
        Self { unit }
    }
}

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_on() && self.unit.tier() == Tier::Home {
            writeln!(f, "fan speed {}", self.unit.fan_speed())?;
        }
        writeln!(f, "set temperature {} °C", self.unit.set_temp())?;
        writeln!(f, "room temperature {} °C", round1(self.unit.now_temp()))?;
        write!(f, "ambient temperature {} °C", self.unit.env_temp())
    }
}
