// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed setting for home-tier units.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Fan speed of a home-tier unit.
///
/// Each speed fixes the unit's power draw and air intake rate. Central
/// units ignore the fan speed entirely; see
/// [`Tier`](crate::types::Tier).
///
/// # Examples
///
/// ```
/// use aircon_lib::types::FanSpeed;
///
/// let speed: FanSpeed = "high".parse().unwrap();
/// assert_eq!(speed, FanSpeed::High);
/// assert_eq!(speed.power_watts(), 7500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FanSpeed {
    /// Low speed: 5000 W, 0.178 m³/s intake.
    #[default]
    Low,
    /// Mid speed: 6000 W, 0.213 m³/s intake.
    Mid,
    /// High speed: 7500 W, 0.267 m³/s intake.
    High,
}

impl FanSpeed {
    /// Returns the stored index (0-2).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Mid => 1,
            Self::High => 2,
        }
    }

    /// Creates a fan speed from a stored index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Low),
            1 => Some(Self::Mid),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Power drawn at this speed, in watts.
    #[must_use]
    pub const fn power_watts(self) -> f64 {
        match self {
            Self::Low => 5000.0,
            Self::Mid => 6000.0,
            Self::High => 7500.0,
        }
    }

    /// Air volume processed per second at this speed, in m³/s.
    #[must_use]
    pub const fn intake_rate(self) -> f64 {
        match self {
            Self::Low => 0.178,
            Self::Mid => 0.213,
            Self::High => 0.267,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    /// Parses a user argument: `1`/`2`/`3` or `low`/`mid`/`high`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "low" => Ok(Self::Low),
            "2" | "mid" => Ok(Self::Mid),
            "3" | "high" => Ok(Self::High),
            _ => Err(ValueError::InvalidFanSpeed(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for speed in [FanSpeed::Low, FanSpeed::Mid, FanSpeed::High] {
            assert_eq!(FanSpeed::from_index(speed.index()), Some(speed));
        }
        assert_eq!(FanSpeed::from_index(3), None);
        assert_eq!(FanSpeed::from_index(99), None);
    }

    #[test]
    fn tables() {
        assert_eq!(FanSpeed::Low.power_watts(), 5000.0);
        assert_eq!(FanSpeed::Mid.power_watts(), 6000.0);
        assert_eq!(FanSpeed::High.power_watts(), 7500.0);
        assert_eq!(FanSpeed::Low.intake_rate(), 0.178);
        assert_eq!(FanSpeed::Mid.intake_rate(), 0.213);
        assert_eq!(FanSpeed::High.intake_rate(), 0.267);
    }

    #[test]
    fn parse_numbers_and_words() {
        assert_eq!("1".parse::<FanSpeed>().unwrap(), FanSpeed::Low);
        assert_eq!("2".parse::<FanSpeed>().unwrap(), FanSpeed::Mid);
        assert_eq!("3".parse::<FanSpeed>().unwrap(), FanSpeed::High);
        assert_eq!("low".parse::<FanSpeed>().unwrap(), FanSpeed::Low);
        assert_eq!("MID".parse::<FanSpeed>().unwrap(), FanSpeed::Mid);
        assert_eq!(" high ".parse::<FanSpeed>().unwrap(), FanSpeed::High);
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!(
            "0".parse::<FanSpeed>(),
            Err(ValueError::InvalidFanSpeed(_))
        ));
        assert!("4".parse::<FanSpeed>().is_err());
        assert!("turbo".parse::<FanSpeed>().is_err());
    }

    #[test]
    fn default_is_low() {
        assert_eq!(FanSpeed::default(), FanSpeed::Low);
    }
}
