// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer temperature setting in degrees Celsius.

use std::fmt;

use crate::error::ValueError;

/// A temperature setting in whole degrees Celsius.
///
/// Used for both the target temperature of a running unit and the
/// ambient temperature the room drifts toward when it is off. Values
/// range from absolute zero to a generous 999999 °C.
///
/// One in-range value is refused on principle: see [`TempSetting::REFUSED`].
///
/// # Examples
///
/// ```
/// use aircon_lib::types::TempSetting;
///
/// let target = TempSetting::parse("18").unwrap();
/// assert_eq!(target.value(), 18);
/// assert!(TempSetting::parse("-300").is_err());
/// assert!(TempSetting::parse("114514").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TempSetting(i32);

impl TempSetting {
    /// Minimum setting (absolute zero).
    pub const MIN: i32 = -273;

    /// Maximum setting.
    pub const MAX: i32 = 999_999;

    /// Default target temperature of a new unit.
    pub const DEFAULT_TARGET: Self = Self(26);

    /// Default ambient temperature of a new unit.
    pub const DEFAULT_AMBIENT: Self = Self(33);

    /// The one value that is always refused, in range or not.
    pub const REFUSED: i64 = 114_514;

    /// Creates a temperature setting.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if the value is outside
    /// [[`MIN`](Self::MIN), [`MAX`](Self::MAX)].
    pub fn new(value: i32) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
                actual: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Parses a user argument into a temperature setting.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotAnInteger`] when the argument does not
    /// parse, [`ValueError::OutOfRange`] when it is out of range, and
    /// [`ValueError::Refused`] for the one value that is rejected even
    /// though it is in range.
    pub fn parse(arg: &str) -> Result<Self, ValueError> {
        let value: i64 = arg
            .trim()
            .parse()
            .map_err(|_| ValueError::NotAnInteger {
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
            })?;
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
                actual: value,
            });
        }
        if value == Self::REFUSED {
            return Err(ValueError::Refused(value));
        }
        // In range, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(value as i32))
    }

    /// Returns the setting in whole degrees.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns the setting in degrees as a float.
    #[must_use]
    pub const fn celsius(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for TempSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_in_range() {
        assert_eq!(TempSetting::new(-273).unwrap().value(), -273);
        assert_eq!(TempSetting::new(999_999).unwrap().value(), 999_999);
        assert_eq!(TempSetting::new(26).unwrap().value(), 26);
    }

    #[test]
    fn new_out_of_range() {
        assert!(TempSetting::new(-274).is_err());
        assert!(TempSetting::new(1_000_000).is_err());
    }

    #[test]
    fn parse_plain_integer() {
        assert_eq!(TempSetting::parse("18").unwrap().value(), 18);
        assert_eq!(TempSetting::parse(" -10 ").unwrap().value(), -10);
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            TempSetting::parse("cold"),
            Err(ValueError::NotAnInteger { .. })
        ));
        assert!(TempSetting::parse("26.5").is_err());
        assert!(TempSetting::parse("").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        assert!(matches!(
            TempSetting::parse("-300"),
            Err(ValueError::OutOfRange { actual: -300, .. })
        ));
        // Larger than i32 but still rejected cleanly.
        assert!(TempSetting::parse("99999999999").is_err());
    }

    #[test]
    fn refused_value_always_rejected() {
        assert!(matches!(
            TempSetting::parse("114514"),
            Err(ValueError::Refused(114_514))
        ));
        // Only refused through parsing, where user input arrives.
        assert!(TempSetting::new(114_514).is_ok());
    }

    #[test]
    fn defaults() {
        assert_eq!(TempSetting::DEFAULT_TARGET.value(), 26);
        assert_eq!(TempSetting::DEFAULT_AMBIENT.value(), 33);
    }
}
