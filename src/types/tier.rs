// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hardware tier of a unit.

use std::fmt;

/// Hardware tier of an air-conditioning unit.
///
/// The tier decides how power and airflow scale with the room:
/// a [`Home`](Tier::Home) unit uses the fan-speed tables, a
/// [`Central`](Tier::Central) installation deploys one 7500 W slice
/// per started 100 m³ of room volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    /// Household split unit with an adjustable fan.
    #[default]
    Home,
    /// Central installation scaled to the room, fixed airflow.
    Central,
}

impl Tier {
    /// Power of one central slice, in watts.
    pub const CENTRAL_SLICE_POWER: f64 = 7500.0;

    /// Intake rate of one central slice, in m³/s.
    pub const CENTRAL_SLICE_INTAKE: f64 = 0.577;

    /// Room volume served by one central slice, in m³.
    pub const CENTRAL_SLICE_VOLUME: f64 = 100.0;

    /// Returns the stored index (0-1).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Home => 0,
            Self::Central => 1,
        }
    }

    /// Creates a tier from a stored index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Home),
            1 => Some(Self::Central),
            _ => None,
        }
    }

    /// The next tier up, or `None` at the top.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Home => Some(Self::Central),
            Self::Central => None,
        }
    }

    /// The next tier down, or `None` at the bottom.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Home => None,
            Self::Central => Some(Self::Home),
        }
    }

    /// Number of central slices deployed for a room of `volume` m³.
    #[must_use]
    pub fn central_slices(volume: f64) -> f64 {
        (volume / Self::CENTRAL_SLICE_VOLUME).floor() + 1.0
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home unit",
            Self::Central => "central unit",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
