// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the air conditioner library.
//!
//! Every variant's `Display` text is the message shown to the chat user.
//! Value and transition errors are recoverable: the current command is
//! aborted before any state mutation. Store errors are fatal for the
//! request — a half-written snapshot is never reported as success.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A command argument failed validation.
    #[error("{0}")]
    Value(#[from] ValueError),

    /// A state transition is not legal for the unit's current tier.
    #[error("{0}")]
    Transition(#[from] TransitionError),

    /// Persisting or loading the registry snapshot failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// No air conditioner exists for this group yet.
    #[error("no air conditioner installed here yet — send \"ac on\" to install one")]
    NotInstalled,

    /// The unit exists but is switched off and the command needs it on.
    #[error("the air conditioner is not on!")]
    NotRunning,
}

/// Errors related to command-argument validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The argument did not parse as an integer at all.
    #[error("expected a whole number between {min} and {max}")]
    NotAnInteger {
        /// Lower bound of the accepted range.
        min: i64,
        /// Upper bound of the accepted range.
        max: i64,
    },

    /// The argument parsed but falls outside the accepted range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Lower bound of the accepted range.
        min: i64,
        /// Upper bound of the accepted range.
        max: i64,
        /// The value that was provided.
        actual: i64,
    },

    /// The one temperature nobody is allowed to set.
    #[error("{0}? a unit that smelly is not worth installing")]
    Refused(i64),

    /// An invalid fan-speed argument was provided.
    #[error("fan speed can only be 1, 2, 3 or low, mid, high")]
    InvalidFanSpeed(String),
}

/// Errors for transitions the unit's tier does not allow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Fan speed was requested on a tier without an adjustable fan.
    #[error("only home units have an adjustable fan speed!")]
    FanSpeedFixed,

    /// Upgrade requested past the highest tier.
    #[error("this is already the highest tier of air conditioner!")]
    AlreadyHighestTier,

    /// Downgrade requested past the lowest tier.
    #[error("this is already the most basic air conditioner!")]
    AlreadyLowestTier,
}

/// Errors related to the persisted registry snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
