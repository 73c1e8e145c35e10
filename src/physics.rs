// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ideal-gas temperature model.
//!
//! The running unit moves the room temperature toward the target in two
//! phases. While the remaining gap is large the change is linear at the
//! whole-room rate; once the gap drops below the per-slice threshold the
//! temperature decays exponentially toward the target. When the unit is
//! off, the room drifts linearly back to the ambient temperature.
//!
//! The discrete-time decay step and the truncated `t1` split are
//! deliberate; downstream regression values depend on them exactly.

/// Ideal gas constant, J/(mol·K).
const IDEAL_GAS_R: f64 = 8.314;

/// Degrees of freedom of a polyatomic gas.
const DEGREES_OF_FREEDOM: f64 = 6.0;

/// Molar volume of a gas at STP, L/mol.
const MOLAR_VOLUME: f64 = 22.4;

/// Temperature change per second while the unit is off, °C/s.
pub const OFF_DRIFT_RATE: f64 = 0.05;

/// Temperature-change rate (°C/s) that `power` watts achieve across
/// `volume` cubic metres of air.
fn rate_per_second(power: f64, volume: f64) -> f64 {
    power / (volume * 1000.0 / MOLAR_VOLUME) / (DEGREES_OF_FREEDOM / 2.0) / IDEAL_GAS_R
}

/// Sign of a temperature gap: -1, 0 or +1.
fn direction(gap: f64) -> f64 {
    if gap > 0.0 {
        1.0
    } else if gap < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Rounds a temperature to one decimal place.
pub(crate) fn round1(temp: f64) -> f64 {
    (temp * 10.0).round() / 10.0
}

/// Advances the room temperature of a running unit by `elapsed_secs`.
///
/// `room_volume` is the whole room in m³, `intake_rate` the air volume one
/// slice of the unit processes per second, `power` the heating/cooling
/// power in watts. The result is rounded to one decimal place.
///
/// Phase split: as long as the gap to `target`, less the per-slice rate
/// threshold, still exceeds what the whole-room rate covers in
/// `elapsed_secs`, the change is linear. Otherwise `t1` seconds of linear
/// change are applied first and the remainder decays exponentially with
/// base `1 - intake_rate / room_volume`.
#[must_use]
pub fn cooling_step(
    room_volume: f64,
    intake_rate: f64,
    target: f64,
    current: f64,
    elapsed_secs: i64,
    power: f64,
) -> f64 {
    let gap = target - current;
    let dir = direction(gap);
    let threshold = rate_per_second(power, intake_rate);
    let room_rate = rate_per_second(power, room_volume);

    #[allow(clippy::cast_precision_loss)]
    let elapsed = elapsed_secs as f64;

    let new_temp = if gap.abs() - threshold >= room_rate * elapsed {
        current + dir * room_rate * elapsed
    } else {
        // Truncation toward zero, then floored at zero: a gap already
        // inside the threshold spends no time in the linear phase.
        #[allow(clippy::cast_possible_truncation)]
        let t1 = (((gap.abs() - threshold) / room_rate).trunc() as i64).max(0);
        #[allow(clippy::cast_precision_loss)]
        let temp1 = current + dir * room_rate * t1 as f64;
        let base = 1.0 - intake_rate / room_volume;
        #[allow(clippy::cast_precision_loss)]
        let exponent = (elapsed_secs - t1 - 1) as f64;
        base.powf(exponent) * (temp1 - target) + target
    };

    round1(new_temp)
}

/// Advances the room temperature of a switched-off unit by `elapsed_secs`.
///
/// Linear drift toward `ambient` at [`OFF_DRIFT_RATE`]; if the drift would
/// overshoot, the result is clamped to exactly `ambient`. Not rounded.
#[must_use]
pub fn drift_step(ambient: f64, current: f64, elapsed_secs: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let new_temp = current + direction(ambient - current) * elapsed_secs as f64 * OFF_DRIFT_RATE;
    if (ambient - current) * (ambient - new_temp) < 0.0 {
        ambient
    } else {
        new_temp
    }
}
