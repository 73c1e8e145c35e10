// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One simulated air-conditioning unit and its lazy time-stepping.
//!
//! There is no background clock. [`AirconUnit::advance`] brings the room
//! temperature up to date whenever the unit is next observed or mutated,
//! and callers re-advance before changing any field that alters future
//! evolution, so the temperature at the moment of a change is locked in
//! first.

use crate::error::TransitionError;
use crate::physics;
use crate::types::{FanSpeed, TempSetting, Tier};

/// Room volume assumed per group member, in m³.
const VOLUME_PER_MEMBER: u32 = 2;

/// Smallest room a unit is ever installed in, in m³.
const MIN_ROOM_VOLUME: u32 = 20;

/// A simulated air-conditioning unit for one chat group.
///
/// Created on the first power-on for a group and never deleted. All
/// mutating operations assume the caller has already called
/// [`advance`](Self::advance) with the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct AirconUnit {
    is_on: bool,
    env_temp: f64,
    now_temp: f64,
    set_temp: f64,
    last_update: i64,
    room_volume: f64,
    fan_speed: FanSpeed,
    tier: Tier,
    balance: i64,
}

impl AirconUnit {
    /// Creates a unit for a group of `member_count` people at time `now`.
    ///
    /// The room is sized at two cubic metres per member with a floor of
    /// 20 m³. The unit starts on, targeting 26 °C in a 33 °C room.
    #[must_use]
    pub fn new(member_count: u32, now: i64) -> Self {
        let volume = (member_count * VOLUME_PER_MEMBER).max(MIN_ROOM_VOLUME);
        Self {
            is_on: true,
            env_temp: TempSetting::DEFAULT_AMBIENT.celsius(),
            now_temp: TempSetting::DEFAULT_AMBIENT.celsius(),
            set_temp: TempSetting::DEFAULT_TARGET.celsius(),
            last_update: now,
            room_volume: f64::from(volume),
            fan_speed: FanSpeed::default(),
            tier: Tier::default(),
            balance: 0,
        }
    }

    /// Rebuilds a unit from repaired store fields.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn restore(
        is_on: bool,
        env_temp: f64,
        now_temp: f64,
        set_temp: f64,
        last_update: i64,
        room_volume: f64,
        fan_speed: FanSpeed,
        tier: Tier,
        balance: i64,
    ) -> Self {
        Self {
            is_on,
            env_temp,
            now_temp,
            set_temp,
            last_update,
            room_volume,
            fan_speed,
            tier,
            balance,
        }
    }

    // ========== Lazy update ==========

    /// Advances the room temperature to wall-clock time `now`.
    ///
    /// Computes the seconds elapsed since the last update and steps the
    /// physics model once over the whole span. `last_update` never moves
    /// backwards; when no time has passed the temperature is left
    /// untouched, so advancing twice at the same instant is a no-op.
    pub fn advance(&mut self, now: i64) {
        let elapsed = (now - self.last_update).max(0);
        if elapsed == 0 {
            return;
        }

        let new_temp = if self.is_on {
            let (power, intake) = self.heat_output();
            physics::cooling_step(
                self.room_volume,
                intake,
                self.set_temp,
                self.now_temp,
                elapsed,
                power,
            )
        } else {
            physics::drift_step(self.env_temp, self.now_temp, elapsed)
        };

        tracing::trace!(
            elapsed,
            from = self.now_temp,
            to = new_temp,
            on = self.is_on,
            "advanced unit"
        );
        self.now_temp = new_temp;
        self.last_update = now;
    }

    /// Power and intake rate for the current tier, as `(watts, m³/s)`.
    ///
    /// A home unit reads the fan-speed tables; a central installation
    /// scales one slice per started 100 m³ of room.
    #[must_use]
    pub fn heat_output(&self) -> (f64, f64) {
        match self.tier {
            Tier::Home => (self.fan_speed.power_watts(), self.fan_speed.intake_rate()),
            Tier::Central => {
                let slices = Tier::central_slices(self.room_volume);
                (
                    slices * Tier::CENTRAL_SLICE_POWER,
                    slices * Tier::CENTRAL_SLICE_INTAKE,
                )
            }
        }
    }

    // ========== Transitions ==========

    /// Switches the unit on.
    pub fn power_on(&mut self) {
        self.is_on = true;
    }

    /// Switches the unit off; the room starts drifting toward ambient.
    pub fn power_off(&mut self) {
        self.is_on = false;
    }

    /// Sets the target temperature the unit works toward while on.
    pub fn set_target(&mut self, target: TempSetting) {
        self.set_temp = target.celsius();
    }

    /// Sets the ambient temperature the room drifts toward while off.
    pub fn set_ambient(&mut self, ambient: TempSetting) {
        self.env_temp = ambient.celsius();
    }

    /// Sets the fan speed.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::FanSpeedFixed`] unless the unit is a
    /// home tier — only home units have an adjustable fan.
    pub fn set_fan_speed(&mut self, speed: FanSpeed) -> Result<(), TransitionError> {
        if self.tier != Tier::Home {
            return Err(TransitionError::FanSpeedFixed);
        }
        self.fan_speed = speed;
        Ok(())
    }

    /// Upgrades the unit one tier.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyHighestTier`] at the top.
    pub fn upgrade(&mut self) -> Result<Tier, TransitionError> {
        let next = self.tier.next().ok_or(TransitionError::AlreadyHighestTier)?;
        self.tier = next;
        Ok(next)
    }

    /// Downgrades the unit one tier.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyLowestTier`] at the bottom.
    pub fn downgrade(&mut self) -> Result<Tier, TransitionError> {
        let previous = self
            .tier
            .previous()
            .ok_or(TransitionError::AlreadyLowestTier)?;
        self.tier = previous;
        Ok(previous)
    }

    // ========== Accessors ==========

    /// Whether the unit is running.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Current simulated room temperature, °C.
    #[must_use]
    pub const fn now_temp(&self) -> f64 {
        self.now_temp
    }

    /// Target temperature while on, °C.
    #[must_use]
    pub const fn set_temp(&self) -> f64 {
        self.set_temp
    }

    /// Ambient temperature the room drifts toward while off, °C.
    #[must_use]
    pub const fn env_temp(&self) -> f64 {
        self.env_temp
    }

    /// Epoch seconds of the last temperature advance.
    #[must_use]
    pub const fn last_update(&self) -> i64 {
        self.last_update
    }

    /// Room volume, m³.
    #[must_use]
    pub const fn room_volume(&self) -> f64 {
        self.room_volume
    }

    /// Fan speed (meaningful for home units only).
    #[must_use]
    pub const fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    /// Hardware tier.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Reserved accounting balance; no command touches it yet.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_unit_defaults() {
        let unit = AirconUnit::new(10, 1000);
        assert!(unit.is_on());
        assert_eq!(unit.room_volume(), 20.0);
        assert_eq!(unit.set_temp(), 26.0);
        assert_eq!(unit.env_temp(), 33.0);
        assert_eq!(unit.now_temp(), 33.0);
        assert_eq!(unit.last_update(), 1000);
        assert_eq!(unit.fan_speed(), FanSpeed::Low);
        assert_eq!(unit.tier(), Tier::Home);
        assert_eq!(unit.balance(), 0);
    }

    #[test]
    fn room_volume_scales_with_members_above_floor() {
        assert_eq!(AirconUnit::new(10, 0).room_volume(), 20.0);
        assert_eq!(AirconUnit::new(0, 0).room_volume(), 20.0);
        assert_eq!(AirconUnit::new(150, 0).room_volume(), 300.0);
    }

    #[test]
    fn advance_cools_toward_target() {
        let mut unit = AirconUnit::new(10, 0);
        unit.advance(60);
        assert_eq!(unit.now_temp(), 30.1);
        assert_eq!(unit.last_update(), 60);
        unit.advance(120);
        assert_eq!(unit.now_temp(), 28.4);
    }

    #[test]
    fn advance_same_instant_is_a_no_op() {
        let mut unit = AirconUnit::new(10, 0);
        unit.advance(60);
        let temp = unit.now_temp();
        unit.advance(60);
        assert_eq!(unit.now_temp(), temp);
        assert_eq!(unit.last_update(), 60);
    }

    #[test]
    fn advance_never_moves_backwards() {
        let mut unit = AirconUnit::new(10, 100);
        unit.advance(40);
        assert_eq!(unit.last_update(), 100);
        assert_eq!(unit.now_temp(), 33.0);
    }

    #[test]
    fn off_unit_drifts_to_ambient_and_stops() {
        let mut unit = AirconUnit::new(10, 0);
        unit.advance(3600);
        unit.power_off();
        let cooled = unit.now_temp();
        assert_eq!(cooled, 26.0);
        unit.advance(3700);
        assert_eq!(unit.now_temp(), 26.0 + 100.0 * physics::OFF_DRIFT_RATE);
        // Long enough to reach ambient exactly, then hold.
        unit.advance(10_000);
        assert_eq!(unit.now_temp(), 33.0);
        unit.advance(20_000);
        assert_eq!(unit.now_temp(), 33.0);
    }

    #[test]
    fn fan_speed_changes_cooling_rate() {
        let mut low = AirconUnit::new(10, 0);
        let mut high = AirconUnit::new(10, 0);
        high.set_fan_speed(FanSpeed::High).unwrap();
        low.advance(60);
        high.advance(60);
        assert_eq!(low.now_temp(), 30.1);
        assert_eq!(high.now_temp(), 29.2);
    }

    #[test]
    fn fan_speed_rejected_on_central() {
        let mut unit = AirconUnit::new(10, 0);
        unit.upgrade().unwrap();
        assert_eq!(
            unit.set_fan_speed(FanSpeed::High),
            Err(TransitionError::FanSpeedFixed)
        );
        assert_eq!(unit.fan_speed(), FanSpeed::Low);
    }

    #[test]
    fn tier_chain_end_stops() {
        let mut unit = AirconUnit::new(10, 0);
        assert_eq!(unit.downgrade(), Err(TransitionError::AlreadyLowestTier));
        assert_eq!(unit.upgrade(), Ok(Tier::Central));
        assert_eq!(unit.upgrade(), Err(TransitionError::AlreadyHighestTier));
        assert_eq!(unit.downgrade(), Ok(Tier::Home));
    }

    #[test]
    fn central_heat_output_scales_with_room() {
        let mut small = AirconUnit::new(10, 0);
        small.upgrade().unwrap();
        assert_eq!(small.heat_output(), (7500.0, 0.577));

        let mut big = AirconUnit::new(125, 0);
        big.upgrade().unwrap();
        let (power, intake) = big.heat_output();
        assert_eq!(power, 3.0 * 7500.0);
        assert_eq!(intake, 3.0 * 0.577);
    }

    #[test]
    fn central_cools_faster_than_home_low() {
        let mut unit = AirconUnit::new(10, 0);
        unit.upgrade().unwrap();
        unit.advance(60);
        assert_eq!(unit.now_temp(), 27.2);
    }

    #[test]
    fn retarget_locks_in_current_temperature_first() {
        let mut unit = AirconUnit::new(10, 0);
        unit.advance(60);
        unit.set_target(TempSetting::new(30).unwrap());
        assert_eq!(unit.now_temp(), 30.1);
        unit.advance(120);
        // Now heating toward 30 from 30.1.
        assert!(unit.now_temp() <= 30.1);
        assert!(unit.now_temp() >= 30.0);
    }
}
