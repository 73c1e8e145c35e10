// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry of units and its flat JSON snapshot.
//!
//! The whole registry is one JSON object, group id → unit record, read
//! in full at open and rewritten in full on every save. Loading is
//! self-healing: each field is validated against its legal range and
//! falls back to a documented default when missing or out of range, so
//! a hand-edited or drifted snapshot never crashes the process.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::{FanSpeed, TempSetting, Tier};
use crate::unit::AirconUnit;

/// Legal range and default for the accounting balance.
const BALANCE_RANGE: (i64, i64, i64) = (-1_000_000, 1_000_000, 0);

/// On-disk shape of one unit record.
///
/// Every range-checked field is optional here; [`StoredUnit::repair`]
/// turns the raw record into a validated [`AirconUnit`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct StoredUnit {
    #[serde(default)]
    is_on: bool,
    env_temp: Option<f64>,
    now_temp: Option<f64>,
    set_temp: Option<f64>,
    #[serde(default)]
    last_update: i64,
    #[serde(default)]
    room_volume: f64,
    fan_speed: Option<u8>,
    tier: Option<u8>,
    balance: Option<i64>,
}

impl StoredUnit {
    fn from_unit(unit: &AirconUnit) -> Self {
        Self {
            is_on: unit.is_on(),
            env_temp: Some(unit.env_temp()),
            now_temp: Some(unit.now_temp()),
            set_temp: Some(unit.set_temp()),
            last_update: unit.last_update(),
            room_volume: unit.room_volume(),
            fan_speed: Some(unit.fan_speed().index()),
            tier: Some(unit.tier().index()),
            balance: Some(unit.balance()),
        }
    }

    /// Validate-or-default every field, producing a usable unit.
    fn repair(self) -> AirconUnit {
        let set_temp = repair_temp(self.set_temp, TempSetting::DEFAULT_TARGET);
        let env_temp = repair_temp(self.env_temp, TempSetting::DEFAULT_AMBIENT);
        let fan_speed = self
            .fan_speed
            .and_then(FanSpeed::from_index)
            .unwrap_or_default();
        let tier = self.tier.and_then(Tier::from_index).unwrap_or_default();
        let balance = match self.balance {
            Some(b) if (BALANCE_RANGE.0..=BALANCE_RANGE.1).contains(&b) => b,
            _ => BALANCE_RANGE.2,
        };
        let room_volume = if self.room_volume > 0.0 {
            self.room_volume
        } else {
            20.0
        };
        AirconUnit::restore(
            self.is_on,
            env_temp,
            self.now_temp.unwrap_or(env_temp),
            set_temp,
            self.last_update,
            room_volume,
            fan_speed,
            tier,
            balance,
        )
    }
}

fn repair_temp(value: Option<f64>, default: TempSetting) -> f64 {
    match value {
        Some(t)
            if (f64::from(TempSetting::MIN)..=f64::from(TempSetting::MAX)).contains(&t) =>
        {
            t
        }
        _ => default.celsius(),
    }
}

/// In-memory registry of all units, backed by one snapshot file.
///
/// There is one unit per group id, created on the first power-on and
/// never deleted. The registry is constructed once at process start and
/// passed to whoever handles commands; no ambient global state.
///
/// # Examples
///
/// ```no_run
/// use aircon_lib::store::Registry;
///
/// let mut registry = Registry::open("air_con.json")?;
/// registry.create("group-1".to_string(), 10, 1_700_000_000);
/// registry.save()?;
/// # Ok::<(), aircon_lib::error::StoreError>(())
/// ```
#[derive(Debug)]
pub struct Registry {
    path: PathBuf,
    units: HashMap<String, AirconUnit>,
}

impl Registry {
    /// Opens the registry at `path`, loading and repairing every record.
    ///
    /// A missing snapshot file yields an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file exists but cannot be read
    /// or is not valid JSON.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let units = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let raw: HashMap<String, StoredUnit> = serde_json::from_str(&contents)?;
            tracing::info!(count = raw.len(), path = %path.display(), "loaded registry");
            raw.into_iter().map(|(id, u)| (id, u.repair())).collect()
        } else {
            tracing::info!(path = %path.display(), "no snapshot yet, starting empty");
            HashMap::new()
        };
        Ok(Self { path, units })
    }

    /// Looks up the unit for a group.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AirconUnit> {
        self.units.get(id)
    }

    /// Looks up the unit for a group, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut AirconUnit> {
        self.units.get_mut(id)
    }

    /// Creates a unit for a group and returns it.
    ///
    /// Replaces nothing: callers check [`get`](Self::get) first; a
    /// group only ever gets one unit.
    pub fn create(&mut self, id: String, member_count: u32, now: i64) -> &mut AirconUnit {
        tracing::debug!(group = %id, member_count, "installing unit");
        self.units
            .entry(id)
            .or_insert_with(|| AirconUnit::new(member_count, now))
    }

    /// Number of installed units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no unit is installed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Persists the full registry, atomically replacing the snapshot.
    ///
    /// The new snapshot is written to a sibling temp file and renamed
    /// over the old one, so a crash mid-write never leaves a truncated
    /// file behind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when writing fails; the request that
    /// triggered the save must treat this as fatal.
    pub fn save(&self) -> Result<(), StoreError> {
        let raw: HashMap<&String, StoredUnit> = self
            .units
            .iter()
            .map(|(id, unit)| (id, StoredUnit::from_unit(unit)))
            .collect();
        let contents = serde_json::to_string_pretty(&raw)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(count = self.units.len(), path = %self.path.display(), "saved registry");
        Ok(())
    }

    /// The snapshot path this registry persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair_json(json: &str) -> AirconUnit {
        let raw: StoredUnit = serde_json::from_str(json).unwrap();
        raw.repair()
    }

    #[test]
    fn repair_preserves_valid_record() {
        let unit = repair_json(
            r#"{
                "is_on": true,
                "env_temp": 33.0,
                "now_temp": 28.4,
                "set_temp": 18.0,
                "last_update": 1700000000,
                "room_volume": 40.0,
                "fan_speed": 2,
                "tier": 1,
                "balance": 500
            }"#,
        );
        assert!(unit.is_on());
        assert_eq!(unit.now_temp(), 28.4);
        assert_eq!(unit.set_temp(), 18.0);
        assert_eq!(unit.room_volume(), 40.0);
        assert_eq!(unit.fan_speed(), FanSpeed::High);
        assert_eq!(unit.tier(), Tier::Central);
        assert_eq!(unit.balance(), 500);
    }

    #[test]
    fn repair_out_of_range_fan_speed() {
        let unit = repair_json(r#"{"fan_speed": 99}"#);
        assert_eq!(unit.fan_speed(), FanSpeed::Low);
    }

    #[test]
    fn repair_missing_fields_to_defaults() {
        let unit = repair_json("{}");
        assert!(!unit.is_on());
        assert_eq!(unit.set_temp(), 26.0);
        assert_eq!(unit.env_temp(), 33.0);
        assert_eq!(unit.now_temp(), 33.0);
        assert_eq!(unit.fan_speed(), FanSpeed::Low);
        assert_eq!(unit.tier(), Tier::Home);
        assert_eq!(unit.balance(), 0);
        assert_eq!(unit.room_volume(), 20.0);
    }

    #[test]
    fn repair_out_of_range_temperatures() {
        let unit = repair_json(r#"{"set_temp": -500.0, "env_temp": 1e9}"#);
        assert_eq!(unit.set_temp(), 26.0);
        assert_eq!(unit.env_temp(), 33.0);
    }

    #[test]
    fn repair_out_of_range_balance_and_tier() {
        let unit = repair_json(r#"{"balance": 2000000, "tier": 7}"#);
        assert_eq!(unit.balance(), 0);
        assert_eq!(unit.tier(), Tier::Home);
    }

    #[test]
    fn stored_unit_round_trip() {
        let mut unit = AirconUnit::new(25, 1000);
        unit.advance(1060);
        unit.set_fan_speed(FanSpeed::Mid).unwrap();

        let restored = StoredUnit::from_unit(&unit).repair();
        assert_eq!(restored, unit);
    }

    #[test]
    fn open_save_reopen() {
        let path = std::env::temp_dir().join(format!("aircon-store-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        let mut registry = Registry::open(&path).unwrap();
        assert!(registry.is_empty());
        registry.create("g1".to_string(), 10, 500);
        registry.get_mut("g1").unwrap().advance(560);
        registry.save().unwrap();

        let reloaded = Registry::open(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        let unit = reloaded.get("g1").unwrap();
        assert_eq!(unit.now_temp(), 30.1);
        assert_eq!(unit.last_update(), 560);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn create_does_not_replace_existing() {
        let mut registry = Registry {
            path: PathBuf::from("unused.json"),
            units: HashMap::new(),
        };
        registry.create("g1".to_string(), 10, 0);
        registry.get_mut("g1").unwrap().power_off();
        registry.create("g1".to_string(), 500, 99);
        assert!(!registry.get("g1").unwrap().is_on());
        assert_eq!(registry.get("g1").unwrap().room_volume(), 20.0);
    }
}
