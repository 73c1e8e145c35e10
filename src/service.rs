// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command handlers wiring the registry, the physics and the chat host.
//!
//! One inbound command runs to completion before the next begins: the
//! registry sits behind a single writer lock, and every handler follows
//! the same sequence — advance the unit to the current time, check,
//! mutate, persist, reply. Validation failures abort before any
//! mutation; a failed save is fatal for the request.

use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::command::{Command, CommandKind};
use crate::error::{Error, TransitionError};
use crate::report::StatusReport;
use crate::store::Registry;
use crate::types::{FanSpeed, TempSetting, Tier};
use crate::unit::AirconUnit;

/// What the host messaging platform provides to this library.
pub trait ChatHost {
    /// Number of members in a group, used to size a new unit's room.
    fn member_count(&self, group_id: &str) -> u32;

    /// Delivers a text message to a group.
    fn send(&self, group_id: &str, text: &str);
}

/// The command-handling service for all groups.
///
/// Construct one per process around an opened [`Registry`] and hand
/// every inbound message to [`handle`](Self::handle).
///
/// # Examples
///
/// ```no_run
/// use aircon_lib::service::{AirconService, ChatHost};
/// use aircon_lib::store::Registry;
///
/// struct Host;
/// impl ChatHost for Host {
///     fn member_count(&self, _group_id: &str) -> u32 { 10 }
///     fn send(&self, group_id: &str, text: &str) {
///         println!("[{group_id}] {text}");
///     }
/// }
///
/// let service = AirconService::new(Registry::open("air_con.json")?);
/// service.handle(&Host, "group-1", "ac on")?;
/// # Ok::<(), aircon_lib::error::Error>(())
/// ```
#[derive(Debug)]
pub struct AirconService<C: Clock = SystemClock> {
    registry: Mutex<Registry>,
    clock: C,
}

impl AirconService<SystemClock> {
    /// Creates a service running on the system clock.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::with_clock(registry, SystemClock)
    }
}

impl<C: Clock> AirconService<C> {
    /// Creates a service with a custom clock.
    #[must_use]
    pub fn with_clock(registry: Registry, clock: C) -> Self {
        Self {
            registry: Mutex::new(registry),
            clock,
        }
    }

    /// Handles one inbound chat message.
    ///
    /// Returns `Ok(false)` when the message matches no trigger and was
    /// ignored. Recoverable rejections (bad argument, illegal
    /// transition, unit missing or off) are sent to the group as their
    /// `Display` text and count as handled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] when persisting the registry fails;
    /// nothing else escapes.
    pub fn handle(&self, host: &dyn ChatHost, group_id: &str, message: &str) -> Result<bool, Error> {
        let Some(cmd) = Command::parse(message) else {
            return Ok(false);
        };
        tracing::debug!(group = %group_id, kind = ?cmd.kind, "handling command");
        match self.run(host, group_id, &cmd) {
            Ok(()) => Ok(true),
            Err(err @ Error::Store(_)) => Err(err),
            Err(err) => {
                tracing::debug!(group = %group_id, %err, "command rejected");
                host.send(group_id, &err.to_string());
                Ok(true)
            }
        }
    }

    /// Executes a parsed command against the registry.
    ///
    /// # Errors
    ///
    /// Any [`Error`]; callers decide which variants reach the user.
    #[allow(clippy::too_many_lines)]
    pub fn run(&self, host: &dyn ChatHost, group_id: &str, cmd: &Command) -> Result<(), Error> {
        let now = self.clock.now_seconds();
        let mut registry = self.registry.lock();

        match cmd.kind {
            CommandKind::PowerOn => {
                let newly_installed = registry.get(group_id).is_none();
                if newly_installed {
                    let members = host.member_count(group_id);
                    registry.create(group_id.to_string(), members, now);
                    host.send(group_id, "Air conditioner installed~");
                }
                let unit = require(&mut registry, group_id, false)?;
                if !newly_installed && unit.is_on() {
                    host.send(group_id, "The air conditioner is already on!");
                    return Ok(());
                }
                unit.advance(now);
                unit.power_on();
                let text = format!("Beep! The air conditioner is on.\n{}", StatusReport::new(unit));
                registry.save()?;
                host.send(group_id, &text);
            }

            CommandKind::PowerOff => {
                let unit = require(&mut registry, group_id, true)?;
                unit.advance(now);
                unit.power_off();
                let text =
                    format!("Beep! The air conditioner is off.\n{}", StatusReport::new(unit));
                registry.save()?;
                host.send(group_id, &text);
            }

            CommandKind::QueryTemperature => {
                let unit = require(&mut registry, group_id, false)?;
                unit.advance(now);
                let text = if unit.is_on() {
                    StatusReport::new(unit).to_string()
                } else {
                    format!("The air conditioner is off.\n{}", StatusReport::new(unit))
                };
                registry.save()?;
                host.send(group_id, &text);
            }

            CommandKind::SetTarget => {
                let unit = require(&mut registry, group_id, true)?;
                let target = TempSetting::parse(&cmd.arg)?;
                unit.advance(now);
                unit.set_target(target);
                let text = StatusReport::new(unit).to_string();
                registry.save()?;
                host.send(group_id, &text);
            }

            CommandKind::SetFanSpeed => {
                let unit = require(&mut registry, group_id, true)?;
                if unit.tier() != Tier::Home {
                    return Err(TransitionError::FanSpeedFixed.into());
                }
                let speed: FanSpeed = cmd.arg.parse().map_err(Error::Value)?;
                unit.advance(now);
                unit.set_fan_speed(speed)?;
                let text = StatusReport::new(unit).to_string();
                registry.save()?;
                host.send(group_id, &text);
            }

            CommandKind::SetAmbient => {
                let unit = require(&mut registry, group_id, false)?;
                let ambient = TempSetting::parse(&cmd.arg)?;
                unit.advance(now);
                unit.set_ambient(ambient);
                let text = if unit.is_on() {
                    StatusReport::new(unit).to_string()
                } else {
                    format!("The air conditioner is off.\n{}", StatusReport::new(unit))
                };
                registry.save()?;
                host.send(group_id, &text);
            }

            CommandKind::QueryTier => {
                let unit = require(&mut registry, group_id, false)?;
                host.send(group_id, &format!("A {} is installed here~", unit.tier()));
            }

            CommandKind::UpgradeTier => {
                let unit = require(&mut registry, group_id, false)?;
                if unit.tier().next().is_none() {
                    return Err(TransitionError::AlreadyHighestTier.into());
                }
                unit.advance(now);
                let tier = unit.upgrade()?;
                let text = format!("Upgraded to a {tier}~\n{}", StatusReport::new(unit));
                registry.save()?;
                host.send(group_id, &text);
            }

            CommandKind::DowngradeTier => {
                let unit = require(&mut registry, group_id, false)?;
                if unit.tier().previous().is_none() {
                    return Err(TransitionError::AlreadyLowestTier.into());
                }
                unit.advance(now);
                let tier = unit.downgrade()?;
                let text = format!("Downgraded to a {tier}~\n{}", StatusReport::new(unit));
                registry.save()?;
                host.send(group_id, &text);
            }
        }
        Ok(())
    }

    /// Returns a snapshot of a group's unit, if installed.
    #[must_use]
    pub fn unit(&self, group_id: &str) -> Option<AirconUnit> {
        self.registry.lock().get(group_id).cloned()
    }
}

/// Looks up a group's unit, enforcing presence and, optionally, that it
/// is running.
fn require<'a>(
    registry: &'a mut Registry,
    group_id: &str,
    need_on: bool,
) -> Result<&'a mut AirconUnit, Error> {
    let unit = registry.get_mut(group_id).ok_or(Error::NotInstalled)?;
    if need_on && !unit.is_on() {
        return Err(Error::NotRunning);
    }
    Ok(unit)
}
