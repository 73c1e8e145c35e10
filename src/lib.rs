// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aircon Lib - a simulated air conditioner for chat groups.
//!
//! Each chat group gets one virtual air-conditioning unit whose room
//! temperature evolves over real elapsed time under an ideal-gas
//! heating/cooling model. There is no background clock: the temperature
//! is advanced lazily, whenever a command next observes or mutates the
//! unit, and the whole registry is snapshotted to one JSON file after
//! every mutation.
//!
//! # Supported Features
//!
//! - **Power control**: install on first power-on, switch on/off
//! - **Temperature**: set the target, set the ambient, query the room
//! - **Fan speed**: low/mid/high on home units
//! - **Tiers**: upgrade a home unit to a central installation and back
//!
//! # Quick Start
//!
//! ```no_run
//! use aircon_lib::{AirconService, ChatHost, Registry};
//!
//! struct Host;
//!
//! impl ChatHost for Host {
//!     fn member_count(&self, _group_id: &str) -> u32 {
//!         42
//!     }
//!     fn send(&self, group_id: &str, text: &str) {
//!         println!("[{group_id}] {text}");
//!     }
//! }
//!
//! fn main() -> aircon_lib::Result<()> {
//!     let service = AirconService::new(Registry::open("air_con.json")?);
//!
//!     // Wire `handle` into the host platform's message dispatcher.
//!     service.handle(&Host, "group-1", "ac on")?;
//!     service.handle(&Host, "group-1", "set temp 22")?;
//!     service.handle(&Host, "group-1", "current temp")?;
//!     Ok(())
//! }
//! ```
//!
//! # Simulation Model
//!
//! A running unit cools (or heats) the room toward the target in a
//! linear phase followed by an exponential decay once the remaining gap
//! drops under the per-slice airflow threshold; see [`physics`]. A
//! switched-off unit drifts linearly back to the ambient temperature.
//! Loading the snapshot is self-healing: out-of-range or missing fields
//! are reset to their defaults instead of failing.

pub mod clock;
pub mod command;
pub mod error;
pub mod physics;
pub mod report;
pub mod service;
pub mod store;
pub mod types;
pub mod unit;

pub use clock::{Clock, SystemClock};
pub use command::{Command, CommandKind, TRIGGERS, Trigger};
pub use error::{Error, Result, StoreError, TransitionError, ValueError};
pub use report::StatusReport;
pub use service::{AirconService, ChatHost};
pub use store::Registry;
pub use types::{FanSpeed, TempSetting, Tier};
pub use unit::AirconUnit;
