// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound chat commands.
//!
//! Commands arrive as free text from the host messaging platform. Each
//! command is either an exact phrase ("ac on") or a prefix followed by
//! one argument ("set temp 18"). The trigger table is published so a
//! host dispatcher can register routes; [`Command::parse`] is the
//! matching logic itself. Argument validation happens later, in the
//! handlers, so a bad argument still counts as a handled command.

/// How a trigger phrase matches an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The whole message must equal the phrase.
    Exact(&'static str),
    /// The message must start with the phrase; the rest is the argument.
    Prefix(&'static str),
}

/// What a matched trigger means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Install and/or switch the unit on.
    PowerOn,
    /// Switch the unit off.
    PowerOff,
    /// Report the current temperatures.
    QueryTemperature,
    /// Set the target temperature.
    SetTarget,
    /// Set the fan speed (home units only).
    SetFanSpeed,
    /// Set the ambient temperature.
    SetAmbient,
    /// Report the installed tier.
    QueryTier,
    /// Upgrade the unit one tier.
    UpgradeTier,
    /// Downgrade the unit one tier.
    DowngradeTier,
}

/// The trigger table routed by the host dispatcher.
pub const TRIGGERS: &[(Trigger, CommandKind)] = &[
    (Trigger::Exact("ac on"), CommandKind::PowerOn),
    (Trigger::Exact("turn on the ac"), CommandKind::PowerOn),
    (Trigger::Exact("ac off"), CommandKind::PowerOff),
    (Trigger::Exact("turn off the ac"), CommandKind::PowerOff),
    (Trigger::Exact("ac temp"), CommandKind::QueryTemperature),
    (Trigger::Exact("current temp"), CommandKind::QueryTemperature),
    (Trigger::Exact("ac type"), CommandKind::QueryTier),
    (Trigger::Exact("ac upgrade"), CommandKind::UpgradeTier),
    (Trigger::Exact("upgrade ac"), CommandKind::UpgradeTier),
    (Trigger::Exact("ac downgrade"), CommandKind::DowngradeTier),
    (Trigger::Exact("downgrade ac"), CommandKind::DowngradeTier),
    (Trigger::Prefix("set temp"), CommandKind::SetTarget),
    (Trigger::Prefix("target temp"), CommandKind::SetTarget),
    (Trigger::Prefix("set fan"), CommandKind::SetFanSpeed),
    (Trigger::Prefix("fan speed"), CommandKind::SetFanSpeed),
    (Trigger::Prefix("set ambient"), CommandKind::SetAmbient),
    (Trigger::Prefix("ambient temp"), CommandKind::SetAmbient),
];

/// A matched command with its raw argument text, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The operation to perform.
    pub kind: CommandKind,
    /// Unparsed argument text after a prefix trigger, trimmed.
    pub arg: String,
}

impl Command {
    /// Matches a chat message against the trigger table.
    ///
    /// Returns `None` when the message is not addressed to this module
    /// at all. Prefix triggers require either an exact phrase match or
    /// trailing text; "set temperature" does not match "set temp".
    #[must_use]
    pub fn parse(message: &str) -> Option<Self> {
        let message = message.trim();
        for (trigger, kind) in TRIGGERS {
            match trigger {
                Trigger::Exact(phrase) => {
                    if message.eq_ignore_ascii_case(phrase) {
                        return Some(Self {
                            kind: *kind,
                            arg: String::new(),
                        });
                    }
                }
                Trigger::Prefix(phrase) => {
                    // Byte-wise compare: the phrases are ASCII, so a matching
                    // prefix always ends on a char boundary in a UTF-8 message.
                    if message.len() >= phrase.len()
                        && message.as_bytes()[..phrase.len()].eq_ignore_ascii_case(phrase.as_bytes())
                    {
                        let rest = &message[phrase.len()..];
                        if rest.is_empty() || rest.starts_with(' ') {
                            return Some(Self {
                                kind: *kind,
                                arg: rest.trim().to_string(),
                            });
                        }
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_triggers() {
        assert_eq!(
            Command::parse("ac on").unwrap().kind,
            CommandKind::PowerOn
        );
        assert_eq!(
            Command::parse("  Turn On The AC  ").unwrap().kind,
            CommandKind::PowerOn
        );
        assert_eq!(
            Command::parse("ac off").unwrap().kind,
            CommandKind::PowerOff
        );
        assert_eq!(
            Command::parse("current temp").unwrap().kind,
            CommandKind::QueryTemperature
        );
        assert_eq!(
            Command::parse("ac type").unwrap().kind,
            CommandKind::QueryTier
        );
    }

    #[test]
    fn exact_triggers_do_not_match_prefixes() {
        assert!(Command::parse("ac on please").is_none());
        assert!(Command::parse("acon").is_none());
    }

    #[test]
    fn prefix_triggers_capture_argument() {
        let cmd = Command::parse("set temp 18").unwrap();
        assert_eq!(cmd.kind, CommandKind::SetTarget);
        assert_eq!(cmd.arg, "18");

        let cmd = Command::parse("set fan high").unwrap();
        assert_eq!(cmd.kind, CommandKind::SetFanSpeed);
        assert_eq!(cmd.arg, "high");

        let cmd = Command::parse("set ambient   40").unwrap();
        assert_eq!(cmd.kind, CommandKind::SetAmbient);
        assert_eq!(cmd.arg, "40");
    }

    #[test]
    fn prefix_triggers_allow_missing_argument() {
        // Matched but with an empty argument; the handler rejects it.
        let cmd = Command::parse("set temp").unwrap();
        assert_eq!(cmd.kind, CommandKind::SetTarget);
        assert_eq!(cmd.arg, "");
    }

    #[test]
    fn prefix_requires_word_boundary() {
        assert!(Command::parse("set temperature 18").is_none());
        assert!(Command::parse("set fancy").is_none());
    }

    #[test]
    fn unrelated_messages_ignored() {
        assert!(Command::parse("hello").is_none());
        assert!(Command::parse("").is_none());
    }
}
