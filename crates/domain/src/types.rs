// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_participant_name;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A team or individual taking part in a league.
///
/// Participants have no identity beyond their name. Names are compared
/// case-sensitively and must be at least [`Participant::MIN_NAME_LENGTH`]
/// characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Participant {
    name: String,
}

impl Participant {
    /// Minimum number of characters in a participant name.
    pub const MIN_NAME_LENGTH: usize = 3;

    /// Creates a validated participant.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParticipantName`] if the name is shorter
    /// than three characters.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        validate_participant_name(name)?;
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Returns the participant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Participant {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_participant_name(&value)?;
        Ok(Self { name: value })
    }
}

impl From<Participant> for String {
    fn from(value: Participant) -> Self {
        value.name
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The sport a league is played in.
///
/// Selects the active point rules and whether a drawn result is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SportKind {
    /// Association football. Draws allowed.
    #[default]
    Soccer,
    /// Volleyball, scored in sets. No draws.
    Volleyball,
    /// Basketball. No draws.
    Basketball,
}

impl SportKind {
    /// Converts this sport to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Soccer => "soccer",
            Self::Volleyball => "volleyball",
            Self::Basketball => "basketball",
        }
    }
}

impl FromStr for SportKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soccer" | "football" => Ok(Self::Soccer),
            "volleyball" => Ok(Self::Volleyball),
            "basketball" => Ok(Self::Basketball),
            _ => Err(DomainError::InvalidSport(s.to_string())),
        }
    }
}

impl std::fmt::Display for SportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a match.
///
/// Transitions are driven by the caller. The scheduler only ever creates
/// matches in the `Scheduled` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Fixture created, not yet started.
    #[default]
    Scheduled,
    /// Match is being played.
    InProgress,
    /// Match is over.
    Finished,
    /// Match will not be played.
    Cancelled,
    /// Match moved to an undetermined later date.
    Postponed,
}

impl MatchStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Scheduled,
        Self::InProgress,
        Self::Finished,
        Self::Cancelled,
        Self::Postponed,
    ];

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
            Self::Postponed => "postponed",
        }
    }

    /// Returns whether a result may still be reported for a match in this state.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        matches!(self, Self::Scheduled | Self::InProgress | Self::Finished)
    }
}

impl FromStr for MatchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "finished" => Ok(Self::Finished),
            "cancelled" => Ok(Self::Cancelled),
            "postponed" => Ok(Self::Postponed),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique, positive match identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct MatchId(u64);

impl MatchId {
    /// Creates a match identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMatchId`] for zero.
    pub const fn new(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidMatchId(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for MatchId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchId> for u64 {
    fn from(value: MatchId) -> Self {
        value.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A final score, home side first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    home: u32,
    away: u32,
}

impl Score {
    /// Creates a score from raw, caller-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidScore`] if either value is negative or
    /// does not fit in a `u32`.
    pub fn new(home: i64, away: i64) -> Result<Self, DomainError> {
        Ok(Self {
            home: to_score_value(home)?,
            away: to_score_value(away)?,
        })
    }

    /// Returns the home side's score.
    #[must_use]
    pub const fn home(&self) -> u32 {
        self.home
    }

    /// Returns the away side's score.
    #[must_use]
    pub const fn away(&self) -> u32 {
        self.away
    }

    /// Returns whether both sides scored the same.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

fn to_score_value(value: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| DomainError::InvalidScore { value })
}
