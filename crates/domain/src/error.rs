// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::SportKind;

/// Broad classification of a failure, shared by every error type in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field is malformed or out of range.
    Validation,
    /// The operation is not valid for the current object state.
    State,
    /// A domain rule was breached.
    RuleViolation,
    /// A lookup missed.
    NotFound,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Participant name is too short or otherwise invalid.
    InvalidParticipantName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },
    /// The participant is already on the roster.
    DuplicateParticipant(String),
    /// A match was built with the same participant on both sides.
    SelfPairing(String),
    /// Match identifiers must be positive.
    InvalidMatchId(u64),
    /// A score was negative or too large.
    InvalidScore {
        /// The rejected value.
        value: i64,
    },
    /// A tied result was entered for a sport that does not permit draws.
    IllegalDraw {
        /// The sport of the match.
        sport: SportKind,
    },
    /// A penalty shoot-out cannot end level.
    IllegalPenaltyDraw,
    /// Penalties were entered for a match that is not a knockout.
    NotAKnockoutMatch(u64),
    /// Round numbers start at 1.
    InvalidRound(u32),
    /// Unknown sport name.
    InvalidSport(String),
    /// Unknown match status name.
    InvalidStatus(String),
    /// League, stage or organizer name is invalid.
    InvalidCompetitionName(String),
    /// Venue description is too short.
    InvalidVenue(String),
    /// Referee name contains digits.
    InvalidReferee(String),
    /// The slot configuration cannot be used for scheduling.
    InvalidSlotConfig {
        /// Description of the problem.
        reason: String,
    },
    /// A round holds more matches than the configured slots can take.
    InsufficientSlots {
        /// Matches that need a slot.
        required: usize,
        /// Free slots in the round.
        available: usize,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl DomainError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParticipantName { .. }
            | Self::InvalidMatchId(_)
            | Self::InvalidScore { .. }
            | Self::InvalidRound(_)
            | Self::InvalidSport(_)
            | Self::InvalidStatus(_)
            | Self::InvalidCompetitionName(_)
            | Self::InvalidVenue(_)
            | Self::InvalidReferee(_)
            | Self::InvalidSlotConfig { .. }
            | Self::InsufficientSlots { .. }
            | Self::DateArithmeticOverflow { .. } => ErrorKind::Validation,
            Self::NotAKnockoutMatch(_) => ErrorKind::State,
            Self::DuplicateParticipant(_)
            | Self::SelfPairing(_)
            | Self::IllegalDraw { .. }
            | Self::IllegalPenaltyDraw => ErrorKind::RuleViolation,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParticipantName { name, reason } => {
                write!(f, "Invalid participant name '{name}': {reason}")
            }
            Self::DuplicateParticipant(name) => {
                write!(f, "Participant '{name}' is already registered")
            }
            Self::SelfPairing(name) => {
                write!(f, "Participant '{name}' cannot play against itself")
            }
            Self::InvalidMatchId(id) => {
                write!(f, "Invalid match id: {id}. Must be a positive integer")
            }
            Self::InvalidScore { value } => {
                write!(f, "Invalid score: {value}. Must be a non-negative integer")
            }
            Self::IllegalDraw { sport } => write!(f, "A draw is not allowed in {sport}"),
            Self::IllegalPenaltyDraw => write!(f, "A penalty shoot-out cannot end in a draw"),
            Self::NotAKnockoutMatch(id) => write!(f, "Match {id} is not a knockout match"),
            Self::InvalidRound(round) => {
                write!(f, "Invalid round: {round}. Rounds start at 1")
            }
            Self::InvalidSport(sport) => write!(f, "Invalid sport: {sport}"),
            Self::InvalidStatus(status) => write!(f, "Invalid match status: {status}"),
            Self::InvalidCompetitionName(msg) => write!(f, "Invalid competition name: {msg}"),
            Self::InvalidVenue(msg) => write!(f, "Invalid venue: {msg}"),
            Self::InvalidReferee(msg) => write!(f, "Invalid referee: {msg}"),
            Self::InvalidSlotConfig { reason } => write!(f, "Invalid slot configuration: {reason}"),
            Self::InsufficientSlots {
                required,
                available,
            } => {
                write!(
                    f,
                    "A round needs {required} slots but only {available} are available"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
