// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_domain::{DomainError, ErrorKind, MatchId, MatchStatus};

/// Errors that can occur while scheduling, recording results or ranking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// Scheduling needs at least two participants.
    #[error("At least 2 participants are required to generate fixtures, got {count}")]
    InsufficientParticipants {
        /// Participants on the roster.
        count: usize,
    },
    /// Fixtures have not been generated for this league yet.
    #[error("Fixtures have not been generated")]
    NotGenerated,
    /// The requested round does not exist.
    #[error("Round {round} not found. Valid rounds are 1 to {total}")]
    RoundNotFound {
        /// The requested round.
        round: u32,
        /// Rounds in the calendar.
        total: u32,
    },
    /// No match with this id.
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    /// A match with this id is already stored.
    #[error("Match {0} already exists")]
    DuplicateMatch(MatchId),
    /// No participant with this name.
    #[error("Participant '{0}' not found")]
    ParticipantNotFound(String),
    /// The match has no result to ingest.
    #[error("Match {0} has no result entered")]
    ResultNotEntered(MatchId),
    /// The league already counted a result for this match.
    #[error("A result for match {0} has already been reported")]
    ResultAlreadyReported(MatchId),
    /// Results cannot be reported in the match's current state.
    #[error("Match {id} cannot take a result while {status}")]
    MatchNotPlayable {
        /// The match.
        id: MatchId,
        /// Its current status.
        status: MatchStatus,
    },
    /// Only league matches count towards standings.
    #[error("Match {0} is not a league match")]
    NotALeagueMatch(MatchId),
    /// Applying a result would overflow a standings counter.
    #[error("Standings for '{0}' would overflow")]
    StandingsOverflow(String),
    /// A league with this name is already registered.
    #[error("League '{0}' already exists")]
    DuplicateLeague(String),
    /// No league with this name.
    #[error("League '{0}' not found")]
    LeagueNotFound(String),
}

impl CoreError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DomainViolation(err) => err.kind(),
            Self::InsufficientParticipants { .. }
            | Self::NotGenerated
            | Self::ResultNotEntered(_)
            | Self::ResultAlreadyReported(_)
            | Self::MatchNotPlayable { .. } => ErrorKind::State,
            Self::RoundNotFound { .. }
            | Self::MatchNotFound(_)
            | Self::ParticipantNotFound(_)
            | Self::LeagueNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateMatch(_)
            | Self::NotALeagueMatch(_)
            | Self::StandingsOverflow(_)
            | Self::DuplicateLeague(_) => ErrorKind::RuleViolation,
        }
    }
}
