// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The match record.
//!
//! ## Invariants
//!
//! - The id never changes after construction
//! - Home and away are always different participants
//! - A tied result is only stored when the sport permits draws
//! - Once a result has been entered it can be overwritten but never removed
//! - Entering a result never changes the status

use crate::error::DomainError;
use crate::interval::overlaps;
use crate::point_rules::{Outcome, is_draw_allowed, points_for};
use crate::types::{MatchId, MatchStatus, Participant, Score, SportKind};
use crate::validation::{validate_competition_name, validate_referee, validate_venue};
use serde::{Deserialize, Serialize};
use time::{Duration, PrimitiveDateTime};

/// What kind of fixture a match is, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchKind {
    /// A friendly. Never affects standings.
    Friendly {
        /// Name of the organizing event.
        organizer: String,
    },
    /// A round-robin league fixture.
    League {
        /// League name.
        league: String,
        /// 1-based round ("week") number.
        round: u32,
    },
    /// A knockout tie, decided on penalties when regular time ends level.
    Knockout {
        /// Stage name, e.g. "Quarter Final".
        stage: String,
        /// Shoot-out result, if one was needed.
        penalties: Option<Score>,
    },
}

impl MatchKind {
    /// Minimum length of a friendly organizer name.
    pub const MIN_ORGANIZER_LENGTH: usize = 5;
    /// Minimum length of a league name.
    pub const MIN_LEAGUE_NAME_LENGTH: usize = 3;

    /// Creates a validated friendly kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the organizer name is shorter than five characters.
    pub fn friendly(organizer: &str) -> Result<Self, DomainError> {
        validate_competition_name("Organizer", organizer, Self::MIN_ORGANIZER_LENGTH)?;
        Ok(Self::Friendly {
            organizer: organizer.to_string(),
        })
    }

    /// Creates a validated league kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the league name is shorter than three characters
    /// or the round is zero.
    pub fn league(league: &str, round: u32) -> Result<Self, DomainError> {
        validate_competition_name("League name", league, Self::MIN_LEAGUE_NAME_LENGTH)?;
        if round == 0 {
            return Err(DomainError::InvalidRound(round));
        }
        Ok(Self::League {
            league: league.to_string(),
            round,
        })
    }

    /// Creates a validated knockout kind with no shoot-out result.
    ///
    /// # Errors
    ///
    /// Returns an error if the stage name is empty.
    pub fn knockout(stage: &str) -> Result<Self, DomainError> {
        validate_competition_name("Stage name", stage, 1)?;
        Ok(Self::Knockout {
            stage: stage.to_string(),
            penalties: None,
        })
    }

    /// Short label for the kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Friendly { .. } => "friendly",
            Self::League { .. } => "league",
            Self::Knockout { .. } => "knockout",
        }
    }

    /// The league name, knockout stage, or friendly organizer.
    #[must_use]
    pub fn competition(&self) -> &str {
        match self {
            Self::Friendly { organizer } => organizer,
            Self::League { league, .. } => league,
            Self::Knockout { stage, .. } => stage,
        }
    }
}

/// One fixture between two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    home: Participant,
    away: Participant,
    sport: SportKind,
    kind: MatchKind,
    scheduled_at: Option<PrimitiveDateTime>,
    status: MatchStatus,
    result: Option<Score>,
    venue: String,
    referee: Option<String>,
}

impl Match {
    /// Venue assigned until one is set explicitly.
    pub const DEFAULT_VENUE: &'static str = "Main Stadium";

    /// Creates a new, unscheduled match in the `Scheduled` state.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SelfPairing`] if home and away are the same participant.
    pub fn new(
        id: MatchId,
        home: Participant,
        away: Participant,
        sport: SportKind,
        kind: MatchKind,
    ) -> Result<Self, DomainError> {
        // Rule: a participant never plays itself
        if home == away {
            return Err(DomainError::SelfPairing(home.name().to_string()));
        }

        Ok(Self {
            id,
            home,
            away,
            sport,
            kind,
            scheduled_at: None,
            status: MatchStatus::Scheduled,
            result: None,
            venue: String::from(Self::DEFAULT_VENUE),
            referee: None,
        })
    }

    /// Returns the match with its kickoff time set.
    #[must_use]
    pub fn with_schedule(mut self, at: PrimitiveDateTime) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    #[must_use]
    pub const fn id(&self) -> MatchId {
        self.id
    }

    #[must_use]
    pub const fn home(&self) -> &Participant {
        &self.home
    }

    #[must_use]
    pub const fn away(&self) -> &Participant {
        &self.away
    }

    #[must_use]
    pub const fn sport(&self) -> SportKind {
        self.sport
    }

    #[must_use]
    pub const fn kind(&self) -> &MatchKind {
        &self.kind
    }

    /// The round number, for league matches only.
    #[must_use]
    pub const fn round(&self) -> Option<u32> {
        match self.kind {
            MatchKind::League { round, .. } => Some(round),
            _ => None,
        }
    }

    /// The league, stage or organizer this match belongs to.
    #[must_use]
    pub fn competition(&self) -> &str {
        self.kind.competition()
    }

    #[must_use]
    pub const fn scheduled_at(&self) -> Option<PrimitiveDateTime> {
        self.scheduled_at
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    #[must_use]
    pub const fn result(&self) -> Option<Score> {
        self.result
    }

    /// Whether a result has ever been entered for this match.
    #[must_use]
    pub const fn result_entered(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    #[must_use]
    pub fn referee(&self) -> Option<&str> {
        self.referee.as_deref()
    }

    /// Returns whether the named participant plays in this match.
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.home.name() == name || self.away.name() == name
    }

    /// Records the final score.
    ///
    /// Calling this again overwrites the previous result. The status is left
    /// untouched so a score can be recorded while a match is still in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either score is negative ([`DomainError::InvalidScore`])
    /// - The scores are equal and the sport forbids draws ([`DomainError::IllegalDraw`])
    pub fn set_result(&mut self, home_score: i64, away_score: i64) -> Result<(), DomainError> {
        let score = Score::new(home_score, away_score)?;

        // Rule: legality of a tie is decided before any points are considered
        if score.is_draw() && !is_draw_allowed(self.sport) {
            return Err(DomainError::IllegalDraw { sport: self.sport });
        }

        self.result = Some(score);
        Ok(())
    }

    /// Records a penalty shoot-out result for a knockout match.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match is not a knockout
    /// - Either score is negative
    /// - The shoot-out is level
    pub fn set_penalty_result(&mut self, home: i64, away: i64) -> Result<(), DomainError> {
        let id = self.id.value();
        let MatchKind::Knockout { penalties, .. } = &mut self.kind else {
            return Err(DomainError::NotAKnockoutMatch(id));
        };

        let score = Score::new(home, away)?;
        if score.is_draw() {
            return Err(DomainError::IllegalPenaltyDraw);
        }

        *penalties = Some(score);
        Ok(())
    }

    /// Moves the match to a new status.
    pub const fn set_status(&mut self, status: MatchStatus) {
        self.status = status;
    }

    /// Sets or moves the kickoff time.
    pub const fn reschedule(&mut self, at: PrimitiveDateTime) {
        self.scheduled_at = Some(at);
    }

    /// Sets the venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the venue is shorter than three characters.
    pub fn set_venue(&mut self, venue: &str) -> Result<(), DomainError> {
        validate_venue(venue)?;
        self.venue = venue.to_string();
        Ok(())
    }

    /// Assigns the referee.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains digits.
    pub fn set_referee(&mut self, referee: &str) -> Result<(), DomainError> {
        validate_referee(referee)?;
        self.referee = Some(referee.to_string());
        Ok(())
    }

    /// Returns the winner, resolving level knockout ties on penalties.
    ///
    /// `None` means no result yet, a draw, or a knockout still awaiting its shoot-out.
    #[must_use]
    pub fn winner(&self) -> Option<&Participant> {
        let score = self.result?;
        match Outcome::for_score(&score) {
            (Outcome::Win, _) => Some(&self.home),
            (Outcome::Loss, _) => Some(&self.away),
            (Outcome::Draw, _) => match &self.kind {
                MatchKind::Knockout {
                    penalties: Some(shootout),
                    ..
                } => {
                    if shootout.home() > shootout.away() {
                        Some(&self.home)
                    } else {
                        Some(&self.away)
                    }
                }
                _ => None,
            },
        }
    }

    /// Points earned by the home and away side, or `None` before a result exists.
    ///
    /// Friendlies always award zero.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IllegalDraw`] if the stored result is a draw in
    /// a sport without draws.
    pub fn points_awarded(&self) -> Result<Option<(u32, u32)>, DomainError> {
        let Some(score) = self.result else {
            return Ok(None);
        };

        if let MatchKind::Friendly { .. } = self.kind {
            return Ok(Some((0, 0)));
        }

        let (home_outcome, away_outcome) = Outcome::for_score(&score);
        Ok(Some((
            points_for(self.sport, home_outcome)?,
            points_for(self.sport, away_outcome)?,
        )))
    }

    /// Returns whether the two matches occupy overlapping time, assuming each
    /// lasts `duration`. Unscheduled matches never overlap.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self, duration: Duration) -> bool {
        match (self.scheduled_at, other.scheduled_at) {
            (Some(a), Some(b)) => overlaps(a, duration, b, duration),
            _ => false,
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            MatchKind::Friendly { organizer } => {
                write!(f, "[Friendly: {organizer}] {} vs {}", self.home, self.away)?;
            }
            MatchKind::League { league, round } => {
                write!(
                    f,
                    "[League: {league}] {} vs {} (round {round})",
                    self.home, self.away
                )?;
            }
            MatchKind::Knockout { stage, .. } => {
                write!(f, "[{stage}] {} vs {}", self.home, self.away)?;
            }
        }
        if let Some(score) = self.result {
            write!(f, " {score}")?;
        }
        Ok(())
    }
}
