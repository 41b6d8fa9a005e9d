// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Standings aggregation.
//!
//! ## Ranking Rules (Authoritative)
//!
//! Rows are ordered by:
//! 1. Points (highest first)
//! 2. Tie Breaker 1: Score differential (highest first)
//! 3. Tie Breaker 2: Scored (highest first)
//!
//! Rows still tied after all three keep their roster order.
//!
//! ## Invariants
//!
//! - Every participant has a row from construction, seeded at zero
//! - A match is applied to both rows or to neither
//! - Matches are not deduplicated: ingesting the same match twice counts it twice

use crate::error::CoreError;
use league_domain::{
    DomainError, Match, MatchKind, MatchStatus, Outcome, Participant, SportKind, is_draw_allowed,
    points_for,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// One participant's aggregate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub participant: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub scored: u32,
    pub conceded: u32,
    /// `scored - conceded`.
    pub differential: i64,
    pub points: u32,
}

impl StandingsRow {
    fn new(participant: &str) -> Self {
        Self {
            participant: participant.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            scored: 0,
            conceded: 0,
            differential: 0,
            points: 0,
        }
    }

    /// Returns this row with one more match applied.
    ///
    /// Returns `None` if any counter would overflow.
    fn recorded(&self, own: u32, opposing: u32, outcome: Outcome, points: u32) -> Option<Self> {
        let mut row = self.clone();
        row.played = row.played.checked_add(1)?;
        row.scored = row.scored.checked_add(own)?;
        row.conceded = row.conceded.checked_add(opposing)?;
        row.differential = i64::from(row.scored) - i64::from(row.conceded);
        row.points = row.points.checked_add(points)?;
        match outcome {
            Outcome::Win => row.won = row.won.checked_add(1)?,
            Outcome::Draw => row.drawn = row.drawn.checked_add(1)?,
            Outcome::Loss => row.lost = row.lost.checked_add(1)?,
        }
        Some(row)
    }
}

/// Per-participant aggregates for one league.
///
/// Rows are mutated field by field, so a table shared between threads must
/// sit behind a single lock covering both [`ingest`](Self::ingest) and
/// [`ranking`](Self::ranking).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsTable {
    sport: SportKind,
    rows: Vec<StandingsRow>,
    index: HashMap<String, usize>,
}

impl StandingsTable {
    /// Creates a table with one zeroed row per participant, in roster order.
    #[must_use]
    pub fn new(sport: SportKind, participants: &[Participant]) -> Self {
        let mut table = Self {
            sport,
            rows: Vec::with_capacity(participants.len()),
            index: HashMap::with_capacity(participants.len()),
        };
        for participant in participants {
            if !table.index.contains_key(participant.name()) {
                table
                    .index
                    .insert(participant.name().to_string(), table.rows.len());
                table.rows.push(StandingsRow::new(participant.name()));
            }
        }
        table
    }

    #[must_use]
    pub const fn sport(&self) -> SportKind {
        self.sport
    }

    /// Returns the row for a participant.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&StandingsRow> {
        self.index.get(name).map(|&i| &self.rows[i])
    }

    /// Rows in roster order, unranked.
    #[must_use]
    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    /// Applies one match result to both participants' rows.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match is not a league match
    /// - No result has been entered
    /// - The result is a draw and the sport forbids draws
    /// - Either participant has no row in this table
    /// - A counter in either row would overflow
    ///
    /// On error no row is changed.
    pub fn ingest(&mut self, game: &Match) -> Result<(), CoreError> {
        if !matches!(game.kind(), MatchKind::League { .. }) {
            return Err(CoreError::NotALeagueMatch(game.id()));
        }

        let score = game
            .result()
            .ok_or_else(|| CoreError::ResultNotEntered(game.id()))?;

        // Checked here as well as at result entry
        if score.is_draw() && !is_draw_allowed(self.sport) {
            return Err(DomainError::IllegalDraw { sport: self.sport }.into());
        }

        let home_index = self.position_of(game.home())?;
        let away_index = self.position_of(game.away())?;

        let (home_outcome, away_outcome) = Outcome::for_score(&score);
        let home_points = points_for(self.sport, home_outcome)?;
        let away_points = points_for(self.sport, away_outcome)?;

        // Both rows are computed before either is written
        let home_row = self.rows[home_index]
            .recorded(score.home(), score.away(), home_outcome, home_points)
            .ok_or_else(|| CoreError::StandingsOverflow(game.home().name().to_string()))?;
        let away_row = self.rows[away_index]
            .recorded(score.away(), score.home(), away_outcome, away_points)
            .ok_or_else(|| CoreError::StandingsOverflow(game.away().name().to_string()))?;
        self.rows[home_index] = home_row;
        self.rows[away_index] = away_row;

        debug!(
            match_id = %game.id(),
            home = %game.home(),
            away = %game.away(),
            score = %score,
            "Ingested match result"
        );

        Ok(())
    }

    /// Returns all rows, ranked.
    #[must_use]
    pub fn ranking(&self) -> Vec<StandingsRow> {
        let mut ranked: Vec<StandingsRow> = self.rows.clone();
        // sort_by is stable, so full ties keep roster order
        ranked.sort_by(compare_rows);
        ranked
    }

    /// Zeroes every row, keeping the participants.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            *row = StandingsRow::new(&row.participant);
        }
    }

    /// Resets the table and replays every finished match with a result.
    ///
    /// # Errors
    ///
    /// Returns the first ingest error. Rows ingested before it stay applied.
    pub fn rebuild<'a>(
        &mut self,
        matches: impl IntoIterator<Item = &'a Match>,
    ) -> Result<(), CoreError> {
        self.reset();
        for game in matches {
            if game.status() == MatchStatus::Finished && game.result_entered() {
                self.ingest(game)?;
            }
        }
        Ok(())
    }

    fn position_of(&self, participant: &Participant) -> Result<usize, CoreError> {
        self.index
            .get(participant.name())
            .copied()
            .ok_or_else(|| CoreError::ParticipantNotFound(participant.name().to_string()))
    }
}

/// Compares two rows by ranking rules.
///
/// Returns `Ordering::Less` if `a` ranks above `b`.
fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.differential.cmp(&a.differential))
        .then_with(|| b.scored.cmp(&a.scored))
}
