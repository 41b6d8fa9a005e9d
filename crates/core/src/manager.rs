// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One league's roster, calendar, live matches and standings.
//!
//! ## Invariants
//!
//! - The calendar, match store and standings exist together or not at all
//! - Any roster change discards all three
//! - A match result reaches the standings at most once

use crate::error::CoreError;
use crate::find_participant;
use crate::scheduler::{Calendar, FixtureScheduler, SlotConfig};
use crate::standings::{StandingsRow, StandingsTable};
use crate::store::MatchStore;
use league_domain::{
    Match, MatchId, MatchStatus, Participant, SportKind, validate_participant_unique,
};
use std::collections::HashSet;
use time::Date;
use tracing::{info, warn};

/// Orchestrates scheduling, result entry and standings for one league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueManager {
    scheduler: FixtureScheduler,
    roster: Vec<Participant>,
    calendar: Option<Calendar>,
    store: MatchStore,
    standings: Option<StandingsTable>,
    reported: HashSet<MatchId>,
}

impl LeagueManager {
    /// Creates an empty league with the default weekly slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the league name is shorter than three characters.
    pub fn new(league: &str, sport: SportKind) -> Result<Self, CoreError> {
        Self::with_slots(league, sport, SlotConfig::default())
    }

    /// Creates an empty league with custom weekly slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the league name is shorter than three characters.
    pub fn with_slots(
        league: &str,
        sport: SportKind,
        slots: SlotConfig,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            scheduler: FixtureScheduler::new(league, sport, slots)?,
            roster: Vec::new(),
            calendar: None,
            store: MatchStore::new(),
            standings: None,
            reported: HashSet::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.scheduler.league()
    }

    #[must_use]
    pub const fn sport(&self) -> SportKind {
        self.scheduler.sport()
    }

    /// Participants in registration order.
    #[must_use]
    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.calendar.is_some()
    }

    /// Registers a participant at the end of the roster.
    ///
    /// Any generated calendar is discarded along with its matches, standings
    /// and every reported result. Call
    /// [`generate_fixtures`](Self::generate_fixtures) again to rebuild them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is shorter than three characters
    /// - The name is already on the roster (exact, case-sensitive match)
    pub fn add_participant(&mut self, name: &str) -> Result<(), CoreError> {
        let participant = Participant::new(name)?;
        validate_participant_unique(&participant, &self.roster)?;

        self.roster.push(participant);
        info!(
            league = %self.name(),
            participant = %name,
            roster_size = self.roster.len(),
            "Added participant"
        );

        self.discard_calendar();
        Ok(())
    }

    /// Removes a participant and discards any generated calendar.
    ///
    /// As with [`add_participant`](Self::add_participant), the calendar's
    /// matches, standings and reported results are lost.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ParticipantNotFound`] if the name is not on the roster.
    pub fn remove_participant(&mut self, name: &str) -> Result<Participant, CoreError> {
        let index = self
            .roster
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| CoreError::ParticipantNotFound(name.to_string()))?;

        let removed = self.roster.remove(index);
        info!(
            league = %self.name(),
            participant = %name,
            roster_size = self.roster.len(),
            "Removed participant"
        );

        self.discard_calendar();
        Ok(removed)
    }

    /// Generates the double round-robin calendar from the current roster.
    ///
    /// Regenerating replaces the previous calendar, its matches and every
    /// reported result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two participants are registered
    /// - A round does not fit in the weekly slots
    /// - Date arithmetic overflows
    pub fn generate_fixtures(&mut self, start_date: Date) -> Result<&Calendar, CoreError> {
        let calendar = self.scheduler.generate(&self.roster, start_date)?;

        let mut store = MatchStore::new();
        store.insert_all(calendar.matches().cloned())?;

        self.store = store;
        self.standings = Some(StandingsTable::new(self.sport(), &self.roster));
        self.reported.clear();
        Ok(&*self.calendar.insert(calendar))
    }

    /// The generated calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotGenerated`] before fixtures are generated.
    pub fn calendar(&self) -> Result<&Calendar, CoreError> {
        self.calendar.as_ref().ok_or(CoreError::NotGenerated)
    }

    /// Live matches of one round, in slot order.
    ///
    /// # Errors
    ///
    /// Returns an error if fixtures are not generated or the round does not exist.
    pub fn matches_for_round(&self, round: u32) -> Result<Vec<&Match>, CoreError> {
        self.calendar()?.round(round)?;
        Ok(self.store.by_round(round))
    }

    /// Live matches of one participant, in kickoff order.
    ///
    /// # Errors
    ///
    /// Returns an error if fixtures are not generated or the participant is
    /// not on the roster.
    pub fn matches_for_participant(&self, name: &str) -> Result<Vec<&Match>, CoreError> {
        self.calendar()?;
        find_participant(&self.roster, name)?;
        Ok(self.store.by_participant(name))
    }

    /// Live matches kicking off between two dates, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotGenerated`] before fixtures are generated.
    pub fn matches_by_date_range(&self, from: Date, to: Date) -> Result<Vec<&Match>, CoreError> {
        self.calendar()?;
        Ok(self.store.by_date_range(from, to))
    }

    /// Looks up a live match.
    ///
    /// # Errors
    ///
    /// Returns an error if fixtures are not generated or no match has this id.
    pub fn get_match(&self, id: MatchId) -> Result<&Match, CoreError> {
        self.calendar()?;
        self.store.get(id)
    }

    #[must_use]
    pub const fn store(&self) -> &MatchStore {
        &self.store
    }

    /// Records a final score, marks the match finished and counts it in the standings.
    ///
    /// Nothing changes unless every step succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fixtures are not generated
    /// - No match has this id
    /// - A result for this match was already reported
    /// - The match is cancelled or postponed
    /// - A score is negative, or the scores are level in a sport without draws
    pub fn report_result(
        &mut self,
        id: MatchId,
        home_score: i64,
        away_score: i64,
    ) -> Result<&Match, CoreError> {
        let standings = self.standings.as_mut().ok_or(CoreError::NotGenerated)?;

        // Rule: the table does not deduplicate, so the league must
        if self.reported.contains(&id) {
            return Err(CoreError::ResultAlreadyReported(id));
        }

        let game = self.store.get_mut(id)?;
        if !game.status().is_playable() {
            return Err(CoreError::MatchNotPlayable {
                id,
                status: game.status(),
            });
        }

        let mut updated = game.clone();
        updated.set_result(home_score, away_score)?;
        updated.set_status(MatchStatus::Finished);
        standings.ingest(&updated)?;

        *game = updated;
        self.reported.insert(id);

        info!(
            league = %self.scheduler.league(),
            match_id = %id,
            home = %game.home(),
            away = %game.away(),
            home_score,
            away_score,
            "Reported result"
        );

        Ok(&*game)
    }

    /// Moves a live match to a new status.
    ///
    /// Standings are not touched. Use [`rebuild_standings`](Self::rebuild_standings)
    /// after cancelling a match whose result was already counted.
    ///
    /// # Errors
    ///
    /// Returns an error if fixtures are not generated or no match has this id.
    pub fn set_match_status(
        &mut self,
        id: MatchId,
        status: MatchStatus,
    ) -> Result<&Match, CoreError> {
        if self.calendar.is_none() {
            return Err(CoreError::NotGenerated);
        }

        let game = self.store.get_mut(id)?;
        let previous = game.status();
        game.set_status(status);

        info!(
            league = %self.scheduler.league(),
            match_id = %id,
            from = %previous,
            to = %status,
            "Changed match status"
        );

        Ok(&*game)
    }

    /// Recomputes the standings from every finished match with a result.
    ///
    /// # Errors
    ///
    /// Returns an error if fixtures are not generated or a stored result can
    /// no longer be ingested.
    pub fn rebuild_standings(&mut self) -> Result<(), CoreError> {
        let standings = self.standings.as_mut().ok_or(CoreError::NotGenerated)?;

        let counted: Vec<&Match> = self
            .store
            .all()
            .into_iter()
            .filter(|game| game.status() == MatchStatus::Finished && game.result_entered())
            .collect();

        standings.rebuild(counted.iter().copied())?;
        self.reported = counted.iter().map(|game| game.id()).collect();

        info!(
            league = %self.scheduler.league(),
            matches = self.reported.len(),
            "Rebuilt standings"
        );
        Ok(())
    }

    /// The ranked standings.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotGenerated`] before fixtures are generated.
    pub fn standings(&self) -> Result<Vec<StandingsRow>, CoreError> {
        Ok(self.standings_table()?.ranking())
    }

    /// The underlying standings table.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotGenerated`] before fixtures are generated.
    pub fn standings_table(&self) -> Result<&StandingsTable, CoreError> {
        self.standings.as_ref().ok_or(CoreError::NotGenerated)
    }

    /// One participant's standings row.
    ///
    /// # Errors
    ///
    /// Returns an error if fixtures are not generated or the participant is
    /// not in the table.
    pub fn participant_stats(&self, name: &str) -> Result<&StandingsRow, CoreError> {
        self.standings_table()?
            .row(name)
            .ok_or_else(|| CoreError::ParticipantNotFound(name.to_string()))
    }

    fn discard_calendar(&mut self) {
        if let Some(calendar) = self.calendar.take() {
            warn!(
                league = %self.name(),
                rounds = calendar.total_rounds(),
                reported = self.reported.len(),
                "Roster changed, discarding generated calendar"
            );
            self.store.clear();
            self.standings = None;
            self.reported.clear();
        }
    }
}
