// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Keyed match storage with filtered lookups.
//!
//! Every list returned by the store is ordered by kickoff time, then by id.
//! Unscheduled matches sort after scheduled ones.

use crate::error::CoreError;
use crate::registry::MatchTally;
use league_domain::{Match, MatchId, MatchStatus, SportKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use time::{Date, Duration, PrimitiveDateTime};

/// Counts of one participant's stored matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub total: usize,
    pub home: usize,
    pub away: usize,
    pub finished: usize,
}

/// In-memory match collection keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchStore {
    matches: BTreeMap<MatchId, Match>,
}

impl MatchStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matches: BTreeMap::new(),
        }
    }

    /// Adds a match.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateMatch`] if a match with the same id is stored.
    pub fn insert(&mut self, game: Match) -> Result<(), CoreError> {
        if self.matches.contains_key(&game.id()) {
            return Err(CoreError::DuplicateMatch(game.id()));
        }
        self.matches.insert(game.id(), game);
        Ok(())
    }

    /// Adds every match, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateMatch`] if any id is already stored or
    /// appears twice in `games`.
    pub fn insert_all(&mut self, games: impl IntoIterator<Item = Match>) -> Result<(), CoreError> {
        let games: Vec<Match> = games.into_iter().collect();

        let mut incoming: HashSet<MatchId> = HashSet::with_capacity(games.len());
        for game in &games {
            if self.matches.contains_key(&game.id()) || !incoming.insert(game.id()) {
                return Err(CoreError::DuplicateMatch(game.id()));
            }
        }

        self.matches
            .extend(games.into_iter().map(|game| (game.id(), game)));
        Ok(())
    }

    /// Swaps in a new version of a stored match, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MatchNotFound`] if no match has this id.
    pub fn replace(&mut self, game: Match) -> Result<Match, CoreError> {
        let slot = self
            .matches
            .get_mut(&game.id())
            .ok_or(CoreError::MatchNotFound(game.id()))?;
        Ok(std::mem::replace(slot, game))
    }

    /// Removes and returns a match.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MatchNotFound`] if no match has this id.
    pub fn remove(&mut self, id: MatchId) -> Result<Match, CoreError> {
        self.matches
            .remove(&id)
            .ok_or(CoreError::MatchNotFound(id))
    }

    /// Looks up a match by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MatchNotFound`] if no match has this id.
    pub fn get(&self, id: MatchId) -> Result<&Match, CoreError> {
        self.matches.get(&id).ok_or(CoreError::MatchNotFound(id))
    }

    /// Looks up a match by id for modification.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MatchNotFound`] if no match has this id.
    pub fn get_mut(&mut self, id: MatchId) -> Result<&mut Match, CoreError> {
        self.matches
            .get_mut(&id)
            .ok_or(CoreError::MatchNotFound(id))
    }

    #[must_use]
    pub fn contains(&self, id: MatchId) -> bool {
        self.matches.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn clear(&mut self) {
        self.matches.clear();
    }

    /// Every stored match.
    #[must_use]
    pub fn all(&self) -> Vec<&Match> {
        self.filtered(|_| true)
    }

    /// League matches of one round.
    #[must_use]
    pub fn by_round(&self, round: u32) -> Vec<&Match> {
        self.filtered(|game| game.round() == Some(round))
    }

    /// Matches the named participant plays in, home or away.
    #[must_use]
    pub fn by_participant(&self, name: &str) -> Vec<&Match> {
        self.filtered(|game| game.involves(name))
    }

    #[must_use]
    pub fn home_matches_of(&self, name: &str) -> Vec<&Match> {
        self.filtered(|game| game.home().name() == name)
    }

    #[must_use]
    pub fn away_matches_of(&self, name: &str) -> Vec<&Match> {
        self.filtered(|game| game.away().name() == name)
    }

    /// Matches kicking off on any day from `from` to `to`, both inclusive.
    ///
    /// Unscheduled matches are never included. An inverted range is empty.
    #[must_use]
    pub fn by_date_range(&self, from: Date, to: Date) -> Vec<&Match> {
        self.filtered(|game| {
            game.scheduled_at()
                .is_some_and(|at| (from..=to).contains(&at.date()))
        })
    }

    #[must_use]
    pub fn by_status(&self, status: MatchStatus) -> Vec<&Match> {
        self.filtered(|game| game.status() == status)
    }

    /// Matches whose league, stage or organizer equals `competition`.
    #[must_use]
    pub fn by_competition(&self, competition: &str) -> Vec<&Match> {
        self.filtered(|game| game.competition() == competition)
    }

    #[must_use]
    pub fn by_sport(&self, sport: SportKind) -> Vec<&Match> {
        self.filtered(|game| game.sport() == sport)
    }

    /// Matches whose kind has this label: `friendly`, `league` or `knockout`.
    #[must_use]
    pub fn by_kind(&self, label: &str) -> Vec<&Match> {
        self.filtered(|game| game.kind().label() == label)
    }

    /// Still-scheduled matches kicking off from `now` to `now + within`,
    /// both inclusive.
    ///
    /// A window reaching past the calendar's range is open-ended.
    #[must_use]
    pub fn upcoming(&self, now: PrimitiveDateTime, within: Duration) -> Vec<&Match> {
        let until = now.checked_add(within);
        self.filtered(|game| {
            game.status() == MatchStatus::Scheduled
                && game
                    .scheduled_at()
                    .is_some_and(|at| at >= now && until.is_none_or(|until| at <= until))
        })
    }

    /// Matches that kicked off before `now`, whatever their status.
    #[must_use]
    pub fn past(&self, now: PrimitiveDateTime) -> Vec<&Match> {
        self.filtered(|game| game.scheduled_at().is_some_and(|at| at < now))
    }

    /// Number of stored matches of each kind.
    #[must_use]
    pub fn kind_summary(&self) -> MatchTally {
        self.matches
            .values()
            .fold(MatchTally::default(), |mut tally, game| {
                tally.count(game.kind());
                tally
            })
    }

    /// The scheduled match with the earliest kickoff.
    #[must_use]
    pub fn earliest(&self) -> Option<&Match> {
        self.matches
            .values()
            .filter(|game| game.scheduled_at().is_some())
            .min_by_key(|game| (game.scheduled_at(), game.id()))
    }

    /// The scheduled match with the latest kickoff.
    #[must_use]
    pub fn latest(&self) -> Option<&Match> {
        self.matches
            .values()
            .filter(|game| game.scheduled_at().is_some())
            .max_by_key(|game| (game.scheduled_at(), game.id()))
    }

    /// Number of stored matches in each status, in status order.
    ///
    /// Statuses without matches are reported with a count of zero.
    #[must_use]
    pub fn status_summary(&self) -> Vec<(MatchStatus, usize)> {
        MatchStatus::ALL
            .iter()
            .map(|&status| {
                let count = self
                    .matches
                    .values()
                    .filter(|game| game.status() == status)
                    .count();
                (status, count)
            })
            .collect()
    }

    #[must_use]
    pub fn participant_summary(&self, name: &str) -> ParticipantSummary {
        self.matches
            .values()
            .filter(|game| game.involves(name))
            .fold(ParticipantSummary::default(), |mut summary, game| {
                summary.total += 1;
                if game.home().name() == name {
                    summary.home += 1;
                } else {
                    summary.away += 1;
                }
                if game.status() == MatchStatus::Finished {
                    summary.finished += 1;
                }
                summary
            })
    }

    fn filtered(&self, keep: impl Fn(&Match) -> bool) -> Vec<&Match> {
        let mut selected: Vec<&Match> = self.matches.values().filter(|&game| keep(game)).collect();
        selected.sort_by_key(|game| (kickoff_key(game), game.id()));
        selected
    }
}

/// Sort key placing unscheduled matches last.
fn kickoff_key(game: &Match) -> (bool, Option<PrimitiveDateTime>) {
    (game.scheduled_at().is_none(), game.scheduled_at())
}
