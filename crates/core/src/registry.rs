// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A collection of independent leagues and the match counts across them.
//!
//! Tallies belong to the registry instance. Two registries never share
//! counts, so tests can build as many as they like.

use crate::error::CoreError;
use crate::manager::LeagueManager;
use crate::scheduler::Calendar;
use league_domain::{Match, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use tracing::info;

/// Match counts by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchTally {
    pub friendly: usize,
    pub league: usize,
    pub knockout: usize,
}

impl MatchTally {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.friendly + self.league + self.knockout
    }

    pub(crate) const fn count(&mut self, kind: &MatchKind) {
        match kind {
            MatchKind::Friendly { .. } => self.friendly += 1,
            MatchKind::League { .. } => self.league += 1,
            MatchKind::Knockout { .. } => self.knockout += 1,
        }
    }
}

/// Owns leagues by unique name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeagueRegistry {
    leagues: BTreeMap<String, LeagueManager>,
    tally: MatchTally,
}

impl LeagueRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            leagues: BTreeMap::new(),
            tally: MatchTally {
                friendly: 0,
                league: 0,
                knockout: 0,
            },
        }
    }

    /// Adds a league under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateLeague`] if a league with that name is registered.
    pub fn register(&mut self, league: LeagueManager) -> Result<(), CoreError> {
        let name = league.name().to_string();
        if self.leagues.contains_key(&name) {
            return Err(CoreError::DuplicateLeague(name));
        }

        info!(league = %name, sport = %league.sport(), "Registered league");
        self.leagues.insert(name, league);
        Ok(())
    }

    /// Looks up a league.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LeagueNotFound`] if no league has this name.
    pub fn get(&self, name: &str) -> Result<&LeagueManager, CoreError> {
        self.leagues
            .get(name)
            .ok_or_else(|| CoreError::LeagueNotFound(name.to_string()))
    }

    /// Looks up a league for modification.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LeagueNotFound`] if no league has this name.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut LeagueManager, CoreError> {
        self.leagues
            .get_mut(name)
            .ok_or_else(|| CoreError::LeagueNotFound(name.to_string()))
    }

    /// Removes and returns a league. Its matches stay in the tally.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LeagueNotFound`] if no league has this name.
    pub fn remove(&mut self, name: &str) -> Result<LeagueManager, CoreError> {
        let league = self
            .leagues
            .remove(name)
            .ok_or_else(|| CoreError::LeagueNotFound(name.to_string()))?;
        info!(league = %name, "Removed league");
        Ok(league)
    }

    /// Registered league names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.leagues.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    /// Generates fixtures for one league and counts every generated match.
    ///
    /// # Errors
    ///
    /// Returns an error if the league is not registered or generation fails.
    /// The tally is unchanged on error.
    pub fn generate_fixtures(
        &mut self,
        name: &str,
        start_date: Date,
    ) -> Result<&Calendar, CoreError> {
        let league = self
            .leagues
            .get_mut(name)
            .ok_or_else(|| CoreError::LeagueNotFound(name.to_string()))?;

        let calendar = league.generate_fixtures(start_date)?;
        for game in calendar.matches() {
            self.tally.count(game.kind());
        }
        Ok(calendar)
    }

    /// Counts a match created outside of fixture generation.
    pub const fn track(&mut self, game: &Match) {
        self.tally.count(game.kind());
    }

    #[must_use]
    pub const fn tally(&self) -> MatchTally {
        self.tally
    }
}
