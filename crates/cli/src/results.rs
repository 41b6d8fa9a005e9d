// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match results read from a JSON file.
//!
//! The file holds an array of entries naming the home and away side:
//!
//! ```text
//! [
//!   { "home": "Ankara", "away": "Denizli", "home_score": 2, "away_score": 0 },
//!   { "home": "Bursa",  "away": "Corum",   "home_score": 1, "away_score": 1 }
//! ]
//! ```
//!
//! Each ordered pair plays exactly one fixture, so home and away identify it.

use color_eyre::eyre::{Result, WrapErr, eyre};
use league::LeagueManager;
use league_domain::{Match, MatchId};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// One reported result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultEntry {
    pub home: String,
    pub away: String,
    pub home_score: i64,
    pub away_score: i64,
}

/// Reads and parses a results file.
pub fn load(path: &Path) -> Result<Vec<ResultEntry>> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read results file {}", path.display()))?;
    parse(&contents).wrap_err_with(|| format!("Malformed results file {}", path.display()))
}

/// Parses a JSON array of results.
pub fn parse(json: &str) -> serde_json::Result<Vec<ResultEntry>> {
    serde_json::from_str(json)
}

/// Reports every entry to the league, in file order.
///
/// Stops at the first entry that cannot be reported.
pub fn apply(league: &mut LeagueManager, entries: &[ResultEntry]) -> Result<()> {
    for entry in entries {
        let id = find_fixture(league, &entry.home, &entry.away)?;
        league
            .report_result(id, entry.home_score, entry.away_score)
            .wrap_err_with(|| {
                format!(
                    "Failed to report {} {}-{} {}",
                    entry.home, entry.home_score, entry.away_score, entry.away
                )
            })?;
    }

    info!(league = %league.name(), results = entries.len(), "Applied results");
    Ok(())
}

fn find_fixture(league: &LeagueManager, home: &str, away: &str) -> Result<MatchId> {
    league
        .store()
        .home_matches_of(home)
        .into_iter()
        .find(|game| game.away().name() == away)
        .map(Match::id)
        .ok_or_else(|| eyre!("No fixture with {home} at home to {away}"))
}
