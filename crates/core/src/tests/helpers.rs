// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixtureScheduler, LeagueManager, SlotConfig};
use league_domain::{Match, MatchId, MatchKind, Participant, SportKind};
use time::Date;
use time::macros::date;

/// A Monday. The first round is anchored on Sunday 2026-10-25.
pub const SEASON_START: Date = date!(2026 - 10 - 19);

pub const TEST_LEAGUE: &str = "Super Lig";

pub const FOUR_TEAMS: [&str; 4] = ["Ankara", "Bursa", "Corum", "Denizli"];

pub fn create_test_roster(names: &[&str]) -> Vec<Participant> {
    names
        .iter()
        .map(|name| Participant::new(name).unwrap())
        .collect()
}

/// A roster of `count` distinct participants named "Team 01", "Team 02", ...
pub fn create_numbered_roster(count: usize) -> Vec<Participant> {
    (1..=count)
        .map(|i| Participant::new(&format!("Team {i:02}")).unwrap())
        .collect()
}

pub fn create_test_scheduler(sport: SportKind) -> FixtureScheduler {
    FixtureScheduler::new(TEST_LEAGUE, sport, SlotConfig::default()).unwrap()
}

pub fn create_test_league(names: &[&str], sport: SportKind) -> LeagueManager {
    let mut league: LeagueManager = LeagueManager::new(TEST_LEAGUE, sport).unwrap();
    for name in names {
        league.add_participant(name).unwrap();
    }
    league
}

pub fn create_generated_league(names: &[&str], sport: SportKind) -> LeagueManager {
    let mut league: LeagueManager = create_test_league(names, sport);
    league.generate_fixtures(SEASON_START).unwrap();
    league
}

pub fn create_league_match(id: u64, home: &str, away: &str, sport: SportKind) -> Match {
    Match::new(
        MatchId::new(id).unwrap(),
        Participant::new(home).unwrap(),
        Participant::new(away).unwrap(),
        sport,
        MatchKind::league(TEST_LEAGUE, 1).unwrap(),
    )
    .unwrap()
}

/// A league match with its final score already entered.
pub fn create_played_match(
    id: u64,
    home: &str,
    away: &str,
    sport: SportKind,
    home_score: i64,
    away_score: i64,
) -> Match {
    let mut game: Match = create_league_match(id, home, away, sport);
    game.set_result(home_score, away_score).unwrap();
    game
}
