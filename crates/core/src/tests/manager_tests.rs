// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    FOUR_TEAMS, SEASON_START, TEST_LEAGUE, create_generated_league, create_test_league,
};
use crate::{CoreError, LeagueManager, SlotConfig, StandingsRow};
use league_domain::{DomainError, ErrorKind, Match, MatchId, MatchStatus, SportKind};
use time::macros::date;

fn first_match_id(league: &LeagueManager) -> MatchId {
    league.matches_for_round(1).unwrap()[0].id()
}

#[test]
fn test_new_league_is_empty() {
    let league: LeagueManager = LeagueManager::new(TEST_LEAGUE, SportKind::Soccer).unwrap();
    assert_eq!(league.name(), TEST_LEAGUE);
    assert_eq!(league.sport(), SportKind::Soccer);
    assert!(league.roster().is_empty());
    assert!(!league.is_generated());
}

#[test]
fn test_new_league_rejects_short_name() {
    let result = LeagueManager::new("SL", SportKind::Soccer);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidCompetitionName(_)
        ))
    ));
}

#[test]
fn test_add_participant() {
    let mut league: LeagueManager = create_test_league(&[], SportKind::Soccer);
    league.add_participant("Ankara").unwrap();
    league.add_participant("Bursa").unwrap();

    let names: Vec<&str> = league.roster().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Ankara", "Bursa"]);
}

#[test]
fn test_add_participant_rejects_short_name() {
    let mut league: LeagueManager = create_test_league(&[], SportKind::Soccer);
    let err = league.add_participant("AB").unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidParticipantName { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(league.roster().is_empty());
}

#[test]
fn test_add_participant_rejects_duplicate() {
    let mut league: LeagueManager = create_test_league(&["Ankara"], SportKind::Soccer);
    let err = league.add_participant("Ankara").unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateParticipant(String::from("Ankara")))
    );
    assert_eq!(err.kind(), ErrorKind::RuleViolation);
    assert_eq!(league.roster().len(), 1);
}

#[test]
fn test_duplicate_check_is_case_sensitive() {
    let mut league: LeagueManager = create_test_league(&["Ankara"], SportKind::Soccer);
    assert!(league.add_participant("ankara").is_ok());
    assert_eq!(league.roster().len(), 2);
}

#[test]
fn test_remove_participant() {
    let mut league: LeagueManager = create_test_league(&FOUR_TEAMS, SportKind::Soccer);
    let removed = league.remove_participant("Bursa").unwrap();

    assert_eq!(removed.name(), "Bursa");
    assert_eq!(league.roster().len(), 3);
    assert_eq!(
        league.remove_participant("Bursa"),
        Err(CoreError::ParticipantNotFound(String::from("Bursa")))
    );
}

#[test]
fn test_remove_participant_discards_calendar() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    league.report_result(first_match_id(&league), 1, 0).unwrap();

    league.remove_participant("Denizli").unwrap();

    assert!(!league.is_generated());
    assert!(league.store().is_empty());
    assert_eq!(league.calendar(), Err(CoreError::NotGenerated));
    assert_eq!(league.standings(), Err(CoreError::NotGenerated));

    // Regenerating is the caller's job
    let calendar = league.generate_fixtures(SEASON_START).unwrap();
    assert_eq!(calendar.match_count(), 6);
}

#[test]
fn test_add_participant_discards_calendar() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    league.add_participant("Erzurum").unwrap();

    assert!(!league.is_generated());
    assert_eq!(
        league.matches_for_round(1).unwrap_err(),
        CoreError::NotGenerated
    );
}

#[test]
fn test_add_participant_loses_reported_results() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    league.report_result(first_match_id(&league), 2, 0).unwrap();

    league.add_participant("Erzurum").unwrap();
    league.generate_fixtures(SEASON_START).unwrap();

    let standings: Vec<StandingsRow> = league.standings().unwrap();
    assert_eq!(standings.len(), 5);
    assert!(standings.iter().all(|row| row.played == 0 && row.points == 0));
    assert!(league.store().by_status(MatchStatus::Finished).is_empty());
}

#[test]
fn test_generate_fixtures_requires_two_participants() {
    let mut league: LeagueManager = create_test_league(&["Ankara"], SportKind::Soccer);
    let err = league.generate_fixtures(SEASON_START).unwrap_err();

    assert_eq!(err, CoreError::InsufficientParticipants { count: 1 });
    assert_eq!(err.kind(), ErrorKind::State);
    assert!(!league.is_generated());
}

#[test]
fn test_generate_fixtures_fills_store_and_standings() {
    let league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);

    assert!(league.is_generated());
    assert_eq!(league.calendar().unwrap().match_count(), 12);
    assert_eq!(league.store().len(), 12);

    let standings: Vec<StandingsRow> = league.standings().unwrap();
    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|row| row.played == 0));
}

#[test]
fn test_reads_before_generation_fail() {
    let mut league: LeagueManager = create_test_league(&FOUR_TEAMS, SportKind::Soccer);
    let some_id = MatchId::new(1).unwrap();

    assert_eq!(league.matches_for_round(1), Err(CoreError::NotGenerated));
    assert_eq!(
        league.matches_for_participant("Ankara"),
        Err(CoreError::NotGenerated)
    );
    assert_eq!(
        league.matches_by_date_range(SEASON_START, SEASON_START),
        Err(CoreError::NotGenerated)
    );
    assert_eq!(league.get_match(some_id), Err(CoreError::NotGenerated));
    assert_eq!(league.standings(), Err(CoreError::NotGenerated));
    assert_eq!(
        league.participant_stats("Ankara"),
        Err(CoreError::NotGenerated)
    );
    assert_eq!(
        league.report_result(some_id, 1, 0),
        Err(CoreError::NotGenerated)
    );
    assert_eq!(
        league.set_match_status(some_id, MatchStatus::Finished),
        Err(CoreError::NotGenerated)
    );
    assert_eq!(league.rebuild_standings(), Err(CoreError::NotGenerated));
}

#[test]
fn test_matches_for_round() {
    let league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);

    let games: Vec<&Match> = league.matches_for_round(1).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].home().name(), "Ankara");
    assert_eq!(games[0].away().name(), "Denizli");
    assert_eq!(games[1].home().name(), "Bursa");
    assert_eq!(games[1].away().name(), "Corum");
}

#[test]
fn test_matches_for_round_out_of_range() {
    let league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);

    for round in [0, 7] {
        let err = league.matches_for_round(round).unwrap_err();
        assert_eq!(err, CoreError::RoundNotFound { round, total: 6 });
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

#[test]
fn test_matches_for_participant() {
    let league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);

    let games: Vec<&Match> = league.matches_for_participant("Corum").unwrap();
    assert_eq!(games.len(), 6);
    assert!(
        games
            .windows(2)
            .all(|pair| pair[0].scheduled_at() <= pair[1].scheduled_at())
    );

    assert_eq!(
        league.matches_for_participant("Unknown"),
        Err(CoreError::ParticipantNotFound(String::from("Unknown")))
    );
}

#[test]
fn test_matches_by_date_range() {
    let league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);

    let first_weekend = league
        .matches_by_date_range(date!(2026 - 10 - 23), date!(2026 - 10 - 25))
        .unwrap();
    assert_eq!(first_weekend.len(), 2);
    assert!(first_weekend.iter().all(|game| game.round() == Some(1)));

    let season = league
        .matches_by_date_range(date!(2026 - 10 - 01), date!(2026 - 12 - 31))
        .unwrap();
    assert_eq!(season.len(), 12);
}

#[test]
fn test_report_result_finishes_match_and_updates_standings() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let match_id = first_match_id(&league);

    let game: &Match = league.report_result(match_id, 2, 0).unwrap();
    assert_eq!(game.status(), MatchStatus::Finished);
    assert_eq!(game.result().unwrap().home(), 2);

    let stored: &Match = league.get_match(match_id).unwrap();
    assert_eq!(stored.status(), MatchStatus::Finished);

    let winner: &StandingsRow = league.participant_stats("Ankara").unwrap();
    assert_eq!(winner.played, 1);
    assert_eq!(winner.points, 3);
    assert_eq!(league.participant_stats("Denizli").unwrap().lost, 1);
    assert_eq!(league.standings().unwrap()[0].participant, "Ankara");
}

#[test]
fn test_report_result_only_counts_once() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let match_id = first_match_id(&league);
    league.report_result(match_id, 2, 0).unwrap();

    let err = league.report_result(match_id, 0, 3).unwrap_err();
    assert_eq!(err, CoreError::ResultAlreadyReported(match_id));
    assert_eq!(err.kind(), ErrorKind::State);

    assert_eq!(league.participant_stats("Ankara").unwrap().played, 1);
    assert_eq!(
        league.get_match(match_id).unwrap().result().unwrap().home(),
        2
    );
}

#[test]
fn test_report_result_rejects_unplayable_match() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let match_id = first_match_id(&league);

    for status in [MatchStatus::Cancelled, MatchStatus::Postponed] {
        league.set_match_status(match_id, status).unwrap();
        let err = league.report_result(match_id, 1, 0).unwrap_err();
        assert_eq!(err, CoreError::MatchNotPlayable { id: match_id, status });
        assert_eq!(err.kind(), ErrorKind::State);
    }

    // Back on the schedule, it can be reported
    league
        .set_match_status(match_id, MatchStatus::InProgress)
        .unwrap();
    assert!(league.report_result(match_id, 1, 0).is_ok());
}

#[test]
fn test_report_result_illegal_draw_changes_nothing() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Volleyball);
    let match_id = first_match_id(&league);

    let err = league.report_result(match_id, 2, 2).unwrap_err();
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::IllegalDraw {
            sport: SportKind::Volleyball
        })
    );
    assert_eq!(err.kind(), ErrorKind::RuleViolation);

    let game: &Match = league.get_match(match_id).unwrap();
    assert_eq!(game.status(), MatchStatus::Scheduled);
    assert!(!game.result_entered());
    assert_eq!(league.participant_stats("Ankara").unwrap().played, 0);

    // A decisive result is still accepted afterwards
    assert!(league.report_result(match_id, 3, 1).is_ok());
}

#[test]
fn test_report_result_rejects_negative_score() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let match_id = first_match_id(&league);

    let err = league.report_result(match_id, -1, 0).unwrap_err();
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::InvalidScore { value: -1 })
    );
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_report_result_unknown_match() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let unknown = MatchId::new(99).unwrap();

    assert_eq!(
        league.report_result(unknown, 1, 0),
        Err(CoreError::MatchNotFound(unknown))
    );
}

#[test]
fn test_set_match_status() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let match_id = first_match_id(&league);

    let game: &Match = league
        .set_match_status(match_id, MatchStatus::InProgress)
        .unwrap();
    assert_eq!(game.status(), MatchStatus::InProgress);

    let unknown = MatchId::new(99).unwrap();
    assert_eq!(
        league.set_match_status(unknown, MatchStatus::Finished),
        Err(CoreError::MatchNotFound(unknown))
    );
}

#[test]
fn test_rebuild_standings_drops_cancelled_results() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let round_one: Vec<MatchId> = league
        .matches_for_round(1)
        .unwrap()
        .iter()
        .map(|game| game.id())
        .collect();
    league.report_result(round_one[0], 1, 0).unwrap();
    league.report_result(round_one[1], 2, 2).unwrap();

    league
        .set_match_status(round_one[0], MatchStatus::Cancelled)
        .unwrap();
    league.rebuild_standings().unwrap();

    assert_eq!(league.participant_stats("Ankara").unwrap().played, 0);
    assert_eq!(league.participant_stats("Bursa").unwrap().points, 1);
}

#[test]
fn test_full_season_standings() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Basketball);
    let ids: Vec<MatchId> = league.store().all().iter().map(|game| game.id()).collect();

    // Home side always wins by ten
    for match_id in ids {
        league.report_result(match_id, 80, 70).unwrap();
    }

    let standings: Vec<StandingsRow> = league.standings().unwrap();
    assert!(standings.iter().all(|row| row.played == 6));
    assert!(standings.iter().all(|row| row.won == 3 && row.lost == 3));
    assert_eq!(standings.iter().map(|row| row.points).sum::<u32>(), 36);
    assert_eq!(
        standings.iter().map(|row| row.differential).sum::<i64>(),
        0
    );
    // Every key is level, so the roster order is kept
    let names: Vec<&str> = standings.iter().map(|row| row.participant.as_str()).collect();
    assert_eq!(names, FOUR_TEAMS);
}

#[test]
fn test_regenerating_resets_results() {
    let mut league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    let match_id = first_match_id(&league);
    league.report_result(match_id, 1, 0).unwrap();

    league.generate_fixtures(SEASON_START).unwrap();

    assert!(!league.get_match(match_id).unwrap().result_entered());
    assert_eq!(league.participant_stats("Ankara").unwrap().played, 0);
    assert!(league.report_result(match_id, 1, 0).is_ok());
}

#[test]
fn test_custom_slots_reach_the_scheduler() {
    let slots: SlotConfig = SlotConfig::new(vec![0], vec![20], 90).unwrap();
    let mut league: LeagueManager =
        LeagueManager::with_slots(TEST_LEAGUE, SportKind::Soccer, slots).unwrap();
    league.add_participant("Ankara").unwrap();
    league.add_participant("Bursa").unwrap();
    league.add_participant("Corum").unwrap();

    league.generate_fixtures(SEASON_START).unwrap();

    let game: &Match = league.matches_for_round(1).unwrap()[0];
    let kickoff = game.scheduled_at().unwrap();
    assert_eq!(kickoff.date(), date!(2026 - 10 - 25));
    assert_eq!(kickoff.hour(), 20);
}

#[test]
fn test_participant_stats_unknown() {
    let league: LeagueManager = create_generated_league(&FOUR_TEAMS, SportKind::Soccer);
    assert_eq!(
        league.participant_stats("Unknown"),
        Err(CoreError::ParticipantNotFound(String::from("Unknown")))
    );
}
