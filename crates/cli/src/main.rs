// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod results;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use league::{Calendar, LeagueManager, SlotConfig, StandingsRow};
use league_domain::{DomainError, SportKind};
use serde::Serialize;
use std::path::PathBuf;
use time::Date;
use time::macros::format_description;
use tracing::info;

/// League CLI - generate a double round-robin calendar and its standings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// League name
    #[arg(short, long, default_value = "Super Lig")]
    league: String,

    /// Sport: soccer, volleyball or basketball
    #[arg(short, long, default_value_t = SportKind::Soccer)]
    sport: SportKind,

    /// Participant name, in roster order. Repeat once per participant.
    #[arg(short, long = "team", required = true)]
    teams: Vec<String>,

    /// Season start date (YYYY-MM-DD). Round 1 is anchored on the first Sunday on or after it.
    #[arg(long, value_parser = parse_date)]
    start: Date,

    /// Match day relative to each round's Sunday, e.g. -2 for Friday. Repeatable.
    #[arg(long = "day-offset", allow_negative_numbers = true)]
    day_offsets: Vec<i8>,

    /// Kickoff hour of day. Repeatable.
    #[arg(long = "hour")]
    hours: Vec<u8>,

    /// Nominal match length in minutes
    #[arg(long, default_value_t = SlotConfig::DEFAULT_MATCH_MINUTES)]
    match_minutes: u16,

    /// JSON file of results to report after generating fixtures
    #[arg(short, long)]
    results: Option<PathBuf>,
}

impl Args {
    /// Builds the slot configuration, falling back to defaults for omitted lists.
    fn slot_config(&self) -> Result<SlotConfig, DomainError> {
        let day_offsets = if self.day_offsets.is_empty() {
            SlotConfig::DEFAULT_DAY_OFFSETS.to_vec()
        } else {
            self.day_offsets.clone()
        };
        let hours = if self.hours.is_empty() {
            SlotConfig::DEFAULT_KICKOFF_HOURS.to_vec()
        } else {
            self.hours.clone()
        };
        SlotConfig::new(day_offsets, hours, self.match_minutes)
    }
}

/// What the CLI prints.
#[derive(Debug, Serialize)]
struct Report<'a> {
    calendar: &'a Calendar,
    standings: Vec<StandingsRow>,
}

fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

fn run(args: &Args) -> Result<String> {
    let slots = args
        .slot_config()
        .wrap_err("Invalid slot configuration")?;

    let mut league = LeagueManager::with_slots(&args.league, args.sport, slots)
        .wrap_err("Invalid league")?;
    for team in &args.teams {
        league
            .add_participant(team)
            .wrap_err_with(|| format!("Cannot register '{team}'"))?;
    }

    league
        .generate_fixtures(args.start)
        .wrap_err("Failed to generate fixtures")?;

    if let Some(path) = &args.results {
        let entries = results::load(path)?;
        results::apply(&mut league, &entries)?;
    }

    let report = Report {
        calendar: league.calendar()?,
        standings: league.standings()?,
    };
    serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // JSON goes to stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        league = %args.league,
        sport = %args.sport,
        participants = args.teams.len(),
        "Building league"
    );

    let output = run(&args)?;
    println!("{output}");
    Ok(())
}
