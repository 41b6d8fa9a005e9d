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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod manager;
mod registry;
mod scheduler;
mod standings;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::CoreError;
pub use manager::LeagueManager;
pub use registry::{LeagueRegistry, MatchTally};
pub use scheduler::{Calendar, FixtureScheduler, Round, SlotConfig};
pub use standings::{StandingsRow, StandingsTable};
pub use store::{MatchStore, ParticipantSummary};

/// Looks up a registered participant by name.
///
/// This is a read-only lookup over a roster, shared by the manager and any
/// caller holding a plain participant list.
///
/// # Errors
///
/// Returns [`CoreError::ParticipantNotFound`] if no participant has this name.
pub fn find_participant<'a>(
    roster: &'a [league_domain::Participant],
    name: &str,
) -> Result<&'a league_domain::Participant, CoreError> {
    roster
        .iter()
        .find(|p| p.name() == name)
        .ok_or_else(|| CoreError::ParticipantNotFound(name.to_string()))
}
