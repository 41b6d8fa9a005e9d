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
mod fixture;
mod interval;
mod point_rules;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{DomainError, ErrorKind};
pub use fixture::{Match, MatchKind};
pub use interval::overlaps;
pub use point_rules::{Outcome, PointRules, is_draw_allowed, points_for};
pub use types::{MatchId, MatchStatus, Participant, Score, SportKind};
pub use validation::{
    validate_competition_name, validate_participant_name, validate_participant_unique,
    validate_referee, validate_venue,
};
