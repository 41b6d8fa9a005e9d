// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-sport point rules.
//!
//! Two separate questions are answered here:
//!
//! - Is a drawn result legal in this sport? ([`is_draw_allowed`])
//! - How many points does an outcome earn? ([`points_for`])
//!
//! Result entry must ask the first question before a tied score is stored.
//! The points table never answers it.

use crate::error::DomainError;
use crate::types::{Score, SportKind};
use serde::{Deserialize, Serialize};

/// The outcome of a match from one participant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The participant scored more.
    Win,
    /// Both sides scored the same.
    Draw,
    /// The participant scored less.
    Loss,
}

impl Outcome {
    /// Derives the outcome for one side from its own and the opposing score.
    #[must_use]
    pub const fn from_scores(own: u32, opposing: u32) -> Self {
        if own > opposing {
            Self::Win
        } else if own < opposing {
            Self::Loss
        } else {
            Self::Draw
        }
    }

    /// Returns the home side's and away side's outcomes for a score.
    #[must_use]
    pub const fn for_score(score: &Score) -> (Self, Self) {
        (
            Self::from_scores(score.home(), score.away()),
            Self::from_scores(score.away(), score.home()),
        )
    }
}

/// Points awarded per outcome in one sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRules {
    /// Points for a win.
    pub win: u32,
    /// Points for a draw. `None` when draws are not a legal outcome.
    pub draw: Option<u32>,
    /// Points for a loss.
    pub loss: u32,
}

impl PointRules {
    /// Returns the point table for a sport.
    #[must_use]
    pub const fn for_sport(sport: SportKind) -> Self {
        match sport {
            SportKind::Soccer => Self {
                win: 3,
                draw: Some(1),
                loss: 0,
            },
            SportKind::Volleyball | SportKind::Basketball => Self {
                win: 3,
                draw: None,
                loss: 0,
            },
        }
    }
}

/// Returns whether a tied result is a legal outcome in a sport.
#[must_use]
pub const fn is_draw_allowed(sport: SportKind) -> bool {
    matches!(sport, SportKind::Soccer)
}

/// Returns the points an outcome earns in a sport.
///
/// # Errors
///
/// Returns [`DomainError::IllegalDraw`] when asked for draw points in a
/// sport whose table has no draw entry.
pub const fn points_for(sport: SportKind, outcome: Outcome) -> Result<u32, DomainError> {
    let rules = PointRules::for_sport(sport);
    match outcome {
        Outcome::Win => Ok(rules.win),
        Outcome::Loss => Ok(rules.loss),
        Outcome::Draw => match rules.draw {
            Some(points) => Ok(points),
            None => Err(DomainError::IllegalDraw { sport }),
        },
    }
}
