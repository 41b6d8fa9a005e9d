// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Double round-robin fixture generation using the circle method.
//!
//! This module turns an ordered roster into a calendar of rounds:
//! - Odd rosters are padded with a BYE that never plays
//! - The first leg pairs position `i` with position `N' - 1 - i`, then keeps
//!   position 0 fixed and rotates everyone else one place
//! - The second leg repeats the first with home and away swapped
//! - Each round is anchored on a Sunday, seven days after the previous one
//! - Matches fill the weekly slots day by day, hour by hour
//!
//! ## Invariants
//!
//! - Every unordered pair meets exactly once per leg, with roles swapped between legs
//! - No two matches of a round share a slot or overlap in time
//! - Identical input always yields an identical calendar, ids included
//!
//! ## Example
//!
//! ```text
//! roster = [A, B, C, D], start = Monday 2026-10-19
//!
//! Round 1 (anchor Sun Oct 25): A-D Fri 13:00, B-C Fri 15:00
//! Round 2 (anchor Sun Nov 1):  A-C Fri 13:00, D-B Fri 15:00
//! Round 3 (anchor Sun Nov 8):  A-B Fri 13:00, C-D Fri 15:00
//! Round 4..6: rounds 1..3 with home and away swapped
//! ```

use crate::error::CoreError;
use league_domain::{
    DomainError, Match, MatchId, MatchKind, Participant, SportKind, overlaps,
    validate_competition_name,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Date, Duration, PrimitiveDateTime, Time};
use tracing::{debug, info};

/// Weekly time slots that a round's matches are spread across.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    day_offsets: Vec<i8>,
    kickoff_hours: Vec<u8>,
    match_minutes: u16,
}

impl SlotConfig {
    /// Friday, Saturday and Sunday relative to the Sunday anchor.
    pub const DEFAULT_DAY_OFFSETS: [i8; 3] = [-2, -1, 0];
    /// Kickoff hours tried in order on each match day.
    pub const DEFAULT_KICKOFF_HOURS: [u8; 5] = [13, 15, 17, 19, 21];
    /// Nominal length of a match, used to keep kickoffs from overlapping.
    pub const DEFAULT_MATCH_MINUTES: u16 = 105;

    /// Creates a validated slot configuration.
    ///
    /// # Arguments
    ///
    /// * `day_offsets` - Days relative to the round's Sunday anchor, in fill order
    /// * `kickoff_hours` - Hours of day, in fill order
    /// * `match_minutes` - Nominal match length
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSlotConfig`] if:
    /// - Either list is empty or contains duplicates
    /// - There are more than 7 day offsets, or an offset is outside `-6..=6`
    /// - An hour is outside `0..=23`
    /// - The match length is zero
    pub fn new(
        day_offsets: Vec<i8>,
        kickoff_hours: Vec<u8>,
        match_minutes: u16,
    ) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidSlotConfig { reason };

        if day_offsets.is_empty() {
            return Err(invalid(String::from("At least one match day is required")));
        }
        if day_offsets.len() > 7 {
            return Err(invalid(format!(
                "At most 7 match days per week, got {}",
                day_offsets.len()
            )));
        }
        if let Some(offset) = day_offsets.iter().find(|o| !(-6..=6).contains(*o)) {
            return Err(invalid(format!(
                "Day offset {offset} is outside the range -6 to 6"
            )));
        }
        if has_duplicates(&day_offsets) {
            return Err(invalid(String::from("Day offsets must be unique")));
        }

        if kickoff_hours.is_empty() {
            return Err(invalid(String::from("At least one kickoff hour is required")));
        }
        if let Some(hour) = kickoff_hours.iter().find(|h| **h > 23) {
            return Err(invalid(format!("Kickoff hour {hour} is outside 0 to 23")));
        }
        if has_duplicates(&kickoff_hours) {
            return Err(invalid(String::from("Kickoff hours must be unique")));
        }

        if match_minutes == 0 {
            return Err(invalid(String::from("Match length must be positive")));
        }

        Ok(Self {
            day_offsets,
            kickoff_hours,
            match_minutes,
        })
    }

    #[must_use]
    pub fn day_offsets(&self) -> &[i8] {
        &self.day_offsets
    }

    #[must_use]
    pub fn kickoff_hours(&self) -> &[u8] {
        &self.kickoff_hours
    }

    /// Nominal match length.
    #[must_use]
    pub fn match_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.match_minutes))
    }

    /// Number of day-and-hour slots per round, before overlap is considered.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.day_offsets.len() * self.kickoff_hours.len()
    }

    /// Picks kickoff times for `count` matches in the round anchored on `anchor`.
    ///
    /// Slots are taken day by day in configured order, and within a day hour
    /// by hour. A slot that would overlap an already-taken kickoff is skipped.
    fn assign(&self, anchor: Date, count: usize) -> Result<Vec<PrimitiveDateTime>, DomainError> {
        let duration = self.match_duration();
        let mut taken: Vec<PrimitiveDateTime> = Vec::with_capacity(count);

        for &offset in &self.day_offsets {
            let day = anchor
                .checked_add(Duration::days(i64::from(offset)))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("offsetting {anchor} by {offset} days"),
                })?;

            for &hour in &self.kickoff_hours {
                if taken.len() == count {
                    return Ok(taken);
                }

                let time = Time::from_hms(hour, 0, 0).map_err(|err| {
                    DomainError::InvalidSlotConfig {
                        reason: err.to_string(),
                    }
                })?;
                let kickoff = PrimitiveDateTime::new(day, time);

                if taken
                    .iter()
                    .any(|&other| overlaps(other, duration, kickoff, duration))
                {
                    continue;
                }
                taken.push(kickoff);
            }
        }

        if taken.len() == count {
            Ok(taken)
        } else {
            Err(DomainError::InsufficientSlots {
                required: count,
                available: taken.len(),
            })
        }
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            day_offsets: Self::DEFAULT_DAY_OFFSETS.to_vec(),
            kickoff_hours: Self::DEFAULT_KICKOFF_HOURS.to_vec(),
            match_minutes: Self::DEFAULT_MATCH_MINUTES,
        }
    }
}

/// One matchday of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number across both legs.
    pub number: u32,
    /// 1 for the first leg, 2 for the second.
    pub leg: u8,
    /// The Sunday the round's day offsets are measured from.
    pub anchor: Date,
    /// Matches in slot order.
    pub matches: Vec<Match>,
}

/// The full double round-robin calendar for one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    league: String,
    sport: SportKind,
    start_date: Date,
    rounds: Vec<Round>,
}

impl Calendar {
    #[must_use]
    pub fn league(&self) -> &str {
        &self.league
    }

    #[must_use]
    pub const fn sport(&self) -> SportKind {
        self.sport
    }

    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds across both legs.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn total_rounds(&self) -> u32 {
        // Safe cast: round count is bounded by the roster size
        self.rounds.len() as u32
    }

    /// Returns a round by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RoundNotFound`] if `number` is outside `1..=total_rounds`.
    pub fn round(&self, number: u32) -> Result<&Round, CoreError> {
        number
            .checked_sub(1)
            .and_then(|index| self.rounds.get(index as usize))
            .ok_or(CoreError::RoundNotFound {
                round: number,
                total: self.total_rounds(),
            })
    }

    /// All matches in round order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|round| round.matches.iter())
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|round| round.matches.len()).sum()
    }

    /// All matches the named participant plays in, in round order.
    #[must_use]
    pub fn matches_for_participant(&self, name: &str) -> Vec<&Match> {
        self.matches().filter(|game| game.involves(name)).collect()
    }
}

/// Generates double round-robin calendars.
///
/// The scheduler holds only configuration and never mutates itself, so one
/// instance may be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureScheduler {
    league: String,
    sport: SportKind,
    slots: SlotConfig,
}

impl FixtureScheduler {
    /// Creates a scheduler for one league.
    ///
    /// # Errors
    ///
    /// Returns an error if the league name is shorter than three characters.
    pub fn new(league: &str, sport: SportKind, slots: SlotConfig) -> Result<Self, DomainError> {
        validate_competition_name("League name", league, MatchKind::MIN_LEAGUE_NAME_LENGTH)?;
        Ok(Self {
            league: league.to_string(),
            sport,
            slots,
        })
    }

    #[must_use]
    pub fn league(&self) -> &str {
        &self.league
    }

    #[must_use]
    pub const fn sport(&self) -> SportKind {
        self.sport
    }

    #[must_use]
    pub const fn slots(&self) -> &SlotConfig {
        &self.slots
    }

    /// Generates the full calendar for `participants`, starting from `start_date`.
    ///
    /// The first round is anchored on the first Sunday on or after `start_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are fewer than two participants
    /// - A participant appears twice
    /// - A round has more matches than the slot configuration can place
    /// - Date arithmetic overflows
    pub fn generate(
        &self,
        participants: &[Participant],
        start_date: Date,
    ) -> Result<Calendar, CoreError> {
        if participants.len() < 2 {
            return Err(CoreError::InsufficientParticipants {
                count: participants.len(),
            });
        }

        let mut seen: HashSet<&Participant> = HashSet::with_capacity(participants.len());
        if let Some(duplicate) = participants.iter().find(|p| !seen.insert(*p)) {
            return Err(DomainError::DuplicateParticipant(duplicate.name().to_string()).into());
        }

        let per_round = participants.len() / 2;
        if per_round > self.slots.capacity() {
            return Err(DomainError::InsufficientSlots {
                required: per_round,
                available: self.slots.capacity(),
            }
            .into());
        }

        let first_leg = circle_rounds(participants.len());
        let legs = first_leg
            .iter()
            .map(|pairings| (1_u8, pairings))
            .chain(first_leg.iter().map(|pairings| (2_u8, pairings)));

        let mut anchor = first_sunday_on_or_after(start_date)?;
        let mut rounds: Vec<Round> = Vec::with_capacity(first_leg.len() * 2);

        for (index, (leg, pairings)) in legs.enumerate() {
            if index > 0 {
                anchor = anchor.checked_add(Duration::weeks(1)).ok_or_else(|| {
                    DomainError::DateArithmeticOverflow {
                        operation: format!("advancing round anchor past {anchor}"),
                    }
                })?;
            }

            // Safe cast: round count is bounded by the slot capacity check above
            #[allow(clippy::cast_possible_truncation)]
            let number = (index + 1) as u32;
            let kickoffs = self.slots.assign(anchor, pairings.len())?;

            let matches = pairings
                .iter()
                .zip(kickoffs)
                .enumerate()
                .map(|(position, (&(first, second), kickoff))| {
                    let (home, away) = if leg == 1 {
                        (&participants[first], &participants[second])
                    } else {
                        (&participants[second], &participants[first])
                    };
                    self.build_match(number, position, home, away, kickoff)
                })
                .collect::<Result<Vec<Match>, DomainError>>()?;

            debug!(
                league = %self.league,
                round = number,
                leg,
                %anchor,
                matches = matches.len(),
                "Generated round"
            );

            rounds.push(Round {
                number,
                leg,
                anchor,
                matches,
            });
        }

        let calendar = Calendar {
            league: self.league.clone(),
            sport: self.sport,
            start_date,
            rounds,
        };

        info!(
            league = %self.league,
            sport = %self.sport,
            participants = participants.len(),
            rounds = calendar.total_rounds(),
            matches = calendar.match_count(),
            "Generated fixture calendar"
        );

        Ok(calendar)
    }

    fn build_match(
        &self,
        round: u32,
        position: usize,
        home: &Participant,
        away: &Participant,
        kickoff: PrimitiveDateTime,
    ) -> Result<Match, DomainError> {
        let id = fixture_id(round, position, self.sport, home, away)?;
        let kind = MatchKind::league(&self.league, round)?;
        Ok(Match::new(id, home.clone(), away.clone(), self.sport, kind)?.with_schedule(kickoff))
    }
}

/// Pairings for every round of the first leg, as roster indices.
///
/// Odd rosters are padded with a BYE at index `n`; pairings involving it are
/// dropped, so the participant drawn against the BYE sits the round out.
pub(crate) fn circle_rounds(n: usize) -> Vec<Vec<(usize, usize)>> {
    if n < 2 {
        return Vec::new();
    }

    let size = if n % 2 == 0 { n } else { n + 1 };
    let mut order: Vec<usize> = (0..size).collect();
    let mut rounds: Vec<Vec<(usize, usize)>> = Vec::with_capacity(size - 1);

    for _ in 0..size - 1 {
        let pairings = (0..size / 2)
            .map(|i| (order[i], order[size - 1 - i]))
            .filter(|&(home, away)| home < n && away < n)
            .collect();
        rounds.push(pairings);

        // Position 0 stays put; the last element moves to position 1
        order[1..].rotate_right(1);
    }

    rounds
}

/// Returns `date` if it is a Sunday, otherwise the next Sunday.
fn first_sunday_on_or_after(date: Date) -> Result<Date, DomainError> {
    let days_until = (7 - i64::from(date.weekday().number_days_from_sunday())) % 7;
    date.checked_add(Duration::days(days_until))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("finding the first Sunday after {date}"),
        })
}

/// Derives a fixture id that is stable for identical input and unique across
/// the calendar.
///
/// Bits 40 and up hold the round, bits 24..40 the position within the round,
/// and the low 24 bits a hash of the sport and both participants. Round and
/// position alone already make the id unique.
fn fixture_id(
    round: u32,
    position: usize,
    sport: SportKind,
    home: &Participant,
    away: &Participant,
) -> Result<MatchId, DomainError> {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    let position = u64::try_from(position)
        .ok()
        .filter(|p| *p <= 0xFFFF)
        .ok_or_else(|| DomainError::InvalidSlotConfig {
            reason: format!("Round {round} has too many matches to number"),
        })?;

    let hash = [sport.as_str(), home.name(), away.name()]
        .into_iter()
        .flat_map(|part| part.bytes().chain(std::iter::once(0)))
        .fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });

    MatchId::new((u64::from(round) << 40) | (position << 24) | (hash & 0x00FF_FFFF))
}

fn has_duplicates<T: Eq + std::hash::Hash>(values: &[T]) -> bool {
    let mut seen: HashSet<&T> = HashSet::with_capacity(values.len());
    values.iter().any(|value| !seen.insert(value))
}
