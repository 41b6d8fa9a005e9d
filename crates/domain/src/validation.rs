// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Participant;

/// Validates a participant name.
///
/// Length is counted in characters, not bytes, so "Beşiktaş" and "FCB"
/// are measured the way a reader would count them.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParticipantName`] if the name is shorter
/// than [`Participant::MIN_NAME_LENGTH`] characters.
pub fn validate_participant_name(name: &str) -> Result<(), DomainError> {
    if name.chars().count() < Participant::MIN_NAME_LENGTH {
        return Err(DomainError::InvalidParticipantName {
            name: name.to_string(),
            reason: format!(
                "Name must be at least {} characters",
                Participant::MIN_NAME_LENGTH
            ),
        });
    }
    Ok(())
}

/// Validates that a participant is not already on a roster.
///
/// The comparison is an exact, case-sensitive name match.
///
/// # Errors
///
/// Returns [`DomainError::DuplicateParticipant`] if the name is already present.
pub fn validate_participant_unique(
    candidate: &Participant,
    roster: &[Participant],
) -> Result<(), DomainError> {
    // Rule: within a league, participant names must be unique
    if roster.contains(candidate) {
        return Err(DomainError::DuplicateParticipant(
            candidate.name().to_string(),
        ));
    }
    Ok(())
}

/// Validates a league, stage or organizer name against a minimum length.
///
/// # Errors
///
/// Returns [`DomainError::InvalidCompetitionName`] if the trimmed name is
/// shorter than `min_length` characters.
pub fn validate_competition_name(
    label: &str,
    name: &str,
    min_length: usize,
) -> Result<(), DomainError> {
    if name.trim().chars().count() < min_length {
        return Err(DomainError::InvalidCompetitionName(format!(
            "{label} must be at least {min_length} characters, got '{name}'"
        )));
    }
    Ok(())
}

/// Validates a venue description.
///
/// # Errors
///
/// Returns [`DomainError::InvalidVenue`] if the venue is shorter than 3 characters.
pub fn validate_venue(venue: &str) -> Result<(), DomainError> {
    if venue.trim().chars().count() < 3 {
        return Err(DomainError::InvalidVenue(String::from(
            "Venue must be at least 3 characters",
        )));
    }
    Ok(())
}

/// Validates a referee name.
///
/// # Errors
///
/// Returns [`DomainError::InvalidReferee`] if the name is empty or contains digits.
pub fn validate_referee(referee: &str) -> Result<(), DomainError> {
    if referee.trim().is_empty() {
        return Err(DomainError::InvalidReferee(String::from(
            "Referee name cannot be empty",
        )));
    }
    if referee.chars().any(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidReferee(format!(
            "Referee name cannot contain digits, got '{referee}'"
        )));
    }
    Ok(())
}
