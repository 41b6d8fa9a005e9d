// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-interval overlap, shared by fixture slot assignment and any
//! booking-style double-booking check.

use time::{Duration, PrimitiveDateTime};

/// Returns whether two half-open intervals `[start, start + duration)` overlap.
///
/// Intervals that merely touch (one ends exactly when the other starts) do
/// not overlap. A zero or negative duration is an empty interval and never
/// overlaps anything. An interval whose end overflows the calendar is
/// treated as open-ended.
#[must_use]
pub fn overlaps(
    start_a: PrimitiveDateTime,
    duration_a: Duration,
    start_b: PrimitiveDateTime,
    duration_b: Duration,
) -> bool {
    if !duration_a.is_positive() || !duration_b.is_positive() {
        return false;
    }

    let ends_after = |start: PrimitiveDateTime, duration: Duration, other: PrimitiveDateTime| {
        start
            .checked_add(duration)
            .is_none_or(|end| end > other)
    };

    ends_after(start_a, duration_a, start_b) && ends_after(start_b, duration_b, start_a)
}
