//! Forward-scanning available slot search.
//!
//! Starting from the insertion position of the desired interval, walks the
//! booked calendar forward with a candidate window of fixed duration. The
//! candidate is shifted past gaps too small for it and past bookings it would
//! run into, and only ever moves forward in time; acceptance shifts it to
//! start at its own end, so collected slots scan strictly forward.

use crate::calendar::BookedCalendar;
use crate::error::{Result, SlotError};
use crate::index::locate_insertion_index;
use crate::interval::Interval;

/// Find the first `amount` available slots with the duration of `desired`,
/// starting no earlier than `desired.start`.
///
/// Returns the slots in chronological order. Each slot is disjoint from every
/// booked interval and from every other returned slot; the first result is
/// the first feasible window at or after the desired start. `amount == 0`
/// yields an empty result.
///
/// Booking validation reuses this search: a requested interval is still free
/// exactly when the first slot found for `amount = 1` equals it (see
/// [`BookedCalendar::book`]).
///
/// # Errors
///
/// Returns [`SlotError::InvalidInterval`] when the desired interval has
/// `end <= start`.
pub fn find_available_slots(
    desired: &Interval,
    amount: usize,
    calendar: &BookedCalendar,
) -> Result<Vec<Interval>> {
    if desired.end <= desired.start {
        return Err(SlotError::InvalidInterval {
            start: desired.start,
            end: desired.end,
        });
    }

    let booked = calendar.as_slice();
    let duration = desired.duration();
    let mut slots = Vec::with_capacity(amount);
    let mut candidate = desired.clone();
    let mut index = locate_insertion_index(calendar, desired);
    let mut remaining = amount;

    while remaining > 0 {
        let previous = index.checked_sub(1).and_then(|i| booked.get(i));

        // The insertion search can land the candidate behind the booking that
        // now precedes it; pull it flush with that booking's end before any
        // other check. The candidate never moves backward.
        if let Some(prev) = previous {
            if candidate.start < prev.end {
                candidate = candidate.shift_to(prev.end);
                continue;
            }
        }

        let Some(next) = booked.get(index) else {
            // No bookings ahead: the candidate fits as-is.
            candidate = accept(&mut slots, candidate);
            remaining -= 1;
            continue;
        };

        // Free room before `next` runs from the end of the previous booking,
        // or from the candidate itself when there is none.
        let room_start = previous.map_or(candidate.start, |prev| prev.end);

        if next.start - room_start < duration {
            // Gap too small for this duration: skip past `next`.
            candidate = candidate.shift_to(next.end);
            index += 1;
        } else if previous.is_none_or(|prev| candidate.start != prev.end) {
            // Candidate sits inside the gap, not flush against the previous
            // booking: accept unless it runs into `next`.
            if candidate.end <= next.start {
                candidate = accept(&mut slots, candidate);
                remaining -= 1;
            } else {
                index += 1;
            }
        } else {
            // Flush against the previous booking with enough room before
            // `next`: accept.
            candidate = accept(&mut slots, candidate);
            remaining -= 1;
        }
    }

    Ok(slots)
}

/// Record an accepted slot and return the follow-up candidate, shifted to
/// start exactly where the accepted slot ends.
fn accept(slots: &mut Vec<Interval>, candidate: Interval) -> Interval {
    let shifted = candidate.shift_to(candidate.end);
    slots.push(candidate);
    shifted
}
