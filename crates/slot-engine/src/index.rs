//! Binary-search insertion position over the booked calendar.
//!
//! Finds how many booked intervals precede a target interval, which is where
//! the forward slot scan starts. Runs in O(log M) comparator calls for M
//! booked intervals.

use crate::calendar::BookedCalendar;
use crate::interval::Interval;
use std::cmp::Ordering;

/// Three-way comparison of a booked interval against the search target.
///
/// The ordering is asymmetric by contract:
///
/// - `Equal` when `booked.start == target.start` AND
///   `booked.end == target.start` — note the end is compared against the
///   target's *start*, so this branch only fires for a zero-length booked
///   interval, which a valid calendar never contains;
/// - `Greater` when the booked interval starts after the target starts and
///   ends after the target ends;
/// - `Less` otherwise (the booked interval is before or overlapping).
fn compare_to_target(booked: &Interval, target: &Interval) -> Ordering {
    if booked.start == target.start && booked.end == target.start {
        Ordering::Equal
    } else if booked.start > target.start && booked.end > target.end {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Locate the insertion position of `target` in the calendar: the count of
/// booked intervals that precede it under [`compare_to_target`].
///
/// Returns 0 for an empty calendar or a target before all bookings, and
/// `calendar.len()` for a target after all bookings. Given the same calendar
/// and target, the result is always the same.
pub fn locate_insertion_index(calendar: &BookedCalendar, target: &Interval) -> usize {
    let booked = calendar.as_slice();
    let mut left = 0;
    let mut right = booked.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match compare_to_target(&booked[mid], target) {
            Ordering::Equal => return mid,
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    // First index whose booked interval is not "before" the target.
    left
}
