//! The sorted, non-overlapping booked calendar.
//!
//! `BookedCalendar` owns the committed meetings and maintains two invariants:
//! elements are sorted ascending by start time, and no two elements share any
//! instant. Construction and deserialization both run the same validation, so
//! search code can assume a well-formed calendar instead of re-checking it on
//! every call.

use crate::error::{Result, SlotError};
use crate::finder::find_available_slots;
use crate::interval::Interval;
use serde::{Deserialize, Serialize};

/// Sorted, non-overlapping sequence of booked intervals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct BookedCalendar {
    intervals: Vec<Interval>,
}

impl BookedCalendar {
    /// An empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calendar from arbitrary intervals: sorts by start time, then
    /// validates that intervals are well-formed and pairwise non-overlapping.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidInterval`] when any interval has
    /// `end <= start`, or [`SlotError::InvalidCalendarState`] when two
    /// intervals overlap after sorting.
    pub fn from_intervals(mut intervals: Vec<Interval>) -> Result<Self> {
        intervals.sort_by_key(|i| i.start);

        for interval in &intervals {
            if interval.end <= interval.start {
                return Err(SlotError::InvalidInterval {
                    start: interval.start,
                    end: interval.end,
                });
            }
        }
        for pair in intervals.windows(2) {
            if pair[0].overlaps(&pair[1]) {
                return Err(SlotError::InvalidCalendarState(format!(
                    "\"{}\" [{} .. {}] overlaps \"{}\" [{} .. {}]",
                    pair[0].label,
                    pair[0].start,
                    pair[0].end,
                    pair[1].label,
                    pair[1].start,
                    pair[1].end,
                )));
            }
        }

        Ok(Self { intervals })
    }

    /// Book an interval if that exact slot is still free.
    ///
    /// Runs the slot search with `amount = 1`; the requested interval is free
    /// exactly when the first found slot has identical start and end. On
    /// success the interval is inserted and the calendar re-sorted; ordered
    /// insertion would avoid the sort, but a sort after push keeps the
    /// operation obviously correct.
    ///
    /// Returns `Ok(false)` when the slot is no longer available.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidInterval`] when the requested interval has
    /// `end <= start`.
    pub fn book(&mut self, interval: Interval) -> Result<bool> {
        let found = find_available_slots(&interval, 1, self)?;
        let free = found
            .first()
            .is_some_and(|slot| slot.start == interval.start && slot.end == interval.end);
        if !free {
            return Ok(false);
        }

        self.intervals.push(interval);
        self.intervals.sort_by_key(|i| i.start);
        Ok(true)
    }

    /// Number of booked intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True when nothing is booked.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The booked intervals in chronological order.
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterate over the booked intervals in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }
}

impl TryFrom<Vec<Interval>> for BookedCalendar {
    type Error = SlotError;

    fn try_from(intervals: Vec<Interval>) -> Result<Self> {
        Self::from_intervals(intervals)
    }
}

impl From<BookedCalendar> for Vec<Interval> {
    fn from(calendar: BookedCalendar) -> Self {
        calendar.intervals
    }
}

impl<'a> IntoIterator for &'a BookedCalendar {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
