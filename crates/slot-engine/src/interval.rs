//! The labeled interval value type.
//!
//! Intervals are half-open `[start, end)` time ranges at minute resolution
//! (callers are expected to have zeroed seconds and sub-second components —
//! normalization is a parsing concern, not an engine concern). They are value
//! types: a shifted candidate is a new `Interval`, never a mutation of the
//! original.

use crate::error::{Result, SlotError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A labeled half-open time range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Human-readable name for the meeting or slot.
    pub label: String,
    /// Inclusive start of the interval.
    pub start: DateTime<Utc>,
    /// Exclusive end of the interval.
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Create an interval, rejecting `end <= start`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidInterval`] when `end` is not strictly after
    /// `start`.
    pub fn new(label: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self {
            label: label.into(),
            start,
            end,
        })
    }

    /// Length of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the two intervals share at least one instant.
    ///
    /// Adjacent intervals, where one ends exactly when the other starts, do
    /// NOT overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// A new interval with the same label and duration, starting at `start`.
    pub fn shift_to(&self, start: DateTime<Utc>) -> Interval {
        Interval {
            label: self.label.clone(),
            start,
            end: start + self.duration(),
        }
    }
}
