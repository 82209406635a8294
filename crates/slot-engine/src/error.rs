//! Error types for slot-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid calendar state: {0}")]
    InvalidCalendarState(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
