//! # slot-engine
//!
//! First-fit meeting slot search over a sorted, non-overlapping booked
//! calendar. Given a desired interval (start + duration) and the calendar, the
//! engine finds the first N available slots of that duration, scanning forward
//! in time and skipping over conflicts.
//!
//! The engine is pure computation: it borrows the calendar for the duration of
//! one call, performs no I/O, and never mutates anything except through the
//! explicit [`BookedCalendar::book`] operation.
//!
//! ## Modules
//!
//! - [`interval`] — the labeled `[start, end)` interval value type
//! - [`calendar`] — the sorted, non-overlapping booked calendar
//! - [`index`] — binary-search insertion position over the calendar
//! - [`finder`] — forward-scanning available slot search
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod finder;
pub mod index;
pub mod interval;

pub use calendar::BookedCalendar;
pub use error::SlotError;
pub use finder::find_available_slots;
pub use index::locate_insertion_index;
pub use interval::Interval;
