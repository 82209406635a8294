//! Property-based tests for the slot search using proptest.
//!
//! These verify invariants that should hold for *any* valid calendar and
//! desired interval, not just the examples in `finder_tests.rs`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use slot_engine::{find_available_slots, locate_insertion_index, BookedCalendar, Interval};

// ---------------------------------------------------------------------------
// Strategies — generate valid calendars and desired intervals
// ---------------------------------------------------------------------------

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 28, 0, 0, 0).unwrap()
}

/// Generate a sorted, non-overlapping calendar from (gap, duration) pairs in
/// minutes. A zero gap produces adjacent bookings, which are legal.
fn arb_calendar() -> impl Strategy<Value = BookedCalendar> {
    prop::collection::vec((0i64..=180, 15i64..=120), 0..10).prop_map(|pairs| {
        let mut intervals = Vec::new();
        let mut cursor = base();
        for (n, (gap, duration)) in pairs.into_iter().enumerate() {
            let start = cursor + Duration::minutes(gap);
            let end = start + Duration::minutes(duration);
            intervals.push(
                Interval::new(format!("meeting {}", n + 1), start, end)
                    .expect("generated interval is valid"),
            );
            cursor = end;
        }
        BookedCalendar::from_intervals(intervals).expect("generated calendar is valid")
    })
}

/// Generate a desired interval somewhere in or after the calendar's range.
fn arb_desired() -> impl Strategy<Value = Interval> {
    (0i64..=2_000, 15i64..=180).prop_map(|(offset, duration)| {
        let start = base() + Duration::minutes(offset);
        Interval::new("Desired Slot", start, start + Duration::minutes(duration))
            .expect("generated interval is valid")
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// The search always returns exactly `amount` slots, each with the
    /// desired duration.
    #[test]
    fn returns_amount_slots_of_desired_duration(
        calendar in arb_calendar(),
        desired in arb_desired(),
        amount in 0usize..8,
    ) {
        let slots = find_available_slots(&desired, amount, &calendar).unwrap();

        prop_assert_eq!(slots.len(), amount);
        for slot in &slots {
            prop_assert_eq!(slot.duration(), desired.duration());
        }
    }

    /// Returned slots are chronological and never overlap each other.
    #[test]
    fn slots_are_chronological_and_disjoint(
        calendar in arb_calendar(),
        desired in arb_desired(),
        amount in 1usize..8,
    ) {
        let slots = find_available_slots(&desired, amount, &calendar).unwrap();

        for pair in slots.windows(2) {
            prop_assert!(pair[1].start >= pair[0].end);
        }
    }

    /// No returned slot shares an instant with any booked interval.
    #[test]
    fn slots_never_overlap_bookings(
        calendar in arb_calendar(),
        desired in arb_desired(),
        amount in 1usize..8,
    ) {
        let slots = find_available_slots(&desired, amount, &calendar).unwrap();

        for slot in &slots {
            for booked in calendar.iter() {
                prop_assert!(
                    !slot.overlaps(booked),
                    "slot [{} .. {}] overlaps booking [{} .. {}]",
                    slot.start, slot.end, booked.start, booked.end,
                );
            }
        }
    }

    /// The candidate only ever moves forward: no slot starts before the
    /// desired start.
    #[test]
    fn first_slot_never_precedes_the_desired_start(
        calendar in arb_calendar(),
        desired in arb_desired(),
    ) {
        let slots = find_available_slots(&desired, 1, &calendar).unwrap();

        prop_assert!(slots[0].start >= desired.start);
    }

    /// An empty calendar yields back-to-back slots from the desired start.
    #[test]
    fn empty_calendar_yields_back_to_back_slots(
        desired in arb_desired(),
        amount in 1usize..8,
    ) {
        let slots = find_available_slots(&desired, amount, &BookedCalendar::new()).unwrap();

        prop_assert_eq!(slots[0].start, desired.start);
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[1].start, pair[0].end);
        }
    }

    /// The insertion position is stable and within bounds.
    #[test]
    fn insertion_index_is_idempotent_and_bounded(
        calendar in arb_calendar(),
        target in arb_desired(),
    ) {
        let first = locate_insertion_index(&calendar, &target);
        let second = locate_insertion_index(&calendar, &target);

        prop_assert_eq!(first, second);
        prop_assert!(first <= calendar.len());
    }
}
