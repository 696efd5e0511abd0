use chrono::{Duration, NaiveTime};

use crate::domain::models::booking::Booking;

/// Bookable day shape: fixed-width candidate slots between `day_start`
/// and `day_end`. Carried in config so the grid can change per deployment
/// without touching this module.
#[derive(Debug, Clone, Copy)]
pub struct SlotGrid {
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    pub slot_minutes: i64,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            day_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            slot_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl SlotGrid {
    /// All candidate slots in ascending order. The last slot ends exactly
    /// at `day_end`; a partial trailing slot is not offered.
    pub fn candidates(&self) -> Vec<Slot> {
        if self.slot_minutes <= 0 {
            return Vec::new();
        }

        let step = Duration::minutes(self.slot_minutes);
        let mut slots = Vec::new();
        let mut cursor = self.day_start;

        loop {
            let (end, wrapped) = cursor.overflowing_add_signed(step);
            if wrapped != 0 || end > self.day_end {
                break;
            }
            slots.push(Slot { start: cursor, end });
            cursor = end;
        }

        slots
    }
}

/// Half-open interval overlap: `[a_start, a_end)` against `[b_start, b_end)`.
/// Back-to-back intervals do not overlap.
pub fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// True if `[start, end)` collides with any occupying booking in `existing`.
/// `exclude_id` skips one booking so a reschedule does not conflict with
/// the row being moved.
pub fn has_conflict(
    existing: &[Booking],
    start: NaiveTime,
    end: NaiveTime,
    exclude_id: Option<&str>,
) -> bool {
    existing
        .iter()
        .filter(|b| b.status.is_occupying())
        .filter(|b| exclude_id != Some(b.id.as_str()))
        .any(|b| overlaps(start, end, b.start_time, b.end_time))
}

/// Candidate slots minus everything colliding with an occupying booking.
/// Uses the same overlap test as `has_conflict`, so a booking straddling
/// two candidates removes both.
pub fn available_slots(grid: &SlotGrid, existing: &[Booking]) -> Vec<Slot> {
    grid.candidates()
        .into_iter()
        .filter(|slot| !has_conflict(existing, slot.start, slot.end, None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn booking(start: NaiveTime, end: NaiveTime, status: BookingStatus) -> Booking {
        let mut b = Booking::new(NewBookingParams {
            student_id: "s1".into(),
            program_id: "p1".into(),
            coach_id: "c1".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            start,
            end,
            notes: None,
        });
        b.status = status;
        b
    }

    #[test]
    fn overlap_table() {
        let cases = [
            // identical intervals conflict
            (t(10, 0), t(11, 0), t(10, 0), t(11, 0), true),
            // adjacency is legal
            (t(10, 0), t(11, 0), t(11, 0), t(12, 0), false),
            (t(11, 0), t(12, 0), t(10, 0), t(11, 0), false),
            // fully nested
            (t(10, 0), t(12, 0), t(10, 30), t(11, 30), true),
            (t(10, 30), t(11, 30), t(10, 0), t(12, 0), true),
            // partial overlap on either side
            (t(10, 0), t(11, 0), t(10, 30), t(11, 30), true),
            (t(10, 30), t(11, 30), t(10, 0), t(11, 0), true),
            // disjoint
            (t(9, 0), t(10, 0), t(14, 0), t(15, 0), false),
        ];

        for (a_start, a_end, b_start, b_end, expected) in cases {
            assert_eq!(
                overlaps(a_start, a_end, b_start, b_end),
                expected,
                "[{}, {}) vs [{}, {})",
                a_start,
                a_end,
                b_start,
                b_end
            );
        }
    }

    #[test]
    fn default_grid_has_nine_ascending_slots() {
        let slots = SlotGrid::default().candidates();

        assert_eq!(slots.len(), 9);
        assert_eq!(slots[0].start, t(9, 0));
        assert_eq!(slots[0].end, t(10, 0));
        assert_eq!(slots[8].start, t(17, 0));
        assert_eq!(slots[8].end, t(18, 0));
        assert!(slots.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn zero_width_grid_yields_nothing() {
        let grid = SlotGrid {
            slot_minutes: 0,
            ..SlotGrid::default()
        };
        assert!(grid.candidates().is_empty());
    }

    #[test]
    fn booked_slot_is_removed() {
        let existing = vec![booking(t(10, 0), t(11, 0), BookingStatus::Pending)];
        let slots = available_slots(&SlotGrid::default(), &existing);

        assert_eq!(slots.len(), 8);
        assert!(!slots.iter().any(|s| s.start == t(10, 0)));
    }

    #[test]
    fn straddling_booking_removes_both_candidates() {
        let existing = vec![booking(t(10, 30), t(11, 30), BookingStatus::Confirmed)];
        let slots = available_slots(&SlotGrid::default(), &existing);

        assert_eq!(slots.len(), 7);
        assert!(!slots.iter().any(|s| s.start == t(10, 0)));
        assert!(!slots.iter().any(|s| s.start == t(11, 0)));
    }

    #[test]
    fn cancelled_and_completed_do_not_block() {
        let existing = vec![
            booking(t(10, 0), t(11, 0), BookingStatus::Cancelled),
            booking(t(14, 0), t(15, 0), BookingStatus::Completed),
        ];

        assert!(!has_conflict(&existing, t(10, 0), t(11, 0), None));
        assert_eq!(available_slots(&SlotGrid::default(), &existing).len(), 9);
    }

    #[test]
    fn exclusion_skips_own_row() {
        let existing = vec![booking(t(10, 0), t(11, 0), BookingStatus::Confirmed)];
        let own_id = existing[0].id.clone();

        assert!(has_conflict(&existing, t(10, 0), t(11, 0), None));
        assert!(!has_conflict(&existing, t(10, 0), t(11, 0), Some(&own_id)));
    }
}
