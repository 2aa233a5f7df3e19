use chrono::NaiveDate;

use crate::models::{BookingRecord, BookingStatus};

/// Derived view over one client's bookings.
///
/// The three buckets are independent lenses, not a partition: a pending
/// booking with a future event date shows up under both `upcoming` and
/// `pending`, matching how the calendar tabs present them. Aggregates are
/// computed over the client restriction directly, so the overlap never
/// double-counts.
#[derive(Debug, Default)]
pub struct BookingBuckets {
    pub upcoming: Vec<BookingRecord>,
    pub pending: Vec<BookingRecord>,
    pub past: Vec<BookingRecord>,
    pub total_count: usize,
    pub total_spent: u64,
}

/// Classify a client's bookings relative to a reference calendar date.
///
/// `today` is supplied by the caller; event dates carry no time-of-day
/// component, so comparisons are by calendar date only and an event dated
/// today still counts as upcoming.
pub fn classify_bookings(
    bookings: &[BookingRecord],
    client_id: &str,
    today: NaiveDate,
) -> BookingBuckets {
    let restricted: Vec<&BookingRecord> = bookings
        .iter()
        .filter(|booking| booking.client_id == client_id)
        .collect();

    let upcoming = restricted
        .iter()
        .filter(|b| b.event_date >= today && b.status != BookingStatus::Cancelled)
        .map(|b| (*b).clone())
        .collect();

    let pending = restricted
        .iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .map(|b| (*b).clone())
        .collect();

    let past = restricted
        .iter()
        .filter(|b| b.event_date < today || b.status == BookingStatus::Completed)
        .map(|b| (*b).clone())
        .collect();

    let total_spent = restricted.iter().map(|b| b.total_amount).sum();

    BookingBuckets {
        upcoming,
        pending,
        past,
        total_count: restricted.len(),
        total_spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn create_booking(
        id: &str,
        client_id: &str,
        event_date: NaiveDate,
        status: BookingStatus,
        total_amount: u64,
    ) -> BookingRecord {
        BookingRecord {
            id: id.to_string(),
            client_id: client_id.to_string(),
            talent_id: "1".to_string(),
            event_date,
            event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            duration_hours: 3,
            event_type: "Wedding".to_string(),
            location: "Kigali Serena Hotel".to_string(),
            description: "Evening performance".to_string(),
            status,
            total_amount,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_restricts_to_client() {
        let bookings = vec![
            create_booking("1", "client-a", today(), BookingStatus::Confirmed, 100),
            create_booking("2", "client-b", today(), BookingStatus::Confirmed, 200),
        ];

        let buckets = classify_bookings(&bookings, "client-a", today());

        assert_eq!(buckets.total_count, 1);
        assert_eq!(buckets.upcoming.len(), 1);
        assert_eq!(buckets.upcoming[0].id, "1");
    }

    #[test]
    fn test_bucket_predicates() {
        let past_date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let future_date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

        let bookings = vec![
            create_booking("past-confirmed", "c", past_date, BookingStatus::Confirmed, 100),
            create_booking("future-pending", "c", future_date, BookingStatus::Pending, 200),
            create_booking("future-cancelled", "c", future_date, BookingStatus::Cancelled, 300),
        ];

        let buckets = classify_bookings(&bookings, "c", today());

        let upcoming_ids: Vec<_> = buckets.upcoming.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(upcoming_ids, vec!["future-pending"]);

        let pending_ids: Vec<_> = buckets.pending.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(pending_ids, vec!["future-pending"]);

        let past_ids: Vec<_> = buckets.past.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(past_ids, vec!["past-confirmed"]);
    }

    #[test]
    fn test_future_pending_booking_overlaps_buckets() {
        let future_date = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let bookings = vec![create_booking(
            "1",
            "c",
            future_date,
            BookingStatus::Pending,
            50_000,
        )];

        let buckets = classify_bookings(&bookings, "c", today());

        // Independent lenses: the same record appears in both tabs
        assert_eq!(buckets.upcoming.len(), 1);
        assert_eq!(buckets.pending.len(), 1);
        assert!(buckets.past.is_empty());
        assert_eq!(buckets.total_count, 1);
    }

    #[test]
    fn test_event_today_counts_as_upcoming() {
        let bookings = vec![create_booking("1", "c", today(), BookingStatus::Confirmed, 100)];

        let buckets = classify_bookings(&bookings, "c", today());

        assert_eq!(buckets.upcoming.len(), 1);
        assert!(buckets.past.is_empty());
    }

    #[test]
    fn test_completed_booking_is_past_regardless_of_date() {
        let future_date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let bookings = vec![create_booking(
            "1",
            "c",
            future_date,
            BookingStatus::Completed,
            100,
        )];

        let buckets = classify_bookings(&bookings, "c", today());

        // Future completed lands in both lenses, by design
        assert_eq!(buckets.past.len(), 1);
        assert_eq!(buckets.upcoming.len(), 1);
    }

    #[test]
    fn test_cancelled_past_booking_stays_in_past() {
        let past_date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let bookings = vec![create_booking("1", "c", past_date, BookingStatus::Cancelled, 100)];

        let buckets = classify_bookings(&bookings, "c", today());

        assert!(buckets.upcoming.is_empty());
        assert_eq!(buckets.past.len(), 1);
    }

    #[test]
    fn test_totals_cover_all_statuses() {
        let bookings = vec![
            create_booking("1", "c", today(), BookingStatus::Confirmed, 100),
            create_booking("2", "c", today(), BookingStatus::Pending, 200),
            create_booking("3", "c", today(), BookingStatus::Cancelled, 300),
        ];

        let buckets = classify_bookings(&bookings, "c", today());

        assert_eq!(buckets.total_count, 3);
        assert_eq!(buckets.total_spent, 600);
    }

    #[test]
    fn test_empty_input_yields_empty_buckets() {
        let buckets = classify_bookings(&[], "c", today());

        assert!(buckets.upcoming.is_empty());
        assert!(buckets.pending.is_empty());
        assert!(buckets.past.is_empty());
        assert_eq!(buckets.total_count, 0);
        assert_eq!(buckets.total_spent, 0);
    }
}
