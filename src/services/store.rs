use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{BookingRecord, BookingStatus, TalentRecord};
use crate::services::seed;

/// Errors that can occur on booking mutations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Booking {0} does not belong to the requesting client")]
    NotBookingOwner(String),

    #[error("Booking {id} is {status} and can no longer be cancelled")]
    NotCancellable { id: String, status: BookingStatus },
}

/// In-memory catalog provider
///
/// Talents are immutable reference data, loaded once and handed out as
/// snapshots. Bookings accept appends (booking requests) and the single
/// client-side cancellation transition. Every read returns a consistent
/// snapshot cloned out of the lock; callers never observe partial writes.
pub struct CatalogStore {
    talents: Vec<TalentRecord>,
    bookings: RwLock<Vec<BookingRecord>>,
}

impl CatalogStore {
    pub fn new(talents: Vec<TalentRecord>, bookings: Vec<BookingRecord>) -> Self {
        Self {
            talents,
            bookings: RwLock::new(bookings),
        }
    }

    /// Store pre-loaded with the reference catalog
    pub fn with_seed_data() -> Self {
        Self::new(seed::seed_talents(), seed::seed_bookings())
    }

    /// Snapshot of the full talent catalog, in catalog order
    pub fn all_talents(&self) -> Vec<TalentRecord> {
        self.talents.clone()
    }

    /// Point lookup for the talent detail view
    pub fn talent(&self, id: &str) -> Option<TalentRecord> {
        self.talents.iter().find(|t| t.id == id).cloned()
    }

    pub fn talent_count(&self) -> usize {
        self.talents.len()
    }

    /// Snapshot of every booking record
    pub async fn all_bookings(&self) -> Vec<BookingRecord> {
        self.bookings.read().await.clone()
    }

    /// Append a new booking request
    pub async fn insert_booking(&self, booking: BookingRecord) {
        let mut bookings = self.bookings.write().await;
        tracing::debug!(
            "Recording booking {} for client {} with talent {}",
            booking.id,
            booking.client_id,
            booking.talent_id
        );
        bookings.push(booking);
    }

    /// Cancel a pending booking on behalf of its owning client.
    ///
    /// Only the client who created the request may cancel it, and only while
    /// it is still pending; confirmed and completed bookings are managed by
    /// the talent side.
    pub async fn cancel_booking(
        &self,
        booking_id: &str,
        client_id: &str,
    ) -> Result<BookingRecord, StoreError> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| StoreError::BookingNotFound(booking_id.to_string()))?;

        if booking.client_id != client_id {
            return Err(StoreError::NotBookingOwner(booking_id.to_string()));
        }

        if booking.status != BookingStatus::Pending {
            return Err(StoreError::NotCancellable {
                id: booking_id.to_string(),
                status: booking.status,
            });
        }

        booking.status = BookingStatus::Cancelled;
        Ok(booking.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn create_booking(id: &str, client_id: &str, status: BookingStatus) -> BookingRecord {
        BookingRecord {
            id: id.to_string(),
            client_id: client_id.to_string(),
            talent_id: "1".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            duration_hours: 2,
            event_type: "Birthday Party".to_string(),
            location: "Kigali".to_string(),
            description: "Evening set".to_string(),
            status,
            total_amount: 100_000,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_seeded_store_has_reference_catalog() {
        let store = CatalogStore::with_seed_data();

        assert_eq!(store.talent_count(), 3);
        assert!(store.talent("2").is_some());
        assert!(store.talent("missing").is_none());
    }

    #[test]
    fn test_talent_snapshot_preserves_order() {
        let store = CatalogStore::with_seed_data();
        let ids: Vec<_> = store.all_talents().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_insert_and_read_booking() {
        let store = CatalogStore::new(vec![], vec![]);

        store
            .insert_booking(create_booking("b1", "c1", BookingStatus::Pending))
            .await;

        let bookings = store.all_bookings().await;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, "b1");
    }

    #[tokio::test]
    async fn test_cancel_pending_booking() {
        let store = CatalogStore::new(vec![], vec![create_booking("b1", "c1", BookingStatus::Pending)]);

        let cancelled = store.cancel_booking("b1", "c1").await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let bookings = store.all_bookings().await;
        assert_eq!(bookings[0].status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_unknown_booking() {
        let store = CatalogStore::new(vec![], vec![]);

        let err = store.cancel_booking("missing", "c1").await.unwrap_err();
        assert!(matches!(err, StoreError::BookingNotFound(_)));
    }

    #[tokio::test]
    async fn test_cancel_requires_ownership() {
        let store = CatalogStore::new(vec![], vec![create_booking("b1", "c1", BookingStatus::Pending)]);

        let err = store.cancel_booking("b1", "someone-else").await.unwrap_err();
        assert!(matches!(err, StoreError::NotBookingOwner(_)));

        let bookings = store.all_bookings().await;
        assert_eq!(bookings[0].status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_cancel_rejects_non_pending_states() {
        let store = CatalogStore::new(
            vec![],
            vec![create_booking("b1", "c1", BookingStatus::Confirmed)],
        );

        let err = store.cancel_booking("b1", "c1").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotCancellable {
                status: BookingStatus::Confirmed,
                ..
            }
        ));
    }
}
