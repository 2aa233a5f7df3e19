use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::BookingBuckets;
use crate::models::domain::{BookingRecord, BookingStatus, TalentRecord, User};

/// Label shown when a booking references a talent that no longer resolves
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Response for the talent search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTalentsResponse {
    pub talents: Vec<TalentRecord>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "totalCatalog")]
    pub total_catalog: usize,
}

/// The closed value sets clients need to render the filter controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub categories: Vec<String>,
    pub provinces: Vec<String>,
    #[serde(rename = "eventTypes")]
    pub event_types: Vec<String>,
    #[serde(rename = "priceBuckets")]
    pub price_buckets: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for login/signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

/// A booking joined with its talent's display data.
///
/// The talent foreign key is allowed to dangle; the view degrades to the
/// "Unknown Artist" placeholder instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingView {
    pub id: String,
    #[serde(rename = "talentId")]
    pub talent_id: String,
    #[serde(rename = "artistName")]
    pub artist_name: String,
    #[serde(rename = "eventDate")]
    pub event_date: NaiveDate,
    #[serde(rename = "eventTime")]
    pub event_time: NaiveTime,
    #[serde(rename = "duration")]
    pub duration_hours: u32,
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub location: String,
    pub description: String,
    pub status: BookingStatus,
    #[serde(rename = "totalAmount")]
    pub total_amount: u64,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
}

impl BookingView {
    pub fn from_record(booking: BookingRecord, talent: Option<&TalentRecord>) -> Self {
        let artist_name = talent
            .map(|t| t.artist_name.clone())
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        Self {
            id: booking.id,
            talent_id: booking.talent_id,
            artist_name,
            event_date: booking.event_date,
            event_time: booking.event_time,
            duration_hours: booking.duration_hours,
            event_type: booking.event_type,
            location: booking.location,
            description: booking.description,
            status: booking.status,
            total_amount: booking.total_amount,
            created_at: booking.created_at,
        }
    }
}

/// Classified schedule for one client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub upcoming: Vec<BookingView>,
    pub pending: Vec<BookingView>,
    pub past: Vec<BookingView>,
    #[serde(rename = "upcomingCount")]
    pub upcoming_count: usize,
    #[serde(rename = "pendingCount")]
    pub pending_count: usize,
    #[serde(rename = "pastCount")]
    pub past_count: usize,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "totalSpent")]
    pub total_spent: u64,
}

impl ScheduleResponse {
    /// Join classified buckets with the talent catalog for display
    pub fn from_buckets(buckets: BookingBuckets, talents: &[TalentRecord]) -> Self {
        let resolve = |records: Vec<BookingRecord>| -> Vec<BookingView> {
            records
                .into_iter()
                .map(|booking| {
                    let talent = talents.iter().find(|t| t.id == booking.talent_id);
                    BookingView::from_record(booking, talent)
                })
                .collect()
        };

        let upcoming = resolve(buckets.upcoming);
        let pending = resolve(buckets.pending);
        let past = resolve(buckets.past);

        Self {
            upcoming_count: upcoming.len(),
            pending_count: pending.len(),
            past_count: past.len(),
            total_count: buckets.total_count,
            total_spent: buckets.total_spent,
            upcoming,
            pending,
            past,
        }
    }
}
