use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Portfolio media references for a talent profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
}

/// A bookable performing artist or group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentRecord {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "artistName")]
    pub artist_name: String,
    pub category: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub bio: String,
    pub experience: String,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: u32,
    pub location: String,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub portfolio: Portfolio,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Lifecycle state of a booking request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

/// A request/contract for a talent to perform at a client's event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "talentId")]
    pub talent_id: String,
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

/// A registered marketplace user (client side of a booking)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "joinedDate")]
    pub joined_date: NaiveDate,
}

/// One filter dimension: either wide open or pinned to a single value
/// from a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    All,
    Only(String),
}

impl Selector {
    /// Build a selector from raw query input, validated against the known
    /// value set. Empty input, "all", and unrecognized values all fall back
    /// to `All` so a stale or malformed query never empties the results.
    pub fn from_raw(raw: &str, known: &[String]) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Selector::All;
        }
        if known.iter().any(|v| v == trimmed) {
            Selector::Only(trimmed.to_string())
        } else {
            tracing::debug!("Unrecognized filter value {:?}, matching all", trimmed);
            Selector::All
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(only) => only == value,
        }
    }
}

/// Price bucket selector over hourly rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    All,
    Low,
    Medium,
    High,
}

/// Hourly-rate boundaries between the price buckets (whole RWF).
/// Low is below `medium_min`, Medium is `medium_min..high_min`,
/// High is `high_min` and above.
#[derive(Debug, Clone, Copy)]
pub struct PriceThresholds {
    pub medium_min: u32,
    pub high_min: u32,
}

impl Default for PriceThresholds {
    fn default() -> Self {
        Self {
            medium_min: 50_000,
            high_min: 100_000,
        }
    }
}

/// The user-chosen filter dimensions applied to the talent catalog
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Selector,
    pub location: Selector,
    pub price: PriceBucket,
}

impl FilterCriteria {
    /// Criteria that match every talent (the browse-all default)
    pub fn any() -> Self {
        Self {
            search: String::new(),
            category: Selector::All,
            location: Selector::All,
            price: PriceBucket::All,
        }
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::any()
    }
}
