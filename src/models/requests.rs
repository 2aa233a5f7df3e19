use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the talent search endpoint.
///
/// Every dimension is optional; omitted or unrecognized values widen to
/// "match all" rather than failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTalentsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_all")]
    pub category: String,
    #[serde(default = "default_all")]
    pub location: String,
    #[serde(default = "default_all")]
    pub price: String,
}

fn default_all() -> String {
    "all".to_string()
}

impl Default for SearchTalentsQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_all(),
            location: default_all(),
            price: default_all(),
        }
    }
}

/// Request to create a booking for a talent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "talent_id", rename = "talentId")]
    pub talent_id: String,
    #[serde(alias = "event_date", rename = "eventDate")]
    pub event_date: NaiveDate,
    /// Start time as HH:MM, parsed by the handler
    #[validate(length(min = 1))]
    #[serde(alias = "event_time", rename = "eventTime")]
    pub event_time: String,
    #[validate(range(min = 1, max = 24))]
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[validate(length(min = 1))]
    #[serde(alias = "event_type", rename = "eventType")]
    pub event_type: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

fn default_duration() -> u32 {
    1
}

/// Request to open a session with the demo credentials
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to register a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "first_name", rename = "firstName")]
    pub first_name: String,
    #[validate(length(min = 1))]
    #[serde(alias = "last_name", rename = "lastName")]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub location: String,
}
