// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BookingRecord, BookingStatus, FilterCriteria, Portfolio, PriceBucket, PriceThresholds,
    Selector, TalentRecord, User,
};
pub use requests::{CreateBookingRequest, LoginRequest, SearchTalentsQuery, SignupRequest};
pub use responses::{
    BookingView, ErrorResponse, FilterOptionsResponse, HealthResponse, ScheduleResponse,
    SearchTalentsResponse, SessionResponse, UNKNOWN_ARTIST,
};
