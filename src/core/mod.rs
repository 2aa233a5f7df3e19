// Core algorithm exports
pub mod classifier;
pub mod filters;
pub mod pricing;
pub mod search;

pub use classifier::{classify_bookings, BookingBuckets};
pub use filters::{matches_category, matches_location, matches_price, matches_search};
pub use pricing::{bucket_for_rate, parse_bucket, rate_in_bucket};
pub use search::{CatalogSearch, SearchOutcome};
