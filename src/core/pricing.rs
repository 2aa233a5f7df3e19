use crate::models::{PriceBucket, PriceThresholds};

/// Raw wire labels accepted for the price dimension, in display order
pub const PRICE_BUCKET_LABELS: [&str; 4] = ["all", "low", "medium", "high"];

/// Parse a raw price-bucket label. Unrecognized values fail open to `All`
/// rather than rejecting the query.
pub fn parse_bucket(raw: &str) -> PriceBucket {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" => PriceBucket::Low,
        "medium" => PriceBucket::Medium,
        "high" => PriceBucket::High,
        _ => PriceBucket::All,
    }
}

/// Classify an hourly rate into its (non-All) bucket. The thresholds are
/// half-open, so every rate lands in exactly one bucket.
#[inline]
pub fn bucket_for_rate(rate: u32, thresholds: &PriceThresholds) -> PriceBucket {
    if rate < thresholds.medium_min {
        PriceBucket::Low
    } else if rate < thresholds.high_min {
        PriceBucket::Medium
    } else {
        PriceBucket::High
    }
}

/// Check whether an hourly rate falls inside the selected bucket.
/// `All` admits every rate.
#[inline]
pub fn rate_in_bucket(rate: u32, bucket: PriceBucket, thresholds: &PriceThresholds) -> bool {
    match bucket {
        PriceBucket::All => true,
        selected => bucket_for_rate(rate, thresholds) == selected,
    }
}
