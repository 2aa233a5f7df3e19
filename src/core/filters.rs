use crate::core::pricing::rate_in_bucket;
use crate::models::{FilterCriteria, PriceThresholds, Selector, TalentRecord};

/// Check a talent against the free-text search query.
///
/// An empty query matches everything; otherwise the query must appear as a
/// case-insensitive substring of the artist name, the bio, or any specialty.
#[inline]
pub fn matches_search(talent: &TalentRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    talent.artist_name.to_lowercase().contains(&needle)
        || talent.bio.to_lowercase().contains(&needle)
        || talent
            .specialties
            .iter()
            .any(|specialty| specialty.to_lowercase().contains(&needle))
}

/// Check a talent against the category selector (exact, case-sensitive)
#[inline]
pub fn matches_category(talent: &TalentRecord, category: &Selector) -> bool {
    category.matches(&talent.category)
}

/// Check a talent against the location selector (exact match on province)
#[inline]
pub fn matches_location(talent: &TalentRecord, location: &Selector) -> bool {
    location.matches(&talent.location)
}

/// Check a talent's hourly rate against the selected price bucket
#[inline]
pub fn matches_price(
    talent: &TalentRecord,
    criteria: &FilterCriteria,
    thresholds: &PriceThresholds,
) -> bool {
    rate_in_bucket(talent.hourly_rate, criteria.price, thresholds)
}
