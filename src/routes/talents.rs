use actix_web::{web, HttpResponse, Responder};

use crate::config::CatalogSettings;
use crate::core::pricing::{parse_bucket, PRICE_BUCKET_LABELS};
use crate::models::{
    ErrorResponse, FilterCriteria, FilterOptionsResponse, HealthResponse, SearchTalentsQuery,
    SearchTalentsResponse, Selector,
};
use crate::routes::AppState;

/// Configure talent discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/talents", web::get().to(search_talents))
        .route("/talents/filters", web::get().to(filter_options))
        .route("/talents/{id}", web::get().to(talent_detail));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Build filter criteria from raw query input.
///
/// Category and location are checked against the configured closed sets and
/// fall back to match-all on unrecognized values, as does the price bucket.
fn criteria_from_query(query: &SearchTalentsQuery, catalog: &CatalogSettings) -> FilterCriteria {
    FilterCriteria {
        search: query.search.clone(),
        category: Selector::from_raw(&query.category, &catalog.categories),
        location: Selector::from_raw(&query.location, &catalog.provinces),
        price: parse_bucket(&query.price),
    }
}

/// Talent search endpoint
///
/// GET /api/v1/talents?search=jazz&category=all&location=Kigali&price=medium
///
/// Returns the matching talents in catalog order.
async fn search_talents(
    state: web::Data<AppState>,
    query: web::Query<SearchTalentsQuery>,
) -> impl Responder {
    let criteria = criteria_from_query(&query, &state.catalog);
    let catalog = state.store.all_talents();

    let outcome = state.search.search(&catalog, &criteria);

    tracing::info!(
        "Talent search returned {} of {} talents (search: {:?})",
        outcome.talents.len(),
        outcome.total_catalog,
        criteria.search
    );

    HttpResponse::Ok().json(SearchTalentsResponse {
        total_results: outcome.talents.len(),
        total_catalog: outcome.total_catalog,
        talents: outcome.talents,
    })
}

/// Talent detail endpoint
///
/// GET /api/v1/talents/{id}
async fn talent_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.talent(&id) {
        Some(talent) => HttpResponse::Ok().json(talent),
        None => {
            tracing::debug!("Talent {} not found", id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Talent not found".to_string(),
                message: format!("No talent with id {}", id),
                status_code: 404,
            })
        }
    }
}

/// Filter options endpoint
///
/// GET /api/v1/talents/filters
///
/// Serves the closed value sets clients need to render the filter controls.
async fn filter_options(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FilterOptionsResponse {
        categories: state.catalog.categories.clone(),
        provinces: state.catalog.provinces.clone(),
        event_types: state.catalog.event_types.clone(),
        price_buckets: PRICE_BUCKET_LABELS.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceBucket;

    #[test]
    fn test_criteria_from_default_query_matches_all() {
        let query = SearchTalentsQuery::default();
        let criteria = criteria_from_query(&query, &CatalogSettings::default());

        assert!(criteria.search.is_empty());
        assert_eq!(criteria.category, Selector::All);
        assert_eq!(criteria.location, Selector::All);
        assert_eq!(criteria.price, PriceBucket::All);
    }

    #[test]
    fn test_criteria_from_query_pins_known_values() {
        let query = SearchTalentsQuery {
            search: "jazz".to_string(),
            category: "Contemporary Music".to_string(),
            location: "Kigali".to_string(),
            price: "medium".to_string(),
        };
        let criteria = criteria_from_query(&query, &CatalogSettings::default());

        assert_eq!(criteria.search, "jazz");
        assert_eq!(criteria.category, Selector::Only("Contemporary Music".to_string()));
        assert_eq!(criteria.location, Selector::Only("Kigali".to_string()));
        assert_eq!(criteria.price, PriceBucket::Medium);
    }

    #[test]
    fn test_criteria_from_query_fails_open() {
        let query = SearchTalentsQuery {
            search: String::new(),
            category: "Skydiving".to_string(),
            location: "Atlantis".to_string(),
            price: "premium".to_string(),
        };
        let criteria = criteria_from_query(&query, &CatalogSettings::default());

        assert_eq!(criteria.category, Selector::All);
        assert_eq!(criteria.location, Selector::All);
        assert_eq!(criteria.price, PriceBucket::All);
    }
}
