use crate::core::filters::{matches_category, matches_location, matches_price, matches_search};
use crate::models::{FilterCriteria, PriceThresholds, TalentRecord};

/// Result of a catalog search
#[derive(Debug)]
pub struct SearchOutcome {
    pub talents: Vec<TalentRecord>,
    pub total_catalog: usize,
}

/// Catalog search orchestrator - applies the conjunctive filter dimensions
///
/// All four predicates must hold for a talent to be included. The result is
/// an order-preserving subsequence of the catalog: no reranking, no
/// deduplication, so the browse view is stable while the user types.
#[derive(Debug, Clone)]
pub struct CatalogSearch {
    thresholds: PriceThresholds,
}

impl CatalogSearch {
    pub fn new(thresholds: PriceThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: PriceThresholds::default(),
        }
    }

    /// Filter the catalog down to the talents matching every criterion.
    ///
    /// The enum-equality dimensions run before the substring scan so most
    /// non-matching records are rejected cheaply; the predicates are
    /// independent, so the order never changes the result.
    pub fn filter_talents(
        &self,
        catalog: &[TalentRecord],
        criteria: &FilterCriteria,
    ) -> Vec<TalentRecord> {
        catalog
            .iter()
            .filter(|talent| matches_category(talent, &criteria.category))
            .filter(|talent| matches_location(talent, &criteria.location))
            .filter(|talent| matches_price(talent, criteria, &self.thresholds))
            .filter(|talent| matches_search(talent, &criteria.search))
            .cloned()
            .collect()
    }

    /// Run a search and report the matching talents together with the
    /// catalog size the filter ran over.
    pub fn search(&self, catalog: &[TalentRecord], criteria: &FilterCriteria) -> SearchOutcome {
        let total_catalog = catalog.len();
        let talents = self.filter_talents(catalog, criteria);

        SearchOutcome {
            talents,
            total_catalog,
        }
    }
}

impl Default for CatalogSearch {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}
