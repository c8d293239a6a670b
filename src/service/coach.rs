//! Coach lookups and filters

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::Coach;

use super::contains_ignore_case;

/// Read-only queries over the coach collection
#[derive(Debug, Clone)]
pub struct CoachQueryService {
    catalog: Arc<Catalog>,
}

impl CoachQueryService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn filter(&self, predicate: impl Fn(&Coach) -> bool) -> Vec<Coach> {
        self.catalog
            .list_coaches()
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect()
    }

    /// All coaches in catalog order
    pub fn get_all(&self) -> Vec<Coach> {
        self.catalog.list_coaches().to_vec()
    }

    /// Look up a single coach
    pub fn get_by_id(&self, id: i32) -> Option<Coach> {
        self.catalog
            .list_coaches()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Coaches flagged for homepage display
    pub fn get_featured(&self) -> Vec<Coach> {
        self.filter(|c| c.is_featured)
    }

    /// Coaches whose specialization contains `text`, ignoring case
    pub fn get_by_specialization(&self, text: &str) -> Vec<Coach> {
        self.filter(|c| contains_ignore_case(&c.specialization, text))
    }

    /// Coaches accepting new clients
    pub fn get_available(&self) -> Vec<Coach> {
        self.filter(|c| c.is_available)
    }

    /// Coaches rated 4.5 or above, best first
    ///
    /// The sort is stable, so equally rated coaches keep catalog order.
    pub fn get_top_rated(&self) -> Vec<Coach> {
        let mut coaches = self.filter(Coach::is_top_rated);
        coaches.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        coaches
    }
}
