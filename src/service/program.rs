//! Training program lookups and filters

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::TrainingProgram;

use super::{contains_ignore_case, eq_ignore_case};

/// Read-only queries over the program collection
#[derive(Debug, Clone)]
pub struct ProgramQueryService {
    catalog: Arc<Catalog>,
}

impl ProgramQueryService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn filter(&self, predicate: impl Fn(&TrainingProgram) -> bool) -> Vec<TrainingProgram> {
        self.catalog
            .list_programs()
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }

    /// All programs in catalog order
    pub fn get_all(&self) -> Vec<TrainingProgram> {
        self.catalog.list_programs().to_vec()
    }

    /// Look up a single program
    pub fn get_by_id(&self, id: i32) -> Option<TrainingProgram> {
        self.catalog
            .list_programs()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Programs flagged for homepage display
    pub fn get_featured(&self) -> Vec<TrainingProgram> {
        self.filter(|p| p.is_featured)
    }

    /// Programs whose difficulty level equals `level`, ignoring case
    pub fn get_by_difficulty(&self, level: &str) -> Vec<TrainingProgram> {
        self.filter(|p| eq_ignore_case(&p.difficulty_level, level))
    }

    /// Programs owned by `coach_id`
    pub fn get_by_coach(&self, coach_id: i32) -> Vec<TrainingProgram> {
        self.filter(|p| p.coach_id == coach_id)
    }

    /// Programs whose goal contains `text`, ignoring case
    pub fn get_by_goal(&self, text: &str) -> Vec<TrainingProgram> {
        self.filter(|p| contains_ignore_case(&p.goal, text))
    }

    /// Programs priced within `[min, max]`; empty when `min > max`
    pub fn get_by_price_range(&self, min: f64, max: f64) -> Vec<TrainingProgram> {
        self.filter(|p| p.priced_within(min, max))
    }
}
