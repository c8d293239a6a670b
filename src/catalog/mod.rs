//! In-memory catalog of coaches and training programs
//!
//! The catalog is built once at startup and never mutated afterwards. It is
//! shared behind an `Arc` by the query services, so reads need no locking.
//!
//! # Usage
//!
//! ```
//! use fitcoach::catalog::Catalog;
//!
//! let catalog = Catalog::seeded();
//! assert_eq!(catalog.list_coaches().len(), 5);
//! ```

pub mod seed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Coach, TrainingProgram};

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    coaches: Vec<Coach>,
    #[serde(default)]
    programs: Vec<TrainingProgram>,
}

/// Read-only store of the seeded collections
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    coaches: Vec<Coach>,
    programs: Vec<TrainingProgram>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate ids within either collection
    pub fn new(coaches: Vec<Coach>, programs: Vec<TrainingProgram>) -> Result<Self> {
        check_unique("coach", coaches.iter().map(|c| c.id))?;
        check_unique("program", programs.iter().map(|p| p.id))?;

        Ok(Self { coaches, programs })
    }

    /// Built-in seed data, stamped with the current time
    pub fn seeded() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// Built-in seed data with a fixed timestamp
    pub fn seeded_at(seeded_at: DateTime<Utc>) -> Self {
        Self {
            coaches: seed::coaches(),
            programs: seed::programs(seeded_at),
        }
    }

    /// Parse a catalog from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.coaches, file.programs)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// All coaches in seeding order
    pub fn list_coaches(&self) -> &[Coach] {
        &self.coaches
    }

    /// All programs in seeding order
    pub fn list_programs(&self) -> &[TrainingProgram] {
        &self.programs
    }

    /// Programs whose coach id does not resolve to a seeded coach
    pub fn dangling_coach_refs(&self) -> Vec<&TrainingProgram> {
        let coach_ids: HashSet<i32> = self.coaches.iter().map(|c| c.id).collect();

        self.programs
            .iter()
            .filter(|p| !coach_ids.contains(&p.coach_id))
            .collect()
    }
}

fn check_unique(kind: &str, ids: impl Iterator<Item = i32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::catalog(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}
