// Core data structures for the coach catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rating threshold for the top-rated listing
pub const TOP_RATED_THRESHOLD: f64 = 4.5;

fn default_available() -> bool {
    true
}

/// A fitness coach with qualifications and specializations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: i32,
    pub name: String,
    /// Main area of specialization (e.g. "Competitive Bodybuilding")
    pub specialization: String,
    pub description: String,
    /// Years of coaching experience
    pub experience: u32,
    pub client_count: u32,
    /// Percentage, 0-100
    pub success_rate: f64,
    /// Average client rating, 0-5
    pub rating: f64,
    pub profile_image: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub email: String,
    pub hourly_rate: f64,
    /// Whether the coach accepts new clients
    #[serde(default = "default_available")]
    pub is_available: bool,
}

impl Default for Coach {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            specialization: String::new(),
            description: String::new(),
            experience: 0,
            client_count: 0,
            success_rate: 0.0,
            rating: 0.0,
            profile_image: None,
            specialties: Vec::new(),
            is_featured: false,
            certifications: Vec::new(),
            email: String::new(),
            hourly_rate: 0.0,
            is_available: true,
        }
    }
}

impl Coach {
    /// Check whether the coach qualifies for the top-rated listing
    pub fn is_top_rated(&self) -> bool {
        self.rating >= TOP_RATED_THRESHOLD
    }
}

/// A training program offered by a coach
///
/// `coach_id` is a plain reference; nothing guarantees that a coach with that
/// id exists. `coach` is never populated by the query layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub duration_weeks: u32,
    /// Beginner, Intermediate, Advanced or Expert
    pub difficulty_level: String,
    /// Primary goal (Mass Building, Competition Prep, ...)
    pub goal: String,
    pub price: f64,
    pub coach_id: i32,
    #[serde(default)]
    pub coach: Option<Coach>,
    #[serde(default)]
    pub required_equipment: Vec<String>,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub enrollment_count: u32,
    pub rating: f64,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub expected_outcomes: Vec<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Default for TrainingProgram {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            duration_weeks: 1,
            difficulty_level: String::new(),
            goal: String::new(),
            price: 0.0,
            coach_id: 0,
            coach: None,
            required_equipment: Vec::new(),
            target_muscles: Vec::new(),
            is_featured: false,
            enrollment_count: 0,
            rating: 0.0,
            prerequisites: Vec::new(),
            expected_outcomes: Vec::new(),
            is_available: true,
            created_date: now,
            last_updated: now,
        }
    }
}

impl TrainingProgram {
    /// Check whether the price falls within `[min, max]`
    pub fn priced_within(&self, min: f64, max: f64) -> bool {
        self.price >= min && self.price <= max
    }

    /// Attach a resolved coach, returning the updated program
    pub fn with_coach(mut self, coach: Coach) -> Self {
        self.coach = Some(coach);
        self
    }
}
