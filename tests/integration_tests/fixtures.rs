//! Test fixtures for integration tests
//!
//! Catalog documents used where the seed data does not cover an edge case.

use fitcoach::catalog::Catalog;

/// Ids of the featured seed coaches, in seed order
pub const FEATURED_COACH_IDS: [i64; 3] = [1, 3, 6];

/// Fields every serialized coach carries
pub const COACH_FIELDS: &[&str] = &[
    "id",
    "name",
    "specialization",
    "description",
    "experience",
    "clientCount",
    "successRate",
    "rating",
    "profileImage",
    "specialties",
    "isFeatured",
    "certifications",
    "email",
    "hourlyRate",
    "isAvailable",
];

/// Catalog with near-miss difficulty labels and tied ratings
pub const EDGE_CASE_CATALOG: &str = r#"{
  "coaches": [
    {
      "id": 10,
      "name": "Riley Stone",
      "specialization": "Powerlifting",
      "description": "Meet prep and peaking",
      "experience": 9,
      "clientCount": 80,
      "successRate": 88.0,
      "rating": 4.7,
      "profileImage": null,
      "email": "riley@example.com",
      "hourlyRate": 90.0,
      "isAvailable": false
    },
    {
      "id": 11,
      "name": "Sam Okafor",
      "specialization": "Olympic Lifting",
      "description": "Technique first",
      "experience": 4,
      "clientCount": 35,
      "successRate": 80.0,
      "rating": 4.7,
      "isFeatured": true,
      "email": "sam@example.com",
      "hourlyRate": 70.0
    },
    {
      "id": 12,
      "name": "Jo Park",
      "specialization": "Mobility",
      "description": "Move better",
      "experience": 2,
      "clientCount": 10,
      "successRate": 75.0,
      "rating": 4.2,
      "email": "jo@example.com",
      "hourlyRate": 50.0
    }
  ],
  "programs": [
    {
      "id": 20,
      "name": "Advanced Block",
      "description": "Twelve week block",
      "durationWeeks": 12,
      "difficultyLevel": "Advanced",
      "goal": "Strength",
      "price": 100.0,
      "coachId": 10,
      "rating": 4.5,
      "createdDate": "2024-01-15T09:30:00Z",
      "lastUpdated": "2024-01-15T09:30:00Z"
    },
    {
      "id": 21,
      "name": "Advanced Plus Block",
      "description": "Sixteen week block",
      "durationWeeks": 16,
      "difficultyLevel": "Advanced Plus",
      "goal": "Strength & Power",
      "price": 200.0,
      "coachId": 10,
      "rating": 4.6,
      "createdDate": "2024-01-15T09:30:00Z",
      "lastUpdated": "2024-01-15T09:30:00Z"
    }
  ]
}"#;

/// Parse the edge-case catalog
pub fn edge_case_catalog() -> Catalog {
    Catalog::from_json_str(EDGE_CASE_CATALOG).expect("valid fixture catalog")
}
