pub mod landing;
pub mod query;
pub mod serve;

// Re-export command functions for convenience
pub use landing::landing;
pub use query::{coaches, health, programs, CoachQuery, ProgramQuery};
pub use serve::{serve, ServeParams};
