//! Query services over the catalog
//!
//! Both services are cheap to clone and hold the catalog behind an `Arc`.
//! Every operation is a pure filter or lookup; nothing here validates caller
//! input, that is the API layer's job.

pub mod coach;
pub mod program;

pub use coach::CoachQueryService;
pub use program::ProgramQueryService;

/// Case-insensitive substring match
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive whole-string match
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
