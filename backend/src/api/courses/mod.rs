//! Course listing and discovery routes.

mod discover;
mod list_courses;

pub use discover::{DiscoverParams, DiscoverResponse, discover_from_body, discover_from_query};
pub use list_courses::list_courses;
