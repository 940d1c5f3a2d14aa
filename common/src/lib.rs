//! Course discovery models shared between the backend and its callers.

extern crate serde;


pub mod course;
pub mod error;
pub mod filter_state;
pub mod sort_order;
pub mod pipeline;
pub mod filter_tags;
pub mod facet_counts;
