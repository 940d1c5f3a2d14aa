//! Access to the hosted catalog tables.

pub mod catalog_rows;
pub mod rest_utils;
