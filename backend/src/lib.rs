//! Read-only course discovery service over the AI Makers catalog.

use std::sync::Arc;

use axum::Router;
use common::filter_tags::LabelResolver;

use crate::catalog::CatalogSnapshot;

pub mod api;
pub mod catalog;
pub mod config;
pub mod db_utils;


/// Shared by every handler. The catalog is loaded once at startup and never
/// mutated afterwards; each request brings its own filter state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogSnapshot>,
    pub labels: Arc<LabelResolver>,
}

impl AppState {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        let labels = catalog.labels();
        Self {
            catalog: Arc::new(catalog),
            labels: Arc::new(labels),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/health", get(api::health))
        .route("/api/tools", get(api::list_tools::list_tools))
        .route("/api/categories", get(api::list_categories::list_categories))
        .route("/api/courses", get(api::courses::list_courses))
        .route(
            "/api/courses/discover",
            get(api::courses::discover_from_query).post(api::courses::discover_from_body),
        )
        .with_state(state)
}
