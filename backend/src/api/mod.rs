//! HTTP routes and module exports.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::AppState;

pub mod courses;
pub mod error;
pub mod list_categories;
pub mod list_tools;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "courses": state.catalog.courses.len(),
    }))
}
