use axum::{Json, extract::State, response::{IntoResponse, Response}};
use common::{course::Course, sort_order::{SortOrder, sort_courses}};

use crate::AppState;

/// Full catalog, newest first.
pub async fn list_courses(State(state): State<AppState>) -> Response {
    let all = state.catalog.courses.iter().collect::<Vec<&Course>>();
    Json(sort_courses(&all, SortOrder::Newest)).into_response()
}
