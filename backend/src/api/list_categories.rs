use axum::{Json, extract::State};
use common::course::NamedEntity;

use crate::AppState;

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<NamedEntity>> {
    let mut categories = state.catalog.categories.clone();
    categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Json(categories)
}
