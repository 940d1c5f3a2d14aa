use axum::{Json, extract::State};
use common::course::NamedEntity;

use crate::AppState;

pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<NamedEntity>> {
    let mut tools = state.catalog.tools.clone();
    tools.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Json(tools)
}
