//! Runs the discovery pipeline for one filter state.
//!
//! The state arrives either as a JSON body or as query parameters, so that a
//! filtered listing can also be a plain link.

use axum::{
    Json,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
    response::{IntoResponse, Response},
};
use common::{
    course::{Course, Difficulty},
    facet_counts::{FacetSummary, facet_summaries},
    filter_state::FilterState,
    filter_tags::ActiveFilterTag,
    pipeline::discover,
    sort_order::SortOrder,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, api::error::ApiError};


#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiscoverParams {
    pub search: Option<String>,
    /// Comma separated tool ids.
    pub tools: Option<String>,
    /// Comma separated category ids.
    pub categories: Option<String>,
    /// Comma separated difficulty levels.
    pub difficulty: Option<String>,
    pub sort: Option<String>,
}

fn split_list(list: &Option<String>) -> impl Iterator<Item = &str> {
    list.as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

impl DiscoverParams {
    pub fn into_filter_state(self) -> Result<FilterState, ApiError> {
        let mut filter = FilterState::default();
        if let Some(search) = &self.search {
            filter = filter.set_search_term(search.clone());
        }
        for tool_id in split_list(&self.tools) {
            if !filter.selected_tools.contains(tool_id) {
                filter = filter.toggle_tool(tool_id);
            }
        }
        for category_id in split_list(&self.categories) {
            if !filter.selected_categories.contains(category_id) {
                filter = filter.toggle_category(category_id);
            }
        }
        for level in split_list(&self.difficulty) {
            let level = level.parse::<Difficulty>()?;
            if !filter.difficulties.get(level) {
                filter = filter.toggle_difficulty(level);
            }
        }
        if let Some(sort) = &self.sort {
            filter = filter.set_sort_order(sort.parse::<SortOrder>()?);
        }
        Ok(filter)
    }
}


#[derive(Debug, Serialize)]
pub struct DiscoverResponse<'a> {
    pub filter: &'a FilterState,
    pub visible: Vec<&'a Course>,
    pub tags: Vec<ActiveFilterTag>,
    pub facets: Vec<FacetSummary>,
}

fn run_discovery(state: &AppState, filter: &FilterState) -> Response {
    let courses = &state.catalog.courses;
    let result = discover(courses, filter, &state.labels);
    let response = DiscoverResponse {
        filter,
        visible: result.visible,
        tags: result.tags,
        facets: facet_summaries(courses, filter, &state.labels),
    };
    Json(response).into_response()
}

pub async fn discover_from_query(
    State(state): State<AppState>,
    params: Result<Query<DiscoverParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let filter = params.into_filter_state()?;
    Ok(run_discovery(&state, &filter))
}

pub async fn discover_from_body(
    State(state): State<AppState>,
    payload: Result<Json<FilterState>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(filter) = payload.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    Ok(run_discovery(&state, &filter))
}
