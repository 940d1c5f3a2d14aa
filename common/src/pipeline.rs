//! Search, facet filtering and sorting over an in-memory course collection.
//!
//! Every stage is a pure read over borrowed courses. The whole pipeline reruns
//! on each state change; collections are small enough that no index is kept.

use serde::Serialize;
use tracing::debug;

use crate::{
    course::Course,
    filter_state::{EMPTY_SELECTION_MEANS_UNFILTERED, FilterState},
    filter_tags::{ActiveFilterTag, LabelResolver, project_tags},
    sort_order::sort_courses,
};


/// Case-insensitive substring match on title or description.
pub fn matches_search(course: &Course, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    course.title.to_lowercase().contains(&needle)
        || course.description.to_lowercase().contains(&needle)
}

/// Any of the selected tools is enough.
pub fn matches_tools(course: &Course, state: &FilterState) -> bool {
    if state.selected_tools.is_empty() {
        return EMPTY_SELECTION_MEANS_UNFILTERED;
    }
    course.tool_ids.iter().any(|id| state.selected_tools.contains(id))
}

pub fn matches_categories(course: &Course, state: &FilterState) -> bool {
    if state.selected_categories.is_empty() {
        return EMPTY_SELECTION_MEANS_UNFILTERED;
    }
    course
        .category_id
        .as_ref()
        .is_some_and(|id| state.selected_categories.contains(id))
}

pub fn matches_difficulty(course: &Course, state: &FilterState) -> bool {
    if !state.difficulties.any() {
        return EMPTY_SELECTION_MEANS_UNFILTERED;
    }
    course.difficulty.is_some_and(|level| state.difficulties.get(level))
}

/// All filter stages without the final sort, in input order.
pub fn filter_courses<'a>(all_courses: &'a [Course], state: &FilterState) -> Vec<&'a Course> {
    if state.is_unfiltered() {
        return all_courses.iter().collect();
    }
    all_courses
        .iter()
        .filter(|course| matches_search(course, &state.search_term))
        .filter(|course| matches_tools(course, state))
        .filter(|course| matches_categories(course, state))
        .filter(|course| matches_difficulty(course, state))
        .collect()
}

/// The ordered visible subset for `state`. Returned references point into
/// `all_courses`, so every visible course is one of the inputs.
pub fn compute_visible<'a>(all_courses: &'a [Course], state: &FilterState) -> Vec<&'a Course> {
    let filtered = filter_courses(all_courses, state);
    sort_courses(&filtered, state.sort_order)
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discovery<'a> {
    pub visible: Vec<&'a Course>,
    pub tags: Vec<ActiveFilterTag>,
}

pub fn discover<'a>(all_courses: &'a [Course], state: &FilterState, labels: &LabelResolver) -> Discovery<'a> {
    let visible = compute_visible(all_courses, state);
    let tags = project_tags(state, labels);
    debug!(
        "discover: {} of {} courses visible, {} active filters, sort = {}",
        visible.len(),
        all_courses.len(),
        tags.len(),
        state.sort_order,
    );
    Discovery { visible, tags }
}
