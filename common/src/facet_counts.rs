//! Per-facet option lists with course counts for the filter panel.
//!
//! Counting a facet ignores that facet's own selection, otherwise picking one
//! tool would hide every sibling tool from the list.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    course::Course,
    filter_state::FilterState,
    filter_tags::LabelResolver,
    pipeline::filter_courses,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetField {
    Tool,
    Category,
    Difficulty,
}

impl FacetField {
    pub const ALL: [FacetField; 3] = [FacetField::Tool, FacetField::Category, FacetField::Difficulty];

    fn without_own_selection(&self, state: &FilterState) -> FilterState {
        match self {
            FacetField::Tool => state.clear_tools(),
            FacetField::Category => state.clear_categories(),
            FacetField::Difficulty => state.clear_difficulties(),
        }
    }

    fn values_of(&self, course: &Course) -> Vec<String> {
        match self {
            FacetField::Tool => course.tool_ids.iter().cloned().collect(),
            FacetField::Category => course.category_id.iter().cloned().collect(),
            FacetField::Difficulty => course.difficulty.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn selected_values(&self, state: &FilterState) -> BTreeSet<String> {
        match self {
            FacetField::Tool => state.selected_tools.clone(),
            FacetField::Category => state.selected_categories.clone(),
            FacetField::Difficulty => state.difficulties.selected().map(|d| d.to_string()).collect(),
        }
    }

    fn label_for(&self, value: &str, labels: &LabelResolver) -> String {
        match self {
            FacetField::Tool => labels.tool_label(value),
            FacetField::Category => labels.category_label(value),
            FacetField::Difficulty => value
                .parse::<crate::course::Difficulty>()
                .map(|d| d.label().to_string())
                .unwrap_or_else(|_| value.to_string()),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
    pub count: u64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSummary {
    pub field: FacetField,
    pub options: Vec<FacetOption>,
}


pub fn facet_options(all_courses: &[Course], state: &FilterState, field: FacetField, labels: &LabelResolver) -> Vec<FacetOption> {
    let base_state = field.without_own_selection(state);
    let selected = field.selected_values(state);

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for course in filter_courses(all_courses, &base_state) {
        for value in field.values_of(course) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    // keep selected values visible even when nothing else matches them
    for value in &selected {
        counts.entry(value.clone()).or_insert(0);
    }

    let mut options = counts
        .into_iter()
        .map(|(value, count)| FacetOption {
            label: field.label_for(&value, labels),
            selected: selected.contains(&value),
            value,
            count,
        })
        .collect::<Vec<_>>();
    options.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    options
}

pub fn facet_summaries(all_courses: &[Course], state: &FilterState, labels: &LabelResolver) -> Vec<FacetSummary> {
    FacetField::ALL
        .into_iter()
        .map(|field| FacetSummary {
            field,
            options: facet_options(all_courses, state, field, labels),
        })
        .collect()
}
