//! Removable chips describing the filters currently in effect.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    course::{Difficulty, NamedEntity},
    filter_state::FilterState,
};

const PLACEHOLDER_ID_CHARS: usize = 8;


/// Display names for tool and category ids. Tables may still be loading, so a
/// lookup miss falls back to a shortened id instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelResolver {
    pub tool_names: BTreeMap<String, String>,
    pub category_names: BTreeMap<String, String>,
}

impl LabelResolver {
    pub fn new(tools: &[NamedEntity], categories: &[NamedEntity]) -> Self {
        Self {
            tool_names: names_by_id(tools),
            category_names: names_by_id(categories),
        }
    }

    pub fn tool_label(&self, tool_id: &str) -> String {
        self.tool_names
            .get(tool_id)
            .cloned()
            .unwrap_or_else(|| placeholder_label(tool_id))
    }

    pub fn category_label(&self, category_id: &str) -> String {
        self.category_names
            .get(category_id)
            .cloned()
            .unwrap_or_else(|| placeholder_label(category_id))
    }
}

fn names_by_id(entities: &[NamedEntity]) -> BTreeMap<String, String> {
    entities
        .iter()
        .map(|entity| (entity.id.clone(), entity.name.clone()))
        .collect()
}

pub fn placeholder_label(id: &str) -> String {
    if id.chars().count() <= PLACEHOLDER_ID_CHARS {
        return id.to_string();
    }
    let prefix: String = id.chars().take(PLACEHOLDER_ID_CHARS).collect();
    format!("{prefix}...")
}


/// The single filter value a tag stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "lowercase")]
pub enum FilterRemoval {
    Search,
    Difficulty(Difficulty),
    Tool(String),
    Category(String),
}

impl FilterRemoval {
    /// Clears exactly this value. Every other filter, and the sort order, is
    /// carried over unchanged.
    pub fn apply(&self, state: &FilterState) -> FilterState {
        match self {
            FilterRemoval::Search => state.clear_search(),
            FilterRemoval::Difficulty(level) if state.difficulties.get(*level) => state.toggle_difficulty(*level),
            FilterRemoval::Tool(id) if state.selected_tools.contains(id) => state.toggle_tool(id),
            FilterRemoval::Category(id) if state.selected_categories.contains(id) => state.toggle_category(id),
            _ => state.clone(),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilterTag {
    pub id: String,
    pub label: String,
    pub removal: FilterRemoval,
}

impl ActiveFilterTag {
    pub fn remove_from(&self, state: &FilterState) -> FilterState {
        self.removal.apply(state)
    }
}

/// Tags in display order: search term, difficulty levels, tools, categories.
/// No active filter gives an empty list.
pub fn project_tags(state: &FilterState, labels: &LabelResolver) -> Vec<ActiveFilterTag> {
    let mut tags = Vec::with_capacity(state.active_filter_count());

    if !state.search_term.is_empty() {
        tags.push(ActiveFilterTag {
            id: "search".to_string(),
            label: state.search_term.clone(),
            removal: FilterRemoval::Search,
        });
    }

    for level in state.difficulties.selected() {
        tags.push(ActiveFilterTag {
            id: format!("difficulty:{level}"),
            label: level.label().to_string(),
            removal: FilterRemoval::Difficulty(level),
        });
    }

    for tool_id in &state.selected_tools {
        tags.push(ActiveFilterTag {
            id: format!("tool:{tool_id}"),
            label: labels.tool_label(tool_id),
            removal: FilterRemoval::Tool(tool_id.clone()),
        });
    }

    for category_id in &state.selected_categories {
        tags.push(ActiveFilterTag {
            id: format!("category:{category_id}"),
            label: labels.category_label(category_id),
            removal: FilterRemoval::Category(category_id.clone()),
        });
    }

    tags
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort_order::SortOrder;

    fn labels() -> LabelResolver {
        LabelResolver::new(
            &[NamedEntity { id: "t1".to_string(), name: "Bolt".to_string() }],
            &[NamedEntity { id: "c1".to_string(), name: "No-code".to_string() }],
        )
    }

    #[test]
    fn no_filters_no_tags() {
        assert!(project_tags(&FilterState::default(), &labels()).is_empty());
        let sorted_only = FilterState::default().set_sort_order(SortOrder::Za);
        assert!(project_tags(&sorted_only, &labels()).is_empty());
    }

    #[test]
    fn tags_follow_display_order() {
        let state = FilterState::default()
            .toggle_category("c1")
            .toggle_tool("t1")
            .toggle_difficulty(Difficulty::Advanced)
            .toggle_difficulty(Difficulty::Beginner)
            .set_search_term("agents");
        let tags = project_tags(&state, &labels());
        let labels: Vec<&str> = tags.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["agents", "Beginner", "Advanced", "Bolt", "No-code"]);
        assert_eq!(tags[1].id, "difficulty:beginner");
        assert_eq!(tags[3].id, "tool:t1");
    }

    #[test]
    fn missing_names_fall_back_to_shortened_ids() {
        let state = FilterState::default()
            .toggle_tool("3f2a9c1e-77aa-4b51-9d0c-0123456789ab")
            .toggle_category("c9");
        let tags = project_tags(&state, &LabelResolver::default());
        assert_eq!(tags[0].label, "3f2a9c1e...");
        assert_eq!(tags[1].label, "c9");
    }

    #[test]
    fn removing_a_tag_clears_only_its_value() {
        let state = FilterState::default()
            .set_search_term("bolt")
            .toggle_tool("t1")
            .toggle_tool("t2")
            .set_sort_order(SortOrder::Az);
        let tags = project_tags(&state, &labels());
        let t1 = tags.iter().find(|t| t.id == "tool:t1").unwrap();

        let next = t1.remove_from(&state);
        assert_eq!(next.search_term, "bolt");
        assert_eq!(next.sort_order, SortOrder::Az);
        assert_eq!(next.selected_tools.iter().collect::<Vec<_>>(), vec!["t2"]);
    }

    #[test]
    fn stale_removal_does_not_reselect() {
        let state = FilterState::default();
        let removal = FilterRemoval::Tool("t1".to_string());
        assert_eq!(removal.apply(&state), state);
        let removal = FilterRemoval::Difficulty(Difficulty::Beginner);
        assert_eq!(removal.apply(&state), state);
    }

    #[test]
    fn removal_serializes_with_facet_and_value() {
        let json = serde_json::to_value(FilterRemoval::Tool("t1".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"facet": "tool", "value": "t1"}));
        let json = serde_json::to_value(FilterRemoval::Search).unwrap();
        assert_eq!(json, serde_json::json!({"facet": "search"}));
    }
}
