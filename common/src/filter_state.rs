//! The filter selections a caller holds while browsing courses.
//!
//! `FilterState` is an immutable value: every mutator returns a new state and
//! leaves the receiver untouched. Whoever owns the current state swaps it for
//! the returned one and re-runs the pipeline.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{course::Difficulty, sort_order::SortOrder};

/// An empty facet selection places no constraint on that facet. It does NOT
/// mean "match nothing"; keep it that way.
pub const EMPTY_SELECTION_MEANS_UNFILTERED: bool = true;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyFlags {
    pub beginner: bool,
    pub intermediate: bool,
    pub advanced: bool,
}

impl DifficultyFlags {
    pub fn get(&self, level: Difficulty) -> bool {
        match level {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }

    pub fn with(mut self, level: Difficulty, value: bool) -> Self {
        match level {
            Difficulty::Beginner => self.beginner = value,
            Difficulty::Intermediate => self.intermediate = value,
            Difficulty::Advanced => self.advanced = value,
        }
        self
    }

    pub fn any(&self) -> bool {
        self.beginner || self.intermediate || self.advanced
    }

    /// Levels currently switched on, in beginner → advanced order.
    pub fn selected(&self) -> impl Iterator<Item = Difficulty> + '_ {
        Difficulty::ALL.into_iter().filter(|level| self.get(*level))
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search_term: String,
    pub selected_tools: BTreeSet<String>,
    pub selected_categories: BTreeSet<String>,
    pub difficulties: DifficultyFlags,
    pub sort_order: SortOrder,
}

impl FilterState {
    pub fn set_search_term(&self, text: impl Into<String>) -> Self {
        Self { search_term: text.into(), ..self.clone() }
    }

    pub fn set_sort_order(&self, order: SortOrder) -> Self {
        Self { sort_order: order, ..self.clone() }
    }

    pub fn toggle_tool(&self, tool_id: &str) -> Self {
        Self { selected_tools: toggled(&self.selected_tools, tool_id), ..self.clone() }
    }

    pub fn toggle_category(&self, category_id: &str) -> Self {
        Self { selected_categories: toggled(&self.selected_categories, category_id), ..self.clone() }
    }

    pub fn toggle_difficulty(&self, level: Difficulty) -> Self {
        let flipped = !self.difficulties.get(level);
        Self { difficulties: self.difficulties.with(level, flipped), ..self.clone() }
    }

    pub fn clear_search(&self) -> Self {
        self.set_search_term(String::new())
    }

    pub fn clear_tools(&self) -> Self {
        Self { selected_tools: BTreeSet::new(), ..self.clone() }
    }

    pub fn clear_categories(&self) -> Self {
        Self { selected_categories: BTreeSet::new(), ..self.clone() }
    }

    pub fn clear_difficulties(&self) -> Self {
        Self { difficulties: DifficultyFlags::default(), ..self.clone() }
    }

    /// Resets every field, sort order included, in a single step.
    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    /// True when no search term and no facet value narrows the result.
    /// Sort order does not count as a filter.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.selected_tools.is_empty()
            && self.selected_categories.is_empty()
            && !self.difficulties.any()
    }

    /// Number of individually removable filter values.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search_term.is_empty())
            + self.difficulties.selected().count()
            + self.selected_tools.len()
            + self.selected_categories.len()
    }
}

fn toggled(selection: &BTreeSet<String>, id: &str) -> BTreeSet<String> {
    let mut next = selection.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}
