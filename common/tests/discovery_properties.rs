use std::collections::BTreeSet;

use common::course::{Course, Difficulty};
use common::filter_state::FilterState;
use common::filter_tags::{LabelResolver, project_tags};
use common::pipeline::compute_visible;
use common::sort_order::{SortOrder, sort_courses, title_collation_key};
use proptest::prelude::*;
use proptest::test_runner::Config;

const TOOLS: [&str; 4] = ["t1", "t2", "t3", "t4"];
const CATEGORIES: [&str; 3] = ["c1", "c2", "c3"];

fn difficulty_strategy() -> impl Strategy<Value = Option<Difficulty>> {
    prop_oneof![
        Just(None),
        Just(Some(Difficulty::Beginner)),
        Just(Some(Difficulty::Intermediate)),
        Just(Some(Difficulty::Advanced)),
    ]
}

fn sort_strategy() -> impl Strategy<Value = SortOrder> {
    prop::sample::select(SortOrder::ALL.to_vec())
}

/// Courses with distinct ids and distinct titles.
fn catalog_strategy() -> impl Strategy<Value = Vec<Course>> {
    (1usize..12).prop_flat_map(|len| {
        (
            prop::collection::btree_set("[a-z0-9]{1,6}", len),
            prop::collection::btree_set("[A-Za-zÉéÁáñÑüÖ\u{0301} ]{1,12}", len),
            prop::collection::vec(
                (
                    prop::collection::btree_set(prop::sample::select(TOOLS.to_vec()), 0..3),
                    prop::option::of(prop::sample::select(CATEGORIES.to_vec())),
                    difficulty_strategy(),
                    "[a-z ]{0,20}",
                ),
                len,
            ),
        )
    })
    .prop_map(|(ids, titles, extras)| {
        ids.into_iter()
            .zip(titles)
            .zip(extras)
            .map(|((id, title), (tools, category, difficulty, description))| {
                let mut course = Course::new(id, title)
                    .with_description(description)
                    .with_tools(tools);
                course.category_id = category.map(str::to_string);
                course.difficulty = difficulty;
                course
            })
            .collect()
    })
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,3}"],
        prop::collection::btree_set(prop::sample::select(TOOLS.to_vec()), 0..3),
        prop::collection::btree_set(prop::sample::select(CATEGORIES.to_vec()), 0..2),
        prop::collection::btree_set(difficulty_strategy(), 0..3),
        sort_strategy(),
    )
        .prop_map(|(search, tools, categories, levels, order)| {
            let mut state = FilterState::default().set_search_term(search).set_sort_order(order);
            for tool in tools {
                state = state.toggle_tool(tool);
            }
            for category in categories {
                state = state.toggle_category(category);
            }
            for level in levels.into_iter().flatten() {
                state = state.toggle_difficulty(level);
            }
            state
        })
}

fn ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.clone()).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn clear_all_is_idempotent(state in state_strategy()) {
        let once = state.clear_all();
        prop_assert_eq!(once.clear_all(), once.clone());
        prop_assert_eq!(once, FilterState::default());
    }

    #[test]
    fn double_toggle_is_identity(state in state_strategy(), tool in "[a-z0-9]{1,4}", level in prop::sample::select(Difficulty::ALL.to_vec())) {
        prop_assert_eq!(state.toggle_tool(&tool).toggle_tool(&tool), state.clone());
        prop_assert_eq!(state.toggle_category(&tool).toggle_category(&tool), state.clone());
        prop_assert_eq!(state.toggle_difficulty(level).toggle_difficulty(level), state);
    }

    #[test]
    fn visible_is_a_subset_by_identity(courses in catalog_strategy(), state in state_strategy()) {
        let visible = compute_visible(&courses, &state);
        prop_assert!(visible.len() <= courses.len());
        for course in &visible {
            prop_assert!(courses.iter().any(|c| std::ptr::eq(c, *course)));
        }
        let distinct: BTreeSet<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(distinct.len(), visible.len());
    }

    #[test]
    fn empty_selection_drops_nothing(courses in catalog_strategy(), order in sort_strategy()) {
        let state = FilterState::default().set_sort_order(order);
        let visible = compute_visible(&courses, &state);
        let all: Vec<&Course> = courses.iter().collect();
        prop_assert_eq!(ids(&visible), ids(&sort_courses(&all, order)));
    }

    #[test]
    fn sort_inverse_laws(courses in catalog_strategy()) {
        let all: Vec<&Course> = courses.iter().collect();
        let mut newest = ids(&sort_courses(&all, SortOrder::Newest));
        newest.reverse();
        prop_assert_eq!(ids(&sort_courses(&all, SortOrder::Oldest)), newest);

        let mut az = ids(&sort_courses(&all, SortOrder::Az));
        az.reverse();
        prop_assert_eq!(ids(&sort_courses(&all, SortOrder::Za)), az);
    }

    #[test]
    fn az_order_follows_collation_key(courses in catalog_strategy()) {
        let all: Vec<&Course> = courses.iter().collect();
        let sorted = sort_courses(&all, SortOrder::Az);
        for pair in sorted.windows(2) {
            prop_assert!(title_collation_key(&pair[0].title) <= title_collation_key(&pair[1].title));
        }
    }

    #[test]
    fn sort_leaves_input_untouched(courses in catalog_strategy(), order in sort_strategy()) {
        let all: Vec<&Course> = courses.iter().collect();
        let before = ids(&all);
        let _ = sort_courses(&all, order);
        prop_assert_eq!(ids(&all), before);
    }

    #[test]
    fn tags_match_active_filters(state in state_strategy()) {
        let labels = LabelResolver::default();
        let tags = project_tags(&state, &labels);
        prop_assert_eq!(tags.len(), state.active_filter_count());

        for tag in &tags {
            let next = tag.remove_from(&state);
            let remaining = project_tags(&next, &labels);
            prop_assert_eq!(remaining.len(), tags.len() - 1);
            prop_assert!(remaining.iter().all(|t| t.id != tag.id));
            let expected: Vec<&str> = tags.iter().filter(|t| t.id != tag.id).map(|t| t.id.as_str()).collect();
            let actual: Vec<&str> = remaining.iter().map(|t| t.id.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
