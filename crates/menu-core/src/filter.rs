//! Filter Engine
//!
//! Visible subset of the catalog for a category and a free-text query.

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, MenuItem};

/// Selected category and search text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_category: CategoryId,
    pub search_query: String,
}

impl FilterState {
    pub fn select_category(&mut self, category: CategoryId) {
        self.selected_category = category;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// Back to "all" with an empty query
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when anything narrows the list
    pub fn is_active(&self) -> bool {
        !self.selected_category.is_all() || !self.search_query.is_empty()
    }

    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        apply_filter(items, &self.selected_category, &self.search_query)
    }
}

/// Keep items in the selected category whose name contains the query.
///
/// Order follows `items`. The query is used as given (no trimming).
pub fn apply_filter(items: &[MenuItem], selected_category: &CategoryId, search_query: &str) -> Vec<MenuItem> {
    let query = search_query.to_lowercase();
    items
        .iter()
        .filter(|item| selected_category.is_all() || &item.category == selected_category)
        .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "Special Pizza", "pizza", 150000, 25),
            MenuItem::new(2, "Classic Burger", "burger", 120000, 15),
            MenuItem::new(3, "Veggie Pizza", "pizza", 130000, 20),
            MenuItem::new(4, "Soda", "drink", 35000, 2),
        ]
    }

    fn ids(items: &[MenuItem]) -> Vec<u32> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn test_unfiltered_returns_everything_in_order() {
        let all = items();
        assert_eq!(apply_filter(&all, &CategoryId::all(), ""), all);
    }

    #[test]
    fn test_category_filter() {
        let result = apply_filter(&items(), &CategoryId::from("pizza"), "");
        assert_eq!(ids(&result), vec![1, 3]);
        assert!(result.iter().all(|i| i.category.as_str() == "pizza"));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let upper = apply_filter(&items(), &CategoryId::all(), "PIZZA");
        let lower = apply_filter(&items(), &CategoryId::all(), "pizza");
        assert_eq!(upper, lower);
        assert_eq!(ids(&lower), vec![1, 3]);
        assert_eq!(ids(&apply_filter(&items(), &CategoryId::all(), "gie p")), vec![3]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let result = apply_filter(&items(), &CategoryId::from("burger"), "pizza");
        assert!(result.is_empty());
        let result = apply_filter(&items(), &CategoryId::from("pizza"), "veggie");
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        assert!(apply_filter(&items(), &CategoryId::from("soup"), "").is_empty());
    }

    #[test]
    fn test_query_not_trimmed() {
        assert!(apply_filter(&items(), &CategoryId::all(), " soda").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let category = CategoryId::from("pizza");
        let once = apply_filter(&items(), &category, "pi");
        let twice = apply_filter(&once, &category, "pi");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_state_transitions() {
        let mut state = FilterState::default();
        assert!(!state.is_active());

        state.select_category(CategoryId::from("pizza"));
        state.set_search("special");
        assert!(state.is_active());
        assert_eq!(ids(&state.apply(&items())), vec![1]);

        state.clear_search();
        assert_eq!(ids(&state.apply(&items())), vec![1, 3]);

        state.clear();
        assert_eq!(state, FilterState::default());
        assert_eq!(state.apply(&items()).len(), 4);
    }
}
