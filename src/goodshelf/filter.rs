//! # Filter Engine
//!
//! [`FilterState`] holds the three filter dimensions; [`compute_visible`]
//! derives the visible subset of the enriched product list from it. The state
//! is replaced wholesale on every change (never mutated field-by-field in
//! place), so two states can be compared with `==` and the engine can be
//! re-run on every change without caching.
//!
//! All filter stages are conjunctive. The result is a stable filter: a
//! sub-sequence of the input in the original relative order, never a sort.

use crate::model::{CategoryId, ProductWithCategory, UserId};
use std::collections::BTreeSet;

/// No user selected; every product passes the user stage.
pub const ALL_USERS: UserId = 0;

/// Current values of the three filter dimensions.
///
/// The default state (`selected_user == 0`, empty `search_text`, empty
/// `selected_categories`) filters nothing: every enriched product is visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Owner filter; [`ALL_USERS`] means no user filter.
    pub selected_user: UserId,
    /// Free-text name filter; empty means no text filter.
    pub search_text: String,
    /// Category filter; empty set means all categories are visible.
    pub selected_categories: BTreeSet<CategoryId>,
}

impl FilterState {
    /// Replace the selected user id unconditionally. 0 clears the filter.
    pub fn with_selected_user(mut self, user_id: UserId) -> Self {
        self.selected_user = user_id;
        self
    }

    /// Replace the search text unconditionally, no trimming or validation.
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Replace the category selection entirely. An empty selection means
    /// "all categories".
    pub fn with_category_selection(
        mut self,
        category_ids: impl IntoIterator<Item = CategoryId>,
    ) -> Self {
        self.selected_categories = category_ids.into_iter().collect();
        self
    }
}

/// Compute the visible subset of `products` under `state`.
///
/// Pure and deterministic: identical inputs always yield identical output.
/// An empty input list yields an empty result; an unknown or negative user id
/// yields an empty result because the equality test matches nothing.
pub fn compute_visible(
    products: &[ProductWithCategory],
    state: &FilterState,
) -> Vec<ProductWithCategory> {
    // to_lowercase is Unicode-aware and locale-independent, so the match
    // behaves the same across scripts
    let needle = state.search_text.to_lowercase();

    products
        .iter()
        .filter(|product| {
            matches_text(product, &needle)
                && matches_user(product, state.selected_user)
                && matches_category(product, &state.selected_categories)
        })
        .cloned()
        .collect()
}

fn matches_text(product: &ProductWithCategory, needle: &str) -> bool {
    needle.is_empty() || product.name.to_lowercase().contains(needle)
}

fn matches_user(product: &ProductWithCategory, selected_user: UserId) -> bool {
    if selected_user == ALL_USERS {
        return true;
    }
    // A product without category or owner data cannot belong to the
    // selected user
    product
        .category
        .as_ref()
        .and_then(|category| category.owner.as_ref())
        .is_some_and(|owner| owner.id == selected_user)
}

fn matches_category(product: &ProductWithCategory, selected: &BTreeSet<CategoryId>) -> bool {
    // Tests the raw foreign key, so a product with an unresolved category
    // still matches when its id is explicitly selected
    selected.is_empty() || selected.contains(&product.category_id)
}
