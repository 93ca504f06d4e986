//! # API Facade
//!
//! [`Catalog`] is the single entry point for UI clients. It loads the three
//! base record sets once, enriches them once, and owns the one mutable value
//! in the system: the current [`FilterState`].
//!
//! Every filter-change call replaces the state wholesale and returns the
//! freshly computed visible list, so a caller never observes a state change
//! without the matching recomputation. Execution is single-threaded and
//! synchronous; there is nothing to cache or invalidate.
//!
//! The facade does no presentation work. It returns data structures;
//! rendering them (and the "no products matching" message for an empty list)
//! is the caller's concern.

use crate::error::Result;
use crate::filter::{compute_visible, FilterState};
use crate::join::{enrich_categories, enrich_products};
use crate::model::{
    Category, CategoryId, CategoryWithOwner, Product, ProductWithCategory, User, UserId,
};
use crate::store::RecordSource;

/// The enriched catalog plus its current filter state.
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<CategoryWithOwner>,
    products: Vec<ProductWithCategory>,
    state: FilterState,
}

impl Catalog {
    /// Build a catalog from record sets handed over directly.
    ///
    /// Enrichment happens eagerly here; the base sets are immutable for the
    /// life of the catalog, so it never needs to run again.
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        let categories = enrich_categories(&categories, &users);
        let products = enrich_products(&products, &categories);
        Self {
            users,
            categories,
            products,
            state: FilterState::default(),
        }
    }

    /// Build a catalog by loading all three record sets from a source.
    pub fn from_source<S: RecordSource>(source: &S) -> Result<Self> {
        let users = source.load_users()?;
        let categories = source.load_categories()?;
        let products = source.load_products()?;
        Ok(Self::new(users, categories, products))
    }

    fn apply(&mut self, state: FilterState) -> Vec<ProductWithCategory> {
        self.state = state;
        self.visible_products()
    }

    /// Select the owner filter; 0 shows products of all users.
    pub fn select_user(&mut self, user_id: UserId) -> Vec<ProductWithCategory> {
        self.apply(self.state.clone().with_selected_user(user_id))
    }

    /// Replace the free-text name filter.
    pub fn search(&mut self, text: impl Into<String>) -> Vec<ProductWithCategory> {
        self.apply(self.state.clone().with_search_text(text))
    }

    /// Replace the category selection entirely.
    pub fn set_category_selection(
        &mut self,
        category_ids: impl IntoIterator<Item = CategoryId>,
    ) -> Vec<ProductWithCategory> {
        self.apply(self.state.clone().with_category_selection(category_ids))
    }

    /// Narrow the selection to a single category, as the original board's
    /// one-button toggle does.
    pub fn select_category(&mut self, category_id: CategoryId) -> Vec<ProductWithCategory> {
        self.set_category_selection([category_id])
    }

    /// Clear the category filter ("All" button).
    pub fn select_all_categories(&mut self) -> Vec<ProductWithCategory> {
        self.set_category_selection(Vec::new())
    }

    /// Restore every filter dimension to its default.
    pub fn reset_all(&mut self) -> Vec<ProductWithCategory> {
        self.apply(FilterState::default())
    }

    /// The visible subset under the current filter state.
    pub fn visible_products(&self) -> Vec<ProductWithCategory> {
        compute_visible(&self.products, &self.state)
    }

    /// All users, for rendering the owner filter tabs.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All enriched categories, for rendering the category buttons.
    pub fn categories(&self) -> &[CategoryWithOwner] {
        &self.categories
    }

    /// The full enriched product list, unfiltered.
    pub fn products(&self) -> &[ProductWithCategory] {
        &self.products
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::store::memory::fixtures::sample_source;

    fn names(products: &[ProductWithCategory]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn phone_catalog() -> Catalog {
        Catalog::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(10, "Phones", "📱", 1)],
            vec![Product::new(100, "iPhone", 10), Product::new(101, "Cable", 10)],
        )
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut catalog = phone_catalog();
        assert_eq!(names(&catalog.search("PHONE")), vec!["iPhone"]);
        assert_eq!(names(&catalog.search("cab")), vec!["Cable"]);
        assert!(catalog.search("tablet").is_empty());
    }

    #[test]
    fn test_user_selection_scenario() {
        let mut catalog = phone_catalog();

        let visible = catalog.select_user(1);
        assert_eq!(names(&visible), vec!["iPhone", "Cable"]);
        for product in &visible {
            let owner = product.category.as_ref().unwrap().owner.as_ref().unwrap();
            assert_eq!(owner.name, "Roma");
        }

        assert!(catalog.select_user(2).is_empty());
    }

    #[test]
    fn test_filters_persist_across_unrelated_changes() {
        let mut catalog = Catalog::from_source(&sample_source()).unwrap();

        catalog.search("a");
        let visible = catalog.select_user(2);
        // Search text survives the user change
        assert_eq!(names(&visible), vec!["Bread", "Garlic", "Apples"]);
        assert_eq!(catalog.filter_state().search_text, "a");
    }

    #[test]
    fn test_reset_all_restores_full_list() {
        let mut catalog = Catalog::from_source(&sample_source()).unwrap();

        catalog.search("nothing matches this");
        catalog.select_user(3);
        catalog.select_category(5);
        assert!(catalog.visible_products().is_empty());

        let visible = catalog.reset_all();
        assert_eq!(visible.len(), catalog.products().len());
        assert_eq!(catalog.filter_state(), &FilterState::default());
    }

    #[test]
    fn test_category_toggle_replaces_selection() {
        let mut catalog = Catalog::from_source(&sample_source()).unwrap();

        let visible = catalog.select_category(1);
        assert_eq!(names(&visible), vec!["Bread", "Garlic"]);

        // Selecting another category replaces, it does not accumulate
        let visible = catalog.select_category(3);
        assert_eq!(names(&visible), vec!["Apples"]);

        let visible = catalog.select_all_categories();
        assert_eq!(visible.len(), catalog.products().len());
    }

    #[test]
    fn test_read_only_surface_for_presentation() {
        let catalog = Catalog::from_source(&sample_source()).unwrap();

        assert_eq!(catalog.users().len(), 4);
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.products().len(), 9);

        // Enrichment happened at construction
        let toys = catalog.categories().iter().find(|c| c.title == "Toys").unwrap();
        assert!(toys.owner.is_none());
    }
}
