use super::RecordSource;
use crate::error::Result;
use crate::model::{Category, Product, User};

/// Record source backed by vectors handed over at construction.
///
/// Loads never fail; the source just clones what it owns.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl InMemorySource {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }
}

impl RecordSource for InMemorySource {
    fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Sex;

    /// Sample dataset mirroring the shape of the original product board:
    /// a handful of users, categories owned by them (one with a dangling
    /// owner reference), and products (one with a dangling category
    /// reference).
    pub fn sample_source() -> InMemorySource {
        InMemorySource::new(sample_users(), sample_categories(), sample_products())
    }

    pub fn sample_users() -> Vec<User> {
        vec![
            User::new(1, "Roma", Sex::Male),
            User::new(2, "Anna", Sex::Female),
            User::new(3, "Max", Sex::Male),
            User::new(4, "John", Sex::Male),
        ]
    }

    pub fn sample_categories() -> Vec<Category> {
        vec![
            Category::new(1, "Grocery", "🍞", 2),
            Category::new(2, "Drinks", "🍷", 1),
            Category::new(3, "Fruits", "🍏", 2),
            Category::new(4, "Electronics", "💻", 1),
            Category::new(5, "Clothes", "👚", 3),
            // Owner 9 does not exist
            Category::new(6, "Toys", "🎮", 9),
        ]
    }

    pub fn sample_products() -> Vec<Product> {
        vec![
            Product::new(1, "Milk", 2),
            Product::new(2, "Bread", 1),
            Product::new(3, "Garlic", 1),
            Product::new(4, "Apples", 3),
            Product::new(5, "iPhone", 4),
            Product::new(6, "Jeans", 5),
            Product::new(7, "Water", 2),
            Product::new(8, "Board game", 6),
            // Category 99 does not exist
            Product::new(9, "Mystery box", 99),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_source;
    use super::*;

    #[test]
    fn test_loads_return_owned_copies() {
        let source = sample_source();

        let users = source.load_users().unwrap();
        let again = source.load_users().unwrap();
        assert_eq!(users, again);
        assert_eq!(users.len(), 4);
    }

    #[test]
    fn test_empty_source_is_valid() {
        let source = InMemorySource::default();
        assert!(source.load_users().unwrap().is_empty());
        assert!(source.load_categories().unwrap().is_empty());
        assert!(source.load_products().unwrap().is_empty());
    }

    #[test]
    fn test_fixture_references_mostly_resolve() {
        let source = sample_source();
        let users = source.load_users().unwrap();
        let categories = source.load_categories().unwrap();

        let dangling = categories
            .iter()
            .filter(|c| !users.iter().any(|u| u.id == c.owner_id))
            .count();
        assert_eq!(dangling, 1);
    }
}
