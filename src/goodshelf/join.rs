//! # Join Resolver
//!
//! Denormalizes the three base record sets into enriched views: every
//! category gains its resolved owner, every product gains its resolved
//! (already enriched) category. Enrichment runs once at startup and is a pure
//! function of its inputs.
//!
//! Unresolved references are not errors. A category whose `owner_id` matches
//! no user gets `owner: None`; a product whose `category_id` matches no
//! category gets `category: None`. `None` flows through to presentation as
//! "missing data".

use crate::model::{
    Category, CategoryId, CategoryWithOwner, Product, ProductWithCategory, User, UserId,
};
use std::collections::HashMap;

/// Look up the user with the given id, first match wins.
pub fn resolve_owner(owner_id: UserId, users: &[User]) -> Option<User> {
    users.iter().find(|user| user.id == owner_id).cloned()
}

/// Look up the enriched category with the given id, first match wins.
pub fn resolve_category(
    category_id: CategoryId,
    categories: &[CategoryWithOwner],
) -> Option<CategoryWithOwner> {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .cloned()
}

/// Attach owners to every category.
///
/// One output per input, input order preserved, nothing filtered or
/// deduplicated. Ids are indexed up front so each lookup is constant-time.
pub fn enrich_categories(categories: &[Category], users: &[User]) -> Vec<CategoryWithOwner> {
    let mut users_by_id: HashMap<UserId, &User> = HashMap::with_capacity(users.len());
    for user in users {
        // First occurrence wins when ids are duplicated
        users_by_id.entry(user.id).or_insert(user);
    }

    categories
        .iter()
        .map(|category| {
            let owner = users_by_id.get(&category.owner_id).map(|u| (*u).clone());
            category.clone().with_owner(owner)
        })
        .collect()
}

/// Attach enriched categories to every product.
///
/// Same totality guarantees as [`enrich_categories`].
pub fn enrich_products(
    products: &[Product],
    categories: &[CategoryWithOwner],
) -> Vec<ProductWithCategory> {
    let mut categories_by_id: HashMap<CategoryId, &CategoryWithOwner> =
        HashMap::with_capacity(categories.len());
    for category in categories {
        categories_by_id.entry(category.id).or_insert(category);
    }

    products
        .iter()
        .map(|product| {
            let category = categories_by_id
                .get(&product.category_id)
                .map(|c| (*c).clone());
            product.clone().with_category(category)
        })
        .collect()
}
