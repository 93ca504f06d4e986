//! # Record loading
//!
//! The three base record sets (users, categories, products) are read once at
//! startup and never change for the rest of the session. Where they come from
//! is abstracted behind the [`RecordSource`] trait:
//!
//! - [`memory::InMemorySource`]: records handed over directly by the embedding
//!   application, and the backend used by tests.
//! - [`fs::FileSource`]: read-only JSON files (`users.json`, `categories.json`,
//!   `products.json`) for hosts that keep their fixture data on disk.
//!
//! Sources only load; nothing in this crate ever writes records back.

use crate::error::Result;
use crate::model::{Category, Product, User};

pub mod fs;
pub mod memory;

/// Abstract interface for the three base record collections.
pub trait RecordSource {
    fn load_users(&self) -> Result<Vec<User>>;

    fn load_categories(&self) -> Result<Vec<Category>>;

    fn load_products(&self) -> Result<Vec<Product>>;
}
