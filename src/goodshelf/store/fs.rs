use super::RecordSource;
use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

const USERS_FILENAME: &str = "users.json";
const CATEGORIES_FILENAME: &str = "categories.json";
const PRODUCTS_FILENAME: &str = "products.json";

/// Record source reading JSON files from a single directory.
///
/// Each collection lives in its own file (`users.json`, `categories.json`,
/// `products.json`) holding a JSON array. Files are read on every load call;
/// a missing file is an IO error, not an empty collection, so a typo in the
/// directory path surfaces instead of yielding a silently empty catalog.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_collection<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.root.join(filename);
        let content = fs::read_to_string(&path).map_err(CatalogError::Io)?;
        serde_json::from_str(&content).map_err(CatalogError::Serialization)
    }
}

impl RecordSource for FileSource {
    fn load_users(&self) -> Result<Vec<User>> {
        self.read_collection(USERS_FILENAME)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        self.read_collection(CATEGORIES_FILENAME)
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        self.read_collection(PRODUCTS_FILENAME)
    }
}
