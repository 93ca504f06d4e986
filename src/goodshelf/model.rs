use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type CategoryId = i64;
pub type ProductId = i64;

/// Owner sex, kept for presentation (the UI colors owner names by it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }

    /// Attach a resolved owner, keeping every base field.
    pub fn with_owner(self, owner: Option<User>) -> CategoryWithOwner {
        CategoryWithOwner {
            id: self.id,
            title: self.title,
            icon: self.icon,
            owner_id: self.owner_id,
            owner,
        }
    }
}

/// A category plus its resolved owner.
///
/// `owner` is `None` when `owner_id` matches no known user. That is a gap in
/// the data, not an error: presentation renders it as "no owner data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithOwner {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
    pub owner: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }

    /// Attach a resolved category, keeping every base field.
    pub fn with_category(self, category: Option<CategoryWithOwner>) -> ProductWithCategory {
        ProductWithCategory {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            category,
        }
    }
}

/// A product plus its resolved category (which in turn carries its owner).
///
/// `category` is `None` when `category_id` is unresolved; the raw
/// `category_id` is kept so downstream logic can still reason about the
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithCategory {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Option<CategoryWithOwner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_serializes_as_single_letter() {
        let json = serde_json::to_string(&Sex::Male).unwrap();
        assert_eq!(json, "\"m\"");

        let parsed: Sex = serde_json::from_str("\"f\"").unwrap();
        assert_eq!(parsed, Sex::Female);
    }

    #[test]
    fn test_category_uses_camel_case_keys() {
        let category = Category::new(4, "Electronics", "💻", 1);
        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains("\"ownerId\":1"));

        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, category);
    }

    #[test]
    fn test_product_deserializes_from_source_shape() {
        let product: Product =
            serde_json::from_str(r#"{ "id": 5, "name": "iPhone", "categoryId": 4 }"#).unwrap();
        assert_eq!(product, Product::new(5, "iPhone", 4));
    }

    #[test]
    fn test_with_owner_keeps_base_fields() {
        let category = Category::new(2, "Drinks", "🍷", 1);
        let enriched = category.clone().with_owner(None);

        assert_eq!(enriched.id, category.id);
        assert_eq!(enriched.title, category.title);
        assert_eq!(enriched.icon, category.icon);
        assert_eq!(enriched.owner_id, category.owner_id);
        assert!(enriched.owner.is_none());
    }
}
