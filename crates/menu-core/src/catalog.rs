//! Catalog Store
//!
//! Read-only categories and menu items, loaded once and never mutated.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::domain::{Category, CategoryId, DomainError, DomainResult, Entity, ItemId, MenuItem};

/// JSON document shape accepted by [`Catalog::from_json`]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    categories: Vec<Category>,
    menu_items: Vec<MenuItem>,
}

/// Fixed set of categories and items in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and category references
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>) -> DomainResult<Self> {
        let catalog = Self { categories, items };
        if let Err(err) = catalog.validate() {
            log::debug!("catalog rejected: {}", err);
            return Err(err);
        }
        Ok(catalog)
    }

    /// The menu shipped with the page
    pub fn builtin() -> Self {
        Self {
            categories: data::categories(),
            items: data::menu_items(),
        }
    }

    /// Parse a `{ "categories": [...], "menuItems": [...] }` document
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.categories, doc.menu_items)
    }

    fn validate(&self) -> DomainResult<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id()) {
                return Err(DomainError::Conflict(format!("duplicate category '{}'", category.id)));
            }
        }
        if !category_ids.contains(&CategoryId::all()) {
            return Err(DomainError::InvalidInput(format!(
                "missing '{}' category",
                CategoryId::ALL
            )));
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id()) {
                return Err(DomainError::Conflict(format!("duplicate item {}", item.id)));
            }
            if item.category.is_all() || !category_ids.contains(&item.category) {
                return Err(DomainError::NotFound(format!(
                    "category '{}' for item {}",
                    item.category, item.id
                )));
            }
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(DomainError::InvalidInput(format!(
                    "rating {} of item {} outside 0..=5",
                    item.rating, item.id
                )));
            }
        }
        Ok(())
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn list_items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items carrying the popular badge
    pub fn popular_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|i| i.is_popular)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
