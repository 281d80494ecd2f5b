//! Menu Item Entity
//!
//! A single orderable catalog entry. Created once at load, immutable afterwards.

use serde::{Deserialize, Serialize};
use super::category::CategoryId;
use super::entity::Entity;

/// Menu item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An orderable dish or drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier
    pub id: ItemId,
    /// Display name, matched by search
    pub name: String,
    pub description: String,
    /// Price in whole currency units
    pub price: u64,
    /// Owning category (never the "all" sentinel)
    pub category: CategoryId,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Average rating in [0.0, 5.0]
    pub rating: f32,
    /// Preparation time in minutes
    pub prep_time: u32,
    pub calories: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Shows the "popular" badge
    #[serde(default)]
    pub is_popular: bool,
}

impl MenuItem {
    /// Create an item with the fields the engine reads; descriptive fields are empty
    pub fn new(id: u32, name: &str, category: &str, price: u64, prep_time: u32) -> Self {
        Self {
            id: ItemId(id),
            name: name.to_string(),
            description: String::new(),
            price,
            category: CategoryId::new(category),
            image: String::new(),
            rating: 0.0,
            prep_time,
            calories: 0,
            ingredients: Vec::new(),
            is_popular: false,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }

    pub fn with_ingredients(mut self, ingredients: &[&str]) -> Self {
        self.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    /// Case-insensitive substring match against the name
    pub fn name_matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl Entity for MenuItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
