//! Category Entity
//!
//! Categories group menu items; `"all"` is the unfiltered sentinel.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Reserved id meaning "no category filter"
    pub const ALL: &'static str = "all";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::all()
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named grouping of menu items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Display label
    pub name: String,
    /// Emoji shown next to the label
    #[serde(default)]
    pub icon: String,
    /// Background class used by the category button
    #[serde(default)]
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id.is_all()
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
