//! Application Context
//!
//! Read-only catalog shared with every component via the Leptos Context API.

use leptos::prelude::*;
use menu_core::{Catalog, Category, ItemId, MenuItem};

/// Catalog handle provided via context
#[derive(Clone, Copy)]
pub struct MenuContext {
    catalog: StoredValue<Catalog>,
}

impl MenuContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.catalog.with_value(|c| c.list_categories().to_vec())
    }

    /// Run `f` over the catalog's items without cloning them
    pub fn with_items<R>(&self, f: impl FnOnce(&[MenuItem]) -> R) -> R {
        self.catalog.with_value(|c| f(c.list_items()))
    }

    pub fn item(&self, id: ItemId) -> Option<MenuItem> {
        self.catalog.with_value(|c| c.item(id).cloned())
    }
}

/// Get the menu context
pub fn use_menu_context() -> MenuContext {
    expect_context::<MenuContext>()
}
