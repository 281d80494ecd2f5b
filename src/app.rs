//! Menu Page App
//!
//! Root component: provides the catalog and page store, lays out the page.

use leptos::prelude::*;
use menu_core::Catalog;

use crate::context::MenuContext;
use crate::store::{MenuState, MenuStore};
use crate::components::{
    CartDrawer, CategoryBar, CategorySidebar, FloatingCartButton, ItemDetailSheet, MenuHeader,
    MenuItemList,
};

#[component]
pub fn App() -> impl IntoView {
    let catalog = Catalog::builtin();
    web_sys::console::log_1(&format!(
        "[APP] Loaded {} categories, {} items",
        catalog.list_categories().len(),
        catalog.list_items().len()
    ).into());

    provide_context(MenuContext::new(catalog));
    provide_context(MenuStore::new(MenuState::default()));

    view! {
        <div class="menu-page" dir="rtl">
            <MenuHeader />
            <CategorySidebar />
            <ItemDetailSheet />
            <CartDrawer />

            <main class="menu-content">
                <CategoryBar />
                <MenuItemList />
            </main>

            <FloatingCartButton />
        </div>
    }
}
