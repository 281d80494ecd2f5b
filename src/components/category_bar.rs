//! Category Components
//!
//! Horizontal category chips and the slide-in category sidebar.
//! Both select through the same store helper.

use leptos::prelude::*;
use menu_core::Category;

use crate::context::use_menu_context;
use crate::store::{store_select_category, use_menu_store, MenuStateStoreFields};

/// One selectable category button
#[component]
fn CategoryButton(category: Category, #[prop(into)] base_class: String) -> impl IntoView {
    let store = use_menu_store();
    let id = category.id.clone();
    let id_for_click = id.clone();
    let color = category.color.clone();
    let is_selected = move || store.filter().with(|f| f.selected_category == id);

    view! {
        <button
            class=move || {
                if is_selected() {
                    format!("{} active", base_class)
                } else {
                    format!("{} {}", base_class, color)
                }
            }
            on:click=move |_| store_select_category(&store, id_for_click.clone())
        >
            <span class="category-icon">{category.icon.clone()}</span>
            <span class="category-name">{category.name.clone()}</span>
        </button>
    }
}

/// Scrollable chip row above the item list
#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_menu_context();

    view! {
        <nav class="category-bar">
            {ctx.categories().into_iter().map(|category| view! {
                <CategoryButton category=category base_class="category-chip" />
            }).collect_view()}
        </nav>
    }
}

/// Sidebar listing every category
#[component]
pub fn CategorySidebar() -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    view! {
        <Show when=move || store.sidebar_open().get()>
            <div class="overlay" on:click=move |_| store.sidebar_open().set(false)></div>
            <aside class="category-sidebar">
                <div class="sidebar-header">
                    <h2>"منوی رستوران"</h2>
                    <button
                        class="header-btn"
                        aria-label="بستن منو"
                        on:click=move |_| store.sidebar_open().set(false)
                    >
                        "×"
                    </button>
                </div>
                <div class="sidebar-categories">
                    {ctx.categories().into_iter().map(|category| view! {
                        <CategoryButton category=category base_class="sidebar-category" />
                    }).collect_view()}
                </div>
            </aside>
        </Show>
    }
}
