//! Menu Item List Component
//!
//! Filtered item cards, or an empty state with a reset button.

use leptos::prelude::*;

use crate::components::MenuItemCard;
use crate::context::use_menu_context;
use crate::store::{store_clear_filters, use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuItemList() -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    let visible = Memo::new(move |_| {
        store.filter().with(|filter| ctx.with_items(|items| filter.apply(items)))
    });

    view! {
        <Show
            when=move || !visible.with(|items| items.is_empty())
            fallback=move || view! {
                <div class="empty-state">
                    <p>"هیچ موردی یافت نشد"</p>
                    <button class="clear-filters-btn" on:click=move |_| store_clear_filters(&store)>
                        "پاک کردن فیلترها"
                    </button>
                </div>
            }
        >
            <div class="menu-grid">
                <For
                    each=move || visible.get()
                    key=|item| item.id
                    children=move |item| view! { <MenuItemCard item=item /> }
                />
            </div>
        </Show>
    }
}
