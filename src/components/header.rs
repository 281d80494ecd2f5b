//! Menu Header Component
//!
//! Title bar with sidebar toggle, cart badge and the search box.

use leptos::prelude::*;

use crate::store::{store_set_search, use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuHeader() -> impl IntoView {
    let store = use_menu_store();
    let (search_focused, set_search_focused) = signal(false);

    let search_text = move || store.filter().with(|f| f.search_query.clone());
    let item_count = move || store.cart().with(|cart| cart.summary().item_count);

    view! {
        <header class=move || if search_focused.get() { "menu-header focused" } else { "menu-header" }>
            <div class="menu-header-row">
                <button
                    class="header-btn"
                    aria-label="منو"
                    on:click=move |_| store.sidebar_open().set(true)
                >
                    "☰"
                </button>

                <h1 class="menu-title">"بامر لانژ"</h1>

                <button
                    class="header-btn cart-badge-btn"
                    aria-label="سبد خرید"
                    on:click=move |_| store.cart_open().set(true)
                >
                    <span class="cart-badge">{item_count}</span>
                    "🛒"
                </button>
            </div>

            <div class="search-box">
                <input
                    type="text"
                    placeholder="جستجوی غذا..."
                    prop:value=search_text
                    on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                    on:focus=move |_| set_search_focused.set(true)
                    on:blur=move |_| set_search_focused.set(false)
                />
                <Show when=move || search_focused.get()>
                    <button
                        class="search-clear-btn"
                        on:mousedown=move |ev| {
                            // Keep focus on the input while clearing
                            ev.prevent_default();
                            store.filter().write().clear_search();
                        }
                    >
                        "×"
                    </button>
                </Show>
            </div>
        </header>
    }
}
