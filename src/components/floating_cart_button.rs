//! Floating Cart Button Component

use leptos::prelude::*;
use menu_core::format_price_label;

use crate::store::{use_menu_store, MenuStateStoreFields};

/// Bottom button with count and total, shown once the cart has items
#[component]
pub fn FloatingCartButton() -> impl IntoView {
    let store = use_menu_store();
    let summary = Memo::new(move |_| store.cart().with(|cart| cart.summary()));

    view! {
        <Show when=move || summary.get().is_visible()>
            <div class="floating-cart">
                <button class="floating-cart-btn" on:click=move |_| store.cart_open().set(true)>
                    <span class="cart-badge">{move || summary.get().item_count}</span>
                    <span>"مشاهده سبد خرید"</span>
                    <span class="total-badge">{move || format_price_label(summary.get().total)}</span>
                </button>
            </div>
        </Show>
    }
}
