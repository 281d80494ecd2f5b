//! Cart Drawer Component
//!
//! Cart lines with +/- controls, total, delivery estimate and the
//! checkout button (no order is submitted).

use leptos::prelude::*;
use menu_core::{format_price_label, CartLine};

use crate::store::{store_add_to_cart, store_remove_from_cart, use_menu_store, MenuStateStoreFields};

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let store = use_menu_store();
    let item = line.item;
    let id = item.id;
    let (image, name, price) = (item.image.clone(), item.name.clone(), item.price);

    view! {
        <div class="cart-line">
            <img class="cart-line-image" src=image alt=name.clone() />
            <div class="cart-line-info">
                <h3>{name}</h3>
                <span class="price">{format_price_label(price)}</span>
            </div>
            <div class="quantity-controls">
                <button class="qty-btn" on:click=move |_| store_remove_from_cart(&store, id)>"−"</button>
                <span class="qty">{line.quantity}</span>
                <button class="qty-btn" on:click=move |_| store_add_to_cart(&store, &item)>"+"</button>
            </div>
        </div>
    }
}

#[component]
pub fn CartDrawer() -> impl IntoView {
    let store = use_menu_store();
    let summary = Memo::new(move |_| store.cart().with(|cart| cart.summary()));
    let close = move || store.cart_open().set(false);

    let on_checkout = move |_: web_sys::MouseEvent| {
        web_sys::console::log_1(&format!(
            "[CART] Checkout requested: {} items, total {}",
            summary.get_untracked().item_count,
            summary.get_untracked().total
        ).into());
    };

    view! {
        <Show when=move || store.cart_open().get()>
            <div class="overlay" on:click=move |_| close()></div>
            <aside class="cart-drawer">
                <div class="cart-header">
                    <h2>"سبد خرید"</h2>
                    <button class="header-btn" aria-label="بستن" on:click=move |_| close()>"×"</button>
                </div>

                <Show
                    when=move || summary.get().is_visible()
                    fallback=move || view! {
                        <div class="cart-empty">
                            <p>"سبد خرید شما خالی است"</p>
                            <button class="browse-btn" on:click=move |_| close()>"مشاهده منو"</button>
                        </div>
                    }
                >
                    <div class="cart-lines">
                        <For
                            each=move || store.cart().with(|cart| cart.lines().to_vec())
                            key=|line| (line.item.id, line.quantity)
                            children=move |line| view! { <CartLineRow line=line /> }
                        />
                    </div>
                    <div class="cart-footer">
                        <div class="cart-total">
                            <span>"جمع کل:"</span>
                            <span class="total">{move || format_price_label(summary.get().total)}</span>
                        </div>
                        <div class="cart-delivery">
                            <span>"زمان تحویل:"</span>
                            <span>{move || format!("حدود {} دقیقه", summary.get().delivery_minutes)}</span>
                        </div>
                        <button class="checkout-btn" on:click=on_checkout>"ادامه فرآیند خرید"</button>
                    </div>
                </Show>
            </aside>
        </Show>
    }
}
