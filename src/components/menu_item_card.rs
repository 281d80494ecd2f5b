//! Menu Item Card Component
//!
//! Card for one item: image, popular badge, prep time, rating, price and
//! an add button. Clicking the card opens the detail sheet.

use leptos::prelude::*;
use menu_core::{format_price_label, MenuItem};

use crate::components::RatingStars;
use crate::store::{store_add_to_cart, use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuItemCard(item: MenuItem) -> impl IntoView {
    let store = use_menu_store();
    let id = item.id;
    let item_for_add = item.clone();
    let (image, name) = (item.image.clone(), item.name.clone());
    let in_cart = move || store.cart().with(|cart| cart.quantity_of(id));

    view! {
        <div class="menu-card" on:click=move |_| store.selected_item().set(Some(id))>
            <figure class="menu-card-image">
                <img src=image alt=name.clone() />
                {item.is_popular.then(|| view! {
                    <div class="popular-badge">"★ پرفروش"</div>
                })}
            </figure>
            <div class="menu-card-body">
                <div class="menu-card-top">
                    <div>
                        <h2 class="menu-card-title">{name}</h2>
                        <p class="menu-card-description">{item.description.clone()}</p>
                    </div>
                    <span class="prep-time">{format!("{} دقیقه", item.prep_time)}</span>
                </div>
                <div class="menu-card-bottom">
                    <RatingStars rating=item.rating />
                    <div class="menu-card-order">
                        <span class="price">{format_price_label(item.price)}</span>
                        <Show when=move || { in_cart() > 0 }>
                            <span class="in-cart-count">{in_cart}</span>
                        </Show>
                        <button
                            class="add-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                store_add_to_cart(&store, &item_for_add);
                            }
                        >
                            "+"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
