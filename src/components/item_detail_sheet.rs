//! Item Detail Sheet Component
//!
//! Full description, ingredients and calories for the selected item,
//! with an add-to-cart footer that closes the sheet.

use leptos::prelude::*;
use menu_core::{format_price_label, MenuItem};

use crate::components::RatingStars;
use crate::context::use_menu_context;
use crate::store::{store_add_to_cart, use_menu_store, MenuStateStoreFields};

#[component]
fn ItemDetail(item: MenuItem) -> impl IntoView {
    let store = use_menu_store();
    let item_for_add = item.clone();
    let close = move || store.selected_item().set(None);

    view! {
        <div class="overlay" on:click=move |_| close()></div>
        <div class="detail-sheet">
            <figure class="detail-image">
                <img src=item.image.clone() alt=item.name.clone() />
                <button class="detail-close-btn" on:click=move |_| close()>"‹"</button>
            </figure>
            <div class="detail-body">
                <div class="detail-heading">
                    <h2>{item.name.clone()}</h2>
                    <span class="price">{format_price_label(item.price)}</span>
                </div>
                <div class="detail-meta">
                    <span class="prep-time">{format!("{} دقیقه", item.prep_time)}</span>
                    <RatingStars rating=item.rating />
                </div>
                <p class="detail-description">{item.description.clone()}</p>

                {(!item.ingredients.is_empty()).then(|| view! {
                    <div class="detail-ingredients">
                        <h3>"مواد تشکیل دهنده"</h3>
                        <ul>
                            {item.ingredients.iter().map(|ing| view! {
                                <li>{ing.clone()}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                })}

                <div class="detail-calories">
                    <span>"کالری"</span>
                    <span class="calories">{format!("{} kcal", item.calories)}</span>
                </div>
            </div>
            <div class="detail-footer">
                <button
                    class="add-to-cart-btn"
                    on:click=move |_| {
                        store_add_to_cart(&store, &item_for_add);
                        close();
                    }
                >
                    "افزودن به سبد خرید"
                </button>
            </div>
        </div>
    }
}

/// Shows the detail sheet while an item is selected
#[component]
pub fn ItemDetailSheet() -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    move || {
        store
            .selected_item()
            .get()
            .and_then(|id| ctx.item(id))
            .map(|item| view! { <ItemDetail item=item /> })
    }
}
