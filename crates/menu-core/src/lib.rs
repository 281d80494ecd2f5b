//! Menu Core
//!
//! Layered engine behind the menu page:
//! - domain: catalog entities and errors
//! - catalog: the read-only category/item store
//! - filter: category + search narrowing
//! - cart: copy-on-write cart with totals and delivery estimate
//! - format: price and rating display helpers

mod data;
mod domain;
mod catalog;
mod filter;
mod cart;
mod format;

#[cfg(test)]
mod tests;

pub use domain::{Category, CategoryId, DomainError, DomainResult, Entity, ItemId, MenuItem};
pub use catalog::Catalog;
pub use filter::{apply_filter, FilterState};
pub use cart::{
    add_to_cart, cart_item_count, cart_total, estimated_delivery_minutes, remove_from_cart, Cart,
    CartLine, CartSummary, DISPATCH_BUFFER_MINUTES,
};
pub use format::{
    filled_stars, format_price, format_price_label, format_rating, CURRENCY_LABEL, MAX_STARS,
};
