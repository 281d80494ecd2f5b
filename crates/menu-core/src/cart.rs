//! Cart Engine
//!
//! Cart lines keyed by item id. Updates return a new `Cart` and leave the
//! input untouched, so a cart held by several observers never changes under them.
//!
//! Per item id: `Absent -> add -> qty 1 -> add -> qty n+1`,
//! `qty n (n > 1) -> remove -> qty n-1`, `qty 1 -> remove -> Absent`.

use serde::{Deserialize, Serialize};

use crate::domain::{ItemId, MenuItem};

/// Fixed dispatch buffer added to the slowest preparation time
pub const DISPATCH_BUFFER_MINUTES: u32 = 15;

/// A menu item and how many of it are in the cart (always >= 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.item.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Cart lines in the order items were first added
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Totals shown by the cart button and drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: u32,
    pub total: u64,
    pub delivery_minutes: u32,
}

impl CartSummary {
    /// The floating cart button only shows with something in the cart
    pub fn is_visible(&self) -> bool {
        self.item_count > 0
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item.id == item_id)
    }

    /// Quantity held for an item, 0 when absent
    pub fn quantity_of(&self, item_id: ItemId) -> u32 {
        self.line(item_id).map_or(0, |line| line.quantity)
    }

    pub fn add(&self, item: &MenuItem) -> Cart {
        add_to_cart(self, item)
    }

    pub fn remove(&self, item_id: ItemId) -> Cart {
        remove_from_cart(self, item_id)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: cart_item_count(self),
            total: cart_total(self),
            delivery_minutes: estimated_delivery_minutes(self),
        }
    }
}

/// Add one unit of `item`, creating its line if needed
pub fn add_to_cart(cart: &Cart, item: &MenuItem) -> Cart {
    let mut next = cart.clone();
    match next.lines.iter_mut().find(|line| line.item.id == item.id) {
        Some(line) => {
            line.quantity = line.quantity.saturating_add(1);
            log::trace!("cart: item {} -> qty {}", item.id, line.quantity);
        }
        None => {
            next.lines.push(CartLine { item: item.clone(), quantity: 1 });
            log::trace!("cart: item {} added", item.id);
        }
    }
    next
}

/// Take one unit of `item_id` out; the line goes away at zero.
///
/// Unknown ids leave the cart as it was.
pub fn remove_from_cart(cart: &Cart, item_id: ItemId) -> Cart {
    let Some(pos) = cart.lines.iter().position(|line| line.item.id == item_id) else {
        return cart.clone();
    };

    let mut next = cart.clone();
    if next.lines[pos].quantity > 1 {
        next.lines[pos].quantity -= 1;
        log::trace!("cart: item {} -> qty {}", item_id, next.lines[pos].quantity);
    } else {
        next.lines.remove(pos);
        log::trace!("cart: item {} removed", item_id);
    }
    next
}

/// Sum of `price * quantity`
pub fn cart_total(cart: &Cart) -> u64 {
    cart.lines
        .iter()
        .fold(0u64, |sum, line| sum.saturating_add(line.line_total()))
}

/// Sum of quantities
pub fn cart_item_count(cart: &Cart) -> u32 {
    cart.lines
        .iter()
        .fold(0u32, |count, line| count.saturating_add(line.quantity))
}

/// Slowest preparation time plus the dispatch buffer; 0 for an empty cart
pub fn estimated_delivery_minutes(cart: &Cart) -> u32 {
    cart.lines
        .iter()
        .map(|line| line.item.prep_time)
        .max()
        .map_or(0, |slowest| slowest.saturating_add(DISPATCH_BUFFER_MINUTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> MenuItem {
        MenuItem::new(1, "Special Pizza", "pizza", 150000, 25)
    }

    fn burger() -> MenuItem {
        MenuItem::new(2, "Classic Burger", "burger", 120000, 15)
    }

    fn pasta() -> MenuItem {
        MenuItem::new(3, "Alfredo Pasta", "pasta", 135000, 20)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart_total(&cart), 0);
        assert_eq!(cart_item_count(&cart), 0);
        assert_eq!(estimated_delivery_minutes(&cart), 0);
        assert!(!cart.summary().is_visible());
    }

    #[test]
    fn test_add_creates_then_increments() {
        let cart = add_to_cart(&Cart::new(), &pizza());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(ItemId(1)), 1);

        let cart = add_to_cart(&cart, &pizza());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(ItemId(1)), 2);
    }

    #[test]
    fn test_add_does_not_touch_original() {
        let before = add_to_cart(&Cart::new(), &pizza());
        let after = add_to_cart(&before, &pizza());
        assert_eq!(before.quantity_of(ItemId(1)), 1);
        assert_eq!(after.quantity_of(ItemId(1)), 2);
    }

    #[test]
    fn test_remove_decrements_then_deletes() {
        let cart = Cart::new().add(&pizza()).add(&pizza());
        let cart = remove_from_cart(&cart, ItemId(1));
        assert_eq!(cart.quantity_of(ItemId(1)), 1);

        let cart = remove_from_cart(&cart, ItemId(1));
        assert!(cart.line(ItemId(1)).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let cart = Cart::new().add(&pizza());
        assert_eq!(remove_from_cart(&cart, ItemId(42)), cart);
        assert_eq!(remove_from_cart(&Cart::new(), ItemId(1)), Cart::new());
    }

    #[test]
    fn test_add_then_remove_is_inverse() {
        let start = Cart::new().add(&pizza()).add(&burger());
        let round_trip = start.add(&pizza()).remove(ItemId(1));
        assert_eq!(round_trip, start);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let cart = Cart::new().add(&burger()).add(&pizza()).add(&burger());
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.item.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new().add(&pizza()).add(&burger()).add(&burger());
        assert_eq!(cart_item_count(&cart), 3);
        assert_eq!(cart_total(&cart), 150000 + 2 * 120000);
        assert_eq!(cart.line(ItemId(2)).map(CartLine::line_total), Some(240000));
    }

    #[test]
    fn test_delivery_uses_slowest_item() {
        let cart = Cart::new().add(&pizza()).add(&burger()).add(&pasta());
        assert_eq!(estimated_delivery_minutes(&cart), 25 + DISPATCH_BUFFER_MINUTES);
        assert_eq!(estimated_delivery_minutes(&cart), 40);
    }

    #[test]
    fn test_totals_saturate() {
        let gold = MenuItem::new(9, "Gold Leaf", "dessert", u64::MAX, 5);
        let cart = Cart::new().add(&gold).add(&gold);
        assert_eq!(cart_total(&cart), u64::MAX);
    }

    #[test]
    fn test_summary() {
        let cart = Cart::new().add(&burger());
        let summary = cart.summary();
        assert!(summary.is_visible());
        assert_eq!(
            summary,
            CartSummary { item_count: 1, total: 120000, delivery_minutes: 30 }
        );
    }
}
