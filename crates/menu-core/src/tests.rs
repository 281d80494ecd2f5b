//! Engine Scenario Tests
//!
//! Filter and cart behaviour against the built-in catalog.

#[cfg(test)]
mod tests {
    use crate::{
        add_to_cart, apply_filter, cart_item_count, cart_total, estimated_delivery_minutes,
        remove_from_cart, Cart, Catalog, CategoryId, ItemId, MenuItem,
    };

    fn item(catalog: &Catalog, id: u32) -> MenuItem {
        catalog.item(ItemId(id)).cloned().expect("item in builtin catalog")
    }

    #[test]
    fn test_all_and_empty_query_is_identity() {
        let catalog = Catalog::builtin();
        let items = catalog.list_items();
        assert_eq!(apply_filter(items, &CategoryId::all(), ""), items.to_vec());
    }

    #[test]
    fn test_every_category_filters_to_itself() {
        let catalog = Catalog::builtin();
        for category in catalog.list_categories().iter().filter(|c| !c.is_all()) {
            let visible = apply_filter(catalog.list_items(), &category.id, "");
            assert!(!visible.is_empty(), "category {} has items", category.id);
            assert!(visible.iter().all(|i| i.category == category.id));
        }
    }

    #[test]
    fn test_persian_search() {
        let catalog = Catalog::builtin();
        let visible = apply_filter(catalog.list_items(), &CategoryId::all(), "پیتزا");
        let ids: Vec<u32> = visible.iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1]);
        assert!(apply_filter(catalog.list_items(), &CategoryId::from("drink"), "پیتزا").is_empty());
    }

    #[test]
    fn test_case_insensitive_on_builtin() {
        let catalog = Catalog::builtin();
        assert_eq!(
            apply_filter(catalog.list_items(), &CategoryId::all(), "PIZZA"),
            apply_filter(catalog.list_items(), &CategoryId::all(), "pizza"),
        );
    }

    #[test]
    fn test_order_scenario() {
        let catalog = Catalog::builtin();
        let pizza = item(&catalog, 1);
        let soda = item(&catalog, 5);

        let cart = add_to_cart(&Cart::new(), &pizza);
        let cart = add_to_cart(&cart, &pizza);
        let cart = add_to_cart(&cart, &soda);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart_item_count(&cart), 3);
        assert_eq!(cart_total(&cart), 335000);
        assert_eq!(estimated_delivery_minutes(&cart), 40);

        let cart = remove_from_cart(&cart, ItemId(1));
        assert_eq!(cart.quantity_of(ItemId(1)), 1);
        assert_eq!(cart_item_count(&cart), 2);
        assert_eq!(cart_total(&cart), 185000);

        let cart = remove_from_cart(&cart, ItemId(1));
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.item.id.0).collect();
        assert_eq!(ids, vec![5]);
        assert_eq!(estimated_delivery_minutes(&cart), 2 + 15);
    }

    #[test]
    fn test_delivery_for_mixed_prep_times() {
        let catalog = Catalog::builtin();
        let cart = [1, 2, 3]
            .into_iter()
            .fold(Cart::new(), |cart, id| add_to_cart(&cart, &item(&catalog, id)));
        assert_eq!(estimated_delivery_minutes(&cart), 40);
    }

    #[test]
    fn test_counts_match_line_sums() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for id in [4, 6, 4, 2, 6, 6] {
            cart = cart.add(&item(&catalog, id));
        }
        let count: u32 = cart.lines().iter().map(|l| l.quantity).sum();
        let total: u64 = cart.lines().iter().map(|l| l.item.price * u64::from(l.quantity)).sum();
        assert_eq!(cart_item_count(&cart), count);
        assert_eq!(cart_total(&cart), total);
        assert_eq!(count, 6);
    }
}
