//! UI Components
//!
//! Views over the page store. Styling is carried by class names only.

mod header;
mod category_bar;
mod rating_stars;
mod menu_item_card;
mod menu_item_list;
mod item_detail_sheet;
mod cart_drawer;
mod floating_cart_button;

pub use header::MenuHeader;
pub use category_bar::{CategoryBar, CategorySidebar};
pub use rating_stars::RatingStars;
pub use menu_item_card::MenuItemCard;
pub use menu_item_list::MenuItemList;
pub use item_detail_sheet::ItemDetailSheet;
pub use cart_drawer::CartDrawer;
pub use floating_cart_button::FloatingCartButton;
