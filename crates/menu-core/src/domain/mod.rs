//! Domain Layer
//!
//! Catalog entities and the shared error type.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod category;
mod menu_item;

pub use entity::{Entity, DomainError, DomainResult};
pub use category::{Category, CategoryId};
pub use menu_item::{MenuItem, ItemId};
