pub mod dispatch;
pub mod error;
pub mod inventory_item;
pub mod inventory_store;
