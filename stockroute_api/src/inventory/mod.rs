pub mod get_inventory;
pub mod post_inventory;
