use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Item with ID {0} already exists")]
    DuplicateInventoryId(u64),

    #[error("Item with ID {0} not found")]
    UnknownInventoryItem(u64),

    #[error("Not enough stock for item ID {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: u64,
        requested: u64,
        available: u32,
    },

    #[error("Invalid inventory item: {0}")]
    InvalidItem(String),
}
