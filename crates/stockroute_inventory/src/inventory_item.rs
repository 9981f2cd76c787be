use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InventoryItem {
    /// Unique positive ID
    pub id: u64,
    pub name: String,
    pub stock: u32,
    pub reorder_level: u32,
}

impl InventoryItem {
    pub fn validate(&self) -> Result<(), InventoryError> {
        if self.id == 0 {
            return Err(InventoryError::InvalidItem(String::from(
                "id must be a positive integer",
            )));
        }

        if self.name.trim().is_empty() {
            return Err(InventoryError::InvalidItem(String::from(
                "name cannot be empty",
            )));
        }

        Ok(())
    }

    pub fn needs_reorder(&self) -> bool {
        self.stock <= self.reorder_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_item(id: u64, name: &str) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_owned(),
            stock: 10,
            reorder_level: 2,
        }
    }

    #[test]
    fn test_validate() {
        assert!(create_item(1, "Pallet").validate().is_ok());
        assert!(matches!(
            create_item(0, "Pallet").validate(),
            Err(InventoryError::InvalidItem(_))
        ));
        assert!(matches!(
            create_item(1, "  ").validate(),
            Err(InventoryError::InvalidItem(_))
        ));
    }

    #[test]
    fn test_needs_reorder() {
        let mut item = create_item(1, "Pallet");
        assert!(!item.needs_reorder());

        item.stock = 2;
        assert!(item.needs_reorder());
    }
}
