use std::sync::Arc;

use fxhash::FxHashMap;
use jiff::Timestamp;
use parking_lot::RwLock;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stockroute_maps::route_summary::RouteSummary;
use tracing::debug;

use crate::inventory_item::InventoryItem;

pub(crate) type SharedItems = Arc<RwLock<FxHashMap<u64, InventoryItem>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DispatchItem {
    pub id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DispatchRecord {
    pub dispatch_id: u64,
    pub items: Vec<DispatchItem>,
    pub delivery_points: Vec<String>,
    pub route: RouteSummary,
    pub created_at: Timestamp,
}

/// Stock taken out of the inventory for a dispatch whose route is not known
/// yet. Unless it is committed, dropping it puts the stock back, so a
/// cancelled or panicking dispatch never keeps the decrement.
#[must_use]
pub struct Reservation {
    pub(crate) items: Vec<DispatchItem>,
    /// Quantities per item id, duplicates merged
    pub(crate) lines: Vec<(u64, u64)>,
    pub(crate) inventory: SharedItems,
}

impl Reservation {
    pub fn items(&self) -> &[DispatchItem] {
        &self.items
    }

    pub fn release(self) {
        drop(self);
    }

    fn restore(&mut self) {
        let lines = std::mem::take(&mut self.lines);
        if lines.is_empty() {
            return;
        }

        let mut items = self.inventory.write();
        for (id, quantity) in lines {
            if let Some(item) = items.get_mut(&id) {
                item.stock = item.stock.saturating_add(quantity as u32);
                debug!("Restored {} units of item {}", quantity, id);
            }
        }
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        self.restore();
    }
}

impl std::fmt::Debug for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reservation")
            .field("items", &self.items)
            .field("lines", &self.lines)
            .finish()
    }
}
