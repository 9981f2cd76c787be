use std::sync::Arc;

use jiff::Timestamp;
use parking_lot::RwLock;
use stockroute_maps::route_summary::RouteSummary;
use tracing::{info, warn};

use crate::{
    dispatch::{DispatchItem, DispatchRecord, Reservation, SharedItems},
    error::InventoryError,
    inventory_item::InventoryItem,
};

/// In-memory inventory keyed by item id, plus the ledger of completed
/// dispatches. Every check-and-update runs under a single write lock.
#[derive(Default)]
pub struct InventoryStore {
    items: SharedItems,
    dispatches: RwLock<Vec<DispatchRecord>>,
}

impl InventoryStore {
    pub fn list_items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self.items.read().values().cloned().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn item(&self, id: u64) -> Option<InventoryItem> {
        self.items.read().get(&id).cloned()
    }

    pub fn add_item(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError> {
        item.validate()?;

        let mut items = self.items.write();
        if items.contains_key(&item.id) {
            return Err(InventoryError::DuplicateInventoryId(item.id));
        }

        items.insert(item.id, item.clone());
        info!("Added inventory item {} ({})", item.id, item.name);

        Ok(item)
    }

    /// Takes the requested quantities out of stock. Either every line is
    /// applied or, on error, none is. The returned reservation restores the
    /// stock when dropped without being committed.
    pub fn reserve(&self, requested: &[DispatchItem]) -> Result<Reservation, InventoryError> {
        let mut lines: Vec<(u64, u64)> = Vec::with_capacity(requested.len());
        for item in requested {
            match lines.iter_mut().find(|(id, _)| *id == item.id) {
                Some((_, quantity)) => *quantity += u64::from(item.quantity),
                None => lines.push((item.id, u64::from(item.quantity))),
            }
        }

        let mut items = self.items.write();

        for &(id, quantity) in &lines {
            let item = items
                .get(&id)
                .ok_or(InventoryError::UnknownInventoryItem(id))?;

            if u64::from(item.stock) < quantity {
                return Err(InventoryError::InsufficientStock {
                    id,
                    requested: quantity,
                    available: item.stock,
                });
            }
        }

        for &(id, quantity) in &lines {
            if let Some(item) = items.get_mut(&id) {
                // checked above, `quantity <= stock`
                item.stock -= quantity as u32;
            }
        }

        Ok(Reservation {
            items: requested.to_vec(),
            lines,
            inventory: Arc::clone(&self.items),
        })
    }

    pub fn commit(
        &self,
        mut reservation: Reservation,
        delivery_points: Vec<String>,
        route: RouteSummary,
    ) -> DispatchRecord {
        let lines = std::mem::take(&mut reservation.lines);
        let dispatched = std::mem::take(&mut reservation.items);

        {
            let items = self.items.read();
            for (id, _) in &lines {
                if let Some(item) = items.get(id).filter(|item| item.needs_reorder()) {
                    warn!(
                        "Item {} ({}) is at {} units, reorder level is {}",
                        item.id, item.name, item.stock, item.reorder_level
                    );
                }
            }
        }

        let mut dispatches = self.dispatches.write();
        let record = DispatchRecord {
            dispatch_id: dispatches.len() as u64 + 1,
            items: dispatched,
            delivery_points,
            route,
            created_at: Timestamp::now(),
        };
        dispatches.push(record.clone());

        record
    }

    pub fn list_dispatches(&self) -> Vec<DispatchRecord> {
        self.dispatches.read().clone()
    }
}
