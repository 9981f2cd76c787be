use stockroute_inventory::inventory_store::InventoryStore;
use stockroute_maps::route_optimizer::RouteOptimizer;

pub struct AppState {
    pub inventory: InventoryStore,
    pub route_optimizer: RouteOptimizer,
    /// Address every dispatch route starts from and returns to
    pub dispatch_origin: String,
}
