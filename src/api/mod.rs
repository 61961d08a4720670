// ==========================================
// Warehouse FEFO Core - API Layer
// ==========================================
// Responsibility: in-process facade consumed by the UI layer.
// ==========================================

pub mod inventory_api;

pub use inventory_api::{InventoryApi, ScreeningResult};
