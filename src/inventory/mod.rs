// Inventory model, classification and orchestration
pub mod types;
pub mod classifier;
pub mod service;

pub use classifier::InventoryClassifier;
pub use service::{InventoryService, Mode};
