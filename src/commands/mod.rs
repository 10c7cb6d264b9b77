pub mod inventory;

pub use inventory::handle_inventory_command;
