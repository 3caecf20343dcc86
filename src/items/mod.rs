//! Item system

pub mod equipment;
pub mod inventory;
pub mod item;
pub mod loot;

pub use equipment::Equipment;
pub use inventory::Inventory;
pub use item::{EquipSlot, Item, ItemId, Rarity};
pub use loot::{generate_item, roll_rarity, roll_slot};
