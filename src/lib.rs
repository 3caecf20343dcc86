//! LifeRPG - a gamified task tracker for the terminal
//!
//! Finish real-world tasks to earn experience, gold, and random gear;
//! equip the gear on your avatar or sell it, and spend the gold on
//! well-earned rest.

pub mod error;
pub mod game;
pub mod items;
pub mod progression;
pub mod tasks;

// Re-export commonly used types
pub use error::ActionError;
pub use game::{Game, Snapshot};
pub use items::{EquipSlot, Item, ItemId, Rarity};
pub use progression::{Player, RestKind};
pub use tasks::{Task, TaskId};
