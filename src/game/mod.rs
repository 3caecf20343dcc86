//! Game module - core controller and state snapshot

mod state;

pub use state::{Game, GameMessage, MessageCategory, SlotView, Snapshot};
