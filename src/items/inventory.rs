//! Inventory system
//!
//! The player's ordered item collection. Items are matched strictly by
//! id, so two drops with the same display name never shadow each other.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

use super::item::{Item, ItemId};

/// Ordered collection of unequipped items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items held
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item, keeping acquisition order
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Get an item by id
    pub fn get_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Check whether an item is present
    pub fn contains(&self, id: ItemId) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Remove an item by id, handing ownership back to the caller
    pub fn remove_by_id(&mut self, id: ItemId) -> Result<Item, ActionError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(ActionError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// All items in acquisition order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item::{EquipSlot, Rarity};

    fn make_item(id: u64) -> Item {
        Item::new(ItemId(id), EquipSlot::Boots, Rarity::Common)
    }

    #[test]
    fn test_add_and_remove() {
        let mut inv = Inventory::new();
        inv.add_item(make_item(1));
        assert_eq!(inv.count(), 1);

        let removed = inv.remove_by_id(ItemId(1)).unwrap();
        assert_eq!(removed.id, ItemId(1));
        assert!(inv.is_empty());
    }

    #[test]
    fn test_remove_missing_is_an_error() {
        let mut inv = Inventory::new();
        assert_eq!(
            inv.remove_by_id(ItemId(5)),
            Err(ActionError::ItemNotFound(ItemId(5)))
        );
    }

    #[test]
    fn test_duplicates_are_told_apart_by_id() {
        // Same slot and rarity, so the display names collide
        let mut inv = Inventory::new();
        inv.add_item(make_item(1));
        inv.add_item(make_item(2));

        let removed = inv.remove_by_id(ItemId(2)).unwrap();
        assert_eq!(removed.id, ItemId(2));
        assert!(inv.contains(ItemId(1)));
        assert_eq!(inv.count(), 1);
    }

    #[test]
    fn test_acquisition_order_is_kept() {
        let mut inv = Inventory::new();
        for id in 1..=4 {
            inv.add_item(make_item(id));
        }
        let ids: Vec<u64> = inv.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
