//! Equipment system
//!
//! One item per slot on the avatar. Equipping into an occupied slot
//! hands the previous occupant back so the caller can return it to the
//! inventory instead of losing it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::item::{EquipSlot, Item};

/// Player equipment slots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    slots: HashMap<EquipSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Equip an item into its slot, returning the previous occupant if
    /// the slot was taken
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.slots.insert(item.slot, item)
    }

    /// Unequip an item from a slot
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    /// Get the item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Check if a slot is empty
    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// All equipped items
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.slots.values()
    }

    /// Display name of the occupant of a slot, if any
    pub fn equipped_name(&self, slot: EquipSlot) -> Option<&str> {
        self.slots.get(&slot).map(|i| i.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item::{ItemId, Rarity};

    #[test]
    fn test_equip_fills_the_slot() {
        let mut eq = Equipment::new();
        let item = Item::new(ItemId(1), EquipSlot::Helmet, Rarity::Rare);

        assert!(eq.equip(item).is_none());
        assert_eq!(eq.equipped_name(EquipSlot::Helmet), Some("Rare Helmet"));
        assert!(eq.is_empty(EquipSlot::Armor));
    }

    #[test]
    fn test_equip_returns_previous_occupant() {
        let mut eq = Equipment::new();
        eq.equip(Item::new(ItemId(1), EquipSlot::Weapon, Rarity::Common));

        let prev = eq.equip(Item::new(ItemId(2), EquipSlot::Weapon, Rarity::Epic));
        assert_eq!(prev.map(|i| i.id), Some(ItemId(1)));
        assert_eq!(eq.equipped_name(EquipSlot::Weapon), Some("Epic Weapon"));
        assert_eq!(eq.count(), 1);
    }

    #[test]
    fn test_unequip() {
        let mut eq = Equipment::new();
        eq.equip(Item::new(ItemId(3), EquipSlot::Belt, Rarity::Uncommon));

        let item = eq.unequip(EquipSlot::Belt);
        assert_eq!(item.map(|i| i.id), Some(ItemId(3)));
        assert!(eq.is_empty(EquipSlot::Belt));
    }
}
