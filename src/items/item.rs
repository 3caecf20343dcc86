//! Item definitions
//!
//! Core item type, rarity tiers, and equipment slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique item instance id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item rarity tiers, in drop-weight declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Sum of all tier weights
    pub const WEIGHT_TOTAL: u32 = 100;

    /// Relative drop weight out of [`Rarity::WEIGHT_TOTAL`]
    pub fn weight(&self) -> u32 {
        match self {
            Rarity::Common => 50,
            Rarity::Uncommon => 30,
            Rarity::Rare => 15,
            Rarity::Epic => 4,
            Rarity::Legendary => 1,
        }
    }

    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Get numeric value for sorting (higher = rarer)
    pub fn sort_value(&self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }

    /// All tiers in declaration order, the order the weighted draw
    /// accumulates over
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }
}

/// Equipment slot for generated gear. Ten fixed slots, each holding at
/// most one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Helmet,
    Armor,
    Weapon,
    Shield,
    Gloves,
    Boots,
    Ring,
    Cloak,
    Belt,
    Accessory,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Helmet => "Helmet",
            EquipSlot::Armor => "Armor",
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Shield => "Shield",
            EquipSlot::Gloves => "Gloves",
            EquipSlot::Boots => "Boots",
            EquipSlot::Ring => "Ring",
            EquipSlot::Cloak => "Cloak",
            EquipSlot::Belt => "Belt",
            EquipSlot::Accessory => "Accessory",
        }
    }

    /// Get all slots in display order
    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Helmet,
            EquipSlot::Armor,
            EquipSlot::Weapon,
            EquipSlot::Shield,
            EquipSlot::Gloves,
            EquipSlot::Boots,
            EquipSlot::Ring,
            EquipSlot::Cloak,
            EquipSlot::Belt,
            EquipSlot::Accessory,
        ]
    }
}

/// A generated piece of gear. Two items of identical slot and rarity are
/// still distinct instances, told apart by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique instance id
    pub id: ItemId,
    /// Which slot this item fits
    pub slot: EquipSlot,
    /// Rarity tier
    pub rarity: Rarity,
    /// Display name, derived as "{rarity} {slot}"
    pub name: String,
}

impl Item {
    /// Create a new item with its derived display name
    pub fn new(id: ItemId, slot: EquipSlot, rarity: Rarity) -> Self {
        Self {
            id,
            slot,
            rarity,
            name: format!("{} {}", rarity.name(), slot.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_total() {
        let sum: u32 = Rarity::all().iter().map(|r| r.weight()).sum();
        assert_eq!(sum, Rarity::WEIGHT_TOTAL);
    }

    #[test]
    fn test_ten_fixed_slots() {
        assert_eq!(EquipSlot::all().len(), 10);
    }

    #[test]
    fn test_derived_name() {
        let item = Item::new(ItemId(1), EquipSlot::Weapon, Rarity::Legendary);
        assert_eq!(item.name, "Legendary Weapon");
    }

    #[test]
    fn test_same_name_distinct_ids() {
        let a = Item::new(ItemId(1), EquipSlot::Ring, Rarity::Rare);
        let b = Item::new(ItemId(2), EquipSlot::Ring, Rarity::Rare);
        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id);
    }
}
