//! Loot generation
//!
//! Random gear drops: a uniform slot draw combined with a weighted
//! rarity draw. The generator takes the rng as a parameter so drops are
//! reproducible under a seeded source.

use rand::Rng;

use super::item::{EquipSlot, Item, ItemId, Rarity};

/// Pick an equipment slot uniformly (1 in 10 each)
pub fn roll_slot(rng: &mut impl Rng) -> EquipSlot {
    let slots = EquipSlot::all();
    slots[rng.gen_range(0..slots.len())]
}

/// Pick a rarity tier by cumulative weight.
///
/// Draws uniformly in `[0, WEIGHT_TOTAL)` and walks the tiers in
/// declaration order, selecting the first whose cumulative weight
/// exceeds the draw. Weights are 50/30/15/4/1 out of 100, so the tier
/// probabilities are exactly 50%, 30%, 15%, 4%, 1%.
pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen_range(0..Rarity::WEIGHT_TOTAL);
    let mut acc = 0;
    for &rarity in Rarity::all() {
        acc += rarity.weight();
        if roll < acc {
            return rarity;
        }
    }
    // The last tier's cumulative weight equals WEIGHT_TOTAL, so the loop
    // always returns. Keep the terminal tier as the fallback arm.
    Rarity::Legendary
}

/// Generate a random item from two independent draws
pub fn generate_item(id: ItemId, rng: &mut impl Rng) -> Item {
    let slot = roll_slot(rng);
    let rarity = roll_rarity(rng);
    Item::new(id, slot, rarity)
}
