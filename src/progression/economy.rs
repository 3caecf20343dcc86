//! Economy rules
//!
//! The fixed reward and cost table, and the rest actions that are the
//! economy's only consumption sink.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

use super::player::Player;

/// XP granted for adding a task
pub const TASK_CREATION_XP: u32 = 10;
/// Gold granted for adding a task
pub const TASK_CREATION_GOLD: u32 = 5;
/// Flat sale price for any item, regardless of rarity
pub const SELL_PRICE: u32 = 10;
/// Gold cost of a 30-minute rest
pub const REST_COST: u32 = 30;

/// Leisure activities purchasable with gold. The 30 minutes are a
/// symbolic cost; nothing in the core keeps time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestKind {
    Video,
    Game,
}

impl RestKind {
    pub fn name(&self) -> &'static str {
        match self {
            RestKind::Video => "watching videos",
            RestKind::Game => "playing games",
        }
    }
}

/// Reward for creating a task: +10 xp, +5 gold. Unconditional.
pub fn grant_task_creation_reward(player: &mut Player) {
    player.gain_xp(TASK_CREATION_XP);
    player.gain_gold(TASK_CREATION_GOLD);
}

/// Credit the proceeds of a sale
pub fn grant_sale(player: &mut Player, amount: u32) {
    player.gain_gold(amount);
}

/// Pay for a rest. Declines with `InsufficientGold` and no state change
/// when the balance is short.
pub fn spend_on_rest(player: &mut Player, kind: RestKind) -> Result<RestKind, ActionError> {
    player.spend_gold(REST_COST)?;
    Ok(kind)
}
