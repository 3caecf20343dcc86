//! Player progression state
//!
//! Level, experience, gold, and the base stat block.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

/// Base attributes. Fixed at creation; reserved for future mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub intelligence: u32,
    pub luck: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: 5,
            intelligence: 5,
            luck: 5,
        }
    }
}

/// Progression and currency state for the single player of a session.
///
/// There is no xp-to-level curve: xp accumulates uncapped and the level
/// stays where it started. Gold can never go negative; every spend is
/// checked up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub level: u32,
    pub xp: u32,
    pub gold: u32,
    pub stats: Stats,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            gold: 0,
            stats: Stats::default(),
        }
    }

    /// Add experience
    pub fn gain_xp(&mut self, amount: u32) {
        self.xp = self.xp.saturating_add(amount);
    }

    /// Add gold
    pub fn gain_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Spend gold, declining the whole operation if the balance is
    /// short
    pub fn spend_gold(&mut self, amount: u32) -> Result<(), ActionError> {
        if self.gold < amount {
            return Err(ActionError::InsufficientGold {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new();
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 0);
        assert_eq!(player.gold, 0);
        assert_eq!(player.stats, Stats::default());
    }

    #[test]
    fn test_spend_checks_balance_first() {
        let mut player = Player::new();
        player.gain_gold(29);

        assert_eq!(
            player.spend_gold(30),
            Err(ActionError::InsufficientGold {
                needed: 30,
                available: 29
            })
        );
        assert_eq!(player.gold, 29);

        player.gain_gold(1);
        assert!(player.spend_gold(30).is_ok());
        assert_eq!(player.gold, 0);
    }

    #[test]
    fn test_level_is_static() {
        let mut player = Player::new();
        player.gain_xp(10_000);
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 10_000);
    }
}
