//! Progression and economy

pub mod economy;
pub mod player;

pub use economy::{
    grant_sale, grant_task_creation_reward, spend_on_rest, RestKind, REST_COST, SELL_PRICE,
    TASK_CREATION_GOLD, TASK_CREATION_XP,
};
pub use player::{Player, Stats};
