//! Core controller
//!
//! Composes the task tracker, loot generator, inventory, equipment, and
//! economy into one state object. Each intent is a single
//! read-modify-write step: it validates first and only then mutates, so
//! a declined intent leaves everything untouched.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::ActionError;
use crate::items::{generate_item, EquipSlot, Equipment, Inventory, Item, ItemId};
use crate::progression::{self, Player, RestKind, REST_COST, SELL_PRICE};
use crate::tasks::{Task, TaskId, TaskTracker};

/// A notice about a successful intent, for the presentation layer's log
#[derive(Debug, Clone)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message filtering/coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Task,
    Item,
    Economy,
}

/// The single session state. Owns every mutable piece; the presentation
/// layer gets a read-only [`Snapshot`] and submits intents one at a
/// time.
#[derive(Debug)]
pub struct Game {
    tasks: TaskTracker,
    player: Player,
    inventory: Inventory,
    equipment: Equipment,
    rng: StdRng,
    next_item_id: u64,
    messages: Vec<GameMessage>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a session with an entropy-seeded rng
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a session with a fixed seed, for reproducible loot
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            tasks: TaskTracker::new(),
            player: Player::new(),
            inventory: Inventory::new(),
            equipment: Equipment::new(),
            rng,
            next_item_id: 1,
            messages: Vec::new(),
        }
    }

    fn alloc_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        id
    }

    fn push_message(&mut self, category: MessageCategory, text: String) {
        self.messages.push(GameMessage { text, category });
    }

    /// Add a task and grant the creation reward (+10 xp, +5 gold).
    /// Blank descriptions are declined with no state change.
    pub fn add_task(&mut self, description: &str) -> Result<TaskId, ActionError> {
        let id = self.tasks.add(description)?;
        progression::grant_task_creation_reward(&mut self.player);
        log::info!("Added task {}", id);
        self.push_message(
            MessageCategory::Task,
            format!(
                "Added task {} (+{} xp, +{} gold)",
                id,
                progression::TASK_CREATION_XP,
                progression::TASK_CREATION_GOLD
            ),
        );
        Ok(id)
    }

    /// Complete a task and drop exactly one random item into the
    /// inventory. A task can only ever be completed once.
    pub fn complete_task(&mut self, id: TaskId) -> Result<&Item, ActionError> {
        self.tasks.complete(id)?;

        let item_id = self.alloc_item_id();
        let item = generate_item(item_id, &mut self.rng);
        log::info!("Task {} complete, looted {}", id, item.name);
        self.push_message(
            MessageCategory::Item,
            format!("Completed task {}: looted {}", id, item.name),
        );
        self.inventory.add_item(item);

        self.inventory
            .get_by_id(item_id)
            .ok_or(ActionError::ItemNotFound(item_id))
    }

    /// Move an item from the inventory into its equipment slot. If the
    /// slot was occupied the previous item is swapped back into the
    /// inventory; the id of that item is returned.
    pub fn equip_item(&mut self, id: ItemId) -> Result<Option<ItemId>, ActionError> {
        let item = self.inventory.remove_by_id(id)?;
        let name = item.name.clone();
        let previous = self.equipment.equip(item);
        let previous_id = previous.as_ref().map(|p| p.id);

        let text = match previous {
            Some(prev) => {
                let text = format!("Equipped {}, returned {} to inventory", name, prev.name);
                self.inventory.add_item(prev);
                text
            }
            None => format!("Equipped {}", name),
        };
        log::info!("{}", text);
        self.push_message(MessageCategory::Item, text);
        Ok(previous_id)
    }

    /// Sell an item from the inventory for the flat sale price,
    /// returning the proceeds
    pub fn sell_item(&mut self, id: ItemId) -> Result<u32, ActionError> {
        let item = self.inventory.remove_by_id(id)?;
        progression::grant_sale(&mut self.player, SELL_PRICE);
        log::info!("Sold {} for {} gold", item.name, SELL_PRICE);
        self.push_message(
            MessageCategory::Economy,
            format!("Sold {} for {} gold", item.name, SELL_PRICE),
        );
        Ok(SELL_PRICE)
    }

    /// Buy a 30-minute rest for 30 gold. Declined with
    /// `InsufficientGold` when the balance is short.
    pub fn rest(&mut self, kind: RestKind) -> Result<(), ActionError> {
        progression::spend_on_rest(&mut self.player, kind)?;
        log::info!("Rested: {}", kind.name());
        self.push_message(
            MessageCategory::Economy,
            format!("Spent {} gold on 30 minutes of {}", REST_COST, kind.name()),
        );
        Ok(())
    }

    /// Read-only view of the whole session state
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            level: self.player.level,
            xp: self.player.xp,
            gold: self.player.gold,
            tasks: self.tasks.tasks(),
            inventory: self.inventory.items(),
            equipment: EquipSlot::all()
                .iter()
                .map(|&slot| SlotView {
                    slot: slot.name(),
                    item: self.equipment.equipped_name(slot),
                })
                .collect(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn tasks(&self) -> &TaskTracker {
        &self.tasks
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// Notices from successful intents, oldest first
    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    /// The most recent notice, if any
    pub fn latest_message(&self) -> Option<&GameMessage> {
        self.messages.last()
    }
}

/// Read-only state view handed to the presentation layer. All ten
/// equipment slots appear, in fixed display order.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub level: u32,
    pub xp: u32,
    pub gold: u32,
    pub tasks: &'a [Task],
    pub inventory: &'a [Item],
    pub equipment: Vec<SlotView<'a>>,
}

/// One equipment slot and its occupant's display name
#[derive(Debug, Serialize)]
pub struct SlotView<'a> {
    pub slot: &'static str,
    pub item: Option<&'a str>,
}
