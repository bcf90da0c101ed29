//! Everything the engine reports to the outside world.
//!
//! The engine never prints. It pushes [`GameEvent`]s into an [`EventSink`] and lets the
//! front end decide how (and whether) to show them.

use crate::combat::types::{Ability, StatusEffect};
use crate::core::error::Rejection;
use crate::core::game_state::SessionOutcome;
use crate::core::progression::Passive;
use crate::leaderboard::ScoreRecord;

/// Who a combat event happened to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Enemy,
}

/// Snapshot shown before every exploration prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStatus {
    pub floor: u32,
    pub position: (usize, usize),
    pub room_name: String,
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub xp: u32,
    pub gold: u32,
    /// Rows of [`Floor::glyph_at`](crate::dungeon::Floor::glyph_at) glyphs
    pub map: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    // Session flow
    FloorEntered { floor: u32 },
    BossLurks { name: String },
    UniqueLootPlaced { weapon: String },
    Status(PlayerStatus),
    RoomEntered { position: (usize, usize), name: String },
    RoomLore { text: &'static str },
    Rejected(Rejection),
    InvalidChoice,
    Regenerated { amount: u32 },

    // Combat
    EncounterStarted {
        enemy: String,
        ability: Option<Ability>,
        is_boss: bool,
    },
    RoundStarted { player_health: u32, enemy_health: u32 },
    StatusDamage {
        target: Combatant,
        effect: StatusEffect,
        damage: u32,
    },
    StatusExpired { target: Combatant, effect: StatusEffect },
    Frozen { target: Combatant },
    PlayerHit { damage: u32 },
    WeaponEffectApplied { effect: StatusEffect },
    Defending,
    PotionUsed { healed: u32 },
    EnemyHit { damage: u32 },
    EnemyStruckTwice,
    EnemyDrained { healed: u32 },
    StatusInflicted { effect: StatusEffect, turns: u32 },
    Fled { enemy: String },
    EnemyDefeated { name: String, xp: u32, gold: u32 },
    LevelUp {
        level: u32,
        max_health: u32,
        attack_power: u32,
    },
    PassiveUnlocked(Passive),

    // Rooms
    LootFound { name: String },
    TreasureFound { gold: u32 },
    TrapSprung { damage: u32 },
    EnchantmentOffered { weapon: String, cost: u32 },
    WeaponEnchanted { weapon: String, effect: StatusEffect },
    BlacksmithOffered {
        weapon: String,
        min_damage: u32,
        max_damage: u32,
        cost: u32,
    },
    WeaponReforged {
        weapon: String,
        min_damage: u32,
        max_damage: u32,
    },
    OfferDeclined,
    ExitLocked,
    ExitUnlocked,

    // Shop and pack
    ShopOpened { gold: u32, wares: Vec<(String, u32)> },
    Purchased { name: String, price: u32 },
    SellOffered { offers: Vec<(String, u32)> },
    Sold { name: String, price: u32 },
    InventoryShown {
        entries: Vec<(String, String)>,
        equipped: Option<String>,
    },
    Equipped { name: String },
    Unequipped { name: String },

    // End of game
    GameOver { outcome: SessionOutcome, score: u32 },
    Standings { records: Vec<ScoreRecord> },
}

/// Output collaborator.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
