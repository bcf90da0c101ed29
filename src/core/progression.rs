//! Kill rewards, leveling and level-gated passives.

use crate::character::Player;
use crate::combat::types::Enemy;
use crate::core::constants::{
    GOLD_FINDER_BONUS, GOLD_FINDER_LEVEL, LEVEL_UP_ATTACK, LEVEL_UP_MAX_HEALTH,
    PASSIVE_REGEN_LEVEL, PASSIVE_REGEN_PER_MOVE, XP_PER_LEVEL,
};
use crate::core::events::{EventSink, GameEvent};

/// Permanent bonuses that switch on at fixed levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passive {
    /// Extra gold from every kill
    GoldFinder,
    /// Heal a little after every move
    PassiveRegen,
}

impl Passive {
    pub const ALL: [Passive; 2] = [Passive::GoldFinder, Passive::PassiveRegen];

    pub fn unlock_level(&self) -> u32 {
        match self {
            Passive::GoldFinder => GOLD_FINDER_LEVEL,
            Passive::PassiveRegen => PASSIVE_REGEN_LEVEL,
        }
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= self.unlock_level()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Passive::GoldFinder => "Gold Finder",
            Passive::PassiveRegen => "Passive Regeneration",
        }
    }
}

/// XP needed to leave `level`.
pub fn xp_to_next_level(level: u32) -> u32 {
    level * XP_PER_LEVEL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillReward {
    pub xp: u32,
    pub gold: u32,
    pub levels_gained: u32,
}

/// Pays out xp and gold for a defeated enemy, then levels the player up as many
/// times as the new xp allows. The gold bonus uses the level held before the kill.
pub fn on_enemy_defeated<E: EventSink>(player: &mut Player, enemy: &Enemy, events: &mut E) -> KillReward {
    let mut gold = enemy.gold;
    if Passive::GoldFinder.is_unlocked(player.level) {
        gold += GOLD_FINDER_BONUS;
    }
    player.gold += gold;
    player.xp += enemy.xp;
    events.emit(GameEvent::EnemyDefeated {
        name: enemy.name.clone(),
        xp: enemy.xp,
        gold,
    });

    let levels_gained = apply_level_ups(player, events);
    KillReward {
        xp: enemy.xp,
        gold,
        levels_gained,
    }
}

/// Consumes xp level by level. Each level raises max health, heals to full and
/// raises attack.
pub fn apply_level_ups<E: EventSink>(player: &mut Player, events: &mut E) -> u32 {
    let mut gained = 0;
    while player.xp >= xp_to_next_level(player.level) {
        player.xp -= xp_to_next_level(player.level);
        player.level += 1;
        player.max_health += LEVEL_UP_MAX_HEALTH;
        player.health = player.max_health;
        player.attack_power += LEVEL_UP_ATTACK;
        gained += 1;
        log::debug!("{} reached level {}", player.name, player.level);
        events.emit(GameEvent::LevelUp {
            level: player.level,
            max_health: player.max_health,
            attack_power: player.attack_power,
        });
        for passive in Passive::ALL {
            if passive.unlock_level() == player.level {
                events.emit(GameEvent::PassiveUnlocked(passive));
            }
        }
    }
    gained
}

/// Heals the per-move regeneration once the passive is unlocked. Returns the amount healed.
pub fn apply_passive_regen<E: EventSink>(player: &mut Player, events: &mut E) -> u32 {
    if !Passive::PassiveRegen.is_unlocked(player.level) {
        return 0;
    }
    let healed = player.heal(PASSIVE_REGEN_PER_MOVE);
    if healed > 0 {
        events.emit(GameEvent::Regenerated { amount: healed });
    }
    healed
}
