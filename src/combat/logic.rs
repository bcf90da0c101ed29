//! Turn loop for a single player-vs-enemy encounter.

use rand::Rng;

use super::types::{Ability, Enemy, StatusEffect, StatusTick};
use crate::character::Player;
use crate::core::constants::{
    ABILITY_STATUS_TURNS, DEFEND_DAMAGE_REDUCTION, DOUBLE_STRIKE_CHANCE, FREEZE_TURNS,
    LIFESTEAL_DIVISOR, WEAPON_EFFECT_TURNS,
};
use crate::core::events::{Combatant, EventSink, GameEvent};
use crate::core::input::{CombatAction, CommandSource};
use crate::core::progression::on_enemy_defeated;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Fled,
}

/// Fights `enemy` until one side drops or the player flees.
///
/// Each round: the player's status effects tick, then the enemy's. A frozen player
/// loses the action but is still attacked. The enemy retaliates every round it
/// survives; freeze on the enemy is only recorded, poison and burn still hurt it.
/// Victory pays out xp and gold through progression before returning.
pub fn resolve_encounter<R, I, E>(
    player: &mut Player,
    enemy: &mut Enemy,
    rng: &mut R,
    input: &mut I,
    events: &mut E,
) -> CombatOutcome
where
    R: Rng,
    I: CommandSource,
    E: EventSink,
{
    events.emit(GameEvent::EncounterStarted {
        enemy: enemy.name.clone(),
        ability: enemy.ability,
        is_boss: enemy.is_boss,
    });

    loop {
        events.emit(GameEvent::RoundStarted {
            player_health: player.health,
            enemy_health: enemy.health,
        });

        let player_tick = player.status_effects.tick();
        report_tick(Combatant::Player, &player_tick, events);
        player.take_damage(player_tick.total_damage());
        if !player.is_alive() {
            return CombatOutcome::Defeat;
        }

        let enemy_tick = enemy.status_effects.tick();
        report_tick(Combatant::Enemy, &enemy_tick, events);
        enemy.take_damage(enemy_tick.total_damage());
        if !enemy.is_alive() {
            return victory(player, enemy, events);
        }

        let mut defending = false;
        if !player_tick.frozen {
            match input.combat() {
                CombatAction::Attack => {
                    if player_attack(player, enemy, rng, events) {
                        return victory(player, enemy, events);
                    }
                }
                CombatAction::Defend => {
                    defending = true;
                    events.emit(GameEvent::Defending);
                }
                CombatAction::UsePotion => match player.use_health_potion() {
                    Ok(healed) => events.emit(GameEvent::PotionUsed { healed }),
                    Err(rejection) => events.emit(GameEvent::Rejected(rejection)),
                },
                CombatAction::Flee => {
                    events.emit(GameEvent::Fled {
                        enemy: enemy.name.clone(),
                    });
                    return CombatOutcome::Fled;
                }
            }
        }

        enemy_attack(enemy, player, defending, rng, events);
        log::debug!(
            "round over: {} at {} hp, {} at {} hp",
            player.name,
            player.health,
            enemy.name,
            enemy.health
        );
        if !player.is_alive() {
            return CombatOutcome::Defeat;
        }
    }
}

fn victory<E: EventSink>(player: &mut Player, enemy: &Enemy, events: &mut E) -> CombatOutcome {
    on_enemy_defeated(player, enemy, events);
    CombatOutcome::Victory
}

fn report_tick<E: EventSink>(target: Combatant, tick: &StatusTick, events: &mut E) {
    for &(effect, damage) in &tick.damage {
        events.emit(GameEvent::StatusDamage {
            target,
            effect,
            damage,
        });
    }
    if tick.frozen && target == Combatant::Player {
        events.emit(GameEvent::Frozen { target });
    }
    for &effect in &tick.expired {
        events.emit(GameEvent::StatusExpired { target, effect });
    }
}

/// Resolves the player's Attack. The weapon's enchantment lands before the damage.
/// Returns true if the enemy died.
pub fn player_attack<R: Rng, E: EventSink>(
    player: &Player,
    enemy: &mut Enemy,
    rng: &mut R,
    events: &mut E,
) -> bool {
    if let Some(effect) = player.weapon.as_ref().and_then(|w| w.effect) {
        enemy.status_effects.apply(effect, WEAPON_EFFECT_TURNS);
        events.emit(GameEvent::WeaponEffectApplied { effect });
    }
    let damage = player.roll_attack(rng);
    // defense is not subtracted
    enemy.take_damage(damage);
    events.emit(GameEvent::PlayerHit { damage });
    !enemy.is_alive()
}

/// The enemy's retaliation: one base hit plus whatever its ability adds.
pub fn enemy_attack<R: Rng, E: EventSink>(
    enemy: &mut Enemy,
    player: &mut Player,
    defending: bool,
    rng: &mut R,
    events: &mut E,
) {
    let raw = rng.gen_range(enemy.attack_power / 2..=enemy.attack_power);
    let damage = if defending {
        raw.saturating_sub(DEFEND_DAMAGE_REDUCTION)
    } else {
        raw
    };

    let mut hits = 1;
    match enemy.ability {
        Some(Ability::Lifesteal) => {
            let healed = raw / LIFESTEAL_DIVISOR;
            enemy.heal(healed);
            events.emit(GameEvent::EnemyDrained { healed });
        }
        Some(Ability::Poison) => inflict(player, StatusEffect::Poison, ABILITY_STATUS_TURNS, events),
        Some(Ability::Burn) => inflict(player, StatusEffect::Burn, ABILITY_STATUS_TURNS, events),
        Some(Ability::Freeze) => inflict(player, StatusEffect::Freeze, FREEZE_TURNS, events),
        Some(Ability::DoubleStrike) => {
            if rng.gen_bool(DOUBLE_STRIKE_CHANCE) {
                hits = 2;
                events.emit(GameEvent::EnemyStruckTwice);
            }
        }
        None => {}
    }

    for _ in 0..hits {
        player.take_damage(damage);
        events.emit(GameEvent::EnemyHit { damage });
    }
}

fn inflict<E: EventSink>(player: &mut Player, effect: StatusEffect, turns: u32, events: &mut E) {
    player.status_effects.apply(effect, turns);
    events.emit(GameEvent::StatusInflicted { effect, turns });
}
