//! Movement and the per-cell content state machine.

use rand::Rng;

use super::types::{
    lore_text, Floor, RoomContent, BLACKSMITH_FORGE, BOOBY_TRAPPED_PASSAGE, CURSED_HALL,
    ENCHANTMENT_CHAMBER, GLITTERING_VAULT, HIDDEN_NICHE, SEALED_GATE, SILENT_CHAMBER,
};
use crate::character::Player;
use crate::combat::logic::{resolve_encounter, CombatOutcome};
use crate::core::constants::{TRAP_DAMAGE_MAX, TRAP_DAMAGE_MIN, TREASURE_GOLD_MAX, TREASURE_GOLD_MIN};
use crate::core::error::Rejection;
use crate::core::events::{EventSink, GameEvent};
use crate::core::input::{CommandSource, Direction};
use crate::economy::{blacksmith_room, enchantment_room};
use crate::items::ItemKind;

/// What entering a cell meant for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomOutcome {
    Continue,
    PlayerDied,
    /// Reached the exit holding a key
    ExitUnlocked,
}

/// Steps one cell in `direction` and resolves whatever is there.
///
/// Only carved cells can be entered. Once the move is accepted the player ends up on
/// the target cell no matter how the room played out, including a flight from combat
/// or a locked exit.
pub fn move_player<R, I, E>(
    floor: &mut Floor,
    player: &mut Player,
    direction: Direction,
    rng: &mut R,
    input: &mut I,
    events: &mut E,
) -> Result<RoomOutcome, Rejection>
where
    R: Rng,
    I: CommandSource,
    E: EventSink,
{
    let target = floor
        .neighbor(player.position(), direction)
        .ok_or(Rejection::Blocked)?;
    let outcome = enter_room(floor, player, target, rng, input, events);
    player.set_position(target);
    if let Some(room) = floor.get_room_mut(target.0, target.1) {
        room.visited = true;
    }
    Ok(outcome)
}

/// Dispatches on the content of the cell at `(x, y)`.
pub fn enter_room<R, I, E>(
    floor: &mut Floor,
    player: &mut Player,
    (x, y): (usize, usize),
    rng: &mut R,
    input: &mut I,
    events: &mut E,
) -> RoomOutcome
where
    R: Rng,
    I: CommandSource,
    E: EventSink,
{
    let Some(room) = floor.get_room_mut(x, y) else {
        return RoomOutcome::Continue;
    };
    events.emit(GameEvent::RoomEntered {
        position: (x, y),
        name: room.name.clone(),
    });
    if let Some(text) = lore_text(&room.name) {
        events.emit(GameEvent::RoomLore { text });
    }

    let content = std::mem::replace(&mut room.content, RoomContent::Empty);
    log::debug!("entering ({x}, {y}): {}", content.label());
    match content {
        RoomContent::Empty => RoomOutcome::Continue,
        RoomContent::Enemy(mut enemy) => {
            match resolve_encounter(player, &mut enemy, rng, input, events) {
                CombatOutcome::Victory => {
                    room.consume(CURSED_HALL);
                    RoomOutcome::Continue
                }
                CombatOutcome::Fled => {
                    room.content = RoomContent::Enemy(enemy);
                    RoomOutcome::Continue
                }
                CombatOutcome::Defeat => {
                    room.content = RoomContent::Enemy(enemy);
                    RoomOutcome::PlayerDied
                }
            }
        }
        RoomContent::Item(item) => {
            events.emit(GameEvent::LootFound {
                name: item.name.clone(),
            });
            let lore = if item.kind == ItemKind::Key {
                HIDDEN_NICHE
            } else {
                SILENT_CHAMBER
            };
            room.consume(lore);
            player.collect(item);
            RoomOutcome::Continue
        }
        RoomContent::Weapon(weapon) => {
            events.emit(GameEvent::LootFound {
                name: weapon.name.clone(),
            });
            room.consume(SILENT_CHAMBER);
            player.collect(weapon);
            RoomOutcome::Continue
        }
        RoomContent::Treasure => {
            let gold = rng.gen_range(TREASURE_GOLD_MIN..=TREASURE_GOLD_MAX);
            player.gold += gold;
            events.emit(GameEvent::TreasureFound { gold });
            room.consume(GLITTERING_VAULT);
            RoomOutcome::Continue
        }
        RoomContent::Trap => {
            let damage = rng.gen_range(TRAP_DAMAGE_MIN..=TRAP_DAMAGE_MAX);
            player.take_damage(damage);
            events.emit(GameEvent::TrapSprung { damage });
            room.consume(BOOBY_TRAPPED_PASSAGE);
            if player.is_alive() {
                RoomOutcome::Continue
            } else {
                RoomOutcome::PlayerDied
            }
        }
        RoomContent::Enchantment => {
            enchantment_room(player, input, events);
            room.consume(ENCHANTMENT_CHAMBER);
            RoomOutcome::Continue
        }
        RoomContent::Blacksmith => {
            blacksmith_room(player, input, events);
            room.consume(BLACKSMITH_FORGE);
            RoomOutcome::Continue
        }
        RoomContent::Exit => {
            room.content = RoomContent::Exit;
            room.name = SEALED_GATE.to_string();
            if player.has_key() {
                events.emit(GameEvent::ExitUnlocked);
                RoomOutcome::ExitUnlocked
            } else {
                events.emit(GameEvent::ExitLocked);
                RoomOutcome::Continue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::Enemy;
    use crate::core::input::ScriptedInput;
    use crate::items::{Item, Weapon};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// A 3x1 corridor with the player in the middle and `content` to the right.
    fn corridor(content: RoomContent) -> (Floor, Player) {
        let mut floor = Floor::new(1, 3, 1);
        floor.carve((1, 0), "Icy Crypt");
        floor.carve((2, 0), "Gloomy Cellar");
        floor.place((2, 0), content);
        let mut player = Player::new("Ada");
        player.set_position((1, 0));
        (floor, player)
    }

    fn step_right(
        floor: &mut Floor,
        player: &mut Player,
        tokens: &[&str],
    ) -> (Result<RoomOutcome, Rejection>, Vec<GameEvent>) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedInput::new("Ada", tokens.iter().copied());
        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = move_player(floor, player, Direction::Right, &mut rng, &mut input, &mut events);
        (outcome, events)
    }

    #[test]
    fn test_uncarved_cell_blocks() {
        let (mut floor, mut player) = corridor(RoomContent::Empty);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut input = ScriptedInput::new("Ada", Vec::<String>::new());
        let mut events: Vec<GameEvent> = Vec::new();
        let result = move_player(&mut floor, &mut player, Direction::Left, &mut rng, &mut input, &mut events);
        assert_eq!(result, Err(Rejection::Blocked));
        assert_eq!(player.position(), (1, 0));
        let result = move_player(&mut floor, &mut player, Direction::Up, &mut rng, &mut input, &mut events);
        assert_eq!(result, Err(Rejection::Blocked));
    }

    #[test]
    fn test_treasure_is_consumed() {
        let (mut floor, mut player) = corridor(RoomContent::Treasure);
        let (outcome, _) = step_right(&mut floor, &mut player, &[]);
        assert_eq!(outcome, Ok(RoomOutcome::Continue));
        assert!((20..=50).contains(&player.gold));
        let room = floor.get_room(2, 0).unwrap();
        assert!(room.content.is_empty());
        assert_eq!(room.name, GLITTERING_VAULT);
        assert!(room.visited);
        assert_eq!(player.position(), (2, 0));
    }

    #[test]
    fn test_trap_damage() {
        let (mut floor, mut player) = corridor(RoomContent::Trap);
        step_right(&mut floor, &mut player, &[]);
        assert!((70..=90).contains(&player.health));
        assert_eq!(floor.get_room(2, 0).unwrap().name, BOOBY_TRAPPED_PASSAGE);
    }

    #[test]
    fn test_lethal_trap_reports_death() {
        let (mut floor, mut player) = corridor(RoomContent::Trap);
        player.health = 5;
        let (outcome, _) = step_right(&mut floor, &mut player, &[]);
        assert_eq!(outcome, Ok(RoomOutcome::PlayerDied));
        assert_eq!(player.health, 0);
    }

    #[test]
    fn test_key_pickup_renames_cell() {
        let (mut floor, mut player) = corridor(RoomContent::Item(Item::key("Opens the dungeon exit")));
        step_right(&mut floor, &mut player, &[]);
        assert!(player.has_key());
        assert_eq!(floor.get_room(2, 0).unwrap().name, HIDDEN_NICHE);
    }

    #[test]
    fn test_weapon_pickup() {
        let (mut floor, mut player) = corridor(RoomContent::Weapon(Weapon::new("Nightfang", "", 22, 30, 0)));
        let (_, events) = step_right(&mut floor, &mut player, &[]);
        assert_eq!(player.inventory.len(), 1);
        assert!(events.contains(&GameEvent::LootFound {
            name: "Nightfang".into()
        }));
    }

    #[test]
    fn test_locked_exit_persists_and_player_still_moves() {
        let (mut floor, mut player) = corridor(RoomContent::Exit);
        let (outcome, events) = step_right(&mut floor, &mut player, &[]);
        assert_eq!(outcome, Ok(RoomOutcome::Continue));
        assert!(events.contains(&GameEvent::ExitLocked));
        assert_eq!(player.position(), (2, 0));
        let room = floor.get_room(2, 0).unwrap();
        assert_eq!(room.content, RoomContent::Exit);
        assert_eq!(room.name, SEALED_GATE);
    }

    #[test]
    fn test_exit_with_key_unlocks() {
        let (mut floor, mut player) = corridor(RoomContent::Exit);
        player.collect(Item::key("Opens the dungeon exit"));
        let (outcome, events) = step_right(&mut floor, &mut player, &[]);
        assert_eq!(outcome, Ok(RoomOutcome::ExitUnlocked));
        assert!(events.contains(&GameEvent::ExitUnlocked));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::RoomLore { .. })));
    }

    #[test]
    fn test_fled_enemy_stays_and_player_moves() {
        let enemy = Enemy::new("Orc", 500, 5, 4, 20, None);
        let (mut floor, mut player) = corridor(RoomContent::Enemy(enemy));
        let (outcome, _) = step_right(&mut floor, &mut player, &["flee"]);
        assert_eq!(outcome, Ok(RoomOutcome::Continue));
        assert_eq!(player.position(), (2, 0));
        assert!(matches!(
            floor.get_room(2, 0).unwrap().content,
            RoomContent::Enemy(_)
        ));
    }

    #[test]
    fn test_defeated_enemy_leaves_cursed_hall() {
        let enemy = Enemy::new("Rat", 1, 1, 1, 3, None);
        let (mut floor, mut player) = corridor(RoomContent::Enemy(enemy));
        step_right(&mut floor, &mut player, &["attack"]);
        let room = floor.get_room(2, 0).unwrap();
        assert!(room.content.is_empty());
        assert_eq!(room.name, CURSED_HALL);
        assert_eq!(player.gold, 3);
    }

    #[test]
    fn test_blacksmith_consumed_even_without_weapon() {
        let (mut floor, mut player) = corridor(RoomContent::Blacksmith);
        let (_, events) = step_right(&mut floor, &mut player, &[]);
        assert!(events.contains(&GameEvent::Rejected(Rejection::NoWeaponEquipped)));
        assert_eq!(floor.get_room(2, 0).unwrap().name, BLACKSMITH_FORGE);
        assert!(floor.get_room(2, 0).unwrap().content.is_empty());
    }

    #[test]
    fn test_lore_shown_on_revisit() {
        let (mut floor, mut player) = corridor(RoomContent::Treasure);
        step_right(&mut floor, &mut player, &[]);
        player.set_position((1, 0));
        let (_, events) = step_right(&mut floor, &mut player, &[]);
        assert!(events.contains(&GameEvent::RoomLore {
            text: lore_text(GLITTERING_VAULT).unwrap()
        }));
    }
}
