//! Floor generation: random-walk carving followed by fixed-order content placement.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{flavor_name, Floor, RoomContent};
use crate::combat::bestiary::{archetype_ability, boss_loot, BOSSES, ENEMY_ARCHETYPES};
use crate::combat::types::Enemy;
use crate::core::constants::{
    BASE_ENEMIES_PER_FLOOR, BLACKSMITHS_PER_FLOOR, BOSS_DEFENSE_FLOOR_DIVISOR,
    BOSS_GOLD_PER_FLOOR, BOSS_HP_PER_FLOOR, BOSS_LOOT_DROP_CHANCE, EARLY_FLOOR_MAX,
    EARLY_GOLD_BONUS, ENCHANTMENT_ROOMS_PER_FLOOR, ENEMY_GOLD_BASE_MAX, ENEMY_GOLD_BASE_MIN,
    FINAL_TIER_FLOOR, FLOORS_PER_TIER, TRAPS_PER_FLOOR, TREASURES_PER_FLOOR,
};
use crate::core::input::Direction;
use crate::items::Item;

pub const FLOOR_KEY_DESCRIPTION: &str = "Opens the dungeon exit";
pub const BOSS_KEY_DESCRIPTION: &str = "A magical key dropped by the boss";

/// Generates floor `number` on a `width` x `height` grid.
///
/// The carved region always contains the start cell and covers at least half the grid.
/// Content goes into the other carved cells in this order, stopping quietly once cells
/// run out: exit, key (unless the boss drops one), `5 + number` enemies, the boss,
/// the boss's unique weapon and key, traps, treasure, enchantment rooms, blacksmith.
pub fn generate_floor<R: Rng>(number: u32, width: usize, height: usize, rng: &mut R) -> Floor {
    let mut floor = Floor::new(number, width, height);
    let path = random_walk(width, height, rng);
    for &position in &path {
        let name = flavor_name(rng);
        floor.carve(position, name);
    }
    floor.start = path[0];
    if let Some(room) = floor.get_room_mut(floor.start.0, floor.start.1) {
        room.visited = true;
    }

    let mut free: Vec<(usize, usize)> = path[1..].to_vec();
    free.shuffle(rng);
    let mut place = |floor: &mut Floor, content: RoomContent| -> Option<(usize, usize)> {
        let position = free.pop()?;
        floor.place(position, content);
        Some(position)
    };

    floor.exit_position = place(&mut floor, RoomContent::Exit);

    let boss = spawn_boss(number, rng);
    let loot = boss_loot(&boss.name)
        .choose(rng)
        .cloned()
        .filter(|_| rng.gen_bool(BOSS_LOOT_DROP_CHANCE));
    if loot.is_none() {
        place(&mut floor, RoomContent::Item(Item::key(FLOOR_KEY_DESCRIPTION)));
    }

    for _ in 0..BASE_ENEMIES_PER_FLOOR + number {
        let enemy = spawn_enemy(number, rng);
        place(&mut floor, RoomContent::Enemy(enemy));
    }

    floor.boss_name = Some(boss.name.clone());
    place(&mut floor, RoomContent::Enemy(boss));
    if let Some(weapon) = loot {
        floor.boss_loot = Some(weapon.name.clone());
        place(&mut floor, RoomContent::Weapon(weapon));
        place(&mut floor, RoomContent::Item(Item::key(BOSS_KEY_DESCRIPTION)));
    }

    for (count, content) in [
        (TRAPS_PER_FLOOR, RoomContent::Trap),
        (TREASURES_PER_FLOOR, RoomContent::Treasure),
        (ENCHANTMENT_ROOMS_PER_FLOOR, RoomContent::Enchantment),
        (BLACKSMITHS_PER_FLOOR, RoomContent::Blacksmith),
    ] {
        for _ in 0..count {
            place(&mut floor, content.clone());
        }
    }

    log::info!(
        "Generated floor {} ({} of {} cells carved, boss {:?}, unique loot {:?})",
        number,
        path.len(),
        width * height,
        floor.boss_name,
        floor.boss_loot
    );
    floor
}

/// Walks from the grid center until at least half the cells have been visited.
/// Steps that would leave the grid are redrawn. Returns visited cells in first-visit order.
fn random_walk<R: Rng>(width: usize, height: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let target = (width * height).div_ceil(2).max(1);
    let mut visited = vec![vec![false; width]; height];
    let mut current = (width / 2, height / 2);
    visited[current.1][current.0] = true;
    let mut path = vec![current];

    while path.len() < target {
        let (dx, dy) = Direction::ALL[rng.gen_range(0..Direction::ALL.len())].offset();
        let next = (
            current.0.checked_add_signed(dx as isize),
            current.1.checked_add_signed(dy as isize),
        );
        let (Some(nx), Some(ny)) = next else {
            continue;
        };
        if nx >= width || ny >= height {
            continue;
        }
        current = (nx, ny);
        if !visited[ny][nx] {
            visited[ny][nx] = true;
            path.push(current);
        }
    }
    path
}

/// Rolls a regular enemy scaled to `floor`.
pub fn spawn_enemy<R: Rng>(floor: u32, rng: &mut R) -> Enemy {
    let last = ENEMY_ARCHETYPES.len() - 1;
    let tier = if floor >= FINAL_TIER_FLOOR {
        last
    } else {
        (floor.saturating_sub(1) / FLOORS_PER_TIER).min(last as u32 - 1) as usize
    };
    let (name, hp_min, hp_max, atk_min, atk_max, base_defense) = ENEMY_ARCHETYPES[tier];

    let early = floor <= EARLY_FLOOR_MAX;
    let scale = if early { 1 } else { 2 };
    let health = rng.gen_range(hp_min + floor * scale..=hp_max + floor * scale);
    let attack = rng.gen_range(atk_min + scale..=atk_max + scale);
    let defense = (base_defense + floor / FLOORS_PER_TIER).max(1);
    let early_bonus = if early { EARLY_GOLD_BONUS } else { 0 };
    let gold_min = ENEMY_GOLD_BASE_MIN + early_bonus + floor;
    let gold_max = (ENEMY_GOLD_BASE_MAX + floor * 2).max(gold_min);
    let gold = rng.gen_range(gold_min..=gold_max);

    Enemy::new(name, health, attack, defense, gold, archetype_ability(name))
}

/// Picks this floor's boss and scales it.
pub fn spawn_boss<R: Rng>(floor: u32, rng: &mut R) -> Enemy {
    let (name, hp, atk, defense, gold, ability) = BOSSES[rng.gen_range(0..BOSSES.len())];
    Enemy::boss(
        name,
        hp + floor * BOSS_HP_PER_FLOOR,
        atk + floor,
        defense + floor / BOSS_DEFENSE_FLOOR_DIVISOR,
        gold + floor * BOSS_GOLD_PER_FLOOR,
        Some(ability),
    )
}
