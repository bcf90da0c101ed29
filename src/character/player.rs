use rand::Rng;

use crate::combat::types::StatusEffects;
use crate::core::constants::{
    PLAYER_START_ATTACK, PLAYER_START_HEALTH, POTION_HEAL, SCORE_PER_ITEM, SCORE_PER_LEVEL,
};
use crate::core::error::Rejection;
use crate::items::{Gear, ItemKind, Weapon};

/// The adventurer. Created once per game and carried from floor to floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub x: usize,
    pub y: usize,
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub xp: u32,
    pub gold: u32,
    pub attack_power: u32,
    pub inventory: Vec<Gear>,
    /// Equipped weapon. Never also present in `inventory`.
    pub weapon: Option<Weapon>,
    pub status_effects: StatusEffects,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0,
            y: 0,
            health: PLAYER_START_HEALTH,
            max_health: PLAYER_START_HEALTH,
            level: 1,
            xp: 0,
            gold: 0,
            attack_power: PLAYER_START_ATTACK,
            inventory: Vec::new(),
            weapon: None,
            status_effects: StatusEffects::new(),
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, (x, y): (usize, usize)) {
        self.x = x;
        self.y = y;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Heals up to `amount`, never past max health. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    pub fn collect(&mut self, gear: impl Into<Gear>) {
        self.inventory.push(gear.into());
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.inventory.iter().filter(|g| g.is_kind(kind)).count()
    }

    pub fn has_key(&self) -> bool {
        self.inventory.iter().any(Gear::is_key)
    }

    /// Drops every key; they only open the floor they were found on.
    pub fn discard_keys(&mut self) -> usize {
        let before = self.inventory.len();
        self.inventory.retain(|g| !g.is_key());
        before - self.inventory.len()
    }

    /// Drinks the first Health Potion in the pack. Returns the health restored.
    pub fn use_health_potion(&mut self) -> Result<u32, Rejection> {
        let index = self
            .inventory
            .iter()
            .position(|g| g.is_kind(ItemKind::HealthPotion))
            .ok_or(Rejection::NoPotion)?;
        self.inventory.remove(index);
        Ok(self.heal(POTION_HEAL))
    }

    /// Equips the weapon at `index`, moving any current weapon back into the pack.
    /// Returns the name of the newly equipped weapon.
    pub fn equip(&mut self, index: usize) -> Result<String, Rejection> {
        if !matches!(self.inventory.get(index), Some(Gear::Weapon(_))) {
            return Err(Rejection::NotAWeapon);
        }
        let Gear::Weapon(weapon) = self.inventory.remove(index) else {
            return Err(Rejection::NotAWeapon);
        };
        let name = weapon.name.clone();
        if let Some(previous) = self.weapon.replace(weapon) {
            self.inventory.push(Gear::Weapon(previous));
        }
        Ok(name)
    }

    /// Returns the equipped weapon to the pack.
    pub fn unequip(&mut self) -> Result<String, Rejection> {
        let weapon = self.weapon.take().ok_or(Rejection::NoWeaponEquipped)?;
        let name = weapon.name.clone();
        self.inventory.push(Gear::Weapon(weapon));
        Ok(name)
    }

    /// Damage for one attack: the weapon's range if armed, else half to full attack power.
    pub fn roll_attack<R: Rng>(&self, rng: &mut R) -> u32 {
        match &self.weapon {
            Some(weapon) => weapon.roll_damage(rng),
            None => rng.gen_range(self.attack_power / 2..=self.attack_power),
        }
    }

    pub fn spend_gold(&mut self, amount: u32) -> Result<(), Rejection> {
        if self.gold < amount {
            return Err(Rejection::NotEnoughGold {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    /// Final score: level, carried items and gold.
    pub fn score(&self) -> u32 {
        self.level * SCORE_PER_LEVEL + self.inventory.len() as u32 * SCORE_PER_ITEM + self.gold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sword() -> Weapon {
        Weapon::new("Sword", "A sharp sword", 10, 15, 40)
    }

    #[test]
    fn test_new_player_defaults() {
        let p = Player::new("Ada");
        assert_eq!(p.health, 100);
        assert_eq!(p.max_health, 100);
        assert_eq!(p.level, 1);
        assert_eq!(p.attack_power, 10);
        assert_eq!(p.gold, 0);
        assert!(p.inventory.is_empty());
        assert!(p.weapon.is_none());
    }

    #[test]
    fn test_take_damage_clamps_to_zero() {
        let mut p = Player::new("Ada");
        p.take_damage(250);
        assert_eq!(p.health, 0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut p = Player::new("Ada");
        p.health = 95;
        assert_eq!(p.heal(20), 5);
        assert_eq!(p.health, 100);
    }

    #[test]
    fn test_potion_consumed_and_heals() {
        let mut p = Player::new("Ada");
        p.collect(Item::health_potion());
        p.health = 50;
        assert_eq!(p.use_health_potion(), Ok(20));
        assert_eq!(p.health, 70);
        assert_eq!(p.count_of(ItemKind::HealthPotion), 0);
        assert_eq!(p.use_health_potion(), Err(Rejection::NoPotion));
    }

    #[test]
    fn test_potion_at_full_health_still_consumed() {
        let mut p = Player::new("Ada");
        p.collect(Item::health_potion());
        assert_eq!(p.use_health_potion(), Ok(0));
        assert!(p.inventory.is_empty());
    }

    #[test]
    fn test_equip_unequip_round_trip() {
        let mut p = Player::new("Ada");
        p.collect(Item::health_potion());
        p.collect(sword());
        let before = p.inventory.clone();

        assert_eq!(p.equip(1), Ok("Sword".to_string()));
        assert_eq!(p.weapon, Some(sword()));
        assert_eq!(p.inventory.len(), 1);
        assert!(p.inventory.iter().all(|g| g.as_weapon().is_none()));

        assert_eq!(p.unequip(), Ok("Sword".to_string()));
        assert!(p.weapon.is_none());
        assert_eq!(p.inventory.len(), before.len());
        for gear in &before {
            assert!(p.inventory.contains(gear));
        }
    }

    #[test]
    fn test_equip_swaps_previous_weapon_back() {
        let mut p = Player::new("Ada");
        let axe = Weapon::new("Axe", "A heavy axe", 12, 18, 65);
        p.collect(sword());
        p.collect(axe.clone());
        p.equip(0).unwrap();
        // axe is now at index 0
        p.equip(0).unwrap();
        assert_eq!(p.weapon, Some(axe));
        assert_eq!(p.inventory, vec![Gear::Weapon(sword())]);
    }

    #[test]
    fn test_equip_rejects_non_weapon_and_bad_index() {
        let mut p = Player::new("Ada");
        p.collect(Item::health_potion());
        assert_eq!(p.equip(0), Err(Rejection::NotAWeapon));
        assert_eq!(p.equip(5), Err(Rejection::NotAWeapon));
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.unequip(), Err(Rejection::NoWeaponEquipped));
    }

    #[test]
    fn test_unarmed_attack_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = Player::new("Ada");
        for _ in 0..100 {
            assert!((5..=10).contains(&p.roll_attack(&mut rng)));
        }
    }

    #[test]
    fn test_spend_gold_rejects_without_change() {
        let mut p = Player::new("Ada");
        p.gold = 20;
        assert_eq!(
            p.spend_gold(30),
            Err(Rejection::NotEnoughGold {
                needed: 30,
                available: 20
            })
        );
        assert_eq!(p.gold, 20);
        assert!(p.spend_gold(20).is_ok());
        assert_eq!(p.gold, 0);
    }

    #[test]
    fn test_score_formula() {
        let mut p = Player::new("Ada");
        p.level = 3;
        p.gold = 42;
        p.collect(Item::health_potion());
        p.collect(sword());
        p.equip(1).unwrap();
        // equipped weapon is not in the pack
        assert_eq!(p.score(), 300 + 10 + 42);
    }

    #[test]
    fn test_discard_keys() {
        let mut p = Player::new("Ada");
        p.collect(Item::key("Opens the dungeon exit"));
        p.collect(Item::health_potion());
        p.collect(Item::key("A magical key dropped by the boss"));
        assert!(p.has_key());
        assert_eq!(p.discard_keys(), 2);
        assert!(!p.has_key());
        assert_eq!(p.inventory.len(), 1);
    }
}
