use rand::Rng;

use crate::combat::types::StatusEffect;
use crate::core::constants::POTION_PRICE;
use crate::core::error::Rejection;

pub const HEALTH_POTION_NAME: &str = "Health Potion";
pub const KEY_NAME: &str = "Key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    HealthPotion,
    Key,
}

/// A non-weapon item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
    pub description: String,
    pub price: u32,
}

impl Item {
    pub fn health_potion() -> Self {
        Self {
            kind: ItemKind::HealthPotion,
            name: HEALTH_POTION_NAME.to_string(),
            description: "Restores 20 health".to_string(),
            price: POTION_PRICE,
        }
    }

    pub fn key(description: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Key,
            name: KEY_NAME.to_string(),
            description: description.into(),
            price: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub name: String,
    pub description: String,
    pub min_damage: u32,
    pub max_damage: u32,
    pub price: u32,
    /// Set at most once, by an enchantment
    pub effect: Option<StatusEffect>,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        min_damage: u32,
        max_damage: u32,
        price: u32,
    ) -> Self {
        debug_assert!(min_damage <= max_damage);
        Self {
            name: name.into(),
            description: description.into(),
            min_damage,
            max_damage,
            price,
            effect: None,
        }
    }

    pub fn is_enchanted(&self) -> bool {
        self.effect.is_some()
    }

    pub fn roll_damage<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min_damage..=self.max_damage)
    }

    /// Binds a status effect to the weapon permanently.
    pub fn enchant(&mut self, effect: StatusEffect) -> Result<(), Rejection> {
        if self.is_enchanted() {
            return Err(Rejection::AlreadyEnchanted);
        }
        self.effect = Some(effect);
        self.description
            .push_str(&format!(" (Enchanted: {})", effect.name()));
        Ok(())
    }

    pub fn reforge(&mut self, bonus: u32) {
        self.min_damage += bonus;
        self.max_damage += bonus;
    }
}

/// Anything that can sit in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gear {
    Item(Item),
    Weapon(Weapon),
}

impl Gear {
    pub fn name(&self) -> &str {
        match self {
            Gear::Item(item) => &item.name,
            Gear::Weapon(weapon) => &weapon.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Gear::Item(item) => &item.description,
            Gear::Weapon(weapon) => &weapon.description,
        }
    }

    pub fn price(&self) -> u32 {
        match self {
            Gear::Item(item) => item.price,
            Gear::Weapon(weapon) => weapon.price,
        }
    }

    pub fn is_kind(&self, kind: ItemKind) -> bool {
        matches!(self, Gear::Item(item) if item.kind == kind)
    }

    pub fn is_key(&self) -> bool {
        self.is_kind(ItemKind::Key)
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Gear::Weapon(weapon) => Some(weapon),
            Gear::Item(_) => None,
        }
    }
}

impl From<Item> for Gear {
    fn from(item: Item) -> Self {
        Gear::Item(item)
    }
}

impl From<Weapon> for Gear {
    fn from(weapon: Weapon) -> Self {
        Gear::Weapon(weapon)
    }
}
