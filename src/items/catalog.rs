//! Fixed shop stock.

use super::types::{Gear, Item, Weapon};

/// The shop's wares, in menu order. Each purchase hands out a fresh copy.
pub fn shop_catalog() -> Vec<Gear> {
    vec![
        Item::health_potion().into(),
        Weapon::new("Sword", "A sharp sword", 10, 15, 40).into(),
        Weapon::new("Axe", "A heavy axe", 12, 18, 65).into(),
        Weapon::new("Dagger", "A quick dagger", 8, 12, 35).into(),
        Weapon::new("Warhammer", "Crushes armor and bone", 14, 22, 85).into(),
        Weapon::new("Rapier", "A slender, piercing blade", 9, 17, 50).into(),
        Weapon::new("Flame Blade", "Glows with searing heat", 13, 20, 95).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_with_potion() {
        let catalog = shop_catalog();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog[0].name(), "Health Potion");
        assert_eq!(catalog[0].price(), 10);
    }

    #[test]
    fn test_catalog_weapons_are_sane() {
        for gear in shop_catalog() {
            if let Some(w) = gear.as_weapon() {
                assert!(w.min_damage <= w.max_damage, "{} has inverted range", w.name);
                assert!(w.price > 0);
                assert!(w.effect.is_none());
            }
        }
    }
}
