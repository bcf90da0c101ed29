//! Static enemy data: floor archetypes, bosses and boss loot.

use super::types::Ability;
use crate::items::Weapon;

/// (name, hp_min, hp_max, atk_min, atk_max, defense), weakest first.
/// Floor tiers index into the front of the table; the last entry is reserved for the deepest floors.
pub const ENEMY_ARCHETYPES: [(&str, u32, u32, u32, u32, u32); 25] = [
    ("Goblin", 40, 70, 5, 12, 2),
    ("Skeleton", 60, 90, 7, 14, 3),
    ("Orc", 80, 110, 10, 18, 4),
    ("Wraith", 100, 140, 12, 22, 6),
    ("Demon", 120, 160, 15, 26, 8),
    ("Bandit", 50, 80, 6, 14, 3),
    ("Cultist", 65, 95, 9, 16, 3),
    ("Ghoul", 70, 100, 8, 15, 4),
    ("Vampire", 90, 130, 10, 20, 5),
    ("Troll", 110, 150, 13, 23, 6),
    ("Lich", 130, 170, 14, 26, 7),
    ("Minotaur", 140, 180, 16, 28, 8),
    ("Harpy", 70, 110, 10, 18, 4),
    ("Werewolf", 100, 140, 12, 20, 5),
    ("Gargoyle", 90, 130, 10, 22, 6),
    ("Basilisk", 120, 160, 14, 24, 7),
    ("Shade", 80, 120, 11, 19, 4),
    ("Warlock", 110, 150, 15, 25, 6),
    ("Zombie", 60, 100, 6, 14, 3),
    ("Revenant", 150, 190, 18, 28, 9),
    ("Phoenix", 160, 200, 20, 30, 10),
    ("Giant Spider", 70, 110, 9, 17, 4),
    ("Slime King", 130, 170, 13, 21, 6),
    ("Hydra", 180, 220, 22, 32, 11),
    ("Dark Knight", 170, 210, 21, 29, 10),
];

/// (name, hp, atk, defense, gold, ability) before floor scaling.
pub const BOSSES: [(&str, u32, u32, u32, u32, Ability); 10] = [
    ("Bone Tyrant", 250, 30, 12, 120, Ability::Lifesteal),
    ("Inferno Golem", 270, 35, 14, 140, Ability::Burn),
    ("Frost Warden", 260, 28, 13, 130, Ability::Freeze),
    ("Shadow Reaver", 280, 33, 15, 150, Ability::Poison),
    ("Doom Bringer", 300, 38, 16, 160, Ability::DoubleStrike),
    ("Void Serpent", 290, 36, 17, 155, Ability::Poison),
    ("Ember Lord", 295, 37, 16, 158, Ability::Burn),
    ("Glacier Fiend", 265, 29, 14, 133, Ability::Freeze),
    ("Grave Monarch", 275, 32, 15, 138, Ability::Lifesteal),
    ("Storm Reaper", 285, 34, 15, 145, Ability::DoubleStrike),
];

/// Fixed ability for named archetypes; everyone else just hits.
pub fn archetype_ability(name: &str) -> Option<Ability> {
    match name {
        "Vampire" | "Lich" => Some(Ability::Lifesteal),
        "Wraith" | "Hydra" => Some(Ability::Poison),
        "Warlock" | "Phoenix" => Some(Ability::Burn),
        "Basilisk" => Some(Ability::Freeze),
        "Dark Knight" | "Werewolf" => Some(Ability::DoubleStrike),
        _ => None,
    }
}

/// Unique weapons a boss may leave behind. Uniques have no resale value.
pub fn boss_loot(name: &str) -> Vec<Weapon> {
    let unique = |weapon: &str, description: &str, min: u32, max: u32| {
        vec![Weapon::new(weapon, description, min, max, 0)]
    };
    match name {
        "Bone Tyrant" => unique("Skullcrusher", "A mace adorned with bone fragments.", 24, 32),
        "Inferno Golem" => unique("Molten Blade", "Red-hot sword that scorches foes.", 26, 34),
        "Frost Warden" => unique("Glacier Edge", "Chilling blade that slows enemies.", 23, 31),
        "Shadow Reaver" => unique("Nightfang", "A dagger that thrives in shadows.", 22, 30),
        "Doom Bringer" => unique("Cataclysm", "Heavy axe with devastating power.", 28, 36),
        "Void Serpent" => unique("Venom Spire", "Spear coated in lethal toxins.", 24, 32),
        "Ember Lord" => unique("Flame Lash", "Whip of living fire.", 25, 33),
        "Glacier Fiend" => unique("Frozen Talon", "Ice-forged claw that freezes.", 24, 31),
        "Grave Monarch" => unique("Cryptblade", "Blade of necrotic energy.", 25, 34),
        "Storm Reaper" => unique("Thunder Cleaver", "Sword crackling with lightning.", 26, 35),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_ranges_are_ordered() {
        for (name, hp_min, hp_max, atk_min, atk_max, _) in ENEMY_ARCHETYPES {
            assert!(hp_min <= hp_max, "{name} hp range inverted");
            assert!(atk_min <= atk_max, "{name} atk range inverted");
        }
    }

    #[test]
    fn test_named_abilities() {
        assert_eq!(archetype_ability("Vampire"), Some(Ability::Lifesteal));
        assert_eq!(archetype_ability("Wraith"), Some(Ability::Poison));
        assert_eq!(archetype_ability("Basilisk"), Some(Ability::Freeze));
        assert_eq!(archetype_ability("Goblin"), None);
    }

    #[test]
    fn test_every_boss_has_unique_loot() {
        for (name, ..) in BOSSES {
            let loot = boss_loot(name);
            assert_eq!(loot.len(), 1, "{name} should have exactly one unique");
            assert_eq!(loot[0].price, 0);
        }
        assert!(boss_loot("Goblin").is_empty());
    }
}
