//! Interactive flows around the transactions: the shop counter, the pack, and the
//! two special rooms. They prompt through a [`CommandSource`] and report through an [`EventSink`].

use super::logic::{buy, enchant_weapon, reforge_weapon, sell, sell_price};
use crate::character::Player;
use crate::combat::types::StatusEffect;
use crate::core::constants::{BLACKSMITH_UPGRADE_COST, ENCHANTMENT_COST};
use crate::core::error::Rejection;
use crate::core::events::{EventSink, GameEvent};
use crate::core::input::{CommandSource, ConfirmPrompt, MenuChoice, MenuKind};
use crate::items::Gear;

/// Asks until the answer is a valid index or a cancel.
pub fn prompt_menu<I: CommandSource, E: EventSink>(
    input: &mut I,
    events: &mut E,
    kind: MenuKind,
    options: usize,
) -> Option<usize> {
    loop {
        match input.menu(kind, options) {
            MenuChoice::Cancel => return None,
            MenuChoice::Select(index) if index < options => return Some(index),
            MenuChoice::Select(_) => events.emit(GameEvent::InvalidChoice),
        }
    }
}

fn report<E: EventSink>(events: &mut E, result: Result<GameEvent, Rejection>) {
    match result {
        Ok(event) => events.emit(event),
        Err(rejection) => events.emit(GameEvent::Rejected(rejection)),
    }
}

/// One visit to the shop: show the wares, buy at most one.
pub fn shop_menu<I: CommandSource, E: EventSink>(
    player: &mut Player,
    catalog: &[Gear],
    input: &mut I,
    events: &mut E,
) {
    events.emit(GameEvent::ShopOpened {
        gold: player.gold,
        wares: catalog
            .iter()
            .map(|g| (g.name().to_string(), g.price()))
            .collect(),
    });
    let Some(index) = prompt_menu(input, events, MenuKind::Shop, catalog.len()) else {
        return;
    };
    let gear = &catalog[index];
    let result = buy(player, gear).map(|()| GameEvent::Purchased {
        name: gear.name().to_string(),
        price: gear.price(),
    });
    report(events, result);
}

/// Offers every pack entry for sale and sells at most one.
pub fn sell_menu<I: CommandSource, E: EventSink>(player: &mut Player, input: &mut I, events: &mut E) {
    if player.inventory.is_empty() {
        events.emit(GameEvent::Rejected(Rejection::NothingToSell));
        return;
    }
    events.emit(GameEvent::SellOffered {
        offers: player
            .inventory
            .iter()
            .map(|g| (g.name().to_string(), sell_price(g).unwrap_or(0)))
            .collect(),
    });
    let Some(index) = prompt_menu(input, events, MenuKind::Sell, player.inventory.len()) else {
        return;
    };
    let result = sell(player, index).map(|(gear, price)| GameEvent::Sold {
        name: gear.name().to_string(),
        price,
    });
    report(events, result);
}

/// Lists the pack. Picking a weapon equips it; the extra last option unequips.
pub fn inventory_menu<I: CommandSource, E: EventSink>(
    player: &mut Player,
    input: &mut I,
    events: &mut E,
) {
    events.emit(GameEvent::InventoryShown {
        entries: player
            .inventory
            .iter()
            .map(|g| (g.name().to_string(), g.description().to_string()))
            .collect(),
        equipped: player.weapon.as_ref().map(|w| w.name.clone()),
    });
    let pack = player.inventory.len();
    let options = pack + usize::from(player.weapon.is_some());
    if options == 0 {
        return;
    }
    let Some(index) = prompt_menu(input, events, MenuKind::Inventory, options) else {
        return;
    };
    let result = if index < pack {
        player.equip(index).map(|name| GameEvent::Equipped { name })
    } else {
        player.unequip().map(|name| GameEvent::Unequipped { name })
    };
    report(events, result);
}

/// Enchantment room. The cell is used up whatever happens here.
pub fn enchantment_room<I: CommandSource, E: EventSink>(
    player: &mut Player,
    input: &mut I,
    events: &mut E,
) {
    let Some(weapon) = player.weapon.as_ref() else {
        events.emit(GameEvent::Rejected(Rejection::NoWeaponEquipped));
        return;
    };
    if weapon.is_enchanted() {
        events.emit(GameEvent::Rejected(Rejection::AlreadyEnchanted));
        return;
    }
    events.emit(GameEvent::EnchantmentOffered {
        weapon: weapon.name.clone(),
        cost: ENCHANTMENT_COST,
    });

    let options = StatusEffect::ALL.len();
    let Some(index) = prompt_menu(input, events, MenuKind::Enchantment, options) else {
        events.emit(GameEvent::OfferDeclined);
        return;
    };
    let effect = StatusEffect::ALL[index];
    let result = enchant_weapon(player, effect).map(|()| GameEvent::WeaponEnchanted {
        weapon: player
            .weapon
            .as_ref()
            .map(|w| w.name.clone())
            .unwrap_or_default(),
        effect,
    });
    report(events, result);
}

/// Blacksmith room. The cell is used up whatever happens here.
pub fn blacksmith_room<I: CommandSource, E: EventSink>(
    player: &mut Player,
    input: &mut I,
    events: &mut E,
) {
    let Some(weapon) = player.weapon.as_ref() else {
        events.emit(GameEvent::Rejected(Rejection::NoWeaponEquipped));
        return;
    };
    events.emit(GameEvent::BlacksmithOffered {
        weapon: weapon.name.clone(),
        min_damage: weapon.min_damage,
        max_damage: weapon.max_damage,
        cost: BLACKSMITH_UPGRADE_COST,
    });
    if !input.confirm(ConfirmPrompt::Reforge) {
        events.emit(GameEvent::OfferDeclined);
        return;
    }
    let result = reforge_weapon(player).map(|()| match player.weapon.as_ref() {
        Some(w) => GameEvent::WeaponReforged {
            weapon: w.name.clone(),
            min_damage: w.min_damage,
            max_damage: w.max_damage,
        },
        None => GameEvent::OfferDeclined,
    });
    report(events, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::ScriptedInput;
    use crate::items::{shop_catalog, Item, Weapon};

    fn script(tokens: &[&str]) -> ScriptedInput {
        ScriptedInput::new("Ada", tokens.iter().copied())
    }

    #[test]
    fn test_prompt_menu_reprompts_out_of_range() {
        let mut input = script(&["9", "2"]);
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(prompt_menu(&mut input, &mut events, MenuKind::Shop, 3), Some(1));
        assert_eq!(events, vec![GameEvent::InvalidChoice]);
    }

    #[test]
    fn test_shop_purchase() {
        let mut player = Player::new("Ada");
        player.gold = 50;
        let mut input = script(&["2"]);
        let mut events: Vec<GameEvent> = Vec::new();
        shop_menu(&mut player, &shop_catalog(), &mut input, &mut events);
        assert_eq!(player.gold, 10);
        assert!(events.contains(&GameEvent::Purchased {
            name: "Sword".into(),
            price: 40
        }));
    }

    #[test]
    fn test_shop_cancel_changes_nothing() {
        let mut player = Player::new("Ada");
        player.gold = 50;
        let mut input = script(&["c"]);
        let mut events: Vec<GameEvent> = Vec::new();
        shop_menu(&mut player, &shop_catalog(), &mut input, &mut events);
        assert_eq!(player.gold, 50);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_sell_menu_empty_pack() {
        let mut player = Player::new("Ada");
        let mut input = script(&[]);
        let mut events: Vec<GameEvent> = Vec::new();
        sell_menu(&mut player, &mut input, &mut events);
        assert_eq!(events, vec![GameEvent::Rejected(Rejection::NothingToSell)]);
    }

    #[test]
    fn test_sell_menu_sells_potion() {
        let mut player = Player::new("Ada");
        player.collect(Item::health_potion());
        let mut input = script(&["1"]);
        let mut events: Vec<GameEvent> = Vec::new();
        sell_menu(&mut player, &mut input, &mut events);
        assert_eq!(player.gold, 5);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_inventory_menu_equip_then_unequip() {
        let mut player = Player::new("Ada");
        player.collect(Item::health_potion());
        player.collect(Weapon::new("Axe", "A heavy axe", 12, 18, 65));
        let mut events: Vec<GameEvent> = Vec::new();

        inventory_menu(&mut player, &mut script(&["2"]), &mut events);
        assert_eq!(player.weapon.as_ref().map(|w| w.name.as_str()), Some("Axe"));

        // pack holds just the potion now, option 2 is "unequip"
        inventory_menu(&mut player, &mut script(&["2"]), &mut events);
        assert!(player.weapon.is_none());
        assert_eq!(player.inventory.len(), 2);

        inventory_menu(&mut player, &mut script(&["1"]), &mut events);
        assert_eq!(events.last(), Some(&GameEvent::Rejected(Rejection::NotAWeapon)));
    }

    #[test]
    fn test_enchantment_room_without_weapon() {
        let mut player = Player::new("Ada");
        player.gold = 100;
        let mut events: Vec<GameEvent> = Vec::new();
        enchantment_room(&mut player, &mut script(&["1"]), &mut events);
        assert_eq!(events, vec![GameEvent::Rejected(Rejection::NoWeaponEquipped)]);
        assert_eq!(player.gold, 100);
    }

    #[test]
    fn test_enchantment_room_applies_choice() {
        let mut player = Player::new("Ada");
        player.gold = 40;
        player.weapon = Some(Weapon::new("Dagger", "A quick dagger", 8, 12, 35));
        let mut events: Vec<GameEvent> = Vec::new();
        enchantment_room(&mut player, &mut script(&["3"]), &mut events);
        assert_eq!(player.weapon.as_ref().unwrap().effect, Some(StatusEffect::Freeze));
        assert_eq!(player.gold, 10);
    }

    #[test]
    fn test_blacksmith_room_declined() {
        let mut player = Player::new("Ada");
        player.gold = 100;
        player.weapon = Some(Weapon::new("Dagger", "A quick dagger", 8, 12, 35));
        let mut events: Vec<GameEvent> = Vec::new();
        blacksmith_room(&mut player, &mut script(&["n"]), &mut events);
        assert_eq!(player.gold, 100);
        assert_eq!(events.last(), Some(&GameEvent::OfferDeclined));
    }

    #[test]
    fn test_blacksmith_room_accepts() {
        let mut player = Player::new("Ada");
        player.gold = 100;
        player.weapon = Some(Weapon::new("Dagger", "A quick dagger", 8, 12, 35));
        let mut events: Vec<GameEvent> = Vec::new();
        blacksmith_room(&mut player, &mut script(&["y"]), &mut events);
        assert_eq!(player.gold, 50);
        assert_eq!(
            events.last(),
            Some(&GameEvent::WeaponReforged {
                weapon: "Dagger".into(),
                min_damage: 11,
                max_damage: 15
            })
        );
    }
}
