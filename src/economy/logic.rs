//! Gold-for-gear transactions. Every function either fully applies or returns a
//! [`Rejection`] and leaves the player untouched.

use crate::character::Player;
use crate::combat::types::StatusEffect;
use crate::core::constants::{
    BLACKSMITH_DAMAGE_BONUS, BLACKSMITH_UPGRADE_COST, ENCHANTMENT_COST, SELL_PRICE_DIVISOR,
};
use crate::core::error::Rejection;
use crate::items::Gear;

/// Buys a fresh copy of `gear`.
pub fn buy(player: &mut Player, gear: &Gear) -> Result<(), Rejection> {
    player.spend_gold(gear.price())?;
    player.collect(gear.clone());
    log::debug!("{} bought {} for {}", player.name, gear.name(), gear.price());
    Ok(())
}

/// What the shop pays for `gear`.
pub fn sell_price(gear: &Gear) -> Result<u32, Rejection> {
    if gear.is_key() || gear.price() == 0 {
        return Err(Rejection::Worthless);
    }
    Ok(gear.price() / SELL_PRICE_DIVISOR)
}

/// Sells the inventory entry at `index`. Returns what was sold and for how much.
pub fn sell(player: &mut Player, index: usize) -> Result<(Gear, u32), Rejection> {
    let gear = player.inventory.get(index).ok_or(Rejection::NothingToSell)?;
    let price = sell_price(gear)?;
    let gear = player.inventory.remove(index);
    player.gold += price;
    log::debug!("{} sold {} for {}", player.name, gear.name(), price);
    Ok((gear, price))
}

/// Blacksmith: raises both damage bounds of the equipped weapon.
pub fn reforge_weapon(player: &mut Player) -> Result<(), Rejection> {
    if player.weapon.is_none() {
        return Err(Rejection::NoWeaponEquipped);
    }
    player.spend_gold(BLACKSMITH_UPGRADE_COST)?;
    if let Some(weapon) = player.weapon.as_mut() {
        weapon.reforge(BLACKSMITH_DAMAGE_BONUS);
    }
    Ok(())
}

/// Binds `effect` to the equipped weapon for good.
pub fn enchant_weapon(player: &mut Player, effect: StatusEffect) -> Result<(), Rejection> {
    let weapon = player.weapon.as_ref().ok_or(Rejection::NoWeaponEquipped)?;
    if weapon.is_enchanted() {
        return Err(Rejection::AlreadyEnchanted);
    }
    player.spend_gold(ENCHANTMENT_COST)?;
    if let Some(weapon) = player.weapon.as_mut() {
        weapon.enchant(effect)?;
    }
    Ok(())
}
