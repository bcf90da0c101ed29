//! Turns engine events into styled lines on stdout.

use crossterm::style::Stylize;

use delve::combat::StatusEffect;
use delve::core::events::{Combatant, EventSink, GameEvent, PlayerStatus};
use delve::core::game_state::SessionOutcome;
use delve::leaderboard::ScoreRecord;

use super::dungeon_map::{print_legend, print_map};

/// Prints every event as it arrives.
#[derive(Debug, Default)]
pub struct TerminalView {
    show_legend: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self { show_legend: true }
    }

    fn status(&mut self, status: &PlayerStatus) {
        println!();
        print_map(&status.map);
        if self.show_legend {
            print_legend();
            self.show_legend = false;
        }
        println!(
            "{} | Floor {} | {} | HP {}/{} | Lv {} ({} xp) | {} gold",
            status.room_name.as_str().bold(),
            status.floor,
            format!("({}, {})", status.position.0, status.position.1).dark_grey(),
            status.health,
            status.max_health,
            status.level,
            status.xp,
            status.gold.to_string().yellow(),
        );
    }
}

fn who(target: Combatant) -> &'static str {
    match target {
        Combatant::Player => "You",
        Combatant::Enemy => "The enemy",
    }
}

fn be(target: Combatant) -> &'static str {
    match target {
        Combatant::Player => "are",
        Combatant::Enemy => "is",
    }
}

fn print_options<'a>(entries: impl IntoIterator<Item = (String, &'a str)>) {
    for (i, (label, detail)) in entries.into_iter().enumerate() {
        println!("  {}) {} {}", i + 1, label, detail.dark_grey());
    }
}

pub fn print_standings(records: &[ScoreRecord]) {
    println!("{}", "── Leaderboard ──".bold());
    if records.is_empty() {
        println!("  (no games recorded)");
    }
    for (rank, record) in records.iter().enumerate() {
        println!("  {:>2}. {:<20} {:>6}", rank + 1, record.name, record.score);
    }
}

impl EventSink for TerminalView {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::FloorEntered { floor } => {
                println!();
                println!("{}", format!("=== Floor {floor} ===").bold().green());
            }
            GameEvent::BossLurks { name } => {
                println!("{}", format!("A {name} lurks somewhere on this floor.").red());
            }
            GameEvent::UniqueLootPlaced { weapon } => {
                println!("Rumor has it the {} is hidden here.", weapon.cyan());
            }
            GameEvent::Status(status) => self.status(&status),
            GameEvent::RoomEntered { name, .. } => println!("You enter the {}.", name.bold()),
            GameEvent::RoomLore { text } => println!("{}", text.italic().dark_grey()),
            GameEvent::Rejected(rejection) => {
                println!("{}", format!("Can't do that: {rejection}.").red())
            }
            GameEvent::InvalidChoice => println!("{}", "Invalid choice. Try again.".red()),
            GameEvent::Regenerated { amount } => {
                println!("{}", format!("You regenerate {amount} health.").green())
            }

            GameEvent::EncounterStarted {
                enemy,
                ability,
                is_boss,
            } => {
                let banner = if is_boss {
                    format!("BOSS: {enemy} blocks your way!").bold().red()
                } else {
                    format!("A {enemy} attacks!").red()
                };
                println!("{banner}");
                if let Some(ability) = ability {
                    println!("  It wields {}.", ability.name().magenta());
                }
            }
            GameEvent::RoundStarted {
                player_health,
                enemy_health,
            } => println!(
                "{}",
                format!("-- You: {player_health} HP | Enemy: {enemy_health} HP --").dark_grey()
            ),
            GameEvent::StatusDamage {
                target,
                effect,
                damage,
            } => println!(
                "{} take{} {} {} damage.",
                who(target),
                if target == Combatant::Player { "" } else { "s" },
                damage,
                effect.name().magenta()
            ),
            GameEvent::StatusExpired { target, effect } => println!(
                "{} {} no longer {}.",
                who(target),
                be(target),
                afflicted(effect)
            ),
            GameEvent::Frozen { target } => {
                println!("{} {} frozen and can't act!", who(target), be(target))
            }
            GameEvent::PlayerHit { damage } => {
                println!("You hit for {}.", damage.to_string().bold())
            }
            GameEvent::WeaponEffectApplied { effect } => {
                println!("Your weapon leaves the enemy {}.", afflicted(effect).magenta())
            }
            GameEvent::Defending => println!("You raise your guard."),
            GameEvent::PotionUsed { healed } => {
                println!("{}", format!("You drink a potion and recover {healed} health.").green())
            }
            GameEvent::EnemyHit { damage } => {
                println!("{}", format!("The enemy hits you for {damage}.").red())
            }
            GameEvent::EnemyStruckTwice => println!("{}", "The enemy strikes twice!".red()),
            GameEvent::EnemyDrained { healed } => {
                println!("The enemy drains {healed} health from you.")
            }
            GameEvent::StatusInflicted { effect, turns } => println!(
                "{}",
                format!("You are {} for {turns} turns.", afflicted(effect)).magenta()
            ),
            GameEvent::Fled { enemy } => println!("You flee from the {enemy}."),
            GameEvent::EnemyDefeated { name, xp, gold } => println!(
                "{}",
                format!("You defeated the {name}! +{xp} xp, +{gold} gold.").green()
            ),
            GameEvent::LevelUp {
                level,
                max_health,
                attack_power,
            } => println!(
                "{}",
                format!("Level up! You are now level {level} ({max_health} HP, {attack_power} attack).")
                    .bold()
                    .yellow()
            ),
            GameEvent::PassiveUnlocked(passive) => {
                println!("{}", format!("Unlocked: {}", passive.name()).bold().yellow())
            }

            GameEvent::LootFound { name } => println!("You found a {}!", name.cyan()),
            GameEvent::TreasureFound { gold } => {
                println!("{}", format!("You found {gold} gold!").yellow())
            }
            GameEvent::TrapSprung { damage } => {
                println!("{}", format!("A trap! You take {damage} damage.").red())
            }
            GameEvent::EnchantmentOffered { weapon, cost } => {
                println!("An altar offers to enchant your {weapon} for {cost} gold:");
                print_options(
                    StatusEffect::ALL
                        .iter()
                        .map(|e| (e.name().to_string(), "")),
                );
            }
            GameEvent::WeaponEnchanted { weapon, effect } => println!(
                "{}",
                format!("Your {weapon} now carries {}.", effect.name()).magenta()
            ),
            GameEvent::BlacksmithOffered {
                weapon,
                min_damage,
                max_damage,
                cost,
            } => println!(
                "The blacksmith eyes your {weapon} ({min_damage}-{max_damage}). Reforging costs {cost} gold."
            ),
            GameEvent::WeaponReforged {
                weapon,
                min_damage,
                max_damage,
            } => println!(
                "{}",
                format!("Your {weapon} now deals {min_damage}-{max_damage}.").green()
            ),
            GameEvent::OfferDeclined => println!("You move on."),
            GameEvent::ExitLocked => println!("{}", "The gate is locked. You need a key.".red()),
            GameEvent::ExitUnlocked => {
                println!("{}", "Your key turns in the lock. The gate opens!".bold().green())
            }

            GameEvent::ShopOpened { gold, wares } => {
                println!("{} (you have {gold} gold)", "Shop".bold());
                print_options(wares.into_iter().map(|(name, price)| (format!("{name} - {price} gold"), "")));
            }
            GameEvent::Purchased { name, price } => {
                println!("You bought a {name} for {price} gold.")
            }
            GameEvent::SellOffered { offers } => {
                println!("{}", "The merchant will buy:".bold());
                print_options(offers.into_iter().map(|(name, price)| (format!("{name} - {price} gold"), "")));
            }
            GameEvent::Sold { name, price } => println!("You sold the {name} for {price} gold."),
            GameEvent::InventoryShown { entries, equipped } => {
                println!("{}", "Inventory".bold());
                let count = entries.len();
                print_options(entries.iter().map(|(name, desc)| (name.clone(), desc.as_str())));
                match equipped {
                    Some(weapon) => println!("  {}) Unequip {}", count + 1, weapon.cyan()),
                    None if count == 0 => println!("  (empty)"),
                    None => {}
                }
            }
            GameEvent::Equipped { name } => println!("You equip the {}.", name.cyan()),
            GameEvent::Unequipped { name } => println!("You put away the {name}."),

            GameEvent::GameOver { outcome, score } => {
                println!();
                let headline = match outcome {
                    SessionOutcome::Escaped => "You escaped the dungeon!".bold().green(),
                    SessionOutcome::Died => "You have died.".bold().red(),
                    SessionOutcome::Quit => "You leave the dungeon.".bold(),
                };
                println!("{headline}");
                println!("Final score: {}", score.to_string().bold().yellow());
            }
            GameEvent::Standings { records } => print_standings(&records),
        }
    }
}

fn afflicted(effect: StatusEffect) -> &'static str {
    match effect {
        StatusEffect::Poison => "poisoned",
        StatusEffect::Burn => "burning",
        StatusEffect::Freeze => "frozen",
    }
}
