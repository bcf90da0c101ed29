//! A scripted stand-in for a human player.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::input::{
    CombatAction, CommandSource, ConfirmPrompt, Direction, ExploreCommand, MenuChoice, MenuKind,
};

const SHOP_CHANCE: f64 = 0.03;
const POTION_CHANCE: f64 = 0.1;
const BUY_POTION_CHANCE: f64 = 0.6;

/// Wanders at random, always fights, buys potions now and then and accepts every
/// upgrade it is offered. Quits once it has spent `max_steps` explore commands so a
/// run that never finds the exit still ends.
pub struct AutoPilot {
    name: String,
    rng: StdRng,
    steps: u32,
    max_steps: u32,
}

impl AutoPilot {
    pub fn new(name: impl Into<String>, rng: StdRng, max_steps: u32) -> Self {
        Self {
            name: name.into(),
            rng,
            steps: 0,
            max_steps,
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn gave_up(&self) -> bool {
        self.steps > self.max_steps
    }
}

impl CommandSource for AutoPilot {
    fn player_name(&mut self) -> String {
        self.name.clone()
    }

    fn explore(&mut self) -> ExploreCommand {
        self.steps += 1;
        if self.gave_up() {
            return ExploreCommand::Quit;
        }
        if self.rng.gen_bool(SHOP_CHANCE) {
            return ExploreCommand::Shop;
        }
        match Direction::ALL.choose(&mut self.rng) {
            Some(&direction) => ExploreCommand::Move(direction),
            None => ExploreCommand::Quit,
        }
    }

    fn combat(&mut self) -> CombatAction {
        if self.rng.gen_bool(POTION_CHANCE) {
            CombatAction::UsePotion
        } else {
            CombatAction::Attack
        }
    }

    fn menu(&mut self, kind: MenuKind, options: usize) -> MenuChoice {
        if options == 0 {
            return MenuChoice::Cancel;
        }
        match kind {
            // the potion is always the first ware
            MenuKind::Shop if self.rng.gen_bool(BUY_POTION_CHANCE) => MenuChoice::Select(0),
            MenuKind::Enchantment => MenuChoice::Select(self.rng.gen_range(0..options)),
            _ => MenuChoice::Cancel,
        }
    }

    fn confirm(&mut self, _prompt: ConfirmPrompt) -> bool {
        true
    }
}
