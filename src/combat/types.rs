use crate::core::constants::{
    BURN_DAMAGE_PER_TURN, ENEMY_XP_DIVISOR, ENEMY_XP_MIN, POISON_DAMAGE_PER_TURN,
};

/// A timed debuff that ticks once per combat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffect {
    Poison,
    Burn,
    Freeze,
}

impl StatusEffect {
    /// Tick order is fixed: poison, burn, freeze.
    pub const ALL: [StatusEffect; 3] = [StatusEffect::Poison, StatusEffect::Burn, StatusEffect::Freeze];

    fn index(self) -> usize {
        match self {
            StatusEffect::Poison => 0,
            StatusEffect::Burn => 1,
            StatusEffect::Freeze => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatusEffect::Poison => "poison",
            StatusEffect::Burn => "burn",
            StatusEffect::Freeze => "freeze",
        }
    }

    /// Flat damage dealt each round the effect is active
    pub fn tick_damage(&self) -> u32 {
        match self {
            StatusEffect::Poison => POISON_DAMAGE_PER_TURN,
            StatusEffect::Burn => BURN_DAMAGE_PER_TURN,
            StatusEffect::Freeze => 0,
        }
    }
}

/// Remaining turns per effect. A zero count means the effect is not active,
/// so there is no way to observe an effect "at zero turns".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusEffects {
    turns: [u32; 3],
}

/// What a single tick did to the bearer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTick {
    /// Damage-dealing effects that fired, with their damage
    pub damage: Vec<(StatusEffect, u32)>,
    /// Freeze was active for this round
    pub frozen: bool,
    /// Effects that ran out during this tick
    pub expired: Vec<StatusEffect>,
}

impl StatusTick {
    pub fn total_damage(&self) -> u32 {
        self.damage.iter().map(|(_, d)| d).sum()
    }
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an effect's remaining turns, replacing any previous count.
    pub fn apply(&mut self, effect: StatusEffect, turns: u32) {
        self.turns[effect.index()] = turns;
    }

    pub fn remaining(&self, effect: StatusEffect) -> Option<u32> {
        match self.turns[effect.index()] {
            0 => None,
            n => Some(n),
        }
    }

    pub fn has(&self, effect: StatusEffect) -> bool {
        self.remaining(effect).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.iter().all(|&t| t == 0)
    }

    pub fn clear(&mut self) {
        self.turns = [0; 3];
    }

    /// Active effects with their remaining turns, in tick order.
    pub fn active(&self) -> impl Iterator<Item = (StatusEffect, u32)> + '_ {
        StatusEffect::ALL
            .into_iter()
            .filter_map(|e| self.remaining(e).map(|t| (e, t)))
    }

    /// Fires every active effect once and counts it down.
    pub fn tick(&mut self) -> StatusTick {
        let mut result = StatusTick::default();
        for effect in StatusEffect::ALL {
            let slot = &mut self.turns[effect.index()];
            if *slot == 0 {
                continue;
            }
            match effect {
                StatusEffect::Freeze => result.frozen = true,
                _ => result.damage.push((effect, effect.tick_damage())),
            }
            *slot -= 1;
            if *slot == 0 {
                result.expired.push(effect);
            }
        }
        result
    }
}

/// Special behavior an enemy uses when it attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ability {
    Lifesteal,
    Poison,
    Burn,
    Freeze,
    DoubleStrike,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Lifesteal => "lifesteal",
            Ability::Poison => "poison",
            Ability::Burn => "burn",
            Ability::Freeze => "freeze",
            Ability::DoubleStrike => "double strike",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    /// Not capped: lifesteal can push it past the starting value
    pub health: u32,
    pub attack_power: u32,
    /// Recorded but never subtracted from incoming damage
    pub defense: u32,
    pub gold: u32,
    pub ability: Option<Ability>,
    pub xp: u32,
    pub is_boss: bool,
    pub status_effects: StatusEffects,
}

/// XP for killing an enemy with the given starting stats.
pub fn enemy_xp_award(health: u32, attack_power: u32, defense: u32) -> u32 {
    ((health + attack_power + defense) / ENEMY_XP_DIVISOR).max(ENEMY_XP_MIN)
}

impl Enemy {
    pub fn new(
        name: impl Into<String>,
        health: u32,
        attack_power: u32,
        defense: u32,
        gold: u32,
        ability: Option<Ability>,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
            defense,
            gold,
            ability,
            xp: enemy_xp_award(health, attack_power, defense),
            is_boss: false,
            status_effects: StatusEffects::new(),
        }
    }

    pub fn boss(
        name: impl Into<String>,
        health: u32,
        attack_power: u32,
        defense: u32,
        gold: u32,
        ability: Option<Ability>,
    ) -> Self {
        Self {
            is_boss: true,
            ..Self::new(name, health, attack_power, defense, gold, ability)
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }
}
