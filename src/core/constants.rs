// Floor layout
pub const DEFAULT_FLOOR_WIDTH: usize = 10;
pub const DEFAULT_FLOOR_HEIGHT: usize = 10;
pub const DEFAULT_MAX_FLOOR: u32 = 18;
pub const BASE_ENEMIES_PER_FLOOR: u32 = 5;
pub const TRAPS_PER_FLOOR: usize = 3;
pub const TREASURES_PER_FLOOR: usize = 3;
pub const ENCHANTMENT_ROOMS_PER_FLOOR: usize = 2;
pub const BLACKSMITHS_PER_FLOOR: usize = 1;

// Enemy scaling
pub const EARLY_FLOOR_MAX: u32 = 3; // floors 1-3 scale gently and drop bonus gold
pub const FINAL_TIER_FLOOR: u32 = 14; // from here on only the strongest archetype spawns
pub const FLOORS_PER_TIER: u32 = 3;
pub const EARLY_GOLD_BONUS: u32 = 5;
pub const ENEMY_GOLD_BASE_MIN: u32 = 15;
pub const ENEMY_GOLD_BASE_MAX: u32 = 30;
pub const ENEMY_XP_DIVISOR: u32 = 15;
pub const ENEMY_XP_MIN: u32 = 5;

// Boss scaling
pub const BOSS_HP_PER_FLOOR: u32 = 10;
pub const BOSS_DEFENSE_FLOOR_DIVISOR: u32 = 2;
pub const BOSS_GOLD_PER_FLOOR: u32 = 5;
pub const BOSS_LOOT_DROP_CHANCE: f64 = 0.5;

// Player
pub const PLAYER_START_HEALTH: u32 = 100;
pub const PLAYER_START_ATTACK: u32 = 10;
pub const XP_PER_LEVEL: u32 = 20; // threshold is level * XP_PER_LEVEL
pub const LEVEL_UP_MAX_HEALTH: u32 = 10;
pub const LEVEL_UP_ATTACK: u32 = 3;
pub const GOLD_FINDER_LEVEL: u32 = 3;
pub const GOLD_FINDER_BONUS: u32 = 5;
pub const PASSIVE_REGEN_LEVEL: u32 = 5;
pub const PASSIVE_REGEN_PER_MOVE: u32 = 1;
pub const POTION_HEAL: u32 = 20;

// Combat
pub const POISON_DAMAGE_PER_TURN: u32 = 3;
pub const BURN_DAMAGE_PER_TURN: u32 = 4;
pub const ABILITY_STATUS_TURNS: u32 = 3;
pub const FREEZE_TURNS: u32 = 1;
pub const WEAPON_EFFECT_TURNS: u32 = 3;
pub const DEFEND_DAMAGE_REDUCTION: u32 = 5;
pub const DOUBLE_STRIKE_CHANCE: f64 = 0.25;
pub const LIFESTEAL_DIVISOR: u32 = 3;

// Room hazards and rewards (inclusive ranges)
pub const TREASURE_GOLD_MIN: u32 = 20;
pub const TREASURE_GOLD_MAX: u32 = 50;
pub const TRAP_DAMAGE_MIN: u32 = 10;
pub const TRAP_DAMAGE_MAX: u32 = 30;

// Economy
pub const POTION_PRICE: u32 = 10;
pub const BLACKSMITH_UPGRADE_COST: u32 = 50;
pub const BLACKSMITH_DAMAGE_BONUS: u32 = 3;
pub const ENCHANTMENT_COST: u32 = 30;
pub const SELL_PRICE_DIVISOR: u32 = 2;

// Scoring
pub const SCORE_PER_LEVEL: u32 = 100;
pub const SCORE_PER_ITEM: u32 = 10;
