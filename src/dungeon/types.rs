//! Floor data structures: the grid, its rooms and what they hold.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::combat::types::Enemy;
use crate::core::input::Direction;
use crate::items::{Item, ItemKind, Weapon};

// Fixed lore names. A cell takes one of these once its content has been dealt with.
pub const GLITTERING_VAULT: &str = "Glittering Vault";
pub const BOOBY_TRAPPED_PASSAGE: &str = "Booby-Trapped Passage";
pub const CURSED_HALL: &str = "Cursed Hall";
pub const SEALED_GATE: &str = "Sealed Gate";
pub const HIDDEN_NICHE: &str = "Hidden Niche";
pub const SILENT_CHAMBER: &str = "Silent Chamber";
pub const ENCHANTMENT_CHAMBER: &str = "Enchantment Chamber";
pub const BLACKSMITH_FORGE: &str = "Blacksmith Forge";

const FLAVOR_ADJECTIVES: [&str; 14] = [
    "Collapsed",
    "Echoing",
    "Gloomy",
    "Withered",
    "Fungal",
    "Whispering",
    "Icy",
    "Dust-choked",
    "Ancient",
    "Haunted",
    "Buried",
    "Broken",
    "Wretched",
    "Twisting",
];

const FLAVOR_NOUNS: [&str; 14] = [
    "Passage", "Fissure", "Grotto", "Vault", "Sanctum", "Shrine", "Cellar", "Refuge", "Gallery",
    "Crypt", "Atrium", "Chapel", "Workshop", "Quarters",
];

/// Lore text shown when entering a cell with a fixed lore name.
pub fn lore_text(name: &str) -> Option<&'static str> {
    let text = match name {
        GLITTERING_VAULT => "The air shimmers with unseen magic. Ancient riches may lie within.",
        BOOBY_TRAPPED_PASSAGE => "This corridor is riddled with pressure plates and crumbled bones.",
        CURSED_HALL => "The shadows shift... something watches from the dark.",
        SEALED_GATE => "Massive stone doors sealed by arcane runes. It might be the only way out.",
        HIDDEN_NICHE => {
            "A hollow carved into the wall, forgotten by time. Something valuable glints inside."
        }
        SILENT_CHAMBER => "Dust covers everything. It appears long abandoned.",
        ENCHANTMENT_CHAMBER => "Faded runes on the floor still hum with a faint glow.",
        BLACKSMITH_FORGE => "The anvil is cold now, but the smell of hot iron lingers.",
        _ => return None,
    };
    Some(text)
}

/// Random "Adjective Noun" name for a freshly carved cell.
pub fn flavor_name<R: Rng>(rng: &mut R) -> String {
    let adjective = FLAVOR_ADJECTIVES.choose(rng).copied().unwrap_or("Silent");
    let noun = FLAVOR_NOUNS.choose(rng).copied().unwrap_or("Chamber");
    format!("{adjective} {noun}")
}

/// What a carved cell holds.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomContent {
    Empty,
    Enemy(Enemy),
    Item(Item),
    Weapon(Weapon),
    Trap,
    Treasure,
    Enchantment,
    Blacksmith,
    Exit,
}

impl RoomContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, RoomContent::Empty)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomContent::Empty => "empty",
            RoomContent::Enemy(_) => "enemy",
            RoomContent::Item(_) => "item",
            RoomContent::Weapon(_) => "weapon",
            RoomContent::Trap => "trap",
            RoomContent::Treasure => "treasure",
            RoomContent::Enchantment => "enchantment",
            RoomContent::Blacksmith => "blacksmith",
            RoomContent::Exit => "exit",
        }
    }
}

/// A single carved cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub content: RoomContent,
    pub name: String,
    pub visited: bool,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            content: RoomContent::Empty,
            name: name.into(),
            visited: false,
        }
    }

    /// Marks the content as dealt with and gives the cell its lore name.
    pub fn consume(&mut self, lore_name: &str) {
        self.content = RoomContent::Empty;
        self.name = lore_name.to_string();
    }
}

/// One generated dungeon level. `None` cells were never carved and cannot be entered.
#[derive(Debug, Clone)]
pub struct Floor {
    pub number: u32,
    pub width: usize,
    pub height: usize,
    /// Indexed `[y][x]`
    grid: Vec<Vec<Option<Room>>>,
    pub start: (usize, usize),
    pub exit_position: Option<(usize, usize)>,
    pub boss_name: Option<String>,
    /// Unique weapon placed this floor, if the boss dropped one
    pub boss_loot: Option<String>,
}

impl Floor {
    /// An uncarved floor with every cell `None`.
    pub fn new(number: u32, width: usize, height: usize) -> Self {
        Self {
            number,
            width,
            height,
            grid: vec![vec![None; width]; height],
            start: (width / 2, height / 2),
            exit_position: None,
            boss_name: None,
            boss_loot: None,
        }
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get_room(&self, x: usize, y: usize) -> Option<&Room> {
        self.grid.get(y).and_then(|row| row.get(x)).and_then(|c| c.as_ref())
    }

    pub fn get_room_mut(&mut self, x: usize, y: usize) -> Option<&mut Room> {
        self.grid
            .get_mut(y)
            .and_then(|row| row.get_mut(x))
            .and_then(|c| c.as_mut())
    }

    pub fn is_carved(&self, x: usize, y: usize) -> bool {
        self.get_room(x, y).is_some()
    }

    /// Opens a cell up as an empty room. No-op outside the grid.
    pub fn carve(&mut self, (x, y): (usize, usize), name: impl Into<String>) {
        if let Some(cell) = self.grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = Some(Room::new(name));
        }
    }

    /// Puts content into an already carved cell. Returns false if the cell is not carved.
    pub fn place(&mut self, (x, y): (usize, usize), content: RoomContent) -> bool {
        match self.get_room_mut(x, y) {
            Some(room) => {
                room.content = content;
                true
            }
            None => false,
        }
    }

    /// The carved neighbor in `direction`, if there is one.
    pub fn neighbor(&self, (x, y): (usize, usize), direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx as isize)?;
        let ny = y.checked_add_signed(dy as isize)?;
        self.is_carved(nx, ny).then_some((nx, ny))
    }

    /// Carved cells in row-major order.
    pub fn carved_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for (y, row) in self.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    positions.push((x, y));
                }
            }
        }
        positions
    }

    pub fn carved_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Positions whose content matches `pred`.
    pub fn positions_where(&self, pred: impl Fn(&RoomContent) -> bool) -> Vec<(usize, usize)> {
        self.carved_positions()
            .into_iter()
            .filter(|&(x, y)| self.get_room(x, y).is_some_and(|r| pred(&r.content)))
            .collect()
    }

    pub fn remaining_enemies(&self) -> usize {
        self.positions_where(|c| matches!(c, RoomContent::Enemy(_)))
            .len()
    }

    /// One-character view of a cell for map displays.
    pub fn glyph_at(&self, (x, y): (usize, usize), player: (usize, usize)) -> char {
        if (x, y) == player {
            return '@';
        }
        let Some(room) = self.get_room(x, y) else {
            return '#';
        };
        if !room.visited {
            return '?';
        }
        match &room.content {
            RoomContent::Empty => '.',
            RoomContent::Enemy(enemy) if enemy.is_boss => 'B',
            RoomContent::Enemy(_) => 'E',
            RoomContent::Item(item) if item.kind == ItemKind::Key => 'K',
            RoomContent::Item(_) => '!',
            RoomContent::Weapon(_) => '/',
            RoomContent::Trap => '^',
            RoomContent::Treasure => '$',
            RoomContent::Enchantment => '*',
            RoomContent::Blacksmith => '&',
            RoomContent::Exit => 'X',
        }
    }

    /// The whole floor as rows of glyphs.
    pub fn render(&self, player: (usize, usize)) -> Vec<String> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.glyph_at((x, y), player)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_floor() -> Floor {
        let mut floor = Floor::new(1, 3, 3);
        floor.carve((1, 1), "Icy Crypt");
        floor.carve((2, 1), "Gloomy Cellar");
        floor.carve((1, 0), "Buried Shrine");
        floor
    }

    #[test]
    fn test_new_floor_is_uncarved() {
        let floor = Floor::new(1, 4, 3);
        assert_eq!(floor.carved_count(), 0);
        assert!(floor.get_room(0, 0).is_none());
        assert!(floor.get_room(10, 10).is_none());
        assert_eq!(floor.start, (2, 1));
    }

    #[test]
    fn test_carve_and_place() {
        let mut floor = small_floor();
        assert_eq!(floor.carved_count(), 3);
        assert!(floor.place((2, 1), RoomContent::Trap));
        assert!(!floor.place((0, 0), RoomContent::Trap));
        assert_eq!(floor.get_room(2, 1).map(|r| &r.content), Some(&RoomContent::Trap));
        assert_eq!(floor.positions_where(|c| *c == RoomContent::Trap), vec![(2, 1)]);
    }

    #[test]
    fn test_neighbor_respects_carving_and_bounds() {
        let floor = small_floor();
        assert_eq!(floor.neighbor((1, 1), Direction::Right), Some((2, 1)));
        assert_eq!(floor.neighbor((1, 1), Direction::Up), Some((1, 0)));
        assert_eq!(floor.neighbor((1, 1), Direction::Left), None);
        assert_eq!(floor.neighbor((1, 0), Direction::Up), None);
        assert_eq!(floor.neighbor((2, 1), Direction::Right), None);
    }

    #[test]
    fn test_consume_sets_lore_name() {
        let mut room = Room::new("Icy Crypt");
        room.content = RoomContent::Treasure;
        room.consume(GLITTERING_VAULT);
        assert!(room.content.is_empty());
        assert_eq!(room.name, "Glittering Vault");
        assert!(lore_text(&room.name).is_some());
    }

    #[test]
    fn test_lore_text_only_for_fixed_names() {
        assert_eq!(
            lore_text(SILENT_CHAMBER),
            Some("Dust covers everything. It appears long abandoned.")
        );
        assert_eq!(lore_text("Icy Crypt"), None);
    }

    #[test]
    fn test_flavor_name_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let name = flavor_name(&mut rng);
            let (adjective, noun) = name.split_once(' ').unwrap();
            assert!(FLAVOR_ADJECTIVES.contains(&adjective));
            assert!(FLAVOR_NOUNS.contains(&noun));
        }
    }

    #[test]
    fn test_glyphs() {
        let mut floor = small_floor();
        floor.place((2, 1), RoomContent::Exit);
        assert_eq!(floor.glyph_at((1, 1), (1, 1)), '@');
        assert_eq!(floor.glyph_at((0, 0), (1, 1)), '#');
        assert_eq!(floor.glyph_at((2, 1), (1, 1)), '?');
        if let Some(room) = floor.get_room_mut(2, 1) {
            room.visited = true;
        }
        assert_eq!(floor.glyph_at((2, 1), (1, 1)), 'X');
        assert_eq!(floor.render((1, 1)), vec!["#?#", "#@X", "###"]);
    }
}
