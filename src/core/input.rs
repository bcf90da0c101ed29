//! Player commands and the input collaborator.
//!
//! Front ends turn raw text into tokens and tokens into commands with the `parse_*`
//! helpers below. Anything that does not parse is the front end's business: it re-prompts.
//! The engine only range-checks menu indices, since it alone knows the menu length.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// (dx, dy) with y growing downwards
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreCommand {
    Move(Direction),
    Shop,
    Inventory,
    Quit,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Defend,
    UsePotion,
    Flee,
}

/// Which numbered menu is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Shop,
    Sell,
    Inventory,
    Enchantment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based option index
    Select(usize),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    Reforge,
    Descend,
}

/// Input collaborator. Every call blocks until the player has answered.
pub trait CommandSource {
    fn player_name(&mut self) -> String;
    fn explore(&mut self) -> ExploreCommand;
    fn combat(&mut self) -> CombatAction;
    fn menu(&mut self, kind: MenuKind, options: usize) -> MenuChoice;
    fn confirm(&mut self, prompt: ConfirmPrompt) -> bool;
}

pub fn parse_explore(token: &str) -> Option<ExploreCommand> {
    let command = match token.trim().to_ascii_lowercase().as_str() {
        "1" | "left" | "a" => ExploreCommand::Move(Direction::Left),
        "2" | "right" | "d" => ExploreCommand::Move(Direction::Right),
        "3" | "up" | "w" => ExploreCommand::Move(Direction::Up),
        "4" | "down" | "s" => ExploreCommand::Move(Direction::Down),
        "5" | "shop" => ExploreCommand::Shop,
        "6" | "inventory" | "i" => ExploreCommand::Inventory,
        "7" | "quit" | "q" => ExploreCommand::Quit,
        "8" | "sell" => ExploreCommand::Sell,
        _ => return None,
    };
    Some(command)
}

pub fn parse_combat(token: &str) -> Option<CombatAction> {
    let action = match token.trim().to_ascii_lowercase().as_str() {
        "1" | "attack" => CombatAction::Attack,
        "2" | "defend" => CombatAction::Defend,
        "3" | "potion" => CombatAction::UsePotion,
        "4" | "flee" => CombatAction::Flee,
        _ => return None,
    };
    Some(action)
}

/// Menus are numbered from 1 for the player.
pub fn parse_menu(token: &str) -> Option<MenuChoice> {
    let token = token.trim().to_ascii_lowercase();
    match token.as_str() {
        "" | "c" | "cancel" | "x" => Some(MenuChoice::Cancel),
        _ => match token.parse::<usize>() {
            Ok(n) if n >= 1 => Some(MenuChoice::Select(n - 1)),
            _ => None,
        },
    }
}

pub fn parse_confirm(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Replays a fixed list of tokens. Unparseable tokens are skipped the same way a
/// terminal would re-prompt; once the script runs dry every prompt gets the
/// most conservative answer (quit, flee, cancel, no).
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    name: String,
    tokens: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Whitespace-separated tokens; `#` starts a comment that runs to the end of the line.
    pub fn from_script(name: impl Into<String>, script: &str) -> Self {
        let tokens: Vec<&str> = script
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace)
            .collect();
        Self::new(name, tokens)
    }

    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> io::Result<Self> {
        let script = fs::read_to_string(path)?;
        Ok(Self::from_script(name, &script))
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    fn next_parsed<T>(&mut self, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        while let Some(token) = self.tokens.pop_front() {
            if let Some(value) = parse(&token) {
                return Some(value);
            }
            log::debug!("scripted input skipped unparseable token {token:?}");
        }
        None
    }
}

impl CommandSource for ScriptedInput {
    fn player_name(&mut self) -> String {
        self.name.clone()
    }

    fn explore(&mut self) -> ExploreCommand {
        self.next_parsed(parse_explore)
            .unwrap_or(ExploreCommand::Quit)
    }

    fn combat(&mut self) -> CombatAction {
        self.next_parsed(parse_combat).unwrap_or(CombatAction::Flee)
    }

    fn menu(&mut self, _kind: MenuKind, _options: usize) -> MenuChoice {
        self.next_parsed(parse_menu).unwrap_or(MenuChoice::Cancel)
    }

    fn confirm(&mut self, _prompt: ConfirmPrompt) -> bool {
        self.next_parsed(parse_confirm).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explore_numbers_and_words() {
        assert_eq!(parse_explore("1"), Some(ExploreCommand::Move(Direction::Left)));
        assert_eq!(parse_explore(" Down "), Some(ExploreCommand::Move(Direction::Down)));
        assert_eq!(parse_explore("5"), Some(ExploreCommand::Shop));
        assert_eq!(parse_explore("7"), Some(ExploreCommand::Quit));
        assert_eq!(parse_explore("sell"), Some(ExploreCommand::Sell));
        assert_eq!(parse_explore("9"), None);
        assert_eq!(parse_explore("dance"), None);
    }

    #[test]
    fn test_parse_combat() {
        assert_eq!(parse_combat("1"), Some(CombatAction::Attack));
        assert_eq!(parse_combat("defend"), Some(CombatAction::Defend));
        assert_eq!(parse_combat("3"), Some(CombatAction::UsePotion));
        assert_eq!(parse_combat("4"), Some(CombatAction::Flee));
        assert_eq!(parse_combat("0"), None);
    }

    #[test]
    fn test_parse_menu_is_one_based() {
        assert_eq!(parse_menu("1"), Some(MenuChoice::Select(0)));
        assert_eq!(parse_menu("12"), Some(MenuChoice::Select(11)));
        assert_eq!(parse_menu("c"), Some(MenuChoice::Cancel));
        assert_eq!(parse_menu(""), Some(MenuChoice::Cancel));
        assert_eq!(parse_menu("0"), None);
        assert_eq!(parse_menu("-3"), None);
    }

    #[test]
    fn test_parse_confirm() {
        assert_eq!(parse_confirm("Y"), Some(true));
        assert_eq!(parse_confirm("no"), Some(false));
        assert_eq!(parse_confirm("maybe"), None);
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Up.offset(), (0, -1));
    }

    #[test]
    fn test_scripted_input_skips_garbage() {
        let mut input = ScriptedInput::new("Ada", ["bogus", "2", "attack"]);
        assert_eq!(input.explore(), ExploreCommand::Move(Direction::Right));
        assert_eq!(input.combat(), CombatAction::Attack);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_input_exhausted_defaults() {
        let mut input = ScriptedInput::new("Ada", Vec::<String>::new());
        assert_eq!(input.player_name(), "Ada");
        assert_eq!(input.explore(), ExploreCommand::Quit);
        assert_eq!(input.combat(), CombatAction::Flee);
        assert_eq!(input.menu(MenuKind::Shop, 3), MenuChoice::Cancel);
        assert!(!input.confirm(ConfirmPrompt::Descend));
    }

    #[test]
    fn test_from_script_strips_comments() {
        let mut input = ScriptedInput::from_script("Ada", "1 2 # move twice\n# whole line\n attack\n");
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.explore(), ExploreCommand::Move(Direction::Left));
    }
}
