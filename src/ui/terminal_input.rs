//! Reads commands from stdin, one line at a time, re-prompting until a line parses.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use delve::core::input::{
    parse_combat, parse_confirm, parse_explore, parse_menu, CombatAction, CommandSource,
    ConfirmPrompt, ExploreCommand, MenuChoice, MenuKind,
};

const DEFAULT_NAME: &str = "Adventurer";

pub struct TerminalInput<R: BufRead> {
    reader: R,
}

impl TerminalInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// `None` once stdin is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{} ", prompt.bold());
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("failed to read input: {e}");
                None
            }
        }
    }

    fn prompt_until<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        loop {
            let line = self.read_line(prompt)?;
            if let Some(value) = parse(&line) {
                return Some(value);
            }
            println!("{}", "Invalid choice. Try again.".red());
        }
    }
}

impl<R: BufRead> CommandSource for TerminalInput<R> {
    fn player_name(&mut self) -> String {
        match self.read_line("Enter your name:") {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_NAME.to_string(),
        }
    }

    fn explore(&mut self) -> ExploreCommand {
        println!(
            "  1) Left  2) Right  3) Up  4) Down  5) Shop  6) Inventory  7) Quit  8) Sell"
        );
        self.prompt_until(">", parse_explore)
            .unwrap_or(ExploreCommand::Quit)
    }

    fn combat(&mut self) -> CombatAction {
        println!("  1) Attack  2) Defend  3) Use Potion  4) Flee");
        self.prompt_until("Action:", parse_combat)
            .unwrap_or(CombatAction::Flee)
    }

    fn menu(&mut self, kind: MenuKind, options: usize) -> MenuChoice {
        let title = match kind {
            MenuKind::Shop => "Buy",
            MenuKind::Sell => "Sell",
            MenuKind::Inventory => "Use",
            MenuKind::Enchantment => "Enchant with",
        };
        let prompt = format!("{title} (1-{options}, c to cancel):");
        self.prompt_until(&prompt, parse_menu)
            .unwrap_or(MenuChoice::Cancel)
    }

    fn confirm(&mut self, prompt: ConfirmPrompt) -> bool {
        let question = match prompt {
            ConfirmPrompt::Reforge => "Reforge your weapon? (y/n)",
            ConfirmPrompt::Descend => "Descend to the next floor? (y/n)",
        };
        self.prompt_until(question, parse_confirm).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve::core::input::Direction;

    fn input(text: &str) -> TerminalInput<&[u8]> {
        TerminalInput::new(text.as_bytes())
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut t = input("jump\n9\nleft\n");
        assert_eq!(t.explore(), ExploreCommand::Move(Direction::Left));
    }

    #[test]
    fn test_closed_stdin_falls_back() {
        let mut t = input("");
        assert_eq!(t.explore(), ExploreCommand::Quit);
        assert_eq!(t.combat(), CombatAction::Flee);
        assert_eq!(t.menu(MenuKind::Shop, 3), MenuChoice::Cancel);
        assert!(!t.confirm(ConfirmPrompt::Descend));
        assert_eq!(t.player_name(), DEFAULT_NAME);
    }

    #[test]
    fn test_player_name_trimmed() {
        let mut t = input("  Ada  \n");
        assert_eq!(t.player_name(), "Ada");
    }
}
