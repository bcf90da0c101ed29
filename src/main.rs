mod ui;

use std::path::PathBuf;
use std::process;

use delve::core::config::GameConfig;
use delve::core::error::DelveError;
use delve::core::events::EventSink;
use delve::core::game_state::{play_game, session_rng};
use delve::core::input::{CommandSource, ScriptedInput};
use delve::leaderboard::{FileLeaderboard, Leaderboard};
use delve::utils::build_info;

use ui::event_view::{print_standings, TerminalView};
use ui::terminal_input::TerminalInput;

const SCRIPT_PLAYER_NAME: &str = "Scripted";

/// Command-line overrides layered on top of ~/.delve/config.json.
#[derive(Debug, Default)]
struct Cli {
    seed: Option<u64>,
    width: Option<usize>,
    height: Option<usize>,
    floors: Option<u32>,
    script: Option<PathBuf>,
    name: Option<String>,
    show_leaderboard: bool,
    reset_leaderboard: bool,
    init_config: bool,
    verbose: bool,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(floors) = self.floors {
            config.max_floor = floors;
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'delve --help' for usage.");
            process::exit(1);
        }
    };

    ui::logger::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("delve: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DelveError> {
    if cli.init_config {
        let path = GameConfig::write_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = GameConfig::load();
    cli.apply(&mut config);
    config.validate()?;

    let mut leaderboard = FileLeaderboard::new(config.leaderboard_path()?);
    if cli.reset_leaderboard {
        leaderboard.reset()?;
        println!("Leaderboard cleared.");
        return Ok(());
    }
    if cli.show_leaderboard {
        print_standings(&leaderboard.standings()?);
        return Ok(());
    }

    let mut view = TerminalView::new();
    match &cli.script {
        Some(path) => {
            let name = cli.name.as_deref().unwrap_or(SCRIPT_PLAYER_NAME);
            let mut input = ScriptedInput::from_file(name, path)?;
            play(&config, &mut input, &mut view, &mut leaderboard)
        }
        None => {
            println!("{}", build_info::version_line());
            let mut input = TerminalInput::stdin();
            play(&config, &mut input, &mut view, &mut leaderboard)
        }
    }
}

fn play<I: CommandSource, E: EventSink>(
    config: &GameConfig,
    input: &mut I,
    view: &mut E,
    leaderboard: &mut FileLeaderboard,
) -> Result<(), DelveError> {
    play_game(config, session_rng(config.seed), input, view, leaderboard)?;
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut cli = Cli::default();
    let mut i = 1;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--seed" => cli.seed = Some(value(args, &mut i, flag)?),
            "--width" => cli.width = Some(value(args, &mut i, flag)?),
            "--height" => cli.height = Some(value(args, &mut i, flag)?),
            "--floors" => cli.floors = Some(value(args, &mut i, flag)?),
            "--script" => cli.script = Some(value::<String>(args, &mut i, flag)?.into()),
            "--name" => cli.name = Some(value(args, &mut i, flag)?),
            "--leaderboard" => cli.show_leaderboard = true,
            "--reset-leaderboard" => cli.reset_leaderboard = true,
            "--init-config" => cli.init_config = true,
            "--verbose" => cli.verbose = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("Unknown option: {other}")),
        }
        i += 1;
    }

    Ok(cli)
}

/// Parses the argument after `flag` and advances past it.
fn value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T, String> {
    let raw = args
        .get(*i + 1)
        .ok_or_else(|| format!("{flag} needs a value"))?;
    *i += 1;
    raw.parse()
        .map_err(|_| format!("invalid value for {flag}: {raw}"))
}

fn print_help() {
    println!("Delve - a turn-based dungeon crawl\n");
    println!("Usage: delve [options]\n");
    println!("Options:");
    println!("  --seed N             Fixed RNG seed for a reproducible dungeon");
    println!("  --width N            Floor width (default 10)");
    println!("  --height N           Floor height (default 10)");
    println!("  --floors N           Deepest floor; clearing it wins the game (default 18)");
    println!("  --script FILE        Read commands from FILE instead of the keyboard");
    println!("  --name NAME          Player name when running a script");
    println!("  --leaderboard        Show the leaderboard and exit");
    println!("  --reset-leaderboard  Clear the leaderboard and exit");
    println!("  --init-config        Write the default config to ~/.delve/config.json");
    println!("  --verbose            Log diagnostics to stderr");
    println!("  --version            Show version information");
    println!("  --help               Show this help message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("delve")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_overrides() {
        let cli = parse_args(&args(&["--seed", "7", "--width", "6", "--floors", "2", "--verbose"])).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.width, Some(6));
        assert_eq!(cli.floors, Some(2));
        assert!(cli.verbose);

        let mut config = GameConfig::default();
        cli.apply(&mut config);
        assert_eq!((config.width, config.height, config.max_floor), (6, 10, 2));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--width"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_parse_script_path() {
        let cli = parse_args(&args(&["--script", "run.txt", "--name", "Ada"])).unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("run.txt")));
        assert_eq!(cli.name.as_deref(), Some("Ada"));
    }
}
