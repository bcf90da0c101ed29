//! Balance simulator CLI.
//!
//! Plays many headless games and reports how they ended.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs, 18 floors
//!   cargo run --bin simulate -- -n 100 -f 5    # 100 runs, 5 floors
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use delve::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║               DELVE BALANCE SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Floors:         {}", config.max_floor);
    println!("  Floor Size:     {}x{}", config.width, config.height);
    println!("  Max Steps:      {}", config.max_steps_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    print!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-f" | "--floors" => {
                if i + 1 < args.len() {
                    config.max_floor = args[i + 1].parse().unwrap_or(config.max_floor);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--size" => {
                if i + 1 < args.len() {
                    if let Ok(size) = args[i + 1].parse::<usize>() {
                        config.width = size.max(2);
                        config.height = size.max(2);
                    }
                    i += 1;
                }
            }
            "--steps" => {
                if i + 1 < args.len() {
                    config.max_steps_per_run = args[i + 1].parse().unwrap_or(5_000);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick(3);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config.max_floor = config.max_floor.max(1);
    config
}

fn print_help() {
    println!("Delve Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of games to play (default: 1000)");
    println!("    -f, --floors <F>    Deepest floor before a run counts as escaped (default: 18)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --size <N>          Floor width and height (default: 10)");
    println!("    --steps <N>         Explore commands before a run gives up (default: 5000)");
    println!("    -v, --verbose       Print every run");
    println!("    --quick             Quick check (100 runs, 3 floors)");
    println!("    -h, --help          Show this help");
}
