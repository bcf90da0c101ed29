//! Main simulation runner.
//!
//! Every run is a full [`GameSession`] driven by an [`AutoPilot`]. Statistics are
//! tallied from the emitted [`GameEvent`]s rather than by peeking at game state.

use super::autopilot::AutoPilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::events::{EventSink, GameEvent};
use crate::core::game_state::{session_rng, GameSession};

/// Autopilot rolls use a separate stream so its choices don't shift the dungeon.
const PILOT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let stats = simulate_single_run(config, seed);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?}, Floor {}, Level {}, Score {}, Kills {}, Steps {}",
                run_idx + 1,
                config.num_runs,
                stats.outcome,
                stats.final_floor,
                stats.final_level,
                stats.score,
                stats.kills,
                stats.steps
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Plays one game to the end. The same seed always plays the same game.
pub fn simulate_single_run(config: &SimConfig, seed: Option<u64>) -> RunStats {
    let game_rng = session_rng(seed);
    let pilot_rng = session_rng(seed.map(|seed| seed ^ PILOT_SEED_SALT));

    let mut session = GameSession::new(config.game_config(), "AutoPilot", game_rng);
    let mut pilot = AutoPilot::new("AutoPilot", pilot_rng, config.max_steps_per_run);
    let mut tally = SimStats::default();
    let summary = session.run(&mut pilot, &mut tally);

    RunStats {
        outcome: Some(summary.outcome),
        final_floor: summary.floor,
        final_level: summary.level,
        score: summary.score,
        kills: tally.kills,
        boss_kills: tally.boss_kills,
        traps_sprung: tally.traps_sprung,
        potions_used: tally.potions_used,
        steps: pilot.steps(),
    }
}

/// Counts the events the report cares about.
#[derive(Debug, Default)]
struct SimStats {
    kills: u32,
    boss_kills: u32,
    traps_sprung: u32,
    potions_used: u32,
    fighting_boss: bool,
}

impl EventSink for SimStats {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::EncounterStarted { is_boss, .. } => self.fighting_boss = is_boss,
            GameEvent::EnemyDefeated { .. } => {
                self.kills += 1;
                if self.fighting_boss {
                    self.boss_kills += 1;
                }
            }
            GameEvent::TrapSprung { .. } => self.traps_sprung += 1,
            GameEvent::PotionUsed { .. } => self.potions_used += 1,
            _ => {}
        }
    }
}
