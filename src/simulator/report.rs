//! Simulation report generation.

use std::collections::BTreeMap;

use crate::core::game_state::SessionOutcome;

/// What one simulated game came to.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub outcome: Option<SessionOutcome>,
    pub final_floor: u32,
    pub final_level: u32,
    pub score: u32,
    pub kills: u32,
    pub boss_kills: u32,
    pub traps_sprung: u32,
    pub potions_used: u32,
    pub steps: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub escaped: u32,
    pub died: u32,
    /// Runs where the autopilot used up its step budget
    pub gave_up: u32,

    pub avg_final_floor: f64,
    pub avg_final_level: f64,
    pub avg_score: f64,
    pub avg_kills: f64,
    pub avg_potions_used: f64,
    pub deepest_floor: u32,

    pub floor_distribution: BTreeMap<u32, u32>,
    pub run_stats: Vec<RunStats>,
}

fn mean(runs: &[RunStats], field: impl Fn(&RunStats) -> u32) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(|r| field(r) as f64).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let count = |outcome: SessionOutcome| {
            runs.iter().filter(|r| r.outcome == Some(outcome)).count() as u32
        };

        let mut floor_distribution = BTreeMap::new();
        for run in &runs {
            *floor_distribution.entry(run.final_floor).or_insert(0) += 1;
        }

        Self {
            num_runs: runs.len() as u32,
            escaped: count(SessionOutcome::Escaped),
            died: count(SessionOutcome::Died),
            gave_up: count(SessionOutcome::Quit),
            avg_final_floor: mean(&runs, |r| r.final_floor),
            avg_final_level: mean(&runs, |r| r.final_level),
            avg_score: mean(&runs, |r| r.score),
            avg_kills: mean(&runs, |r| r.kills),
            avg_potions_used: mean(&runs, |r| r.potions_used),
            deepest_floor: runs.iter().map(|r| r.final_floor).max().unwrap_or(0),
            floor_distribution,
            run_stats: runs,
        }
    }

    pub fn escape_rate(&self) -> f64 {
        self.rate(self.escaped)
    }

    pub fn death_rate(&self) -> f64 {
        self.rate(self.died)
    }

    fn rate(&self, n: u32) -> f64 {
        if self.num_runs == 0 {
            0.0
        } else {
            n as f64 / self.num_runs as f64
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} escaped, {} died, {} gave up\n\n",
            self.num_runs, self.escaped, self.died, self.gave_up
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Escape Rate:         {:.1}%\n",
            self.escape_rate() * 100.0
        ));
        report.push_str(&format!(
            "  Death Rate:          {:.1}%\n\n",
            self.death_rate() * 100.0
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Floor:     {:.1}\n", self.avg_final_floor));
        report.push_str(&format!("  Deepest Floor:       {}\n", self.deepest_floor));
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Score:           {:.0}\n", self.avg_score));
        report.push_str(&format!("  Avg Kills:           {:.1}\n", self.avg_kills));
        report.push_str(&format!(
            "  Avg Potions Used:    {:.1}\n\n",
            self.avg_potions_used
        ));

        report.push_str("── FINAL FLOOR ──────────────────────────────────────────────────\n");
        for (floor, reached) in &self.floor_distribution {
            let pct = self.rate(*reached) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Floor {:2}: {:>5.1}% {}\n", floor, pct, bar));
        }

        report
    }
}
