//! One game from floor 1 until the player escapes, dies or quits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::character::Player;
use crate::core::config::GameConfig;
use crate::core::error::DelveError;
use crate::core::events::{EventSink, GameEvent, PlayerStatus};
use crate::core::input::{CommandSource, ConfirmPrompt, ExploreCommand};
use crate::core::progression::apply_passive_regen;
use crate::dungeon::{generate_floor, move_player, Floor, RoomOutcome};
use crate::economy::{inventory_menu, sell_menu, shop_menu};
use crate::items::{shop_catalog, Gear};
use crate::leaderboard::{Leaderboard, ScoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Escaped,
    Died,
    Quit,
}

impl SessionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SessionOutcome::Escaped => "escaped",
            SessionOutcome::Died => "died",
            SessionOutcome::Quit => "quit",
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub score: u32,
    pub floor: u32,
    pub level: u32,
}

/// All state for a single game. Owns its RNG so a seeded session replays exactly.
pub struct GameSession<R: Rng> {
    pub config: GameConfig,
    pub player: Player,
    pub floor: Floor,
    rng: R,
    catalog: Vec<Gear>,
}

/// The game RNG: seeded when `seed` is set, from entropy otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl GameSession<StdRng> {
    /// Seeds from `config.seed`, or from entropy when unset.
    pub fn from_config(config: GameConfig, player_name: impl Into<String>) -> Self {
        let rng = session_rng(config.seed);
        Self::new(config, player_name, rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Generates floor 1 and puts a fresh player on its start cell.
    pub fn new(config: GameConfig, player_name: impl Into<String>, mut rng: R) -> Self {
        let floor = generate_floor(1, config.width, config.height, &mut rng);
        let mut player = Player::new(player_name);
        player.set_position(floor.start);
        Self {
            config,
            player,
            floor,
            rng,
            catalog: shop_catalog(),
        }
    }

    pub fn status(&self) -> PlayerStatus {
        let (x, y) = self.player.position();
        PlayerStatus {
            floor: self.floor.number,
            position: (x, y),
            room_name: self
                .floor
                .get_room(x, y)
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            health: self.player.health,
            max_health: self.player.max_health,
            level: self.player.level,
            xp: self.player.xp,
            gold: self.player.gold,
            map: self.floor.render((x, y)),
        }
    }

    /// Runs the exploration loop until the game ends.
    pub fn run<I: CommandSource, E: EventSink>(&mut self, input: &mut I, events: &mut E) -> SessionSummary {
        self.announce_floor(events);
        loop {
            events.emit(GameEvent::Status(self.status()));
            match input.explore() {
                ExploreCommand::Move(direction) => {
                    let moved = move_player(
                        &mut self.floor,
                        &mut self.player,
                        direction,
                        &mut self.rng,
                        input,
                        events,
                    );
                    if moved == Ok(RoomOutcome::PlayerDied) {
                        return self.finish(SessionOutcome::Died, events);
                    }
                    apply_passive_regen(&mut self.player, events);
                    match moved {
                        Err(rejection) => events.emit(GameEvent::Rejected(rejection)),
                        Ok(RoomOutcome::ExitUnlocked) => {
                            if self.floor.number >= self.config.max_floor
                                || !input.confirm(ConfirmPrompt::Descend)
                            {
                                return self.finish(SessionOutcome::Escaped, events);
                            }
                            self.descend(events);
                        }
                        Ok(_) => {}
                    }
                }
                ExploreCommand::Shop => shop_menu(&mut self.player, &self.catalog, input, events),
                ExploreCommand::Sell => sell_menu(&mut self.player, input, events),
                ExploreCommand::Inventory => inventory_menu(&mut self.player, input, events),
                ExploreCommand::Quit => return self.finish(SessionOutcome::Quit, events),
            }
        }
    }

    fn announce_floor<E: EventSink>(&self, events: &mut E) {
        events.emit(GameEvent::FloorEntered {
            floor: self.floor.number,
        });
        if let Some(name) = &self.floor.boss_name {
            events.emit(GameEvent::BossLurks { name: name.clone() });
        }
        if let Some(weapon) = &self.floor.boss_loot {
            events.emit(GameEvent::UniqueLootPlaced {
                weapon: weapon.clone(),
            });
        }
    }

    /// Keys only fit the floor they were found on.
    fn descend<E: EventSink>(&mut self, events: &mut E) {
        self.player.discard_keys();
        let next = self.floor.number + 1;
        self.floor = generate_floor(next, self.config.width, self.config.height, &mut self.rng);
        self.player.set_position(self.floor.start);
        self.announce_floor(events);
    }

    fn finish<E: EventSink>(&self, outcome: SessionOutcome, events: &mut E) -> SessionSummary {
        let score = self.player.score();
        log::info!(
            "{} {} on floor {} at level {} with score {}",
            self.player.name,
            outcome.label(),
            self.floor.number,
            self.player.level,
            score
        );
        events.emit(GameEvent::GameOver { outcome, score });
        SessionSummary {
            outcome,
            score,
            floor: self.floor.number,
            level: self.player.level,
        }
    }
}

/// Appends the result and reports the updated standings.
pub fn record_result<L: Leaderboard, E: EventSink>(
    leaderboard: &mut L,
    name: &str,
    summary: &SessionSummary,
    events: &mut E,
) -> Result<(), DelveError> {
    leaderboard.append(&ScoreRecord::new(name, summary.score))?;
    events.emit(GameEvent::Standings {
        records: leaderboard.standings()?,
    });
    Ok(())
}

/// A whole game: ask for a name, play, record the score.
pub fn play_game<R, I, E, L>(
    config: &GameConfig,
    rng: R,
    input: &mut I,
    events: &mut E,
    leaderboard: &mut L,
) -> Result<SessionSummary, DelveError>
where
    R: Rng,
    I: CommandSource,
    E: EventSink,
    L: Leaderboard,
{
    config.validate()?;
    let name = input.player_name();
    let mut session = GameSession::new(config.clone(), name, rng);
    let summary = session.run(input, events);
    record_result(leaderboard, &session.player.name, &summary, events)?;
    Ok(summary)
}
