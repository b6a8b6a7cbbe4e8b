//! Game engine: lifecycle state machine and per-frame tick.
//!
//! `GameEngine` owns the hecs ECS world, the player, the spawn director and
//! the render differ, processes lifecycle commands, and runs one simulation
//! tick per host frame. Completely headless (no terminal dependency),
//! enabling deterministic testing.

use std::collections::VecDeque;
use std::sync::mpsc;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridsiege_core::commands::LifecycleCommand;
use gridsiege_core::components::Player;
use gridsiege_core::config::{ConfigError, GameConfig};
use gridsiege_core::enums::GamePhase;
use gridsiege_core::events::GameEvent;
use gridsiege_core::input::KeyState;
use gridsiege_core::state::{CellWrite, FrameReport, HudView, RunStats};
use gridsiege_core::types::SimTime;

use crate::score::ScoreState;
use crate::systems;
use crate::systems::render::RenderDiffer;
use crate::systems::spawn_director::SpawnDirector;

/// The game engine. Owns the ECS world and all run state.
pub struct GameEngine {
    config: GameConfig,
    world: World,
    player: Player,
    phase: GamePhase,
    time: SimTime,
    /// Host timestamp of the previous tick; `None` while not scheduled.
    last_timestamp_ms: Option<f64>,
    rng: ChaCha8Rng,
    director: SpawnDirector,
    score: ScoreState,
    differ: RenderDiffer,
    command_queue: VecDeque<LifecycleCommand>,
    command_tx: mpsc::Sender<LifecycleCommand>,
    command_rx: mpsc::Receiver<LifecycleCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    last_run: Option<RunStats>,
    best_score: u64,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl GameEngine {
    /// Create an idle engine. The config is validated and then frozen.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel();
        Self {
            world: World::new(),
            player: Player::new(config.arena.center(), config.player_max_hp),
            phase: GamePhase::default(),
            time: SimTime::default(),
            last_timestamp_ms: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            director: SpawnDirector::default(),
            score: ScoreState::default(),
            differ: RenderDiffer::new(config.arena),
            command_queue: VecDeque::new(),
            command_tx,
            command_rx,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            last_run: None,
            best_score: 0,
            config,
        }
    }

    /// Queue a lifecycle command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: LifecycleCommand) {
        self.command_queue.push_back(command);
    }

    /// A sender the host can hand to its window chrome. Commands sent on it
    /// are drained at the start of each frame, after locally queued ones.
    pub fn command_sender(&self) -> mpsc::Sender<LifecycleCommand> {
        self.command_tx.clone()
    }

    /// Host frame callback. Applies pending commands, then runs one tick if
    /// the game is playing. `now_ms` must come from a monotonic clock.
    pub fn frame(&mut self, now_ms: f64, keys: &KeyState) -> FrameReport {
        self.process_commands(now_ms);

        let mut writes = Vec::new();
        let mut hud = None;

        if self.phase == GamePhase::Playing {
            let dt_ms = match self.last_timestamp_ms {
                Some(last) => (now_ms - last).max(0.0),
                None => 0.0,
            };
            self.last_timestamp_ms = Some(now_ms);

            let (tick_writes, tick_hud) = self.run_tick(dt_ms, keys, now_ms);
            writes = tick_writes;
            hud = Some(tick_hud);
        }

        FrameReport {
            phase: self.phase,
            tick: self.time.tick,
            writes,
            hud,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Make the next rendered frame rewrite every cell.
    pub fn request_full_redraw(&mut self) {
        self.differ.invalidate();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn director(&self) -> &SpawnDirector {
        &self.director
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn differ(&self) -> &RenderDiffer {
        &self.differ
    }

    /// Current HUD values, whether or not a tick has run.
    pub fn hud(&self) -> HudView {
        systems::hud::build_hud(self.director.wave, &self.score, &self.player)
    }

    /// Statistics of the most recently finished run.
    pub fn last_run(&self) -> Option<RunStats> {
        self.last_run
    }

    /// Best score reached in this session (in memory only).
    pub fn best_score(&self) -> u64 {
        self.best_score.max(self.score.score)
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    fn process_commands(&mut self, now_ms: f64) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.command_queue.push_back(command);
        }
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now_ms);
        }
    }

    fn handle_command(&mut self, command: LifecycleCommand, now_ms: f64) {
        match (command, self.phase) {
            (_, GamePhase::Destroyed) => {
                tracing::debug!(?command, "ignoring command on destroyed engine");
            }
            (LifecycleCommand::Start, GamePhase::Idle) => {
                self.start_run(now_ms);
            }
            (LifecycleCommand::Pause, GamePhase::Playing) => {
                self.phase = GamePhase::Paused;
                self.last_timestamp_ms = None;
                self.events.push(GameEvent::PauseOverlay { visible: true });
                tracing::info!(tick = self.time.tick, "paused");
            }
            (LifecycleCommand::Resume, GamePhase::Paused) => {
                self.phase = GamePhase::Playing;
                // Time spent paused must not show up as one huge dt.
                self.last_timestamp_ms = Some(now_ms);
                self.events.push(GameEvent::PauseOverlay { visible: false });
                tracing::info!(tick = self.time.tick, "resumed");
            }
            (LifecycleCommand::Reset, phase) => {
                if phase == GamePhase::Paused {
                    self.events.push(GameEvent::PauseOverlay { visible: false });
                }
                self.start_run(now_ms);
            }
            (LifecycleCommand::Destroy, _) => {
                self.phase = GamePhase::Destroyed;
                self.last_timestamp_ms = None;
                self.world.clear();
                tracing::info!("destroyed");
            }
            (command, phase) => {
                tracing::debug!(?command, ?phase, "ignoring command");
            }
        }
    }

    /// Fresh run: player at the centre, empty world, zeroed clocks.
    fn start_run(&mut self, now_ms: f64) {
        self.best_score = self.best_score();
        self.world.clear();
        self.player = Player::new(self.config.arena.center(), self.config.player_max_hp);
        self.time = SimTime::default();
        self.director = SpawnDirector::default();
        self.score = ScoreState::default();
        self.phase = GamePhase::Playing;
        self.last_timestamp_ms = Some(now_ms);
        tracing::info!(seed = self.config.seed, "run started");
    }

    /// One simulation step, in fixed phase order.
    fn run_tick(&mut self, dt_ms: f64, keys: &KeyState, now_ms: f64) -> (Vec<CellWrite>, HudView) {
        self.time.advance(dt_ms);

        // 1. Player movement + auto-attack
        systems::movement::tick_invincibility(&mut self.player, dt_ms);
        systems::movement::move_player(&mut self.player, keys, dt_ms, &self.config);
        systems::attack::run(
            &mut self.world,
            &mut self.player,
            self.time.elapsed_ms,
            &self.config,
        );
        // 2. Hostile seek
        systems::movement::move_hostiles(
            &mut self.world,
            self.player.position,
            dt_ms,
            &self.config,
        );
        // 3. Projectile travel
        systems::movement::move_projectiles(&mut self.world, dt_ms, self.config.arena);
        // 4. Collisions
        systems::collision::run(
            &mut self.world,
            &mut self.player,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        // 5. Waves and spawning
        self.director.run(
            &mut self.world,
            &mut self.rng,
            dt_ms,
            &self.config,
            &mut self.events,
        );
        // 6. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Game over check
        if self.player.is_dead() {
            self.game_over();
        }
        // 8. Render
        let writes = self.differ.render(
            &self.world,
            &self.player,
            now_ms,
            self.config.blink_period_ms,
        );
        // 9. HUD
        let hud = self.hud();

        (writes, hud)
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.last_timestamp_ms = None;

        let stats = self.score.finalize(self.director.wave, &self.time);
        self.best_score = self.best_score.max(stats.score);
        self.last_run = Some(stats);
        self.events.push(GameEvent::ShowGameOver {
            wave: stats.wave_reached,
            score: stats.score,
        });
        tracing::info!(
            wave = stats.wave_reached,
            score = stats.score,
            kills = stats.hostiles_killed,
            survived_ms = stats.survived_ms,
            "game over"
        );
    }
}
