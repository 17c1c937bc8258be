//! This module contains the main game logic and state.
//!
//! [`Game`] owns the live grid, Pac-Man, the ghosts and the timer queue. Each call to
//! [`Game::tick`] runs one simulation step in a fixed order: due timers, Pac-Man's move,
//! pellet consumption, ghost moves (in list order, reacting to Pac-Man's updated
//! position) and finally collisions.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::constants::{
    BASE_PURSUIT_RANGE, DEFAULT_GHOST_COUNT, DEFAULT_LIVES, DEFAULT_PACMAN_SPEED, DYING_DURATION, FRIGHTENED_DURATION,
    GHOST_RESPAWN_DELAY, GHOST_SCORE, PATROL_ROTATION_INTERVAL, PELLET_SCORE, POWER_PELLET_SCORE,
};
use crate::entity::ghost::Ghost;
use crate::entity::pacman::Pacman;
use crate::entity::r#trait::Mobile;
use crate::entity::targeting::Pursuit;
use crate::map::direction::Direction;
use crate::map::grid::Grid;
use crate::map::level::LevelTemplate;
use crate::map::tile::{Tile, TilePos};

use self::events::GameEvent;
use self::state::GamePhase;
use self::timer::{Scheduler, TimerKind};

pub mod events;
pub mod state;
pub mod timer;

/// Tunable parameters for a game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub ghost_count: usize,
    /// Pixels per tick. Ghosts move at half this speed.
    pub pacman_speed: f32,
    pub lives: u32,
    /// Seeds the ghosts' initial patrol corners.
    pub seed: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            ghost_count: DEFAULT_GHOST_COUNT,
            pacman_speed: DEFAULT_PACMAN_SPEED,
            lives: DEFAULT_LIVES,
            seed: 0,
        }
    }
}

/// The `Game` struct is the main entry point for the simulation.
pub struct Game {
    template: LevelTemplate,
    grid: Grid,
    pacman: Pacman,
    ghosts: Vec<Ghost>,
    scheduler: Scheduler,
    phase: GamePhase,
    score: u32,
    lives: u32,
    level: u32,
    settings: GameSettings,
    rng: SmallRng,
    /// Bumped on every reset; timers from an older generation are ignored.
    generation: u32,
    tick_count: u64,
    now: Duration,
}

impl Game {
    /// Starts a game on `template`, spawning ghosts as described by `settings`.
    pub fn new(template: LevelTemplate, settings: GameSettings) -> Self {
        let mut rng = SmallRng::seed_from_u64(settings.seed);
        let ghosts = spawn_ghosts(&template, &settings, &mut rng);
        Self::build(template, settings, ghosts, rng)
    }

    /// Starts a game with an explicit set of ghosts, ignoring `settings.ghost_count`.
    pub fn with_ghosts(template: LevelTemplate, settings: GameSettings, ghosts: Vec<Ghost>) -> Self {
        let rng = SmallRng::seed_from_u64(settings.seed);
        Self::build(template, settings, ghosts, rng)
    }

    fn build(template: LevelTemplate, settings: GameSettings, ghosts: Vec<Ghost>, rng: SmallRng) -> Self {
        let grid = template.instantiate();
        let pacman = Pacman::new(template.pacman_start(), grid.tile_size(), settings.pacman_speed);

        let mut game = Self {
            template,
            grid,
            pacman,
            ghosts,
            scheduler: Scheduler::new(),
            phase: GamePhase::Playing,
            score: 0,
            lives: settings.lives,
            level: 1,
            settings,
            rng,
            generation: 0,
            tick_count: 0,
            now: Duration::ZERO,
        };
        game.schedule_patrols(Duration::ZERO);

        info!(
            rows = game.grid.rows(),
            cols = game.grid.cols(),
            ghosts = game.ghosts.len(),
            pellets = game.grid.remaining_pellets(),
            "Game created"
        );
        game
    }

    /// Runs one simulation step at logical time `now` and returns what happened.
    ///
    /// Ticks are ignored unless the game is [`GamePhase::Playing`].
    pub fn tick(&mut self, now: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.phase.is_running() {
            return events;
        }
        self.now = now;
        self.tick_count += 1;

        self.fire_timers(now);

        if self.pacman.is_respawn_pending() {
            self.finish_death(now, &mut events);
            return events;
        }
        // Nothing moves during the death spin.
        if !self.pacman.is_alive() {
            return events;
        }

        self.pacman.tick_animation(now);
        let pacman_from = self.pacman.tile(&self.grid);
        self.pacman.attempt_move(&self.grid);
        self.consume(now, &mut events);
        if self.phase.is_finished() {
            return events;
        }

        let pacman_tile = self.pacman.tile(&self.grid);
        let tile_size = self.grid.tile_size();
        let mut ghosts_from = Vec::with_capacity(self.ghosts.len());
        for (index, ghost) in self.ghosts.iter_mut().enumerate() {
            if ghost.is_respawn_ready() {
                ghost.reset(tile_size);
                debug!(ghost = index, home = %ghost.home(), "Ghost respawned");
                events.push(GameEvent::GhostRespawned { ghost: index });
            }
            ghosts_from.push(ghost.tile(&self.grid));
            ghost.update_target(&self.grid, pacman_tile);
            ghost.attempt_move(&self.grid);
        }

        self.resolve_collisions(now, pacman_from, &ghosts_from, &mut events);
        events
    }

    /// Buffers Pac-Man's next direction.
    pub fn request_direction(&mut self, direction: Direction) {
        self.pacman.request_direction(direction);
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            info!("Paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            info!("Resumed");
        }
    }

    /// Starts over on the current level with full lives and no score.
    pub fn restart(&mut self, now: Duration) {
        self.score = 0;
        self.lives = self.settings.lives;
        self.phase = GamePhase::Playing;
        self.reset_round(now);
        info!(lives = self.lives, "Game restarted");
    }

    /// Moves on to `template`, keeping score and lives.
    pub fn next_level(&mut self, template: LevelTemplate, now: Duration) {
        let homes = template.ghost_homes();
        if !homes.is_empty() {
            for (index, ghost) in self.ghosts.iter_mut().enumerate() {
                ghost.set_home(homes[index % homes.len()]);
            }
        }

        self.grid = template.instantiate();
        self.template = template;
        self.level += 1;
        self.phase = GamePhase::Playing;
        self.reset_round(now);
        info!(level = self.level, pellets = self.grid.remaining_pellets(), "Level started");
    }

    /// Restores the grid from the template and puts everyone back on their start tile.
    ///
    /// Every timer scheduled before the reset becomes stale and is dropped when it comes due.
    fn reset_round(&mut self, now: Duration) {
        self.generation += 1;
        self.grid.reset(self.template.grid());

        let tile_size = self.grid.tile_size();
        self.pacman.reset(self.template.pacman_start(), tile_size);
        for ghost in &mut self.ghosts {
            ghost.reset(tile_size);
        }
        self.schedule_patrols(now);
        debug!(generation = self.generation, "Round reset");
    }

    fn schedule_patrols(&mut self, now: Duration) {
        for ghost in 0..self.ghosts.len() {
            self.scheduler
                .schedule(now + PATROL_ROTATION_INTERVAL, self.generation, TimerKind::PatrolRotation { ghost });
        }
    }

    fn fire_timers(&mut self, now: Duration) {
        while let Some(timer) = self.scheduler.pop_due(now) {
            if timer.generation != self.generation {
                debug!(kind = ?timer.kind, generation = timer.generation, "Ignoring timer from an earlier round");
                continue;
            }

            match timer.kind {
                TimerKind::FrightenedExpired { ghost, epoch } => {
                    if let Some(g) = self.ghosts.get_mut(ghost) {
                        if g.calm(epoch) {
                            debug!(ghost, "Ghost no longer frightened");
                        }
                    }
                }
                TimerKind::PatrolRotation { ghost } => {
                    if let Some(g) = self.ghosts.get_mut(ghost) {
                        g.advance_patrol();
                        self.scheduler
                            .schedule(timer.due + PATROL_ROTATION_INTERVAL, self.generation, timer.kind);
                    }
                }
                TimerKind::GhostRespawn { ghost, epoch } => {
                    if let Some(g) = self.ghosts.get_mut(ghost) {
                        if g.mark_respawn_ready(epoch) {
                            debug!(ghost, "Ghost ready to respawn");
                        }
                    }
                }
                TimerKind::DyingFinished => {
                    self.pacman.finish_dying();
                }
            }
        }
    }

    fn consume(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        let tile = self.pacman.tile(&self.grid);
        match self.grid.consume(tile) {
            Some(Tile::Pellet) => {
                self.score += PELLET_SCORE;
                events.push(GameEvent::PelletEaten { tile });
            }
            Some(Tile::PowerPellet) => {
                self.score += POWER_PELLET_SCORE;
                events.push(GameEvent::PowerPelletEaten { tile });
                self.frighten_ghosts(now);
            }
            _ => return,
        }

        if self.grid.remaining_pellets() == 0 {
            self.phase = GamePhase::LevelComplete;
            info!(score = self.score, level = self.level, "All pellets cleared");
            events.push(GameEvent::AllPelletsCleared);
        }
    }

    fn frighten_ghosts(&mut self, now: Duration) {
        for (index, ghost) in self.ghosts.iter_mut().enumerate() {
            if ghost.frighten(now) {
                self.scheduler.schedule(
                    now + FRIGHTENED_DURATION,
                    self.generation,
                    TimerKind::FrightenedExpired {
                        ghost: index,
                        epoch: ghost.epoch(),
                    },
                );
                debug!(ghost = index, "Ghost frightened");
            }
        }
    }

    /// Applies the outcome of every ghost that met Pac-Man this tick.
    ///
    /// A ghost meets Pac-Man when it ends the tick on Pac-Man's tile, or when the two swapped
    /// tiles while passing each other head-on. Frightened ghosts are all eaten; any number
    /// of dangerous ghosts cost a single life.
    fn resolve_collisions(
        &mut self,
        now: Duration,
        pacman_from: TilePos,
        ghosts_from: &[TilePos],
        events: &mut Vec<GameEvent>,
    ) {
        let pacman_to = self.pacman.tile(&self.grid);
        let mut caught = false;
        for (index, ghost) in self.ghosts.iter_mut().enumerate() {
            if !ghost.is_active() {
                continue;
            }
            let swapped = ghosts_from.get(index).is_some_and(|&from| {
                from == pacman_to && ghost.tile(&self.grid) == pacman_from && from != pacman_from
            });
            if !swapped && !ghost.shares_tile_with(&self.pacman, &self.grid) {
                continue;
            }

            if ghost.is_frightened() {
                ghost.eliminate();
                self.score += GHOST_SCORE;
                self.scheduler.schedule(
                    now + GHOST_RESPAWN_DELAY,
                    self.generation,
                    TimerKind::GhostRespawn {
                        ghost: index,
                        epoch: ghost.epoch(),
                    },
                );
                debug!(ghost = index, "Ghost eaten");
                events.push(GameEvent::GhostEaten { ghost: index });
            } else {
                caught = true;
            }
        }

        if caught {
            self.lives = self.lives.saturating_sub(1);
            self.pacman.start_dying(now);
            self.scheduler
                .schedule(now + DYING_DURATION, self.generation, TimerKind::DyingFinished);
            info!(lives_left = self.lives, tile = %self.pacman.tile(&self.grid), "Pac-Man caught");
            events.push(GameEvent::PacmanDied { lives_left: self.lives });
        }
    }

    fn finish_death(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            info!(score = self.score, level = self.level, "Game over");
            events.push(GameEvent::GameOver { score: self.score });
        } else {
            self.reset_round(now);
        }
    }

    /// A uniformly random direction from the game's seeded generator.
    pub fn random_direction(&mut self) -> Direction {
        Direction::DIRECTIONS[self.rng.random_range(0..Direction::DIRECTIONS.len())]
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn template(&self) -> &LevelTemplate {
        &self.template
    }

    pub fn pacman(&self) -> &Pacman {
        &self.pacman
    }

    pub fn pacman_mut(&mut self) -> &mut Pacman {
        &mut self.pacman
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Logical time of the last tick.
    pub fn now(&self) -> Duration {
        self.now
    }
}

/// Creates the configured ghosts, cycling through the template's ghost homes.
///
/// Ghost `i` sees `BASE_PURSUIT_RANGE + i` tiles and starts on a random patrol corner.
fn spawn_ghosts(template: &LevelTemplate, settings: &GameSettings, rng: &mut SmallRng) -> Vec<Ghost> {
    let homes = template.ghost_homes();
    if homes.is_empty() {
        if settings.ghost_count > 0 {
            warn!(requested = settings.ghost_count, "Level has no ghost homes, spawning no ghosts");
        }
        return Vec::new();
    }

    let tile_size = template.grid().tile_size();
    (0..settings.ghost_count)
        .map(|index| {
            let range = BASE_PURSUIT_RANGE + index as f32;
            let patrol = rng.random_range(0..4) + 1;
            let pursuit = Pursuit::new(range, patrol);
            Ghost::new(homes[index % homes.len()], tile_size, settings.pacman_speed / 2.0, pursuit)
        })
        .collect()
}
