//! Ghost entity implementation.
//!
//! Ghosts pick a target tile every tick (Pac-Man when close enough, a patrol corner
//! otherwise, their home while frightened), ask the path search for the first step
//! towards it and then move like any other [`Mobile`] entity.

use std::time::Duration;

use glam::Vec2;
use tracing::trace;

use crate::constants::{FRIGHTENED_DURATION, GHOST_SHRINK};
use crate::entity::pathfinding::next_direction_towards;
use crate::entity::r#trait::Mobile;
use crate::entity::targeting::{Pursuit, Target};
use crate::map::direction::Direction;
use crate::map::grid::Grid;
use crate::map::tile::TilePos;

/// What a ghost is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostMode {
    /// Dangerous to Pac-Man.
    Normal,
    /// Vulnerable until the given logical time.
    Frightened { until: Duration },
    /// Eaten and out of play. `respawn_ready` is raised by the respawn timer.
    Eliminated { respawn_ready: bool },
}

/// A ghost that chases Pac-Man around the grid.
#[derive(Debug, Clone)]
pub struct Ghost {
    position: Vec2,
    direction: Direction,
    speed: f32,
    size: Vec2,
    home: TilePos,
    pursuit: Pursuit,
    target: Target,
    mode: GhostMode,
    /// Bumped on every mode change so that timers scheduled earlier can tell they are stale.
    epoch: u32,
}

impl Ghost {
    /// Creates a ghost standing on its home tile, facing right.
    pub fn new(home: TilePos, tile_size: f32, speed: f32, pursuit: Pursuit) -> Self {
        Self {
            position: home.to_pixel(tile_size),
            direction: Direction::Right,
            speed,
            size: Vec2::splat(tile_size - GHOST_SHRINK),
            home,
            pursuit,
            target: Target::Home(home),
            mode: GhostMode::Normal,
            epoch: 0,
        }
    }

    pub fn home(&self) -> TilePos {
        self.home
    }

    pub fn set_home(&mut self, home: TilePos) {
        self.home = home;
    }

    pub fn pursuit(&self) -> &Pursuit {
        &self.pursuit
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn mode(&self) -> GhostMode {
        self.mode
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn is_frightened(&self) -> bool {
        matches!(self.mode, GhostMode::Frightened { .. })
    }

    /// Whether the ghost is on the board (not eaten).
    pub fn is_active(&self) -> bool {
        !matches!(self.mode, GhostMode::Eliminated { .. })
    }

    pub fn is_respawn_ready(&self) -> bool {
        matches!(self.mode, GhostMode::Eliminated { respawn_ready: true })
    }

    /// Advances to the next patrol corner.
    pub fn advance_patrol(&mut self) {
        self.pursuit.advance_patrol();
        trace!(patrol_index = self.pursuit.patrol_index(), "Ghost switched patrol corner");
    }

    /// Re-evaluates the target against Pac-Man's current tile.
    pub fn update_target(&mut self, grid: &Grid, pacman: TilePos) -> Target {
        if self.is_active() {
            let retreat = self.is_frightened().then_some(self.home);
            self.target = self.pursuit.select(grid, self.tile(grid), pacman, retreat);
        }
        self.target
    }

    /// Enters frightened mode until `now + FRIGHTENED_DURATION`.
    ///
    /// A ghost that is already frightened keeps its original expiry, and an eaten ghost
    /// cannot be frightened. Returns whether the mode changed, in which case the caller
    /// schedules the expiry tagged with the new [`Ghost::epoch`].
    pub fn frighten(&mut self, now: Duration) -> bool {
        if self.mode != GhostMode::Normal {
            return false;
        }
        self.mode = GhostMode::Frightened {
            until: now + FRIGHTENED_DURATION,
        };
        self.epoch += 1;
        true
    }

    /// Ends frightened mode if `epoch` still matches the frightening that scheduled it.
    pub fn calm(&mut self, epoch: u32) -> bool {
        if epoch != self.epoch || !self.is_frightened() {
            return false;
        }
        self.mode = GhostMode::Normal;
        self.epoch += 1;
        true
    }

    /// Takes the ghost out of play after Pac-Man caught it.
    pub fn eliminate(&mut self) {
        self.mode = GhostMode::Eliminated { respawn_ready: false };
        self.epoch += 1;
    }

    /// Raised by the respawn timer. Ignored unless `epoch` matches the elimination.
    pub fn mark_respawn_ready(&mut self, epoch: u32) -> bool {
        if epoch != self.epoch || self.is_active() {
            return false;
        }
        self.mode = GhostMode::Eliminated { respawn_ready: true };
        true
    }

    /// Puts the ghost back on its home tile, in normal mode.
    pub fn reset(&mut self, tile_size: f32) {
        self.position = self.home.to_pixel(tile_size);
        self.direction = Direction::Right;
        self.target = Target::Home(self.home);
        self.mode = GhostMode::Normal;
        self.epoch += 1;
    }

    /// Picks this tick's direction: the first step towards the target, adjusted so the
    /// ghost does not try to turn across a tile boundary it is straddling.
    fn choose_direction(&mut self, grid: &Grid) {
        let from = self.tile(grid);
        let far = self.far_edge_tile(grid);

        let mut candidate = next_direction_towards(grid, from, self.target.tile()).unwrap_or(self.direction);
        if from.row != far.row && candidate.is_horizontal() {
            candidate = Direction::Up;
        }
        if from.col != far.col && candidate == Direction::Up {
            candidate = Direction::Left;
        }

        if !self.try_turn(grid, candidate) {
            trace!(%from, wanted = candidate.as_ref(), kept = self.direction.as_ref(), "Ghost turn blocked");
        }
    }
}

impl Mobile for Ghost {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn attempt_move(&mut self, grid: &Grid) {
        if !self.is_active() {
            return;
        }
        self.choose_direction(grid);
        if !self.advance(grid) {
            trace!(tile = %self.tile(grid), direction = self.direction.as_ref(), "Ghost blocked");
        }
    }
}
