//! Pac-Man entity implementation.
//!
//! Pac-Man moves in the current direction every tick and switches to the buffered
//! requested direction as soon as a probe shows it leads into open space.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;

use crate::constants::{ANIMATION_FRAME_INTERVAL, DYING_DURATION, DYING_TURNS, PACMAN_FRAME_COUNT};
use crate::entity::r#trait::Mobile;
use crate::map::direction::Direction;
use crate::map::grid::Grid;
use crate::map::tile::TilePos;

/// Pac-Man's life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacmanState {
    Alive,
    /// Spinning after being caught; nothing moves until the dying timer fires.
    Dying { since: Duration },
    /// The spin is over; the game decides between a new round and game over.
    RespawnPending,
}

/// The player character.
#[derive(Debug, Clone)]
pub struct Pacman {
    position: Vec2,
    direction: Direction,
    requested: Direction,
    speed: f32,
    size: Vec2,
    state: PacmanState,
    /// Chomp animation frame, `1..=PACMAN_FRAME_COUNT`.
    frame: u8,
    next_frame_at: Duration,
}

impl Pacman {
    /// Creates Pac-Man on `start`, facing and requesting right.
    pub fn new(start: TilePos, tile_size: f32, speed: f32) -> Self {
        Self {
            position: start.to_pixel(tile_size),
            direction: Direction::Right,
            requested: Direction::Right,
            speed,
            size: Vec2::splat(tile_size),
            state: PacmanState::Alive,
            frame: 1,
            next_frame_at: Duration::ZERO,
        }
    }

    /// Buffers a direction change, applied once it becomes possible.
    pub fn request_direction(&mut self, direction: Direction) {
        self.requested = direction;
    }

    pub fn state(&self) -> PacmanState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == PacmanState::Alive
    }

    pub fn is_respawn_pending(&self) -> bool {
        self.state == PacmanState::RespawnPending
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Rotation of the death spin at `now`, in radians. Zero unless dying.
    pub fn rotation(&self, now: Duration) -> f32 {
        match self.state {
            PacmanState::Dying { since } => {
                let progress = (now.saturating_sub(since).as_secs_f32() / DYING_DURATION.as_secs_f32()).min(1.0);
                progress * DYING_TURNS * TAU
            }
            _ => 0.0,
        }
    }

    /// Advances the chomp animation.
    pub fn tick_animation(&mut self, now: Duration) {
        if !self.is_alive() || now < self.next_frame_at {
            return;
        }
        self.frame = if self.frame >= PACMAN_FRAME_COUNT { 1 } else { self.frame + 1 };
        self.next_frame_at = now + ANIMATION_FRAME_INTERVAL;
    }

    pub fn start_dying(&mut self, now: Duration) {
        self.state = PacmanState::Dying { since: now };
    }

    /// Called by the dying timer. Returns `false` if Pac-Man was not dying.
    pub fn finish_dying(&mut self) -> bool {
        if !matches!(self.state, PacmanState::Dying { .. }) {
            return false;
        }
        self.state = PacmanState::RespawnPending;
        true
    }

    /// Puts Pac-Man back on `start`, alive and facing right.
    pub fn reset(&mut self, start: TilePos, tile_size: f32) {
        self.position = start.to_pixel(tile_size);
        self.direction = Direction::Right;
        self.requested = Direction::Right;
        self.state = PacmanState::Alive;
        self.frame = 1;
    }
}

impl Mobile for Pacman {
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
        if !self.is_alive() {
            return;
        }
        if self.requested != self.direction {
            self.try_turn(grid, self.requested);
        }
        self.advance(grid);
    }
}
