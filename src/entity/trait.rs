//! Entity trait for common movement functionality.
//!
//! This module defines a trait that captures the shared behavior between
//! Pac-Man and the ghosts: where they are, which way they face, and how
//! a single tick of movement is resolved against the grid.

use glam::Vec2;

use crate::entity::movement;
use crate::map::direction::Direction;
use crate::map::grid::Grid;
use crate::map::tile::TilePos;

/// Trait defining common functionality for entities that move over the grid.
///
/// Implementors only supply their state accessors and [`Mobile::attempt_move`];
/// stepping, turning and tile lookups are shared.
pub trait Mobile {
    /// Top-left corner of the entity, in pixels.
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    fn direction(&self) -> Direction;

    fn set_direction(&mut self, direction: Direction);

    /// Pixels moved per tick.
    fn speed(&self) -> f32;

    /// Width and height, in pixels.
    fn size(&self) -> Vec2;

    /// Performs this entity's movement for one tick.
    fn attempt_move(&mut self, grid: &Grid);

    /// The tile containing the entity's top-left corner.
    fn tile(&self, grid: &Grid) -> TilePos {
        grid.to_tile(self.position())
    }

    /// The tile under the entity's far edge. See [`Grid::far_edge_tile`].
    fn far_edge_tile(&self, grid: &Grid) -> TilePos {
        grid.far_edge_tile(self.position())
    }

    /// Moves one step in the current direction. Returns whether the entity actually moved.
    fn advance(&mut self, grid: &Grid) -> bool {
        let current = self.position();
        let next = movement::resolve_step(grid, current, self.direction(), self.speed(), self.size());
        self.set_position(next);
        next != current
    }

    /// Switches to `candidate` if a step that way leads into open space.
    ///
    /// The position is never changed. Returns whether the entity now faces `candidate`.
    fn try_turn(&mut self, grid: &Grid, candidate: Direction) -> bool {
        if candidate == self.direction() {
            return true;
        }
        if movement::probe(grid, self.position(), candidate, self.speed(), self.size()) {
            self.set_direction(candidate);
            true
        } else {
            false
        }
    }

    /// Checks if this entity is on the same tile as another.
    fn shares_tile_with(&self, other: &dyn Mobile, grid: &Grid) -> bool {
        self.tile(grid) == other.tile(grid)
    }
}
