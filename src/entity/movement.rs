//! Movement resolution shared by Pac-Man and the ghosts.
//!
//! Every step follows the same protocol: apply the full displacement, test the new
//! position against the grid, and roll back to the exact previous position if it
//! overlaps a wall. Everything here is a pure function of its inputs.

use glam::Vec2;

use crate::constants::CORNER_EPSILON;
use crate::map::direction::Direction;
use crate::map::grid::Grid;

/// A tentative move from one pixel position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub from: Vec2,
    pub to: Vec2,
}

impl Displacement {
    /// Moves `speed` pixels in `direction`, wrapping around the board edges.
    ///
    /// Leaving through the right or bottom edge re-enters at zero; leaving through the
    /// left or top edge re-enters so that the entity's far side touches the opposite edge.
    pub fn apply(from: Vec2, direction: Direction, speed: f32, size: Vec2, bounds: Vec2) -> Self {
        let mut to = from + direction.as_vec2() * speed;
        if to.x >= bounds.x {
            to.x = 0.0;
        } else if to.x < 0.0 {
            to.x = bounds.x - size.x;
        }
        if to.y >= bounds.y {
            to.y = 0.0;
        } else if to.y < 0.0 {
            to.y = bounds.y - size.y;
        }
        Self { from, to }
    }

    /// The exact inverse of [`Displacement::apply`]: the position before the move.
    pub fn undo(self) -> Vec2 {
        self.from
    }
}

/// The four corners an entity at `position` occupies, inset slightly on the far side.
pub fn corners(position: Vec2, tile_size: f32) -> [Vec2; 4] {
    let far = position + Vec2::splat(CORNER_EPSILON * tile_size);
    [
        position,
        Vec2::new(far.x, position.y),
        Vec2::new(position.x, far.y),
        far,
    ]
}

/// Whether an entity at `position` overlaps a wall.
///
/// Corners hanging past the board edge are folded back onto the opposite side, matching
/// how [`Displacement::apply`] wraps positions, so tunnels through the border stay open.
pub fn collides(grid: &Grid, position: Vec2) -> bool {
    corners(position, grid.tile_size())
        .into_iter()
        .any(|corner| grid.is_wall(grid.wrap(grid.to_tile(corner))))
}

/// Advances one step, rolling back if the step ends inside a wall.
pub fn resolve_step(grid: &Grid, position: Vec2, direction: Direction, speed: f32, size: Vec2) -> Vec2 {
    let step = Displacement::apply(position, direction, speed, size, grid.pixel_size());
    if collides(grid, step.to) {
        step.undo()
    } else {
        step.to
    }
}

/// Tests whether a step in `candidate` would lead into open space.
///
/// The probe never moves anything; the real advance happens in the entity's regular move.
pub fn probe(grid: &Grid, position: Vec2, candidate: Direction, speed: f32, size: Vec2) -> bool {
    let step = Displacement::apply(position, candidate, speed, size, grid.pixel_size());
    !collides(grid, step.to)
}
