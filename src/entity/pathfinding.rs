//! Breadth-first path search over the tile grid.
//!
//! Ghosts re-run the search from scratch every tick and only act on its first step.
//! That costs O(tiles) per ghost per tick, which is fine for boards a few dozen tiles
//! across; there is no path cache to invalidate.

use pathfinding::prelude::bfs;
use smallvec::SmallVec;
use tracing::trace;

use crate::map::direction::Direction;
use crate::map::grid::Grid;
use crate::map::tile::TilePos;

/// Direction returned when the destination cannot be reached.
pub const FALLBACK_DIRECTION: Direction = Direction::Down;

/// Walkable neighbours of `tile`, in [`Direction::SEARCH_ORDER`].
fn neighbours(grid: &Grid, tile: TilePos) -> SmallVec<[TilePos; 4]> {
    Direction::SEARCH_ORDER
        .into_iter()
        .map(|direction| tile.offset(direction))
        .filter(|&next| grid.is_passable(next))
        .collect()
}

/// Finds a shortest path from `from` to `dest`, both ends included.
///
/// Neighbours are expanded left, right, up, down, so among equally short paths the
/// same one is always returned. The grid is only read.
pub fn shortest_path(grid: &Grid, from: TilePos, dest: TilePos) -> Option<Vec<TilePos>> {
    bfs(&from, |&tile| neighbours(grid, tile), |&tile| tile == dest)
}

/// Returns the first step of a shortest path from `from` to `dest`.
///
/// Returns `None` when already standing on `dest`, in which case the caller keeps its
/// current direction. An unreachable destination yields [`FALLBACK_DIRECTION`].
pub fn next_direction_towards(grid: &Grid, from: TilePos, dest: TilePos) -> Option<Direction> {
    if from == dest {
        return None;
    }

    let step = shortest_path(grid, from, dest)
        .and_then(|path| path.get(1).copied())
        .and_then(|next| from.direction_to(next));

    match step {
        Some(direction) => Some(direction),
        None => {
            trace!(%from, %dest, "Destination unreachable, using fallback direction");
            Some(FALLBACK_DIRECTION)
        }
    }
}
