//! Target selection for ghosts.

use crate::map::grid::Grid;
use crate::map::tile::TilePos;

/// The tile a ghost is currently heading for, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Pac-Man is within range; chase Pac-Man's current tile.
    Pacman(TilePos),
    /// Pac-Man is out of range; head for a patrol corner.
    Patrol { index: usize, tile: TilePos },
    /// Frightened; retreat to the home tile.
    Home(TilePos),
}

impl Target {
    pub fn tile(self) -> TilePos {
        match self {
            Target::Pacman(tile) | Target::Home(tile) | Target::Patrol { tile, .. } => tile,
        }
    }
}

/// A ghost's pursuit parameters: how far it can see and which corner it patrols.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pursuit {
    /// Distance in tiles at or below which the ghost chases Pac-Man directly.
    pub range: f32,
    patrol_index: usize,
}

impl Pursuit {
    pub fn new(range: f32, patrol_index: usize) -> Self {
        Self {
            range,
            patrol_index: patrol_index % 4,
        }
    }

    pub fn patrol_index(&self) -> usize {
        self.patrol_index
    }

    /// Moves on to the next patrol corner.
    pub fn advance_patrol(&mut self) {
        self.patrol_index = (self.patrol_index + 1) % 4;
    }

    pub fn in_range(&self, from: TilePos, pacman: TilePos) -> bool {
        from.distance(pacman) <= self.range
    }

    /// Picks the target for this tick.
    ///
    /// `retreat` overrides everything else; it is set while the ghost is frightened.
    pub fn select(&self, grid: &Grid, from: TilePos, pacman: TilePos, retreat: Option<TilePos>) -> Target {
        if let Some(home) = retreat {
            return Target::Home(home);
        }

        if self.in_range(from, pacman) {
            Target::Pacman(pacman)
        } else {
            Target::Patrol {
                index: self.patrol_index,
                tile: grid.patrol_corners()[self.patrol_index],
            }
        }
    }
}
