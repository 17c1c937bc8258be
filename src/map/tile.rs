//! Tile semantics and tile-space coordinates.

use std::fmt;

use glam::Vec2;
use strum_macros::AsRefStr;

use crate::error::GridError;
use crate::map::direction::Direction;

/// The contents of a single grid cell.
///
/// The discriminants are the numeric codes level data is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[repr(u8)]
pub enum Tile {
    /// Outside the playable area. Not a wall, but never part of a path.
    Void = 0,
    Wall = 1,
    Pellet = 2,
    /// A consumed pellet, or a tile that never held one.
    Empty = 3,
    PowerPellet = 4,
}

impl Tile {
    /// Whether Pac-Man eats this tile when standing on it.
    pub const fn is_edible(self) -> bool {
        matches!(self, Tile::Pellet | Tile::PowerPellet)
    }

    /// Whether path search may route through this tile.
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Tile::Wall | Tile::Void)
    }
}

impl TryFrom<u8> for Tile {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Tile::Void),
            1 => Ok(Tile::Wall),
            2 => Ok(Tile::Pellet),
            3 => Ok(Tile::Empty),
            4 => Ok(Tile::PowerPellet),
            _ => Err(GridError::UnknownCode(code)),
        }
    }
}

/// A tile coordinate. Signed so that positions just off the grid can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TilePos {
    pub row: i32,
    pub col: i32,
}

impl TilePos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring tile one step in `direction`.
    pub const fn offset(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.row - 1, self.col),
            Direction::Down => Self::new(self.row + 1, self.col),
            Direction::Left => Self::new(self.row, self.col - 1),
            Direction::Right => Self::new(self.row, self.col + 1),
        }
    }

    /// The direction leading from `self` to an adjacent `other`, if they are adjacent.
    pub fn direction_to(self, other: TilePos) -> Option<Direction> {
        Direction::DIRECTIONS.into_iter().find(|&dir| self.offset(dir) == other)
    }

    /// Euclidean distance in tiles.
    pub fn distance(self, other: TilePos) -> f32 {
        let dx = (self.col - other.col) as f32;
        let dy = (self.row - other.row) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Pixel position of the tile's top-left corner.
    pub fn to_pixel(self, tile_size: f32) -> Vec2 {
        Vec2::new(self.col as f32 * tile_size, self.row as f32 * tile_size)
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
