use std::fs;
use std::path::Path;

use smallvec::SmallVec;

use crate::constants::{CLASSIC_BOARD, TILE_SIZE};
use crate::error::{GameResult, GridError};
use crate::map::grid::Grid;
use crate::map::parser::MapTileParser;
use crate::map::tile::{Tile, TilePos};

/// An immutable level layout together with its start positions.
///
/// A live [`Grid`] is copied from the template at level start and re-copied from it
/// whenever the level is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTemplate {
    grid: Grid,
    pacman_start: TilePos,
    ghost_homes: SmallVec<[TilePos; 4]>,
}

impl LevelTemplate {
    /// Creates a template, checking that every start position is on a walkable tile.
    ///
    /// A template without ghost homes is valid; no ghosts will be spawned on it.
    pub fn new(grid: Grid, pacman_start: TilePos, ghost_homes: impl IntoIterator<Item = TilePos>) -> Result<Self, GridError> {
        let ghost_homes: SmallVec<[TilePos; 4]> = ghost_homes.into_iter().collect();

        for &start in std::iter::once(&pacman_start).chain(ghost_homes.iter()) {
            if !grid.contains(start) {
                return Err(GridError::OutOfBounds(start));
            }
            if !grid.is_passable(start) {
                return Err(GridError::BlockedStart(start));
            }
        }

        Ok(Self {
            grid,
            pacman_start,
            ghost_homes,
        })
    }

    /// The built-in board.
    ///
    /// Unlike boards read from text, the classic layout has a pellet under every start marker.
    pub fn classic() -> GameResult<Self> {
        let mut template = MapTileParser::parse_board(&CLASSIC_BOARD, TILE_SIZE)?;
        let starts: SmallVec<[TilePos; 4]> =
            std::iter::once(template.pacman_start).chain(template.ghost_homes.iter().copied()).collect();
        for start in starts {
            template.grid.set_tile(start, Tile::Pellet);
        }
        Ok(template)
    }

    /// Reads a character board from `path`, one row per line.
    pub fn load(path: impl AsRef<Path>, tile_size: f32) -> GameResult<Self> {
        let contents = fs::read_to_string(path)?;
        let lines: Vec<&str> = contents.lines().collect();
        MapTileParser::parse_board(&lines, tile_size)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pacman_start(&self) -> TilePos {
        self.pacman_start
    }

    pub fn ghost_homes(&self) -> &[TilePos] {
        &self.ghost_homes
    }

    /// A fresh live grid for this level.
    pub fn instantiate(&self) -> Grid {
        self.grid.clone()
    }
}
