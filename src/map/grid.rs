//! The tile grid entities move on.

use glam::Vec2;

use crate::constants::EARLY_TURN_INSET;
use crate::error::GridError;
use crate::map::tile::{Tile, TilePos};

/// A rectangular grid of tiles.
///
/// The grid is the single source of truth for what is walkable. It is mutated in place
/// as pellets are eaten, but its dimensions never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
    tile_size: f32,
    /// Pellets and power pellets still on the board.
    remaining: usize,
}

impl Grid {
    /// Builds a grid from rows of tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is not a positive finite number, if there are
    /// no tiles or if the rows differ in length.
    pub fn new(rows: Vec<Vec<Tile>>, tile_size: f32) -> Result<Self, GridError> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(GridError::InvalidTileSize);
        }

        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: tiles.len(),
                });
            }
        }

        let row_count = rows.len();
        let tiles: Vec<Tile> = rows.into_iter().flatten().collect();
        let remaining = tiles.iter().filter(|tile| tile.is_edible()).count();

        Ok(Self {
            tiles,
            rows: row_count,
            cols,
            tile_size,
            remaining,
        })
    }

    /// Builds a grid from numeric tile codes (`0` void, `1` wall, `2` pellet, `3` empty, `4` power pellet).
    pub fn from_codes<R: AsRef<[u8]>>(codes: &[R], tile_size: f32) -> Result<Self, GridError> {
        let rows = codes
            .iter()
            .map(|row| row.as_ref().iter().map(|&code| Tile::try_from(code)).collect())
            .collect::<Result<Vec<Vec<Tile>>, _>>()?;
        Self::new(rows, tile_size)
    }

    /// Restores every tile from `template`, which must have the same dimensions.
    pub fn reset(&mut self, template: &Grid) {
        debug_assert_eq!((self.rows, self.cols), (template.rows, template.cols));
        self.clone_from(template);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// The size of the whole board, in pixels. Entities wrap around at these bounds.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32) * self.tile_size
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        self.contains(pos).then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    /// Returns the tile at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: TilePos) -> Option<Tile> {
        self.index(pos).map(|index| self.tiles[index])
    }

    /// Returns the tile at `pos`. Anything outside the grid reads as a wall.
    pub fn tile_at(&self, pos: TilePos) -> Tile {
        self.get(pos).unwrap_or(Tile::Wall)
    }

    /// Overwrites a tile. Returns `false` (and changes nothing) outside the grid.
    pub fn set_tile(&mut self, pos: TilePos, tile: Tile) -> bool {
        let Some(index) = self.index(pos) else {
            return false;
        };

        let previous = std::mem::replace(&mut self.tiles[index], tile);
        match (previous.is_edible(), tile.is_edible()) {
            (true, false) => self.remaining -= 1,
            (false, true) => self.remaining += 1,
            _ => {}
        }
        true
    }

    /// Whether an entity may not overlap this tile. Out-of-bounds tiles are walls.
    pub fn is_wall(&self, pos: TilePos) -> bool {
        self.tile_at(pos) == Tile::Wall
    }

    /// Whether path search may step onto this tile.
    pub fn is_passable(&self, pos: TilePos) -> bool {
        self.get(pos).is_some_and(Tile::is_traversable)
    }

    /// Eats whatever pellet lies at `pos`, leaving the tile empty.
    ///
    /// Returns the eaten tile, or `None` if there was nothing to eat.
    pub fn consume(&mut self, pos: TilePos) -> Option<Tile> {
        let tile = self.get(pos)?;
        if !tile.is_edible() {
            return None;
        }
        self.set_tile(pos, Tile::Empty);
        Some(tile)
    }

    pub fn remaining_pellets(&self) -> usize {
        self.remaining
    }

    /// The tile containing a pixel position.
    pub fn to_tile(&self, position: Vec2) -> TilePos {
        TilePos::new(
            (position.y / self.tile_size).floor() as i32,
            (position.x / self.tile_size).floor() as i32,
        )
    }

    /// The tile under the far (right/bottom) edge of an entity at `position`.
    ///
    /// When this differs from [`Grid::to_tile`] on an axis, the entity straddles two tiles on it.
    pub fn far_edge_tile(&self, position: Vec2) -> TilePos {
        let far = position * EARLY_TURN_INSET + Vec2::splat(self.tile_size);
        self.to_tile(far)
    }

    /// Folds a tile coordinate back onto the grid, treating both axes as circular.
    pub fn wrap(&self, pos: TilePos) -> TilePos {
        TilePos::new(pos.row.rem_euclid(self.rows as i32), pos.col.rem_euclid(self.cols as i32))
    }

    /// The four tiles ghosts patrol between, one near each corner of the board.
    pub fn patrol_corners(&self) -> [TilePos; 4] {
        let last_row = self.rows as i32 - 2;
        let last_col = self.cols as i32 - 2;
        [
            TilePos::new(1, 1),
            TilePos::new(last_row, 1),
            TilePos::new(1, last_col),
            TilePos::new(last_row, last_col),
        ]
    }

    /// Iterates over every tile with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (TilePos, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(index, &tile)| {
            let pos = TilePos::new((index / self.cols) as i32, (index % self.cols) as i32);
            (pos, tile)
        })
    }
}
