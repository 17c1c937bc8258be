//! Map parsing functionality for converting character board layouts into level templates.

use smallvec::SmallVec;
use tracing::debug;

use crate::error::{GameResult, ParseError};
use crate::map::grid::Grid;
use crate::map::level::LevelTemplate;
use crate::map::tile::{Tile, TilePos};

/// Start markers that may appear on a board alongside regular tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    PacmanStart,
    GhostHome,
}

/// Parser for converting character boards into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a tile and an optional start marker.
    ///
    /// Marked tiles are empty underneath.
    pub fn parse_character(c: char) -> Result<(Tile, Option<Marker>), ParseError> {
        match c {
            '#' => Ok((Tile::Wall, None)),
            '.' => Ok((Tile::Pellet, None)),
            'o' => Ok((Tile::PowerPellet, None)),
            ' ' => Ok((Tile::Empty, None)),
            '_' => Ok((Tile::Void, None)),
            'P' => Ok((Tile::Empty, Some(Marker::PacmanStart))),
            'G' => Ok((Tile::Empty, Some(Marker::GhostHome))),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a character board into a level template.
    ///
    /// # Errors
    ///
    /// Returns an error if the board contains unknown characters, has zero or several
    /// Pac-Man starts, or if its rows differ in length.
    pub fn parse_board<S: AsRef<str>>(board: &[S], tile_size: f32) -> GameResult<LevelTemplate> {
        let mut rows = Vec::with_capacity(board.len());
        let mut pacman_start: Option<TilePos> = None;
        let mut ghost_homes: SmallVec<[TilePos; 4]> = SmallVec::new();

        for (y, line) in board.iter().enumerate() {
            let mut row = Vec::with_capacity(line.as_ref().len());
            for (x, character) in line.as_ref().chars().enumerate() {
                let (tile, marker) = Self::parse_character(character)?;
                let pos = TilePos::new(y as i32, x as i32);

                match marker {
                    Some(Marker::PacmanStart) if pacman_start.is_some() => {
                        return Err(ParseError::DuplicatePlayerStart(pos).into());
                    }
                    Some(Marker::PacmanStart) => pacman_start = Some(pos),
                    Some(Marker::GhostHome) => ghost_homes.push(pos),
                    None => {}
                }

                row.push(tile);
            }
            rows.push(row);
        }

        let pacman_start = pacman_start.ok_or(ParseError::MissingPlayerStart)?;
        let grid = Grid::new(rows, tile_size)?;
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            pellets = grid.remaining_pellets(),
            homes = ghost_homes.len(),
            "Parsed board"
        );

        Ok(LevelTemplate::new(grid, pacman_start, ghost_homes)?)
    }
}
