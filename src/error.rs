//! Centralized error types for the maze-chase core.
//!
//! Errors only arise while loading levels and configuration. Once a [`Game`](crate::game::Game)
//! exists, ticking it never fails: every edge case inside the simulation has a defined outcome.

use std::io;

use crate::map::tile::TilePos;

/// Main error type for the crate.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for character board parsing.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Board has no player start ('P')")]
    MissingPlayerStart,
    #[error("Board has more than one player start, second one at {0}")]
    DuplicatePlayerStart(TilePos),
}

/// Errors raised while validating a grid or level template.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid has no tiles")]
    Empty,

    #[error("Tile size must be a positive, finite number of pixels")]
    InvalidTileSize,

    #[error("Row {row} has {found} tiles, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("Unknown tile code: {0}")]
    UnknownCode(u8),

    #[error("Tile {0} lies outside the grid")]
    OutOfBounds(TilePos),

    #[error("Start tile {0} is not walkable")]
    BlockedStart(TilePos),
}

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for crate operations.
pub type GameResult<T> = Result<T, GameError>;
