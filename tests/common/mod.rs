#![allow(dead_code)]

use std::time::Duration;

use pacman_chase::constants::{TICK_INTERVAL, TILE_SIZE};
use pacman_chase::game::GameSettings;
use pacman_chase::map::level::LevelTemplate;
use pacman_chase::map::parser::MapTileParser;

/// A single-row corridor with Pac-Man at its west end.
pub const CORRIDOR: [&str; 3] = ["##############", "#P...........#", "##############"];

/// A 5x5 open room surrounded by walls.
pub const ROOM: [&str; 7] = [
    "#######", "#.....#", "#.....#", "#..P..#", "#.....#", "#.....#", "#######",
];

pub fn template(board: &[&str]) -> LevelTemplate {
    MapTileParser::parse_board(board, TILE_SIZE).expect("test board should parse")
}

pub fn settings(ghost_count: usize) -> GameSettings {
    GameSettings {
        ghost_count,
        ..GameSettings::default()
    }
}

/// Logical time of the `n`th tick.
pub fn at_tick(n: u32) -> Duration {
    TICK_INTERVAL * n
}
