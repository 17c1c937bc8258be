//! This module contains all the constants used by the simulation.

use std::time::Duration;

/// The number of simulation ticks per second.
pub const TICK_RATE: u32 = 30;

/// The logical time that elapses between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_nanos((1_000_000_000.0 / TICK_RATE as f64) as u64);

/// The edge length of each tile, in pixels.
pub const TILE_SIZE: f32 = 24.0;

/// Fraction of a tile added to an entity's top-left corner to find its far corner.
///
/// Slightly less than one so an entity resting exactly on a tile boundary does not
/// reach into the next tile.
pub const CORNER_EPSILON: f32 = 0.9999;

/// Scale applied to the position before locating the far-edge tile.
///
/// The inset makes the far edge report the neighbouring tile a little early, which
/// lets entities turn just before they are perfectly aligned.
pub const EARLY_TURN_INSET: f32 = 0.99;

/// How long ghosts stay frightened after a power pellet.
pub const FRIGHTENED_DURATION: Duration = Duration::from_secs(5);
/// How often a ghost moves on to its next patrol corner.
pub const PATROL_ROTATION_INTERVAL: Duration = Duration::from_secs(10);
/// Delay before an eaten ghost returns to its home tile.
pub const GHOST_RESPAWN_DELAY: Duration = Duration::from_secs(3);
/// Length of Pac-Man's death spin.
pub const DYING_DURATION: Duration = Duration::from_secs(1);
/// Number of full turns Pac-Man spins while dying.
pub const DYING_TURNS: f32 = 2.0;
/// Time between two frames of Pac-Man's chomp animation.
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(100);
/// Frames in Pac-Man's chomp animation, numbered from 1.
pub const PACMAN_FRAME_COUNT: u8 = 7;

pub const PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 100;
pub const GHOST_SCORE: u32 = 200;

pub const DEFAULT_LIVES: u32 = 5;
pub const DEFAULT_GHOST_COUNT: usize = 5;
/// Pac-Man's speed in pixels per tick. Ghosts move at half this speed.
pub const DEFAULT_PACMAN_SPEED: f32 = 6.0;
/// Pursuit range of the first ghost, in tiles. Each further ghost sees one tile more.
pub const BASE_PURSUIT_RANGE: f32 = 9.0;
/// Ghosts are drawn and moved slightly smaller than a tile.
pub const GHOST_SHRINK: f32 = 2.0;

/// The classic board layout.
///
/// `#` wall, `.` pellet, `o` power pellet, `_` void, ` ` empty,
/// `P` Pac-Man's start, `G` a ghost home.
pub const CLASSIC_BOARD: [&str; 23] = [
    "#######################",
    "#P.........#..........#",
    "#.###.####.#.####.###.#",
    "#o###.####.#.####.###o#",
    "#.###.####.#.####.###.#",
    "#.....................#",
    "#.###.#.#######.#.###.#",
    "#.....#....#....#.....#",
    "#####.####.#.####.#####",
    "____#.#.........#.#____",
    "#####.#.###.###.#.#####",
    "........#.....#........",
    "#####.#.#G###.#.#.#####",
    "____#.#.#.G...#.#.#____",
    "#####.#.#######.#.#####",
    "#..........#..........#",
    "#.####.###.#.###.####.#",
    "#....#.....#.....#....#",
    "####.#.#.#####.#.#.####",
    "#......#...#...#......#",
    "#o########.#.########o#",
    "#.....................#",
    "#######################",
];
