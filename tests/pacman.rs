use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;
use pacman_chase::constants::TILE_SIZE;
use pacman_chase::entity::pacman::{Pacman, PacmanState};
use pacman_chase::entity::r#trait::Mobile;
use pacman_chase::map::direction::Direction;
use pacman_chase::map::tile::TilePos;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_blocked_request_is_buffered() {
    let grid = common::template(&["#####", "#P..#", "###.#", "#####"]).instantiate();
    let mut pacman = Pacman::new(TilePos::new(1, 1), TILE_SIZE, 6.0);

    pacman.request_direction(Direction::Down);
    for _ in 0..8 {
        pacman.attempt_move(&grid);
        assert_eq!(pacman.direction(), Direction::Right);
    }
    assert_eq!(pacman.position(), Vec2::new(72.0, 24.0));

    // Lined up with the opening below, the buffered request finally applies.
    pacman.attempt_move(&grid);
    assert_eq!(pacman.direction(), Direction::Down);
    assert_eq!(pacman.position(), Vec2::new(72.0, 30.0));
}

#[test]
fn test_request_applies_once_open() {
    let grid = common::template(&common::ROOM).instantiate();
    let mut pacman = Pacman::new(TilePos::new(1, 1), TILE_SIZE, 6.0);

    pacman.request_direction(Direction::Down);
    pacman.attempt_move(&grid);

    assert_eq!(pacman.direction(), Direction::Down);
    assert_eq!(pacman.position(), Vec2::new(24.0, 30.0));
}

#[test]
fn test_stops_at_walls() {
    let grid = common::template(&common::CORRIDOR).instantiate();
    let mut pacman = Pacman::new(TilePos::new(1, 11), TILE_SIZE, 6.0);

    for _ in 0..10 {
        pacman.attempt_move(&grid);
    }

    assert_eq!(pacman.position(), TilePos::new(1, 12).to_pixel(TILE_SIZE));
    assert_that(&pacman.advance(&grid)).is_false();
}

#[test]
fn test_animation_cycles_through_frames() {
    let mut pacman = Pacman::new(TilePos::new(1, 1), TILE_SIZE, 6.0);
    assert_that(&pacman.frame()).is_equal_to(1);

    let mut frames = Vec::new();
    for step in 0..8u64 {
        pacman.tick_animation(Duration::from_millis(step * 100));
        frames.push(pacman.frame());
        // Ticks between frame boundaries leave the frame alone.
        pacman.tick_animation(Duration::from_millis(step * 100 + 50));
        assert_that(&pacman.frame()).is_equal_to(frames[frames.len() - 1]);
    }

    assert_eq!(frames, vec![2, 3, 4, 5, 6, 7, 1, 2]);
}

#[test]
fn test_dying_freezes_and_spins() {
    let grid = common::template(&common::CORRIDOR).instantiate();
    let mut pacman = Pacman::new(TilePos::new(1, 1), TILE_SIZE, 6.0);
    let caught = Duration::from_secs(2);

    pacman.start_dying(caught);
    assert_eq!(pacman.state(), PacmanState::Dying { since: caught });

    let before = pacman.position();
    pacman.attempt_move(&grid);
    assert_eq!(pacman.position(), before);

    assert!((pacman.rotation(caught + Duration::from_millis(500)) - TAU).abs() < 1e-4);
    assert!((pacman.rotation(caught + Duration::from_secs(5)) - 2.0 * TAU).abs() < 1e-4);

    assert_that(&pacman.finish_dying()).is_true();
    assert_that(&pacman.is_respawn_pending()).is_true();
    assert_that(&pacman.finish_dying()).is_false();

    pacman.reset(TilePos::new(1, 1), TILE_SIZE);
    assert_that(&pacman.is_alive()).is_true();
    assert_that(&pacman.rotation(caught)).is_equal_to(0.0);
}
