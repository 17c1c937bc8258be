use pacman_chase::entity::targeting::{Pursuit, Target};
use pacman_chase::map::tile::TilePos;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_in_range_is_inclusive() {
    let pursuit = Pursuit::new(2.0, 0);
    let ghost = TilePos::new(1, 1);
    assert_that(&pursuit.in_range(ghost, TilePos::new(1, 3))).is_true();
    assert_that(&pursuit.in_range(ghost, TilePos::new(3, 1))).is_true();
    // Diagonal neighbour two tiles over on both axes is sqrt(8) away.
    assert_that(&pursuit.in_range(ghost, TilePos::new(3, 3))).is_false();
}

#[test]
fn test_near_player_targets_player() {
    let grid = common::template(&common::CORRIDOR).instantiate();
    let pursuit = Pursuit::new(2.0, 0);

    let target = pursuit.select(&grid, TilePos::new(1, 5), TilePos::new(1, 6), None);
    assert_eq!(target, Target::Pacman(TilePos::new(1, 6)));
}

#[test]
fn test_far_player_targets_patrol_corner() {
    let grid = common::template(&common::CORRIDOR).instantiate();
    let pursuit = Pursuit::new(2.0, 0);

    let target = pursuit.select(&grid, TilePos::new(1, 12), TilePos::new(1, 1), None);
    assert_eq!(
        target,
        Target::Patrol {
            index: 0,
            tile: TilePos::new(1, 1)
        }
    );
}

#[test]
fn test_retreat_overrides_range() {
    let grid = common::template(&common::CORRIDOR).instantiate();
    let pursuit = Pursuit::new(2.0, 0);
    let home = TilePos::new(1, 10);

    let target = pursuit.select(&grid, TilePos::new(1, 5), TilePos::new(1, 6), Some(home));
    assert_eq!(target, Target::Home(home));
    assert_eq!(target.tile(), home);
}

#[test]
fn test_patrol_index_cycles() {
    let mut pursuit = Pursuit::new(9.0, 6);
    assert_that(&pursuit.patrol_index()).is_equal_to(2);

    let mut seen = Vec::new();
    for _ in 0..4 {
        pursuit.advance_patrol();
        seen.push(pursuit.patrol_index());
    }
    assert_eq!(seen, vec![3, 0, 1, 2]);
}
