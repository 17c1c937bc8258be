use pacman_chase::entity::pathfinding::{next_direction_towards, shortest_path, FALLBACK_DIRECTION};
use pacman_chase::map::direction::Direction;
use pacman_chase::map::level::LevelTemplate;
use pacman_chase::map::tile::TilePos;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

/// Two equally short routes between the top-left and bottom-right corners.
const LOOP: [&str; 5] = ["#######", "#P....#", "#.###.#", "#.....#", "#######"];

#[test]
fn test_ties_break_in_search_order() {
    let grid = common::template(&LOOP).instantiate();

    // Left is a wall, so right is expanded before down.
    assert_eq!(
        next_direction_towards(&grid, TilePos::new(1, 1), TilePos::new(3, 5)),
        Some(Direction::Right)
    );
    // From the other corner, left is expanded before up.
    assert_eq!(
        next_direction_towards(&grid, TilePos::new(3, 5), TilePos::new(1, 1)),
        Some(Direction::Left)
    );
}

#[test]
fn test_each_step_shortens_the_path() {
    let grid = LevelTemplate::classic().unwrap().instantiate();
    let pairs = [
        (TilePos::new(1, 1), TilePos::new(21, 21)),
        (TilePos::new(21, 1), TilePos::new(1, 21)),
        (TilePos::new(13, 10), TilePos::new(5, 3)),
        (TilePos::new(11, 0), TilePos::new(11, 22)),
    ];

    for (from, dest) in pairs {
        let mut current = from;
        let mut remaining = shortest_path(&grid, current, dest).unwrap().len();

        while current != dest {
            let direction = next_direction_towards(&grid, current, dest).unwrap();
            current = current.offset(direction);
            let next_remaining = shortest_path(&grid, current, dest).unwrap().len();
            assert_eq!(next_remaining, remaining - 1, "stepping {direction:?} from {from} towards {dest}");
            remaining = next_remaining;
        }
    }
}

#[test]
fn test_already_at_destination() {
    let grid = common::template(&LOOP).instantiate();
    assert_that(&next_direction_towards(&grid, TilePos::new(1, 3), TilePos::new(1, 3))).is_none();
}

#[test]
fn test_unreachable_destination_uses_fallback() {
    let grid = common::template(&["#####", "#P#.#", "#####"]).instantiate();
    assert_eq!(
        next_direction_towards(&grid, TilePos::new(1, 1), TilePos::new(1, 3)),
        Some(FALLBACK_DIRECTION)
    );
    assert_eq!(FALLBACK_DIRECTION, Direction::Down);

    // A wall as destination is just as unreachable.
    assert_eq!(
        next_direction_towards(&grid, TilePos::new(1, 1), TilePos::new(0, 0)),
        Some(FALLBACK_DIRECTION)
    );
}

#[test]
fn test_void_blocks_the_search() {
    let grid = common::template(&["#####", "#P_.#", "#####"]).instantiate();
    assert_that(&shortest_path(&grid, TilePos::new(1, 1), TilePos::new(1, 3))).is_none();
}

#[test]
fn test_search_leaves_grid_untouched() {
    let grid = LevelTemplate::classic().unwrap().instantiate();
    let before = grid.clone();
    next_direction_towards(&grid, TilePos::new(1, 1), TilePos::new(21, 21));
    assert_eq!(grid, before);
}
