use figment::Jail;
use pacman_chase::constants::TILE_SIZE;
use pacman_chase::error::{GameError, GridError, ParseError};
use pacman_chase::map::level::LevelTemplate;
use pacman_chase::map::parser::MapTileParser;
use pacman_chase::map::tile::{Tile, TilePos};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_parse_board_markers() {
    let board = ["#####", "#P.G#", "#o G#", "#####"];
    let template = MapTileParser::parse_board(&board, TILE_SIZE).unwrap();

    assert_eq!(template.pacman_start(), TilePos::new(1, 1));
    assert_eq!(template.ghost_homes(), &[TilePos::new(1, 3), TilePos::new(2, 3)]);

    let grid = template.grid();
    assert_that(&grid.tile_at(TilePos::new(1, 1))).is_equal_to(Tile::Empty);
    assert_that(&grid.tile_at(TilePos::new(1, 3))).is_equal_to(Tile::Empty);
    assert_that(&grid.tile_at(TilePos::new(2, 1))).is_equal_to(Tile::PowerPellet);
    assert_that(&grid.remaining_pellets()).is_equal_to(2);
}

#[test]
fn test_parse_board_unknown_character() {
    let result = MapTileParser::parse_board(&["#P#", "#x#"], TILE_SIZE);
    assert!(matches!(result, Err(GameError::MapParse(ParseError::UnknownCharacter('x')))));
}

#[test]
fn test_parse_board_missing_start() {
    let result = MapTileParser::parse_board(&["###", "#.#", "###"], TILE_SIZE);
    assert!(matches!(result, Err(GameError::MapParse(ParseError::MissingPlayerStart))));
}

#[test]
fn test_parse_board_duplicate_start() {
    let result = MapTileParser::parse_board(&["####", "#PP#", "####"], TILE_SIZE);
    assert!(matches!(
        result,
        Err(GameError::MapParse(ParseError::DuplicatePlayerStart(pos))) if pos == TilePos::new(1, 2)
    ));
}

#[test]
fn test_parse_board_ragged_rows() {
    let result = MapTileParser::parse_board(&["####", "#P#", "####"], TILE_SIZE);
    assert!(matches!(
        result,
        Err(GameError::Grid(GridError::Ragged {
            row: 1,
            expected: 4,
            found: 3
        }))
    ));
}

#[test]
fn test_classic_board() {
    let template = LevelTemplate::classic().unwrap();
    let grid = template.grid();

    assert_that(&grid.rows()).is_equal_to(23);
    assert_that(&grid.cols()).is_equal_to(23);
    assert_eq!(template.pacman_start(), TilePos::new(1, 1));
    assert_that(&template.ghost_homes().len()).is_equal_to(2);

    let power_pellets = grid.iter().filter(|(_, tile)| *tile == Tile::PowerPellet).count();
    assert_that(&power_pellets).is_equal_to(4);
    // Start markers sit on pellets, as on the arcade board.
    assert_that(&grid.remaining_pellets()).is_equal_to(236);
    assert_that(&grid.tile_at(TilePos::new(1, 1))).is_equal_to(Tile::Pellet);
    assert_that(&grid.tile_at(TilePos::new(12, 9))).is_equal_to(Tile::Pellet);
    assert_that(&grid.tile_at(TilePos::new(13, 10))).is_equal_to(Tile::Pellet);

    // The tunnel row is open at both edges.
    assert_that(&grid.is_passable(TilePos::new(11, 0))).is_true();
    assert_that(&grid.is_passable(TilePos::new(11, 22))).is_true();
}

#[test]
fn test_load_board_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file("small.txt", "#####\n#P.o#\n#G..#\n#####\n")?;

        let template = LevelTemplate::load("small.txt", TILE_SIZE).expect("board file should load");
        assert_eq!(template.pacman_start(), TilePos::new(1, 1));
        assert_eq!(template.ghost_homes(), &[TilePos::new(2, 1)]);
        assert_that(&template.grid().remaining_pellets()).is_equal_to(4);
        Ok(())
    });
}
