//! Canonical one-character-per-tile text codec shared with the game engine.
//!
//! `stringify` and `parse` are exact inverses: the text form is the
//! interchange contract downstream engines consume, so the character
//! table here must never drift.

use crate::types::{CITY_LEVELS, ParseMapError, Pos, Tile};

use super::grid::Grid;

pub const PASSABLE_TILE: char = '.';
pub const MOUNTAIN_TILE: char = 'M';
/// Player markers run `'A'..='Z'`, one letter per general index.
const FIRST_GENERAL_TILE: u8 = b'A';
const MAX_GENERALS: u8 = 26;

pub fn stringify(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for y in 0..size {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..size {
            out.push(tile_char(grid.tile_at(Pos { y: y as i32, x: x as i32 })));
        }
    }
    out
}

pub fn parse(text: &str) -> Result<Grid, ParseMapError> {
    if text.is_empty() {
        return Err(ParseMapError::Empty);
    }

    let rows: Vec<&str> = text.split('\n').collect();
    let expected = rows.len();
    let mut tiles = Vec::with_capacity(expected * expected);

    for (row, line) in rows.iter().enumerate() {
        let mut width = 0_usize;
        for (column, character) in line.chars().enumerate() {
            let tile = char_tile(character)
                .ok_or(ParseMapError::UnknownTile { character, row, column })?;
            tiles.push(tile);
            width += 1;
        }
        if width != expected {
            return Err(ParseMapError::RaggedRow { row, width, expected });
        }
    }

    Ok(Grid::from_tiles(expected, tiles))
}

fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Passable => PASSABLE_TILE,
        Tile::Mountain => MOUNTAIN_TILE,
        Tile::City(level) => {
            debug_assert!(level < CITY_LEVELS);
            char::from(b'0' + level)
        }
        Tile::General(player) => {
            debug_assert!(player < MAX_GENERALS);
            char::from(FIRST_GENERAL_TILE + player)
        }
    }
}

fn char_tile(character: char) -> Option<Tile> {
    match character {
        PASSABLE_TILE => Some(Tile::Passable),
        MOUNTAIN_TILE => Some(Tile::Mountain),
        '0'..='9' => Some(Tile::City(character as u8 - b'0')),
        'A'..='Z' => Some(Tile::General(character as u8 - FIRST_GENERAL_TILE)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::mapgen::config::GenerationConfig;
    use crate::mapgen::generator::MapGenerator;

    fn sample_grid() -> Grid {
        let mut grid = Grid::filled(3, Tile::Passable);
        grid.set_tile(Pos { y: 0, x: 0 }, Tile::General(0));
        grid.set_tile(Pos { y: 0, x: 2 }, Tile::Mountain);
        grid.set_tile(Pos { y: 1, x: 0 }, Tile::City(3));
        grid.set_tile(Pos { y: 1, x: 2 }, Tile::City(9));
        grid.set_tile(Pos { y: 2, x: 1 }, Tile::General(1));
        grid
    }

    #[test]
    fn stringify_uses_the_canonical_character_table() {
        assert_eq!(stringify(&sample_grid()), "A.M\n3.9\n.B.");
    }

    #[test]
    fn parse_inverts_stringify() {
        let grid = sample_grid();
        assert_eq!(parse(&stringify(&grid)), Ok(grid));
    }

    #[test]
    fn stringify_inverts_parse_for_canonical_text() {
        let text = "A.M\n3.9\n.B.";
        assert_eq!(stringify(&parse(text).expect("canonical text parses")), text);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(parse(""), Err(ParseMapError::Empty));
    }

    #[test]
    fn unknown_characters_are_reported_with_their_position() {
        assert_eq!(
            parse("..\n.x"),
            Err(ParseMapError::UnknownTile { character: 'x', row: 1, column: 1 })
        );
    }

    #[test]
    fn non_square_text_is_rejected() {
        assert_eq!(parse("..\n."), Err(ParseMapError::RaggedRow { row: 1, width: 1, expected: 2 }));
        assert_eq!(parse("...\n..."), Err(ParseMapError::RaggedRow { row: 0, width: 3, expected: 2 }));
    }

    proptest! {
        #[test]
        fn generated_grids_round_trip_through_text(seed in any::<u64>(), grid_size in 2_usize..12) {
            let config = GenerationConfig {
                grid_size,
                mountain_density: 0.3,
                city_density: 0.2,
                general_positions: None,
                random_seed: Some(seed),
            };
            let grid = MapGenerator::new(seed).generate(&config);
            prop_assert_eq!(parse(&stringify(&grid)).expect("canonical text parses"), grid);
        }
    }
}
