use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct city strength levels. The configured city
/// probability mass is split evenly across them.
pub const CITY_LEVELS: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Passable,
    Mountain,
    /// Neutral capturable stronghold with a strength level in `0..CITY_LEVELS`.
    City(u8),
    /// A player's starting stronghold, by player index.
    General(u8),
}

impl Tile {
    /// Mountains are the only terrain that blocks movement. Cities and
    /// generals are walkable squares that carry extra game state.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Tile::Mountain)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidConfigError {
    #[error("grid size {grid_size} cannot hold two distinct generals, need at least 2")]
    GridTooSmall { grid_size: usize },
    #[error("{name} density {value} must lie in [0, 1)")]
    DensityOutOfRange { name: &'static str, value: f64 },
    #[error("mountain density {mountain_density} plus city density {city_density} must stay below 1")]
    DensitySum { mountain_density: f64, city_density: f64 },
    #[error("general position {pos:?} is outside a {grid_size}x{grid_size} grid")]
    GeneralOutOfBounds { pos: Pos, grid_size: usize },
    #[error("both generals share position {pos:?}")]
    GeneralsNotDistinct { pos: Pos },
}

/// Defensive signal for grids that do not carry exactly two general
/// markers. Unreachable through the generator, which always stamps two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("expected exactly two general tiles, found {found}")]
pub struct InvalidMapError {
    pub found: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum MapGenError {
    #[error(transparent)]
    InvalidConfig(#[from] InvalidConfigError),
    #[error(transparent)]
    InvalidMap(#[from] InvalidMapError),
    #[error("no connected map found within {attempts} generation attempts")]
    Exhausted { attempts: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseMapError {
    #[error("map text is empty")]
    Empty,
    #[error("unknown tile character {character:?} at row {row}, column {column}")]
    UnknownTile { character: char, row: usize, column: usize },
    #[error("row {row} has width {width}, expected {expected} to keep the grid square")]
    RaggedRow { row: usize, width: usize, expected: usize },
}
