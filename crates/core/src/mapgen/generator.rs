//! Candidate grid construction from the configured tile distribution.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::types::{CITY_LEVELS, Pos, Tile};

use super::config::GenerationConfig;
use super::grid::Grid;

/// Stochastic tile placement over one owned ChaCha8 stream. Produces
/// unvalidated candidates; connectivity gating happens in the caller.
pub struct MapGenerator {
    rng: ChaCha8Rng,
}

impl MapGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Draw one full candidate grid for a validated config. Each cell is
    /// an independent categorical draw; the two general markers then
    /// overwrite whatever terrain was drawn there, mountains included.
    pub fn generate(&mut self, config: &GenerationConfig) -> Grid {
        debug_assert!(config.validate().is_ok());

        let size = config.grid_size;
        let mut grid = Grid::filled(size, Tile::Passable);

        for y in 0..size {
            for x in 0..size {
                let tile = self.draw_tile(config.mountain_density, config.city_density);
                grid.set_tile(Pos { y: y as i32, x: x as i32 }, tile);
            }
        }

        let [first, second] = match config.general_positions {
            Some(positions) => positions,
            None => self.draw_general_positions(size),
        };
        grid.set_tile(first, Tile::General(0));
        grid.set_tile(second, Tile::General(1));

        grid
    }

    fn draw_tile(&mut self, mountain_density: f64, city_density: f64) -> Tile {
        let passable_mass = 1.0 - mountain_density - city_density;
        let roll = self.unit_draw();

        if roll < passable_mass {
            Tile::Passable
        } else if roll < passable_mass + mountain_density || city_density <= 0.0 {
            Tile::Mountain
        } else {
            // Remaining probability mass splits evenly across city levels.
            let band = (roll - passable_mass - mountain_density) / city_density;
            let level = ((band * f64::from(CITY_LEVELS)) as u8).min(CITY_LEVELS - 1);
            Tile::City(level)
        }
    }

    fn draw_general_positions(&mut self, size: usize) -> [Pos; 2] {
        let first = self.draw_cell(size);
        let mut second = self.draw_cell(size);
        while second == first {
            second = self.draw_cell(size);
        }
        [first, second]
    }

    fn draw_cell(&mut self, size: usize) -> Pos {
        let cell = (self.rng.next_u64() as usize) % (size * size);
        Pos { y: (cell / size) as i32, x: (cell % size) as i32 }
    }

    fn unit_draw(&mut self) -> f64 {
        // 53 high bits map uniformly onto [0, 1).
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
