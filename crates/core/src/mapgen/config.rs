//! Generation parameters and their validation rules.

use serde::{Deserialize, Serialize};

use crate::types::{InvalidConfigError, Pos};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub grid_size: usize,
    pub mountain_density: f64,
    pub city_density: f64,
    /// Fixed general positions; when absent the generator draws two
    /// distinct cells uniformly at random.
    pub general_positions: Option<[Pos; 2]>,
    /// Explicit seed for reproducible generation; when absent a runtime
    /// seed is derived once per `Mapper`.
    pub random_seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            mountain_density: 0.2,
            city_density: 0.05,
            general_positions: None,
            random_seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.grid_size < 2 {
            return Err(InvalidConfigError::GridTooSmall { grid_size: self.grid_size });
        }

        for (name, value) in
            [("mountain", self.mountain_density), ("city", self.city_density)]
        {
            if !(0.0..1.0).contains(&value) {
                return Err(InvalidConfigError::DensityOutOfRange { name, value });
            }
        }

        if self.mountain_density + self.city_density >= 1.0 {
            return Err(InvalidConfigError::DensitySum {
                mountain_density: self.mountain_density,
                city_density: self.city_density,
            });
        }

        if let Some([first, second]) = self.general_positions {
            for pos in [first, second] {
                if !self.in_bounds(pos) {
                    return Err(InvalidConfigError::GeneralOutOfBounds {
                        pos,
                        grid_size: self.grid_size,
                    });
                }
            }
            if first == second {
                return Err(InvalidConfigError::GeneralsNotDistinct { pos: first });
            }
        }

        Ok(())
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.grid_size
            && (pos.y as usize) < self.grid_size
    }
}
