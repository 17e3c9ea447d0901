//! Façade owning configuration and the generate-until-valid contract.

use crate::types::MapGenError;

use super::config::GenerationConfig;
use super::generator::MapGenerator;
use super::grid::Grid;
use super::seed::resolve_seed;
use super::text;
use super::validator::generals_connected;

/// Upper bound on generation attempts before giving up. A fixed general
/// pair under heavy mountain density can leave every candidate
/// disconnected, so the retry loop must not run unbounded.
pub const MAX_GENERATION_ATTEMPTS: u32 = 512;

/// Owns the configuration and the accepted map for one episode. The
/// connectivity check runs against every candidate; rejected candidates
/// are discarded wholesale and a fresh grid is drawn from the same
/// stream, never repaired incrementally.
pub struct Mapper {
    config: GenerationConfig,
    seed: u64,
    grid: Grid,
    map_text: String,
}

impl Mapper {
    pub fn new(config: GenerationConfig) -> Result<Self, MapGenError> {
        Self::with_attempt_budget(config, MAX_GENERATION_ATTEMPTS)
    }

    /// Like [`Mapper::new`] with a caller-chosen retry budget.
    pub fn with_attempt_budget(
        config: GenerationConfig,
        max_attempts: u32,
    ) -> Result<Self, MapGenError> {
        config.validate()?;

        let seed = resolve_seed(config.random_seed);
        let mut generator = MapGenerator::new(seed);

        for _ in 0..max_attempts {
            let grid = generator.generate(&config);
            if generals_connected(&grid)? {
                let map_text = text::stringify(&grid);
                return Ok(Self { config, seed, grid, map_text });
            }
        }

        Err(MapGenError::Exhausted { attempts: max_attempts })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The seed the generator actually ran with, whether configured or
    /// derived at runtime. Feeding it back as `random_seed` reproduces
    /// the accepted map exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn map_text(&self) -> &str {
        &self.map_text
    }
}
