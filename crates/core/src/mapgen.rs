//! Procedural map generation domain split into coherent submodules.

pub mod config;
pub mod grid;
pub mod text;

mod generator;
mod mapper;
mod seed;
mod validator;

pub use config::GenerationConfig;
pub use generator::MapGenerator;
pub use grid::Grid;
pub use mapper::{MAX_GENERATION_ATTEMPTS, Mapper};
pub use validator::generals_connected;

use crate::types::MapGenError;

/// One-shot helper: run the full generate/validate/retry pipeline for a
/// config and hand back the accepted grid.
pub fn generate_map(config: &GenerationConfig) -> Result<Grid, MapGenError> {
    Ok(Mapper::new(config.clone())?.grid().clone())
}
