pub mod mapgen;
pub mod types;

pub use mapgen::text;
pub use mapgen::{
    GenerationConfig, Grid, MAX_GENERATION_ATTEMPTS, MapGenerator, Mapper, generals_connected,
    generate_map,
};
pub use types::*;
