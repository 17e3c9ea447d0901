use anyhow::{Context, Result, bail};
use clap::Parser;
use generals_core::{GenerationConfig, Mapper, Pos};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fixed base seed; maps after the first use seed + index. Omit for
    /// a fresh runtime seed per map.
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 10)]
    grid_size: usize,
    #[arg(long, default_value_t = 0.2)]
    mountain_density: f64,
    #[arg(long, default_value_t = 0.05)]
    city_density: f64,
    /// Fixed general position as "y,x"; pass twice to pin both generals
    #[arg(long = "general", value_parser = parse_pos)]
    generals: Vec<Pos>,
    /// Number of maps to generate
    #[arg(short, long, default_value_t = 1)]
    count: u32,
    /// Emit one JSON object per map instead of plain text
    #[arg(long)]
    json: bool,
}

fn parse_pos(raw: &str) -> Result<Pos, String> {
    let (y, x) =
        raw.split_once(',').ok_or_else(|| format!("position '{raw}' must look like y,x"))?;
    let y = y.trim().parse::<i32>().map_err(|_| format!("row '{y}' must be a number"))?;
    let x = x.trim().parse::<i32>().map_err(|_| format!("column '{x}' must be a number"))?;
    Ok(Pos { y, x })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let general_positions = match args.generals.as_slice() {
        [] => None,
        &[first, second] => Some([first, second]),
        other => bail!("expected exactly two --general positions, got {}", other.len()),
    };

    for index in 0..args.count {
        let config = GenerationConfig {
            grid_size: args.grid_size,
            mountain_density: args.mountain_density,
            city_density: args.city_density,
            general_positions,
            random_seed: args.seed.map(|seed| seed + u64::from(index)),
        };

        let mapper =
            Mapper::new(config).with_context(|| format!("map {index} generation failed"))?;

        if args.json {
            println!(
                "{}",
                serde_json::json!({
                    "seed": mapper.seed(),
                    "grid_size": args.grid_size,
                    "fingerprint": format!("{:016x}", mapper.grid().fingerprint()),
                    "map": mapper.map_text(),
                })
            );
        } else {
            println!("# seed {} fingerprint {:016x}", mapper.seed(), mapper.grid().fingerprint());
            println!("{}", mapper.map_text());
        }
    }

    Ok(())
}
