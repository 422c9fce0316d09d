//! Headless replay: run a scripted game from a seed and print a JSON summary.
//!
//! ```text
//! replay --seed 12345 --actions "LLH RRUH ....H"
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use tetris_classic::config::parse_seed;
use tetris_classic::replay::{parse_script, run};

#[derive(Parser, Debug)]
#[command(name = "replay", about = "Replay a scripted game deterministically")]
struct Args {
    /// Game seed, decimal or 0x-prefixed hex (0 uses the default seed)
    #[arg(long, default_value = "0", value_parser = seed_arg)]
    seed: u32,

    /// Steps: L/R move, D soft drop, U rotate, H hard drop, '.' tick
    #[arg(long, default_value = "")]
    actions: String,

    /// Gravity ticks applied after every action
    #[arg(long, default_value_t = 0)]
    ticks_per_action: u32,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn seed_arg(s: &str) -> Result<u32, String> {
    parse_seed(s).ok_or_else(|| format!("invalid seed: {s}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let steps = parse_script(&args.actions).context("invalid --actions script")?;
    let summary = run(args.seed, &steps, args.ticks_per_action);

    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{}", json);
    Ok(())
}
