//! Run one bot-vs-bot match and print the summary as JSON.
//!
//! ```text
//! keyforge-sim <deck.json> [--seed N] [--config match.json] [--max-turns N]
//! ```
//!
//! Narration goes through `log`; set `RUST_LOG=debug` for per-turn hands or
//! `RUST_LOG=off` for the summary alone.

use anyhow::{bail, Context};
use keyforge_sim::cards::JsonDeckSource;
use keyforge_sim::core::MatchConfig;
use keyforge_sim::game::Game;

struct Args {
    deck: String,
    seed: Option<u64>,
    config: Option<String>,
    max_turns: Option<u32>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut deck = None;
    let mut seed = None;
    let mut config = None;
    let mut max_turns = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                seed = Some(value.parse().with_context(|| format!("bad seed {value:?}"))?);
            }
            "--config" => config = Some(args.next().context("--config needs a path")?),
            "--max-turns" => {
                let value = args.next().context("--max-turns needs a value")?;
                max_turns = Some(value.parse().with_context(|| format!("bad turn cap {value:?}"))?);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => deck = Some(path.to_string()),
        }
    }

    let Some(deck) = deck else {
        bail!("usage: keyforge-sim <deck.json> [--seed N] [--config match.json] [--max-turns N]");
    };
    Ok(Args {
        deck,
        seed,
        config,
        max_turns,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let mut config = match &args.config {
        Some(path) => MatchConfig::from_json_file(path)?,
        None => MatchConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(turns) = args.max_turns {
        config = config.with_max_turns(turns);
    }

    let mut game = Game::from_source(&JsonDeckSource::new(), &args.deck, config)?;
    let summary = game.run()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
