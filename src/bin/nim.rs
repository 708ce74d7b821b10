//! Train a Q-learning agent by self-play, then play one game against it.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nim_rl::core::Piles;
use nim_rl::training::{train_with_config, TrainConfig};
use nim_rl::{DEFAULT_ALPHA, DEFAULT_EPSILON, DEFAULT_PILES};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of self-play training episodes.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    episodes: usize,

    /// Learning rate.
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Exploration rate used during training.
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Seed for deterministic training; omit for entropy seeding.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial pile configuration.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PILES)]
    piles: Vec<u32>,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = TrainConfig::new()
        .with_piles(Piles::from(args.piles.clone()))
        .with_alpha(args.alpha)
        .with_epsilon(args.epsilon);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    println!("Training on {} episodes...", args.episodes);
    let mut agent = train_with_config(args.episodes, &config);
    println!("Done. Your move is a pile index and a count, e.g. `3 1`.");

    let stdin = std::io::stdin();
    let mut rng = nim_rl::GameRng::from_entropy();
    nim_rl::play::run(
        &mut agent,
        Piles::from(args.piles),
        None,
        &mut rng,
        stdin.lock(),
        std::io::stdout(),
    )?;

    Ok(())
}
