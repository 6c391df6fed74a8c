use std::{error::Error, fs::create_dir_all, process::exit};

use alpha_omok::{
    example::save_examples,
    oracle::{RolloutOracle, SymmetricOracle, UniformOracle},
    pit::pit,
    replay::ReplayBuffer,
    self_play::{self_play_parallel, GameRecord},
    Config,
};
use clap::Parser;
use cli::{Args, OracleKind};
use log::{error, info, LevelFilter};
use mimalloc::MiMalloc;
use omok::{Colour, GameResult};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;

const EXAMPLE_DIR: &str = "_examples";

fn main() {
    let args = Args::parse();
    simple_logging::log_to_stderr(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    if let Err(err) = run(&args) {
        error!("{err}");
        exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    // Make folders if they do not exist yet.
    create_dir_all(format!("./{EXAMPLE_DIR}/"))?;
    let config = args.config()?;
    info!("{config:?}");

    let records = self_play(args, &config)?;
    summarize(&records);

    let mut buffer = ReplayBuffer::new(config.max_examples);
    buffer.extend(records.into_iter().flat_map(|record| record.examples));
    let tensors: usize = buffer
        .iter()
        .map(|example| example.to_tensors(config.encoding, config.augment).len())
        .sum();
    let path = save_examples(EXAMPLE_DIR, buffer.as_slice())?;
    info!(
        "saved {}/{} examples ({tensors} training samples) to {}",
        buffer.len(),
        buffer.capacity(),
        path.display()
    );

    if config.pit_games > 0 {
        let mut rng = ChaCha20Rng::seed_from_u64(args.seed);
        let result = pit(&RolloutOracle::new(args.seed), &UniformOracle, &config, &mut rng)?;
        info!(
            "rollout vs uniform: {result:?}, average point {:.3}, improvement: {}",
            result.average_point(),
            result.is_improvement(config.win_rate_threshold)
        );
    }
    Ok(())
}

fn self_play(args: &Args, config: &Config) -> Result<Vec<GameRecord>, alpha_omok::Error> {
    let (games, workers, seed) = (args.games, args.workers, args.seed);
    // Each game gets its own oracle seed.
    let oracle_seed = |game: usize| seed.wrapping_mul(31).wrapping_add(game as u64);
    match (args.oracle, args.symmetric) {
        (OracleKind::Uniform, false) => self_play_parallel(config, games, workers, seed, |_| UniformOracle),
        (OracleKind::Uniform, true) => self_play_parallel(config, games, workers, seed, |game| {
            SymmetricOracle::new(UniformOracle, oracle_seed(game))
        }),
        (OracleKind::Rollout, false) => self_play_parallel(config, games, workers, seed, |game| {
            RolloutOracle::new(oracle_seed(game))
        }),
        (OracleKind::Rollout, true) => self_play_parallel(config, games, workers, seed, |game| {
            SymmetricOracle::new(RolloutOracle::new(oracle_seed(game)), oracle_seed(game))
        }),
    }
}

fn summarize(records: &[GameRecord]) {
    let count = |result: GameResult| records.iter().filter(|record| record.result == result).count();
    let plies: u32 = records.iter().map(|record| record.plies).sum();
    info!(
        "{} games, black {} / white {} / draw {}, {:.1} plies on average",
        records.len(),
        count(GameResult::Winner(Colour::Black)),
        count(GameResult::Winner(Colour::White)),
        count(GameResult::Draw),
        f64::from(plies) / records.len().max(1) as f64
    );
}
