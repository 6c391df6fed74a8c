use alpha_omok::{
    config::{
        BOARD_SIZE, C_PUCT, DIRICHLET_NOISE, EXPLORE_PLIES, MAX_EXAMPLES, NOISE_RATIO, PIT_GAMES, SELF_PLAY_GAMES,
        SIMULATIONS, TRAIN_TEMPERATURE, WIN_LENGTH,
    },
    repr::EncodingMode,
    Config,
};
use clap::{ArgEnum, Parser};
use omok::{PlayError, Rules};

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleKind {
    /// Flat prior, neutral value
    Uniform,
    /// Flat prior, value from a random playout
    Rollout,
}

/// Generate Omok self-play examples with Monte-Carlo tree search
#[derive(Parser)]
pub struct Args {
    /// Number of self-play games
    #[clap(short, long, default_value_t = SELF_PLAY_GAMES)]
    pub games: usize,
    /// Worker threads for self-play
    #[clap(short, long, default_value_t = 1)]
    pub workers: usize,
    /// Seed for all randomness
    #[clap(long, default_value_t = 0)]
    pub seed: u64,
    /// Board rows
    #[clap(long, default_value_t = BOARD_SIZE)]
    pub rows: usize,
    /// Board columns
    #[clap(long, default_value_t = BOARD_SIZE)]
    pub cols: usize,
    /// Stones in a row needed to win
    #[clap(short = 'k', long, default_value_t = WIN_LENGTH)]
    pub win_length: usize,
    /// Simulations per move
    #[clap(short, long, default_value_t = SIMULATIONS)]
    pub simulations: u32,
    #[clap(long, default_value_t = C_PUCT)]
    pub c_puct: f32,
    /// Move temperature during exploration
    #[clap(short, long, default_value_t = TRAIN_TEMPERATURE)]
    pub temperature: f32,
    /// Plies before moves become greedy
    #[clap(long, default_value_t = EXPLORE_PLIES)]
    pub explore_plies: u32,
    /// Keep the temperature for the whole game
    #[clap(long)]
    pub unregulated: bool,
    #[clap(long, default_value_t = DIRICHLET_NOISE)]
    pub dirichlet_alpha: f32,
    #[clap(long, default_value_t = NOISE_RATIO)]
    pub noise_ratio: f32,
    /// Input planes: basic, side-to-move, last-move or previous
    #[clap(short, long, default_value = "last-move")]
    pub encoding: EncodingMode,
    /// Skip symmetry augmentation of the examples
    #[clap(long)]
    pub no_augment: bool,
    /// Maximum number of examples to keep
    #[clap(long, default_value_t = MAX_EXAMPLES)]
    pub max_examples: usize,
    #[clap(arg_enum, short, long, default_value = "rollout")]
    pub oracle: OracleKind,
    /// Evaluate positions under a random board symmetry
    #[clap(long)]
    pub symmetric: bool,
    /// Pit the rollout oracle against the uniform one for this many games
    #[clap(long, default_value_t = PIT_GAMES)]
    pub pit_games: u32,
    /// Log every ply
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Result<Config, PlayError> {
        Ok(Config {
            rules: Rules::new(self.rows, self.cols, self.win_length)?,
            c_puct: self.c_puct,
            simulations: self.simulations,
            temperature: self.temperature,
            explore_regulation: (!self.unregulated).then(|| self.explore_plies),
            dirichlet_alpha: self.dirichlet_alpha,
            noise_ratio: self.noise_ratio,
            encoding: self.encoding,
            augment: !self.no_augment,
            max_examples: self.max_examples,
            pit_games: self.pit_games,
            ..Default::default()
        })
    }
}
