use omok::Rules;

use crate::repr::EncodingMode;

// game settings
pub const BOARD_SIZE: usize = 9;
pub const WIN_LENGTH: usize = 5;

// search
pub const C_PUCT: f32 = 5.0;
pub const SIMULATIONS: u32 = 400;

// self-play
pub const SELF_PLAY_GAMES: usize = 20;
pub const TRAIN_TEMPERATURE: f32 = 1.0;
pub const EXPLORE_PLIES: u32 = 10;
pub const EXPLORE_REGULATION: Option<u32> = Some(EXPLORE_PLIES);

pub const DIRICHLET_NOISE: f32 = 0.3;
pub const NOISE_RATIO: f32 = 0.25;

// train
pub const ENCODING: EncodingMode = EncodingMode::LastMove;
pub const DATA_AUGMENTATION: bool = true;
pub const MAX_EXAMPLES: usize = 30_000;

// pit
pub const PIT_GAMES: u32 = 20;
pub const EVAL_TEMPERATURE: f32 = 0.0;
pub const WIN_RATE_THRESHOLD: f64 = 0.55;

/// Hyperparameters of a run. Built once and handed to every component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub rules: Rules,
    pub c_puct: f32,
    pub simulations: u32,
    pub temperature: f32,
    /// Plies played at `temperature` before moves turn greedy.
    pub explore_regulation: Option<u32>,
    pub dirichlet_alpha: f32,
    pub noise_ratio: f32,
    pub encoding: EncodingMode,
    pub augment: bool,
    pub max_examples: usize,
    pub pit_games: u32,
    pub eval_temperature: f32,
    pub win_rate_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rules: Rules::new(BOARD_SIZE, BOARD_SIZE, WIN_LENGTH).unwrap_or_default(),
            c_puct: C_PUCT,
            simulations: SIMULATIONS,
            temperature: TRAIN_TEMPERATURE,
            explore_regulation: EXPLORE_REGULATION,
            dirichlet_alpha: DIRICHLET_NOISE,
            noise_ratio: NOISE_RATIO,
            encoding: ENCODING,
            augment: DATA_AUGMENTATION,
            max_examples: MAX_EXAMPLES,
            pit_games: PIT_GAMES,
            eval_temperature: EVAL_TEMPERATURE,
            win_rate_threshold: WIN_RATE_THRESHOLD,
        }
    }
}
