use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
};

use log::{debug, info};
use omok::{GameResult, GameState, Rules};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{
    config::Config,
    error::Error,
    example::{Example, IncompleteExample},
    mcts::Mcts,
    search::{add_dirichlet, sample_index},
    Oracle,
};

/// How the move temperature evolves over a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The training temperature is used for every move.
    Unregulated,
    /// After `explore_plies` plies moves are chosen greedily.
    Regulated { explore_plies: u32 },
}

impl Strategy {
    pub fn from_regulation(explore_plies: Option<u32>) -> Self {
        match explore_plies {
            Some(explore_plies) => Strategy::Regulated { explore_plies },
            None => Strategy::Unregulated,
        }
    }

    pub fn temperature(self, ply: u32, temperature: f32) -> f32 {
        match self {
            Strategy::Regulated { explore_plies } if ply >= explore_plies => 0.0,
            _ => temperature,
        }
    }
}

/// A finished self-play game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub examples: Vec<Example>,
    pub plies: u32,
    pub result: GameResult,
}

pub struct SelfPlay<'a, O: ?Sized> {
    mcts: Mcts<'a, O>,
    rules: Rules,
    temperature: f32,
    strategy: Strategy,
    dirichlet_alpha: f32,
    noise_ratio: f32,
}

impl<'a, O: Oracle + ?Sized> SelfPlay<'a, O> {
    pub fn new(oracle: &'a O, config: &Config) -> Self {
        SelfPlay {
            mcts: Mcts::new(oracle, config),
            rules: config.rules,
            temperature: config.temperature,
            strategy: Strategy::from_regulation(config.explore_regulation),
            dirichlet_alpha: config.dirichlet_alpha,
            noise_ratio: config.noise_ratio,
        }
    }

    /// Play a single game against self.
    pub fn play_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameRecord, Error> {
        let mut game_examples = Vec::new();
        let mut state = GameState::new(self.rules);
        let mut ply = 0;

        while !state.is_done() {
            let temperature = self.strategy.temperature(ply, self.temperature);
            let mut policy = self.mcts.policy(&state, temperature, rng)?;
            add_dirichlet(&mut policy, self.dirichlet_alpha, self.noise_ratio, rng);

            let legal = state.legal_actions();
            let index = sample_index(&policy, rng).ok_or(Error::GameOver)?;
            let mut full_policy = vec![0.0; state.n_actions()];
            for (&action, &p) in legal.iter().zip(&policy) {
                full_policy[action] = p;
            }
            game_examples.push(IncompleteExample {
                state: state.clone(),
                policy: full_policy,
            });

            state = state.next(legal[index])?;
            ply += 1;
            debug!("ply {ply}: played {} at temperature {temperature}", legal[index]);
        }

        // The last recorded position belongs to the player who ended the game.
        let last_value = if state.is_lose() { 1.0 } else { 0.0 };
        let len = game_examples.len();
        let examples = game_examples
            .into_iter()
            .enumerate()
            .map(|(i, example)| {
                let value = if (len - 1 - i) % 2 == 0 { last_value } else { -last_value };
                example.complete(value)
            })
            .collect();

        Ok(GameRecord {
            examples,
            plies: ply,
            result: state.result(),
        })
    }

    /// Run multiple games against self.
    pub fn self_play<R: Rng + ?Sized>(&self, games: usize, rng: &mut R) -> Result<Vec<GameRecord>, Error> {
        (0..games)
            .map(|i| {
                let record = self.play_game(rng)?;
                info!(
                    "self-play game {}/{games}: {:?} in {} plies",
                    i + 1,
                    record.result,
                    record.plies
                );
                Ok(record)
            })
            .collect()
    }
}

/// Run multiple games against self on `workers` threads.
///
/// Game `i` uses the oracle `make_oracle(i)` and an RNG seeded with
/// `seed + i`, so the records do not depend on scheduling.
/// Records are returned in game order. The first failed game stops all
/// workers once their current game is finished.
pub fn self_play_parallel<O, F>(
    config: &Config,
    games: usize,
    workers: usize,
    seed: u64,
    make_oracle: F,
) -> Result<Vec<GameRecord>, Error>
where
    O: Oracle,
    F: Fn(usize) -> O + Sync,
{
    let workers = workers.clamp(1, games.max(1));
    info!("Starting {games} self-play games with {workers} workers");

    let next_game = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let play_games = || -> Result<Vec<(usize, GameRecord)>, Error> {
        let mut records = Vec::new();
        loop {
            if failed.load(Ordering::Relaxed) {
                break Ok(records);
            }
            let game = next_game.fetch_add(1, Ordering::Relaxed);
            if game >= games {
                break Ok(records);
            }
            let oracle = make_oracle(game);
            let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(game as u64));
            let record = match SelfPlay::new(&oracle, config).play_game(&mut rng) {
                Ok(record) => record,
                Err(err) => {
                    failed.store(true, Ordering::Relaxed);
                    break Err(err);
                }
            };
            info!(
                "self-play game {}/{games}: {:?} in {} plies",
                game + 1,
                record.result,
                record.plies
            );
            records.push((game, record));
        }
    };

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers).map(|_| scope.spawn(&play_games)).collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(Err(Error::WorkerPanicked)))
            .collect()
    });

    let mut records = Vec::with_capacity(games);
    for result in results {
        records.extend(result?);
    }
    records.sort_by_key(|(game, _)| *game);
    Ok(records.into_iter().map(|(_, record)| record).collect())
}
