use std::sync::Mutex;

use omok::{GameState, Symmetric};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::OracleError;

/// Raw probabilities over the whole action space.
pub type Policy = Vec<f32>;
/// Expected outcome in [-1, 1] for the player to move.
pub type Eval = f32;

/// Policy and value estimator consumed by the search.
pub trait Oracle {
    fn policy_eval(&self, state: &GameState) -> Result<(Policy, Eval), OracleError>;
}

impl<F> Oracle for F
where
    F: Fn(&GameState) -> Result<(Policy, Eval), OracleError>,
{
    fn policy_eval(&self, state: &GameState) -> Result<(Policy, Eval), OracleError> {
        self(state)
    }
}

/// Query the oracle and restrict its policy to the legal actions.
/// Returns `(action, prior)` pairs in ascending action order and the value.
pub fn legal_prior<O: Oracle + ?Sized>(
    oracle: &O,
    state: &GameState,
) -> Result<(Vec<(usize, f32)>, Eval), OracleError> {
    let (policy, eval) = oracle.policy_eval(state)?;
    if policy.len() != state.n_actions() {
        return Err(OracleError::PolicySize {
            expected: state.n_actions(),
            got: policy.len(),
        });
    }
    if !eval.is_finite() || policy.iter().any(|p| !p.is_finite()) {
        return Err(OracleError::NonFinite);
    }
    if policy.iter().any(|&p| p < 0.0) {
        return Err(OracleError::NegativeProbability);
    }
    if !(-1.0..=1.0).contains(&eval) {
        return Err(OracleError::ValueOutOfRange(eval));
    }

    let mut prior: Vec<_> = state
        .legal_actions()
        .into_iter()
        .map(|action| (action, policy[action]))
        .collect();
    let total: f32 = prior.iter().map(|(_, p)| p).sum();
    if total > 0.0 {
        prior.iter_mut().for_each(|(_, p)| *p /= total);
    } else {
        let uniform = 1.0 / prior.len().max(1) as f32;
        prior.iter_mut().for_each(|(_, p)| *p = uniform);
    }
    Ok((prior, eval))
}

/// Flat prior and a neutral value.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOracle;

impl Oracle for UniformOracle {
    fn policy_eval(&self, state: &GameState) -> Result<(Policy, Eval), OracleError> {
        Ok((vec![1.0; state.n_actions()], 0.0))
    }
}

/// Flat prior with the value of one random playout.
#[derive(Debug)]
pub struct RolloutOracle {
    rng: Mutex<ChaCha20Rng>,
}

impl RolloutOracle {
    pub fn new(seed: u64) -> Self {
        RolloutOracle {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

/// Play uniformly random moves until the game ends.
/// Returns the result for the mover of `state`.
fn random_playout<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<Eval, OracleError> {
    let mut game = state.clone();
    let mut plies = 0;
    while !game.is_done() {
        let action = *game
            .legal_actions()
            .choose(rng)
            .ok_or_else(|| OracleError::Failed("no legal actions in an unfinished game".into()))?;
        game = game
            .next(action)
            .map_err(|err| OracleError::Failed(err.to_string()))?;
        plies += 1;
    }
    let result = if game.is_lose() { -1.0 } else { 0.0 };
    Ok(if plies % 2 == 0 { result } else { -result })
}

impl Oracle for RolloutOracle {
    fn policy_eval(&self, state: &GameState) -> Result<(Policy, Eval), OracleError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| OracleError::Failed("rollout rng lock poisoned".into()))?;
        let eval = random_playout(state, &mut *rng)?;
        Ok((vec![1.0; state.n_actions()], eval))
    }
}

/// Evaluates a randomly transformed position and maps the policy back.
#[derive(Debug)]
pub struct SymmetricOracle<O> {
    inner: O,
    rng: Mutex<ChaCha20Rng>,
}

impl<O: Oracle> SymmetricOracle<O> {
    pub fn new(inner: O, seed: u64) -> Self {
        SymmetricOracle {
            inner,
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl<O: Oracle> Oracle for SymmetricOracle<O> {
    fn policy_eval(&self, state: &GameState) -> Result<(Policy, Eval), OracleError> {
        let rules = state.rules();
        let symmetry = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| OracleError::Failed("symmetry rng lock poisoned".into()))?;
            *rules
                .symmetries()
                .choose(&mut *rng)
                .ok_or_else(|| OracleError::Failed("board has no symmetries".into()))?
        };

        let (policy, eval) = self.inner.policy_eval(&state.transform(symmetry))?;
        if policy.len() != state.n_actions() {
            return Err(OracleError::PolicySize {
                expected: state.n_actions(),
                got: policy.len(),
            });
        }
        let (rows, cols) = symmetry.output_shape(rules.rows(), rules.cols());
        Ok((symmetry.inverse().apply(rows, cols, &policy), eval))
    }
}
