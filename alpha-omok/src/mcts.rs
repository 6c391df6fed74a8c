use log::debug;
use omok::GameState;
use rand::Rng;

use crate::{
    config::Config,
    error::Error,
    search::{policy_from_visits, sample_index, Node},
    Oracle,
};

/// Result of a search expanded to the whole action space.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub action: usize,
    pub policy: Vec<f32>,
    pub visits: Vec<u32>,
}

/// Monte-Carlo tree search driven by an oracle.
/// A fresh tree is grown for every call.
#[derive(Debug)]
pub struct Mcts<'a, O: ?Sized> {
    oracle: &'a O,
    c_puct: f32,
    simulations: u32,
}

impl<'a, O: Oracle + ?Sized> Mcts<'a, O> {
    pub fn new(oracle: &'a O, config: &Config) -> Self {
        Mcts {
            oracle,
            c_puct: config.c_puct,
            simulations: config.simulations,
        }
    }

    /// Grow a tree from `state` and return its root.
    pub fn search<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Result<Node, Error> {
        let mut root = Node::new(state.clone(), 1.0);
        for _ in 0..self.simulations {
            root.evaluate(self.oracle, self.c_puct, rng)?;
        }
        debug!(
            "searched {} simulations, root value {:.3}",
            root.visits,
            root.expected_reward()
        );
        Ok(root)
    }

    /// Visit counts aligned with `state.legal_actions()`.
    pub fn run<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Result<Vec<u32>, Error> {
        let root = self.search(state, rng)?;
        if root.is_expanded() {
            Ok(root.child_visits())
        } else {
            Ok(vec![0; state.legal_actions().len()])
        }
    }

    /// Action distribution aligned with `state.legal_actions()`.
    pub fn policy<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        temperature: f32,
        rng: &mut R,
    ) -> Result<Vec<f32>, Error> {
        let visits = self.run(state, rng)?;
        Ok(policy_from_visits(&visits, temperature, rng))
    }

    pub fn sample_action<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        temperature: f32,
        rng: &mut R,
    ) -> Result<usize, Error> {
        Ok(self.analyse(state, temperature, rng)?.action)
    }

    /// Search, pick an action, and report the policy and visits of every cell.
    pub fn analyse<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        temperature: f32,
        rng: &mut R,
    ) -> Result<Analysis, Error> {
        if state.is_done() {
            return Err(Error::GameOver);
        }
        let legal = state.legal_actions();
        let visits = self.run(state, rng)?;
        let policy = policy_from_visits(&visits, temperature, rng);
        let index = sample_index(&policy, rng).ok_or(Error::GameOver)?;

        let mut analysis = Analysis {
            action: legal[index],
            policy: vec![0.0; state.n_actions()],
            visits: vec![0; state.n_actions()],
        };
        for ((&action, &p), &n) in legal.iter().zip(&policy).zip(&visits) {
            analysis.policy[action] = p;
            analysis.visits[action] = n;
        }
        Ok(analysis)
    }
}
