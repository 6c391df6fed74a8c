use log::trace;
use rand::Rng;

use super::node::Node;
use crate::{error::Error, oracle::legal_prior, Oracle};

impl Node {
    /// Run one simulation from this node and return its value for this node's mover.
    pub fn evaluate<O, R>(&mut self, oracle: &O, c_puct: f32, rng: &mut R) -> Result<f32, Error>
    where
        O: Oracle + ?Sized,
        R: Rng + ?Sized,
    {
        let value = if self.state.is_done() {
            if self.state.is_lose() {
                -1.0
            } else {
                0.0
            }
        } else if self.is_expanded() {
            let index = self.select(c_puct, rng);
            // Negate because we are switching the perspective.
            -self.children[index].1.evaluate(oracle, c_puct, rng)?
        } else {
            let (prior, value) = legal_prior(oracle, &self.state)?;
            let mut children = Vec::with_capacity(prior.len());
            for (action, policy) in prior {
                children.push((action, Node::new(self.state.next(action)?, policy)));
            }
            trace!("expanded node with {} children, value {value}", children.len());
            self.children = children;
            value
        };
        self.update(value);
        Ok(value)
    }

    /// Index of the child with the highest score.
    /// Ties are broken uniformly at random.
    fn select<R: Rng + ?Sized>(&self, c_puct: f32, rng: &mut R) -> usize {
        let mut best = 0;
        let mut best_score = f32::NEG_INFINITY;
        let mut ties = 0;
        for (index, (_, child)) in self.children.iter().enumerate() {
            let score = self.upper_confidence_bound(child, c_puct);
            if score > best_score {
                best = index;
                best_score = score;
                ties = 1;
            } else if score == best_score {
                // Reservoir sampling over all maxima.
                ties += 1;
                if rng.gen_range(0..ties) == 0 {
                    best = index;
                }
            }
        }
        best
    }
}
