use log::debug;
use rand::Rng;
use rand_distr::{Dirichlet, Distribution};

/// Mix Dirichlet noise into a normalized policy:
/// `(1 - ratio) * policy + ratio * Dir(alpha)`.
pub fn add_dirichlet<R: Rng + ?Sized>(policy: &mut [f32], alpha: f32, ratio: f32, rng: &mut R) {
    let noise = dirichlet_sample(policy.len(), alpha, rng);
    for (p, noise) in policy.iter_mut().zip(noise) {
        *p = noise * ratio + *p * (1. - ratio);
    }
}

/// Sample from a symmetric Dirichlet distribution.
/// Degenerate cases fall back to the uniform distribution.
fn dirichlet_sample<R: Rng + ?Sized>(len: usize, alpha: f32, rng: &mut R) -> Vec<f32> {
    let uniform = vec![1.0 / len.max(1) as f32; len];
    if len < 2 {
        return uniform;
    }
    let dirichlet = match Dirichlet::new(&vec![alpha; len]) {
        Ok(dirichlet) => dirichlet,
        Err(err) => {
            debug!("falling back to uniform noise: {err}");
            return uniform;
        }
    };
    let samples: Vec<f32> = dirichlet.sample(rng);
    let total: f32 = samples.iter().sum();
    if samples.iter().all(|x| x.is_finite()) && total.is_finite() && total > 0.0 {
        samples.into_iter().map(|x| x / total).collect()
    } else {
        debug!("dirichlet sample degenerated, falling back to uniform noise");
        uniform
    }
}
