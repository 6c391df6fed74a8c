use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};

/// Turn visit counts into a distribution.
///
/// A temperature of zero (or anything not positive) puts all weight on one
/// of the most visited entries, chosen at random. Otherwise the weights are
/// `visits^(1 / temperature)`, normalized. If nothing was visited the result
/// is uniform.
pub fn policy_from_visits<R: Rng + ?Sized>(visits: &[u32], temperature: f32, rng: &mut R) -> Vec<f32> {
    let max = visits.iter().copied().max().unwrap_or_default();
    if max == 0 {
        return vec![1.0 / visits.len().max(1) as f32; visits.len()];
    }

    if !(temperature > 0.0) {
        let mut policy = vec![0.0; visits.len()];
        policy[random_argmax(visits, max, rng)] = 1.0;
        return policy;
    }

    // Scale by the maximum first so that the power cannot overflow.
    let exponent = 1.0 / f64::from(temperature);
    let weights: Vec<f64> = visits
        .iter()
        .map(|&v| (f64::from(v) / f64::from(max)).powf(exponent))
        .collect();
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        let mut policy = vec![0.0; visits.len()];
        policy[random_argmax(visits, max, rng)] = 1.0;
        return policy;
    }
    weights.into_iter().map(|w| (w / total) as f32).collect()
}

fn random_argmax<R: Rng + ?Sized>(visits: &[u32], max: u32, rng: &mut R) -> usize {
    let ties = visits.iter().filter(|&&v| v == max).count();
    let pick = rng.gen_range(0..ties);
    visits
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == max)
        .nth(pick)
        .map(|(index, _)| index)
        .unwrap_or_default()
}

/// Randomly pick an index weighted by `policy`.
/// Falls back to a uniform pick if the weights are unusable.
/// Returns `None` for an empty policy.
pub fn sample_index<R: Rng + ?Sized>(policy: &[f32], rng: &mut R) -> Option<usize> {
    if policy.is_empty() {
        return None;
    }
    Some(match WeightedIndex::new(policy) {
        Ok(distr) => distr.sample(rng),
        Err(_) => rng.gen_range(0..policy.len()),
    })
}
