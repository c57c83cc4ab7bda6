//! Strongly biased integer sampling
//!
//! A single triangular draw only leans towards its mode. Drawing several
//! times and keeping the most frequent outcome concentrates the result much
//! more tightly around the mode; the number of draws is the bias strength.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Triangular};

/// Attempts made to find a non-colliding sample before giving up
pub const MAX_ATTEMPTS: usize = 100;

/// Most frequent integer among `iterations` triangular samples over
/// `[low, high)` with mode `bias`. Ties are broken with `rng`.
pub fn triangular_stronger_bias<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    bias: f64,
    iterations: usize,
) -> usize {
    let floor = low.max(0.0) as usize;
    if !(high > low) {
        return floor;
    }
    let distribution = match Triangular::new(low, high, bias.clamp(low, high)) {
        Ok(d) => d,
        Err(_) => return floor,
    };
    let cap = (high.ceil() as usize).saturating_sub(1).max(floor);

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for _ in 0..iterations.max(1) {
        let value = (distribution.sample(rng).max(0.0) as usize).min(cap);
        *counts.entry(value).or_insert(0) += 1;
    }

    let top = counts.values().copied().max().unwrap_or(0);
    let modes: Vec<usize> = counts
        .iter()
        .filter(|(_, count)| **count == top)
        .map(|(&value, _)| value)
        .collect();
    modes.choose(rng).copied().unwrap_or(floor)
}

/// Draw biased samples until `accept` passes, at most `MAX_ATTEMPTS` times.
/// Returns the last sample and whether it was accepted.
pub fn sample_until<R, F>(
    rng: &mut R,
    colors: usize,
    bias: f64,
    iterations: usize,
    accept: F,
) -> (usize, bool)
where
    R: Rng + ?Sized,
    F: Fn(usize) -> bool,
{
    let mut value = 0;
    for _ in 0..MAX_ATTEMPTS {
        value = triangular_stronger_bias(rng, 0.0, colors as f64, bias, iterations);
        if accept(value) {
            return (value, true);
        }
    }
    (value, false)
}
