//! Seeded random streams
//!
//! Every generator takes its randomness through an explicit `&mut R: Rng`
//! handle. The binaries create that handle here, one stream per run.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create the run's random stream. Returns the seed actually used so it can
/// be logged and replayed.
pub fn stream(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!("Using random seed {}", seed);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}

/// Uniform value between `a` and `b`. The bounds may come in either order
/// and may be equal; an empty range never panics.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.gen::<f64>()
}

/// Uniform integer in `0..upper`, or 0 when the range is empty.
pub fn randrange<R: Rng + ?Sized>(rng: &mut R, upper: usize) -> usize {
    if upper == 0 {
        0
    } else {
        rng.gen_range(0..upper)
    }
}

/// Fair coin toss.
pub fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let (mut a, seed_a) = stream(Some(7));
        let (mut b, seed_b) = stream(Some(7));
        assert_eq!(seed_a, seed_b);
        for _ in 0..32 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn test_uniform_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = uniform(&mut rng, -2.0, 2.0);
            assert!((-2.0..=2.0).contains(&v));
        }
    }

    #[test]
    fn test_uniform_reversed_and_empty_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let v = uniform(&mut rng, 3.0, 1.0);
        assert!((1.0..=3.0).contains(&v));
        assert_eq!(uniform(&mut rng, 5.0, 5.0), 5.0);
    }

    #[test]
    fn test_randrange_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(randrange(&mut rng, 0), 0);
        for _ in 0..100 {
            assert!(randrange(&mut rng, 3) < 3);
        }
    }
}
