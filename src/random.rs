//! Explicitly owned random streams.
//!
//! Every stochastic operator takes a `&mut R: Rng` handle instead of
//! touching process-wide state, so a fixed seed reproduces a run exactly.
//! During a generation each individual gets its own sub-stream, which keeps
//! the serial and rayon-parallel paths bit-identical.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded standard RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Splits `n` independent sub-streams off a parent stream.
///
/// The parent advances by exactly `n` draws regardless of how the
/// sub-streams are consumed afterwards.
pub fn substreams<R: Rng>(rng: &mut R, n: usize) -> Vec<StdRng> {
    (0..n).map(|_| StdRng::seed_from_u64(rng.random())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_substreams_are_reproducible() {
        let mut a = create_rng(11);
        let mut b = create_rng(11);
        let sa: Vec<u64> = substreams(&mut a, 4)
            .iter_mut()
            .map(|r| r.random())
            .collect();
        let sb: Vec<u64> = substreams(&mut b, 4)
            .iter_mut()
            .map(|r| r.random())
            .collect();
        assert_eq!(sa, sb);
        // parent streams stay in lockstep too
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_substreams_differ() {
        let mut rng = create_rng(3);
        let mut subs = substreams(&mut rng, 2);
        let x: u64 = subs[0].random();
        let y: u64 = subs[1].random();
        assert_ne!(x, y);
    }
}
