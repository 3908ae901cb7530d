//! Mask-driven crossover and per-locus mutation operators.
//!
//! These operate on plain gene slices and are independent of any problem.
//! The encodings in [`super::encoding`] wire them up.
//!
//! # Crossover Operators
//!
//! - [`overwrite_crossover`]: masked loci take the mate's gene (any genotype)
//! - [`keep_and_fill_crossover`]: masked loci are kept, the rest are refilled
//!   in the mate's order (permutations only, always yields a permutation)
//!
//! # Mutation Operators
//!
//! - [`point_mutation`]: resample a locus uniformly within bounds
//! - [`swap_mutation`]: transpose a locus with a uniformly random locus
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

use super::encoding::GeneBounds;

// ============================================================================
// Crossover operators
// ============================================================================

/// Draws a mask of `n` loci, each `true` with probability 0.5.
pub fn uniform_mask<R: Rng>(n: usize, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.random_bool(0.5)).collect()
}

/// Uniform overwrite crossover.
///
/// Every locus where `mask` is `true` takes the mate's gene; all other
/// loci keep the parent's gene. Legality is preserved for any genotype
/// whose loci are independent, since the mate's genes are already legal.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn overwrite_crossover<G: Copy>(parent: &mut [G], mate: &[G], mask: &[bool]) {
    assert_eq!(parent.len(), mate.len(), "parents must have equal length");
    assert_eq!(parent.len(), mask.len(), "mask must match chromosome length");

    for ((gene, &other), &take) in parent.iter_mut().zip(mate).zip(mask) {
        if take {
            *gene = other;
        }
    }
}

/// Keep-and-fill repair crossover for permutations.
///
/// The parent's genes at `true` loci are kept, in their original order,
/// at the front of the child. The mate is then scanned left to right and
/// every element not already kept is appended. The child is therefore
/// `kept ++ appended` and is always a permutation of the same elements.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the slices have different lengths or the mate holds an
/// element `>= n`.
pub fn keep_and_fill_crossover(parent: &mut [usize], mate: &[usize], mask: &[bool]) {
    let n = parent.len();
    assert_eq!(n, mate.len(), "parents must have equal length");
    assert_eq!(n, mask.len(), "mask must match chromosome length");

    let mut kept_set = vec![false; n];
    let mut child = Vec::with_capacity(n);

    for (&city, &keep) in parent.iter().zip(mask) {
        if keep {
            kept_set[city] = true;
            child.push(city);
        }
    }
    child.extend(mate.iter().copied().filter(|&city| !kept_set[city]));

    debug_assert_eq!(child.len(), n);
    parent.copy_from_slice(&child);
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Point mutation: each locus is resampled from `bounds` with probability
/// `rate`, discarding its previous value.
pub fn point_mutation<R: Rng>(genes: &mut [i32], bounds: GeneBounds, rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = bounds.sample(rng);
        }
    }
}

/// Swap mutation: each locus, with probability `rate`, is exchanged with a
/// locus drawn uniformly over the whole chromosome (possibly itself).
///
/// # Complexity
/// O(n)
pub fn swap_mutation<G, R: Rng>(genes: &mut [G], rate: f64, rng: &mut R) {
    let n = genes.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            genes.swap(i, j);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Returns `true` if `perm` contains each of `0..n` exactly once.
pub fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    // ---- Overwrite crossover ----

    #[test]
    fn test_overwrite_all_true_copies_mate() {
        let mut parent = vec![0, 0, 0, 0];
        overwrite_crossover(&mut parent, &[1, 2, 3, 4], &[true; 4]);
        assert_eq!(parent, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_overwrite_all_false_keeps_parent() {
        let mut parent = vec![5, 6, 7, 8];
        overwrite_crossover(&mut parent, &[1, 2, 3, 4], &[false; 4]);
        assert_eq!(parent, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_overwrite_mixed_mask() {
        let mut parent = vec![5, 6, 7, 8];
        overwrite_crossover(&mut parent, &[1, 2, 3, 4], &[true, false, false, true]);
        assert_eq!(parent, vec![1, 6, 7, 4]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_overwrite_length_mismatch_panics() {
        let mut parent = vec![1, 2, 3];
        overwrite_crossover(&mut parent, &[1, 2], &[true, true, true]);
    }

    // ---- Keep-and-fill crossover ----

    #[test]
    fn test_keep_and_fill_example() {
        let mut parent = vec![0, 1, 2, 3, 4];
        let mate = [4, 3, 2, 1, 0];
        keep_and_fill_crossover(&mut parent, &mate, &[true, false, true, false, false]);
        // kept: 0, 2; appended in mate order: 4, 3, 1
        assert_eq!(parent, vec![0, 2, 4, 3, 1]);
    }

    #[test]
    fn test_keep_and_fill_all_true_keeps_parent() {
        let mut parent = vec![3, 1, 0, 2];
        keep_and_fill_crossover(&mut parent, &[0, 1, 2, 3], &[true; 4]);
        assert_eq!(parent, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_keep_and_fill_all_false_copies_mate() {
        let mut parent = vec![3, 1, 0, 2];
        keep_and_fill_crossover(&mut parent, &[0, 1, 2, 3], &[false; 4]);
        assert_eq!(parent, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_keep_and_fill_single_element() {
        let mut parent = vec![0];
        keep_and_fill_crossover(&mut parent, &[0], &[false]);
        assert_eq!(parent, vec![0]);
    }

    // ---- Point mutation ----

    #[test]
    fn test_point_mutation_stays_in_bounds() {
        let bounds = GeneBounds::new(-1, 2).unwrap();
        let mut rng = create_rng(42);
        let mut genes = vec![0; 50];
        for _ in 0..20 {
            point_mutation(&mut genes, bounds, 0.5, &mut rng);
            assert!(genes.iter().all(|&g| bounds.contains(g)));
        }
    }

    #[test]
    fn test_point_mutation_rate_one_resamples() {
        let bounds = GeneBounds::new(10, 20).unwrap();
        let mut rng = create_rng(42);
        let mut genes = vec![0; 30];
        point_mutation(&mut genes, bounds, 1.0, &mut rng);
        assert!(genes.iter().all(|&g| (10..20).contains(&g)));
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = (0..10).collect();
        swap_mutation(&mut perm, 0.0, &mut rng);
        assert_eq!(perm, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_swap_rate_one_changes_something() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..20).collect();
        let mut perm = original.clone();
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert!(is_valid_permutation(&perm, 20));
        assert_ne!(perm, original);
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    // ---- Validity helper ----

    #[test]
    fn test_is_valid_permutation() {
        assert!(is_valid_permutation(&[2, 0, 1], 3));
        assert!(!is_valid_permutation(&[0, 0, 1], 3));
        assert!(!is_valid_permutation(&[0, 1, 3], 3));
        assert!(!is_valid_permutation(&[0, 1], 3));
    }

    // ---- Properties ----

    fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
        Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn prop_keep_and_fill_yields_permutation(
            (p1, p2, mask) in (1usize..40).prop_flat_map(|n| (
                permutation(n),
                permutation(n),
                proptest::collection::vec(any::<bool>(), n),
            ))
        ) {
            let n = p1.len();
            let mut child = p1.clone();
            keep_and_fill_crossover(&mut child, &p2, &mask);
            prop_assert!(is_valid_permutation(&child, n));

            // kept genes lead the child in the parent's order
            let kept: Vec<usize> = p1
                .iter()
                .zip(&mask)
                .filter(|&(_, &m)| m)
                .map(|(&c, _)| c)
                .collect();
            prop_assert_eq!(&child[..kept.len()], &kept[..]);
        }

        #[test]
        fn prop_swap_mutation_yields_permutation(
            perm in (1usize..40).prop_flat_map(permutation),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let n = perm.len();
            let mut rng = create_rng(seed);
            let mut child = perm;
            swap_mutation(&mut child, rate, &mut rng);
            prop_assert!(is_valid_permutation(&child, n));
        }

        #[test]
        fn prop_point_mutation_respects_bounds(
            low in -50i32..50,
            width in 1i32..20,
            len in 1usize..40,
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let bounds = GeneBounds::new(low, low + width).unwrap();
            let mut rng = create_rng(seed);
            let mut genes = vec![low; len];
            point_mutation(&mut genes, bounds, rate, &mut rng);
            prop_assert!(genes.iter().all(|&g| bounds.contains(g)));
        }
    }
}
