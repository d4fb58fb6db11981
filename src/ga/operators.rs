//! Permutation-preserving search operators.
//!
//! Every operator here maps valid permutations to valid permutations: the
//! searches never have to repair a candidate route. The swap move doubles as
//! the annealing neighborhood.

use rand::seq::SliceRandom;
use rand::Rng;

/// Creates a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Swaps two distinct uniformly chosen positions in place.
///
/// No-op for routes shorter than two stops.
pub fn swap_mutation<R: Rng>(route: &mut [usize], rng: &mut R) {
    let n = route.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    route.swap(i, j);
}

/// Order crossover between two parent permutations.
///
/// Picks two ordered cut points, copies the segment between them verbatim
/// from one parent, then fills the remaining positions left to right with
/// the other parent's genes in their visiting order, skipping genes already
/// present. Both children are valid permutations by construction.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let child1 = build_child(parent1, parent2, start, end);
    let child2 = build_child(parent2, parent1, start, end);
    (child1, child2)
}

/// Copies `template[start..=end]` into the child, then fills the leftmost
/// empty slots with `donor`'s genes in order.
fn build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        present[template[i]] = true;
    }

    let mut pos = 0;
    for &gene in donor {
        if !present[gene] {
            while child[pos] != usize::MAX {
                pos += 1;
            }
            child[pos] = gene;
            present[gene] = true;
        }
    }

    child
}

/// Fitness-proportionate (roulette) selection over ascending-sorted
/// fitness values. Returns the chosen index.
///
/// Weights are the inverted, shifted fitnesses `1 / (1 + f)`, normalized to
/// a distribution; one uniform draw against the cumulative distribution
/// picks the winner. When every weight is zero (all fitnesses infinite) the
/// last index is returned.
///
/// # Panics
///
/// Panics if `fitnesses` is empty.
pub fn roulette_select<R: Rng>(fitnesses: &[f64], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let weights: Vec<f64> = fitnesses.iter().map(|&f| 1.0 / (1.0 + f)).collect();
    let total: f64 = weights.iter().sum();
    let last = fitnesses.len() - 1;
    if total <= 0.0 {
        return last;
    }

    let r = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w / total;
        if r <= cumulative {
            return i;
        }
    }
    last
}
