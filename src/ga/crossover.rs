//! Crossover operators over fixture orders.
//!
//! Every operator takes two parents of equal length and returns two
//! offspring of that length. The operators are generic over the gene type
//! so they apply to `Fixture` sequences as well as plain index vectors.
//!
//! # Permutation-preserving
//!
//! [`cycle_crossover`], [`pmx_crossover`], [`order_crossover`],
//! [`subtour_crossover`], [`modified_order_crossover`] and
//! [`position_based_crossover`] return reorderings of the parents'
//! multiset whenever both parents are reorderings of the same multiset.
//!
//! # Not permutation-preserving
//!
//! [`single_point_crossover`], [`two_point_crossover`],
//! [`geometric_crossover`] and [`uniform_crossover`] recombine positions
//! without repair and may duplicate or drop fixtures. The fitness pairing
//! penalty is what steers the search away from such offspring.
//!
//! # References
//!
//! - Oliver, Smith & Holland (1987), "A study of permutation crossover operators"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Syswerda (1991), "Schedule Optimization Using Genetic Algorithms"

use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

use super::sampling::{distinct_positions, distinct_positions_unordered, ordered_positions};

/// Single-point crossover: swap tails after a cut in `1..n`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let cut = rng.random_range(1..n);
    let child1 = [&parent1[..cut], &parent2[cut..]].concat();
    let child2 = [&parent2[..cut], &parent1[cut..]].concat();
    (child1, child2)
}

/// Two-point crossover: swap the segment `[a, b)` between parents.
///
/// `a` and `b` are drawn independently, so the segment may be empty.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (a, b) = ordered_positions(n, rng);
    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    child1[a..b].clone_from_slice(&parent2[a..b]);
    child2[a..b].clone_from_slice(&parent1[a..b]);
    (child1, child2)
}

/// Cycle crossover (CX).
///
/// Partitions positions into cycles: starting at an unvisited position
/// `i`, the next position is where `parent2[i]` sits in `parent1`. Whole
/// cycles are copied alternately: even cycles keep parent1's genes in
/// child1, odd cycles take parent2's.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn cycle_crossover<T: Clone + Eq + Hash>(parent1: &[T], parent2: &[T]) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    let mut position: HashMap<&T, usize> = HashMap::with_capacity(n);
    for (i, gene) in parent1.iter().enumerate() {
        position.entry(gene).or_insert(i);
    }

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    let mut visited = vec![false; n];
    let mut cycle = 0usize;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut idx = start;
        loop {
            visited[idx] = true;
            if cycle % 2 == 1 {
                child1[idx] = parent2[idx].clone();
                child2[idx] = parent1[idx].clone();
            }
            match position.get(&parent2[idx]) {
                Some(&next) if !visited[next] => idx = next,
                _ => break,
            }
        }
        cycle += 1;
    }

    (child1, child2)
}

/// Partially matched crossover (PMX).
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Pick two distinct cut points `a < b`
/// 2. Copy `template[a..b]` into the child
/// 3. For each gene of `donor[a..b]` missing from that segment, follow the
///    mapping `template[pos] -> position in donor` until a free slot is found
/// 4. Fill the remaining slots from the donor at the same positions
///
/// # Panics
/// Panics if parents have different lengths.
pub fn pmx_crossover<T: Clone + Eq + Hash, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (a, b) = distinct_positions(n, rng);
    (
        pmx_build_child(parent1, parent2, a, b),
        pmx_build_child(parent2, parent1, a, b),
    )
}

fn pmx_build_child<T: Clone + Eq + Hash>(
    template: &[T],
    donor: &[T],
    a: usize,
    b: usize,
) -> Vec<T> {
    let n = template.len();
    let mut child: Vec<Option<T>> = vec![None; n];
    let mut segment = multiset(&template[a..b]);
    for i in a..b {
        child[i] = Some(template[i].clone());
    }

    let mut donor_pos: HashMap<&T, usize> = HashMap::with_capacity(n);
    for (i, gene) in donor.iter().enumerate() {
        donor_pos.entry(gene).or_insert(i);
    }

    for i in a..b {
        let gene = &donor[i];
        if take(&mut segment, gene) {
            continue;
        }
        // Bounded walk: the chain always ends outside the segment for permutations.
        let mut pos = i;
        for _ in 0..n {
            let Some(&next) = donor_pos.get(&template[pos]) else {
                break;
            };
            if child[next].is_none() {
                child[next] = Some(gene.clone());
                break;
            }
            pos = next;
        }
    }

    fill_positional(child, donor)
}

/// Geometric crossover: a fresh coin per position picks the parent that
/// feeds child1; child2 receives the other parent's gene.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn geometric_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    check_lengths(parent1, parent2);
    parent1
        .iter()
        .zip(parent2)
        .map(|(g1, g2)| {
            if rng.random::<f64>() < 0.5 {
                (g1.clone(), g2.clone())
            } else {
                (g2.clone(), g1.clone())
            }
        })
        .unzip()
}

/// Uniform crossover: per position, keep or swap the pair of genes.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    check_lengths(parent1, parent2);
    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    for i in 0..child1.len() {
        if rng.random_bool(0.5) {
            std::mem::swap(&mut child1[i], &mut child2[i]);
        }
    }
    (child1, child2)
}

/// Order crossover (OX).
///
/// # Algorithm (Davis, 1985)
///
/// 1. Pick two distinct cut points `a < b`
/// 2. Each child keeps its own parent's segment `[a, b)`
/// 3. The free slots, starting at `b` and wrapping, are filled with the
///    other parent's genes read from `b` onwards, skipping genes the
///    segment already holds
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<T: Clone + Eq + Hash, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (a, b) = distinct_positions(n, rng);
    let segment: Vec<usize> = (a..b).collect();
    (
        ox_build_child(parent1, parent2, &segment, b, b),
        ox_build_child(parent2, parent1, &segment, b, b),
    )
}

/// Subtour crossover: OX with independently drawn bounds.
///
/// The bounds may coincide, in which case each child is the other parent
/// rotated to start at the cut.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn subtour_crossover<T: Clone + Eq + Hash, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (a, b) = ordered_positions(n, rng);
    let segment: Vec<usize> = (a..b).collect();
    (
        ox_build_child(parent1, parent2, &segment, b, b),
        ox_build_child(parent2, parent1, &segment, b, b),
    )
}

/// Modified order crossover: OX over a circular segment.
///
/// The segment runs from `start` up to `end` (exclusive) and wraps past
/// the end of the sequence when `start > end`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn modified_order_crossover<T: Clone + Eq + Hash, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (start, end) = distinct_positions_unordered(n, rng);
    let segment: Vec<usize> = if start < end {
        (start..end).collect()
    } else {
        (start..n).chain(0..end).collect()
    };
    (
        ox_build_child(parent1, parent2, &segment, end, end),
        ox_build_child(parent2, parent1, &segment, end, end),
    )
}

/// Position-based crossover.
///
/// Child1 receives parent2's segment `[a, b)`; its free slots, scanned
/// from the front, take parent1's genes read from `b` onwards (wrapping),
/// skipping genes the segment already holds. Child2 is symmetric.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn position_based_crossover<T: Clone + Eq + Hash, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = check_lengths(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (a, b) = distinct_positions(n, rng);
    let segment: Vec<usize> = (a..b).collect();
    (
        ox_build_child(parent2, parent1, &segment, 0, b),
        ox_build_child(parent1, parent2, &segment, 0, b),
    )
}

/// Builds one segment-then-fill child.
///
/// Copies `template` at the `segment` positions, then walks `donor`
/// circularly from `donor_start`, placing each gene into the next free
/// slot (circularly from `slot_start`). One donor copy of every segment
/// gene is skipped, which keeps the child a reordering of the parents'
/// multiset.
fn ox_build_child<T: Clone + Eq + Hash>(
    template: &[T],
    donor: &[T],
    segment: &[usize],
    slot_start: usize,
    donor_start: usize,
) -> Vec<T> {
    let n = template.len();
    let mut child: Vec<Option<T>> = vec![None; n];
    let mut reserved: HashMap<&T, usize> = HashMap::new();
    for &i in segment {
        child[i] = Some(template[i].clone());
        *reserved.entry(&template[i]).or_insert(0) += 1;
    }

    let mut free = n - segment.len();
    let mut slot = slot_start % n;
    for offset in 0..n {
        if free == 0 {
            break;
        }
        let gene = &donor[(donor_start + offset) % n];
        if take(&mut reserved, gene) {
            continue;
        }
        while child[slot].is_some() {
            slot = (slot + 1) % n;
        }
        child[slot] = Some(gene.clone());
        free -= 1;
    }

    fill_positional(child, donor)
}

/// Counts occurrences of each gene.
fn multiset<T: Eq + Hash>(genes: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::with_capacity(genes.len());
    for gene in genes {
        *counts.entry(gene).or_insert(0) += 1;
    }
    counts
}

/// Consumes one occurrence of `gene`, returning whether one was available.
fn take<T: Eq + Hash>(counts: &mut HashMap<&T, usize>, gene: &T) -> bool {
    match counts.get_mut(gene) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

/// Fills slots still empty with the donor's gene at the same position.
fn fill_positional<T: Clone>(child: Vec<Option<T>>, donor: &[T]) -> Vec<T> {
    child
        .into_iter()
        .zip(donor)
        .map(|(gene, fallback)| gene.unwrap_or_else(|| fallback.clone()))
        .collect()
}

fn check_lengths<T>(parent1: &[T], parent2: &[T]) -> usize {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    parent1.len()
}
