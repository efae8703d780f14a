//! Mutation operators over fixture orders.
//!
//! Mutations take a representation by value and return the mutated
//! representation. They never touch an `Individual`: the caller wraps the
//! result into a fresh individual, which recomputes fitness.
//!
//! All operators preserve length and content (they only reorder).
//! Sequences shorter than two elements are returned unchanged.
//!
//! | Operator | Move | Cost |
//! |----------|------|------|
//! | [`swap_mutation`] | exchange two positions | O(1) |
//! | [`insertion_mutation`] | move one element backwards | O(n) |
//! | [`inversion_mutation`] | reverse a segment | O(n) |
//! | [`scramble_mutation`] | shuffle a segment | O(n) |
//! | [`displacement_mutation`] | move a segment elsewhere | O(n) |

use rand::seq::SliceRandom;
use rand::Rng;

use super::sampling::distinct_positions;

/// Exchanges the genes at two distinct random positions.
pub fn swap_mutation<T, R: Rng>(mut genes: Vec<T>, rng: &mut R) -> Vec<T> {
    if genes.len() < 2 {
        return genes;
    }
    let (i, j) = distinct_positions(genes.len(), rng);
    genes.swap(i, j);
    genes
}

/// Removes the gene at the higher of two distinct positions and
/// reinserts it at the lower one.
pub fn insertion_mutation<T, R: Rng>(mut genes: Vec<T>, rng: &mut R) -> Vec<T> {
    if genes.len() < 2 {
        return genes;
    }
    let (i, j) = distinct_positions(genes.len(), rng);
    let gene = genes.remove(j);
    genes.insert(i, gene);
    genes
}

/// Reverses the segment `[i, j)` between two distinct positions.
pub fn inversion_mutation<T, R: Rng>(mut genes: Vec<T>, rng: &mut R) -> Vec<T> {
    if genes.len() < 2 {
        return genes;
    }
    let (i, j) = distinct_positions(genes.len(), rng);
    genes[i..j].reverse();
    genes
}

/// Shuffles the segment `[i, j)` between two distinct positions.
pub fn scramble_mutation<T, R: Rng>(mut genes: Vec<T>, rng: &mut R) -> Vec<T> {
    if genes.len() < 2 {
        return genes;
    }
    let (i, j) = distinct_positions(genes.len(), rng);
    genes[i..j].shuffle(rng);
    genes
}

/// Cuts the block `[i, j)` out and reinserts it, order preserved, at a
/// uniform position of the remaining sequence.
pub fn displacement_mutation<T, R: Rng>(mut genes: Vec<T>, rng: &mut R) -> Vec<T> {
    if genes.len() < 2 {
        return genes;
    }
    let (i, j) = distinct_positions(genes.len(), rng);
    let block: Vec<T> = genes.drain(i..j).collect();
    let at = rng.random_range(0..=genes.len());
    genes.splice(at..at, block);
    genes
}
