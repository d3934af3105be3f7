use crate::types::Antibody;
use std::cmp::Ordering;

/// Distance measure that scores antibodies against the antigen corpus.
///
/// The engine never interprets affinities on its own: whether a larger
/// value is better, how many clones an antibody earns and how hard it
/// mutates are all decided here.
pub trait AffinityMetric {
    /// Total addressable length of the antigen space
    fn sequence_space_size(&self) -> usize;

    /// Score `sequence` aligned at `offset` within the antigen space
    fn score(&self, sequence: &[u8], offset: usize, length: usize) -> f64;

    /// Clones per viable symbol for an antibody with this affinity
    fn clone_rate(&self, affinity: f64, length: usize) -> f64;

    /// Fraction of viable symbols to overwrite
    fn mutation_rate(&self, affinity: f64, length: usize) -> f64;

    /// True when `a` is strictly better than `b`
    fn is_better_affinity(&self, a: f64, b: f64) -> bool;

    /// Indices into `population`, best first. The default is a stable sort
    /// driven by [`AffinityMetric::is_better_affinity`].
    fn order(&self, population: &[Antibody]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..population.len()).collect();
        indices.sort_by(|&a, &b| {
            let (fa, fb) = (population[a].affinity(), population[b].affinity());
            if self.is_better_affinity(fa, fb) {
                Ordering::Less
            } else if self.is_better_affinity(fb, fa) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        indices
    }
}

impl<M: AffinityMetric + ?Sized> AffinityMetric for &M {
    fn sequence_space_size(&self) -> usize {
        (**self).sequence_space_size()
    }

    fn score(&self, sequence: &[u8], offset: usize, length: usize) -> f64 {
        (**self).score(sequence, offset, length)
    }

    fn clone_rate(&self, affinity: f64, length: usize) -> f64 {
        (**self).clone_rate(affinity, length)
    }

    fn mutation_rate(&self, affinity: f64, length: usize) -> f64 {
        (**self).mutation_rate(affinity, length)
    }

    fn is_better_affinity(&self, a: f64, b: f64) -> bool {
        (**self).is_better_affinity(a, b)
    }

    fn order(&self, population: &[Antibody]) -> Vec<usize> {
        (**self).order(population)
    }
}
