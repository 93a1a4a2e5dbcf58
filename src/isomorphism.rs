use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::permutation::LexicographicPermutations;
use crate::{Accuracy, Graph};

/// Combined degree -> number of vertices with that combined degree.
pub type DegreeHistogram = HashMap<usize, usize>;

/// Checks `a[i][j] == b[p[i]][p[j]]` for every pair of vertices.
fn preserves_edges(a: &Graph, b: &Graph, permutation: &[usize]) -> bool {
    let n = a.num_vertices();
    (0..n).all(|i| {
        (0..n).all(|j| a.get_edge(i, j) == b.get_edge(permutation[i], permutation[j]))
    })
}

/// Finds the lexicographically first permutation `p` with
/// `a[i][j] == b[p[i]][p[j]]` for all `i, j`.
///
/// Exhaustive over all `n!` permutations, so only usable on small graphs.
/// Graphs that differ in size or vertex count are rejected up front.
pub fn find_isomorphism(a: &Graph, b: &Graph) -> Option<Vec<usize>> {
    if a.size() != b.size() || a.num_vertices() != b.num_vertices() {
        return None;
    }

    let found = LexicographicPermutations::new(a.num_vertices())
        .find(|permutation| preserves_edges(a, b, permutation));

    if let Some(permutation) = &found {
        debug!(?permutation, "isomorphism found");
    }
    found
}

pub fn is_isomorphic(a: &Graph, b: &Graph) -> bool {
    find_isomorphism(a, b).is_some()
}

pub fn degree_histogram(g: &Graph) -> DegreeHistogram {
    (0..g.num_vertices())
        .map(|v| g.combined_degree(v))
        .counts()
}

/// Compares combined-degree multisets.
///
/// Never rejects a true isomorph, but accepts some non-isomorphic pairs whose
/// degree sequences happen to agree.
pub fn approx_isomorphic(a: &Graph, b: &Graph) -> bool {
    degree_histogram(a) == degree_histogram(b)
}

/// Distance between two graphs.
///
/// With `Δ = |a.size() - b.size()|`, approximate mode returns `Δ`; exact mode
/// returns `max(Δ, 1)` unless the graphs are isomorphic, in which case it
/// returns 0. The permutation search only runs when `Δ == 0`.
pub fn metric_distance(a: &Graph, b: &Graph, accuracy: Accuracy) -> usize {
    let delta = a.size().abs_diff(b.size());
    match accuracy {
        Accuracy::Approximate => delta,
        Accuracy::Exact if delta > 0 => delta,
        Accuracy::Exact => usize::from(!is_isomorphic(a, b)),
    }
}

impl Graph {
    pub fn is_isomorphic_to(&self, other: &Graph) -> bool {
        is_isomorphic(self, other)
    }

    pub fn approx_isomorphic_to(&self, other: &Graph) -> bool {
        approx_isomorphic(self, other)
    }

    pub fn metric_distance_to(&self, other: &Graph, accuracy: Accuracy) -> usize {
        metric_distance(self, other, accuracy)
    }
}
