//! Maximum clique search.
//!
//! A backtracking expansion over vertex indices in increasing order. Every
//! clique is visited exactly once, and all cliques of the largest size seen
//! are kept. In approximate mode the number of recursive calls is capped at
//! `ESTIMATE_MULTIPLIER * n * n`; the search then stops and reports what it
//! has found so far.

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{Accuracy, Graph};

/// Scales the approximate-mode call budget, `ESTIMATE_MULTIPLIER * n * n`.
pub const ESTIMATE_MULTIPLIER: usize = 10;

/// When a vertex may join a clique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Edges in both directions to every member.
    Mutual,
    /// An edge in at least one direction to every member.
    Either,
}

impl Adjacency {
    pub fn connects(self, graph: &Graph, u: usize, v: usize) -> bool {
        let forward = graph.get_edge(u, v) > 0;
        let backward = graph.get_edge(v, u) > 0;
        match self {
            Adjacency::Mutual => forward && backward,
            Adjacency::Either => forward || backward,
        }
    }
}

/// Counts recursive calls against an optional limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallBudget {
    spent: usize,
    limit: Option<usize>,
}

impl CallBudget {
    /// Unlimited for exact searches, `ESTIMATE_MULTIPLIER * n * n` calls for
    /// approximate ones.
    pub fn new(vertices: usize, accuracy: Accuracy) -> Self {
        match accuracy {
            Accuracy::Exact => Self::unlimited(),
            Accuracy::Approximate => {
                Self::with_limit(ESTIMATE_MULTIPLIER.saturating_mul(vertices.saturating_mul(vertices)))
            }
        }
    }

    pub fn unlimited() -> Self {
        Self {
            spent: 0,
            limit: None,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            spent: 0,
            limit: Some(limit),
        }
    }

    /// Records one call. Returns `false`, recording nothing, once the limit
    /// has been reached.
    pub fn try_spend(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.spent += 1;
        true
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.spent >= limit)
    }

    pub fn spent(&self) -> usize {
        self.spent
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Every clique of the largest size seen, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxCliques {
    cliques: Vec<Vec<usize>>,
}

impl MaxCliques {
    fn offer(&mut self, clique: &[usize]) {
        match self.cliques.first().map(Vec::len) {
            Some(best) if clique.len() < best => {}
            Some(best) if clique.len() == best => self.cliques.push(clique.to_vec()),
            _ => {
                self.cliques.clear();
                self.cliques.push(clique.to_vec());
            }
        }
    }

    /// Size shared by every recorded clique, 0 if none were recorded.
    pub fn clique_size(&self) -> usize {
        self.cliques.first().map_or(0, Vec::len)
    }

    pub fn first(&self) -> Option<&[usize]> {
        self.cliques.first().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[usize]> + '_ {
        self.cliques.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.cliques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.cliques
    }
}

/// Recursive backtracking: record `clique`, then try every vertex from `start`
/// onward that `adjacency` connects to all current members.
fn expand(
    graph: &Graph,
    adjacency: Adjacency,
    start: usize,
    clique: &mut Vec<usize>,
    best: &mut MaxCliques,
    budget: &mut CallBudget,
) {
    if !budget.try_spend() {
        return;
    }
    best.offer(clique);

    for v in start..graph.num_vertices() {
        if clique.iter().all(|&member| adjacency.connects(graph, v, member)) {
            clique.push(v);
            expand(graph, adjacency, v + 1, clique, best, budget);
            clique.pop();

            if budget.is_exhausted() {
                trace!(spent = budget.spent(), "clique search budget exhausted");
                return;
            }
        }
    }
}

/// Runs the search against a caller-supplied budget, which is left holding
/// the number of calls made.
pub fn search_max_cliques(
    graph: &Graph,
    adjacency: Adjacency,
    budget: &mut CallBudget,
) -> MaxCliques {
    let mut best = MaxCliques::default();
    let mut clique = Vec::with_capacity(graph.num_vertices());
    expand(graph, adjacency, 0, &mut clique, &mut best, budget);
    best
}

/// All maximum cliques under `adjacency`.
pub fn max_cliques(graph: &Graph, adjacency: Adjacency, accuracy: Accuracy) -> MaxCliques {
    let mut budget = CallBudget::new(graph.num_vertices(), accuracy);
    let best = search_max_cliques(graph, adjacency, &mut budget);
    debug!(
        ?adjacency,
        ?accuracy,
        calls = budget.spent(),
        clique_size = best.clique_size(),
        candidates = best.len(),
        "clique search finished"
    );
    best
}

/// The first maximum clique found whose members are pairwise connected in
/// both directions.
pub fn max_clique(graph: &Graph, accuracy: Accuracy) -> Vec<usize> {
    max_cliques(graph, Adjacency::Mutual, accuracy)
        .first()
        .map(<[usize]>::to_vec)
        .unwrap_or_default()
}

/// The maximum clique under [`Adjacency::Either`] with the most directed
/// connections, then the largest edge weight; the earliest found wins any
/// remaining tie.
pub fn modified_max_clique(graph: &Graph, accuracy: Accuracy) -> Vec<usize> {
    let cliques = max_cliques(graph, Adjacency::Either, accuracy);
    // max_by_key keeps the last maximum, so walk backwards
    cliques
        .iter()
        .rev()
        .max_by_key(|clique| (total_connections(graph, clique), edge_count(graph, clique)))
        .map(<[usize]>::to_vec)
        .unwrap_or_default()
}

/// Ordered pairs of distinct members joined by at least one edge.
pub fn total_connections(graph: &Graph, clique: &[usize]) -> usize {
    clique
        .iter()
        .cartesian_product(clique)
        .filter(|&(&u, &v)| u != v && graph.get_edge(u, v) > 0)
        .count()
}

/// Summed edge weight between members, both directions.
pub fn edge_count(graph: &Graph, clique: &[usize]) -> usize {
    clique
        .iter()
        .tuple_combinations()
        .map(|(&u, &v)| graph.get_edge(u, v) + graph.get_edge(v, u))
        .sum()
}

/// Induced subgraph on [`max_clique`].
pub fn max_clique_graph(graph: &Graph, accuracy: Accuracy) -> Graph {
    graph.sub_graph(&max_clique(graph, accuracy))
}

impl Graph {
    pub fn max_clique(&self, accuracy: Accuracy) -> Vec<usize> {
        max_clique(self, accuracy)
    }

    pub fn modified_max_clique(&self, accuracy: Accuracy) -> Vec<usize> {
        modified_max_clique(self, accuracy)
    }

    pub fn max_clique_graph(&self, accuracy: Accuracy) -> Graph {
        max_clique_graph(self, accuracy)
    }
}
