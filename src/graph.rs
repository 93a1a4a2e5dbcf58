use std::fmt;

use itertools::Itertools;

use crate::error::{GraphError, Result};

/// A directed multigraph stored as a dense adjacency matrix.
///
/// `adj[i][j]` is the number of edges from vertex `i` to vertex `j`. Graphs are
/// immutable once built; every transformation returns a new `Graph`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Number of vertices
    n: usize,
    /// Adjacency matrix, always `n` rows of `n` entries
    adj: Vec<Vec<usize>>,
    /// Vertex count plus total edge weight
    size: usize,
}

impl Graph {
    /// Creates an edgeless graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Graph {
            n,
            adj: vec![vec![0; n]; n],
            size: n,
        }
    }

    /// Builds a graph from a square adjacency matrix.
    ///
    /// # Panics
    /// Panics if any row's length differs from the number of rows, or if the
    /// total edge weight overflows `usize`. Use
    /// [`Graph::try_from_adjacency_matrix`] for untrusted input.
    pub fn from_adjacency_matrix(adj: Vec<Vec<usize>>) -> Self {
        let n = adj.len();
        assert!(
            adj.iter().all(|row| row.len() == n),
            "adjacency matrix must be square"
        );
        match Self::from_square(adj) {
            Ok(graph) => graph,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a graph from an adjacency matrix, rejecting non-square input
    /// and weights whose total overflows `usize`.
    pub fn try_from_adjacency_matrix(adj: Vec<Vec<usize>>) -> Result<Self> {
        let n = adj.len();
        if let Some((row, cells)) = adj.iter().find_position(|row| row.len() != n) {
            return Err(GraphError::NotSquare {
                row,
                expected: n,
                actual: cells.len(),
            });
        }
        Self::from_square(adj)
    }

    /// Builds a graph from a stream of numbers: the vertex count `n` followed
    /// by `n * n` cells in row-major order.
    ///
    /// Only the tokens the graph needs are consumed; anything after the last
    /// cell is left in the iterator.
    pub fn from_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut tokens = tokens.into_iter();
        let n = tokens.next().ok_or(GraphError::MissingVertexCount)?;
        let expected = n
            .checked_mul(n)
            .ok_or(GraphError::VertexCountTooLarge(n))?;
        if n == 0 {
            return Ok(Graph::new(0));
        }

        let cells: Vec<usize> = tokens.by_ref().take(expected).collect();
        if cells.len() < expected {
            return Err(GraphError::TruncatedMatrix {
                expected,
                found: cells.len(),
            });
        }

        let adj = cells.chunks(n).map(<[usize]>::to_vec).collect();
        Self::from_square(adj)
    }

    fn from_square(adj: Vec<Vec<usize>>) -> Result<Self> {
        let n = adj.len();
        let size = adj
            .iter()
            .flatten()
            .try_fold(n, |acc, &weight| acc.checked_add(weight))
            .ok_or(GraphError::WeightOverflow)?;
        Ok(Graph { n, adj, size })
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Vertex count plus the sum of all edge weights.
    ///
    /// This is neither the vertex count nor the edge count; it is the cheap
    /// signature the distance metric compares.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get_edge(&self, u: usize, v: usize) -> usize {
        self.adj[u][v]
    }

    pub fn row(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.adj.iter().map(Vec::as_slice)
    }

    /// Total out-weight plus total in-weight of `v`.
    pub fn combined_degree(&self, v: usize) -> usize {
        let out: usize = self.adj[v].iter().sum();
        let incoming: usize = self.adj.iter().map(|row| row[v]).sum();
        out.saturating_add(incoming)
    }

    /// Induced subgraph on `vertices`, relabelled `0..vertices.len()` in the
    /// order given.
    pub fn sub_graph(&self, vertices: &[usize]) -> Graph {
        let adj = vertices
            .iter()
            .map(|&u| vertices.iter().map(|&v| self.adj[u][v]).collect())
            .collect();
        Self::from_adjacency_matrix(adj)
    }

    /// Renders the graph in the DOT language, one `i -> j` line per unit of
    /// edge weight.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph {\n");
        for (u, row) in self.adj.iter().enumerate() {
            for (v, &weight) in row.iter().enumerate() {
                for _ in 0..weight {
                    dot.push_str(&format!("  {} -> {}\n", u, v));
                }
            }
        }
        dot.push('}');
        dot
    }
}

/// Writes the textual format read by [`crate::parser::parse_graph`].
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        for row in &self.adj {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
