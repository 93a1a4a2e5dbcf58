use tracing::debug;

use crate::clique::modified_max_clique;
use crate::{Accuracy, Graph};

/// Modular product of `a` and `b`.
///
/// Vertex `i1 * n2 + i2` pairs vertex `i1` of `a` with vertex `i2` of `b`. Two
/// product vertices are joined when both factor pairs are distinct and the
/// factors agree: with weight `min` of the two edges when both are present,
/// or weight 1 when both are absent.
///
/// # Panics
/// Panics if the product's total edge weight overflows `usize`.
pub fn modular_product(a: &Graph, b: &Graph) -> Graph {
    let n2 = b.num_vertices();
    let order = a.num_vertices() * n2;
    let mut adj = vec![vec![0; order]; order];

    for (row, cells) in adj.iter_mut().enumerate() {
        let (i1, i2) = (row / n2, row % n2);
        for (col, cell) in cells.iter_mut().enumerate() {
            let (j1, j2) = (col / n2, col % n2);
            if row == col || i1 == j1 || i2 == j2 {
                continue;
            }

            *cell = match (a.get_edge(i1, j1), b.get_edge(i2, j2)) {
                (0, 0) => 1,
                (0, _) | (_, 0) => 0,
                (x, y) => x.min(y),
            };
        }
    }

    Graph::from_adjacency_matrix(adj)
}

/// Maximum common induced subgraph of `a` and `b`.
///
/// Searches the modular product for its best [`modified_max_clique`] and maps
/// each chosen product vertex back to its `(a, b)` vertex pair. The cell
/// between two chosen pairs is the smaller of the two factors' edges. The
/// diagonal stays empty, so self-loops are dropped: the 3-vertex multi-edge
/// triangle against `[[0, 5], [3, 2]]` yields `[[0, 1], [1, 0]]`, not a graph
/// carrying the `min(1, 2)` loop.
pub fn max_subgraph(a: &Graph, b: &Graph, accuracy: Accuracy) -> Graph {
    let n2 = b.num_vertices();
    if n2 == 0 {
        return Graph::new(0);
    }

    let product = modular_product(a, b);
    let clique = modified_max_clique(&product, accuracy);
    let pairs: Vec<(usize, usize)> = clique.iter().map(|&idx| (idx / n2, idx % n2)).collect();
    debug!(?pairs, "maximum common subgraph correspondence");

    let adj = pairs
        .iter()
        .enumerate()
        .map(|(r, &(r1, r2))| {
            pairs
                .iter()
                .enumerate()
                .map(|(c, &(c1, c2))| {
                    if r == c {
                        0
                    } else {
                        a.get_edge(r1, c1).min(b.get_edge(r2, c2))
                    }
                })
                .collect()
        })
        .collect();

    Graph::from_adjacency_matrix(adj)
}

impl Graph {
    pub fn modular_product(&self, other: &Graph) -> Graph {
        modular_product(self, other)
    }

    pub fn max_subgraph(&self, other: &Graph, accuracy: Accuracy) -> Graph {
        max_subgraph(self, other, accuracy)
    }
}
