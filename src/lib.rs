//! Exact and budgeted-approximate algorithms on small, dense, weighted
//! directed graphs: isomorphism, a size/isomorphism distance, modular
//! products, maximum cliques and maximum common induced subgraphs.

/// Chooses between exhaustive search and its cheaper approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    #[default]
    Exact,
    Approximate,
}

impl std::str::FromStr for Accuracy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(Accuracy::Exact),
            "approx" | "approximate" | "approximation" => Ok(Accuracy::Approximate),
            _ => Err(format!("Invalid accuracy: {}. Use 'exact' or 'approx'", s)),
        }
    }
}

// Module declarations
pub mod clique;
pub mod error;
pub mod graph;
pub mod isomorphism;
pub mod parser;
pub mod permutation;
pub mod product;

pub use error::{GraphError, Result};
pub use graph::Graph;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_from_str() {
        assert_eq!("exact".parse::<Accuracy>(), Ok(Accuracy::Exact));
        assert_eq!("APPROX".parse::<Accuracy>(), Ok(Accuracy::Approximate));
        assert_eq!("approximation".parse::<Accuracy>(), Ok(Accuracy::Approximate));
        assert!("fast".parse::<Accuracy>().is_err());
        assert_eq!(Accuracy::default(), Accuracy::Exact);
    }

    #[test]
    fn test_pipeline_from_text() {
        let lhs = parser::parse_graph("2\n0 1\n1 0").unwrap();
        let rhs = parser::parse_graph("2\n0 1\n0 0").unwrap();

        assert_eq!(lhs.metric_distance_to(&rhs, Accuracy::Exact), 1);
        assert_eq!(
            lhs.max_subgraph(&rhs, Accuracy::Exact),
            Graph::from_adjacency_matrix(vec![vec![0, 1], vec![0, 0]])
        );
    }
}
