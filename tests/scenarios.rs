use dense_graph_toolkit::clique::{max_clique, modified_max_clique};
use dense_graph_toolkit::isomorphism::{approx_isomorphic, is_isomorphic, metric_distance};
use dense_graph_toolkit::parser::{parse_graph, GraphReader};
use dense_graph_toolkit::product::{max_subgraph, modular_product};
use dense_graph_toolkit::{Accuracy, Graph, GraphError};
use itertools::Itertools;
use rstest::rstest;

fn parse(text: &str) -> Graph {
    parse_graph(text).expect("fixture should parse")
}

fn pentagon1() -> Graph {
    parse("5\n0 1 0 0 1\n0 0 3 0 0\n0 1 0 1 0\n0 0 1 0 1\n1 0 0 1 0")
}

fn pentagon2() -> Graph {
    parse("5\n0 0 1 1 0\n0 0 0 1 1\n0 0 0 0 3\n1 1 0 0 0\n0 1 1 0 0\n")
}

fn square_with_outcast() -> Graph {
    parse("5\n0 2 0 1 0\n1 0 1 0 0\n0 1 0 1 0\n1 0 1 0 0\n0 0 0 0 0\n")
}

fn strange_star() -> Graph {
    parse("5\n0 2 1 1 1\n1 0 0 0 0\n1 0 0 0 0\n1 0 0 0 0\n1 0 0 0 0\n")
}

/// Two directed triangles, every edge doubled.
fn multi_triangles() -> Graph {
    parse(
        "6\n\
         0 2 0 0 0 0\n\
         0 0 2 0 0 0\n\
         2 0 0 0 0 0\n\
         0 0 0 0 2 0\n\
         0 0 0 0 0 2\n\
         0 0 0 2 0 0",
    )
}

/// One directed hexagon, every edge doubled.
fn multi_hexagon() -> Graph {
    parse(
        "6\n\
         0 2 0 0 0 0\n\
         0 0 2 0 0 0\n\
         0 0 0 2 0 0\n\
         0 0 0 0 2 0\n\
         0 0 0 0 0 2\n\
         2 0 0 0 0 0",
    )
}

fn fully_connected_four() -> Graph {
    parse("4\n0 1 1 1\n1 0 1 1\n1 1 0 1\n1 1 1 0")
}

fn four_pairs() -> Graph {
    parse(
        "8\n\
         0 1 0 0 0 0 0 0\n\
         1 0 0 0 0 0 0 0\n\
         0 0 0 1 0 0 0 0\n\
         0 0 1 0 0 0 0 0\n\
         0 0 0 0 0 1 0 0\n\
         0 0 0 0 1 0 0 0\n\
         0 0 0 0 0 0 0 1\n\
         0 0 0 0 0 0 1 0",
    )
}

fn bidirect_two() -> Graph {
    parse("2\n0 1\n1 0")
}

fn onedirect_two() -> Graph {
    parse("2\n0 1\n0 0")
}

fn all_fixtures() -> Vec<Graph> {
    vec![
        Graph::new(0),
        pentagon1(),
        pentagon2(),
        square_with_outcast(),
        strange_star(),
        multi_triangles(),
        multi_hexagon(),
        fully_connected_four(),
        bidirect_two(),
        onedirect_two(),
    ]
}

#[test]
fn pentagons_are_isomorphic_with_distance_zero() {
    assert!(is_isomorphic(&pentagon1(), &pentagon2()));
    assert_eq!(metric_distance(&pentagon1(), &pentagon2(), Accuracy::Exact), 0);
}

#[test]
fn square_and_star_share_size_but_not_structure() {
    let (square, star) = (square_with_outcast(), strange_star());
    assert_eq!(square.size(), star.size());
    assert!(!is_isomorphic(&square, &star));
    assert_eq!(metric_distance(&square, &star, Accuracy::Exact), 1);
}

#[test]
fn degree_multisets_can_hide_non_isomorphism() {
    let (triangles, hexagon) = (multi_triangles(), multi_hexagon());
    assert!(approx_isomorphic(&triangles, &hexagon));
    assert_eq!(metric_distance(&triangles, &hexagon, Accuracy::Approximate), 0);
    assert!(!is_isomorphic(&triangles, &hexagon));
    assert!(metric_distance(&triangles, &hexagon, Accuracy::Exact) > 0);
}

#[rstest]
#[case::fully_connected(fully_connected_four(), 4)]
#[case::four_pairs(four_pairs(), 2)]
#[case::edgeless(Graph::new(6), 1)]
#[case::empty(Graph::new(0), 0)]
fn max_clique_sizes(#[case] graph: Graph, #[case] expected: usize) {
    assert_eq!(max_clique(&graph, Accuracy::Exact).len(), expected);
    assert!(max_clique(&graph, Accuracy::Approximate).len() <= expected);
}

#[test]
fn product_and_subgraph_of_two_vertex_graphs() {
    assert_eq!(
        modular_product(&bidirect_two(), &onedirect_two()),
        parse("4\n0 0 0 1\n0 0 0 0\n0 1 0 0\n0 0 0 0")
    );
    assert_eq!(
        max_subgraph(&bidirect_two(), &onedirect_two(), Accuracy::Exact),
        parse("2\n0 1\n0 0")
    );
}

#[test]
fn isomorphism_is_reflexive_and_symmetric() {
    let graphs = all_fixtures();
    for g in &graphs {
        assert!(is_isomorphic(g, g));
        assert_eq!(metric_distance(g, g, Accuracy::Exact), 0);
    }
    for (a, b) in graphs.iter().tuple_combinations() {
        assert_eq!(is_isomorphic(a, b), is_isomorphic(b, a));
    }
}

#[test]
fn isomorphic_graphs_always_pass_the_approximation() {
    for (a, b) in all_fixtures().iter().tuple_combinations() {
        if is_isomorphic(a, b) {
            assert!(approx_isomorphic(a, b));
        }
    }
}

#[test]
fn exact_distance_is_zero_only_for_isomorphs() {
    for (a, b) in all_fixtures().iter().tuple_combinations() {
        let distance = metric_distance(a, b, Accuracy::Exact);
        assert_eq!(distance == 0, is_isomorphic(a, b));
        assert!(distance >= a.size().abs_diff(b.size()));
    }
}

#[test]
fn modular_product_commutes_up_to_relabelling() {
    let graphs = [bidirect_two(), onedirect_two(), parse("3\n0 3 1\n0 0 0\n1 0 1")];
    for (a, b) in graphs.iter().tuple_combinations() {
        let ab = modular_product(a, b);
        let ba = modular_product(b, a);
        assert_eq!(ab.num_vertices(), ba.num_vertices());
        assert_eq!(
            ab.rows().flatten().sorted().collect_vec(),
            ba.rows().flatten().sorted().collect_vec()
        );
    }
}

#[test]
fn modified_clique_of_product_never_exceeds_smaller_factor() {
    let a = pentagon1();
    let b = parse("3\n0 1 0\n1 0 1\n0 1 0");
    let clique = modified_max_clique(&modular_product(&a, &b), Accuracy::Exact);
    assert!(clique.len() <= 3);
    let common = max_subgraph(&a, &b, Accuracy::Exact);
    assert_eq!(common.num_vertices(), clique.len());
}

#[test]
fn two_graphs_piped_through_one_stdin() {
    let stdin = std::path::Path::new("-");
    let mut reader = GraphReader::with_stdin(format!("{}{}", pentagon1(), pentagon2()));
    let (lhs, rhs) = (reader.read(stdin).unwrap(), reader.read(stdin).unwrap());
    assert_eq!((&lhs, &rhs), (&pentagon1(), &pentagon2()));
    assert_eq!(metric_distance(&lhs, &rhs, Accuracy::Exact), 0);
}

#[test]
fn overflowing_weights_are_rejected() {
    let text = format!("2\n0 {}\n1 0", usize::MAX);
    assert!(matches!(parse_graph(&text), Err(GraphError::WeightOverflow)));
}

#[rstest]
#[case::empty("")]
#[case::not_a_number("five")]
fn missing_vertex_count_is_rejected(#[case] text: &str) {
    assert!(matches!(parse_graph(text), Err(GraphError::MissingVertexCount)));
}

#[rstest]
#[case::no_cells("1", 0)]
#[case::short_row("2\n0 1\n0", 3)]
#[case::negative_weight("2\n0 -1\n0 0", 1)]
fn truncated_matrix_is_rejected(#[case] text: &str, #[case] read: usize) {
    match parse_graph(text) {
        Err(GraphError::TruncatedMatrix { found, .. }) => assert_eq!(found, read),
        other => panic!("expected a truncated matrix error, got {:?}", other),
    }
}
