use clap::Parser;
use dense_graph_toolkit::{parser::GraphReader, Accuracy, Graph};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Computes the distance between two graphs.
///
/// The distance is `max(|size(G1) - size(G2)|, 1)` for non-isomorphic graphs
/// and 0 for isomorphic ones, where size counts vertices plus edge weight.
/// Approximate mode skips the isomorphism test and reports the size difference.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First graph file, or `-` for stdin
    lhs: PathBuf,

    /// Second graph file, or `-` for the next graph on stdin
    rhs: PathBuf,

    /// 'exact' or 'approx'
    #[arg(short, long, default_value = "exact")]
    accuracy: Accuracy,
}

fn read_pair(args: &Args) -> dense_graph_toolkit::Result<(Graph, Graph)> {
    let mut reader = GraphReader::new();
    Ok((reader.read(&args.lhs)?, reader.read(&args.rhs)?))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (lhs, rhs) = match read_pair(&args) {
        Ok(graphs) => graphs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", lhs.metric_distance_to(&rhs, args.accuracy));
}
