use clap::Parser;
use dense_graph_toolkit::{parser::GraphReader, Accuracy, Graph};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Checks whether two graphs are isomorphic.
///
/// Exact mode searches every vertex permutation; approximate mode only compares
/// degree multisets and may report false positives. Run with `RUST_LOG=debug`
/// to see the permutation that witnesses an exact isomorphism.
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

    let isomorphic = match args.accuracy {
        Accuracy::Exact => lhs.is_isomorphic_to(&rhs),
        Accuracy::Approximate => lhs.approx_isomorphic_to(&rhs),
    };
    println!("{}Isomorphic.", if isomorphic { "" } else { "NOT " });
}
