use clap::Parser;
use dense_graph_toolkit::{parser::GraphReader, Accuracy, Graph};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Computes the maximum common induced subgraph of two graphs.
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

    /// Render in the DOT language instead of the matrix format
    #[arg(long)]
    dot: bool,
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

    info!(
        lhs = lhs.num_vertices(),
        rhs = rhs.num_vertices(),
        product = lhs.num_vertices() * rhs.num_vertices(),
        "searching modular product"
    );
    let start_time = Instant::now();
    let common = lhs.max_subgraph(&rhs, args.accuracy);
    info!(elapsed = ?start_time.elapsed(), "search finished");

    if args.dot {
        println!("{}", common.to_dot());
    } else {
        print!("{}", common);
    }
}
