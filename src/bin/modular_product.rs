use clap::Parser;
use dense_graph_toolkit::{parser::GraphReader, Graph};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Computes the modular product of two graphs.
///
/// Vertex `i1 * n2 + i2` of the product pairs vertex `i1` of the first graph
/// with vertex `i2` of the second.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First graph file, or `-` for stdin
    lhs: PathBuf,

    /// Second graph file, or `-` for the next graph on stdin
    rhs: PathBuf,

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

    let product = lhs.modular_product(&rhs);
    if args.dot {
        println!("{}", product.to_dot());
    } else {
        print!("{}", product);
    }
}
