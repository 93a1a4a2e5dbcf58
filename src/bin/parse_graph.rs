use clap::Parser;
use dense_graph_toolkit::parser::read_graph_file;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reads a graph and writes it back out, as a matrix or in the DOT language.
///
/// Piping `--dot` output to graphviz renders it, e.g. `parse-graph g.txt --dot | dot -Tpng -o g.png`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the graph file, or `-` for stdin
    input: PathBuf,

    /// Render in the DOT language instead of the matrix format
    #[arg(long)]
    dot: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let graph = match read_graph_file(&args.input) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.dot {
        println!("{}", graph.to_dot());
    } else {
        print!("{}", graph);
    }
}
