use clap::Parser;
use dense_graph_toolkit::{parser::read_graph_file, Accuracy};
use itertools::Itertools;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Finds a maximum clique and prints it together with its induced subgraph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the graph file, or `-` for stdin
    input: PathBuf,

    /// 'exact' or 'approx'
    #[arg(short, long, default_value = "exact")]
    accuracy: Accuracy,

    /// Accept an edge in either direction between clique members instead of
    /// requiring both
    #[arg(short, long)]
    modified: bool,

    /// Render the clique's subgraph in the DOT language
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

    let clique = if args.modified {
        graph.modified_max_clique(args.accuracy)
    } else {
        graph.max_clique(args.accuracy)
    };
    let subgraph = graph.sub_graph(&clique);

    println!("Max clique size: {}", clique.len());
    println!("Vertices of the max clique: {{{}}}", clique.iter().join(", "));
    if args.dot {
        println!("{}", subgraph.to_dot());
    } else {
        print!("{}", subgraph);
    }
}
