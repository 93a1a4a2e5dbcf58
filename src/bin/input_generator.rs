use clap::Parser;
use dense_graph_toolkit::Graph;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Input Generator for dense weighted digraphs.
///
/// Writes a random directed multigraph in the textual format every other tool
/// reads:
///
/// <n>
/// <adjacency matrix: n rows of n space-separated integers>
///
/// With `--relabelled-output`, a second file receives the same graph under a
/// random vertex permutation, giving a known-isomorphic pair.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random dense weighted digraphs, optionally with an isomorphic copy"
)]
struct Args {
    /// Number of vertices
    #[arg(short = 'n', long)]
    vertices: usize,

    /// Density (probability of an edge) excluding self-loops
    #[arg(long, default_value_t = 0.35)]
    density: f64,

    /// Probability that an existing edge (when generated) becomes a multiedge
    #[arg(long, default_value_t = 0.15)]
    multiedge_prob: f64,

    /// Maximum multiplicity for a multiedge (uniformly sampled in [2, max])
    #[arg(long, default_value_t = 4)]
    max_multiedge: usize,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path for the generated graph
    #[arg(short, long)]
    output: PathBuf,

    /// Also write a randomly relabelled (isomorphic) copy here
    #[arg(long)]
    relabelled_output: Option<PathBuf>,
}

/// Generate a random edge count (>=1) possibly becoming a multiedge
fn random_edge_count<R: Rng>(rng: &mut R, multiedge_prob: f64, max_multiedge: usize) -> usize {
    if max_multiedge < 2 || rng.gen::<f64>() >= multiedge_prob {
        1
    } else {
        rng.gen_range(2..=max_multiedge)
    }
}

/// Build a random directed multigraph without self-loops
fn generate_graph<R: Rng>(
    n: usize,
    density: f64,
    multiedge_prob: f64,
    max_multiedge: usize,
    rng: &mut R,
) -> Graph {
    let mut adj = vec![vec![0usize; n]; n];
    for (i, row) in adj.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            if i == j {
                continue;
            }
            if rng.gen::<f64>() < density {
                *val = random_edge_count(rng, multiedge_prob, max_multiedge);
            }
        }
    }
    Graph::from_adjacency_matrix(adj)
}

/// Returns `h` with `h[p[i]][p[j]] == g[i][j]`
fn relabel(g: &Graph, permutation: &[usize]) -> Graph {
    let n = g.num_vertices();
    let mut adj = vec![vec![0usize; n]; n];
    for (i, row) in g.rows().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            adj[permutation[i]][permutation[j]] = val;
        }
    }
    Graph::from_adjacency_matrix(adj)
}

fn write_graph(path: &Path, graph: &Graph) -> io::Result<()> {
    let mut writer = File::create(path)?;
    write!(writer, "{}", graph)?;
    writer.flush()
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if !(0.0..=1.0).contains(&args.density) {
        eprintln!("Error: density must be in [0,1].");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&args.multiedge_prob) {
        eprintln!("Error: multiedge_prob must be in [0,1].");
        std::process::exit(1);
    }
    if args.max_multiedge < 2 && args.multiedge_prob > 0.0 {
        eprintln!("Warning: max_multiedge < 2 makes multiedge_prob ineffective.");
    }

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let graph = generate_graph(
        args.vertices,
        args.density,
        args.multiedge_prob,
        args.max_multiedge,
        &mut rng,
    );
    write_graph(&args.output, &graph)?;

    println!("Generated graph:");
    println!("  n = {}", args.vertices);
    println!("  density = {:.3}", args.density);
    println!("  multiedge_prob = {:.3}", args.multiedge_prob);
    println!("  max_multiedge = {}", args.max_multiedge);
    if let Some(seed) = args.seed {
        println!("  seed = {}", seed);
    }
    println!("  size (vertices + edge weight) = {}", graph.size());
    println!("  output file: {:?}", args.output);

    if let Some(path) = &args.relabelled_output {
        let mut permutation: Vec<usize> = (0..args.vertices).collect();
        permutation.shuffle(&mut rng);
        write_graph(path, &relabel(&graph, &permutation))?;
        println!("  relabelling: {:?}", permutation);
        println!("  relabelled copy: {:?}", path);
    }

    Ok(())
}
