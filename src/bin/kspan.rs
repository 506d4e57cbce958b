//! Interactive driver: reads a graph from stdin, searches for a Hamiltonian
//! path, then prints the k-spanning form and its pendant-stripped form.
//!
//! Input is whitespace separated: vertex count, edge count, that many `u v`
//! pairs, then `k` unless it was given with `--k`.

use anyhow::{bail, Context};
use clap::Parser;
use kspan::graph::Graph;
use log::debug;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kspan", version, about = "Hamiltonian path search and k-spanning transforms")]
struct Cli {
    /// Number of pendant slots per vertex is k - 2; prompted for when omitted
    #[arg(short, long)]
    k: Option<usize>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Do not print input prompts
    #[arg(long)]
    quiet: bool,
}

/// Pulls whitespace separated values from a reader one line at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next<T>(&mut self, what: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .with_context(|| format!("failed to read {what}"))?;
            if read == 0 {
                bail!("unexpected end of input while reading {what}");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        let Some(token) = self.pending.pop_front() else {
            bail!("no token buffered while reading {what}");
        };
        token
            .parse()
            .with_context(|| format!("invalid {what}: {token:?}"))
    }
}

/// How a run ended when the input itself was well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// A path was found and both spanning forms were printed.
    Spanned,
    /// No Hamiltonian path exists; the process exits with status 1.
    NoPath,
}

/// Options of a single run, split off from [`Cli`] so the flow can be
/// driven without parsing arguments.
struct RunOptions {
    k: Option<usize>,
    quiet: bool,
}

fn prompt<W: Write>(out: &mut W, options: &RunOptions, text: &str) -> anyhow::Result<()> {
    if !options.quiet {
        write!(out, "{text}")?;
        out.flush()?;
    }
    Ok(())
}

fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    reader: R,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let mut input = Tokens::new(reader);

    prompt(out, options, "Enter number of vertices: ")?;
    let vertex_count: usize = input.next("vertex count")?;
    prompt(out, options, "Enter number of edges: ")?;
    let edge_count: usize = input.next("edge count")?;
    prompt(out, options, "Enter edges (u v format):\n")?;

    let mut graph: Graph = Graph::with_vertex_count(vertex_count);
    for i in 0..edge_count {
        let u = input.next(&format!("edge {} start", i + 1))?;
        let v = input.next(&format!("edge {} end", i + 1))?;
        graph.add_edge(u, v);
    }
    debug!(
        "read {} vertices and {} half-edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let path = graph.find_hamiltonian_path();
    if path.is_empty() {
        writeln!(out, "No Hamiltonian path exists in the graph.")?;
        return Ok(Outcome::NoPath);
    }

    let rendered: Vec<String> = path.iter().map(ToString::to_string).collect();
    writeln!(out, "Hamiltonian Path: {}", rendered.join(" "))?;
    writeln!(out, "Therefore there exists a 2-spanning tree in the graph")?;

    let k = match options.k {
        Some(k) => k,
        None => {
            prompt(out, options, "Enter k for k-spanning tree (k >= 2): ")?;
            input.next("k")?
        }
    };

    let k_spanning = graph
        .to_k_spanning(k)
        .with_context(|| format!("cannot build the {k}-spanning tree"))?;
    writeln!(out, "\nk-Spanning Tree:")?;
    write!(out, "{k_spanning}")?;

    let two_spanning = k_spanning.to_two_spanning();
    writeln!(out, "\n2-Spanning Tree (after removing degree 1 nodes):")?;
    write!(out, "{two_spanning}")?;

    Ok(Outcome::Spanned)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = RunOptions {
        k: cli.k,
        quiet: cli.quiet,
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match run(&options, stdin.lock(), &mut stdout) {
        Ok(Outcome::Spanned) => ExitCode::SUCCESS,
        Ok(Outcome::NoPath) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kspan::GraphError;

    fn run_with(k: Option<usize>, quiet: bool, input: &str) -> (anyhow::Result<Outcome>, String) {
        let options = RunOptions { k, quiet };
        let mut out = Vec::new();
        let outcome = run(&options, input.as_bytes(), &mut out);
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_square_with_k_three() {
        let (outcome, out) = run_with(None, true, "4 4\n1 2 2 3 3 4 4 1\n3\n");
        assert_eq!(outcome.unwrap(), Outcome::Spanned);
        let expected = "Hamiltonian Path: 1 2 3 4\n\
                        Therefore there exists a 2-spanning tree in the graph\n\
                        \n\
                        k-Spanning Tree:\n\
                        Graph Vertices and Edges:\n\
                        Vertex 1 connected to: 2 4 5 \n\
                        Vertex 2 connected to: 1 3 6 \n\
                        Vertex 3 connected to: 2 4 7 \n\
                        Vertex 4 connected to: 3 1 8 \n\
                        Vertex 5 connected to: 1 \n\
                        Vertex 6 connected to: 2 \n\
                        Vertex 7 connected to: 3 \n\
                        Vertex 8 connected to: 4 \n\
                        \n\
                        2-Spanning Tree (after removing degree 1 nodes):\n\
                        Graph Vertices and Edges:\n\
                        Vertex 1 connected to: 2 4 \n\
                        Vertex 2 connected to: 1 3 \n\
                        Vertex 3 connected to: 2 4 \n\
                        Vertex 4 connected to: 3 1 \n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_prompts_precede_answers() {
        let (outcome, out) = run_with(Some(2), false, "2 1\n1 2\n");
        assert_eq!(outcome.unwrap(), Outcome::Spanned);
        assert!(out.starts_with(
            "Enter number of vertices: Enter number of edges: Enter edges (u v format):\n\
             Hamiltonian Path: 1 2\n"
        ));
        // k came from the options, so it is never asked for.
        assert!(!out.contains("Enter k"));
    }

    #[test]
    fn test_star_has_no_path() {
        let (outcome, out) = run_with(Some(3), true, "4 3\n0 1 0 2 0 3\n");
        assert_eq!(outcome.unwrap(), Outcome::NoPath);
        assert_eq!(out, "No Hamiltonian path exists in the graph.\n");
    }

    #[test]
    fn test_k_below_two_is_an_error() {
        let (outcome, out) = run_with(None, true, "4 4\n1 2 2 3 3 4 4 1\n1\n");
        let err = outcome.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::InvalidInput(_))
        ));
        assert!(format!("{err:#}").contains("cannot build the 1-spanning tree"));
        assert!(out.starts_with("Hamiltonian Path: 1 2 3 4\n"));
        assert!(!out.contains("k-Spanning Tree"));
    }

    #[test]
    fn test_truncated_input() {
        let (outcome, _) = run_with(None, true, "3 2\n1 2\n");
        let err = outcome.unwrap_err();
        assert!(err.to_string().contains("unexpected end of input while reading edge 2 start"));
    }

    #[test]
    fn test_malformed_token() {
        let (outcome, _) = run_with(None, true, "three\n");
        let err = outcome.unwrap_err();
        assert!(err.to_string().contains("invalid vertex count"));
    }
}
