use crate::error::{GraphError, Result};
use crate::Graph;
use nom::{
    character::complete::{digit1, multispace0},
    combinator::map_res,
    sequence::preceded,
    IResult,
};
use std::io::Read;
use std::path::Path;

/// Parse a single unsigned integer, skipping any leading whitespace
fn parse_usize(input: &str) -> IResult<&str, usize> {
    preceded(multispace0, map_res(digit1, |s: &str| s.parse::<usize>()))(input)
}

/// Lazily yields whitespace-separated unsigned integers until the first
/// token that is not one.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    remaining: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokens { remaining: input }
    }

    /// Input not yet consumed, starting right after the last token yielded.
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }
}

impl Iterator for Tokens<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let (rest, value) = parse_usize(self.remaining).ok()?;
        self.remaining = rest;
        Some(value)
    }
}

/// Parse a single graph: vertex count followed by `n * n` matrix cells.
///
/// Line structure is irrelevant; any whitespace separates tokens.
pub fn parse_graph(input: &str) -> Result<Graph> {
    Graph::from_tokens(Tokens::new(input))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> GraphError + '_ {
    move |source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads graphs from files, with `-` standing for stdin.
///
/// Stdin is read once, on first use, and every `-` takes the next graph from
/// it, so several graphs can be piped in one after another.
#[derive(Debug, Default)]
pub struct GraphReader {
    stdin: Option<String>,
    consumed: usize,
}

impl GraphReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reader whose `-` input is `text` instead of the process's stdin.
    pub fn with_stdin(text: impl Into<String>) -> Self {
        GraphReader {
            stdin: Some(text.into()),
            consumed: 0,
        }
    }

    pub fn read(&mut self, path: &Path) -> Result<Graph> {
        if !is_stdin(path) {
            let content = std::fs::read_to_string(path).map_err(io_error(path))?;
            return parse_graph(&content);
        }

        if self.stdin.is_none() {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(io_error(path))?;
            self.stdin = Some(buffer);
        }
        let input = self.stdin.as_deref().unwrap_or_default();

        let mut tokens = Tokens::new(&input[self.consumed..]);
        let graph = Graph::from_tokens(tokens.by_ref());
        self.consumed = input.len() - tokens.remaining().len();
        graph
    }
}

/// Read a graph from a file, or from stdin when `path` is `-`.
pub fn read_graph_file(path: &Path) -> Result<Graph> {
    GraphReader::new().read(path)
}
