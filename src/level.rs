// Line-oriented level files: `v: <x>, <y>` declares a vertex, `e: <i>, <j>`
// an edge over previously declared vertices. Any other line is ignored.
// Truncated or unparseable records are skipped; an edge index that was
// never declared fails the whole parse.

use crate::model::{DuplicateEdge, Edge, Graph, Point};
use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    /// An edge line referenced a vertex index that was never declared.
    EdgeOutOfRange {
        line: usize,
        index: usize,
        declared: usize,
    },
    /// The parsed graph repeated an unordered endpoint pair.
    Duplicate(DuplicateEdge),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::EdgeOutOfRange {
                line,
                index,
                declared,
            } => write!(
                f,
                "line {}: edge references vertex {} but only {} vertices are declared",
                line, index, declared
            ),
            LevelError::Duplicate(dup) => dup.fmt(f),
        }
    }
}

impl Error for LevelError {}

/// A parsed level plus the 1-based line numbers of dropped records.
#[derive(Clone, Debug, Default)]
pub struct Parsed {
    pub graph: Graph,
    pub skipped: Vec<usize>,
}

fn two_values<T: std::str::FromStr>(tokens: &mut std::str::SplitWhitespace<'_>) -> Option<(T, T)> {
    let first = tokens.next()?.trim_matches(',').parse().ok()?;
    let second = tokens.next()?.trim_matches(',').parse().ok()?;
    Some((first, second))
}

pub fn parse(text: &str) -> Result<Parsed, LevelError> {
    let mut out = Parsed::default();
    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v:") => match two_values::<f64>(&mut tokens) {
                Some((x, y)) => {
                    out.graph.vertices.push(Point::new(x, y));
                }
                None => out.skipped.push(lineno),
            },
            Some("e:") => match two_values::<usize>(&mut tokens) {
                Some((i, j)) => {
                    let declared = out.graph.vertices.len();
                    for index in [i, j] {
                        if index >= declared {
                            return Err(LevelError::EdgeOutOfRange {
                                line: lineno,
                                index,
                                declared,
                            });
                        }
                    }
                    out.graph.edges.push(Edge {
                        a: i as u32,
                        b: j as u32,
                    });
                }
                None => out.skipped.push(lineno),
            },
            _ => {}
        }
    }
    Ok(out)
}

/// Render a graph in the level format: vertices in collection order, then
/// edges referencing them by positional index. Coordinates use the
/// shortest round-trip form, so parsing the output reproduces them
/// bit-exactly.
pub fn serialize(g: &Graph) -> String {
    let mut out = String::new();
    for v in g.vertices() {
        out.push_str(&format!("v: {}, {}\n", v.x, v.y));
    }
    for e in g.edges() {
        out.push_str(&format!("e: {}, {}\n", e.a, e.b));
    }
    out
}
