//! Graph-coloring objective and the line-oriented graph reader.
//!
//! ## Input format
//!
//! ```text
//! c this is a comment
//! p edge 4 6
//! e 1 2
//! e 1 3
//! ```
//!
//! `p <label> <vertices> <edges>` allocates an empty graph, `e <i> <j>` adds the
//! undirected edge between the 1-based vertices `i` and `j`.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use super::Objective;
use crate::error::{Result, ResultExt, SearchError};
use crate::representation::Coloring;
use crate::rng::RandomNumberGenerator;

/// A symmetric adjacency matrix over `num_vertices` vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    adjacency: Vec<bool>,
    declared_edges: Option<usize>,
}

impl Graph {
    /// Creates a graph without edges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `num_vertices` is zero.
    pub fn new(num_vertices: usize) -> Result<Self> {
        if num_vertices == 0 {
            return Err(SearchError::Configuration(
                "A graph needs at least one vertex".to_string(),
            ));
        }
        Ok(Self {
            num_vertices,
            adjacency: vec![false; num_vertices * num_vertices],
            declared_edges: None,
        })
    }

    /// The complete graph on `num_vertices` vertices.
    pub fn complete(num_vertices: usize) -> Result<Self> {
        let mut graph = Self::new(num_vertices)?;
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                graph.add_edge(i, j)?;
            }
        }
        Ok(graph)
    }

    /// Adds the undirected edge `{i, j}` (0-based).
    pub fn add_edge(&mut self, i: usize, j: usize) -> Result<()> {
        if i >= self.num_vertices || j >= self.num_vertices {
            return Err(SearchError::Configuration(format!(
                "Edge ({}, {}) references a vertex outside 0..{}",
                i, j, self.num_vertices
            )));
        }
        self.adjacency[i * self.num_vertices + j] = true;
        self.adjacency[j * self.num_vertices + i] = true;
        Ok(())
    }

    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.num_vertices + j]
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of distinct undirected edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        (0..self.num_vertices)
            .map(|i| (i..self.num_vertices).filter(|&j| self.is_adjacent(i, j)).count())
            .sum()
    }

    /// Edge count announced by the `p` line, if the graph was parsed.
    pub fn declared_edges(&self) -> Option<usize> {
        self.declared_edges
    }

    /// Reads a graph description from `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read graph file {}", path.display()))?;
        let graph: Graph = contents.parse()?;
        debug!(
            path = %path.display(),
            vertices = graph.num_vertices(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }
}

fn format_error(line: usize, message: impl Into<String>) -> SearchError {
    SearchError::GraphFormat {
        line,
        message: message.into(),
    }
}

fn parse_field(line: usize, name: &str, field: &str) -> Result<usize> {
    field.parse::<usize>().map_err(|_| {
        format_error(
            line,
            format!("{} must be a non-negative integer, got '{}'", name, field),
        )
    })
}

impl FromStr for Graph {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let mut graph: Option<Graph> = None;
        let mut edge_lines = 0usize;

        for (index, raw) in s.lines().enumerate() {
            let line = index + 1;
            let fields: Vec<&str> = raw.split_whitespace().collect();
            let Some(&tag) = fields.first() else {
                continue;
            };

            match tag {
                "c" => continue,
                "p" => {
                    if graph.is_some() {
                        return Err(format_error(line, "duplicate 'p' line"));
                    }
                    if fields.len() != 4 {
                        return Err(format_error(
                            line,
                            format!(
                                "expected 'p <label> <vertices> <edges>', found {} fields",
                                fields.len()
                            ),
                        ));
                    }
                    let vertices = parse_field(line, "vertex count", fields[2])?;
                    let edges = parse_field(line, "edge count", fields[3])?;
                    let mut parsed = Graph::new(vertices)
                        .map_err(|_| format_error(line, "vertex count must be positive"))?;
                    parsed.declared_edges = Some(edges);
                    graph = Some(parsed);
                }
                "e" => {
                    let current = graph
                        .as_mut()
                        .ok_or_else(|| format_error(line, "edge line before the 'p' line"))?;
                    if fields.len() != 3 {
                        return Err(format_error(
                            line,
                            format!("expected 'e <i> <j>', found {} fields", fields.len()),
                        ));
                    }
                    let i = parse_field(line, "vertex", fields[1])?;
                    let j = parse_field(line, "vertex", fields[2])?;
                    let n = current.num_vertices();
                    for v in [i, j] {
                        if v == 0 || v > n {
                            return Err(format_error(
                                line,
                                format!("vertex {} is outside 1..={}", v, n),
                            ));
                        }
                    }
                    current.add_edge(i - 1, j - 1)?;
                    edge_lines += 1;
                }
                other => {
                    return Err(format_error(line, format!("unknown line type '{}'", other)));
                }
            }
        }

        let graph = graph.ok_or_else(|| format_error(s.lines().count(), "missing 'p' line"))?;
        if let Some(declared) = graph.declared_edges {
            if declared != edge_lines {
                warn!(
                    declared,
                    found = edge_lines,
                    "edge count in 'p' line differs from number of 'e' lines"
                );
            }
        }
        Ok(graph)
    }
}

/// Scores colorings against a graph.
///
/// The cost is the sum of two terms:
///
/// 1. conflicts: every ordered pair `(i, j)` of adjacent vertices with equal
///    colors adds 1, so each conflicting edge counts twice;
/// 2. colors used: every id `k` in `1..=V` that appears somewhere in the
///    coloring adds 1. Ids above `V` are not counted.
///
/// A proper coloring of `V` vertices therefore costs the number of distinct
/// ids in `1..=V` it uses.
#[derive(Debug, Clone)]
pub struct GraphColoring {
    graph: Graph,
}

impl GraphColoring {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Ordered adjacent pairs sharing a color, or `None` if the coloring does
    /// not have one entry per vertex.
    pub fn conflicts(&self, coloring: &Coloring) -> Option<usize> {
        let colors = coloring.colors();
        let n = self.graph.num_vertices();
        if colors.len() != n {
            return None;
        }
        let mut conflicts = 0;
        for i in 0..n {
            for j in 0..n {
                if self.graph.is_adjacent(i, j) && colors[i] == colors[j] {
                    conflicts += 1;
                }
            }
        }
        Some(conflicts)
    }

    /// Distinct color ids in `1..=V` present in the coloring.
    pub fn colors_used(&self, coloring: &Coloring) -> usize {
        let n = self.graph.num_vertices();
        let mut seen = vec![false; n + 1];
        for &color in coloring.colors() {
            if color <= n {
                seen[color] = true;
            }
        }
        seen.iter().skip(1).filter(|&&present| present).count()
    }
}

impl Objective<Coloring> for GraphColoring {
    fn evaluate(&self, candidate: &Coloring) -> f64 {
        match self.conflicts(candidate) {
            Some(conflicts) => (conflicts + self.colors_used(candidate)) as f64,
            None => f64::NAN,
        }
    }

    fn random_candidate(&self, rng: &mut RandomNumberGenerator) -> Result<Coloring> {
        let n = self.graph.num_vertices();
        Coloring::random(n, n, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "c a 4-cycle\np edge 4 4\ne 1 2\ne 2 3\ne 3 4\ne 4 1\n";

    fn coloring(colors: &[usize], num_colors: usize) -> Coloring {
        Coloring::new(colors.to_vec(), num_colors).unwrap()
    }

    #[test]
    fn test_parse_square() {
        let graph: Graph = SQUARE.parse().unwrap();

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.declared_edges(), Some(4));
        assert!(graph.is_adjacent(0, 1) && graph.is_adjacent(1, 0));
        assert!(graph.is_adjacent(3, 0));
        assert!(!graph.is_adjacent(0, 2));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let graph: Graph = "\np edge 2 1\n\n   \ne 1 2\n".parse().unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let cases = [
            ("p edge 3\n", 1),
            ("p edge x 3\n", 1),
            ("p edge 3 1\ne 1\n", 2),
            ("p edge 3 1\ne 1 z\n", 2),
            ("p edge 3 1\ne 1 4\n", 2),
            ("p edge 3 1\ne 0 1\n", 2),
            ("e 1 2\np edge 3 1\n", 1),
            ("p edge 3 1\nq 1 2\n", 2),
            ("p edge 3 1\np edge 3 1\n", 2),
            ("p edge 0 0\n", 1),
        ];
        for (input, expected_line) in cases {
            match input.parse::<Graph>() {
                Err(SearchError::GraphFormat { line, .. }) => {
                    assert_eq!(line, expected_line, "input {:?}", input)
                }
                other => panic!("expected a format error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_missing_problem_line() {
        assert!(matches!(
            "c nothing here\n".parse::<Graph>(),
            Err(SearchError::GraphFormat { .. })
        ));
    }

    #[test]
    fn test_complete_graph_proper_coloring_costs_color_count() {
        let objective = GraphColoring::new(Graph::complete(4).unwrap());
        let proper = coloring(&[1, 2, 3, 4], 4);

        assert_eq!(objective.conflicts(&proper), Some(0));
        assert_eq!(objective.colors_used(&proper), 4);
        assert_eq!(objective.evaluate(&proper), 4.0);
    }

    #[test]
    fn test_conflicts_reject_wrong_length() {
        let objective = GraphColoring::new(Graph::complete(3).unwrap());
        let short = coloring(&[1], 3);

        assert_eq!(objective.conflicts(&short), None);
        assert!(objective.evaluate(&short).is_nan());
    }

    #[test]
    fn test_conflicts_are_counted_twice() {
        let objective = GraphColoring::new(SQUARE.parse().unwrap());
        // Only edge {1, 2} is monochromatic.
        let one_conflict = coloring(&[1, 1, 2, 3], 4);

        assert_eq!(objective.conflicts(&one_conflict), Some(2));
        assert_eq!(objective.evaluate(&one_conflict), 2.0 + 3.0);
    }

    #[test]
    fn test_conflict_term_independent_of_color_term() {
        let objective = GraphColoring::new(SQUARE.parse().unwrap());

        // Proper 2-coloring: no conflicts, two colors counted.
        let proper = coloring(&[1, 2, 1, 2], 4);
        assert_eq!(objective.conflicts(&proper), Some(0));
        assert_eq!(objective.evaluate(&proper), 2.0);

        // Monochromatic: every edge conflicts, one color counted.
        let mono = coloring(&[3, 3, 3, 3], 4);
        assert_eq!(objective.conflicts(&mono), Some(8));
        assert_eq!(objective.colors_used(&mono), 1);
    }

    #[test]
    fn test_colors_above_vertex_count_are_not_counted() {
        let objective = GraphColoring::new(Graph::new(3).unwrap());
        let high_ids = coloring(&[7, 8, 9], 9);

        assert_eq!(objective.colors_used(&high_ids), 0);
        assert_eq!(objective.evaluate(&high_ids), 0.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let objective = GraphColoring::new(Graph::complete(6).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(21);
        for _ in 0..20 {
            let candidate = objective.random_candidate(&mut rng).unwrap();
            assert_eq!(objective.evaluate(&candidate), objective.evaluate(&candidate));
        }
    }

    #[test]
    fn test_wrong_length_scores_nan() {
        let objective = GraphColoring::new(Graph::complete(3).unwrap());
        assert!(objective.evaluate(&coloring(&[1, 2], 3)).is_nan());
    }
}
