//! Adjacency-list graph keyed by integer vertex ids.
//!
//! Vertices are kept in first-insertion order, so the Hamiltonian search and
//! the spanning transforms visit them deterministically. Neighbor lists keep
//! their stored order and are never deduplicated: calling [`Graph::add_edge`]
//! twice for the same pair yields a parallel edge, which counts towards
//! degrees and is branched on twice by the search.

pub mod hamiltonian;
pub mod k_spanning;

use num_traits::PrimInt;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Undirected graph stored as two half-edges per edge.
///
/// `vertex_count` is the *declared* number of vertices a Hamiltonian path
/// must visit. It is set by the caller and is not derived from the edges, so
/// it may disagree with [`Graph::vertex_count`]. The search uses it as its
/// only termination criterion.
#[derive(Clone, Debug)]
pub struct Graph<V = i32> {
    adjacency: HashMap<V, Vec<V>>,
    /// Keys of `adjacency` in the order they were first inserted.
    order: Vec<V>,
    vertex_count: usize,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph {
            adjacency: HashMap::new(),
            order: Vec::new(),
            vertex_count: 0,
        }
    }
}

impl<V: Hash + Eq> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count == other.vertex_count
            && self.order == other.order
            && self.adjacency == other.adjacency
    }
}

impl<V: Hash + Eq> Eq for Graph<V> {}

impl<V> Graph<V>
where
    V: PrimInt + Hash,
{
    /// Creates an empty graph with a declared vertex count of 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph that expects `n` vertices on a Hamiltonian path.
    #[must_use]
    pub fn with_vertex_count(n: usize) -> Self {
        Graph {
            vertex_count: n,
            ..Self::default()
        }
    }

    /// Builds a graph from undirected edge pairs, inserted in the given order.
    ///
    /// ```
    /// use kspan::graph::Graph;
    ///
    /// let g: Graph = Graph::from_edges(3, [(1, 2), (2, 3)]);
    /// assert_eq!(g.neighbors(2), &[1, 3]);
    /// ```
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::with_vertex_count(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    fn neighbors_mut(&mut self, v: V) -> &mut Vec<V> {
        match self.adjacency.entry(v) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                self.order.push(v);
                slot.insert(Vec::new())
            }
        }
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Both half-edges are pushed; repeated calls create parallel edges.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.neighbors_mut(u).push(v);
        self.neighbors_mut(v).push(u);
    }

    /// Adds the single half-edge `u -> v`. Only `u` becomes a vertex key.
    pub fn add_directed_edge(&mut self, u: V, v: V) {
        self.neighbors_mut(u).push(v);
    }

    /// Sets the declared vertex count used to terminate the search.
    pub fn set_vertex_count(&mut self, n: usize) {
        self.vertex_count = n;
    }

    /// The declared vertex count, as set by the caller.
    #[must_use]
    pub fn declared_vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct vertex keys actually stored.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of stored half-edges. An undirected edge counts twice.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Vertex keys in first-insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.order.iter().copied()
    }

    /// Stored neighbors of `v`; empty when `v` is not a key.
    #[must_use]
    pub fn neighbors(&self, v: V) -> &[V] {
        self.adjacency.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Length of `v`'s neighbor list, counting parallel edges.
    #[must_use]
    pub fn degree(&self, v: V) -> usize {
        self.neighbors(v).len()
    }

    /// Degree of every vertex key.
    #[must_use]
    pub fn degrees(&self) -> HashMap<V, usize> {
        self.adjacency
            .iter()
            .map(|(&v, neighbors)| (v, neighbors.len()))
            .collect()
    }

    #[must_use]
    pub fn contains_vertex(&self, v: V) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Whether the half-edge `u -> v` is stored.
    #[must_use]
    pub fn has_edge(&self, u: V, v: V) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Largest vertex id stored anywhere, as a key or as a neighbor.
    pub(crate) fn max_vertex_id(&self) -> Option<V> {
        self.adjacency
            .iter()
            .flat_map(|(v, neighbors)| std::iter::once(v).chain(neighbors))
            .copied()
            .max()
    }
}

/// Dumps every vertex and its neighbor list, one line per vertex.
impl<V> fmt::Display for Graph<V>
where
    V: fmt::Display + Hash + Eq,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Vertices and Edges:")?;
        for v in &self.order {
            write!(f, "Vertex {v} connected to: ")?;
            for neighbor in self.adjacency.get(v).into_iter().flatten() {
                write!(f, "{neighbor} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
