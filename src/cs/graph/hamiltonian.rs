//! A backtracking search for a Hamiltonian path: a simple path that visits
//! every declared vertex exactly once, moving only along stored edges.
//!
//! The search is exhaustive and exponential in the worst case. The only
//! pruning is skipping vertices already on the current path.
//!
//! # Example
//! ```
//! use kspan::graph::Graph;
//!
//! // A path graph 1-2-3: the only Hamiltonian paths start at an end.
//! let g: Graph = Graph::from_edges(3, [(2, 1), (2, 3)]);
//!
//! // Vertex 2 is tried first and fails, vertex 1 is tried next.
//! let path = g.find_hamiltonian_path();
//! assert_eq!(path, vec![1, 2, 3]);
//! assert!(g.is_hamiltonian_path(&path));
//! ```

use log::{debug, trace, warn};
use num_traits::PrimInt;
use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::Graph;

/// Path under construction and the set of vertices on it.
struct SearchState<V> {
    path: Vec<V>,
    visited: HashSet<V>,
}

impl<V> Graph<V>
where
    V: PrimInt + Hash,
{
    /// Returns the first Hamiltonian path found, or an empty vector if none
    /// exists.
    ///
    /// Every vertex key is tried as a start, in insertion order, and
    /// neighbors are explored in stored order. A path succeeds as soon as its
    /// length equals the declared vertex count; no other check is made. A
    /// declared count smaller than the real vertex count therefore accepts a
    /// partial path, and a larger one can never succeed.
    #[must_use]
    pub fn find_hamiltonian_path(&self) -> Vec<V> {
        let target = self.declared_vertex_count();
        if target == 0 {
            return Vec::new();
        }
        if target != self.vertex_count() {
            warn!(
                "declared vertex count {} differs from the {} stored vertices",
                target,
                self.vertex_count()
            );
        }

        let mut state = SearchState {
            path: Vec::with_capacity(target),
            visited: HashSet::with_capacity(target),
        };

        for (attempt, start) in self.vertices().enumerate() {
            state.path.clear();
            state.visited.clear();
            if self.extend_path(start, target, &mut state) {
                debug!(
                    "hamiltonian path of length {} found after {} start(s)",
                    target,
                    attempt + 1
                );
                return state.path;
            }
        }

        debug!("no hamiltonian path of length {target}");
        Vec::new()
    }

    fn extend_path(&self, v: V, target: usize, state: &mut SearchState<V>) -> bool {
        state.path.push(v);
        state.visited.insert(v);

        if state.path.len() == target {
            return true;
        }

        for &next in self.neighbors(v) {
            if !state.visited.contains(&next) && self.extend_path(next, target, state) {
                return true;
            }
        }

        // backtrack
        trace!("backtracking from depth {}", state.path.len());
        state.path.pop();
        state.visited.remove(&v);
        false
    }

    /// Checks that `path` has the declared length, repeats no vertex, and
    /// that every consecutive pair is a stored edge.
    #[must_use]
    pub fn is_hamiltonian_path(&self, path: &[V]) -> bool {
        if path.len() != self.declared_vertex_count() {
            return false;
        }
        let distinct: HashSet<V> = path.iter().copied().collect();
        distinct.len() == path.len() && path.windows(2).all(|w| self.has_edge(w[0], w[1]))
    }
}
