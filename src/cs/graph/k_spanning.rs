//! # k-spanning transforms
//!
//! A graph that has a Hamiltonian path spans all of its vertices with a path,
//! which we call its *2-spanning* form. The k-spanning form hangs `k - 2`
//! fresh pendant vertices off every original vertex.
//! [`Graph::to_two_spanning`] goes the other way by dropping every half-edge
//! that touches a degree-1 vertex.
//!
//! ```rust
//! use kspan::graph::Graph;
//!
//! let path: Graph = Graph::from_edges(3, [(1, 2), (2, 3)]);
//! let k4 = path.to_k_spanning(4).unwrap();
//!
//! // Two pendants per vertex, numbered above every original id.
//! assert_eq!(k4.vertex_count(), 9);
//! assert_eq!(k4.neighbors(1), &[2, 4, 5]);
//! assert_eq!(k4.neighbors(2), &[1, 3, 6, 7]);
//! ```

use log::debug;
use num_traits::PrimInt;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

impl<V> Graph<V>
where
    V: PrimInt + Hash,
{
    /// Returns a copy of the graph in which every vertex key gains `k - 2`
    /// pendant vertices, each joined to it by one undirected edge.
    ///
    /// Fresh ids start above `max(declared count, largest stored id)`, a base
    /// taken once before any pendant is added. The vertex at position `p` in
    /// insertion order receives ids `base + p * (k - 2) + 1 ..= base + (p + 1) * (k - 2)`,
    /// so fresh ids never collide with each other or with original ids. The
    /// declared vertex count is copied unchanged.
    ///
    /// # Errors
    /// - [`GraphError::InvalidInput`] if `k < 2`.
    /// - [`GraphError::IdOverflow`] if a fresh id does not fit in `V`.
    ///
    /// No partially transformed graph is ever returned.
    pub fn to_k_spanning(&self, k: usize) -> Result<Graph<V>> {
        if k < 2 {
            return Err(GraphError::invalid_input(format!(
                "k must be at least 2, got {k}"
            )));
        }

        let pendants = k - 2;
        let mut transformed = self.clone();
        if pendants == 0 {
            return Ok(transformed);
        }

        let declared = V::from(self.declared_vertex_count()).ok_or(GraphError::IdOverflow)?;
        let base = self
            .max_vertex_id()
            .map_or(declared, |max_id| max_id.max(declared))
            .max(V::zero());
        let stride = V::from(pendants).ok_or(GraphError::IdOverflow)?;

        for (position, v) in self.vertices().enumerate() {
            let first = V::from(position)
                .and_then(|p| p.checked_mul(&stride))
                .and_then(|offset| base.checked_add(&offset))
                .ok_or(GraphError::IdOverflow)?;
            let mut fresh = first;
            for _ in 0..pendants {
                fresh = fresh.checked_add(&V::one()).ok_or(GraphError::IdOverflow)?;
                transformed.add_edge(v, fresh);
            }
        }

        debug!(
            "k={} transform added {} pendant vertices to {} vertices",
            k,
            transformed.vertex_count() - self.vertex_count(),
            self.vertex_count()
        );
        Ok(transformed)
    }

    /// Strips pendant vertices, keeping the half-edge `u -> v` for every
    /// stored neighbor `v` of `u` where both `u` and `v` have degree above 1.
    ///
    /// Each kept entry is re-added as a single directed half-edge, so the
    /// result mirrors the input's storage exactly and is not symmetrised. A
    /// vertex whose entries are all dropped disappears from the result. The
    /// result's declared count is its number of vertex keys.
    #[must_use]
    pub fn to_two_spanning(&self) -> Graph<V> {
        let degrees = self.degrees();
        let degree = |v: &V| degrees.get(v).copied().unwrap_or(0);

        let mut stripped = Graph::new();
        for u in self.vertices() {
            if degree(&u) <= 1 {
                continue;
            }
            for &v in self.neighbors(u) {
                if degree(&v) > 1 {
                    stripped.add_directed_edge(u, v);
                }
            }
        }
        // Declared count follows the stored keys so the result can be searched.
        stripped.set_vertex_count(stripped.vertex_count());

        debug!(
            "pendant stripping kept {} of {} vertices",
            stripped.vertex_count(),
            self.vertex_count()
        );
        stripped
    }
}
