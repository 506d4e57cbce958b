//! Hamiltonian path search over adjacency-list graphs, plus the k-spanning
//! transform that hangs `k - 2` pendant vertices off every vertex and the
//! inverse transform that strips them again.
//!
//! ```
//! use kspan::graph::Graph;
//!
//! let g: Graph = Graph::from_edges(4, [(1, 2), (2, 3), (3, 4), (4, 1)]);
//! assert_eq!(g.find_hamiltonian_path(), vec![1, 2, 3, 4]);
//!
//! let k3 = g.to_k_spanning(3).unwrap();
//! assert_eq!(k3.vertex_count(), 8);
//! assert_eq!(k3.to_two_spanning(), g);
//! ```

pub mod cs;
pub mod error;

pub use cs::graph;
pub use error::{GraphError, Result};
