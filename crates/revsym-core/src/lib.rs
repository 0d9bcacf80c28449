//! # revsym-core
//!
//! The reverse-symmetric graph store for revsym.
//!
//! Every logical entity (a read, a strand, a token) is stored once as an
//! *unoriented* vertex index denoting two oriented vertices, forward and
//! reverse. Every edge inserted between oriented vertices implicitly
//! carries its mirrored twin between the reverses of its endpoints, so the
//! graph looks structurally identical from either strand.
//!
//! ## What lives here
//!
//! - A dense, index-renumbering vertex store with typed per-vertex
//!   attributes ([`RevSymGraph`], [`AttributeContainer`])
//! - The adjacency contract and its in-memory implementation
//!   ([`EdgeStore`], [`AdjacencyTable`])
//! - Strand-aware weak connected components with confusion detection
//!   ([`connected_components`], [`RevSymCcId`])
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network, no file I/O
//! - Deterministic: `BTreeMap`/`Vec` only, integer arithmetic only
//! - Single-threaded: mutation and in-flight component computations must
//!   not be interleaved; callers serialize access externally
//!
//! ## Example
//!
//! ```
//! use revsym_core::{connected_components, OrientedVertex, RevSymGraph, VertexIndex};
//!
//! let mut graph = RevSymGraph::new();
//! let last = graph.add_vertices(2).expect("non-zero count");
//! assert_eq!(last, VertexIndex(1));
//!
//! let zero = OrientedVertex::forward(VertexIndex(0));
//! let one = OrientedVertex::forward(VertexIndex(1));
//! graph.add_edge(zero, one).expect("both vertices exist");
//!
//! let components = connected_components(&graph).expect("total assignment");
//! assert_eq!(
//!     components.id_of(zero).expect("assigned"),
//!     components.id_of(one).expect("assigned"),
//! );
//! // The mirrored strand forms its own component.
//! assert_ne!(
//!     components.id_of(zero).expect("assigned"),
//!     components.id_of(zero.reversed()).expect("assigned"),
//! );
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod attributes;
pub mod components;
pub mod edges;
pub mod graph;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{EdgeIndex, OrientedVertex, Orientation, VertexIndex};

// =============================================================================
// RE-EXPORTS: Attributes
// =============================================================================

pub use attributes::{AttrKind, AttrValue, AttributeContainer, AttributeError};

// =============================================================================
// RE-EXPORTS: Adjacency
// =============================================================================

pub use edges::{AdjacencyEntry, AdjacencyTable, EdgeError, EdgeStore};

// =============================================================================
// RE-EXPORTS: Graph & Components
// =============================================================================

pub use components::{ComponentError, ComponentId, RevSymCcId, connected_components};
pub use graph::{GraphError, RevSymGraph};
