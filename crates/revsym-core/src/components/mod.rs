//! # Connected Components
//!
//! Weak (direction-blind) connected components over oriented vertices,
//! aware of the forward/reverse duality: when a walk reaches the reverse of
//! a vertex it has already claimed, the component and its mirror are one
//! strand-confused component and their ids are merged.
//!
//! The entry point is [`connected_components`]; the result is a read-only
//! [`RevSymCcId`] answering id and continuity queries for every oriented
//! vertex.

mod ident;

pub use ident::{ComponentId, RevSymCcId};

use crate::edges::{EdgeError, EdgeStore};
use crate::graph::RevSymGraph;
use crate::types::{OrientedVertex, VertexIndex};
use ident::CcIdFactory;
use std::collections::VecDeque;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the component machinery.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ComponentError {
    /// A finished run left an index without an id. This is an invariant
    /// violation of the exploration, not a recoverable caller mistake.
    #[error("no component assigned for vertex index: {0:?}")]
    Unassigned(VertexIndex),

    /// A view query referenced a vertex index outside the assignment.
    #[error("no vertex index: {0:?}")]
    NoVertexIndex(VertexIndex),

    /// The adjacency collaborator rejected a lookup mid-walk.
    #[error(transparent)]
    Edge(#[from] EdgeError),
}

// =============================================================================
// ALGORITHM
// =============================================================================

/// Compute the weak connected components of `graph`.
///
/// Breadth-first exploration, one id couple per walk. The outer loop
/// enumerates oriented vertices forward-before-reverse in index order, so
/// every unoriented index roots a walk at most once: if its reverse was
/// already claimed as a neighbour of some earlier walk, the index is
/// skipped when enumerated.
///
/// The result is total: all `2 * card_index()` oriented vertices carry an
/// id. Runs in O(V + E) amortized.
///
/// Deleting vertices invalidates any in-flight or previously returned
/// assignment; rerun after mutation.
pub fn connected_components<E: EdgeStore>(
    graph: &RevSymGraph<E>,
) -> Result<RevSymCcId, ComponentError> {
    let mut factory = CcIdFactory::new(graph.card_index());
    for vertex in graph.vertices() {
        if !factory.is_discovered(vertex) {
            factory.new_cc_couple();
            explore_weak(graph, &mut factory, vertex)?;
        }
    }
    factory.into_view()
}

/// Claim everything weakly reachable from `start` for the current couple.
///
/// A neighbour whose index is already claimed in the opposite orientation
/// means the walked component contains both strands of that index: the
/// couple is merged and the walk goes on to claim the rest.
fn explore_weak<E: EdgeStore>(
    graph: &RevSymGraph<E>,
    factory: &mut CcIdFactory,
    start: OrientedVertex,
) -> Result<(), ComponentError> {
    let mut queue = VecDeque::new();
    factory.set_cc_id(start);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        for (neighbour, _edge) in graph.edges().neighbours(vertex)? {
            match factory.continuity(neighbour) {
                None => {
                    factory.set_cc_id(neighbour);
                    queue.push_back(neighbour);
                }
                Some(true) => {}
                Some(false) => factory.merge_cc(),
            }
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
