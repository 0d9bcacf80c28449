//! # Edge / Adjacency Table
//!
//! Directed adjacency storage for oriented vertices, with the
//! reverse-symmetric mirroring guarantee: inserting `(u -> v)` also makes
//! `(reverse(v) -> reverse(u))` discoverable, under the same `EdgeIndex`.
//!
//! The `EdgeStore` trait is the contract the rest of the crate consumes;
//! `AdjacencyTable` is the in-memory implementation. Alternative backends
//! must honor the same mirroring and renumbering semantics.

use crate::types::{EdgeIndex, Orientation, OrientedVertex, VertexIndex};
use thiserror::Error;

/// One adjacency record: the neighbour and the edge that reaches it.
pub type AdjacencyEntry = (OrientedVertex, EdgeIndex);

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by an edge store.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EdgeError {
    /// An operation referenced a vertex index outside `[0, card_index)`.
    #[error("no vertex index: {0:?}")]
    NoVertex(VertexIndex),
}

// =============================================================================
// EDGESTORE TRAIT
// =============================================================================

/// The adjacency contract consumed by the vertex store and the
/// connected-components algorithm.
///
/// Invariants every implementation must uphold:
/// - If `(v, e)` appears in `succs(u)`, then `(u, e)` appears in `preds(v)`.
/// - Inserting `(u -> v)` also inserts the mirrored
///   `(reverse(v) -> reverse(u))` under the same edge index, so exploring
///   from either strand yields a structurally identical graph up to
///   orientation.
/// - Vertex slots form the dense range `[0, card_index)`; `remove_vertex`
///   renumbers every stored reference above the removed index.
pub trait EdgeStore {
    /// Number of unoriented vertex slots currently stored.
    fn card_index(&self) -> usize;

    /// Append `number` fresh vertex slots with empty predecessor and
    /// successor lists in both orientations.
    fn add_vertices(&mut self, number: usize);

    /// Remove one vertex slot and every edge incident to it.
    ///
    /// Every surviving adjacency entry referencing an index above the
    /// removed one is decremented by one, keeping the index space dense.
    fn remove_vertex(&mut self, index: VertexIndex) -> Result<(), EdgeError>;

    /// Insert the edge `(from -> to)` and its mirrored twin.
    ///
    /// Returns the index shared by both. Parallel edges are allowed and
    /// keep distinct indices.
    fn add_edge(
        &mut self,
        from: OrientedVertex,
        to: OrientedVertex,
    ) -> Result<EdgeIndex, EdgeError>;

    /// Successors of `vertex`, in insertion order.
    fn succs(&self, vertex: OrientedVertex) -> Result<Vec<AdjacencyEntry>, EdgeError>;

    /// Predecessors of `vertex`, in insertion order.
    fn preds(&self, vertex: OrientedVertex) -> Result<Vec<AdjacencyEntry>, EdgeError>;

    /// All vertices directly reachable from `vertex` via one edge,
    /// irrespective of direction: successors first, then predecessors.
    ///
    /// Entries are not deduplicated; a neighbour appears once per incident
    /// edge.
    fn neighbours(&self, vertex: OrientedVertex) -> Result<Vec<AdjacencyEntry>, EdgeError> {
        let mut entries = self.succs(vertex)?;
        entries.extend(self.preds(vertex)?);
        Ok(entries)
    }

    /// Total number of stored directed edges, mirrors included.
    fn edge_count(&self) -> usize;
}

// =============================================================================
// ADJACENCY TABLE
// =============================================================================

/// Adjacency lists for the two orientations of one unoriented vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct OrientedLists {
    forward: Vec<AdjacencyEntry>,
    reverse: Vec<AdjacencyEntry>,
}

impl OrientedLists {
    fn get(&self, orientation: Orientation) -> &Vec<AdjacencyEntry> {
        match orientation {
            Orientation::Forward => &self.forward,
            Orientation::Reverse => &self.reverse,
        }
    }

    fn get_mut(&mut self, orientation: Orientation) -> &mut Vec<AdjacencyEntry> {
        match orientation {
            Orientation::Forward => &mut self.forward,
            Orientation::Reverse => &mut self.reverse,
        }
    }
}

/// In-memory reverse-symmetric adjacency table.
///
/// One predecessor table and one successor table, each holding per
/// unoriented vertex the lists for both orientations. Flat `Vec` storage
/// indexed by `VertexIndex`, so deletion is an explicit renumbering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyTable {
    /// Successor lists, indexed by unoriented vertex.
    succ_lists: Vec<OrientedLists>,
    /// Predecessor lists, indexed by unoriented vertex.
    pred_lists: Vec<OrientedLists>,
    /// Next edge index to allocate.
    next_edge: u64,
    /// Number of stored directed edges, mirrors included.
    edges: usize,
}

impl AdjacencyTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self, vertex: OrientedVertex) -> Result<(), EdgeError> {
        if vertex.index.value() >= self.card_index() {
            return Err(EdgeError::NoVertex(vertex.index));
        }
        Ok(())
    }

    /// Insert one directed edge record. Bounds are the caller's problem.
    fn push_directed(&mut self, from: OrientedVertex, to: OrientedVertex, edge: EdgeIndex) {
        if let Some(lists) = self.succ_lists.get_mut(from.index.value()) {
            lists.get_mut(from.orientation).push((to, edge));
        }
        if let Some(lists) = self.pred_lists.get_mut(to.index.value()) {
            lists.get_mut(to.orientation).push((from, edge));
        }
        self.edges = self.edges.saturating_add(1);
    }
}

/// Drop entries referencing `deleted` and renumber entries above it.
/// Returns how many entries were dropped.
fn purge_and_shift(list: &mut Vec<AdjacencyEntry>, deleted: VertexIndex) -> usize {
    let before = list.len();
    list.retain(|(neighbour, _)| neighbour.index != deleted);
    let dropped = before.saturating_sub(list.len());
    for (neighbour, _) in list.iter_mut() {
        if neighbour.index > deleted {
            neighbour.index = VertexIndex(neighbour.index.value().saturating_sub(1));
        }
    }
    dropped
}

impl EdgeStore for AdjacencyTable {
    fn card_index(&self) -> usize {
        self.succ_lists.len()
    }

    fn add_vertices(&mut self, number: usize) {
        for _ in 0..number {
            self.succ_lists.push(OrientedLists::default());
            self.pred_lists.push(OrientedLists::default());
        }
    }

    fn remove_vertex(&mut self, index: VertexIndex) -> Result<(), EdgeError> {
        if index.value() >= self.card_index() {
            return Err(EdgeError::NoVertex(index));
        }

        // Each directed edge has exactly one successor record, so counting
        // drops on the successor side counts removed edges exactly once.
        let mut dropped = 0usize;
        for lists in &mut self.succ_lists {
            dropped = dropped.saturating_add(purge_and_shift(&mut lists.forward, index));
            dropped = dropped.saturating_add(purge_and_shift(&mut lists.reverse, index));
        }
        for lists in &mut self.pred_lists {
            purge_and_shift(&mut lists.forward, index);
            purge_and_shift(&mut lists.reverse, index);
        }

        // Close the gap: every slot above `index` moves down by one, and the
        // last slot is popped. Edges leaving the removed vertex live in its
        // own successor lists and vanish with the slot.
        let own = self.succ_lists.remove(index.value());
        dropped = dropped.saturating_add(own.forward.len());
        dropped = dropped.saturating_add(own.reverse.len());
        self.pred_lists.remove(index.value());

        self.edges = self.edges.saturating_sub(dropped);
        Ok(())
    }

    fn add_edge(
        &mut self,
        from: OrientedVertex,
        to: OrientedVertex,
    ) -> Result<EdgeIndex, EdgeError> {
        self.check(from)?;
        self.check(to)?;

        let edge = EdgeIndex(self.next_edge);
        self.next_edge = self.next_edge.saturating_add(1);

        self.push_directed(from, to, edge);

        // The mirror of (u -> v) is (reverse(v) -> reverse(u)). When the two
        // coincide (v == reverse(u)), the edge is its own mirror and is
        // stored once.
        let mirror_from = to.reversed();
        let mirror_to = from.reversed();
        if (mirror_from, mirror_to) != (from, to) {
            self.push_directed(mirror_from, mirror_to, edge);
        }

        Ok(edge)
    }

    fn succs(&self, vertex: OrientedVertex) -> Result<Vec<AdjacencyEntry>, EdgeError> {
        self.check(vertex)?;
        Ok(self
            .succ_lists
            .get(vertex.index.value())
            .map(|lists| lists.get(vertex.orientation).clone())
            .unwrap_or_default())
    }

    fn preds(&self, vertex: OrientedVertex) -> Result<Vec<AdjacencyEntry>, EdgeError> {
        self.check(vertex)?;
        Ok(self
            .pred_lists
            .get(vertex.index.value())
            .map(|lists| lists.get(vertex.orientation).clone())
            .unwrap_or_default())
    }

    fn edge_count(&self) -> usize {
        self.edges
    }
}

// =============================================================================
// TESTS
// =============================================================================
