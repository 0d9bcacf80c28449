//! # Component Identifier Factory
//!
//! Per-vertex component bookkeeping for the weak exploration:
//! - Ids are allocated in couples `(2k, 2k+1)`: one for the component being
//!   walked, one for its mirror on the opposite strand.
//! - Each unoriented index moves `Undiscovered -> Discovered(id, continuity)`
//!   exactly once; only the id may later be redirected by a merge.
//! - Merges go through a union-find (path compression, union by size), so
//!   `merge_cc` is O(1) amortized.

use super::ComponentError;
use crate::types::{OrientedVertex, VertexIndex};
use serde::{Deserialize, Serialize};

// =============================================================================
// COMPONENT IDENTIFIER
// =============================================================================

/// Identifier of one weak component over oriented vertices.
///
/// Raw values are allocation-order dependent: two runs over the same graph
/// group vertices identically but may number the groups differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub usize);

impl ComponentId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

// =============================================================================
// DISJOINT SET
// =============================================================================

/// Union-find over raw component ids.
#[derive(Debug, Clone, Default)]
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Allocate one fresh singleton and return its id.
    fn push(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.size.push(1);
        id
    }

    /// Representative of `id`, with path halving.
    fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            let grandparent = self.parent[self.parent[id]];
            self.parent[id] = grandparent;
            id = grandparent;
        }
        id
    }

    /// Union by size. Redirecting the smaller root keeps `find` amortized
    /// near-constant.
    fn union(&mut self, left: usize, right: usize) {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return;
        }
        let (keep, redirect) = if self.size[left] >= self.size[right] {
            (left, right)
        } else {
            (right, left)
        };
        self.parent[redirect] = keep;
        self.size[keep] = self.size[keep].saturating_add(self.size[redirect]);
    }
}

// =============================================================================
// FACTORY
// =============================================================================

/// Discovery record for one unoriented index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CcSlot {
    /// Working id of the exploration that discovered this index.
    id: usize,
    /// Whether the forward orientation was the one discovered.
    forward_first: bool,
}

/// Assigns and merges component ids during one exploration run.
///
/// Created fresh per `connected_components` invocation; never mutated
/// outside of it.
#[derive(Debug)]
pub(crate) struct CcIdFactory {
    /// One slot per unoriented index; `None` until discovered.
    slots: Vec<Option<CcSlot>>,
    /// Redirection table over every id allocated so far.
    ids: DisjointSet,
    /// Primary id of the couple currently being explored.
    current: Option<usize>,
}

impl CcIdFactory {
    /// A factory with every index undiscovered.
    pub(crate) fn new(card_index: usize) -> Self {
        Self {
            slots: vec![None; card_index],
            ids: DisjointSet::default(),
            current: None,
        }
    }

    /// Allocate a fresh id couple before exploring an unvisited vertex.
    ///
    /// The primary id is handed to every vertex of the walk; its partner
    /// (`primary ^ 1`) stands for the mirrored component on the opposite
    /// strand.
    pub(crate) fn new_cc_couple(&mut self) {
        let primary = self.ids.push();
        self.ids.push();
        self.current = Some(primary);
    }

    /// Check whether either orientation of `vertex`'s index was discovered.
    pub(crate) fn is_discovered(&self, vertex: OrientedVertex) -> bool {
        self.slots
            .get(vertex.index.value())
            .is_some_and(Option::is_some)
    }

    /// Mark `vertex` as discovered by the current walk.
    pub(crate) fn set_cc_id(&mut self, vertex: OrientedVertex) {
        let Some(current) = self.current else {
            return;
        };
        if let Some(slot) = self.slots.get_mut(vertex.index.value()) {
            *slot = Some(CcSlot {
                id: current,
                forward_first: vertex.is_forward(),
            });
        }
    }

    /// Whether `vertex` matches the orientation its index was discovered
    /// in. `None` if the index is still undiscovered.
    pub(crate) fn continuity(&self, vertex: OrientedVertex) -> Option<bool> {
        self.slots
            .get(vertex.index.value())
            .copied()
            .flatten()
            .map(|slot| slot.forward_first == vertex.is_forward())
    }

    /// Merge the working couple: the walked component and its mirror are
    /// one and the same ("strand confusion").
    ///
    /// Queries for any member of either id return the merged id from here
    /// on. Safe to call repeatedly within one walk.
    pub(crate) fn merge_cc(&mut self) {
        if let Some(current) = self.current {
            self.ids.union(current, current ^ 1);
        }
    }

    /// Freeze the assignment into a read-only view.
    ///
    /// Fails with [`ComponentError::Unassigned`] if any index was never
    /// discovered — an invariant violation, since a completed run visits
    /// every oriented vertex.
    pub(crate) fn into_view(mut self) -> Result<RevSymCcId, ComponentError> {
        let mut assignments = Vec::with_capacity(self.slots.len());
        for raw in 0..self.slots.len() {
            let slot = self.slots[raw].ok_or(ComponentError::Unassigned(VertexIndex(raw)))?;
            assignments.push(CcAssignment {
                discovered: ComponentId(self.ids.find(slot.id)),
                mirrored: ComponentId(self.ids.find(slot.id ^ 1)),
                forward_first: slot.forward_first,
            });
        }
        Ok(RevSymCcId { assignments })
    }
}

// =============================================================================
// READ-ONLY VIEW
// =============================================================================

/// Frozen component assignment for one unoriented index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CcAssignment {
    /// Final id of the orientation that was discovered.
    discovered: ComponentId,
    /// Final id of the opposite orientation.
    mirrored: ComponentId,
    /// Whether the forward orientation was the one discovered.
    forward_first: bool,
}

/// Read-only component assignment, total over all oriented vertices.
///
/// Produced by [`connected_components`](super::connected_components); the
/// only failing queries are out-of-range indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevSymCcId {
    assignments: Vec<CcAssignment>,
}

impl RevSymCcId {
    /// Number of unoriented indices covered by the assignment.
    #[must_use]
    pub fn card_index(&self) -> usize {
        self.assignments.len()
    }

    /// Component id of `vertex`.
    pub fn id_of(&self, vertex: OrientedVertex) -> Result<ComponentId, ComponentError> {
        let assignment = self
            .assignments
            .get(vertex.index.value())
            .ok_or(ComponentError::NoVertexIndex(vertex.index))?;
        if vertex.is_forward() == assignment.forward_first {
            Ok(assignment.discovered)
        } else {
            Ok(assignment.mirrored)
        }
    }

    /// Whether `vertex` matches the orientation its index was discovered
    /// in during the run that produced this view.
    pub fn continuity(&self, vertex: OrientedVertex) -> Result<bool, ComponentError> {
        let assignment = self
            .assignments
            .get(vertex.index.value())
            .ok_or(ComponentError::NoVertexIndex(vertex.index))?;
        Ok(assignment.forward_first == vertex.is_forward())
    }

    /// Iterate over `(vertex, component_id)` for every oriented vertex,
    /// index ascending, forward before reverse.
    pub fn iter(&self) -> impl Iterator<Item = (OrientedVertex, ComponentId)> + '_ {
        self.assignments.iter().enumerate().flat_map(|(raw, assignment)| {
            let index = VertexIndex(raw);
            let (forward_id, reverse_id) = if assignment.forward_first {
                (assignment.discovered, assignment.mirrored)
            } else {
                (assignment.mirrored, assignment.discovered)
            };
            [
                (OrientedVertex::forward(index), forward_id),
                (OrientedVertex::reverse(index), reverse_id),
            ]
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
