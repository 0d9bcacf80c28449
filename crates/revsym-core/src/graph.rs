//! # Vertex Store
//!
//! The reverse-symmetric graph facade: owns the dense set of unoriented
//! vertex indices, keeps the adjacency table and the attribute container in
//! lockstep, and translates their errors into the vertex-level taxonomy.
//!
//! Every unoriented index denotes two oriented vertices, so a store with
//! `card_index() == n` holds `2 * n` oriented vertices.

use crate::attributes::{AttrKind, AttrValue, AttributeContainer, AttributeError};
use crate::edges::{AdjacencyTable, EdgeError, EdgeStore};
use crate::types::{EdgeIndex, OrientedVertex, VertexIndex};
use std::collections::BTreeSet;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the vertex store.
///
/// Inner attribute and edge errors are translated at this boundary so
/// callers only ever see vertex-level kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a vertex index `>= card_index()`.
    #[error("no vertex index: {0:?}")]
    NoVertexIndex(VertexIndex),

    /// The attribute name was never registered on vertices.
    #[error("no vertices attribute: {0}")]
    NoVerticesAttribute(String),

    /// The value's kind does not match the kind fixed at registration.
    #[error("wrong type for vertices attribute {name}: expected {expected:?}, got {got:?}")]
    WrongAttributeType {
        /// The attribute being set.
        name: String,
        /// The kind fixed by the registered default.
        expected: AttrKind,
        /// The kind of the rejected value.
        got: AttrKind,
    },

    /// The attribute name is already registered on vertices.
    #[error("vertices attribute already registered: {0}")]
    AttributeExists(String),
}

impl GraphError {
    /// Translate a container error raised while operating on `index`.
    ///
    /// `NoKey` becomes `NoVertexIndex`: the container's key space is the
    /// vertex index space, and the vertex-level name is the one callers
    /// can act on.
    fn from_attribute(err: AttributeError, index: VertexIndex) -> Self {
        match err {
            AttributeError::NoKey(_) => Self::NoVertexIndex(index),
            AttributeError::NoAttribute(name) => Self::NoVerticesAttribute(name),
            AttributeError::WrongType {
                name,
                expected,
                got,
            } => Self::WrongAttributeType {
                name,
                expected,
                got,
            },
            AttributeError::AlreadyRegistered(name) => Self::AttributeExists(name),
        }
    }
}

impl From<EdgeError> for GraphError {
    fn from(err: EdgeError) -> Self {
        match err {
            EdgeError::NoVertex(index) => Self::NoVertexIndex(index),
        }
    }
}

// =============================================================================
// GRAPH
// =============================================================================

/// A reverse-symmetric graph: vertex store, adjacency table, attributes.
///
/// The adjacency backend is pluggable through [`EdgeStore`]; the in-memory
/// [`AdjacencyTable`] is the default. The store keeps one invariant at all
/// times: the adjacency table and the attribute container agree on
/// `card_index()`, so vertex lifecycle must go through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevSymGraph<E = AdjacencyTable> {
    /// The adjacency collaborator.
    edges: E,
    /// Per-vertex attribute slots, same index space as `edges`.
    attributes: AttributeContainer,
}

impl RevSymGraph {
    /// Create a new empty graph over the in-memory adjacency table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: EdgeStore> RevSymGraph<E> {
    /// Wrap an existing edge store.
    ///
    /// Attribute slots are created to match the store's current
    /// `card_index`, all reading registered defaults.
    #[must_use]
    pub fn with_edge_store(edges: E) -> Self {
        let mut attributes = AttributeContainer::new();
        attributes.add_keys(edges.card_index());
        Self { edges, attributes }
    }

    /// Number of unoriented vertices currently stored.
    #[must_use]
    pub fn card_index(&self) -> usize {
        self.edges.card_index()
    }

    /// Number of oriented vertices: `2 * card_index()`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.card_index().saturating_mul(2)
    }

    /// Check whether the store holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_index() == 0
    }

    /// Membership test: an oriented vertex is in the store iff its
    /// unoriented index is below `card_index()`.
    #[must_use]
    pub fn contains(&self, vertex: OrientedVertex) -> bool {
        vertex.index.value() < self.card_index()
    }

    /// Iterate over every oriented vertex, unoriented index ascending,
    /// forward before reverse.
    pub fn vertices(&self) -> impl Iterator<Item = OrientedVertex> {
        (0..self.card_index()).flat_map(|raw| {
            let index = VertexIndex(raw);
            [
                OrientedVertex::forward(index),
                OrientedVertex::reverse(index),
            ]
        })
    }

    /// Read access to the adjacency collaborator.
    #[must_use]
    pub fn edges(&self) -> &E {
        &self.edges
    }

    // =========================================================================
    // VERTEX LIFECYCLE
    // =========================================================================

    /// Append one unoriented vertex and return its index.
    ///
    /// The new vertex gets empty predecessor/successor lists in both
    /// orientations and a fresh attribute slot reading every default.
    pub fn add_vertex(&mut self) -> VertexIndex {
        self.edges.add_vertices(1);
        self.attributes.add_keys(1);
        VertexIndex(self.card_index().saturating_sub(1))
    }

    /// Append `number` unoriented vertices and return the index of the
    /// last one added (`card_index() - 1` after the append).
    ///
    /// Returns `None` when `number == 0`.
    pub fn add_vertices(&mut self, number: usize) -> Option<VertexIndex> {
        if number == 0 {
            return None;
        }
        self.edges.add_vertices(number);
        self.attributes.add_keys(number);
        Some(VertexIndex(self.card_index().saturating_sub(1)))
    }

    /// Delete one unoriented vertex together with both oriented vertices,
    /// every incident edge, and its attribute slot.
    ///
    /// Every vertex index above the deleted one shifts down by one, in the
    /// store and inside every surviving adjacency entry. This invalidates
    /// all indices greater than the deleted one: callers holding indices
    /// across a delete must re-derive them.
    pub fn delete(&mut self, index: VertexIndex) -> Result<(), GraphError> {
        if index.value() >= self.card_index() {
            return Err(GraphError::NoVertexIndex(index));
        }
        self.edges.remove_vertex(index)?;
        self.attributes
            .delete_key(index.value())
            .map_err(|err| GraphError::from_attribute(err, index))?;
        Ok(())
    }

    /// Delete several unoriented vertices in one call.
    ///
    /// Indices may arrive in any order and may repeat; they are validated
    /// up front against the current `card_index()`, deduplicated, and
    /// processed in descending order so every deletion still refers to a
    /// not-yet-shifted position. Nothing is mutated if any index is out of
    /// range.
    pub fn delete_several(&mut self, indices: &[VertexIndex]) -> Result<(), GraphError> {
        let card = self.card_index();
        let mut ordered = BTreeSet::new();
        for &index in indices {
            if index.value() >= card {
                return Err(GraphError::NoVertexIndex(index));
            }
            ordered.insert(index);
        }
        for &index in ordered.iter().rev() {
            self.delete(index)?;
        }
        Ok(())
    }

    // =========================================================================
    // EDGES
    // =========================================================================

    /// Insert the edge `(from -> to)` and its mirrored twin, returning the
    /// shared edge index.
    pub fn add_edge(
        &mut self,
        from: OrientedVertex,
        to: OrientedVertex,
    ) -> Result<EdgeIndex, GraphError> {
        Ok(self.edges.add_edge(from, to)?)
    }

    // =========================================================================
    // ATTRIBUTES
    // =========================================================================

    /// Register a vertices attribute with its default value.
    pub fn new_attr(
        &mut self,
        name: impl Into<String>,
        default: AttrValue,
    ) -> Result<(), GraphError> {
        let name = name.into();
        self.attributes
            .new_attr(name, default)
            // Registration carries no vertex index; the placeholder is never
            // reported because `new_attr` cannot raise `NoKey`.
            .map_err(|err| GraphError::from_attribute(err, VertexIndex(0)))
    }

    /// Get the value of `name` on the vertex at `index`.
    pub fn attr(&self, index: VertexIndex, name: &str) -> Result<&AttrValue, GraphError> {
        self.attributes
            .get(index.value(), name)
            .map_err(|err| GraphError::from_attribute(err, index))
    }

    /// Iterate over `(name, value)` for every registered attribute on the
    /// vertex at `index`.
    pub fn attrs(
        &self,
        index: VertexIndex,
    ) -> Result<impl Iterator<Item = (&str, &AttrValue)>, GraphError> {
        self.attributes
            .get_all(index.value())
            .map_err(|err| GraphError::from_attribute(err, index))
    }

    /// Set the value of `name` on the vertex at `index`.
    pub fn set_attr(
        &mut self,
        index: VertexIndex,
        name: &str,
        value: AttrValue,
    ) -> Result<(), GraphError> {
        self.attributes
            .set_attr(index.value(), name, value)
            .map_err(|err| GraphError::from_attribute(err, index))
    }
}

// =============================================================================
// TESTS
// =============================================================================
