//! # Store Contract Tests
//!
//! End-to-end scenarios over the public surface, one section per
//! component:
//! - vertex lifecycle and renumbering
//! - attribute registration and typing
//! - adjacency mirroring
//! - component analysis, including strand confusion

use revsym_core::{
    AttrValue, ComponentError, EdgeStore, GraphError, OrientedVertex, RevSymGraph, VertexIndex,
    connected_components,
};

fn fwd(index: usize) -> OrientedVertex {
    OrientedVertex::forward(VertexIndex(index))
}

fn rev(index: usize) -> OrientedVertex {
    OrientedVertex::reverse(VertexIndex(index))
}

// =============================================================================
// VERTEX LIFECYCLE
// =============================================================================

mod vertex_lifecycle {
    use super::*;

    /// The documented walkthrough: three vertices, delete the middle one,
    /// surviving edges renumber.
    #[test]
    fn add_delete_renumber_walkthrough() {
        let mut store = RevSymGraph::new();

        assert_eq!(store.add_vertices(3), Some(VertexIndex(2)));
        assert_eq!(store.card_index(), 3);

        let edge = store.add_edge(fwd(0), fwd(2)).expect("add edge");
        store.delete(VertexIndex(1)).expect("delete");

        assert_eq!(store.card_index(), 2);
        // The edge previously referencing old index 2 now references 1.
        assert_eq!(
            store.edges().succs(fwd(0)).expect("succs"),
            vec![(fwd(1), edge)]
        );
    }

    #[test]
    fn deleting_every_vertex_empties_the_store() {
        let mut store = RevSymGraph::new();
        store.add_vertices(4).expect("add");
        store.add_edge(fwd(0), fwd(3)).expect("add edge");

        store
            .delete_several(&[
                VertexIndex(0),
                VertexIndex(1),
                VertexIndex(2),
                VertexIndex(3),
            ])
            .expect("delete all");

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.edges().edge_count(), 0);
        assert_eq!(store.vertices().count(), 0);
    }

    #[test]
    fn stale_index_is_rejected_after_deletion() {
        let mut store = RevSymGraph::new();
        store.add_vertices(2).expect("add");
        store.delete(VertexIndex(0)).expect("delete");

        // Old index 1 no longer exists; it must be re-derived, not reused.
        assert_eq!(
            store.delete(VertexIndex(1)),
            Err(GraphError::NoVertexIndex(VertexIndex(1)))
        );
        assert_eq!(store.card_index(), 1);
    }
}

// =============================================================================
// ATTRIBUTE SURFACE
// =============================================================================

mod attribute_surface {
    use super::*;

    #[test]
    fn defaults_then_overrides_then_shift() {
        let mut store = RevSymGraph::new();
        store.new_attr("name", AttrValue::from("")).expect("register");
        store.new_attr("coverage", AttrValue::UInt(1)).expect("register");
        store.add_vertices(3).expect("add");

        store
            .set_attr(VertexIndex(1), "name", AttrValue::from("middle"))
            .expect("set");
        store
            .set_attr(VertexIndex(2), "coverage", AttrValue::UInt(12))
            .expect("set");

        store.delete(VertexIndex(0)).expect("delete");

        // Former vertex 1 is now vertex 0 and kept its values.
        assert_eq!(
            store.attr(VertexIndex(0), "name").expect("attr"),
            &AttrValue::from("middle")
        );
        let listed: Vec<_> = store.attrs(VertexIndex(1)).expect("attrs").collect();
        assert_eq!(
            listed,
            vec![
                ("coverage", &AttrValue::UInt(12)),
                ("name", &AttrValue::from("")),
            ]
        );
    }

    #[test]
    fn typing_is_enforced_through_the_store() {
        let mut store = RevSymGraph::new();
        store.new_attr("flag", AttrValue::Bool(false)).expect("register");
        store.add_vertices(1).expect("add");

        assert!(matches!(
            store.set_attr(VertexIndex(0), "flag", AttrValue::from("yes")),
            Err(GraphError::WrongAttributeType { .. })
        ));
        assert_eq!(
            store.set_attr(VertexIndex(0), "other", AttrValue::Bool(true)),
            Err(GraphError::NoVerticesAttribute("other".to_string()))
        );
        assert_eq!(
            store.attr(VertexIndex(1), "flag"),
            Err(GraphError::NoVertexIndex(VertexIndex(1)))
        );
    }
}

// =============================================================================
// ADJACENCY MIRRORING
// =============================================================================

mod adjacency_mirroring {
    use super::*;

    /// Inserting one edge makes four directed records discoverable: the
    /// edge, its predecessor view, and both sides of the mirror.
    #[test]
    fn every_edge_is_discoverable_from_both_strands() {
        let mut store = RevSymGraph::new();
        store.add_vertices(2).expect("add");
        let edge = store.add_edge(fwd(0), rev(1)).expect("add edge");

        let table = store.edges();
        assert_eq!(table.succs(fwd(0)).expect("succs"), vec![(rev(1), edge)]);
        assert_eq!(table.preds(rev(1)).expect("preds"), vec![(fwd(0), edge)]);
        assert_eq!(table.succs(fwd(1)).expect("succs"), vec![(rev(0), edge)]);
        assert_eq!(table.preds(rev(0)).expect("preds"), vec![(fwd(1), edge)]);
    }

    #[test]
    fn neighbours_are_direction_blind() {
        let mut store = RevSymGraph::new();
        store.add_vertices(3).expect("add");
        let outgoing = store.add_edge(fwd(1), fwd(2)).expect("add edge");
        let incoming = store.add_edge(fwd(0), fwd(1)).expect("add edge");

        assert_eq!(
            store.edges().neighbours(fwd(1)).expect("neighbours"),
            vec![(fwd(2), outgoing), (fwd(0), incoming)]
        );
    }

    #[test]
    fn deletion_purges_mirrored_records_too() {
        let mut store = RevSymGraph::new();
        store.add_vertices(2).expect("add");
        store.add_edge(fwd(0), fwd(1)).expect("add edge");

        store.delete(VertexIndex(1)).expect("delete");

        for vertex in [fwd(0), rev(0)] {
            assert!(store.edges().neighbours(vertex).expect("neighbours").is_empty());
        }
    }
}

// =============================================================================
// COMPONENT ANALYSIS
// =============================================================================

mod component_analysis {
    use super::*;

    /// The confusion scenario: edges `0 -> 1`, `1 -> 0`, and `reverse(0)
    /// -> 1` tie a strand to the reverse of its own neighbour. All four
    /// oriented vertices land in one component.
    #[test]
    fn confused_strands_collapse_into_one_component() {
        let mut store = RevSymGraph::new();
        store.add_vertices(2).expect("add");
        store.add_edge(fwd(0), fwd(1)).expect("add edge");
        store.add_edge(fwd(1), fwd(0)).expect("add edge");
        store.add_edge(rev(0), fwd(1)).expect("add edge");

        let view = connected_components(&store).expect("components");

        let id = view.id_of(fwd(0)).expect("id");
        assert_eq!(view.id_of(rev(0)).expect("id"), id);
        assert_eq!(view.id_of(fwd(1)).expect("id"), id);
        assert_eq!(view.id_of(rev(1)).expect("id"), id);
    }

    /// Without confusion a walk and its mirror stay two components, and
    /// rerunning after a deletion reflects the new structure.
    #[test]
    fn components_track_mutation_across_reruns() {
        let mut store = RevSymGraph::new();
        store.add_vertices(3).expect("add");
        store.add_edge(fwd(0), fwd(1)).expect("add edge");
        store.add_edge(fwd(1), fwd(2)).expect("add edge");

        let before = connected_components(&store).expect("components");
        assert_eq!(
            before.id_of(fwd(0)).expect("id"),
            before.id_of(fwd(2)).expect("id")
        );

        // Deleting the middle vertex splits the chain; the old view is
        // discarded and a fresh run reflects the split.
        store.delete(VertexIndex(1)).expect("delete");
        let after = connected_components(&store).expect("components");

        assert_eq!(after.card_index(), 2);
        assert_ne!(
            after.id_of(fwd(0)).expect("id"),
            after.id_of(fwd(1)).expect("id")
        );
    }

    #[test]
    fn view_is_bounded_by_the_graph_it_was_computed_on() {
        let mut store = RevSymGraph::new();
        store.add_vertices(1).expect("add");
        let view = connected_components(&store).expect("components");

        assert_eq!(
            view.id_of(fwd(1)),
            Err(ComponentError::NoVertexIndex(VertexIndex(1)))
        );
    }

    /// Forward is enumerated before reverse, so a component discovered
    /// through its forward strand reports continuity for forward queries.
    #[test]
    fn continuity_distinguishes_the_discovered_strand() {
        let mut store = RevSymGraph::new();
        store.add_vertices(2).expect("add");
        store.add_edge(fwd(0), fwd(1)).expect("add edge");

        let view = connected_components(&store).expect("components");

        assert!(view.continuity(fwd(0)).expect("continuity"));
        assert!(view.continuity(fwd(1)).expect("continuity"));
        assert!(!view.continuity(rev(0)).expect("continuity"));
        assert!(!view.continuity(rev(1)).expect("continuity"));
    }
}
