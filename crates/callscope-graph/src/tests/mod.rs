//! Unit tests for the callscope-graph crate.

// Tests use caller/callee terminology which triggers similar_names lint
#![expect(
    clippy::similar_names,
    reason = "caller/callee are domain terms for tests"
)]

mod graph_tests {
    use crate::edge::{CallEdge, EdgeSource};
    use crate::graph::CallGraph;
    use crate::node::{CallNode, SymbolKind};

    use super::support::{location, range, uri};

    fn function(name: &str, line: u32) -> CallNode {
        CallNode::new(
            name,
            SymbolKind::Function,
            uri("lib.abc"),
            range(line, 0, line.saturating_add(2), 1),
            range(line, 5, line, 6),
        )
    }

    #[test]
    fn empty_graph_has_no_nodes() {
        let graph = CallGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn can_add_and_retrieve_node() {
        let mut graph = CallGraph::new();
        let node = function("main", 10);
        let id = node.id().clone();

        graph.add_node(node);

        assert!(!graph.is_empty());
        assert!(graph.contains_node(&id));
        assert_eq!(graph.node(&id).map(CallNode::name), Some("main"));
        assert!(graph.get_node(&id).is_ok());
    }

    #[test]
    fn can_add_edges_and_query_both_directions() {
        let mut graph = CallGraph::new();
        let caller = function("caller", 5);
        let callee = function("callee", 20);
        let caller_id = caller.id().clone();
        let callee_id = callee.id().clone();

        graph.add_node(caller);
        graph.add_node(callee);
        graph.add_edge(CallEdge::new(
            caller_id.clone(),
            callee_id.clone(),
            EdgeSource::DirectSearch,
        ));

        let callers: Vec<_> = graph.callers_of(&callee_id).map(CallNode::name).collect();
        assert_eq!(callers, ["caller"]);
        let callees: Vec<_> = graph.callees_of(&caller_id).map(CallNode::name).collect();
        assert_eq!(callees, ["callee"]);
    }

    #[test]
    fn duplicate_edges_merge_their_call_sites() {
        let mut graph = CallGraph::new();
        let caller = function("caller", 5).id().clone();
        let callee = function("callee", 20).id().clone();
        let first_site = location("lib.abc", 6, 2);
        let second_site = location("lib.abc", 7, 2);

        graph.add_edge(
            CallEdge::new(caller.clone(), callee.clone(), EdgeSource::References)
                .with_call_sites(vec![first_site.clone()]),
        );
        graph.add_edge(
            CallEdge::new(caller.clone(), callee.clone(), EdgeSource::References)
                .with_call_sites(vec![first_site.clone(), second_site.clone()]),
        );

        assert_eq!(graph.edge_count(), 1);
        let sites: Vec<_> = graph
            .outgoing_edges(&caller)
            .flat_map(|edge| edge.call_sites().to_vec())
            .collect();
        assert_eq!(sites, [first_site, second_site]);
    }

    #[test]
    fn edges_from_different_sources_stay_apart() {
        let mut graph = CallGraph::new();
        let caller = function("caller", 5).id().clone();
        let callee = function("callee", 20).id().clone();

        graph.add_edge(CallEdge::new(caller.clone(), callee.clone(), EdgeSource::DirectSearch));
        graph.add_edge(CallEdge::new(caller, callee.clone(), EdgeSource::References));

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.incoming_edges(&callee).count(), 2);
    }

    #[test]
    fn missing_nodes_are_reported() {
        let graph = CallGraph::new();
        let id = function("ghost", 1).id().clone();
        assert!(matches!(
            graph.get_node(&id),
            Err(crate::GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn find_by_name_accepts_qualified_names() {
        let mut graph = CallGraph::new();
        graph.add_node(function("method", 10).with_container("Widget"));

        assert!(graph.find_by_name("method").is_some());
        assert!(graph.find_by_name("Widget.method").is_some());
        assert!(graph.find_by_name("other").is_none());
    }
}

mod node_tests {
    use camino::Utf8Path;

    use crate::node::{CallNode, NodeId, SymbolKind};

    use super::support::{range, uri};

    #[test]
    fn node_id_format_is_correct() {
        let id = NodeId::new(Utf8Path::new("/work/main.abc"), 10, 5, "main");
        assert_eq!(id.as_str(), "/work/main.abc:10:5:main");
    }

    #[test]
    fn node_id_uses_the_selection_start() {
        let node = CallNode::new(
            "helper",
            SymbolKind::Function,
            uri("lib.abc"),
            range(3, 0, 5, 1),
            range(3, 5, 3, 11),
        );

        assert_eq!(node.id().as_str(), "/work/lib.abc:3:5:helper");
        assert_eq!(node.path().as_str(), "/work/lib.abc");
        assert_eq!(node.kind(), SymbolKind::Function);
        assert!(node.container().is_none());
    }

    #[test]
    fn lsp_kinds_map_to_callable_kinds() {
        assert_eq!(
            SymbolKind::from_lsp(lsp_types::SymbolKind::METHOD),
            SymbolKind::Method
        );
        assert_eq!(
            SymbolKind::from_lsp(lsp_types::SymbolKind::CLASS),
            SymbolKind::Unknown
        );
    }
}

mod edge_tests {
    use camino::Utf8Path;

    use crate::edge::{CallEdge, EdgeSource};
    use crate::node::NodeId;

    use super::support::location;

    #[test]
    fn edge_accessors_return_correct_values() {
        let path = Utf8Path::new("/work/lib.abc");
        let caller_id = NodeId::new(path, 10, 0, "caller");
        let callee_id = NodeId::new(path, 20, 0, "callee");
        let site = location("lib.abc", 15, 4);

        let edge = CallEdge::new(caller_id.clone(), callee_id.clone(), EdgeSource::DirectSearch)
            .with_call_sites(vec![site.clone()]);

        assert_eq!(edge.caller(), &caller_id);
        assert_eq!(edge.callee(), &callee_id);
        assert_eq!(edge.source(), EdgeSource::DirectSearch);
        assert_eq!(edge.call_sites(), [site]);
    }

    #[test]
    fn sources_have_short_labels() {
        assert_eq!(EdgeSource::DirectSearch.to_string(), "direct");
        assert_eq!(EdgeSource::References.to_string(), "references");
    }
}

mod support;
