//! Tests for the host-backed call hierarchy service.

use std::future::{Future, ready};
use std::str::FromStr;

use callscope_graph::GraphError;
use callscope_host::{DocumentSnapshot, HostError, HostOperation, NavigationHost};
use lsp_types::{DocumentSymbol, Location, Position, Range, SymbolKind, Uri};

use crate::{ReferenceCallScope, ServiceError};

fn uri() -> Uri {
    Uri::from_str("file:///work/lib.ts").expect("valid URI")
}

fn span(start_line: u32, end_line: u32) -> Range {
    Range::new(Position::new(start_line, 0), Position::new(end_line, 1))
}

fn at(line: u32, character: u32) -> Location {
    Location::new(
        uri(),
        Range::new(
            Position::new(line, character),
            Position::new(line, character.saturating_add(6)),
        ),
    )
}

#[expect(deprecated, reason = "DocumentSymbol::deprecated must still be initialised")]
fn function(name: &str, range: Range) -> DocumentSymbol {
    DocumentSymbol {
        name: name.to_owned(),
        detail: Some("lib".to_owned()),
        kind: SymbolKind::FUNCTION,
        tags: None,
        deprecated: None,
        range,
        selection_range: Range::new(range.start, range.start),
        children: None,
    }
}

/// `helper` spans lines 0-2 and is called twice from `main` (lines 4-8).
struct FixedHost {
    fail_references: bool,
}

impl NavigationHost for FixedHost {
    fn definitions(
        &self,
        _uri: &Uri,
        _position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>> {
        ready(Ok(vec![at(0, 0)]))
    }

    fn references(
        &self,
        _uri: &Uri,
        _position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>> {
        let result = if self.fail_references {
            Err(HostError::new(HostOperation::References, "server crashed"))
        } else {
            Ok(vec![at(6, 2), at(0, 0), at(5, 2)])
        };
        ready(result)
    }

    fn document_symbols(
        &self,
        _uri: &Uri,
    ) -> impl Future<Output = Result<Vec<DocumentSymbol>, HostError>> {
        ready(Ok(vec![function("helper", span(0, 2)), function("main", span(4, 8))]))
    }
}

fn scope(fail_references: bool) -> ReferenceCallScope<FixedHost> {
    ReferenceCallScope::new(FixedHost { fail_references })
}

#[tokio::test]
async fn prepared_items_carry_the_outline_symbol() {
    let item = scope(false)
        .prepare_call_hierarchy(&uri(), Position::new(5, 4))
        .await
        .expect("prepare")
        .expect("item");

    assert_eq!(item.name, "helper");
    assert_eq!(item.detail.as_deref(), Some("lib"));
    assert_eq!(item.range, span(0, 2));
}

#[tokio::test]
async fn incoming_calls_merge_sites_per_caller() {
    let service = scope(false);
    let item = service
        .prepare_call_hierarchy(&uri(), Position::new(5, 4))
        .await
        .expect("prepare")
        .expect("item");

    let calls = service.incoming_calls(&item).await.expect("incoming");

    let [call] = calls.as_slice() else {
        panic!("expected one caller, got {calls:?}");
    };
    assert_eq!(call.from.name, "main");
    assert_eq!(call.from_ranges, [at(5, 2).range, at(6, 2).range]);
    assert!(service.outgoing_calls(&item).is_empty());
}

#[tokio::test]
async fn host_failures_surface_as_graph_errors() {
    let service = scope(true);
    let item = service
        .prepare_call_hierarchy(&uri(), Position::new(0, 0))
        .await
        .expect("prepare")
        .expect("item");

    let result = service.incoming_calls(&item).await;

    assert!(matches!(
        result,
        Err(ServiceError::Graph(GraphError::Host(ref error)))
            if error.operation() == HostOperation::References
    ));
}

#[tokio::test]
async fn callers_graph_uses_references() {
    let service = scope(false);
    let document = DocumentSnapshot::new(uri(), "typescript", 1, "").into_shared();

    let graph = service
        .callers_graph(&document, Position::new(0, 0), 1)
        .await
        .expect("graph");

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}
