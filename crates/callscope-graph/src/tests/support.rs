//! Shared fixtures for call hierarchy tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::{Future, ready};
use std::str::FromStr;
use std::sync::Arc;

use callscope_host::{
    DocumentSnapshot, HostError, HostOperation, NavigationHost, SharedDocument,
};
use callscope_syntax::{Parser, SyntaxIndex};
use lsp_types::{DocumentSymbol, Location, Position, Range, SymbolKind, Uri};

use crate::ResolvedSymbol;

pub(super) const CALLER_AND_CALLEE: &str = "func a {\n  b\n}\nfunc b {\n}\n";

pub(super) fn uri(name: &str) -> Uri {
    Uri::from_str(&format!("file:///work/{name}")).expect("valid URI")
}

pub(super) fn document(name: &str, text: &str) -> SharedDocument {
    DocumentSnapshot::new(uri(name), "abc", 1, text).into_shared()
}

/// Index holding one parsed document per `(name, text)` pair, in order.
pub(super) fn indexed(documents: &[(&str, &str)]) -> Arc<SyntaxIndex> {
    let index = SyntaxIndex::new(Parser::new("func").expect("valid keyword"));
    for (name, text) in documents {
        index.ensure_tree(&document(name, text));
    }
    Arc::new(index)
}

pub(super) fn range(start_line: u32, start: u32, end_line: u32, end: u32) -> Range {
    Range::new(
        Position::new(start_line, start),
        Position::new(end_line, end),
    )
}

pub(super) fn location(name: &str, line: u32, character: u32) -> Location {
    Location::new(
        uri(name),
        range(line, character, line, character.saturating_add(1)),
    )
}

#[expect(deprecated, reason = "DocumentSymbol::deprecated must still be initialised")]
pub(super) fn symbol(name: &str, kind: SymbolKind, full: Range) -> DocumentSymbol {
    DocumentSymbol {
        name: name.to_owned(),
        detail: None,
        kind,
        tags: None,
        deprecated: None,
        range: full,
        selection_range: Range::new(full.start, full.start),
        children: None,
    }
}

pub(super) fn with_children(
    mut parent: DocumentSymbol,
    children: Vec<DocumentSymbol>,
) -> DocumentSymbol {
    parent.children = Some(children);
    parent
}

pub(super) fn resolved(file: &str, symbol: DocumentSymbol) -> ResolvedSymbol {
    ResolvedSymbol::new(uri(file), symbol)
}

/// Navigation host answering from fixed tables.
///
/// Outline queries for unknown files return an empty outline. Every query is
/// recorded so tests can assert on the order in which the engine asked.
#[derive(Debug, Default)]
pub(super) struct ScriptedHost {
    pub(super) definitions: Vec<Location>,
    pub(super) references: Vec<Location>,
    pub(super) outlines: HashMap<String, Vec<DocumentSymbol>>,
    pub(super) failing: Option<HostOperation>,
    pub(super) queries: RefCell<Vec<String>>,
}

impl ScriptedHost {
    pub(super) fn with_outline(mut self, file: &str, symbols: Vec<DocumentSymbol>) -> Self {
        self.outlines.insert(uri(file).as_str().to_owned(), symbols);
        self
    }

    pub(super) fn with_references(mut self, references: Vec<Location>) -> Self {
        self.references = references;
        self
    }

    pub(super) fn with_definitions(mut self, definitions: Vec<Location>) -> Self {
        self.definitions = definitions;
        self
    }

    pub(super) fn failing_on(mut self, operation: HostOperation) -> Self {
        self.failing = Some(operation);
        self
    }

    fn answer<T>(&self, operation: HostOperation, uri: &Uri, value: T) -> Result<T, HostError> {
        self.queries
            .borrow_mut()
            .push(format!("{operation} {}", uri.as_str()));
        if self.failing == Some(operation) {
            return Err(HostError::new(operation, "scripted failure"));
        }
        Ok(value)
    }
}

impl NavigationHost for ScriptedHost {
    fn definitions(
        &self,
        uri: &Uri,
        _position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>> {
        ready(self.answer(HostOperation::Definition, uri, self.definitions.clone()))
    }

    fn references(
        &self,
        uri: &Uri,
        _position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>> {
        ready(self.answer(HostOperation::References, uri, self.references.clone()))
    }

    fn document_symbols(
        &self,
        uri: &Uri,
    ) -> impl Future<Output = Result<Vec<DocumentSymbol>, HostError>> {
        let outline = self.outlines.get(uri.as_str()).cloned().unwrap_or_default();
        ready(self.answer(HostOperation::DocumentSymbols, uri, outline))
    }
}

/// Drives a future to completion on a single-threaded runtime.
pub(super) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}
