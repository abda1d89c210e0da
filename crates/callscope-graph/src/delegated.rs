//! Call hierarchy built on host navigation queries.
//!
//! Incoming calls are derived in four steps: references to the anchor are
//! grouped per file and sorted by position, each reference is mapped to the
//! innermost outline symbol containing it, runs of consecutive references
//! from the same symbol are merged, and the anchor's own references to
//! itself are dropped.

use callscope_host::{NavigationHost, SharedDocument};
use lsp_types::{DocumentSymbol, Location, Position, Range, SymbolKind as LspSymbolKind, Uri};
use tracing::debug;

use crate::edge::EdgeSource;
use crate::engine::{CallHierarchyEngine, IncomingCall, OutgoingCall};
use crate::error::GraphError;
use crate::node::{CallNode, SymbolKind};

/// An outline symbol paired with the document it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSymbol {
    uri: Uri,
    symbol: DocumentSymbol,
}

impl ResolvedSymbol {
    /// Pairs `symbol` with the document identified by `uri`.
    #[must_use]
    pub const fn new(uri: Uri, symbol: DocumentSymbol) -> Self {
        Self { uri, symbol }
    }

    /// Document containing the symbol.
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The outline entry itself.
    #[must_use]
    pub const fn symbol(&self) -> &DocumentSymbol {
        &self.symbol
    }

    /// Symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.symbol.name
    }

    /// Range covering the whole symbol.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.symbol.range
    }

    /// Range covering the symbol's name.
    #[must_use]
    pub const fn selection_range(&self) -> Range {
        self.symbol.selection_range
    }
}

/// References to the anchor that live in one file.
struct ReferenceGroup {
    uri: Uri,
    locations: Vec<Location>,
}

/// Engine that derives calls from a host's definition, reference and
/// outline queries.
///
/// Only incoming calls are supported; outgoing calls are always empty.
#[derive(Debug, Clone)]
pub struct DelegatedEngine<H> {
    host: H,
}

impl<H> DelegatedEngine<H> {
    /// Creates an engine that queries `host`.
    #[must_use]
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns the navigation host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Outgoing calls are not derived from references.
    #[must_use]
    pub const fn outgoing_calls(
        &self,
        _anchor: &ResolvedSymbol,
    ) -> Vec<OutgoingCall<ResolvedSymbol>> {
        Vec::new()
    }
}

impl<H: NavigationHost> DelegatedEngine<H> {
    /// Resolves the symbol defined at the first definition of the word under
    /// `position`.
    ///
    /// # Errors
    /// Returns an error when the definition or outline query fails.
    pub async fn prepare(
        &self,
        uri: &Uri,
        position: Position,
    ) -> Result<Option<ResolvedSymbol>, GraphError> {
        let definitions = self.host.definitions(uri, position).await?;
        let Some(definition) = definitions.into_iter().next() else {
            debug!(uri = uri.as_str(), line = position.line, "no definition found");
            return Ok(None);
        };
        self.symbol_at(&definition.uri, definition.range.start).await
    }

    /// Innermost non-variable outline symbol of `uri` containing `position`.
    ///
    /// # Errors
    /// Returns an error when the outline query fails.
    pub async fn symbol_at(
        &self,
        uri: &Uri,
        position: Position,
    ) -> Result<Option<ResolvedSymbol>, GraphError> {
        let outline = self.host.document_symbols(uri).await?;
        let found = enclosing_symbol(&outline, position, None).cloned();
        if found.is_none() {
            debug!(
                uri = uri.as_str(),
                line = position.line,
                character = position.character,
                "no enclosing symbol"
            );
        }
        Ok(found.map(|symbol| ResolvedSymbol::new(uri.clone(), symbol)))
    }

    /// Symbols that reference `anchor`, one entry per run of consecutive
    /// references from the same symbol.
    ///
    /// References are visited file by file, in order of each file's first
    /// appearance in the host's answer, and by position within a file.
    /// References outside any symbol are skipped. Merging compares symbol
    /// ranges only, so runs are merged across files when ranges coincide.
    ///
    /// # Errors
    /// Returns an error when the reference query or any outline query fails.
    pub async fn incoming_calls(
        &self,
        anchor: &ResolvedSymbol,
    ) -> Result<Vec<IncomingCall<ResolvedSymbol>>, GraphError> {
        let references = self
            .host
            .references(anchor.uri(), anchor.selection_range().start)
            .await?;
        if references.is_empty() {
            debug!(anchor = anchor.name(), "no references found");
            return Ok(Vec::new());
        }

        let mut resolved = Vec::with_capacity(references.len());
        for group in group_by_file(references) {
            for location in group.locations {
                if let Some(from) = self.symbol_at(&group.uri, location.range.start).await? {
                    resolved.push(IncomingCall {
                        from,
                        sites: vec![location],
                    });
                }
            }
        }

        let resolved_count = resolved.len();
        let calls: Vec<_> = compact(resolved)
            .into_iter()
            .filter(|call| call.from.range() != anchor.range())
            .collect();
        debug!(
            anchor = anchor.name(),
            resolved = resolved_count,
            calls = calls.len(),
            "incoming calls"
        );
        Ok(calls)
    }
}

impl<H: NavigationHost> CallHierarchyEngine for DelegatedEngine<H> {
    type Item = ResolvedSymbol;

    const SOURCE: EdgeSource = EdgeSource::References;

    async fn prepare(
        &self,
        document: &SharedDocument,
        position: Position,
    ) -> Result<Option<ResolvedSymbol>, GraphError> {
        Self::prepare(self, document.uri(), position).await
    }

    async fn incoming_calls(
        &self,
        item: &ResolvedSymbol,
    ) -> Result<Vec<IncomingCall<ResolvedSymbol>>, GraphError> {
        Self::incoming_calls(self, item).await
    }

    async fn outgoing_calls(
        &self,
        item: &ResolvedSymbol,
    ) -> Result<Vec<OutgoingCall<ResolvedSymbol>>, GraphError> {
        Ok(Self::outgoing_calls(self, item))
    }

    fn node(&self, item: &ResolvedSymbol) -> CallNode {
        let mut node = CallNode::new(
            item.name(),
            SymbolKind::from_lsp(item.symbol.kind),
            item.uri.clone(),
            item.range(),
            item.selection_range(),
        );
        if let Some(detail) = &item.symbol.detail {
            node = node.with_container(detail.clone());
        }
        node
    }
}

/// Groups references by file, keeping first-seen file order and sorting each
/// group by start position.
fn group_by_file(references: Vec<Location>) -> Vec<ReferenceGroup> {
    let mut groups: Vec<ReferenceGroup> = Vec::new();
    for location in references {
        match groups.iter_mut().find(|group| group.uri == location.uri) {
            Some(group) => group.locations.push(location),
            None => groups.push(ReferenceGroup {
                uri: location.uri.clone(),
                locations: vec![location],
            }),
        }
    }
    for group in &mut groups {
        group
            .locations
            .sort_by_key(|location| (location.range.start.line, location.range.start.character));
    }
    groups
}

/// Merges each entry into the previously kept one when their symbol ranges
/// are equal.
fn compact(entries: Vec<IncomingCall<ResolvedSymbol>>) -> Vec<IncomingCall<ResolvedSymbol>> {
    let mut kept: Vec<IncomingCall<ResolvedSymbol>> = Vec::with_capacity(entries.len());
    for entry in entries {
        match kept.last_mut() {
            Some(last) if last.from.range() == entry.from.range() => {
                last.sites.extend(entry.sites);
            }
            _ => kept.push(entry),
        }
    }
    kept
}

/// Walks the outline depth-first for the innermost symbol containing
/// `position`.
///
/// Variables never match. A containing symbol replaces the current best only
/// when it nests inside it, and its children are searched with it as the new
/// best.
fn enclosing_symbol<'a>(
    symbols: &'a [DocumentSymbol],
    position: Position,
    best: Option<&'a DocumentSymbol>,
) -> Option<&'a DocumentSymbol> {
    let mut current = best;
    for symbol in symbols {
        if symbol.kind == LspSymbolKind::VARIABLE || !contains_position(symbol.range, position) {
            continue;
        }
        if current.is_none_or(|outer| contains_range(outer.range, symbol.range)) {
            let children = symbol.children.as_deref().unwrap_or_default();
            current = enclosing_symbol(children, position, Some(symbol));
        }
    }
    current
}

const fn contains_position(range: Range, position: Position) -> bool {
    is_before_or_at(range.start, position) && is_before_or_at(position, range.end)
}

const fn contains_range(outer: Range, inner: Range) -> bool {
    contains_position(outer, inner.start) && contains_position(outer, inner.end)
}

const fn is_before_or_at(left: Position, right: Position) -> bool {
    left.line < right.line || (left.line == right.line && left.character <= right.character)
}
