//! Conversions between engine results and LSP call hierarchy payloads.

use callscope_graph::{IncomingCall, OutgoingCall, ResolvedSymbol};
use callscope_syntax::Declaration;
use lsp_types::{
    CallHierarchyIncomingCall, CallHierarchyItem, CallHierarchyOutgoingCall, DocumentSymbol,
    Location, Range, SymbolKind,
};

pub(crate) fn declaration_item(declaration: &Declaration) -> CallHierarchyItem {
    CallHierarchyItem {
        name: declaration.name().to_owned(),
        kind: SymbolKind::FUNCTION,
        tags: None,
        detail: None,
        uri: declaration.uri().clone(),
        range: declaration.full_range(),
        selection_range: declaration.name_range(),
        data: None,
    }
}

pub(crate) fn symbol_item(resolved: &ResolvedSymbol) -> CallHierarchyItem {
    let symbol = resolved.symbol();
    CallHierarchyItem {
        name: symbol.name.clone(),
        kind: symbol.kind,
        tags: symbol.tags.clone(),
        detail: symbol.detail.clone(),
        uri: resolved.uri().clone(),
        range: symbol.range,
        selection_range: symbol.selection_range,
        data: None,
    }
}

/// Rebuilds the outline symbol an item was produced from. Children are not
/// carried by items and come back empty.
#[expect(
    deprecated,
    reason = "DocumentSymbol::deprecated has to be initialised even though it is deprecated"
)]
pub(crate) fn item_symbol(item: &CallHierarchyItem) -> ResolvedSymbol {
    ResolvedSymbol::new(
        item.uri.clone(),
        DocumentSymbol {
            name: item.name.clone(),
            detail: item.detail.clone(),
            kind: item.kind,
            tags: item.tags.clone(),
            deprecated: None,
            range: item.range,
            selection_range: item.selection_range,
            children: None,
        },
    )
}

pub(crate) fn incoming<T>(
    call: IncomingCall<T>,
    item: impl FnOnce(&T) -> CallHierarchyItem,
) -> CallHierarchyIncomingCall {
    CallHierarchyIncomingCall {
        from: item(&call.from),
        from_ranges: ranges(call.sites),
    }
}

pub(crate) fn outgoing<T>(
    call: OutgoingCall<T>,
    item: impl FnOnce(&T) -> CallHierarchyItem,
) -> CallHierarchyOutgoingCall {
    CallHierarchyOutgoingCall {
        to: item(&call.to),
        from_ranges: ranges(call.sites),
    }
}

fn ranges(sites: Vec<Location>) -> Vec<Range> {
    sites.into_iter().map(|site| site.range).collect()
}
